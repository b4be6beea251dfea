//! Parser for external planner output.
//!
//! # Line grammar
//!
//! ```text
//! ; anything            — comment, skipped
//! 3: (move r0 zone_0_0 zone_0_1)
//! (pickup r0 p1 zone_0_1)
//! (drop r0 p1 zone_4_4)
//! ```
//!
//! The leading `N:` step index is optional (some planners group same-step
//! actions under one index) and is not needed beyond line order, so it is
//! validated and discarded.  Symbols are resolved through the scenario's
//! [`SymbolTable`]; the parser never derives a coordinate from a zone name
//! itself.
//!
//! A line that does not parse becomes a [`ParseIssue`] and is skipped, so a
//! plan whose tail is garbage still yields its valid prefix.  Issues are
//! accumulated across the whole pass and returned alongside the actions.

use std::fmt;

use fleet_world::SymbolTable;

use crate::{Action, PlanError, PlanResult};

// ── Parse issues ──────────────────────────────────────────────────────────────

/// Why one line was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueKind {
    /// Not of the form `(name arg …)`.
    Malformed,
    /// Action name other than `move` / `pickup` / `drop`.
    UnknownAction(String),
    WrongArity {
        action: &'static str,
        expected: usize,
        got: usize,
    },
    /// A robot/package/location symbol absent from the name table.
    /// Fatal to this action only.
    UnknownSymbol(String),
}

/// One rejected line, with enough context to report it usefully.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseIssue {
    /// 1-based line number in the input.
    pub line: usize,
    pub text: String,
    pub kind: IssueKind,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?} ({:?})", self.line, self.text, self.kind)
    }
}

// ── Parsed plan ───────────────────────────────────────────────────────────────

/// The result of one parsing pass: the valid actions in input order plus
/// every line that was skipped.
#[derive(Clone, Debug, Default)]
pub struct ParsedPlan {
    pub actions: Vec<Action>,
    pub issues: Vec<ParseIssue>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Parse planner output into a [`ParsedPlan`].
///
/// Errors only when at least one line was present and none of them produced
/// an action; empty input is an empty (valid) plan.
pub fn parse_plan(text: &str, symbols: &SymbolTable) -> PlanResult<ParsedPlan> {
    let mut plan = ParsedPlan::default();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        match parse_line(line, symbols) {
            Ok(action) => plan.actions.push(action),
            Err(kind) => plan.issues.push(ParseIssue {
                line: line_no,
                text: line.to_owned(),
                kind,
            }),
        }
    }

    if plan.actions.is_empty() && !plan.issues.is_empty() {
        return Err(PlanError::NoValidActions { issues: plan.issues });
    }
    Ok(plan)
}

// ── Line parsing ──────────────────────────────────────────────────────────────

fn parse_line(line: &str, symbols: &SymbolTable) -> Result<Action, IssueKind> {
    // Optional leading step index: "3: (...)".  The prefix must be at least
    // one digit; a bare colon is not a step index.
    let body = match line.split_once(':') {
        Some((prefix, rest))
            if !prefix.trim().is_empty()
                && prefix.trim().chars().all(|c| c.is_ascii_digit()) =>
        {
            rest.trim()
        }
        _ => line,
    };

    let inner = body
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(IssueKind::Malformed)?;

    let mut tokens = inner.split_whitespace();
    let name = tokens.next().ok_or(IssueKind::Malformed)?;
    let args: Vec<&str> = tokens.collect();

    let unknown = |s: &str| IssueKind::UnknownSymbol(s.to_owned());
    let robot = |s: &str| symbols.robot(s).map_err(|_| unknown(s));
    let package = |s: &str| symbols.package(s).map_err(|_| unknown(s));
    let location = |s: &str| symbols.location(s).map_err(|_| unknown(s));

    match name {
        "move" => {
            let [r, from, to] = arity("move", &args)?;
            Ok(Action::Move {
                robot: robot(r)?,
                from: location(from)?,
                to: location(to)?,
            })
        }
        "pickup" => {
            let [r, p, at] = arity("pickup", &args)?;
            Ok(Action::Pickup {
                robot: robot(r)?,
                package: package(p)?,
                at: location(at)?,
            })
        }
        "drop" => {
            let [r, p, at] = arity("drop", &args)?;
            Ok(Action::Drop {
                robot: robot(r)?,
                package: package(p)?,
                at: location(at)?,
            })
        }
        other => Err(IssueKind::UnknownAction(other.to_owned())),
    }
}

/// Check an action's argument count and return the fixed-size view.
fn arity<'a>(action: &'static str, args: &[&'a str]) -> Result<[&'a str; 3], IssueKind> {
    <[&str; 3]>::try_from(args).map_err(|_| IssueKind::WrongArity {
        action,
        expected: 3,
        got: args.len(),
    })
}
