//! `fleet-plan` — from planner text to per-robot action queues.
//!
//! # Pipeline
//!
//! ```text
//! raw plan text ──parse_plan──▶ ParsedPlan ──RobotQueues::from_plan──▶ queues
//!                                  │
//! scenario assignments ──RobotQueues::shortest_path──▶ queues (BFS moves)
//! ```
//!
//! Parsing is tolerant: a malformed line becomes a [`ParseIssue`] and is
//! skipped, so a plan with trailing garbage still runs.  Only input with zero
//! valid actions escalates to an error.

pub mod action;
pub mod error;
pub mod parser;
pub mod queue;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use error::{PlanError, PlanResult};
pub use parser::{parse_plan, IssueKind, ParseIssue, ParsedPlan};
pub use queue::RobotQueues;
