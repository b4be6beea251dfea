//! Per-run execution configuration.
//!
//! Every knob is an explicit value passed into a run.  In particular the
//! path-synthesis choice is [`PathPolicy`], a per-run parameter — there is no
//! global flag, so repeated or interleaved runs cannot interfere with one
//! another.

use crate::{CoreError, CoreResult};

// ── ExecMode ──────────────────────────────────────────────────────────────────

/// How the engine consumes actions.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecMode {
    /// One action at a time, in plan order.  A failed precondition is
    /// recorded and the next action is tried.
    Sequential,
    /// Every robot advances its own queue each tick, with conflict
    /// resolution before commit.
    #[default]
    Parallel,
}

// ── PathPolicy ────────────────────────────────────────────────────────────────

/// Where move actions come from.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathPolicy {
    /// Execute exactly the moves the external planner produced.
    #[default]
    FollowPlan,
    /// Discard planner moves and resynthesize them with BFS between each
    /// robot's assigned pickup and drop points.
    ShortestPath,
}

// ── ExecConfig ────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecConfig {
    pub mode: ExecMode,
    pub path_policy: PathPolicy,

    /// Overall tick budget for a parallel run.  A run that is still making
    /// progress when the budget expires ends with a partial report.
    pub max_ticks: u64,

    /// Consecutive zero-commit ticks before the run is declared deadlocked.
    pub stall_limit: u32,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            mode:        ExecMode::Parallel,
            path_policy: PathPolicy::FollowPlan,
            max_ticks:   1_000,
            stall_limit: 10,
        }
    }
}

impl ExecConfig {
    /// Reject configurations that could never terminate meaningfully.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_ticks == 0 {
            return Err(CoreError::Config("max_ticks must be at least 1".into()));
        }
        if self.stall_limit == 0 {
            return Err(CoreError::Config("stall_limit must be at least 1".into()));
        }
        Ok(())
    }
}
