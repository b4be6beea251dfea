//! Structured run reporting.
//!
//! The engine never returns a bare error for runtime conditions: every tick's
//! commits, deferrals, and precondition failures are recorded here, and the
//! final [`RunStatus`] says how the run ended.  The GUI/logging collaborator
//! consumes this; nothing is dropped on failure.

use fleet_core::{Location, PackageId, RobotId, Tick};
use fleet_plan::Action;

// ── Deferrals ─────────────────────────────────────────────────────────────────

/// Why a head action was left queued for the next tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeferReason {
    /// The target cell is (or stays) claimed by another robot this tick.
    CellContention,
    /// Two robots tried to exchange cells in one tick; neither moves.
    SwapAvoided,
}

/// One deferred action.  Deferrals are not failures — the action is retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deferral {
    pub action: Action,
    pub reason: DeferReason,
}

// ── Precondition failures ─────────────────────────────────────────────────────

/// Which guard an action failed at apply time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureKind {
    /// The acting robot is not where the action says it should be.
    RobotNotAtCell { expected: Location, actual: Location },
    /// Move target is off the grid or an obstacle.
    MoveBlocked(Location),
    /// Move endpoints are not 4-adjacent.
    MoveNotAdjacent { from: Location, to: Location },
    /// Sequential mode: the target cell is occupied.
    CellOccupied { by: RobotId },
    /// Pickup by a robot whose gripper is full.
    RobotNotFree { carrying: PackageId },
    /// The package is not on the ground at the pickup cell.
    PackageNotAtCell { package: PackageId, at: Location },
    /// Drop of a package the robot is not carrying.
    NotCarrying { package: PackageId },
}

/// A recorded, non-fatal guard violation.  Execution continues; the final
/// state may not satisfy the goal, which the report surfaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreconditionFailure {
    pub action: Action,
    pub kind: FailureKind,
}

// ── Per-tick record ───────────────────────────────────────────────────────────

/// Everything that happened in one tick (or, sequentially, one action slot).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRecord {
    pub tick: Tick,
    pub committed: Vec<Action>,
    pub deferred: Vec<Deferral>,
    pub failures: Vec<PreconditionFailure>,
}

impl TickRecord {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Default::default() }
    }

    /// `true` when this tick shortened some queue (commit or recorded
    /// failure).  Deferral-only ticks make no progress.
    pub fn made_progress(&self) -> bool {
        !self.committed.is_empty() || !self.failures.is_empty()
    }
}

// ── Run-level report ──────────────────────────────────────────────────────────

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// Every queue drained with no precondition failures.
    Completed,
    /// Queues drained but some actions failed, or the tick budget ran out
    /// while the run was still progressing.
    Partial,
    /// `stall_limit` consecutive ticks without progress.
    Deadlock,
}

/// The full history of one execution run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionReport {
    pub ticks: Vec<TickRecord>,
    pub status: RunStatus,
    /// The tick at which the run stopped.
    pub final_tick: Tick,
}

impl ExecutionReport {
    pub fn committed_count(&self) -> usize {
        self.ticks.iter().map(|t| t.committed.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.ticks.iter().map(|t| t.failures.len()).sum()
    }

    pub fn deferral_count(&self) -> usize {
        self.ticks.iter().map(|t| t.deferred.len()).sum()
    }

    /// All deferrals with the given reason, across the whole run.
    pub fn deferrals_with(&self, reason: DeferReason) -> Vec<&Deferral> {
        self.ticks
            .iter()
            .flat_map(|t| t.deferred.iter())
            .filter(|d| d.reason == reason)
            .collect()
    }
}
