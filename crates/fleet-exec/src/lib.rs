//! `fleet-exec` — the plan execution scheduler.
//!
//! # One parallel tick
//!
//! ```text
//! ① Peek      — head action of every non-empty robot queue.
//! ② Screen    — static preconditions (right cell, free gripper, package
//!               present, target on the grid).  Failures are recorded and
//!               popped.
//! ③ Resolve   — same-target contention (lowest RobotId wins), two-robot
//!               swaps (both deferred), occupied targets with vacancy
//!               accounting (a deferral can cascade).
//! ④ Commit    — all survivors as one atomic batch: robot, package, and
//!               occupancy state update together; committed heads are
//!               popped, deferred heads stay for the next tick.
//! ⑤ Advance   — stop when all queues drain, after `stall_limit` ticks
//!               without progress (deadlock), or at the tick budget.
//! ```
//!
//! "Parallel" is logical same-tick concurrency: everything above runs on one
//! thread, and tick *i* is fully committed before tick *i + 1* is validated.
//! The engine always produces a complete [`ExecutionReport`]; deadlock is a
//! status in the report, never a discarded run.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                        |
//! |-----------|-----------------------------------------------|
//! | `fx-hash` | FxHash for the occupancy map.                 |
//! | `serde`   | Serializable reports, actions, world state.   |

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod report;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::EngineBuilder;
pub use engine::ExecEngine;
pub use error::{ExecError, ExecResult};
pub use observer::{ExecObserver, NoopObserver};
pub use occupancy::OccupancySet;
pub use report::{
    DeferReason, Deferral, ExecutionReport, FailureKind, PreconditionFailure, RunStatus,
    TickRecord,
};
