//! Execution observer trait for progress reporting.

use fleet_core::Tick;

use crate::{ExecutionReport, TickRecord};

/// Callbacks invoked by [`ExecEngine::run`][crate::ExecEngine::run] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The GUI collaborator animates from
/// `on_tick_end`; a logger can print the same record.
///
/// # Example — commit printer
///
/// ```rust,ignore
/// struct CommitPrinter;
///
/// impl ExecObserver for CommitPrinter {
///     fn on_tick_end(&mut self, tick: Tick, record: &TickRecord) {
///         for action in &record.committed {
///             println!("{tick}: {action}");
///         }
///     }
/// }
/// ```
pub trait ExecObserver {
    /// Called before a tick is validated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick's batch has been committed.
    fn on_tick_end(&mut self, _tick: Tick, _record: &TickRecord) {}

    /// Called once with the finished report.
    fn on_run_end(&mut self, _report: &ExecutionReport) {}
}

/// An [`ExecObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl ExecObserver for NoopObserver {}
