//! The `ExecEngine` and its tick loop.

use std::collections::HashSet;

use fleet_core::{ExecConfig, ExecMode, Location, PackageId, RobotId, Tick};
use fleet_grid::Grid;
use fleet_plan::{Action, RobotQueues};
use fleet_world::{Package, Robot};

use crate::{
    DeferReason, Deferral, ExecObserver, ExecutionReport, FailureKind, OccupancySet,
    PreconditionFailure, RunStatus, TickRecord,
};

/// A `Move` that passed static screening, awaiting conflict resolution.
#[derive(Copy, Clone)]
struct MoveCand {
    robot: RobotId,
    from: Location,
    to: Location,
    action: Action,
}

/// The execution engine.
///
/// Owns the world exclusively for the duration of a run: the grid is
/// read-only, robots/packages/occupancy are mutated only inside
/// [`ExecEngine::step`], and a tick is computed to completion before the next
/// begins — no partial-tick state is ever observable from outside.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
#[derive(Debug)]
pub struct ExecEngine {
    /// Per-run configuration (mode, path policy, tick and stall budgets).
    pub config: ExecConfig,

    /// The static map.  Never mutated during execution.
    pub grid: Grid,

    /// Robot state, indexed by `RobotId`.
    pub robots: Vec<Robot>,

    /// Package state, indexed by `PackageId`.
    pub packages: Vec<Package>,

    /// Pending actions; popped only here.
    pub queues: RobotQueues,

    /// Cell → robot mapping, injective at every tick boundary.
    pub occupancy: OccupancySet,

    tick: Tick,
    stall: u32,
    seq_cursor: usize,
    failures_total: usize,
}

impl ExecEngine {
    pub(crate) fn assemble(
        config: ExecConfig,
        grid: Grid,
        robots: Vec<Robot>,
        packages: Vec<Package>,
        queues: RobotQueues,
    ) -> Self {
        let occupancy = OccupancySet::from_robots(&robots);
        Self {
            config,
            grid,
            robots,
            packages,
            queues,
            occupancy,
            tick: Tick::ZERO,
            stall: 0,
            seq_cursor: 0,
            failures_total: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// The tick the next `step` would execute.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// `true` once there is nothing left to execute.
    pub fn is_finished(&self) -> bool {
        match self.config.mode {
            ExecMode::Sequential => self.seq_cursor >= self.queues.sequence().len(),
            ExecMode::Parallel => self.queues.is_drained(),
        }
    }

    /// Execute one tick (parallel mode) or one plan action (sequential
    /// mode); `None` once finished.
    ///
    /// This is the cooperative cancellation point: a caller driving the
    /// engine manually (e.g. a GUI reset) may simply stop calling `step`,
    /// keeping whatever the last full tick committed.
    pub fn step(&mut self) -> Option<TickRecord> {
        if self.is_finished() {
            return None;
        }
        Some(self.advance())
    }

    /// Drive the engine to termination and return the full report.
    ///
    /// Terminates when every queue drains, when `stall_limit` consecutive
    /// ticks commit nothing and pop nothing (deadlock), or when the
    /// `max_ticks` budget expires with work still pending.
    pub fn run<O: ExecObserver>(&mut self, observer: &mut O) -> ExecutionReport {
        let mut ticks: Vec<TickRecord> = Vec::new();

        let status = loop {
            if self.is_finished() {
                break if self.failures_total > 0 {
                    RunStatus::Partial
                } else {
                    RunStatus::Completed
                };
            }
            if self.config.mode == ExecMode::Parallel && self.tick.0 >= self.config.max_ticks {
                // Budget exhausted while still progressing.
                break RunStatus::Partial;
            }

            observer.on_tick_start(self.tick);
            let record = self.advance();
            observer.on_tick_end(record.tick, &record);

            let progressed = record.made_progress();
            ticks.push(record);

            if self.config.mode == ExecMode::Parallel {
                if progressed {
                    self.stall = 0;
                } else {
                    self.stall += 1;
                    if self.stall >= self.config.stall_limit {
                        break RunStatus::Deadlock;
                    }
                }
            }
        };

        let report = ExecutionReport { ticks, status, final_tick: self.tick };
        observer.on_run_end(&report);
        report
    }

    // ── Tick dispatch ─────────────────────────────────────────────────────

    fn advance(&mut self) -> TickRecord {
        let record = match self.config.mode {
            ExecMode::Sequential => self.step_sequential(),
            ExecMode::Parallel => self.step_parallel(),
        };
        self.failures_total += record.failures.len();
        self.tick = self.tick + 1;
        record
    }

    /// One action from the flat sequence, in plan order.
    fn step_sequential(&mut self) -> TickRecord {
        let mut record = TickRecord::new(self.tick);
        let action = self.queues.sequence()[self.seq_cursor];
        self.seq_cursor += 1;

        let verdict = match action {
            Action::Move { robot, from, to } => self.screen_move(robot, from, to).and_then(|()| {
                // No same-tick vacancies in sequential mode: any occupant
                // blocks outright.
                match self.occupancy.occupant(to) {
                    Some(by) => Err(FailureKind::CellOccupied { by }),
                    None => Ok(()),
                }
            }),
            Action::Pickup { robot, package, at } => self.validate_pickup(robot, package, at),
            Action::Drop { robot, package, at } => self.validate_drop(robot, package, at),
        };

        match verdict {
            Ok(()) => {
                self.apply(action);
                record.committed.push(action);
            }
            Err(kind) => record.failures.push(PreconditionFailure { action, kind }),
        }
        record
    }

    /// One synchronized tick: peek, screen, resolve conflicts, commit batch.
    fn step_parallel(&mut self) -> TickRecord {
        let mut record = TickRecord::new(self.tick);
        let mut moves: Vec<MoveCand> = Vec::new();
        let mut lifts: Vec<Action> = Vec::new();

        // ── Peek and screen, ascending robot id ───────────────────────────
        //
        // Everything below validates against pre-tick state only; mutation
        // starts at the commit batch.
        for (rid, action) in self.queues.heads() {
            let verdict = match action {
                Action::Move { robot, from, to } => {
                    match self.screen_move(robot, from, to) {
                        Ok(()) => {
                            moves.push(MoveCand { robot, from, to, action });
                            continue;
                        }
                        Err(kind) => Err(kind),
                    }
                }
                Action::Pickup { robot, package, at } => self.validate_pickup(robot, package, at),
                Action::Drop { robot, package, at } => self.validate_drop(robot, package, at),
            };
            match verdict {
                Ok(()) => lifts.push(action),
                Err(kind) => {
                    // A doomed action must not stall the run: record it and
                    // drop it from the queue.
                    self.queues.pop(rid);
                    record.failures.push(PreconditionFailure { action, kind });
                }
            }
        }

        // ── Same-target contention: lowest robot id wins the cell ─────────
        let mut claimed: HashSet<Location> = HashSet::new();
        moves.retain(|m| {
            claimed.insert(m.to) || {
                record.deferred.push(Deferral {
                    action: m.action,
                    reason: DeferReason::CellContention,
                });
                false
            }
        });

        // ── Swaps: never executed, both parties deferred ──────────────────
        let legs: HashSet<(Location, Location)> = moves.iter().map(|m| (m.from, m.to)).collect();
        moves.retain(|m| {
            if legs.contains(&(m.to, m.from)) {
                record.deferred.push(Deferral {
                    action: m.action,
                    reason: DeferReason::SwapAvoided,
                });
                false
            } else {
                true
            }
        });

        // ── Occupied targets, accounting for same-tick vacancies ──────────
        //
        // A target counts as free if its occupant commits a move this tick.
        // Deferring one move strands every robot queued up behind it, so
        // iterate until no further move drops out.  Rotations (three or more
        // robots all vacating simultaneously) survive and commit.
        let mut moving: HashSet<RobotId> = moves.iter().map(|m| m.robot).collect();
        loop {
            let mut dropped = false;
            moves.retain(|m| match self.occupancy.occupant(m.to) {
                Some(occ) if !moving.contains(&occ) => {
                    moving.remove(&m.robot);
                    record.deferred.push(Deferral {
                        action: m.action,
                        reason: DeferReason::CellContention,
                    });
                    dropped = true;
                    false
                }
                _ => true,
            });
            if !dropped {
                break;
            }
        }

        // ── Commit batch ──────────────────────────────────────────────────
        //
        // Vacate every origin before claiming any target so that chains and
        // rotations never transit through a doubly-claimed cell.
        for m in &moves {
            self.occupancy.vacate(m.from);
        }
        for m in &moves {
            self.occupancy.occupy(m.to, m.robot);
            self.robots[m.robot.index()].location = m.to;
            self.queues.pop(m.robot);
            record.committed.push(m.action);
        }
        for action in lifts {
            self.apply(action);
            self.queues.pop(action.robot());
            record.committed.push(action);
        }

        debug_assert_eq!(self.occupancy.len(), self.robots.len());
        record
    }

    // ── Precondition guards ───────────────────────────────────────────────

    fn screen_move(&self, robot: RobotId, from: Location, to: Location) -> Result<(), FailureKind> {
        let actual = self.robots[robot.index()].location;
        if actual != from {
            return Err(FailureKind::RobotNotAtCell { expected: from, actual });
        }
        if !self.grid.is_free(to) {
            return Err(FailureKind::MoveBlocked(to));
        }
        if !from.is_adjacent(to) {
            return Err(FailureKind::MoveNotAdjacent { from, to });
        }
        Ok(())
    }

    fn validate_pickup(
        &self,
        robot: RobotId,
        package: PackageId,
        at: Location,
    ) -> Result<(), FailureKind> {
        let r = &self.robots[robot.index()];
        if r.location != at {
            return Err(FailureKind::RobotNotAtCell { expected: at, actual: r.location });
        }
        if let Some(carrying) = r.carrying {
            return Err(FailureKind::RobotNotFree { carrying });
        }
        if self.packages[package.index()].location != Some(at) {
            return Err(FailureKind::PackageNotAtCell { package, at });
        }
        Ok(())
    }

    fn validate_drop(
        &self,
        robot: RobotId,
        package: PackageId,
        at: Location,
    ) -> Result<(), FailureKind> {
        let r = &self.robots[robot.index()];
        if r.location != at {
            return Err(FailureKind::RobotNotAtCell { expected: at, actual: r.location });
        }
        if r.carrying != Some(package) {
            return Err(FailureKind::NotCarrying { package });
        }
        Ok(())
    }

    // ── State mutation ────────────────────────────────────────────────────

    /// Apply one validated action.  Parallel move batches bypass this (they
    /// need vacate-all-then-occupy-all ordering); everything else funnels
    /// through here.
    fn apply(&mut self, action: Action) {
        match action {
            Action::Move { robot, from, to } => {
                self.occupancy.vacate(from);
                self.occupancy.occupy(to, robot);
                self.robots[robot.index()].location = to;
            }
            Action::Pickup { robot, package, .. } => {
                self.robots[robot.index()].carrying = Some(package);
                let p = &mut self.packages[package.index()];
                p.location = None;
                p.carrier = Some(robot);
            }
            Action::Drop { robot, package, at } => {
                self.robots[robot.index()].carrying = None;
                let p = &mut self.packages[package.index()];
                p.carrier = None;
                p.location = Some(at);
                p.delivered = at == p.destination;
            }
        }
    }
}
