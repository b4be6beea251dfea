//! Per-robot action queues.
//!
//! A [`RobotQueues`] is created fresh for each execution run and discarded
//! afterwards.  It keeps two views of the same actions: one `VecDeque` per
//! robot (popped head-first by the parallel engine) and the flat sequence
//! (walked in order by the sequential engine).

use std::collections::{HashSet, VecDeque};

use fleet_core::{Location, PackageId, RobotId};
use fleet_grid::{shortest_path, Grid};
use fleet_world::{Package, Robot};

use crate::{Action, PlanError, PlanResult};

/// One pending-action queue per robot, plus the flat sequential order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobotQueues {
    queues: Vec<VecDeque<Action>>,
    sequence: Vec<Action>,
}

impl RobotQueues {
    // ── Construction ──────────────────────────────────────────────────────

    /// Planner-order mode: partition the plan by robot, preserving each
    /// robot's relative order and discarding nothing.  The flat sequence is
    /// the plan itself.
    pub fn from_plan(actions: &[Action], robot_count: usize) -> PlanResult<Self> {
        let mut queues = vec![VecDeque::new(); robot_count];
        for action in actions {
            let robot = action.robot();
            if robot.index() >= robot_count {
                return Err(PlanError::UnknownRobot(robot));
            }
            queues[robot.index()].push_back(*action);
        }
        Ok(Self { queues, sequence: actions.to_vec() })
    }

    /// Shortest-path mode: ignore planner moves and synthesize each robot's
    /// queue from BFS routes between its assigned pickup and drop points.
    ///
    /// Other robots' *starting* cells are treated as blocked for the routing
    /// queries.  The flat sequence is the per-robot concatenation in
    /// assignment order.  Deterministic for an unchanged scenario.
    pub fn shortest_path(
        grid: &Grid,
        robots: &[Robot],
        packages: &[Package],
        assignments: &[(RobotId, PackageId)],
    ) -> PlanResult<Self> {
        let mut queues = vec![VecDeque::new(); robots.len()];

        for &(robot_id, package_id) in assignments {
            let robot = robots
                .get(robot_id.index())
                .ok_or(PlanError::UnknownRobot(robot_id))?;
            let package = &packages[package_id.index()];

            let blocked: HashSet<Location> = robots
                .iter()
                .filter(|r| r.id != robot_id)
                .map(|r| r.location)
                .collect();
            let route = |from, to| {
                shortest_path(grid, from, to, &blocked)
                    .map_err(|source| PlanError::Unreachable { robot: robot_id, source })
            };

            let queue = &mut queues[robot_id.index()];
            let carry_from = match package.location {
                // On the ground: walk there and pick it up.  A package
                // already underfoot yields a single-cell path and no moves.
                Some(at) => {
                    push_moves(queue, robot_id, &route(robot.location, at)?);
                    queue.push_back(Action::Pickup { robot: robot_id, package: package_id, at });
                    at
                }
                // Already lifted: only valid when *this* robot is the
                // carrier, in which case the queue is just the delivery leg.
                None => {
                    if package.carrier != Some(robot_id) {
                        return Err(PlanError::CarrierMismatch {
                            robot: robot_id,
                            package: package_id,
                        });
                    }
                    robot.location
                }
            };

            push_moves(queue, robot_id, &route(carry_from, package.destination)?);
            queue.push_back(Action::Drop {
                robot: robot_id,
                package: package_id,
                at: package.destination,
            });
        }

        let sequence = queues.iter().flatten().copied().collect();
        Ok(Self { queues, sequence })
    }

    // ── Engine interface ──────────────────────────────────────────────────

    #[inline]
    pub fn robot_count(&self) -> usize {
        self.queues.len()
    }

    /// Peek the head action of one robot's queue without removing it.
    #[inline]
    pub fn head(&self, robot: RobotId) -> Option<&Action> {
        self.queues[robot.index()].front()
    }

    /// Pop the head action of one robot's queue.
    #[inline]
    pub fn pop(&mut self, robot: RobotId) -> Option<Action> {
        self.queues[robot.index()].pop_front()
    }

    /// All current head actions in ascending robot-id order.
    pub fn heads(&self) -> Vec<(RobotId, Action)> {
        self.queues
            .iter()
            .enumerate()
            .filter_map(|(i, q)| q.front().map(|&a| (RobotId(i as u32), a)))
            .collect()
    }

    /// `true` once every queue is empty.
    pub fn is_drained(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Total pending actions across all robots.
    pub fn pending(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// The flat action order used by sequential execution.
    #[inline]
    pub fn sequence(&self) -> &[Action] {
        &self.sequence
    }

    /// One robot's pending actions, head first.
    pub fn queue(&self, robot: RobotId) -> &VecDeque<Action> {
        &self.queues[robot.index()]
    }
}

/// Append a `Move` per step of `path` (consecutive cell pairs).
fn push_moves(queue: &mut VecDeque<Action>, robot: RobotId, path: &[Location]) {
    for pair in path.windows(2) {
        queue.push_back(Action::Move { robot, from: pair[0], to: pair[1] });
    }
}
