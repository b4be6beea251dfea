//! Fluent construction and validation of an [`ExecEngine`].

use fleet_core::{ExecConfig, PathPolicy};
use fleet_plan::{Action, RobotQueues};
use fleet_world::Scenario;

use crate::{ExecEngine, ExecError, ExecResult};

/// Builder for [`ExecEngine`].
///
/// Where the action queues come from depends on the configured path policy:
///
/// * [`PathPolicy::FollowPlan`] — call [`plan`][Self::plan] with the parsed
///   actions (or [`queues`][Self::queues] with pre-partitioned ones).
/// * [`PathPolicy::ShortestPath`] — nothing else to supply; routes are
///   synthesized from the scenario's assignments at `build` time.
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(ExecConfig::default(), scenario)
///     .plan(parsed.actions)
///     .build()?;
/// ```
pub struct EngineBuilder {
    config: ExecConfig,
    scenario: Scenario,
    plan: Option<Vec<Action>>,
    queues: Option<RobotQueues>,
}

impl EngineBuilder {
    pub fn new(config: ExecConfig, scenario: Scenario) -> Self {
        Self { config, scenario, plan: None, queues: None }
    }

    /// Supply a flat plan to partition into per-robot queues.
    pub fn plan(mut self, actions: Vec<Action>) -> Self {
        self.plan = Some(actions);
        self
    }

    /// Supply pre-built queues, overriding both the plan and the path
    /// policy's synthesis.
    pub fn queues(mut self, queues: RobotQueues) -> Self {
        self.queues = Some(queues);
        self
    }

    /// Validate the configuration, resolve the queues, and assemble the
    /// engine.  The scenario was validated at its own construction; queue
    /// synthesis can still fail here if an assigned package is unreachable.
    pub fn build(self) -> ExecResult<ExecEngine> {
        self.config.validate()?;

        let Scenario { grid, robots, packages, assignments } = self.scenario;

        let queues = match self.queues {
            Some(q) => q,
            None => match self.config.path_policy {
                PathPolicy::FollowPlan => {
                    let actions = self.plan.ok_or(ExecError::MissingPlan)?;
                    RobotQueues::from_plan(&actions, robots.len())?
                }
                PathPolicy::ShortestPath => {
                    RobotQueues::shortest_path(&grid, &robots, &packages, &assignments)?
                }
            },
        };

        if queues.robot_count() != robots.len() {
            return Err(ExecError::QueueCountMismatch {
                expected: robots.len(),
                got: queues.robot_count(),
            });
        }

        Ok(ExecEngine::assemble(self.config, grid, robots, packages, queues))
    }
}
