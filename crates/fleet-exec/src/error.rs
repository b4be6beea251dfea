use thiserror::Error;

use fleet_core::CoreError;
use fleet_plan::PlanError;
use fleet_world::WorldError;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("queue count {got} does not match robot count {expected}")]
    QueueCountMismatch { expected: usize, got: usize },

    #[error("follow_plan policy requires a parsed plan")]
    MissingPlan,

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type ExecResult<T> = Result<T, ExecError>;
