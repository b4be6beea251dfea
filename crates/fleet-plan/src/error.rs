//! Plan-layer error type.

use thiserror::Error;

use fleet_core::{PackageId, RobotId};

use crate::parser::ParseIssue;

#[derive(Debug, Error)]
pub enum PlanError {
    /// Every line of the input was rejected; there is nothing to execute.
    /// The collected issues explain each line.
    #[error("plan contains no valid actions ({} bad lines)", issues.len())]
    NoValidActions { issues: Vec<ParseIssue> },

    /// Shortest-path queue building found no route for an assignment.
    /// The caller decides whether to skip the pair or abort setup.
    #[error("no route for robot {robot}: {source}")]
    Unreachable {
        robot: RobotId,
        source: fleet_grid::PathError,
    },

    #[error("queue building references unknown robot {0}")]
    UnknownRobot(RobotId),

    /// An assignment names a lifted package that some *other* robot carries;
    /// synthesizing a delivery leg for it could only fail at runtime.
    #[error("package {package} is not on the ground and not carried by {robot}")]
    CarrierMismatch { robot: RobotId, package: PackageId },
}

pub type PlanResult<T> = Result<T, PlanError>;
