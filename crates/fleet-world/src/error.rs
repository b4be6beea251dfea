//! World-state error type.

use thiserror::Error;

use fleet_core::{Location, PackageId, RobotId};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("planner symbol {0:?} is not in the name table")]
    UnknownSymbol(String),

    #[error("robots {0} and {1} both start at {2}")]
    RobotOverlap(RobotId, RobotId, Location),

    #[error("robot {0} starts on a blocked cell {1}")]
    RobotBlocked(RobotId, Location),

    #[error("package {0} placed on a blocked cell {1}")]
    PackageBlocked(PackageId, Location),

    #[error("package {0} destination {1} is blocked")]
    DestinationBlocked(PackageId, Location),

    #[error("package {0} must have exactly one of a location or a carrier")]
    PackagePlacement(PackageId),

    #[error("assignment references unknown {what} {index}")]
    BadAssignment { what: &'static str, index: u32 },

    #[error("not enough free cells for {needed} entities (have {available})")]
    GridTooSmall { needed: usize, available: usize },

    #[error(transparent)]
    Grid(#[from] fleet_grid::GridError),
}

pub type WorldResult<T> = Result<T, WorldError>;
