//! Grid and pathfinding error types.

use thiserror::Error;

use fleet_core::Location;

/// Errors from grid construction.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    EmptyGrid { height: u32, width: u32 },

    #[error("obstacle {0} is outside the {1}x{2} grid")]
    ObstacleOutOfBounds(Location, u32, u32),
}

pub type GridResult<T> = Result<T, GridError>;

/// Errors from pathfinding queries.
#[derive(Debug, Error)]
pub enum PathError {
    /// The goal is disconnected from the start (obstacles, blocked cells, or
    /// out-of-bounds endpoints).  Non-fatal; callers skip or abort.
    #[error("no path from {from} to {to}")]
    Unreachable { from: Location, to: Location },
}

pub type PathResult<T> = Result<T, PathError>;
