//! `fleet-grid` — static map and pathfinding for the rust_fleet simulator.
//!
//! The [`Grid`] is a bounded rectangle of cells with an obstacle set, fixed
//! after construction.  [`shortest_path`] runs a deterministic breadth-first
//! search over it, treating a caller-supplied `blocked` set (typically the
//! cells other robots currently occupy) as temporary extra obstacles.
//!
//! Routing failure is a normal result, not a crash: an unreachable goal is
//! reported as [`PathError::Unreachable`] and the caller decides whether to
//! skip the assignment or abort setup.

pub mod error;
pub mod grid;
pub mod path;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GridError, GridResult, PathError, PathResult};
pub use grid::Grid;
pub use path::shortest_path;
