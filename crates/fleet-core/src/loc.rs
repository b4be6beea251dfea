//! Grid coordinates.
//!
//! A [`Location`] is a `(row, col)` pair compared and hashed by value.  Planner
//! symbols such as `zone_3_4` are *not* locations — the mapping between
//! symbolic names and coordinates lives in the scenario boundary
//! (`fleet-world::SymbolTable`), never here.

use std::fmt;

/// A cell on the grid, identified by `(row, col)`.
///
/// Fields are `i32` so that neighbor arithmetic at the grid edge can go
/// negative without wrapping; `Grid::in_bounds` filters such cells out.
/// Ordering is row-major, which gives deterministic iteration when locations
/// are collected into sorted structures.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (4-connected walking) distance to `other`.
    ///
    /// On an obstacle-free grid this equals the length of any shortest path.
    #[inline]
    pub fn manhattan(self, other: Location) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// `true` if `other` is exactly one 4-connected step away.
    #[inline]
    pub fn is_adjacent(self, other: Location) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Location {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
