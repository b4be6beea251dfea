//! The static grid map.

use std::collections::HashSet;

use fleet_core::Location;

use crate::{GridError, GridResult};

/// Neighbor offsets in fixed visitation order: down, right, up, left.
///
/// The order is arbitrary but must never change — BFS tie-breaking, and with
/// it every synthesized path, depends on it for reproducibility.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A bounded rectangle of cells with a fixed obstacle set.
///
/// Rows run `0..height` top to bottom, columns `0..width` left to right.
/// Immutable after construction; owned by the scenario and read-only during
/// execution.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    height: u32,
    width: u32,
    obstacles: HashSet<Location>,
}

impl Grid {
    /// An obstacle-free grid.
    pub fn open(height: u32, width: u32) -> GridResult<Self> {
        Self::with_obstacles(height, width, [])
    }

    /// A grid with the given obstacle cells.
    ///
    /// Every obstacle must be in bounds; anything else is a setup bug, not a
    /// condition to tolerate at runtime.
    pub fn with_obstacles(
        height: u32,
        width: u32,
        obstacles: impl IntoIterator<Item = Location>,
    ) -> GridResult<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid { height, width });
        }
        let mut set = HashSet::new();
        for loc in obstacles {
            if !in_bounds(loc, height, width) {
                return Err(GridError::ObstacleOutOfBounds(loc, height, width));
            }
            set.insert(loc);
        }
        Ok(Self { height, width, obstacles: set })
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total cell count, obstacles included.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Dense row-major index for `loc`.  Caller must ensure `in_bounds(loc)`.
    #[inline]
    pub(crate) fn cell_index(&self, loc: Location) -> usize {
        loc.row as usize * self.width as usize + loc.col as usize
    }

    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        in_bounds(loc, self.height, self.width)
    }

    #[inline]
    pub fn is_obstacle(&self, loc: Location) -> bool {
        self.obstacles.contains(&loc)
    }

    /// In bounds and not an obstacle.
    #[inline]
    pub fn is_free(&self, loc: Location) -> bool {
        self.in_bounds(loc) && !self.is_obstacle(loc)
    }

    /// The up-to-4 free cells adjacent to `loc`, in the fixed visitation
    /// order down, right, up, left.
    pub fn neighbors(&self, loc: Location) -> Vec<Location> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| Location::new(loc.row + dr, loc.col + dc))
            .filter(|&n| self.is_free(n))
            .collect()
    }

    /// All free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.height as i32).flat_map(move |row| {
            (0..self.width as i32)
                .map(move |col| Location::new(row, col))
                .filter(|&loc| !self.is_obstacle(loc))
        })
    }
}

#[inline]
fn in_bounds(loc: Location, height: u32, width: u32) -> bool {
    loc.row >= 0 && loc.col >= 0 && (loc.row as u32) < height && (loc.col as u32) < width
}
