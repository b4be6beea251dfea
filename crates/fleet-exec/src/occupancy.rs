//! The occupancy set — the grid-wide mutual-exclusion model.
//!
//! One entry per robot, keyed by cell.  Map keys are unique, so "at most one
//! robot per cell" holds by construction; the engine's conflict resolution
//! guarantees it stays true across each commit batch.  This is the in-core
//! mirror of the planning domain's `occupied` resource predicate, decoupled
//! from any predicate text.

use fleet_core::{Location, RobotId};
use fleet_world::Robot;

#[cfg(feature = "fx-hash")]
type Map = rustc_hash::FxHashMap<Location, RobotId>;
#[cfg(not(feature = "fx-hash"))]
type Map = std::collections::HashMap<Location, RobotId>;

/// Current cell → robot mapping, injective at every tick boundary.
#[derive(Clone, Debug, Default)]
pub struct OccupancySet {
    inner: Map,
}

impl OccupancySet {
    /// Build from initial robot positions.
    ///
    /// Positions must already be distinct (scenario validation enforces it).
    pub fn from_robots(robots: &[Robot]) -> Self {
        let mut set = Self::default();
        for robot in robots {
            set.occupy(robot.location, robot.id);
        }
        debug_assert_eq!(set.len(), robots.len());
        set
    }

    #[inline]
    pub fn occupant(&self, loc: Location) -> Option<RobotId> {
        self.inner.get(&loc).copied()
    }

    #[inline]
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.inner.contains_key(&loc)
    }

    /// Remove and return the occupant of `loc`.
    pub fn vacate(&mut self, loc: Location) -> Option<RobotId> {
        self.inner.remove(&loc)
    }

    /// Claim `loc` for `robot`.  The cell must be empty.
    pub fn occupy(&mut self, loc: Location, robot: RobotId) {
        let prev = self.inner.insert(loc, robot);
        debug_assert!(prev.is_none(), "cell {loc} already held by {prev:?}");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All occupied cells except `robot`'s own — the blocked set for that
    /// robot's pathfinding queries.
    pub fn blocked_for(&self, robot: RobotId) -> std::collections::HashSet<Location> {
        self.inner
            .iter()
            .filter(|&(_, &r)| r != robot)
            .map(|(&loc, _)| loc)
            .collect()
    }
}
