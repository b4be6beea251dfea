//! Scenario setup — the boundary between external authoring and the core.
//!
//! A [`Scenario`] bundles everything a run needs: the grid, initial robot and
//! package state, and which robot fetches which package.  Construction
//! validates the whole bundle once, so the engine can assume a consistent
//! world and confine its own checks to action preconditions.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use fleet_core::{Location, PackageId, RobotId};
use fleet_grid::Grid;

use crate::{Package, Robot, SymbolTable, WorldError, WorldResult};

/// A validated initial world.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: Grid,
    pub robots: Vec<Robot>,
    pub packages: Vec<Package>,
    /// Which robot fetches which package, used by shortest-path queue
    /// building.  Planner-order execution ignores it.
    pub assignments: Vec<(RobotId, PackageId)>,
}

impl Scenario {
    /// Validate and assemble a scenario.
    ///
    /// Checks: robots on distinct free cells; grounded packages and all
    /// destinations on free cells; the location-xor-carrier invariant on
    /// every package; assignments referencing real ids.
    pub fn new(
        grid: Grid,
        robots: Vec<Robot>,
        packages: Vec<Package>,
        assignments: Vec<(RobotId, PackageId)>,
    ) -> WorldResult<Self> {
        for (i, robot) in robots.iter().enumerate() {
            if !grid.is_free(robot.location) {
                return Err(WorldError::RobotBlocked(robot.id, robot.location));
            }
            for earlier in &robots[..i] {
                if earlier.location == robot.location {
                    return Err(WorldError::RobotOverlap(
                        earlier.id,
                        robot.id,
                        robot.location,
                    ));
                }
            }
        }

        for package in &packages {
            if !package.placement_ok() {
                return Err(WorldError::PackagePlacement(package.id));
            }
            if let Some(loc) = package.location {
                if !grid.is_free(loc) {
                    return Err(WorldError::PackageBlocked(package.id, loc));
                }
            }
            if !grid.is_free(package.destination) {
                return Err(WorldError::DestinationBlocked(package.id, package.destination));
            }
        }

        for &(robot, package) in &assignments {
            if robot.index() >= robots.len() {
                return Err(WorldError::BadAssignment { what: "robot", index: robot.0 });
            }
            if package.index() >= packages.len() {
                return Err(WorldError::BadAssignment { what: "package", index: package.0 });
            }
        }

        Ok(Self { grid, robots, packages, assignments })
    }

    /// Randomized setup: robots, packages, and destinations drawn from
    /// distinct free cells, deterministic per `seed`.
    ///
    /// Robot `i` is assigned package `i`.  Errors if the grid has fewer free
    /// cells than entities to place.
    pub fn randomized(
        grid: Grid,
        robot_count: u32,
        package_count: u32,
        seed: u64,
    ) -> WorldResult<Self> {
        let needed = (robot_count + 2 * package_count) as usize;
        let mut cells: Vec<Location> = grid.free_cells().collect();
        if cells.len() < needed {
            return Err(WorldError::GridTooSmall { needed, available: cells.len() });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        cells.shuffle(&mut rng);
        let mut cells = cells.into_iter();

        let robots: Vec<Robot> = (0..robot_count)
            .map(|i| Robot::new(RobotId(i), cells.next().unwrap()))
            .collect();
        let packages: Vec<Package> = (0..package_count)
            .map(|i| {
                Package::new(PackageId(i), cells.next().unwrap(), cells.next().unwrap())
            })
            .collect();
        let assignments = (0..robot_count.min(package_count))
            .map(|i| (RobotId(i), PackageId(i)))
            .collect();

        Self::new(grid, robots, packages, assignments)
    }

    /// The name table for this scenario.
    pub fn symbol_table(&self) -> SymbolTable {
        SymbolTable::for_scenario(&self.grid, self.robots.len() as u32, self.packages.len() as u32)
    }

    /// `true` once every package has been delivered.
    pub fn all_delivered(&self) -> bool {
        self.packages.iter().all(|p| p.delivered)
    }
}
