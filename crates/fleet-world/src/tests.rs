//! Unit tests for fleet-world.

use fleet_core::{Location, PackageId, RobotId};
use fleet_grid::Grid;

use crate::{Package, Robot, Scenario, SymbolTable, WorldError};

fn loc(row: i32, col: i32) -> Location {
    Location::new(row, col)
}

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn fresh_robot_is_free() {
        let r = Robot::new(RobotId(0), loc(1, 1));
        assert!(r.is_free());
        assert_eq!(r.location, loc(1, 1));
    }

    #[test]
    fn package_placement_invariant() {
        let mut p = Package::new(PackageId(0), loc(0, 0), loc(2, 2));
        assert!(p.placement_ok());
        assert!(!p.is_carried());

        // Picked up: location moves into the carrier.
        p.location = None;
        p.carrier = Some(RobotId(1));
        assert!(p.placement_ok());
        assert!(p.is_carried());

        // Both set — violation.
        p.location = Some(loc(0, 0));
        assert!(!p.placement_ok());

        // Neither set — violation.
        p.location = None;
        p.carrier = None;
        assert!(!p.placement_ok());
    }
}

#[cfg(test)]
mod symbols {
    use super::*;

    fn table() -> SymbolTable {
        let grid = Grid::with_obstacles(3, 3, [loc(1, 1)]).unwrap();
        SymbolTable::for_scenario(&grid, 2, 1)
    }

    #[test]
    fn resolves_registered_names() {
        let t = table();
        assert_eq!(t.robot("r0").unwrap(), RobotId(0));
        assert_eq!(t.robot("r1").unwrap(), RobotId(1));
        assert_eq!(t.package("p0").unwrap(), PackageId(0));
        assert_eq!(t.location("zone_2_0").unwrap(), loc(2, 0));
    }

    #[test]
    fn round_trips_names() {
        let t = table();
        assert_eq!(t.robot_name(RobotId(1)), "r1");
        assert_eq!(t.package_name(PackageId(0)), "p0");
        assert_eq!(SymbolTable::zone_name(loc(2, 0)), "zone_2_0");
    }

    #[test]
    fn unknown_symbols_rejected() {
        let t = table();
        assert!(matches!(t.robot("r9"), Err(WorldError::UnknownSymbol(_))));
        assert!(matches!(t.package("r0"), Err(WorldError::UnknownSymbol(_))));
        // Off-grid zone was never registered.
        assert!(t.location("zone_9_9").is_err());
        // Obstacle cells get no zone symbol either.
        assert!(t.location("zone_1_1").is_err());
    }
}

#[cfg(test)]
mod scenario {
    use super::*;

    fn small_grid() -> Grid {
        Grid::open(4, 4).unwrap()
    }

    #[test]
    fn valid_scenario_accepted() {
        let s = Scenario::new(
            small_grid(),
            vec![Robot::new(RobotId(0), loc(0, 0)), Robot::new(RobotId(1), loc(3, 3))],
            vec![Package::new(PackageId(0), loc(1, 1), loc(2, 2))],
            vec![(RobotId(0), PackageId(0))],
        )
        .unwrap();
        assert!(!s.all_delivered());
    }

    #[test]
    fn overlapping_robots_rejected() {
        let err = Scenario::new(
            small_grid(),
            vec![Robot::new(RobotId(0), loc(0, 0)), Robot::new(RobotId(1), loc(0, 0))],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::RobotOverlap(RobotId(0), RobotId(1), _)));
    }

    #[test]
    fn robot_on_obstacle_rejected() {
        let grid = Grid::with_obstacles(4, 4, [loc(2, 2)]).unwrap();
        let err = Scenario::new(
            grid,
            vec![Robot::new(RobotId(0), loc(2, 2))],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::RobotBlocked(..)));
    }

    #[test]
    fn package_on_obstacle_rejected() {
        let grid = Grid::with_obstacles(4, 4, [loc(2, 2)]).unwrap();
        let err = Scenario::new(
            grid,
            vec![],
            vec![Package::new(PackageId(0), loc(2, 2), loc(0, 0))],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::PackageBlocked(..)));
    }

    #[test]
    fn blocked_destination_rejected() {
        let grid = Grid::with_obstacles(4, 4, [loc(2, 2)]).unwrap();
        let err = Scenario::new(
            grid,
            vec![],
            vec![Package::new(PackageId(0), loc(0, 0), loc(2, 2))],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::DestinationBlocked(..)));
    }

    #[test]
    fn dangling_assignment_rejected() {
        let err = Scenario::new(
            small_grid(),
            vec![Robot::new(RobotId(0), loc(0, 0))],
            vec![Package::new(PackageId(0), loc(1, 1), loc(2, 2))],
            vec![(RobotId(5), PackageId(0))],
        )
        .unwrap_err();
        assert!(matches!(err, WorldError::BadAssignment { what: "robot", .. }));
    }

    #[test]
    fn randomized_is_reproducible_per_seed() {
        let a = Scenario::randomized(small_grid(), 2, 2, 7).unwrap();
        let b = Scenario::randomized(small_grid(), 2, 2, 7).unwrap();
        assert_eq!(a.robots, b.robots);
        assert_eq!(a.packages, b.packages);

        let c = Scenario::randomized(small_grid(), 2, 2, 8).unwrap();
        // Different seed, almost certainly a different layout; at minimum the
        // scenario is still valid (checked by construction).
        assert_eq!(c.robots.len(), 2);
    }

    #[test]
    fn randomized_places_entities_on_distinct_cells() {
        let s = Scenario::randomized(Grid::open(5, 5).unwrap(), 3, 3, 99).unwrap();
        let mut cells: Vec<Location> = s.robots.iter().map(|r| r.location).collect();
        cells.extend(s.packages.iter().map(|p| p.location.unwrap()));
        cells.extend(s.packages.iter().map(|p| p.destination));
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), cells.len());
    }

    #[test]
    fn randomized_rejects_tiny_grid() {
        let err = Scenario::randomized(Grid::open(1, 2).unwrap(), 2, 2, 0).unwrap_err();
        assert!(matches!(err, WorldError::GridTooSmall { .. }));
    }
}
