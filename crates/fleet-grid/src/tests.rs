//! Unit tests for fleet-grid.

use std::collections::HashSet;

use fleet_core::Location;

use crate::{shortest_path, Grid, PathError};

fn loc(row: i32, col: i32) -> Location {
    Location::new(row, col)
}

fn no_blocks() -> HashSet<Location> {
    HashSet::new()
}

#[cfg(test)]
mod grid {
    use super::*;

    #[test]
    fn bounds_checks() {
        let g = Grid::open(3, 4).unwrap();
        assert!(g.in_bounds(loc(0, 0)));
        assert!(g.in_bounds(loc(2, 3)));
        assert!(!g.in_bounds(loc(3, 0)));
        assert!(!g.in_bounds(loc(0, 4)));
        assert!(!g.in_bounds(loc(-1, 0)));
    }

    #[test]
    fn obstacles_rejected_out_of_bounds() {
        assert!(Grid::with_obstacles(3, 3, [loc(5, 5)]).is_err());
        assert!(Grid::with_obstacles(3, 3, [loc(1, 1)]).is_ok());
    }

    #[test]
    fn zero_sized_grid_rejected() {
        assert!(Grid::open(0, 5).is_err());
        assert!(Grid::open(5, 0).is_err());
    }

    #[test]
    fn free_excludes_obstacles_and_out_of_bounds() {
        let g = Grid::with_obstacles(3, 3, [loc(1, 1)]).unwrap();
        assert!(g.is_obstacle(loc(1, 1)));
        assert!(!g.is_free(loc(1, 1)));
        assert!(g.is_free(loc(0, 0)));
        assert!(!g.is_free(loc(9, 9)));
    }

    #[test]
    fn neighbor_order_is_down_right_up_left() {
        let g = Grid::open(3, 3).unwrap();
        assert_eq!(
            g.neighbors(loc(1, 1)),
            vec![loc(2, 1), loc(1, 2), loc(0, 1), loc(1, 0)],
        );
    }

    #[test]
    fn neighbors_filtered_at_edges_and_obstacles() {
        let g = Grid::with_obstacles(3, 3, [loc(0, 1)]).unwrap();
        // Corner cell: down and right only, minus the obstacle at (0, 1).
        assert_eq!(g.neighbors(loc(0, 0)), vec![loc(1, 0)]);
    }

    #[test]
    fn free_cells_skips_obstacles() {
        let g = Grid::with_obstacles(2, 2, [loc(0, 1)]).unwrap();
        let cells: Vec<_> = g.free_cells().collect();
        assert_eq!(cells, vec![loc(0, 0), loc(1, 0), loc(1, 1)]);
    }
}

#[cfg(test)]
mod path {
    use super::*;

    #[test]
    fn length_equals_manhattan_when_unobstructed() {
        let g = Grid::open(6, 6).unwrap();
        for (a, b) in [
            (loc(0, 0), loc(5, 5)),
            (loc(2, 3), loc(2, 3)),
            (loc(4, 0), loc(0, 4)),
            (loc(1, 5), loc(3, 2)),
        ] {
            let path = shortest_path(&g, a, b, &no_blocks()).unwrap();
            assert_eq!(path.len() as u32, a.manhattan(b) + 1, "{a} -> {b}");
            assert_eq!(path[0], a);
            assert_eq!(*path.last().unwrap(), b);
            // Consecutive cells must be adjacent.
            for pair in path.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]));
            }
        }
    }

    #[test]
    fn trivial_path_is_single_cell() {
        let g = Grid::open(3, 3).unwrap();
        assert_eq!(shortest_path(&g, loc(1, 1), loc(1, 1), &no_blocks()).unwrap(), vec![loc(1, 1)]);
    }

    #[test]
    fn routes_around_an_obstacle_wall() {
        // Wall across row 1 with a gap at column 3.
        let g = Grid::with_obstacles(3, 4, [loc(1, 0), loc(1, 1), loc(1, 2)]).unwrap();
        let path = shortest_path(&g, loc(0, 0), loc(2, 0), &no_blocks()).unwrap();
        assert!(path.contains(&loc(1, 3)), "must pass through the gap: {path:?}");
        assert!(path.iter().all(|&c| g.is_free(c)));
    }

    #[test]
    fn enclosed_goal_is_unreachable_never_partial() {
        // Goal at (2, 2) walled in on all four sides.
        let g = Grid::with_obstacles(
            5,
            5,
            [loc(1, 2), loc(3, 2), loc(2, 1), loc(2, 3)],
        )
        .unwrap();
        let err = shortest_path(&g, loc(0, 0), loc(2, 2), &no_blocks()).unwrap_err();
        assert!(matches!(err, PathError::Unreachable { from, to }
            if from == loc(0, 0) && to == loc(2, 2)));
    }

    #[test]
    fn blocked_cells_act_as_temporary_obstacles() {
        let g = Grid::open(1, 5).unwrap();
        // Single corridor; a robot sits at (0, 2).
        let blocked: HashSet<_> = [loc(0, 2)].into();
        let err = shortest_path(&g, loc(0, 0), loc(0, 4), &blocked).unwrap_err();
        assert!(matches!(err, PathError::Unreachable { .. }));
        // The grid itself is untouched: without blocks the route exists.
        assert!(shortest_path(&g, loc(0, 0), loc(0, 4), &no_blocks()).is_ok());
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let g = Grid::open(3, 3).unwrap();
        let blocked: HashSet<_> = [loc(2, 2)].into();
        assert!(shortest_path(&g, loc(0, 0), loc(2, 2), &blocked).is_err());
    }

    #[test]
    fn start_exempt_from_blocked_set() {
        let g = Grid::open(1, 3).unwrap();
        let blocked: HashSet<_> = [loc(0, 0)].into();
        let path = shortest_path(&g, loc(0, 0), loc(0, 2), &blocked).unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn repeated_queries_identical() {
        let g = Grid::with_obstacles(7, 7, [loc(3, 3), loc(3, 4)]).unwrap();
        let a = shortest_path(&g, loc(6, 6), loc(0, 0), &no_blocks()).unwrap();
        let b = shortest_path(&g, loc(6, 6), loc(0, 0), &no_blocks()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tie_break_prefers_down_then_right() {
        // From (0, 2) to (4, 4) on an open 5x5 the fixed neighbor order
        // yields: straight down column 2, then right along row 4.
        let g = Grid::open(5, 5).unwrap();
        let path = shortest_path(&g, loc(0, 2), loc(4, 4), &no_blocks()).unwrap();
        assert_eq!(
            path,
            vec![
                loc(0, 2), loc(1, 2), loc(2, 2), loc(3, 2), loc(4, 2),
                loc(4, 3), loc(4, 4),
            ],
        );
    }

    #[test]
    fn out_of_bounds_endpoints_unreachable() {
        let g = Grid::open(3, 3).unwrap();
        assert!(shortest_path(&g, loc(0, 0), loc(9, 9), &no_blocks()).is_err());
        assert!(shortest_path(&g, loc(-1, 0), loc(1, 1), &no_blocks()).is_err());
    }
}
