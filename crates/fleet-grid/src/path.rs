//! Breadth-first shortest paths.
//!
//! Plain BFS is the right tool here: every step costs 1, grids are small, and
//! the frontier order doubles as the determinism guarantee.  Anything fancier
//! (A*, weighted search) would buy nothing and cost reproducibility.

use std::collections::{HashSet, VecDeque};

use fleet_core::Location;

use crate::{Grid, PathError, PathResult};

/// Sentinel for "cell not yet discovered" in the parent array.
const UNDISCOVERED: usize = usize::MAX;

/// Compute a shortest route from `start` to `goal`, inclusive of both.
///
/// `blocked` cells are treated as temporary extra obstacles for this call
/// only — typically the current occupancy minus the requesting robot.  The
/// grid itself is never mutated.  `start` is exempt from the blocked check
/// (the requester stands there).
///
/// Ties between equal-length routes are broken by the grid's fixed neighbor
/// order, so repeated queries on unchanged inputs return identical paths.
///
/// Returns [`PathError::Unreachable`] when no route exists; this is a normal
/// result the caller must handle, not a failure of the query itself.
pub fn shortest_path(
    grid: &Grid,
    start: Location,
    goal: Location,
    blocked: &HashSet<Location>,
) -> PathResult<Vec<Location>> {
    let unreachable = || PathError::Unreachable { from: start, to: goal };

    if !grid.is_free(start) || !grid.is_free(goal) {
        return Err(unreachable());
    }
    if goal != start && blocked.contains(&goal) {
        return Err(unreachable());
    }
    if start == goal {
        return Ok(vec![start]);
    }

    // parent[cell] = dense index of the cell we arrived from.
    let mut parent = vec![UNDISCOVERED; grid.cell_count()];
    let mut queue = VecDeque::new();

    parent[grid.cell_index(start)] = grid.cell_index(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for next in grid.neighbors(cell) {
            if next != start && blocked.contains(&next) {
                continue;
            }
            let idx = grid.cell_index(next);
            if parent[idx] != UNDISCOVERED {
                continue;
            }
            parent[idx] = grid.cell_index(cell);
            if next == goal {
                return Ok(reconstruct(grid, &parent, start, goal));
            }
            queue.push_back(next);
        }
    }

    Err(unreachable())
}

/// Walk the parent chain back from `goal` and reverse it.
fn reconstruct(grid: &Grid, parent: &[usize], start: Location, goal: Location) -> Vec<Location> {
    let width = grid.width() as usize;
    let mut path = vec![goal];
    let mut cur = grid.cell_index(goal);
    let start_idx = grid.cell_index(start);

    while cur != start_idx {
        cur = parent[cur];
        path.push(Location::new((cur / width) as i32, (cur % width) as i32));
    }
    path.reverse();
    path
}
