use tracing::instrument;

use super::frontier::frontier_search;
use crate::errors::GridError;
use crate::grid::{Coord, Cost, Grid};


/// Depth-first search from `start` until `end` is popped
/// Iterative: same expansion and marking as `breadth_first_search` but the frontier is a stack.
/// Neighbors are pushed north, south, west, east, so the east neighbor is explored first.
/// The path found is reachable but not necessarily the fewest hops.
#[instrument(level = "debug", skip(grid))]
pub fn depth_first_search<C: Cost>(grid: &mut Grid<C>, start: Coord, end: Coord) -> Result<Vec<Coord>, GridError> {
    frontier_search::<C, Vec<usize>>(grid, start, end)
}
