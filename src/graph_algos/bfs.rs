use std::collections::VecDeque;

use tracing::instrument;

use super::frontier::frontier_search;
use crate::errors::GridError;
use crate::grid::{Coord, Cost, Grid};


/// Breadth-first search from `start` until `end` is dequeued
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// Returns every visited cell in visitation order. If `end` is unreachable it is absent
/// from the list, which then holds the whole reachable region.
/// The path found has the fewest hops; walk it with `shortest_path`.
#[instrument(level = "debug", skip(grid))]
pub fn breadth_first_search<C: Cost>(grid: &mut Grid<C>, start: Coord, end: Coord) -> Result<Vec<Coord>, GridError> {
    frontier_search::<C, VecDeque<usize>>(grid, start, end)
}
