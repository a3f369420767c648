use tracing::{debug, instrument, trace};

use super::neighbors::expand;
use crate::collections::FxIndexSet;
use crate::errors::GridError;
use crate::grid::{Coord, Cost, Grid};


/// Identify the cheapest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Entering a cell costs its weight. Weights must be positive.
///
/// Returns every expanded cell in expansion order. `end` is the last element when it was reached;
/// otherwise the list covers the whole reachable region and unreached distances stay infinite.
/// Fails with `CostOverflow` when a reached cell's distance does not fit in `C`.
#[instrument(level = "debug", skip(grid))]
pub fn dijkstra<C: Cost>(grid: &mut Grid<C>, start: Coord, end: Coord) -> Result<Vec<Coord>, GridError> {
    let (start, end) = grid.prepare_search(start, end)?;
    expand_until(grid, start, Some(end))
}

/// Run Dijkstra from `start` over every reachable cell
/// Leaves each reachable node's distance and predecessor set, a full cost map of the grid.
#[instrument(level = "debug", skip(grid))]
pub fn dijkstra_full<C: Cost>(grid: &mut Grid<C>, start: Coord) -> Result<Vec<Coord>, GridError> {
    let (start, _) = grid.prepare_search(start, start)?;
    expand_until(grid, start, None)
}


/// Expand the working set until `goal` is selected or the set runs dry
fn expand_until<C: Cost>(grid: &mut Grid<C>, start: usize, goal: Option<usize>) -> Result<Vec<Coord>, GridError> {

    // Discovered nodes waiting for expansion
    // Each node enters once: `visited` is set on insertion and never cleared during the run
    let mut working_set: FxIndexSet<usize> = FxIndexSet::default();
    working_set.insert(start);

    let mut visited = Vec::new();
    let mut found = false;
    let mut overflow = None;

    while let Some(current) = closest_node(grid, &mut working_set) {
        visited.push(grid.coord_of(current));

        if Some(current) == goal {
            found = true;
            break;
        }

        let current_distance = grid.nodes[current].distance;
        trace!(cell = %grid.coord_of(current), distance = ?current_distance, "expand");

        expand(grid, current, |index, node| {
            // Relax even if the neighbor is already queued
            match current_distance.add_step(node.weight) {
                Some(new_distance) if new_distance < node.distance => {
                    node.distance = new_distance;
                    node.previous = Some(current);
                }
                Some(_) => {}
                // A queued neighbor already holds a smaller finite distance
                None if node.visited => {}
                None => {
                    overflow = Some(index);
                    return;
                }
            }

            // First sighting queues the node whether or not it improved
            if !node.visited {
                node.visited = true;
                working_set.insert(index);
            }
        });

        if let Some(index) = overflow {
            return Err(GridError::CostOverflow(grid.coord_of(index)));
        }
    }

    debug!(
        start = %grid.coord_of(start),
        visited = visited.len(),
        found,
        "dijkstra finished"
    );
    Ok(visited)
}

/// Remove and return the queued node with the smallest distance
/// Ties go to the earliest position in the set. Removal swaps the last entry into
/// the vacated slot, which is what fixes the order of later ties.
fn closest_node<C: Cost>(grid: &Grid<C>, working_set: &mut FxIndexSet<usize>) -> Option<usize> {
    let mut closest: Option<(usize, C)> = None;

    for (position, &index) in working_set.iter().enumerate() {
        let distance = grid.nodes[index].distance;
        match closest {
            Some((_, best)) if best <= distance => {}
            _ => closest = Some((position, distance)),
        }
    }

    let (position, _) = closest?;
    working_set.swap_remove_index(position)
}
