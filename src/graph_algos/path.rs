use crate::errors::GridError;
use crate::grid::{Coord, Cost, Grid};


/// Construct the path found by the last search from its origin to `target`
/// Returns the ordered path as a vector of cells from start to target.
/// Follows predecessor handles back to the origin (the only node with distance zero and
/// no predecessor). The grid is not modified.
pub fn shortest_path<C: Cost>(grid: &Grid<C>, target: Coord) -> Result<Vec<Coord>, GridError> {
    let goal_index = grid.checked_index(target)?;
    let goal = &grid.nodes[goal_index];

    // Never reached, or reached without a recorded predecessor
    if !goal.visited || (goal.previous.is_none() && goal.distance != C::zero()) {
        return Err(GridError::NoPathFound);
    }

    let mut path = Vec::new();
    let mut current_index = Some(goal_index);

    // Trace back from target to start
    while let Some(index) = current_index {
        // A chain longer than the grid means the scratch state is corrupt
        if path.len() == grid.nodes.len() {
            return Err(GridError::NoPathFound);
        }
        path.push(grid.coord_of(index));
        current_index = grid.nodes[index].previous;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}

/// Total cost of walking `path`: the weight of every cell entered after the first
/// Fails with `CostOverflow` at the first cell whose weight no longer fits in `C`.
pub fn path_cost<C: Cost>(grid: &Grid<C>, path: &[Coord]) -> Result<C, GridError> {
    path.iter().skip(1).try_fold(C::zero(), |total, &coord| {
        let index = grid.checked_index(coord)?;
        total
            .checked_add(&grid.nodes[index].weight)
            .ok_or(GridError::CostOverflow(coord))
    })
}
