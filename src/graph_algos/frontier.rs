use std::collections::VecDeque;

use tracing::debug;

use super::neighbors::expand;
use crate::errors::GridError;
use crate::grid::{Coord, Cost, Grid};


/// Discovered-but-unexpanded nodes, by arena index
/// The take order is the only thing separating BFS from DFS.
pub(crate) trait Frontier: Default {
    fn put(&mut self, index: usize);
    fn take(&mut self) -> Option<usize>;
}

/// FIFO - breadth first
impl Frontier for VecDeque<usize> {
    fn put(&mut self, index: usize) {
        self.push_back(index);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// LIFO - depth first
impl Frontier for Vec<usize> {
    fn put(&mut self, index: usize) {
        self.push(index);
    }

    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}


/// Unweighted search shared by BFS and DFS
/// Nodes are marked visited and given a predecessor when they enter the frontier,
/// so each one is taken at most once. `distance` records the discovery depth in hops.
/// Returns the visited order; it ends with `end` only if `end` was reached.
/// Fails with `CostOverflow` when a discovery depth does not fit in `C`.
pub(crate) fn frontier_search<C, F>(grid: &mut Grid<C>, start: Coord, end: Coord) -> Result<Vec<Coord>, GridError>
where
    C: Cost,
    F: Frontier,
{
    let (start, end) = grid.prepare_search(start, end)?;

    let mut frontier = F::default();
    frontier.put(start);

    let mut visited = Vec::new();
    let mut found = false;
    let mut overflow = None;
    let hop = C::from(1u8);

    while let Some(current) = frontier.take() {
        visited.push(grid.coord_of(current));

        if current == end {
            found = true;
            break;
        }

        let depth = grid.nodes[current].distance.add_step(hop);
        expand(grid, current, |index, node| {
            if node.visited {
                return;
            }
            let Some(depth) = depth else {
                overflow = Some(index);
                return;
            };
            node.visited = true;
            node.previous = Some(current);
            node.distance = depth;
            frontier.put(index);
        });

        if let Some(index) = overflow {
            return Err(GridError::CostOverflow(grid.coord_of(index)));
        }
    }

    debug!(visited = visited.len(), found, "frontier search finished");
    Ok(visited)
}
