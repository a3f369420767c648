use crate::grid::{Cost, Grid, Node};


/// In-bounds orthogonal neighbors of a linear index on a `rows` x `cols` grid
/// Order is fixed: north, south, west, east
pub(crate) fn orthogonal(index: usize, rows: usize, cols: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (index / cols, index % cols);
    [
        (row > 0).then(|| index - cols),
        (row + 1 < rows).then(|| index + cols),
        (col > 0).then(|| index - 1),
        (col + 1 < cols).then(|| index + 1),
    ]
    .into_iter()
    .flatten()
}

/// Hand every traversable neighbor of `current` to `visit`
/// Walls are skipped here; marking and relaxation belong to the caller.
pub(crate) fn expand<C, V>(grid: &mut Grid<C>, current: usize, mut visit: V)
where
    C: Cost,
    V: FnMut(usize, &mut Node<C>), // (neighbor index, neighbor node)
{
    for index in orthogonal(current, grid.rows, grid.cols) {
        let node = &mut grid.nodes[index];
        if node.is_wall {
            continue;
        }
        visit(index, node);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;

    #[test]
    fn test_orthogonal_single_cell() {
        assert_eq!(orthogonal(0, 1, 1).count(), 0);
    }

    #[test]
    fn test_orthogonal_single_row() {
        // 1x5: only west and east exist
        let middle: Vec<_> = orthogonal(2, 1, 5).collect();
        assert_eq!(middle, vec![1, 3]);
    }

    #[test]
    fn test_orthogonal_order() {
        // 3x3, centre is index 4
        let centre: Vec<_> = orthogonal(4, 3, 3).collect();
        assert_eq!(centre, vec![1, 7, 3, 5]);
    }

    #[test]
    fn test_expand_skips_walls() {
        let mut grid: Grid = Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        grid.set_wall(Coord::new(0, 1), true).unwrap();
        grid.set_wall(Coord::new(1, 2), true).unwrap();

        let mut seen = Vec::new();
        expand(&mut grid, 4, |index, node| {
            assert!(!node.is_wall());
            seen.push(index);
        });

        assert_eq!(seen, vec![7, 3]);
    }

    #[test]
    fn test_expand_allows_mutation() {
        let mut grid: Grid = Grid::new(2, 2, Coord::new(0, 0), Coord::new(1, 1)).unwrap();

        expand(&mut grid, 0, |_, node| node.visited = true);

        assert!(grid.is_visited(Coord::new(1, 0)));
        assert!(grid.is_visited(Coord::new(0, 1)));
        assert!(!grid.is_visited(Coord::new(1, 1)));
    }
}
