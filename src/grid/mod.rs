use std::fmt::{self, Debug};

use num_traits::{Bounded, CheckedAdd, ToPrimitive, Zero};
use tracing::trace;

use crate::errors::GridError;
use crate::graph_algos::neighbors::orthogonal;

mod layout;
mod scatter;

/// Default weight of an open cell
pub const LIGHT_WEIGHT: u8 = 1;
/// Weight of a cell toggled to "heavy"
pub const HEAVY_WEIGHT: u8 = 10;


/// Numeric type usable as a cell weight and search distance
/// - `max_value()` is the "infinite" distance sentinel
/// - a real distance must stay strictly below it, see `add_step`
pub trait Cost: Copy + Ord + Debug + Zero + Bounded + CheckedAdd + ToPrimitive + From<u8> {
    /// `self + step`, or `None` when the sum would overflow or land on the sentinel
    fn add_step(self, step: Self) -> Option<Self> {
        self.checked_add(&step).filter(|sum| *sum < Self::max_value())
    }
}

impl<T> Cost for T where T: Copy + Ord + Debug + Zero + Bounded + CheckedAdd + ToPrimitive + From<u8> {}


/// Cell address on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance - the minimal hop count between two cells on an open grid
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// State of a single cell
/// Designation flags, wall and weight persist across searches.
/// `visited`, `distance` and `previous` are scratch fields owned by the current search.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<C> {
    pub(crate) coord: Coord,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub(crate) is_wall: bool,
    pub(crate) weight: C,
    pub(crate) visited: bool,
    pub(crate) distance: C,
    pub(crate) previous: Option<usize>, // index of the discovering node in the grid
}

impl<C: Cost> Node<C> {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            is_start: false,
            is_finish: false,
            is_wall: false,
            weight: C::from(LIGHT_WEIGHT),
            visited: false,
            distance: C::max_value(),
            previous: None,
        }
    }

    fn reset(&mut self) {
        self.visited = false;
        self.distance = C::max_value();
        self.previous = None;
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn weight(&self) -> C {
        self.weight
    }

    /// Discovered by the last search
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Best known distance from the last search origin, `None` while infinite
    pub fn distance(&self) -> Option<C> {
        (self.distance != C::max_value()).then_some(self.distance)
    }
}


/// Dimensions and endpoints used to build a fresh grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub finish: Coord,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Coord::new(10, 15),
            finish: Coord::new(10, 35),
        }
    }
}


/// Fixed size, row-major arena of nodes
/// Exactly one node is the start and one the finish, neither is ever a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<C = u32> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) nodes: Vec<Node<C>>,
    pub(crate) start: usize,
    pub(crate) finish: usize,
}

impl<C: Cost> Grid<C> {

    /// Create an open grid with every weight at `LIGHT_WEIGHT`
    pub fn new(rows: usize, cols: usize, start: Coord, finish: Coord) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }

        let nodes = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Node::new(Coord::new(row, col))))
            .collect();

        let mut grid = Self { rows, cols, nodes, start: 0, finish: 0 };

        let start = grid.checked_index(start)?;
        let finish = grid.checked_index(finish)?;
        if start == finish {
            return Err(GridError::OverlappingEndpoints(grid.coord_of(start)));
        }

        grid.nodes[start].is_start = true;
        grid.nodes[finish].is_finish = true;
        grid.start = start;
        grid.finish = finish;

        Ok(grid)
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::new(config.rows, config.cols, config.start, config.finish)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, rows * cols
    pub fn cell_count(&self) -> usize {
        self.nodes.len()
    }

    /// Designated start cell
    pub fn start(&self) -> Coord {
        self.coord_of(self.start)
    }

    /// Designated finish cell
    pub fn finish(&self) -> Coord {
        self.coord_of(self.finish)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Linear arena index of `coord`
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    pub(crate) fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        self.index_of(coord).ok_or(GridError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Cell address of a linear arena index
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    pub fn node(&self, coord: Coord) -> Option<&Node<C>> {
        self.index_of(coord).map(|index| &self.nodes[index])
    }

    /// All nodes in row-major order
    pub fn nodes(&self) -> &[Node<C>] {
        &self.nodes
    }

    /// Distance recorded by the last search, `None` if unreached or out of bounds
    pub fn distance(&self, coord: Coord) -> Option<C> {
        self.node(coord).and_then(Node::distance)
    }

    /// Cell the last search discovered `coord` from
    pub fn predecessor(&self, coord: Coord) -> Option<Coord> {
        self.node(coord)
            .and_then(|node| node.previous)
            .map(|index| self.coord_of(index))
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.node(coord).is_some_and(Node::is_visited)
    }

    /// In-bounds orthogonal neighbors, ordered north, south, west, east
    /// Walls are included; traversal rules are left to the search.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.index_of(coord)
            .into_iter()
            .flat_map(move |index| orthogonal(index, self.rows, self.cols))
            .map(move |index| self.coord_of(index))
    }

    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), GridError> {
        let index = self.checked_index(coord)?;
        let node = &mut self.nodes[index];
        if wall && (node.is_start || node.is_finish) {
            return Err(GridError::ProtectedCell(coord));
        }
        trace!(%coord, wall, "set wall");
        node.is_wall = wall;
        Ok(())
    }

    /// Flip the wall flag, returning the new state
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<bool, GridError> {
        let wall = !self.node(coord).is_some_and(Node::is_wall);
        self.set_wall(coord, wall)?;
        Ok(wall)
    }

    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut() {
            node.is_wall = false;
        }
    }

    pub fn set_weight(&mut self, coord: Coord, weight: C) -> Result<(), GridError> {
        let index = self.checked_index(coord)?;
        if weight <= C::zero() {
            return Err(GridError::NonPositiveWeight(coord));
        }
        trace!(%coord, ?weight, "set weight");
        self.nodes[index].weight = weight;
        Ok(())
    }

    /// Switch between `LIGHT_WEIGHT` and `HEAVY_WEIGHT`, returning the new weight
    /// Any weight other than heavy becomes heavy.
    pub fn toggle_weight(&mut self, coord: Coord) -> Result<C, GridError> {
        let index = self.checked_index(coord)?;
        let heavy = C::from(HEAVY_WEIGHT);
        let weight = if self.nodes[index].weight == heavy {
            C::from(LIGHT_WEIGHT)
        } else {
            heavy
        };
        self.set_weight(coord, weight)?;
        Ok(weight)
    }

    /// Clear `visited`, `distance` and `previous` on every node
    pub fn reset_search_state(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
    }

    /// Validate the endpoints, reset scratch state and seed the origin
    /// Returns the arena indices of start and end.
    pub(crate) fn prepare_search(&mut self, start: Coord, end: Coord) -> Result<(usize, usize), GridError> {
        let start_index = self.checked_index(start)?;
        let end_index = self.checked_index(end)?;

        for (index, coord) in [(start_index, start), (end_index, end)] {
            if self.nodes[index].is_wall {
                return Err(GridError::BlockedEndpoint(coord));
            }
        }

        self.reset_search_state();
        let origin = &mut self.nodes[start_index];
        origin.visited = true;
        origin.distance = C::zero();

        Ok((start_index, end_index))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> Grid {
        Grid::new(3, 4, Coord::new(0, 0), Coord::new(2, 3)).unwrap()
    }

    #[test]
    fn test_new_grid_designates_endpoints() {
        let grid = small_grid();

        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.start(), Coord::new(0, 0));
        assert_eq!(grid.finish(), Coord::new(2, 3));

        let starts = grid.nodes().iter().filter(|n| n.is_start()).count();
        let finishes = grid.nodes().iter().filter(|n| n.is_finish()).count();
        assert_eq!((starts, finishes), (1, 1));

        // Every cell starts open, light and unreached
        for node in grid.nodes() {
            assert!(!node.is_wall());
            assert_eq!(node.weight(), 1);
            assert_eq!(node.distance(), None);
            assert!(!node.is_visited());
        }
    }

    #[test]
    fn test_new_grid_rejects_bad_shapes() {
        let origin = Coord::new(0, 0);

        assert!(matches!(
            Grid::<u32>::new(0, 5, origin, Coord::new(0, 1)),
            Err(GridError::EmptyGrid { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            Grid::<u32>::new(2, 2, origin, Coord::new(2, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Grid::<u32>::new(2, 2, origin, origin),
            Err(GridError::OverlappingEndpoints(c)) if c == origin
        ));
    }

    #[test]
    fn test_default_config_matches_visualizer_board() {
        let grid: Grid = Grid::from_config(&GridConfig::default()).unwrap();

        assert_eq!((grid.rows(), grid.cols()), (20, 50));
        assert_eq!(grid.start(), Coord::new(10, 15));
        assert_eq!(grid.finish(), Coord::new(10, 35));
    }

    #[test]
    fn test_index_round_trip() {
        let grid = small_grid();

        assert_eq!(grid.index_of(Coord::new(1, 2)), Some(6));
        assert_eq!(grid.coord_of(6), Coord::new(1, 2));
        assert_eq!(grid.index_of(Coord::new(3, 0)), None);
        assert_eq!(grid.index_of(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_neighbors_fixed_order_and_bounds() {
        let grid = small_grid();

        // interior cell: north, south, west, east
        let interior: Vec<_> = grid.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(interior, vec![
            Coord::new(0, 1),
            Coord::new(2, 1),
            Coord::new(1, 0),
            Coord::new(1, 2),
        ]);

        // corner cell only has south and east
        let corner: Vec<_> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(1, 0), Coord::new(0, 1)]);

        // bottom right corner only has north and west
        let far: Vec<_> = grid.neighbors(Coord::new(2, 3)).collect();
        assert_eq!(far, vec![Coord::new(1, 3), Coord::new(2, 2)]);

        assert_eq!(grid.neighbors(Coord::new(9, 9)).count(), 0);
    }

    #[test]
    fn test_neighbors_include_walls() {
        let mut grid = small_grid();
        grid.set_wall(Coord::new(0, 1), true).unwrap();

        assert!(grid.neighbors(Coord::new(0, 0)).any(|c| c == Coord::new(0, 1)));
    }

    #[test]
    fn test_walls_cannot_cover_endpoints() {
        let mut grid = small_grid();

        assert!(matches!(grid.set_wall(grid.start(), true), Err(GridError::ProtectedCell(_))));
        assert!(matches!(grid.toggle_wall(grid.finish()), Err(GridError::ProtectedCell(_))));

        // Clearing a wall flag on an endpoint is harmless
        assert!(grid.set_wall(grid.start(), false).is_ok());
    }

    #[test]
    fn test_toggle_wall_and_clear() {
        let mut grid = small_grid();
        let cell = Coord::new(1, 1);

        assert!(grid.toggle_wall(cell).unwrap());
        assert!(grid.node(cell).unwrap().is_wall());
        assert!(!grid.toggle_wall(cell).unwrap());
        assert!(!grid.node(cell).unwrap().is_wall());

        grid.set_wall(cell, true).unwrap();
        grid.set_wall(Coord::new(2, 0), true).unwrap();
        grid.clear_walls();
        assert!(grid.nodes().iter().all(|n| !n.is_wall()));
    }

    #[test]
    fn test_toggle_weight_is_two_valued() {
        let mut grid = small_grid();
        let cell = Coord::new(1, 1);

        assert_eq!(grid.toggle_weight(cell).unwrap(), 10);
        assert_eq!(grid.toggle_weight(cell).unwrap(), 1);

        // A custom weight is not cycled arithmetically, it snaps to heavy
        grid.set_weight(cell, 4).unwrap();
        assert_eq!(grid.toggle_weight(cell).unwrap(), 10);
        assert_eq!(grid.toggle_weight(cell).unwrap(), 1);
    }

    #[test]
    fn test_set_weight_rejects_non_positive() {
        let mut grid: Grid<i64> = Grid::new(2, 2, Coord::new(0, 0), Coord::new(1, 1)).unwrap();

        assert!(matches!(grid.set_weight(Coord::new(0, 1), 0), Err(GridError::NonPositiveWeight(_))));
        assert!(matches!(grid.set_weight(Coord::new(0, 1), -3), Err(GridError::NonPositiveWeight(_))));
        assert!(grid.set_weight(Coord::new(0, 1), 7).is_ok());
        assert_eq!(grid.node(Coord::new(0, 1)).unwrap().weight(), 7);
    }

    #[test]
    fn test_prepare_search_resets_and_seeds_origin() {
        let mut grid = small_grid();
        grid.nodes[5].visited = true;
        grid.nodes[5].distance = 3;
        grid.nodes[5].previous = Some(4);

        let (start, end) = grid.prepare_search(Coord::new(0, 0), Coord::new(2, 3)).unwrap();
        assert_eq!((start, end), (0, 11));

        assert!(!grid.nodes[5].visited);
        assert_eq!(grid.nodes[5].previous, None);
        assert_eq!(grid.distance(Coord::new(1, 1)), None);
        assert_eq!(grid.distance(Coord::new(0, 0)), Some(0));
        assert!(grid.is_visited(Coord::new(0, 0)));
    }

    #[test]
    fn test_prepare_search_rejects_bad_endpoints() {
        let mut grid = small_grid();
        let wall = Coord::new(1, 1);
        grid.set_wall(wall, true).unwrap();

        assert!(matches!(
            grid.prepare_search(Coord::new(0, 0), Coord::new(5, 5)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.prepare_search(wall, Coord::new(2, 3)),
            Err(GridError::BlockedEndpoint(c)) if c == wall
        ));
        assert!(matches!(
            grid.prepare_search(Coord::new(0, 0), wall),
            Err(GridError::BlockedEndpoint(c)) if c == wall
        ));
    }

    #[test]
    fn test_add_step_stops_below_sentinel() {
        assert_eq!(250u8.add_step(4), Some(254));
        assert_eq!(250u8.add_step(5), None);
        assert_eq!(250u8.add_step(10), None);
        assert_eq!(0u32.add_step(1), Some(1));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(2, 7).manhattan(Coord::new(5, 1)), 9);
        assert_eq!(Coord::new(3, 3).manhattan(Coord::new(3, 3)), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_defaults_missing_fields() {
        let config: GridConfig = serde_json::from_str(r#"{"rows": 5, "cols": 6}"#).unwrap();

        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 6);
        assert_eq!(config.start, GridConfig::default().start);
    }
}
