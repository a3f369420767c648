//! Path search over fixed-size 2D grids with walls and weighted cells.
//!
//! A [`Grid`] owns a flat arena of [`Node`]s. Each search strategy takes the grid, a start
//! and an end cell, and returns the cells it visited in order. When the end cell is the
//! last entry, [`shortest_path`] rebuilds the route from each node's predecessor handle.
//!
//! - **Breadth-first** ([`breadth_first_search`]) - fewest hops, ignores weights
//! - **Depth-first** ([`depth_first_search`]) - stack frontier, any reachable path
//! - **Dijkstra** ([`dijkstra`]) - cheapest path where entering a cell costs its weight
//!
//! An unreachable end is not an error: it is simply missing from the visited list.
//!
//! ```
//! use gridsearch::{Algorithm, Grid};
//!
//! let mut grid: Grid = Grid::from_layout(&[
//!     "S.w.F",
//!     ".....",
//! ]).unwrap();
//!
//! let outcome = Algorithm::Dijkstra.solve(&mut grid).unwrap();
//! let path = outcome.path.unwrap();
//!
//! assert_eq!(path.first(), Some(&grid.start()));
//! assert_eq!(grid.distance(grid.finish()), Some(6));
//! ```

mod collections;
pub mod errors;
pub mod graph_algos;
pub mod grid;

pub use errors::{GridError, ParseAlgorithmError};
pub use graph_algos::{
    Algorithm, SearchOutcome, breadth_first_search, depth_first_search, dijkstra, dijkstra_full,
    path_cost, shortest_path,
};
pub use grid::{Coord, Cost, Grid, GridConfig, HEAVY_WEIGHT, LIGHT_WEIGHT, Node};
