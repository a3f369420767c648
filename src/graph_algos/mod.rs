pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod frontier;
pub(crate) mod neighbors;
mod path;

use std::fmt;
use std::str::FromStr;

pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use dijkstra::{dijkstra, dijkstra_full};
pub use path::{path_cost, shortest_path};

use crate::errors::{GridError, ParseAlgorithmError};
use crate::grid::{Coord, Cost, Grid};


/// Search strategy over a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Dijkstra,
}

/// Result of a search with its reconstructed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub visited: Vec<Coord>, // visitation order
    pub path: Option<Vec<Coord>>, // start to end, None when end was unreachable
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::BreadthFirst, Algorithm::DepthFirst, Algorithm::Dijkstra];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    /// Run the strategy, returning cells in visitation order
    /// `end` is the last element exactly when it was reached.
    pub fn search<C: Cost>(self, grid: &mut Grid<C>, start: Coord, end: Coord) -> Result<Vec<Coord>, GridError> {
        match self {
            Algorithm::BreadthFirst => breadth_first_search(grid, start, end),
            Algorithm::DepthFirst => depth_first_search(grid, start, end),
            Algorithm::Dijkstra => dijkstra(grid, start, end),
        }
    }

    /// Search then reconstruct the path when `end` was reached
    pub fn run<C: Cost>(self, grid: &mut Grid<C>, start: Coord, end: Coord) -> Result<SearchOutcome, GridError> {
        let visited = self.search(grid, start, end)?;
        let path = match visited.last() {
            Some(&last) if last == end => Some(shortest_path(grid, end)?),
            _ => None,
        };
        Ok(SearchOutcome { visited, path })
    }

    /// `run` between the grid's designated start and finish
    pub fn solve<C: Cost>(self, grid: &mut Grid<C>) -> Result<SearchOutcome, GridError> {
        let (start, finish) = (grid.start(), grid.finish());
        self.run(grid, start, finish)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
