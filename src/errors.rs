use thiserror::Error;

use crate::grid::Coord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("search endpoint {0} is a wall")]
    BlockedEndpoint(Coord),

    #[error("start and finish both sit on {0}")]
    OverlappingEndpoints(Coord),

    #[error("cell {0} is the start or finish and cannot become a wall")]
    ProtectedCell(Coord),

    #[error("weight of cell {0} must be positive")]
    NonPositiveWeight(Coord),

    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("layout line {line}: {reason}")]
    Layout { line: usize, reason: String },

    #[error("distance to cell {0} does not fit the grid's cost type")]
    CostOverflow(Coord),

    // Target was never reached by the last search
    #[error("no path found")]
    NoPathFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}', expected bfs, dfs or dijkstra")]
pub struct ParseAlgorithmError(pub String);
