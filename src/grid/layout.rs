use std::fmt;

use super::{Coord, Cost, Grid, HEAVY_WEIGHT, LIGHT_WEIGHT};
use crate::errors::GridError;


impl<C: Cost> Grid<C> {

    /// Build a grid from one string per row
    ///
    /// | Char | Cell |
    /// |---|---|
    /// | `.` | open, weight 1 |
    /// | `#` | wall |
    /// | `S` | start |
    /// | `F` | finish |
    /// | `w` | heavy, weight 10 |
    /// | `1`..`9` | open with that weight |
    ///
    /// Every row must have the same length and the layout must hold exactly one `S` and one `F`.
    ///
    /// ```
    /// use gridsearch::{Coord, Grid};
    ///
    /// let grid: Grid = Grid::from_layout(&[
    ///     "S.#",
    ///     ".wF",
    /// ]).unwrap();
    ///
    /// assert_eq!(grid.start(), Coord::new(0, 0));
    /// assert_eq!(grid.finish(), Coord::new(1, 2));
    /// assert!(grid.node(Coord::new(0, 2)).unwrap().is_wall());
    /// assert_eq!(grid.node(Coord::new(1, 1)).unwrap().weight(), 10);
    /// ```
    pub fn from_layout(lines: &[&str]) -> Result<Self, GridError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        let mut weights = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let line_no = row + 1;
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::Layout {
                    line: line_no,
                    reason: format!("expected {cols} cells, found {found}"),
                });
            }

            for (col, cell) in line.chars().enumerate() {
                let coord = Coord::new(row, col);
                match cell {
                    '.' => {}
                    '#' => walls.push(coord),
                    'w' => weights.push((coord, C::from(HEAVY_WEIGHT))),
                    '1'..='9' => {
                        // The match arm guarantees a single decimal digit
                        let digit = cell as u8 - b'0';
                        weights.push((coord, C::from(digit)));
                    }
                    'S' => place_endpoint(&mut start, coord, 'S', line_no)?,
                    'F' => place_endpoint(&mut finish, coord, 'F', line_no)?,
                    other => {
                        return Err(GridError::Layout {
                            line: line_no,
                            reason: format!("unrecognized cell '{other}' at column {}", col + 1),
                        });
                    }
                }
            }
        }

        let missing = |symbol: char| GridError::Layout {
            line: rows,
            reason: format!("layout has no '{symbol}' cell"),
        };
        let start = start.ok_or_else(|| missing('S'))?;
        let finish = finish.ok_or_else(|| missing('F'))?;

        let mut grid = Self::new(rows, cols, start, finish)?;
        for coord in walls {
            grid.set_wall(coord, true)?;
        }
        for (coord, weight) in weights {
            grid.set_weight(coord, weight)?;
        }

        Ok(grid)
    }
}

fn place_endpoint(slot: &mut Option<Coord>, coord: Coord, symbol: char, line: usize) -> Result<(), GridError> {
    if let Some(first) = slot {
        return Err(GridError::Layout {
            line,
            reason: format!("second '{symbol}' at {coord}, first was at {first}"),
        });
    }
    *slot = Some(coord);
    Ok(())
}


/// Renders the grid in the `from_layout` alphabet, weights it cannot express show as `+`
impl<C: Cost> fmt::Display for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.nodes.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for node in cells {
                let symbol = if node.is_start {
                    'S'
                } else if node.is_finish {
                    'F'
                } else if node.is_wall {
                    '#'
                } else {
                    match node.weight.to_u8() {
                        Some(LIGHT_WEIGHT) => '.',
                        Some(HEAVY_WEIGHT) => 'w',
                        Some(digit @ 2..=9) => char::from(b'0' + digit),
                        _ => '+',
                    }
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
