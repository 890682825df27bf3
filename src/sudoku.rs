//! 9×9 Sudoku as an exact cover problem.
//!
//! A puzzle becomes a 729 × 324 exact cover instance: one candidate row per
//! (row, column, value) placement, and one constraint column for each of
//! the 81 cells, 81 row-value pairs, 81 column-value pairs, and 81
//! box-value pairs. The givens of the puzzle become pre-selected rows, so
//! the solver only searches the remaining placements.

use crate::{solver, util, Error, Matrix, Name, Problem};
use std::fmt;
use std::str::FromStr;

const SIDE: usize = 9;
const BOX_SIDE: usize = 3;
const NUM_CELLS: usize = SIDE * SIDE;
const NUM_CANDIDATES: usize = NUM_CELLS * SIDE;
const NUM_CONSTRAINTS: usize = 4 * NUM_CELLS;

/// Characters the parser skips over, so that pretty-printed grids
/// round-trip through [`Sudoku::from_str`].
const FRAME_CHARACTERS: [char; 11] = ['│', '─', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼'];

/// A 9×9 sudoku grid in row-major order; `0` denotes an empty cell.
///
/// The same type represents puzzles and solved grids. Parse one with
/// [`str::parse`], render it with `Display`, and solve it with
/// [`Sudoku::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sudoku {
    cells: [u8; NUM_CELLS],
}

impl Sudoku {
    /// The cells in row-major order.
    pub fn cells(&self) -> &[u8; NUM_CELLS] {
        &self.cells
    }

    /// Check the givens against the sudoku rules: no value may repeat
    /// within a row, column, or 3×3 box.
    fn check_givens(&self) -> Result<(), Error> {
        for row in 0..SIDE {
            let mut seen = [false; SIDE + 1];
            for col in 0..SIDE {
                let value = self.cells[row * SIDE + col] as usize;
                if value == 0 {
                    continue;
                }
                if seen[value] {
                    return Err(Error::InvalidPuzzle(format!(
                        "invalid sudoku problem: row {} contains duplicate value {}",
                        row + 1,
                        value
                    )));
                }
                seen[value] = true;
            }
        }

        for col in 0..SIDE {
            let mut seen = [false; SIDE + 1];
            for row in 0..SIDE {
                let value = self.cells[row * SIDE + col] as usize;
                if value == 0 {
                    continue;
                }
                if seen[value] {
                    return Err(Error::InvalidPuzzle(format!(
                        "invalid sudoku problem: column {} contains duplicate value {}",
                        col + 1,
                        value
                    )));
                }
                seen[value] = true;
            }
        }

        for box_row in 0..BOX_SIDE {
            for box_col in 0..BOX_SIDE {
                let mut seen = [false; SIDE + 1];
                for row in box_row * BOX_SIDE..(box_row + 1) * BOX_SIDE {
                    for col in box_col * BOX_SIDE..(box_col + 1) * BOX_SIDE {
                        let value = self.cells[row * SIDE + col] as usize;
                        if value == 0 {
                            continue;
                        }
                        if seen[value] {
                            return Err(Error::InvalidPuzzle(format!(
                                "invalid sudoku problem: 3x3 box at position ({},{}) contains \
                                 duplicate value {}",
                                box_row + 1,
                                box_col + 1,
                                value
                            )));
                        }
                        seen[value] = true;
                    }
                }
            }
        }

        Ok(())
    }

    /// Encode the puzzle as an exact cover problem with the givens
    /// pre-selected.
    ///
    /// The candidate placing `value` at `(row, col)` (all zero-based except
    /// `value`) is matrix row `row * 81 + col * 9 + (value - 1)`; the
    /// constraint columns are the 81 cell constraints followed by the
    /// row-value, column-value, and box-value constraints.
    pub fn to_problem(&self) -> Problem {
        let row_names = util::triples(0..SIDE, 0..SIDE, 1..=SIDE)
            .map(|(row, col, value)| Name::from(format!("R{}C{}#{}", row + 1, col + 1, value)));

        let cell_names = util::pairs(0..SIDE, 0..SIDE)
            .map(|(row, col)| Name::from(format!("cell R{}C{}", row + 1, col + 1)));
        let row_value_names = util::pairs(0..SIDE, 1..=SIDE)
            .map(|(row, value)| Name::from(format!("row {} value {}", row + 1, value)));
        let col_value_names = util::pairs(0..SIDE, 1..=SIDE)
            .map(|(col, value)| Name::from(format!("col {} value {}", col + 1, value)));
        let box_value_names = util::pairs(0..SIDE, 1..=SIDE)
            .map(|(boxn, value)| Name::from(format!("box {} value {}", boxn + 1, value)));
        let col_names = cell_names
            .chain(row_value_names)
            .chain(col_value_names)
            .chain(box_value_names);

        let mut elems = vec![false; NUM_CANDIDATES * NUM_CONSTRAINTS];
        for (row, col, value) in util::triples(0..SIDE, 0..SIDE, 1..=SIDE) {
            let boxn = (row / BOX_SIDE) * BOX_SIDE + col / BOX_SIDE;
            let candidate = row * SIDE * SIDE + col * SIDE + (value - 1);
            let constraints = [
                row * SIDE + col,
                NUM_CELLS + row * SIDE + (value - 1),
                2 * NUM_CELLS + col * SIDE + (value - 1),
                3 * NUM_CELLS + boxn * SIDE + (value - 1),
            ];

            for constraint in constraints {
                elems[candidate * NUM_CONSTRAINTS + constraint] = true;
            }
        }

        let mut selected_rows = vec![false; NUM_CANDIDATES];
        for (cell, &value) in self.cells.iter().enumerate() {
            if value != 0 {
                selected_rows[cell * SIDE + value as usize - 1] = true;
            }
        }

        Problem::new(Matrix::new(row_names, col_names, elems), selected_rows)
    }

    /// Solve the puzzle via the exact cover core.
    pub fn solve(&self) -> Result<Sudoku, Error> {
        let solution = solver::solve(self.to_problem())?;

        let mut cells = [0; NUM_CELLS];
        for (candidate, &selected) in solution.selected_rows().iter().enumerate() {
            if selected {
                cells[candidate / SIDE] = (candidate % SIDE + 1) as u8;
            }
        }

        Ok(Sudoku { cells })
    }
}

impl FromStr for Sudoku {
    type Err = Error;

    /// Parse a puzzle from text.
    ///
    /// Digits `1`-`9` are filled cells; `.`, `·`, and `0` are empty cells.
    /// Whitespace and the box-drawing frame characters are ignored, so both
    /// bare 81-character strings and the output of `Display` parse. The
    /// input must contain exactly 81 recognised cells, and the givens must
    /// obey the sudoku rules.
    fn from_str(input: &str) -> Result<Self, Error> {
        let mut cells = [0; NUM_CELLS];
        let mut count = 0;

        for character in input.chars() {
            let value = match character {
                '1'..='9' => character as u8 - b'0',
                '.' | '·' | '0' => 0,
                c if c.is_whitespace() || FRAME_CHARACTERS.contains(&c) => continue,
                c => {
                    return Err(Error::InvalidPuzzle(format!(
                        "invalid character {c:?} at position {count}"
                    )));
                }
            };

            if count == NUM_CELLS {
                return Err(Error::InvalidPuzzle(
                    "input contains more than 81 cells".into(),
                ));
            }

            cells[count] = value;
            count += 1;
        }

        if count < NUM_CELLS {
            return Err(Error::InvalidPuzzle(format!(
                "input contains only {count} cells, expected 81"
            )));
        }

        let sudoku = Sudoku { cells };
        sudoku.check_givens()?;
        Ok(sudoku)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌───────┬───────┬───────┐")?;

        for row in 0..SIDE {
            if row != 0 && row % BOX_SIDE == 0 {
                writeln!(f, "├───────┼───────┼───────┤")?;
            }

            write!(f, "│")?;
            for col in 0..SIDE {
                match self.cells[row * SIDE + col] {
                    0 => write!(f, " ·")?,
                    value => write!(f, " {value}")?,
                }
                if col % BOX_SIDE == BOX_SIDE - 1 {
                    write!(f, " │")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "└───────┴───────┴───────┘")
    }
}
