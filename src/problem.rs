//! Exact cover problems and their partial or complete solutions.
//!
//! All three types wrap the same matrix-plus-selection payload and differ
//! only in how strictly [`validate`](Problem::validate) checks the
//! selection: a [`Problem`] and a [`PartialSolution`] require every column
//! to be covered at most once, while a [`CompleteSolution`] requires every
//! column to be covered exactly once.

use crate::{Error, Matrix};
use std::fmt;

/// A [`Matrix`] plus the set of rows the caller asserts are part of the
/// solution before search begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    matrix: Matrix,
    selected_rows: Vec<bool>,
}

/// A selection of rows that does not cover any column twice, but may leave
/// columns uncovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSolution {
    matrix: Matrix,
    selected_rows: Vec<bool>,
}

/// A selection of rows covering every column exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteSolution {
    matrix: Matrix,
    selected_rows: Vec<bool>,
}

/// Scan the selected rows of `matrix`, rejecting any column covered by two
/// distinct selected rows. With `require_complete`, also reject columns not
/// covered at all.
fn check_selection(
    matrix: &Matrix,
    selected_rows: &[bool],
    require_complete: bool,
) -> Result<(), Error> {
    matrix.validate()?;

    if selected_rows.len() != matrix.num_rows() {
        return Err(Error::ShapeMismatch(format!(
            "selected rows mask has {} entries, but the matrix has {} rows",
            selected_rows.len(),
            matrix.num_rows()
        )));
    }

    for col in 0..matrix.num_cols() {
        let mut covering: Option<usize> = None;

        for row in 0..matrix.num_rows() {
            if !selected_rows[row] || !matrix.elem(row, col) {
                continue;
            }

            if let Some(previous) = covering {
                return Err(Error::ConflictingSelection {
                    first: matrix.row_names()[previous].to_string(),
                    second: matrix.row_names()[row].to_string(),
                    column: matrix.col_names()[col].to_string(),
                });
            }

            covering = Some(row);
        }

        if require_complete && covering.is_none() {
            return Err(Error::UncoveredColumn(matrix.col_names()[col].to_string()));
        }
    }

    Ok(())
}

/// Write one line per selected row, rendered as in [`Matrix`]'s `Display`.
fn fmt_selection(
    matrix: &Matrix,
    selected_rows: &[bool],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (row, &selected) in selected_rows.iter().enumerate() {
        if selected {
            matrix.fmt_row(row, f)?;
            writeln!(f)?;
        }
    }

    Ok(())
}

impl Problem {
    /// Pair a matrix with a selection mask.
    ///
    /// The pairing is not checked here; call [`Problem::validate`] before
    /// solving.
    pub fn new(matrix: Matrix, selected_rows: impl IntoIterator<Item = bool>) -> Self {
        Problem {
            matrix,
            selected_rows: selected_rows.into_iter().collect(),
        }
    }

    /// A problem with no pre-selected rows.
    pub fn unconstrained(matrix: Matrix) -> Self {
        let selected_rows = vec![false; matrix.num_rows()];
        Problem {
            matrix,
            selected_rows,
        }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The pre-selection mask, one entry per row.
    pub fn selected_rows(&self) -> &[bool] {
        &self.selected_rows
    }

    /// Check the matrix, the mask length, and that no column is covered by
    /// two pre-selected rows.
    pub fn validate(&self) -> Result<(), Error> {
        check_selection(&self.matrix, &self.selected_rows, false)
    }

    /// Split the problem back into its matrix and selection mask.
    pub fn into_parts(self) -> (Matrix, Vec<bool>) {
        (self.matrix, self.selected_rows)
    }
}

impl PartialSolution {
    /// Pair a matrix with a selection mask.
    pub fn new(matrix: Matrix, selected_rows: impl IntoIterator<Item = bool>) -> Self {
        PartialSolution {
            matrix,
            selected_rows: selected_rows.into_iter().collect(),
        }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The selection mask, one entry per row.
    pub fn selected_rows(&self) -> &[bool] {
        &self.selected_rows
    }

    /// Check that the selection covers no column twice.
    pub fn validate(&self) -> Result<(), Error> {
        check_selection(&self.matrix, &self.selected_rows, false)
    }
}

impl CompleteSolution {
    /// Pair a matrix with a selection mask.
    ///
    /// The cover is not checked here; call [`CompleteSolution::validate`]
    /// to assert that it is exact.
    pub fn new(matrix: Matrix, selected_rows: impl IntoIterator<Item = bool>) -> Self {
        CompleteSolution {
            matrix,
            selected_rows: selected_rows.into_iter().collect(),
        }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The selection mask, one entry per row.
    pub fn selected_rows(&self) -> &[bool] {
        &self.selected_rows
    }

    /// Check that the selection covers every column exactly once.
    pub fn validate(&self) -> Result<(), Error> {
        check_selection(&self.matrix, &self.selected_rows, true)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}

impl fmt::Display for PartialSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_selection(&self.matrix, &self.selected_rows, f)
    }
}

impl fmt::Display for CompleteSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_selection(&self.matrix, &self.selected_rows, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Name;

    fn names(names: &[&str]) -> Vec<Name> {
        names.iter().copied().map(Name::from).collect()
    }

    #[test]
    fn empty_selection_is_valid() {
        let matrix = Matrix::new(
            names(&["row1", "row2"]),
            names(&["col1", "col2"]),
            [true, false, false, true],
        );
        let problem = Problem::unconstrained(matrix);
        assert_eq!(problem.validate(), Ok(()));
    }

    #[test]
    fn mask_length_must_match_row_count() {
        let matrix = Matrix::new(names(&["row1", "row2"]), names(&["col1"]), [true, false]);
        let problem = Problem::new(matrix, [true]);
        assert_eq!(
            problem.validate(),
            Err(Error::ShapeMismatch(
                "selected rows mask has 1 entries, but the matrix has 2 rows".into()
            ))
        );
    }

    #[test]
    fn problem_invalid_when_same_column_covered_by_multiple_rows() {
        let matrix = Matrix::new(names(&["row1", "row2"]), names(&["col1"]), [true, true]);
        let problem = Problem::new(matrix, [true, true]);
        assert_eq!(
            problem.validate(),
            Err(Error::ConflictingSelection {
                first: "row1".into(),
                second: "row2".into(),
                column: "col1".into(),
            })
        );
    }

    #[test]
    fn matrix_errors_take_precedence() {
        let matrix = Matrix::new(names(&["row1"]), names(&["col1"]), []);
        let problem = Problem::new(matrix, [true]);
        assert!(matches!(problem.validate(), Err(Error::ShapeMismatch(_))));
    }

    #[test]
    #[rustfmt::skip]
    fn complete_solution_requires_every_column_covered() {
        let matrix = Matrix::new(
            names(&["row1", "row2", "row3"]),
            names(&["col1", "col2", "col3"]),
            [
                true,  true,  false,
                false, false, true,
                false, false, true,
            ],
        );

        let complete = CompleteSolution::new(matrix.clone(), [true, true, false]);
        assert_eq!(complete.validate(), Ok(()));

        let uncovered = CompleteSolution::new(matrix.clone(), [true, false, false]);
        assert_eq!(
            uncovered.validate(),
            Err(Error::UncoveredColumn("col3".into()))
        );

        // The same selection is fine as a partial solution.
        let partial = PartialSolution::new(matrix, [true, false, false]);
        assert_eq!(partial.validate(), Ok(()));
    }

    #[test]
    #[rustfmt::skip]
    fn solutions_display_selected_rows_only() {
        let matrix = Matrix::new(
            names(&["row1", "row2", "row3"]),
            names(&["col1", "col2", "col3"]),
            [
                true,  true,  false,
                false, false, true,
                false, false, true,
            ],
        );

        let solution = CompleteSolution::new(matrix, [true, true, false]);
        assert_eq!(
            solution.to_string(),
            "row1: col1, col2\n\
             row2: col3\n"
        );
    }
}
