//! Dense row-major 0/1 constraint matrix with named axes.

use crate::{name, Error, Name};
use std::fmt;

/// The constraints of an exact cover problem.
///
/// Element `(r, c)` records whether row `r` covers column `c`, and lives at
/// index `r * num_cols + c` of the row-major element buffer. Row names need
/// not be unique; they exist for diagnostics and rendering only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    row_names: Vec<Name>,
    col_names: Vec<Name>,
    elems: Vec<bool>,
}

impl Matrix {
    /// Create a new matrix from its row names, column names, and row-major
    /// elements.
    ///
    /// The shape is not checked here; call [`Matrix::validate`] before
    /// relying on it.
    pub fn new(
        row_names: impl IntoIterator<Item = Name>,
        col_names: impl IntoIterator<Item = Name>,
        elems: impl IntoIterator<Item = bool>,
    ) -> Self {
        Matrix {
            row_names: row_names.into_iter().collect(),
            col_names: col_names.into_iter().collect(),
            elems: elems.into_iter().collect(),
        }
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.row_names.len()
    }

    /// The number of columns.
    pub fn num_cols(&self) -> usize {
        self.col_names.len()
    }

    /// The row names, in order.
    pub fn row_names(&self) -> &[Name] {
        &self.row_names
    }

    /// The column names, in order.
    pub fn col_names(&self) -> &[Name] {
        &self.col_names
    }

    /// The row-major element buffer.
    pub fn elems(&self) -> &[bool] {
        &self.elems
    }

    /// Whether row `row` covers column `col`.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds for a validated matrix.
    pub fn elem(&self, row: usize, col: usize) -> bool {
        self.elems[row * self.num_cols() + col]
    }

    /// Check the matrix shape and names.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_rows() < 1 {
            return Err(Error::ShapeMismatch(format!(
                "exact cover must have at least 1 row, but {} rows were provided",
                self.num_rows()
            )));
        }

        if self.num_cols() < 1 {
            return Err(Error::ShapeMismatch(format!(
                "exact cover must have at least 1 col, but {} cols were provided",
                self.num_cols()
            )));
        }

        if self.elems.len() != self.num_rows() * self.num_cols() {
            return Err(Error::ShapeMismatch(format!(
                "exact cover with {rows} rows and {cols} cols should have {rows}*{cols}={expected} \
                 elems, but {actual} elems were provided instead",
                rows = self.num_rows(),
                cols = self.num_cols(),
                expected = self.num_rows() * self.num_cols(),
                actual = self.elems.len(),
            )));
        }

        name::validate_all(&self.row_names)?;
        name::validate_all(&self.col_names)?;

        Ok(())
    }

    /// Write the rendering of a single row: the row name followed by the
    /// comma-separated names of the columns it covers.
    pub(crate) fn fmt_row(&self, row: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.row_names[row])?;

        let mut covered = self
            .col_names
            .iter()
            .enumerate()
            .filter(|&(col, _)| self.elem(row, col))
            .map(|(_, name)| name);

        if let Some(first) = covered.next() {
            write!(f, "{first}")?;
            for name in covered {
                write!(f, ", {name}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows() {
            self.fmt_row(row, f)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<Name> {
        names.iter().copied().map(Name::from).collect()
    }

    #[test]
    fn valid_matrix_has_no_validation_error() {
        let matrix = Matrix::new(names(&["row1"]), names(&["col1"]), [true]);
        assert_eq!(matrix.validate(), Ok(()));
    }

    #[test]
    fn number_rows_validation() {
        let matrix = Matrix::new(names(&[]), names(&["col1"]), [true]);
        assert_eq!(
            matrix.validate(),
            Err(Error::ShapeMismatch(
                "exact cover must have at least 1 row, but 0 rows were provided".into()
            ))
        );
    }

    #[test]
    fn number_cols_validation() {
        let matrix = Matrix::new(names(&["row1"]), names(&[]), [true]);
        assert_eq!(
            matrix.validate(),
            Err(Error::ShapeMismatch(
                "exact cover must have at least 1 col, but 0 cols were provided".into()
            ))
        );
    }

    #[test]
    fn number_elems_validation() {
        let matrix = Matrix::new(names(&["row1", "row2"]), names(&["col1"]), [true]);
        assert_eq!(
            matrix.validate(),
            Err(Error::ShapeMismatch(
                "exact cover with 2 rows and 1 cols should have 2*1=2 elems, but 1 elems were \
                 provided instead"
                    .into()
            ))
        );
    }

    #[test]
    fn name_validation_failures_propagate() {
        let matrix = Matrix::new(names(&["bad\nrow"]), names(&["col1"]), [true]);
        assert!(matches!(matrix.validate(), Err(Error::InvalidName { .. })));

        let matrix = Matrix::new(names(&["row1"]), names(&["bad,col"]), [true]);
        assert!(matches!(matrix.validate(), Err(Error::InvalidName { .. })));
    }

    #[test]
    #[rustfmt::skip]
    fn display_lists_covered_columns_per_row() {
        let matrix = Matrix::new(
            names(&["row1", "row2", "row3"]),
            names(&["col1", "col2", "col3"]),
            [
                true,  true,  false,
                false, false, true,
                false, false, false,
            ],
        );

        assert_eq!(
            matrix.to_string(),
            "row1: col1, col2\n\
             row2: col3\n\
             row3: \n"
        );
    }
}
