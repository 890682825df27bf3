//! The error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors produced while constructing, validating, or solving an exact
/// cover problem.
///
/// Only [`Error::NoSolution`] is an expected outcome of a well-formed
/// problem; every other variant indicates malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A row or column name contains a forbidden character.
    ///
    /// Names must survive both line- and comma-delimited rendering, so
    /// whitespace other than the ASCII space and commas are rejected.
    #[error("invalid name {name:?}: contains {found}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// Description of the forbidden character.
        found: &'static str,
    },

    /// A dimension is zero, or a buffer length disagrees with the declared
    /// dimensions.
    #[error("{0}")]
    ShapeMismatch(String),

    /// Two selected rows cover the same column.
    #[error("conflicting selection: rows {first:?} and {second:?} both cover column {column:?}")]
    ConflictingSelection {
        /// Name of the first selected row covering the column.
        first: String,
        /// Name of the second selected row covering the column.
        second: String,
        /// Name of the column covered twice.
        column: String,
    },

    /// A column of a complete solution is not covered by any selected row.
    #[error("column {0:?} is not covered by any selected row")]
    UncoveredColumn(String),

    /// Search exhausted every branch without finding an exact cover.
    #[error("no solution exists")]
    NoSolution,

    /// The solver reached a state that should be impossible for validated
    /// input.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),

    /// A sudoku puzzle failed to parse, or its givens break the sudoku
    /// rules.
    #[error("{0}")]
    InvalidPuzzle(String),
}
