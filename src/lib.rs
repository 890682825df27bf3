#![warn(missing_docs)]

//! An [exact cover](https://en.wikipedia.org/wiki/Exact_cover) solver built
//! on Knuth's [dancing links](https://arxiv.org/abs/cs/0011047) technique
//! and Algorithm X.
//!
//! Given a 0/1 [`Matrix`] whose rows and columns carry names, the solver
//! finds a subset of rows such that every column contains exactly one
//! selected row. Rows may be pre-selected through a [`Problem`]'s selection
//! mask; they participate in the final [`CompleteSolution`] alongside the
//! rows discovered during search.
//!
//! The [`sudoku`] module demonstrates the reduction from 9×9 Sudoku, which
//! encodes as an exact cover instance of 729 candidate placements × 324
//! constraints.
//!
//! ```
//! use exact_cover::{solve, Matrix, Name, Problem};
//!
//! let matrix = Matrix::new(
//!     ["row1", "row2"].map(Name::from),
//!     ["col1", "col2"].map(Name::from),
//!     [true, false, false, true],
//! );
//!
//! let solution = solve(Problem::unconstrained(matrix)).unwrap();
//! assert_eq!(solution.selected_rows(), &[true, true]);
//! ```

pub mod grid;
pub mod sudoku;

mod error;
mod matrix;
mod name;
mod problem;
mod solver;
mod util;

pub use error::Error;
pub use matrix::Matrix;
pub use name::Name;
pub use problem::{CompleteSolution, PartialSolution, Problem};
pub use solver::solve;
