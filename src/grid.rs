//! The toroidal doubly-linked sparse matrix behind the dancing links
//! technique, stored as one arena of parallel index arrays.
//!
//! Rather than a pointer graph, every node is an integer index into the
//! `left`/`right`/`up`/`down` arrays. Column headers occupy indices
//! `[0, num_cols)`, element nodes follow in row-major append order, and the
//! root header closes the header ring at the final index. The layout is
//! deterministic for a given problem, so tests can compare the arrays
//! literally.

use crate::{Error, Problem};

/// A dancing links instance for one exact cover problem.
///
/// Rows are circular doubly-linked through `left`/`right`; columns are
/// circular doubly-linked through `up`/`down`, starting and ending at the
/// column header. The ring of un-covered column headers runs through the
/// root via `left`/`right`. [`Grid::cover_column`] and
/// [`Grid::uncover_column`] mutate the structure in place; matched pairs
/// applied in LIFO order restore every array cell exactly, which is what
/// makes depth-first search with in-place mutation correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) left: Vec<usize>,
    pub(crate) right: Vec<usize>,
    pub(crate) up: Vec<usize>,
    pub(crate) down: Vec<usize>,
    pub(crate) col_size: Vec<usize>,
    pub(crate) row_num: Vec<isize>,
    pub(crate) col_num: Vec<isize>,
}

impl Grid {
    /// Build the linked structure for `problem`.
    ///
    /// The problem is validated first; the pre-selection mask does not
    /// affect the layout (pre-selected rows are applied afterwards by the
    /// solver via [`Grid::select_row`]).
    pub fn build(problem: &Problem) -> Result<Grid, Error> {
        problem.validate()?;

        let matrix = problem.matrix();
        let num_cols = matrix.num_cols();
        let num_elems = matrix.elems().iter().filter(|&&elem| elem).count();
        let num_nodes = num_cols + num_elems + 1;
        let root = num_nodes - 1;

        let mut grid = Grid {
            left: Vec::with_capacity(num_nodes),
            right: Vec::with_capacity(num_nodes),
            up: Vec::with_capacity(num_nodes),
            down: Vec::with_capacity(num_nodes),
            col_size: vec![0; num_cols],
            row_num: Vec::with_capacity(num_nodes),
            col_num: Vec::with_capacity(num_nodes),
        };

        // Column headers, chained into a ring that the root will close.
        for col in 0..num_cols {
            grid.left.push(if col == 0 { root } else { col - 1 });
            grid.right.push(if col + 1 == num_cols { root } else { col + 1 });
            grid.up.push(col);
            grid.down.push(col);
            grid.row_num.push(-1);
            grid.col_num.push(col as isize);
        }

        // Element nodes in row-major append order. Each is spliced onto the
        // bottom of its column ring; within a row, consecutive allocation
        // means the previous element of the row is always `node - 1`.
        for row in 0..matrix.num_rows() {
            let mut first_in_row = true;

            for col in 0..num_cols {
                if !matrix.elem(row, col) {
                    continue;
                }

                let node = grid.row_num.len();
                grid.row_num.push(row as isize);
                grid.col_num.push(col as isize);

                grid.down.push(col);
                grid.up.push(grid.up[col]);
                grid.down[grid.up[col]] = node;
                grid.up[col] = node;
                grid.col_size[col] += 1;

                if first_in_row {
                    grid.left.push(node);
                    grid.right.push(node);
                    first_in_row = false;
                } else {
                    grid.left.push(node - 1);
                    grid.right.push(grid.right[node - 1]);
                    let after = grid.right[node - 1];
                    grid.left[after] = node;
                    grid.right[node - 1] = node;
                }
            }
        }

        // The root header closes the header ring.
        grid.left.push(num_cols - 1);
        grid.right.push(0);
        grid.up.push(root);
        grid.down.push(root);
        grid.row_num.push(-1);
        grid.col_num.push(-1);

        log::debug!(
            "Built grid with [{}] columns and [{}] element nodes.",
            num_cols,
            num_elems
        );

        Ok(grid)
    }

    /// The index of the root header node.
    pub(crate) fn root(&self) -> usize {
        self.left.len() - 1
    }

    /// The number of column header nodes.
    pub fn num_cols(&self) -> usize {
        self.col_size.len()
    }

    /// The number of element nodes.
    ///
    /// Element nodes occupy indices `num_cols()..num_cols() + num_elems()`.
    pub fn num_elems(&self) -> usize {
        self.left.len() - self.num_cols() - 1
    }

    /// Remove column `col` from the header ring, then unlink every row
    /// intersecting `col` from all its other columns.
    ///
    /// The column's own vertical ring is left intact so that
    /// [`Grid::uncover_column`] can restore the structure.
    pub fn cover_column(&mut self, col: usize) {
        let (left, right) = (self.left[col], self.right[col]);
        self.right[left] = right;
        self.left[right] = left;

        let mut elem = self.down[col];
        while elem != col {
            let mut other = self.right[elem];
            while other != elem {
                let (up, down) = (self.up[other], self.down[other]);
                self.down[up] = down;
                self.up[down] = up;
                self.col_size[self.col_num[other] as usize] -= 1;

                other = self.right[other];
            }

            elem = self.down[elem];
        }
    }

    /// The exact mirror of [`Grid::cover_column`]: relink every row
    /// intersecting `col` into its other columns (walking in the opposite
    /// order), then relink the header into the header ring.
    pub fn uncover_column(&mut self, col: usize) {
        let mut elem = self.up[col];
        while elem != col {
            let mut other = self.left[elem];
            while other != elem {
                self.col_size[self.col_num[other] as usize] += 1;
                self.down[self.up[other]] = other;
                self.up[self.down[other]] = other;

                other = self.left[other];
            }

            elem = self.up[elem];
        }

        let (left, right) = (self.left[col], self.right[col]);
        self.right[left] = col;
        self.left[right] = col;
    }

    /// Commit the row containing element node `elem` to the solution in
    /// progress: cover `elem`'s column, then every other column of the row,
    /// left to right.
    pub fn select_row(&mut self, elem: usize) {
        self.cover_column(self.col_num[elem] as usize);

        let mut other = self.right[elem];
        while other != elem {
            self.cover_column(self.col_num[other] as usize);
            other = self.right[other];
        }
    }

    /// The strict inverse of [`Grid::select_row`]: uncover the row's other
    /// columns right to left, then `elem`'s own column.
    pub fn unselect_row(&mut self, elem: usize) {
        let mut other = self.left[elem];
        while other != elem {
            self.uncover_column(self.col_num[other] as usize);
            other = self.left[other];
        }

        self.uncover_column(self.col_num[elem] as usize);
    }

    /// Locate the first element node of each of the given rows, in order.
    ///
    /// A row with no true entries has no element nodes; pre-selecting such
    /// a row is a caller error, reported here because only the grid knows
    /// the node layout.
    pub fn first_elements_in_rows(&self, rows: &[usize]) -> Result<Vec<usize>, Error> {
        let elements = self.num_cols()..self.num_cols() + self.num_elems();

        rows.iter()
            .map(|&row| {
                elements
                    .clone()
                    .find(|&node| self.row_num[node] == row as isize)
                    .ok_or_else(|| {
                        Error::InternalInvariantViolation(format!(
                            "pre-selected row {row} has no elements to cover"
                        ))
                    })
            })
            .collect()
    }
}
