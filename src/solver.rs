//! Algorithm X: depth-first backtracking search over a dancing links
//! [`Grid`].

use crate::{grid::Grid, CompleteSolution, Error, Problem};

/// Solve an exact cover problem, returning the first complete solution
/// found.
///
/// The problem is validated, converted to a dancing links grid, and every
/// pre-selected row is applied as an initial cover operation before search
/// begins. The returned solution's selection mask is the union of the
/// pre-selections and the rows discovered during search.
///
/// Fails with [`Error::NoSolution`] if no assignment extending the
/// pre-selections covers every column exactly once.
pub fn solve(problem: Problem) -> Result<CompleteSolution, Error> {
    let mut grid = Grid::build(&problem)?;

    let preselected: Vec<usize> = problem
        .selected_rows()
        .iter()
        .enumerate()
        .filter_map(|(row, &selected)| selected.then_some(row))
        .collect();

    for &head in &grid.first_elements_in_rows(&preselected)? {
        grid.select_row(head);
    }

    log::debug!(
        "Searching for a cover of [{}] columns with [{}] rows pre-selected.",
        problem.matrix().num_cols(),
        preselected.len()
    );

    let mut discovered = Vec::new();
    if !find_solution(&mut grid, &mut discovered) {
        return Err(Error::NoSolution);
    }

    let (matrix, mut selected_rows) = problem.into_parts();
    for row in discovered {
        selected_rows[row] = true;
    }

    Ok(CompleteSolution::new(matrix, selected_rows))
}

/// Recursive core of Algorithm X.
///
/// Chooses the leftmost column of minimum size (scanning the header ring
/// from `root.right`), tries each of its rows in `down` order, and recurses
/// with the row selected. On failure the row is unselected, restoring the
/// grid exactly. Row indices of the winning branch accumulate in `solution`
/// as the recursion unwinds.
///
/// Every recursion removes at least one column from the header ring, so the
/// depth is bounded by the number of columns.
fn find_solution(grid: &mut Grid, solution: &mut Vec<usize>) -> bool {
    let root = grid.root();
    if grid.right[root] == root {
        return true;
    }

    // The "S-heuristic": branch on the column with the fewest rows to
    // minimise fan-out. Ties break to the first column encountered.
    let mut chosen = grid.right[root];
    let mut header = grid.right[chosen];
    while header != root {
        if grid.col_size[header] < grid.col_size[chosen] {
            chosen = header;
        }
        header = grid.right[header];
    }

    log::trace!(
        "Branching on column [{}] with [{}] candidate rows.",
        chosen,
        grid.col_size[chosen]
    );

    let mut elem = grid.down[chosen];
    while elem != chosen {
        grid.select_row(elem);

        if find_solution(grid, solution) {
            solution.push(grid.row_num[elem] as usize);
            return true;
        }

        grid.unselect_row(elem);
        elem = grid.down[elem];
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Name};

    fn matrix(rows: &[&str], cols: &[&str], elems: &[bool]) -> Matrix {
        Matrix::new(
            rows.iter().copied().map(Name::from),
            cols.iter().copied().map(Name::from),
            elems.iter().copied(),
        )
    }

    #[test]
    fn identity_matrix_selects_every_row() {
        let problem = Problem::unconstrained(matrix(
            &["r1", "r2"],
            &["c1", "c2"],
            &[true, false, false, true],
        ));

        let solution = solve(problem).unwrap();
        assert_eq!(solution.selected_rows(), &[true, true]);
        assert_eq!(solution.validate(), Ok(()));
    }

    #[test]
    #[rustfmt::skip]
    fn preselection_forces_the_extension() {
        let problem = Problem::new(
            matrix(
                &["r1", "r2", "r3"],
                &["c1", "c2"],
                &[
                    true,  false,
                    false, true,
                    true,  true,
                ],
            ),
            [true, false, false],
        );

        let solution = solve(problem).unwrap();
        assert_eq!(solution.selected_rows(), &[true, true, false]);
    }

    #[test]
    #[rustfmt::skip]
    fn preselection_may_already_be_complete() {
        let problem = Problem::new(
            matrix(
                &["r1", "r2", "r3"],
                &["c1", "c2"],
                &[
                    true,  false,
                    false, true,
                    true,  true,
                ],
            ),
            [false, false, true],
        );

        let solution = solve(problem).unwrap();
        assert_eq!(solution.selected_rows(), &[false, false, true]);
    }

    #[test]
    fn uncoverable_column_has_no_solution() {
        // c2 has no true entry anywhere.
        let problem = Problem::unconstrained(matrix(
            &["r1", "r2"],
            &["c1", "c2"],
            &[true, false, true, false],
        ));

        assert_eq!(solve(problem), Err(Error::NoSolution));
    }

    #[test]
    fn conflicting_preselection_fails_validation_before_search() {
        let problem = Problem::new(matrix(&["r1", "r2"], &["c1"], &[true, true]), [true, true]);

        assert_eq!(
            solve(problem),
            Err(Error::ConflictingSelection {
                first: "r1".into(),
                second: "r2".into(),
                column: "c1".into(),
            })
        );
    }

    #[test]
    fn preselected_row_without_elements_is_rejected() {
        let problem = Problem::new(
            matrix(&["r1", "r2"], &["c1"], &[false, true]),
            [true, false],
        );

        assert!(matches!(
            solve(problem),
            Err(Error::InternalInvariantViolation(_))
        ));
    }
}
