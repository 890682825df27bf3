#![no_main]

use exact_cover::{solve, Matrix, Name, Problem};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct SolveInput {
    num_rows: usize,
    num_cols: usize,
    elems: Vec<bool>,
    selected_rows: Vec<bool>,
}

impl<'a> arbitrary::Arbitrary<'a> for SolveInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_rows = u.int_in_range(1..=6)?;
        let num_cols = u.int_in_range(1..=6)?;

        let elems = (0..num_rows * num_cols)
            .map(|_| u.arbitrary())
            .collect::<arbitrary::Result<_>>()?;
        let selected_rows = (0..num_rows)
            .map(|_| u.arbitrary())
            .collect::<arbitrary::Result<_>>()?;

        Ok(SolveInput {
            num_rows,
            num_cols,
            elems,
            selected_rows,
        })
    }
}

fuzz_target!(|data: SolveInput| {
    let matrix = Matrix::new(
        (0..data.num_rows).map(|row| Name::from(format!("r{row}"))),
        (0..data.num_cols).map(|col| Name::from(format!("c{col}"))),
        data.elems.iter().copied(),
    );
    let problem = Problem::new(matrix, data.selected_rows.iter().copied());

    // Whatever the input, the solver must either fail cleanly or produce a
    // selection that covers every column exactly once.
    if let Ok(solution) = solve(problem) {
        solution.validate().unwrap();
    }
});
