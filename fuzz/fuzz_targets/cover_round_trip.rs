#![no_main]

use exact_cover::{grid::Grid, Matrix, Name, Problem};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct RoundTripInput {
    num_rows: usize,
    num_cols: usize,
    elems: Vec<bool>,
    cover_columns: Vec<usize>,
    select_element: usize,
}

impl<'a> arbitrary::Arbitrary<'a> for RoundTripInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_rows = u.int_in_range(1..=6)?;
        let num_cols = u.int_in_range(1..=6)?;

        let elems = (0..num_rows * num_cols)
            .map(|_| u.arbitrary())
            .collect::<arbitrary::Result<_>>()?;

        let depth = u.int_in_range(0..=num_cols)?;
        let cover_columns = (0..depth)
            .map(|_| u.int_in_range(0..=num_cols - 1))
            .collect::<arbitrary::Result<_>>()?;

        let select_element = u.arbitrary()?;

        Ok(RoundTripInput {
            num_rows,
            num_cols,
            elems,
            cover_columns,
            select_element,
        })
    }
}

fuzz_target!(|data: RoundTripInput| {
    let matrix = Matrix::new(
        (0..data.num_rows).map(|row| Name::from(format!("r{row}"))),
        (0..data.num_cols).map(|col| Name::from(format!("c{col}"))),
        data.elems.iter().copied(),
    );
    let pristine = Grid::build(&Problem::unconstrained(matrix)).unwrap();

    // Any sequence of matched cover/uncover pairs applied in LIFO order
    // must restore every array cell exactly.
    let mut covered: Vec<usize> = Vec::new();
    let mut grid = pristine.clone();
    for &col in &data.cover_columns {
        if covered.contains(&col) {
            continue;
        }
        grid.cover_column(col);
        covered.push(col);
    }
    for &col in covered.iter().rev() {
        grid.uncover_column(col);
    }
    assert_eq!(grid, pristine);

    // Same for selecting and unselecting a whole row.
    if pristine.num_elems() > 0 {
        let elem = pristine.num_cols() + data.select_element % pristine.num_elems();
        let mut grid = pristine.clone();
        grid.select_row(elem);
        grid.unselect_row(elem);
        assert_eq!(grid, pristine);
    }
});
