use exact_cover::{Matrix, Name};

/// Initialise logging for a test binary. Safe to call from every test;
/// only the first call takes effect.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a matrix from string names and a row-major element slice.
#[allow(dead_code)]
pub fn matrix(rows: &[&str], cols: &[&str], elems: &[bool]) -> Matrix {
    Matrix::new(
        rows.iter().copied().map(Name::from),
        cols.iter().copied().map(Name::from),
        elems.iter().copied(),
    )
}

/// Decide by brute enumeration whether any selection extending `base`
/// covers every column of `matrix` exactly once.
///
/// Exponential in the number of rows; only suitable for the small matrices
/// used in tests.
#[allow(dead_code)]
pub fn has_cover_by_brute_force(matrix: &Matrix, base: &[bool]) -> bool {
    let num_rows = matrix.num_rows();
    assert!(num_rows < usize::BITS as usize);

    'candidate: for bits in 0..(1usize << num_rows) {
        let selected = |row: usize| bits & (1 << row) != 0;

        if base.iter().enumerate().any(|(row, &pre)| pre && !selected(row)) {
            continue;
        }

        for col in 0..matrix.num_cols() {
            let covering = (0..num_rows)
                .filter(|&row| selected(row) && matrix.elem(row, col))
                .count();
            if covering != 1 {
                continue 'candidate;
            }
        }

        return true;
    }

    false
}
