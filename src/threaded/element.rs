//! Element-partitioned multiplier: one work unit per output element.

use rayon::prelude::*;

use crate::error::Error;
use crate::matrix::Matrix;

/// Multiply by fanning out one work unit per output element, n² in total.
///
/// The flat result is handed out element by element with `par_iter_mut`,
/// so each worker owns exactly one `&mut f64` and no lock guards the
/// shared result. Work unit `idx` computes element
/// `(idx / n, idx % n)` (row-major flattening) as the dot product of
/// `left`'s row and `right`'s column. The call returns only once all n²
/// cells have been written.
///
/// Every distinct column of `right` is extracted once up front and shared
/// read-only across the workers. Extracting inside each work unit would
/// walk the same column n times over; correctness does not depend on the
/// cache, only the constant factor does.
///
/// Returns [`Error::SizeMismatch`] if the operands disagree on size.
pub fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    if left.size() != right.size() {
        return Err(Error::SizeMismatch(left.size(), right.size()));
    }

    let n = left.size();
    let a = left.as_slice();
    let columns: Vec<Vec<f64>> = (0..n).map(|col| right.column(col)).collect();
    let mut result = Matrix::zeroed(n);

    result
        .as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(idx, out)| {
            let row = idx / n;
            let col = idx % n;
            *out = dot(&a[row * n..(row + 1) * n], &columns[col]);
        });

    Ok(result)
}

/// Dot product with `k` ascending, matching the sequential accumulation
/// order exactly.
fn dot(row: &[f64], column: &[f64]) -> f64 {
    row.iter().zip(column).map(|(l, r)| l * r).sum()
}
