//! Row-partitioned multiplier: one work unit per output row.

use rayon::prelude::*;

use crate::error::Error;
use crate::matrix::Matrix;

/// Multiply by fanning out one work unit per output row.
///
/// The result's flat storage is split into `n` disjoint row slices with
/// `par_chunks_mut`, so the worker for row `i` owns that output row
/// outright and writes it without a lock. Each worker reads `left`'s row
/// `i` and `right`'s full grid, and computes all `n` dot products with
/// `k` ascending (the shared accumulation order). The call returns only
/// once every row has been written; completion order between rows does
/// not matter because no two workers share a write target.
///
/// Rows map 1:1 onto work units. All rows cost the same, so there is
/// nothing to load-balance; the pool underneath bounds how many run at
/// once.
///
/// Returns [`Error::SizeMismatch`] if the operands disagree on size.
pub fn multiply(left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    if left.size() != right.size() {
        return Err(Error::SizeMismatch(left.size(), right.size()));
    }

    let n = left.size();
    let a = left.as_slice();
    let b = right.as_slice();
    let mut result = Matrix::zeroed(n);

    result
        .as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, out_row)| {
            let left_row = &a[i * n..(i + 1) * n];
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += left_row[k] * b[k * n + j];
                }
                out_row[j] = sum;
            }
        });

    Ok(result)
}
