//! Single-threaded baseline multiplier.

use crate::error::Error;
use crate::matrix::Matrix;

/// Multiply two equally sized square matrices in one pass, no parallelism.
///
/// Textbook triple loop in i-j-k order:
/// `result[i][j] = Σ_k left[i][k] * right[k][j]` with `k` ascending. The
/// partitioned strategies accumulate each element in exactly this order,
/// so all three produce bit-identical results.
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
    let c = result.as_mut_slice();

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }

    Ok(result)
}
