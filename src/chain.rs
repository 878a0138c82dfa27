//! Chain driver: repeated multiplication against a fixed right operand.

use tracing::debug;

use crate::error::Error;
use crate::matrix::Matrix;
use crate::{Method, multiply};

/// Configuration for one benchmark run, passed in explicitly rather than
/// read from process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct ChainConfig {
    /// Which multiplier strategy to run.
    pub method: Method,
    /// Chain length: `num_matrices - 1` multiplications are performed.
    pub num_matrices: usize,
    /// Dimension of the square operands.
    pub size: usize,
}

/// Run the multiplication chain described by `config`.
///
/// `left` and `right` start as two freshly generated matrices. Each
/// iteration computes `left * right` with the selected strategy and feeds
/// the product back in as the next `left`; `right` stays fixed for the
/// whole chain, so this is repeated multiplication against a constant
/// operand, not a matrix power. Iteration `i + 1` cannot start before
/// iteration `i` has fully assembled its result, because every strategy
/// blocks until all of its workers are done.
///
/// With `num_matrices <= 1` no multiplication happens and the initial
/// `left` is returned as-is.
pub fn run(config: &ChainConfig) -> Result<Matrix, Error> {
    let mut left = Matrix::generated(config.size)?;
    let right = Matrix::generated(config.size)?;

    for iteration in 1..config.num_matrices {
        debug!(
            iteration,
            total = config.num_matrices - 1,
            "chaining product"
        );
        left = multiply(config.method, &left, &right)?;
    }

    Ok(left)
}
