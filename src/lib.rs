//! Chained matrix multiplication under three execution strategies.
//!
//! The benchmark multiplies dense square matrices over and over
//! (`result = left * right`, then `left = result`, with `right` held
//! fixed) and times the whole chain. The interesting part is how each
//! strategy partitions one multiplication across workers: not at all
//! (`U`), one work unit per output row (`R`), or one work unit per output
//! element (`E`). Workers write into disjoint regions of the shared
//! result, so the strategies need no locking and agree bit-for-bit.
//!
//! ## Usage
//!
//! ```
//! use matmul_chain::{Matrix, Method, multiply};
//!
//! let left = Matrix::generated(4).unwrap();
//! let right = Matrix::generated(4).unwrap();
//!
//! let sequential = multiply(Method::Sequential, &left, &right).unwrap();
//! let by_row = multiply(Method::Row, &left, &right).unwrap();
//! let by_element = multiply(Method::Element, &left, &right).unwrap();
//!
//! // Same accumulation order everywhere: results match exactly.
//! assert_eq!(sequential, by_row);
//! assert_eq!(sequential, by_element);
//! ```
//!
//! ## What's inside
//!
//! - `sequential`: the triple-loop baseline
//! - `threaded::row`: row-partitioned multiply on the rayon pool
//! - `threaded::element`: element-partitioned multiply on the rayon pool
//! - `chain`: the driver that feeds each product back in as the next
//!   left operand

pub mod chain;
pub mod error;
pub mod matrix;
pub mod sequential;
pub mod threaded;

pub use chain::ChainConfig;
pub use error::Error;
pub use matrix::Matrix;

use tracing::warn;

/// Multiplication strategy, selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Unthreaded triple loop (`U`).
    Sequential,
    /// One worker-pool work unit per output row (`R`).
    Row,
    /// One worker-pool work unit per output element (`E`).
    Element,
}

impl Method {
    /// Parse a method string leniently.
    ///
    /// `U`, `R` and `E` select the matching strategy. Anything else falls
    /// back to the unthreaded strategy with a warning instead of failing
    /// the run.
    pub fn parse(value: &str) -> Method {
        match value {
            "U" => Method::Sequential,
            "R" => Method::Row,
            "E" => Method::Element,
            other => {
                warn!(method = other, "unknown method, defaulting to unthreaded");
                Method::Sequential
            }
        }
    }
}

/// Multiply two square matrices with the selected strategy.
///
/// All strategies compute `result[i][j] = Σ_k left[i][k] * right[k][j]`
/// with identical accumulation order; they differ only in how the output
/// is partitioned across workers. Returns [`Error::SizeMismatch`] if the
/// operand sizes differ.
pub fn multiply(method: Method, left: &Matrix, right: &Matrix) -> Result<Matrix, Error> {
    match method {
        Method::Sequential => sequential::multiply(left, right),
        Method::Row => threaded::row::multiply(left, right),
        Method::Element => threaded::element::multiply(left, right),
    }
}
