//! Error types for matrix construction and multiplication.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Operand dimensions disagree at a multiply boundary. Fatal: the
    /// chain aborts before printing anything.
    #[error("matrix size mismatch: left is {0}x{0}, right is {1}x{1}")]
    SizeMismatch(usize, usize),

    /// Matrix generation was asked for a zero-sized grid.
    #[error("matrix size must be at least 1")]
    InvalidSize,

    /// A caller-supplied grid is not square.
    #[error("grid is not square: row {row} has {found} elements, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The worker pool could not be built at startup.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
