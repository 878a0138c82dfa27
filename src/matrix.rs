//! Square f64 matrix with flat row-major storage.
//!
//! The grid lives in a single `Vec<f64>` indexed as `row * size + col`,
//! so a row is one contiguous slice and the whole grid can be handed to
//! the multipliers without copying. The size is fixed at construction
//! and never changes.

use std::fmt;

use crate::error::Error;

/// A `size × size` grid of f64 values.
///
/// Matrices compare with `==` (exact, element-wise): the three multiply
/// strategies accumulate in the same order, so their results are expected
/// to match bit-for-bit, not approximately.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Generate the deterministic benchmark matrix for a given size.
    ///
    /// Element `(row, col)` is 1.0 on the main diagonal and
    /// `|col - row| + 1.0` everywhere else, so values grow linearly with
    /// distance from the diagonal. The same size always produces the same
    /// matrix, which keeps benchmark runs reproducible without file I/O.
    ///
    /// # Example
    ///
    /// ```
    /// use matmul_chain::Matrix;
    ///
    /// let m = Matrix::generated(3).unwrap();
    /// assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    /// assert_eq!(m.row(1), &[2.0, 1.0, 2.0]);
    /// assert_eq!(m.row(2), &[3.0, 2.0, 1.0]);
    /// ```
    pub fn generated(size: usize) -> Result<Self, Error> {
        if size < 1 {
            return Err(Error::InvalidSize);
        }

        let mut data = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                data.push(if row == col {
                    1.0
                } else {
                    row.abs_diff(col) as f64 + 1.0
                });
            }
        }

        Ok(Self { size, data })
    }

    /// Build a matrix from explicit rows, copying into the flat layout.
    ///
    /// The grid must be square: every row must have exactly as many
    /// elements as there are rows, and there must be at least one row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let size = rows.len();
        if size < 1 {
            return Err(Error::InvalidSize);
        }

        let mut data = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::RaggedGrid {
                    row: index,
                    expected: size,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self { size, data })
    }

    /// All-zero matrix a multiplier fills in. Callers guarantee `size >= 1`.
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// Dimension of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read one element.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for size {}",
            row,
            col,
            self.size
        );
        self.data[row * self.size + col]
    }

    /// Overwrite one element.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.size && col < self.size,
            "index ({}, {}) out of bounds for size {}",
            row,
            col,
            self.size
        );
        self.data[row * self.size + col] = value;
    }

    /// One row as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.size..(index + 1) * self.size]
    }

    /// Replace a full row.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or `values` does not have
    /// exactly `size` elements.
    pub fn set_row(&mut self, index: usize, values: &[f64]) {
        assert_eq!(
            values.len(),
            self.size,
            "row {}: expected {} values, got {}",
            index,
            self.size,
            values.len()
        );
        self.data[index * self.size..(index + 1) * self.size].copy_from_slice(values);
    }

    /// Extract one column as a new vector. O(size) strided reads.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column(&self, index: usize) -> Vec<f64> {
        assert!(
            index < self.size,
            "column {} out of bounds for size {}",
            index,
            self.size
        );
        let mut column = Vec::with_capacity(self.size);
        for row in 0..self.size {
            column.push(self.data[row * self.size + index]);
        }
        column
    }

    /// The whole grid, flat row-major. Multiplier workers read operands
    /// through this to avoid per-row copies.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat grid. Only the multipliers use this, to split the
    /// result into disjoint per-worker regions.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.size)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:>11.1}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
