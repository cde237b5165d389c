//! Convolution kernels
//!
//! A kernel is a validated rectangular matrix of finite weights. Validation
//! happens entirely at construction so the convolution loop never has to
//! re-check the matrix.

use crate::error::{FilterError, FilterResult};

/// A 2D convolution kernel (row-major, validated rectangular)
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a row matrix.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MalformedKernel`] if the matrix is empty, has
    /// an empty first row, is ragged, or contains a non-finite entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> FilterResult<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(FilterError::MalformedKernel("no rows".to_string()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(FilterError::MalformedKernel("empty rows".to_string()));
        }

        let mut data = Vec::with_capacity(height * width);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(FilterError::MalformedKernel(format!(
                    "row {i} has {} entries, expected {width}",
                    row.len()
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() {
                    return Err(FilterError::MalformedKernel(format!(
                        "non-finite entry {value} at ({i}, {j})"
                    )));
                }
                data.push(value);
            }
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// The fixed 3x3 Gaussian blur kernel (weights sum to 1).
    pub fn gaussian_blur() -> Self {
        let s = 1.0 / 16.0;
        let e = 1.0 / 8.0;
        Self {
            height: 3,
            width: 3,
            data: vec![s, e, s, e, 0.25, e, s, e, s],
        }
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the weight at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.width + j]
    }

    /// Return the kernel rotated by 180 degrees.
    ///
    /// True convolution applies the flipped matrix; cross-correlation would
    /// apply the kernel as given.
    pub fn flipped(&self) -> Self {
        let mut data = self.data.clone();
        data.reverse();
        Self {
            height: self.height,
            width: self.width,
            data,
        }
    }
}
