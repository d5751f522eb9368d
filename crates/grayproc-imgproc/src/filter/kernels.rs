//! Correlation kernel construction.

use grayproc_image::KernelError;

/// A rectangular 2D correlation kernel.
///
/// Weights are stored as a flat row-major buffer with `rows * cols`
/// entries. The anchor aligned with the output pixel is
/// `(rows / 2, cols / 2)` with floor division, so even-sized kernels
/// anchor below and right of their geometric center. A kernel is
/// immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Kernel2d {
    /// Create a kernel from flat row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Empty`] when either extent is zero, and
    /// [`KernelError::SizeMismatch`] when the weight count does not match
    /// the extents.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, KernelError> {
        if rows == 0 || cols == 0 {
            return Err(KernelError::Empty);
        }
        if data.len() != rows * cols {
            return Err(KernelError::SizeMismatch(data.len(), rows * cols));
        }

        Ok(Self { rows, cols, data })
    }

    /// Create a kernel from nested weight rows, enforcing rectangularity.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Empty`] for an empty row list or empty rows,
    /// and [`KernelError::RaggedRows`] when row lengths differ.
    pub fn from_nested(rows: &[Vec<f32>]) -> Result<Self, KernelError> {
        let first = rows.first().ok_or(KernelError::Empty)?;
        let cols = first.len();
        if cols == 0 {
            return Err(KernelError::Empty);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(KernelError::RaggedRows {
                    expected: cols,
                    got: row.len(),
                    row: i,
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        })
    }

    /// Create an n-by-n box blur kernel with every weight `1 / (n * n)`.
    ///
    /// The weights sum to one, so blurring a uniform image is a no-op.
    /// `n = 1` is numerically the identity.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Empty`] for `n = 0`.
    pub fn box_blur(n: usize) -> Result<Self, KernelError> {
        if n == 0 {
            return Err(KernelError::Empty);
        }
        let weight = 1.0 / (n * n) as f32;
        Self::new(n, n, vec![weight; n * n])
    }

    /// Create the 1x1 identity kernel.
    pub fn identity() -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![1.0],
        }
    }

    /// Create the pair of 3x3 sobel kernels (horizontal, vertical).
    pub fn sobel_3x3() -> (Self, Self) {
        #[rustfmt::skip]
        let kernel_x = vec![
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0,
        ];
        #[rustfmt::skip]
        let kernel_y = vec![
            -1.0, -2.0, -1.0,
             0.0,  0.0,  0.0,
             1.0,  2.0,  1.0,
        ];

        (
            Self {
                rows: 3,
                cols: 3,
                data: kernel_x,
            },
            Self {
                rows: 3,
                cols: 3,
                data: kernel_y,
            },
        )
    }

    /// Get the number of kernel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of kernel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the anchor coordinate aligned with the output pixel.
    pub fn anchor(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    /// Get the kernel weights as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
