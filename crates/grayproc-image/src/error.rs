/// An error type for raster construction and transforms.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the raster extents.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two images that must share extents do not.
    #[error("Invalid image size ({0}x{1}), expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a kernel is malformed.
    #[error(transparent)]
    KernelError(#[from] KernelError),
}

/// An error type for kernel construction.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum KernelError {
    /// Error when the kernel has no rows or no columns.
    #[error("Kernel must have at least one row and one column")]
    Empty,

    /// Error when nested kernel rows have inconsistent lengths.
    #[error("Kernel row {row} has length {got}, expected {expected}")]
    RaggedRows {
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
        /// Index of the offending row.
        row: usize,
    },

    /// Error when the flat weight data does not match the kernel extents.
    #[error("Kernel data length ({0}) does not match the kernel size ({1})")]
    SizeMismatch(usize, usize),
}
