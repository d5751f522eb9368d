#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for greyscale filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::{ImageError, KernelError};
pub use crate::image::{GrayImage, ImageSize, PixelDepth};
