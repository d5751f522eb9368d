#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// greyscale raster reading and writing module.
pub mod gray;

/// Error types for the io module.
pub mod error;

pub use crate::error::IoError;
pub use crate::gray::{read_image_gray, write_image_gray};
