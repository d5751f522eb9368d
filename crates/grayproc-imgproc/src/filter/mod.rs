//! Filter operations
//!
//! This module provides the correlation engine and the greyscale filters
//! built on top of it.

/// Filter kernels
pub mod kernels;
pub use kernels::Kernel2d;

/// Correlation engine
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
