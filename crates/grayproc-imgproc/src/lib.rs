#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// replicate (clamp-to-edge) boundary lookup module.
pub mod border;

/// image filtering module.
pub mod filter;

/// quantize-and-clip module.
pub mod quantize;
