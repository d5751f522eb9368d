#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use grayproc_image as image;

#[doc(inline)]
pub use grayproc_imgproc as imgproc;

#[doc(inline)]
pub use grayproc_io as io;
