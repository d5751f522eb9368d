//! Clamp-to-edge boundary policy for kernel windows that overhang the
//! image border.

use grayproc_image::{GrayImage, PixelDepth};

/// Clamp a possibly out-of-range coordinate to the valid index range
/// `[0, len - 1]`.
///
/// Both sides are handled by a direct two-sided clamp; each axis of a 2D
/// coordinate is mapped independently.
///
/// # Panics
///
/// Debug-asserts that `len > 0`; a zero extent has no nearest valid index.
pub fn clamp_index(i: isize, len: usize) -> usize {
    debug_assert!(len > 0, "clamp_index requires a non-empty extent");
    i.clamp(0, len as isize - 1) as usize
}

/// Look up a pixel with replicate (clamp-to-edge) extension.
///
/// Out-of-range coordinates on either axis, or both at once, resolve to
/// the nearest edge pixel; in-range coordinates return the stored value
/// unchanged. This never fails and never mutates the image.
///
/// Callers must not pass an empty image; the correlation engine
/// short-circuits 0x0 inputs before any lookup.
pub fn get_pixel_replicate<T: PixelDepth>(src: &GrayImage<T>, row: isize, col: isize) -> T {
    let r = clamp_index(row, src.height());
    let c = clamp_index(col, src.width());
    src.as_slice()[r * src.width() + c]
}
