use grayproc_image::{GrayImage, ImageError, PixelDepth};
use rayon::prelude::*;

use super::kernels::Kernel2d;
use crate::border;

/// Correlate an image with a 2D kernel under the replicate border policy.
///
/// Every output pixel is the weighted sum of the kernel window anchored at
/// `(rows / 2, cols / 2)` over the input, with out-of-range taps resolved
/// by clamp-to-edge lookup. The output has the same extents as the input
/// and carries the raw sums: values are neither rounded nor clamped and
/// may be negative, fractional, or exceed 255. Quantization back to u8 is
/// a separate stage ([`crate::quantize::finalize`]).
///
/// The input is never mutated; the output buffer is allocated up front and
/// each row is written independently, partitioned across the rayon thread
/// pool. A 0x0 input produces a 0x0 output.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kernel` - The correlation kernel.
///
/// # Errors
///
/// Construction of the output image cannot fail for a valid input; the
/// `Result` mirrors the fallible [`GrayImage::new`] signature.
///
/// # Examples
///
/// ```
/// use grayproc_image::{GrayImage, ImageSize};
/// use grayproc_imgproc::filter::{correlate2d, Kernel2d};
///
/// let image = GrayImage::new(
///     ImageSize { width: 3, height: 1 },
///     vec![0u8, 255, 0],
/// ).unwrap();
///
/// let out = correlate2d(&image, &Kernel2d::identity()).unwrap();
/// assert_eq!(out.as_slice(), &[0.0, 255.0, 0.0]);
/// ```
pub fn correlate2d<T: PixelDepth>(
    src: &GrayImage<T>,
    kernel: &Kernel2d,
) -> Result<GrayImage<f32>, ImageError> {
    let size = src.size();
    if size.num_pixels() == 0 {
        return GrayImage::new(size, Vec::new());
    }

    let (anchor_row, anchor_col) = kernel.anchor();
    let weights = kernel.as_slice();

    let mut out = vec![0.0f32; size.num_pixels()];

    out.par_chunks_mut(size.width)
        .enumerate()
        .for_each(|(r, out_row)| {
            for (c, out_px) in out_row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for j in 0..kernel.rows() {
                    let row = r as isize + j as isize - anchor_row as isize;
                    for k in 0..kernel.cols() {
                        let col = c as isize + k as isize - anchor_col as isize;
                        let val: f32 = border::get_pixel_replicate(src, row, col).into();
                        sum += weights[j * kernel.cols() + k] * val;
                    }
                }
                *out_px = sum;
            }
        });

    GrayImage::new(size, out)
}
