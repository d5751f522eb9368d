use grayproc_image::{GrayImage, ImageError};

use super::convolution::correlate2d;
use super::kernels::Kernel2d;
use crate::quantize::{finalize, to_float};

/// Performs weighted addition of two real-valued images with weights
/// `alpha` and `beta`:
///
/// dst(r,c) = src1(r,c) * alpha + src2(r,c) * beta
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
pub fn add_weighted<T>(
    src1: &GrayImage<T>,
    alpha: T,
    src2: &GrayImage<T>,
    beta: T,
) -> Result<GrayImage<T>, ImageError>
where
    T: num_traits::Float,
{
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    let data = src1
        .as_slice()
        .iter()
        .zip(src2.as_slice().iter())
        .map(|(&a, &b)| a * alpha + b * beta)
        .collect();

    GrayImage::new(src1.size(), data)
}

/// Invert an 8-bit greyscale image: per pixel `v -> 255 - v`.
///
/// No correlation and no quantization are involved; the output of a valid
/// input is already in range. Applying invert twice returns the original.
pub fn invert(src: &GrayImage<u8>) -> GrayImage<u8> {
    src.map(|&v| 255 - v)
}

/// Blur an image with an n-by-n box kernel and quantize the result.
///
/// The kernel weights are uniformly `1 / (n * n)`, so they sum to one and
/// a uniform image blurs to itself. `n = 1` is numerically the identity.
///
/// # Errors
///
/// Returns an error for `n = 0`.
pub fn box_blur(src: &GrayImage<u8>, n: usize) -> Result<GrayImage<u8>, ImageError> {
    let kernel = Kernel2d::box_blur(n)?;
    let blurred = correlate2d(src, &kernel)?;
    Ok(finalize(&blurred))
}

/// Sharpen an image with an unsharp mask of box-blur radius `n`.
///
/// Computes `2 * src - lowpass`, where `lowpass` is the *raw* correlation
/// of the source with the n-by-n box kernel (not the finalized blur), then
/// quantizes. This is original plus (original minus low-pass), boosting
/// high-frequency detail.
///
/// # Errors
///
/// Returns an error for `n = 0`.
pub fn sharpen(src: &GrayImage<u8>, n: usize) -> Result<GrayImage<u8>, ImageError> {
    let kernel = Kernel2d::box_blur(n)?;
    let lowpass = correlate2d(src, &kernel)?;
    let combined = add_weighted(&to_float(src), 2.0, &lowpass, -1.0)?;
    Ok(finalize(&combined))
}

/// Detect edges as the sobel 3x3 gradient magnitude, quantized.
///
/// Correlates with the horizontal and vertical sobel kernels under the
/// replicate border policy and takes `sqrt(gx^2 + gy^2)` per pixel.
pub fn edges(src: &GrayImage<u8>) -> Result<GrayImage<u8>, ImageError> {
    let (kernel_x, kernel_y) = Kernel2d::sobel_3x3();
    let gx = correlate2d(src, &kernel_x)?;
    let gy = correlate2d(src, &kernel_y)?;

    let data = gx
        .as_slice()
        .iter()
        .zip(gy.as_slice().iter())
        .map(|(&x, &y)| (x * x + y * y).sqrt())
        .collect();

    let magnitude = GrayImage::new(src.size(), data)?;
    Ok(finalize(&magnitude))
}
