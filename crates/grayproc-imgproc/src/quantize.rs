//! Conversion between the unconstrained f32 intermediate produced by
//! correlation and the valid 8-bit raster consumed at the system boundary.

use grayproc_image::{GrayImage, PixelDepth};

/// Quantize a real-valued image into a valid 8-bit greyscale image.
///
/// Per pixel: values above 255.0 saturate to 255, values below 0.0
/// saturate to 0, and everything in between rounds half away from zero.
/// The rule lives in the u8 [`PixelDepth`] impl so the convention is
/// pinned in one place.
///
/// Finalizing an already-finalized image is a no-op:
/// `finalize(to_float(finalize(x))) == finalize(x)`.
pub fn finalize(src: &GrayImage<f32>) -> GrayImage<u8> {
    src.map(|&v| u8::from_f32(v))
}

/// Widen an 8-bit image into the f32 domain used for kernel arithmetic.
pub fn to_float(src: &GrayImage<u8>) -> GrayImage<f32> {
    src.map(|&v| v.into())
}

#[cfg(test)]
mod tests {
    use super::{finalize, to_float};
    use grayproc_image::{GrayImage, ImageError, ImageSize};

    #[test]
    fn clips_and_rounds() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 6,
                height: 1,
            },
            vec![-42.0f32, 0.0, 28.333, 28.6, 255.0, 1000.0],
        )?;

        let out = finalize(&image);
        assert_eq!(out.as_slice(), &[0, 0, 28, 29, 255, 255]);

        Ok(())
    }

    #[test]
    fn idempotent() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![-1.5f32, 100.49, 254.5, 400.0],
        )?;

        let once = finalize(&image);
        let twice = finalize(&to_float(&once));
        assert_eq!(once, twice);

        Ok(())
    }

    #[test]
    fn empty_image() -> Result<(), ImageError> {
        let image = GrayImage::<f32>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;

        let out = finalize(&image);
        assert_eq!(out.size().num_pixels(), 0);

        Ok(())
    }

    #[test]
    fn does_not_mutate_input() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![-7.0f32, 300.0],
        )?;
        let before = image.clone();

        let _ = finalize(&image);
        assert_eq!(image, before);

        Ok(())
    }
}
