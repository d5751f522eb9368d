//! Decode image files into 8-bit greyscale rasters and encode them back.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma};
use log::debug;

use grayproc_image::{GrayImage, ImageSize};

use crate::error::IoError;

// ITU-R 601 luma weights used to reduce colour images to greyscale.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Read an image file from disk and reduce it to 8-bit greyscale.
///
/// Luma and luma-alpha inputs take the luma channel unchanged; colour
/// inputs reduce per pixel with the 601 weights
/// `0.299 R + 0.587 G + 0.114 B`, rounded. Any format the `image` crate
/// can decode is accepted.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded.
pub fn read_image_gray(file_path: impl AsRef<Path>) -> Result<GrayImage<u8>, IoError> {
    let file_path = file_path.as_ref();
    let img = image::open(file_path)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let data = match img {
        DynamicImage::ImageLuma8(buf) => buf.into_raw(),
        DynamicImage::ImageLumaA8(buf) => buf.pixels().map(|p| p.0[0]).collect(),
        other => other
            .to_rgb8()
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                let luma =
                    LUMA_R * f32::from(r) + LUMA_G * f32::from(g) + LUMA_B * f32::from(b);
                luma.round().clamp(0.0, 255.0) as u8
            })
            .collect(),
    };

    debug!(
        "decoded {} as {}x{} greyscale",
        file_path.display(),
        size.width,
        size.height
    );

    Ok(GrayImage::new(size, data)?)
}

/// Write an 8-bit greyscale raster to disk; the format is inferred from
/// the file extension.
///
/// Callers are expected to hand over finalized rasters only; any `u8`
/// raster is valid by construction.
///
/// # Arguments
///
/// * `file_path` - The path to write the image file to.
/// * `image` - The greyscale raster to encode.
///
/// # Errors
///
/// Returns an error if the file cannot be encoded or written.
pub fn write_image_gray(
    file_path: impl AsRef<Path>,
    image: &GrayImage<u8>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let buf: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_slice().to_vec(),
    )
    .ok_or(IoError::InvalidBuffer)?;
    buf.save(file_path)?;

    debug!(
        "encoded {}x{} greyscale to {}",
        image.width(),
        image.height(),
        file_path.display()
    );

    Ok(())
}
