/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when decoding or encoding an image file.
    #[error("Failed to decode or encode the image")]
    ImageFormat(#[from] image::ImageError),

    /// Error when assembling a raster from decoded data.
    #[error(transparent)]
    Image(#[from] grayproc_image::ImageError),

    /// Error when the raster data cannot back an encodable buffer.
    #[error("Failed to create the image buffer for encoding")]
    InvalidBuffer,
}
