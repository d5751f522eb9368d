use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use grayproc_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Get the number of pixels in an image of this size.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

/// Trait for pixel sample types the filtering pipeline can read from and
/// write back to.
///
/// `Into<f32>` widens a stored sample for kernel arithmetic; [`from_f32`]
/// narrows the unconstrained result back to the storage type.
///
/// Send and Sync is required for rayon row partitioning.
///
/// [`from_f32`]: PixelDepth::from_f32
pub trait PixelDepth: Copy + Default + Into<f32> + Send + Sync {
    /// Convert an f32 value to the pixel sample type.
    fn from_f32(x: f32) -> Self;
}

impl PixelDepth for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl PixelDepth for u8 {
    /// Quantize-and-clip: values above 255.0 saturate to 255, values below
    /// 0.0 saturate to 0, everything else rounds half away from zero
    /// (the `f32::round` convention).
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents a single-channel greyscale image with pixel data.
///
/// The image is stored as a flat row-major buffer with shape (H, W): the
/// sample at (row, col) lives at linear index `row * width + col`. The
/// buffer length always equals `width * height`; the constructor rejects
/// anything else, so a constructed value cannot violate the invariant.
///
/// Transforms over images never mutate their input and always allocate a
/// fresh output.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayImage<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> GrayImage<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use grayproc_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::<u8>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.num_pixels() {
            return Err(ImageError::InvalidDataLength(data.len(), size.num_pixels()));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    pub fn from_size_val(size: ImageSize, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            data: vec![val; size.num_pixels()],
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel value at the given in-bounds coordinate.
    ///
    /// Returns `None` when the coordinate lies outside the image.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.data.get(row * self.width() + col)
    }

    /// Consume the image and return the flat pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Map every pixel through `f`, producing a freshly allocated image of
    /// the same size.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> GrayImage<U> {
        GrayImage {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GrayImage, ImageSize, PixelDepth};
    use crate::error::ImageError;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.num_pixels(), 200);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = GrayImage::<u8>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20],
        )?;
        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 20);
        assert_eq!(image.rows(), 20);
        assert_eq!(image.cols(), 10);

        Ok(())
    }

    #[test]
    fn image_data_length_mismatch() {
        let res = GrayImage::<u8>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0u8; 5],
        );
        assert_eq!(res.unwrap_err(), ImageError::InvalidDataLength(5, 6));
    }

    #[test]
    fn image_empty() -> Result<(), ImageError> {
        let image = GrayImage::<u8>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        assert_eq!(image.as_slice().len(), 0);

        Ok(())
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8, 1, 2, 3],
        )?;
        assert_eq!(image.get(1, 0), Some(&2));
        assert_eq!(image.get(1, 1), Some(&3));
        assert_eq!(image.get(2, 0), None);
        assert_eq!(image.get(0, 2), None);

        Ok(())
    }

    #[test]
    fn pixel_depth_u8_quantizes() {
        assert_eq!(u8::from_f32(-12.3), 0);
        assert_eq!(u8::from_f32(300.0), 255);
        assert_eq!(u8::from_f32(28.333), 28);
        assert_eq!(u8::from_f32(27.5), 28);
    }
}
