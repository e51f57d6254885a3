use crate::image::ImageSize;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the image has zero width or height.
    #[error("Image size must be at least 1x1, got {0}")]
    EmptyImage(ImageSize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a sequence or an image dimension is too short for a kernel.
    #[error("Dimension of length {len} is too small, the kernel requires at least {min}")]
    InvalidDimension {
        /// The offending length.
        len: usize,
        /// The minimum length accepted by the kernel.
        min: usize,
    },

    /// Error when two images that are combined do not share the same size.
    #[error("Image sizes do not match: {0} vs {1}")]
    DimensionMismatch(ImageSize, ImageSize),

    /// Error when a pixel coordinate lies outside the image.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2})")]
    PixelIndexOutOfBounds(usize, usize, ImageSize),

    /// Error when a row or column buffer has the wrong length.
    #[error("Buffer length ({0}) does not match the expected length ({1})")]
    InvalidBufferLength(usize, usize),

    /// Error when a neighborhood window size is not odd.
    #[error("Window size must be odd and non zero, got {0}")]
    InvalidWindowSize(usize),
}
