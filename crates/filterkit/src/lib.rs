//! Separable and direct 2D image filters.
//!
//! - [`image`]: single channel sample buffers with mirror boundary access.
//! - [`imgproc`]: edge detectors, moving averages and the sobel gradient magnitude.

#[doc(inline)]
pub use filterkit_image as image;

#[doc(inline)]
pub use filterkit_imgproc as imgproc;
