use filterkit_image::{ops, Image, ImageError};

use super::stencil_filter_with_strategy;
use crate::parallel::ExecutionStrategy;

/// Horizontal derivative of the sobel operator, normalized by 6.
///
/// ```text
/// | -1 | 0 | 1 |
/// | -2 | 0 | 2 |
/// | -1 | 0 | 1 |
/// ```
fn sobel_vertical_3x3(w: &[[f64; 3]; 3]) -> f64 {
    (w[0][2] + 2.0 * w[1][2] + w[2][2] - w[0][0] - 2.0 * w[1][0] - w[2][0]) / 6.0
}

/// Vertical derivative of the sobel operator, the transpose of [`sobel_vertical_3x3`].
fn sobel_horizontal_3x3(w: &[[f64; 3]; 3]) -> f64 {
    (w[2][0] + 2.0 * w[2][1] + w[2][2] - w[0][0] - 2.0 * w[0][1] - w[0][2]) / 6.0
}

/// Compute the sobel gradient magnitude with execution strategy control.
///
/// Both directional responses are computed with the direct 3x3 kernels and mirror
/// border conditions, then combined as `sqrt(gx^2 + gy^2)`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W), non negative on success.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 2x2.
pub fn sobel_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(src.size(), dst.size()));
    }
    log::debug!("sobel magnitude on {} ({:?})", src.size(), strategy);

    let mut gx = Image::from_size_val(src.size(), 0.0)?;
    stencil_filter_with_strategy(src, &mut gx, strategy, sobel_vertical_3x3)?;

    let mut gy = Image::from_size_val(src.size(), 0.0)?;
    stencil_filter_with_strategy(src, &mut gy, strategy, sobel_horizontal_3x3)?;

    gx.powf(2.0);
    gy.powf(2.0);
    ops::add(&gx, &gy, dst)?;
    dst.sqrt();

    Ok(())
}

/// Compute the sobel gradient magnitude, see [`sobel_with_strategy`].
pub fn sobel(src: &Image<f64>, dst: &mut Image<f64>) -> Result<(), ImageError> {
    sobel_with_strategy(src, dst, ExecutionStrategy::Auto)
}
