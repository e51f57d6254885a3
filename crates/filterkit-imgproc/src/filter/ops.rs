use filterkit_image::{Image, ImageError};

use super::kernels::{Average5Method, Kernel1d};
use super::{separable_filter_with_strategy, stencil_filter_with_strategy};
use crate::parallel::ExecutionStrategy;

/// Right column minus left column of a 3x3 window, normalized by 6.
///
/// ```text
/// | -1 | 0 | 1 |
/// | -1 | 0 | 1 |
/// | -1 | 0 | 1 |
/// ```
fn vertical_edge_3x3(w: &[[f64; 3]; 3]) -> f64 {
    (w[0][2] + w[1][2] + w[2][2] - w[0][0] - w[1][0] - w[2][0]) / 6.0
}

/// Bottom row minus top row of a 3x3 window, normalized by 6.
fn horizontal_edge_3x3(w: &[[f64; 3]; 3]) -> f64 {
    (w[2][0] + w[2][1] + w[2][2] - w[0][0] - w[0][1] - w[0][2]) / 6.0
}

fn mean_5x5(w: &[[f64; 5]; 5]) -> f64 {
    w.iter().flatten().sum::<f64>() / 25.0
}

/// Detect vertical edges with the direct 3x3 kernel.
///
/// Computes the horizontal gradient, averaged over the three rows of the window:
///
/// ```text
///         | -1 | 0 | 1 |
/// 1/6  *  | -1 | 0 | 1 |
///         | -1 | 0 | 1 |
/// ```
///
/// Mirror border conditions are applied.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 2x2.
pub fn edge_vertical_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    stencil_filter_with_strategy(src, dst, strategy, vertical_edge_3x3)
}

/// Detect vertical edges with the direct 3x3 kernel, see [`edge_vertical_with_strategy`].
pub fn edge_vertical(src: &Image<f64>, dst: &mut Image<f64>) -> Result<(), ImageError> {
    edge_vertical_with_strategy(src, dst, ExecutionStrategy::Auto)
}

/// Detect vertical edges with the separable form of the 3x3 kernel.
///
/// The rows are filtered with the centered difference `[-1, 0, 1] / 2`, then the columns
/// of the result with the average `[1, 1, 1] / 3`. Matches [`edge_vertical`] at every
/// pixel up to floating point rounding.
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 2x2.
pub fn edge_vertical_separable_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    separable_filter_with_strategy(
        src,
        dst,
        Kernel1d::Difference3,
        Kernel1d::Average3,
        strategy,
    )
}

/// Detect vertical edges with the separable form, see
/// [`edge_vertical_separable_with_strategy`].
pub fn edge_vertical_separable(src: &Image<f64>, dst: &mut Image<f64>) -> Result<(), ImageError> {
    edge_vertical_separable_with_strategy(src, dst, ExecutionStrategy::Auto)
}

/// Detect horizontal edges with the direct 3x3 kernel.
///
/// Computes the vertical gradient, row below minus row above, averaged over the three
/// columns of the window:
///
/// ```text
///         | -1 | -1 | -1 |
/// 1/6  *  |  0 |  0 |  0 |
///         |  1 |  1 |  1 |
/// ```
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 2x2.
pub fn edge_horizontal_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    stencil_filter_with_strategy(src, dst, strategy, horizontal_edge_3x3)
}

/// Detect horizontal edges with the direct 3x3 kernel, see [`edge_horizontal_with_strategy`].
pub fn edge_horizontal(src: &Image<f64>, dst: &mut Image<f64>) -> Result<(), ImageError> {
    edge_horizontal_with_strategy(src, dst, ExecutionStrategy::Auto)
}

/// Detect horizontal edges with the separable form of the 3x3 kernel.
///
/// The rows are filtered with the average, then the columns with the centered difference.
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 2x2.
pub fn edge_horizontal_separable_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    separable_filter_with_strategy(
        src,
        dst,
        Kernel1d::Average3,
        Kernel1d::Difference3,
        strategy,
    )
}

/// Detect horizontal edges with the separable form, see
/// [`edge_horizontal_separable_with_strategy`].
pub fn edge_horizontal_separable(
    src: &Image<f64>,
    dst: &mut Image<f64>,
) -> Result<(), ImageError> {
    edge_horizontal_separable_with_strategy(src, dst, ExecutionStrategy::Auto)
}

/// Moving average over the direct 5x5 window: the sum of the 25 samples divided by 25.
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 4x4.
pub fn moving_average5_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    stencil_filter_with_strategy(src, dst, strategy, mean_5x5)
}

/// Moving average over the direct 5x5 window, see [`moving_average5_with_strategy`].
pub fn moving_average5(src: &Image<f64>, dst: &mut Image<f64>) -> Result<(), ImageError> {
    moving_average5_with_strategy(src, dst, ExecutionStrategy::Auto)
}

/// Separable 5x5 moving average.
///
/// Averages every row over 5 samples, then every column of the result. `method` selects
/// between the closed-form and the window-accumulating 1D average, which agree up to rounding.
///
/// PRECONDITION: `src` and `dst` must have the same shape, at least 4x4.
pub fn moving_average5_separable_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    method: Average5Method,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    let kernel = method.kernel();
    separable_filter_with_strategy(src, dst, kernel, kernel, strategy)
}

/// Separable 5x5 moving average, see [`moving_average5_separable_with_strategy`].
pub fn moving_average5_separable(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    method: Average5Method,
) -> Result<(), ImageError> {
    moving_average5_separable_with_strategy(src, dst, method, ExecutionStrategy::Auto)
}
