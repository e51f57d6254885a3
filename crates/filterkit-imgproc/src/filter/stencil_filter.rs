use filterkit_image::{Image, ImageError};
use rayon::prelude::*;

use super::kernels::check_min_len;
use crate::parallel::ExecutionStrategy;

/// Apply a direct `N`x`N` stencil with execution strategy control.
///
/// For every pixel the `N`x`N` neighborhood of `src` is extracted with mirror border
/// conditions and `stencil` turns it into the destination sample. The window handed to
/// `stencil` is indexed as `window[row][col]`, see [`Image::neighborhood`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
/// * `stencil` - Linear combination of the neighborhood samples.
///
/// # Errors
///
/// Fails if `src` and `dst` differ in size, if `N` is even, or if the image is narrower
/// or shorter than `N - 1` samples.
pub fn stencil_filter_with_strategy<const N: usize, F>(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    strategy: ExecutionStrategy,
    stencil: F,
) -> Result<(), ImageError>
where
    F: Fn(&[[f64; N]; N]) -> f64 + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(src.size(), dst.size()));
    }
    if N % 2 == 0 {
        return Err(ImageError::InvalidWindowSize(N));
    }
    check_min_len(src.cols(), N - 1)?;
    check_min_len(src.rows(), N - 1)?;

    let cols = src.cols();
    log::debug!("stencil filter {}x{} on {} ({:?})", N, N, src.size(), strategy);

    let filter_row = |(y, row): (usize, &mut [f64])| -> Result<(), ImageError> {
        for (x, out) in row.iter_mut().enumerate() {
            let window = src.neighborhood::<N>(x, y)?;
            *out = stencil(&window);
        }
        Ok(())
    };

    if strategy.is_parallel(src.rows() * cols) {
        dst.as_slice_mut()
            .par_chunks_exact_mut(cols)
            .enumerate()
            .try_for_each(filter_row)
    } else {
        dst.as_slice_mut()
            .chunks_exact_mut(cols)
            .enumerate()
            .try_for_each(filter_row)
    }
}

/// Apply a direct `N`x`N` stencil to an image using `ExecutionStrategy::Auto`.
///
/// See [`stencil_filter_with_strategy`].
pub fn stencil_filter<const N: usize, F>(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    stencil: F,
) -> Result<(), ImageError>
where
    F: Fn(&[[f64; N]; N]) -> f64 + Send + Sync,
{
    stencil_filter_with_strategy(src, dst, ExecutionStrategy::Auto, stencil)
}
