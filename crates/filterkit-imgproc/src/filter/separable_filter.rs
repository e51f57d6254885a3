use filterkit_image::{Image, ImageError};
use rayon::prelude::*;

use super::kernels::{check_min_len, Kernel1d};
use crate::parallel::ExecutionStrategy;

/// Run `kernel` over every `len` long chunk of `src`, writing into the matching chunk of `dst`.
fn apply_kernel_1d(
    kernel: Kernel1d,
    src: &[f64],
    dst: &mut [f64],
    len: usize,
    parallel: bool,
) -> Result<(), ImageError> {
    if parallel {
        src.par_chunks_exact(len)
            .zip(dst.par_chunks_exact_mut(len))
            .try_for_each(|(src_seq, dst_seq)| kernel.apply(src_seq, dst_seq))
    } else {
        src.chunks_exact(len)
            .zip(dst.chunks_exact_mut(len))
            .try_for_each(|(src_seq, dst_seq)| kernel.apply(src_seq, dst_seq))
    }
}

/// Apply a separable filter with execution strategy control.
///
/// The row kernel runs along every row of `src` and its output is written to `dst`.
/// Once every row is done, the column kernel runs along every column of `dst` and the
/// result replaces it.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `row_kernel` - The kernel applied along the rows.
/// * `col_kernel` - The kernel applied along the columns.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// # Errors
///
/// Fails with [`ImageError::DimensionMismatch`] if `src` and `dst` differ in size and
/// with [`ImageError::InvalidDimension`] if the width or height is shorter than the
/// row or column kernel accepts. Nothing is written in that case.
pub fn separable_filter_with_strategy(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    row_kernel: Kernel1d,
    col_kernel: Kernel1d,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::DimensionMismatch(src.size(), dst.size()));
    }
    check_min_len(src.cols(), row_kernel.min_len())?;
    check_min_len(src.rows(), col_kernel.min_len())?;

    let (rows, cols) = (src.rows(), src.cols());
    let parallel = strategy.is_parallel(rows * cols);
    log::debug!(
        "separable filter {:?} x {:?} on {} ({:?})",
        row_kernel,
        col_kernel,
        src.size(),
        strategy
    );

    // Rows
    apply_kernel_1d(row_kernel, src.as_slice(), dst.as_slice_mut(), cols, parallel)?;

    // Columns, read from the fully row-filtered image
    let mut columns = vec![0.0; rows * cols];
    for (x, column) in columns.chunks_exact_mut(rows).enumerate() {
        dst.get_column(x, column)?;
    }

    let mut filtered = vec![0.0; rows * cols];
    apply_kernel_1d(col_kernel, &columns, &mut filtered, rows, parallel)?;

    for (x, column) in filtered.chunks_exact(rows).enumerate() {
        dst.put_column(x, column)?;
    }

    Ok(())
}

/// Apply a separable filter to an image.
///
/// Uses `ExecutionStrategy::Auto`. For explicit control, use
/// [`separable_filter_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `dst` - The destination image with shape (H, W).
/// * `row_kernel` - The kernel applied along the rows.
/// * `col_kernel` - The kernel applied along the columns.
pub fn separable_filter(
    src: &Image<f64>,
    dst: &mut Image<f64>,
    row_kernel: Kernel1d,
    col_kernel: Kernel1d,
) -> Result<(), ImageError> {
    separable_filter_with_strategy(src, dst, row_kernel, col_kernel, ExecutionStrategy::Auto)
}
