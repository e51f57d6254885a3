use num_traits::Float;

use crate::{Image, ImageError};

fn check_same_size<T, U>(a: &Image<T>, b: &Image<U>) -> Result<(), ImageError> {
    if a.size() != b.size() {
        return Err(ImageError::DimensionMismatch(a.size(), b.size()));
    }
    Ok(())
}

/// Add two images sample by sample.
///
/// # Arguments
///
/// * `src1` - The first image.
/// * `src2` - The second image.
/// * `dst` - The destination image, `src1 + src2`.
///
/// # Errors
///
/// Returns [`ImageError::DimensionMismatch`] if the three images do not share the same size.
///
/// Example:
///
/// ```
/// use filterkit_image::{ops, Image};
///
/// let a = Image::new([2, 1].into(), vec![1.0, 2.0]).unwrap();
/// let b = Image::new([2, 1].into(), vec![3.0, 5.0]).unwrap();
/// let mut sum = Image::from_size_val(a.size(), 0.0).unwrap();
///
/// ops::add(&a, &b, &mut sum).unwrap();
///
/// assert_eq!(sum.as_slice(), &[4.0, 7.0]);
/// ```
pub fn add<T: Float>(
    src1: &Image<T>,
    src2: &Image<T>,
    dst: &mut Image<T>,
) -> Result<(), ImageError> {
    check_same_size(src1, src2)?;
    check_same_size(src1, dst)?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(src1.as_slice().iter().zip(src2.as_slice()))
        .for_each(|(out, (&a, &b))| *out = a + b);

    Ok(())
}

/// Raise every sample of `src` to the power `exponent` and write it into `dst`.
pub fn pow<T: Float>(src: &Image<T>, dst: &mut Image<T>, exponent: T) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice())
        .for_each(|(out, &v)| *out = v.powf(exponent));

    Ok(())
}

/// Write the square root of every sample of `src` into `dst`.
pub fn sqrt<T: Float>(src: &Image<T>, dst: &mut Image<T>) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice())
        .for_each(|(out, &v)| *out = v.sqrt());

    Ok(())
}
