use std::str::FromStr;

use filterkit_image::{mirror_index, ImageError};

/// One dimensional kernels applied along rows or columns by the separable filters.
///
/// All kernels assume mirror border conditions, see [`mirror_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel1d {
    /// Average of three neighbors, see [`average3`].
    Average3,
    /// Centered difference of the two neighbors, see [`difference3`].
    Difference3,
    /// Average of five neighbors in closed form, see [`average5`].
    Average5,
    /// Average of five neighbors summed window by window, see [`average5_accumulated`].
    Average5Accumulated,
}

impl Kernel1d {
    /// The shortest sequence the kernel accepts.
    pub fn min_len(&self) -> usize {
        match self {
            Kernel1d::Average3 | Kernel1d::Difference3 => 2,
            Kernel1d::Average5 | Kernel1d::Average5Accumulated => 4,
        }
    }

    /// Filter `src` into `dst`.
    pub fn apply(&self, src: &[f64], dst: &mut [f64]) -> Result<(), ImageError> {
        match self {
            Kernel1d::Average3 => average3(src, dst),
            Kernel1d::Difference3 => difference3(src, dst),
            Kernel1d::Average5 => average5(src, dst),
            Kernel1d::Average5Accumulated => average5_accumulated(src, dst),
        }
    }
}

/// How the separable 5x5 moving average sums its windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Average5Method {
    /// Explicit closed-form sums, see [`average5`].
    #[default]
    ClosedForm,
    /// Explicit accumulation over each window, see [`average5_accumulated`].
    Accumulated,
}

impl Average5Method {
    /// The kernel implementing this method.
    pub fn kernel(&self) -> Kernel1d {
        match self {
            Average5Method::ClosedForm => Kernel1d::Average5,
            Average5Method::Accumulated => Kernel1d::Average5Accumulated,
        }
    }
}

impl FromStr for Average5Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "closed" | "closed-form" => Ok(Average5Method::ClosedForm),
            "accumulated" | "running" | "recursive" => Ok(Average5Method::Accumulated),
            other => Err(format!(
                "unknown average method '{other}', expected closed or accumulated"
            )),
        }
    }
}

/// Check that a sequence is long enough for a kernel of the given minimum length.
pub fn check_min_len(len: usize, min: usize) -> Result<(), ImageError> {
    if len < min {
        return Err(ImageError::InvalidDimension { len, min });
    }
    Ok(())
}

fn check_sequences(src: &[f64], dst: &[f64], min: usize) -> Result<(), ImageError> {
    check_min_len(src.len(), min)?;
    if src.len() != dst.len() {
        return Err(ImageError::InvalidBufferLength(dst.len(), src.len()));
    }
    Ok(())
}

/// Average filter of length 3.
///
/// `dst[k] = (src[k-1] + src[k] + src[k+1]) / 3`. At the edges the mirrored neighbor
/// equals the inner one, which gives `dst[0] = (src[0] + 2 * src[1]) / 3`.
///
/// # Errors
///
/// The sequence must hold at least 2 samples and `dst` must have the same length.
pub fn average3(src: &[f64], dst: &mut [f64]) -> Result<(), ImageError> {
    check_sequences(src, dst, 2)?;
    let n = src.len();

    dst[0] = (src[0] + 2.0 * src[1]) / 3.0;
    for k in 1..n - 1 {
        dst[k] = (src[k - 1] + src[k] + src[k + 1]) / 3.0;
    }
    dst[n - 1] = (src[n - 1] + 2.0 * src[n - 2]) / 3.0;

    Ok(())
}

/// Centered difference filter of length 3.
///
/// `dst[k] = (src[k+1] - src[k-1]) / 2`. Both neighbors coincide once mirrored, so the
/// first and last samples are always 0.
///
/// # Errors
///
/// The sequence must hold at least 2 samples and `dst` must have the same length.
pub fn difference3(src: &[f64], dst: &mut [f64]) -> Result<(), ImageError> {
    check_sequences(src, dst, 2)?;
    let n = src.len();

    dst[0] = 0.0;
    for k in 1..n - 1 {
        dst[k] = (src[k + 1] - src[k - 1]) / 2.0;
    }
    dst[n - 1] = 0.0;

    Ok(())
}

/// Average filter of length 5.
///
/// Interior samples use the plain five tap mean. The two samples next to each edge fold
/// the missing taps back onto the sequence:
///
/// * `dst[0] = (src[0] + 2 * src[1] + 2 * src[2]) / 5`
/// * `dst[1] = (src[0] + 2 * src[1] + src[2] + src[3]) / 5`
///
/// and symmetrically at the end.
///
/// # Errors
///
/// The sequence must hold at least 4 samples and `dst` must have the same length.
pub fn average5(src: &[f64], dst: &mut [f64]) -> Result<(), ImageError> {
    check_sequences(src, dst, 4)?;
    let n = src.len();

    dst[0] = (src[0] + 2.0 * src[1] + 2.0 * src[2]) / 5.0;
    dst[1] = (src[0] + 2.0 * src[1] + src[2] + src[3]) / 5.0;
    for k in 2..n - 2 {
        dst[k] = (src[k - 2] + src[k - 1] + src[k] + src[k + 1] + src[k + 2]) / 5.0;
    }
    dst[n - 2] = (src[n - 1] + 2.0 * src[n - 2] + src[n - 3] + src[n - 4]) / 5.0;
    dst[n - 1] = (src[n - 1] + 2.0 * src[n - 2] + 2.0 * src[n - 3]) / 5.0;

    Ok(())
}

/// Average filter of length 5 computed with an accumulating loop over each window.
///
/// Every window `src[k-2..=k+2]` is summed from scratch, the taps outside the sequence
/// fetched through [`mirror_index`]. No partial sum is carried from one window to the
/// next, so a large sample only affects the windows that contain it. Matches [`average5`]
/// up to floating point rounding.
///
/// # Errors
///
/// The sequence must hold at least 4 samples and `dst` must have the same length.
pub fn average5_accumulated(src: &[f64], dst: &mut [f64]) -> Result<(), ImageError> {
    check_sequences(src, dst, 4)?;
    let n = src.len();

    for (k, out) in dst.iter_mut().enumerate() {
        let k = k as isize;
        let mut acc = 0.0;
        for i in k - 2..=k + 2 {
            acc += src[mirror_index(i, n)];
        }
        *out = acc / 5.0;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // (src[k-2] + ... + src[k+2]) / 5 with explicit mirroring
    fn mirrored_average5(src: &[f64]) -> Vec<f64> {
        let n = src.len();
        (0..n as isize)
            .map(|k| (k - 2..=k + 2).map(|i| src[mirror_index(i, n)]).sum::<f64>() / 5.0)
            .collect()
    }

    #[test]
    fn test_average3() -> Result<(), ImageError> {
        let src = [3.0, 6.0, 0.0, 9.0, 3.0];
        let mut dst = [0.0; 5];
        average3(&src, &mut dst)?;

        let expected = [5.0, 3.0, 5.0, 4.0, 7.0];
        for (a, b) in dst.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_average3_two_samples() -> Result<(), ImageError> {
        let mut dst = [0.0; 2];
        average3(&[0.0, 3.0], &mut dst)?;
        assert_relative_eq!(dst[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(dst[1], 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_difference3() -> Result<(), ImageError> {
        let src = [1.0, 4.0, 2.0, 8.0, 5.0];
        let mut dst = [f64::NAN; 5];
        difference3(&src, &mut dst)?;
        assert_eq!(dst, [0.0, 0.5, 2.0, 1.5, 0.0]);
        Ok(())
    }

    #[test]
    fn test_average5_matches_mirroring() -> Result<(), ImageError> {
        for n in 4..10 {
            let src = (0..n)
                .map(|i| ((i * 7 + 3) % 11) as f64 - 4.5)
                .collect::<Vec<_>>();
            let mut dst = vec![0.0; n];
            average5(&src, &mut dst)?;

            for (a, b) in dst.iter().zip(mirrored_average5(&src).iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_average5_accumulated_matches_closed_form() -> Result<(), ImageError> {
        for n in [4, 5, 6, 17, 256] {
            let src = (0..n)
                .map(|i| (i as f64 * 0.37).sin() * 100.0)
                .collect::<Vec<_>>();
            let mut closed = vec![0.0; n];
            let mut accumulated = vec![0.0; n];
            average5(&src, &mut closed)?;
            average5_accumulated(&src, &mut accumulated)?;

            for (a, b) in accumulated.iter().zip(closed.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn test_average5_accumulated_wide_range() -> Result<(), ImageError> {
        // huge samples followed by small ones: the small windows must not inherit the
        // rounding of the huge ones
        let src = [vec![1e17; 6], vec![0.3; 20]].concat();
        let mut closed = vec![0.0; src.len()];
        let mut accumulated = vec![0.0; src.len()];
        average5(&src, &mut closed)?;
        average5_accumulated(&src, &mut accumulated)?;

        for (a, b) in accumulated.iter().zip(closed.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
        }
        for v in &accumulated[src.len() - 4..] {
            assert_relative_eq!(*v, 0.3, epsilon = 1e-9, max_relative = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_average_of_constant() -> Result<(), ImageError> {
        let src = [2.5; 7];
        for kernel in [Kernel1d::Average3, Kernel1d::Average5, Kernel1d::Average5Accumulated] {
            let mut dst = [0.0; 7];
            kernel.apply(&src, &mut dst)?;
            for v in dst {
                assert_relative_eq!(v, 2.5, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_too_short() {
        let mut dst = [0.0; 3];
        assert_eq!(
            average5(&[1.0, 2.0, 3.0], &mut dst),
            Err(ImageError::InvalidDimension { len: 3, min: 4 })
        );
        assert_eq!(
            average5_accumulated(&[1.0, 2.0, 3.0], &mut dst),
            Err(ImageError::InvalidDimension { len: 3, min: 4 })
        );
        assert_eq!(
            difference3(&[1.0], &mut dst[..1]),
            Err(ImageError::InvalidDimension { len: 1, min: 2 })
        );
        assert_eq!(
            average3(&[1.0, 2.0], &mut dst),
            Err(ImageError::InvalidBufferLength(3, 2))
        );
    }

    #[test]
    fn test_method_kernel() {
        assert_eq!(Average5Method::ClosedForm.kernel(), Kernel1d::Average5);
        assert_eq!(Average5Method::Accumulated.kernel(), Kernel1d::Average5Accumulated);
        assert_eq!("recursive".parse::<Average5Method>(), Ok(Average5Method::Accumulated));
        assert_eq!("Accumulated".parse::<Average5Method>(), Ok(Average5Method::Accumulated));
        assert_eq!(Kernel1d::Difference3.min_len(), 2);
        assert_eq!(Kernel1d::Average5Accumulated.min_len(), 4);
    }
}
