use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use filterkit_image::{Image, ImageError, ImageSize};
use filterkit_imgproc::filter::{
    self,
    kernels::{self, Average5Method},
};

const SIZES: [(usize, usize); 6] = [(4, 4), (5, 5), (4, 9), (13, 6), (32, 17), (64, 64)];

fn random_image(rng: &mut StdRng, size: ImageSize) -> Result<Image<f64>, ImageError> {
    let data = (0..size.width * size.height)
        .map(|_| rng.random_range(-100.0..100.0))
        .collect();
    Image::new(size, data)
}

fn assert_close(a: &Image<f64>, b: &Image<f64>) {
    assert_eq!(a.size(), b.size());
    for (i, (va, vb)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        assert_relative_eq!(*va, *vb, epsilon = 1e-9, max_relative = 1e-9);
        assert!(va.is_finite(), "sample {i} is not finite");
    }
}

type Filter = fn(&Image<f64>, &mut Image<f64>) -> Result<(), ImageError>;

fn check_pair(direct: Filter, separable: Filter) -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(42);
    for (width, height) in SIZES {
        let img = random_image(&mut rng, ImageSize { width, height })?;
        let mut expected = Image::from_size_val(img.size(), 0.0)?;
        let mut actual = Image::from_size_val(img.size(), 0.0)?;

        direct(&img, &mut expected)?;
        separable(&img, &mut actual)?;
        assert_close(&expected, &actual);
    }
    Ok(())
}

#[test]
fn test_edge_vertical_equivalence() -> Result<(), ImageError> {
    check_pair(filter::edge_vertical, filter::edge_vertical_separable)
}

#[test]
fn test_edge_horizontal_equivalence() -> Result<(), ImageError> {
    check_pair(filter::edge_horizontal, filter::edge_horizontal_separable)
}

#[test]
fn test_moving_average5_equivalence() -> Result<(), ImageError> {
    check_pair(filter::moving_average5, |src, dst| {
        filter::moving_average5_separable(src, dst, Average5Method::ClosedForm)
    })?;
    check_pair(filter::moving_average5, |src, dst| {
        filter::moving_average5_separable(src, dst, Average5Method::Accumulated)
    })
}

#[test]
fn test_average5_accumulated_equivalence() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 4..64 {
        let src = (0..n)
            .map(|_| rng.random_range(-1e3..1e3))
            .collect::<Vec<f64>>();
        let mut closed = vec![0.0; n];
        let mut accumulated = vec![0.0; n];
        kernels::average5(&src, &mut closed)?;
        kernels::average5_accumulated(&src, &mut accumulated)?;

        for (a, b) in accumulated.iter().zip(closed.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
    Ok(())
}

#[test]
fn test_difference_vanishes_on_border() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(3);
    let img = random_image(&mut rng, [11, 8].into())?;
    let mut dst = Image::from_size_val(img.size(), f64::NAN)?;

    filter::edge_vertical_separable(&img, &mut dst)?;
    for y in 0..img.height() {
        assert_eq!(*dst.get_pixel(0, y)?, 0.0);
        assert_eq!(*dst.get_pixel(img.width() - 1, y)?, 0.0);
    }

    filter::edge_horizontal_separable(&img, &mut dst)?;
    for x in 0..img.width() {
        assert_eq!(*dst.get_pixel(x, 0)?, 0.0);
        assert_eq!(*dst.get_pixel(x, img.height() - 1)?, 0.0);
    }
    Ok(())
}

#[test]
fn test_sobel_properties() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(11);
    for (width, height) in SIZES {
        let img = random_image(&mut rng, ImageSize { width, height })?;
        let mut dst = Image::from_size_val(img.size(), 0.0)?;
        filter::sobel(&img, &mut dst)?;
        assert!(dst.as_slice().iter().all(|&v| v >= 0.0));

        let flat = Image::from_size_val(img.size(), rng.random_range(-5.0..5.0))?;
        filter::sobel(&flat, &mut dst)?;
        for &v in dst.as_slice() {
            assert_relative_eq!(v, 0.0, epsilon = 1e-12);
        }
    }
    Ok(())
}

#[test]
fn test_input_untouched() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(5);
    let img = random_image(&mut rng, [9, 9].into())?;
    let copy = img.duplicate();
    let mut dst = Image::from_size_val(img.size(), 0.0)?;

    filter::edge_vertical_separable(&img, &mut dst)?;
    filter::moving_average5(&img, &mut dst)?;
    filter::sobel(&img, &mut dst)?;
    assert_eq!(img, copy);
    Ok(())
}
