use num_traits::Float;

use crate::{border::mirror_index, error::ImageError};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use filterkit_image::ImageSize;
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

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a single channel image with scalar samples.
///
/// The samples are stored in row-major order, i.e. the sample at `(x, y)` lives at
/// `y * width + x`. Width and height are always at least one.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The samples of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the image is empty or the length of the data does not match the image size,
    /// an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<f64>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0.0; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size));
        }

        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size, filled with `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_image::{Image, ImageSize};
    ///
    /// let image = Image::from_size_val([4, 3].into(), 1.5f64).unwrap();
    ///
    /// assert_eq!(image.size(), ImageSize { width: 4, height: 3 });
    /// assert!(image.as_slice().iter().all(|&v| v == 1.5));
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height];
        Image::new(size, data)
    }

    /// The size of the image in pixels.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of columns, same as the width.
    #[inline]
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of rows, same as the height.
    #[inline]
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The samples of the image in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The mutable samples of the image in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(x, y, self.size));
        }
        Ok(y * self.width() + x)
    }

    /// Get a reference to the sample at `(x, y)`.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<&T, ImageError> {
        let offset = self.offset(x, y)?;
        Ok(&self.data[offset])
    }

    /// Overwrite the sample at `(x, y)`.
    pub fn set_pixel(&mut self, x: usize, y: usize, val: T) -> Result<(), ImageError> {
        let offset = self.offset(x, y)?;
        self.data[offset] = val;
        Ok(())
    }

    /// Deep copy of the image.
    pub fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }
}

impl<T: Copy> Image<T> {
    /// Copy the row `y` into `row`.
    ///
    /// # Errors
    ///
    /// Fails if `y` is out of bounds or `row` is not exactly `width` long.
    pub fn get_row(&self, y: usize, row: &mut [T]) -> Result<(), ImageError> {
        let start = self.offset(0, y)?;
        if row.len() != self.width() {
            return Err(ImageError::InvalidBufferLength(row.len(), self.width()));
        }
        row.copy_from_slice(&self.data[start..start + self.width()]);
        Ok(())
    }

    /// Write `row` into the row `y`.
    pub fn put_row(&mut self, y: usize, row: &[T]) -> Result<(), ImageError> {
        let start = self.offset(0, y)?;
        if row.len() != self.width() {
            return Err(ImageError::InvalidBufferLength(row.len(), self.width()));
        }
        let width = self.width();
        self.data[start..start + width].copy_from_slice(row);
        Ok(())
    }

    /// Copy the column `x` into `column`.
    ///
    /// # Errors
    ///
    /// Fails if `x` is out of bounds or `column` is not exactly `height` long.
    pub fn get_column(&self, x: usize, column: &mut [T]) -> Result<(), ImageError> {
        self.offset(x, 0)?;
        if column.len() != self.height() {
            return Err(ImageError::InvalidBufferLength(column.len(), self.height()));
        }
        self.data
            .iter()
            .skip(x)
            .step_by(self.width())
            .zip(column.iter_mut())
            .for_each(|(&src, dst)| *dst = src);
        Ok(())
    }

    /// Write `column` into the column `x`.
    pub fn put_column(&mut self, x: usize, column: &[T]) -> Result<(), ImageError> {
        self.offset(x, 0)?;
        if column.len() != self.height() {
            return Err(ImageError::InvalidBufferLength(column.len(), self.height()));
        }
        let width = self.width();
        self.data
            .iter_mut()
            .skip(x)
            .step_by(width)
            .zip(column.iter())
            .for_each(|(dst, &src)| *dst = src);
        Ok(())
    }

    /// Extract the `N`x`N` window centred at `(x, y)`.
    ///
    /// The window is indexed as `window[row][col]`, so `window[N / 2][N / 2]` is the
    /// sample at `(x, y)`, `window[0]` is the row above and `window[..][0]` the column
    /// to the left. Positions outside the image are resolved with [`mirror_index`].
    ///
    /// # Errors
    ///
    /// Fails if `N` is even or `(x, y)` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use filterkit_image::Image;
    ///
    /// let image = Image::new([3, 1].into(), vec![1.0, 2.0, 3.0]).unwrap();
    /// let window = image.neighborhood::<3>(0, 0).unwrap();
    ///
    /// assert_eq!(window[1], [2.0, 1.0, 2.0]);
    /// ```
    pub fn neighborhood<const N: usize>(
        &self,
        x: usize,
        y: usize,
    ) -> Result<[[T; N]; N], ImageError> {
        if N % 2 == 0 {
            return Err(ImageError::InvalidWindowSize(N));
        }
        let center = self.offset(x, y)?;
        let radius = (N / 2) as isize;
        let (cols, rows) = (self.width(), self.height());

        let mut window = [[self.data[center]; N]; N];
        for (dy, window_row) in window.iter_mut().enumerate() {
            let row = mirror_index(y as isize + dy as isize - radius, rows);
            let row_offset = row * cols;
            for (dx, sample) in window_row.iter_mut().enumerate() {
                let col = mirror_index(x as isize + dx as isize - radius, cols);
                *sample = self.data[row_offset + col];
            }
        }
        Ok(window)
    }
}

impl<T: Float> Image<T> {
    /// Raise every sample to the power `exponent`, in place.
    pub fn powf(&mut self, exponent: T) {
        self.data.iter_mut().for_each(|v| *v = v.powf(exponent));
    }

    /// Replace every sample by its square root, in place.
    pub fn sqrt(&mut self) {
        self.data.iter_mut().for_each(|v| *v = v.sqrt());
    }
}
