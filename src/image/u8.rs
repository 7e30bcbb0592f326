//! 8-bit grayscale images in row-major layout.
//!
//! [`ImageU8`] is the read-only view every worker shares during a filter pass;
//! [`GrayImageU8`] owns its pixels and is what the filter hands back. Neither
//! is ever resized after construction.
use crate::error::FilterError;
use crate::image::traits::ImageView;

/// Number of pixels in a `width × height` image, or a shape error when the
/// product does not fit in `usize`.
pub(crate) fn pixel_count(
    width: usize,
    height: usize,
    actual: usize,
) -> Result<usize, FilterError> {
    width.checked_mul(height).ok_or(FilterError::BufferShape {
        width,
        height,
        expected: usize::MAX,
        actual,
    })
}

#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data`, which must hold exactly `w * h` bytes.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self, FilterError> {
        let expected = pixel_count(w, h, data.len())?;
        if data.len() != expected {
            return Err(FilterError::BufferShape {
                width: w,
                height: h,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Smallest slice length that can back a `w × h` view with this stride,
    /// `None` if it overflows `usize`.
    pub fn required_len(&self) -> Option<usize> {
        if self.w == 0 || self.h == 0 {
            return Some(0);
        }
        (self.h - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(self.w))
    }

    /// Validate that the stride and slice cover every pixel.
    pub(crate) fn check_shape(&self) -> Result<(), FilterError> {
        let actual = self.data.len();
        let expected = self.required_len().unwrap_or(usize::MAX);
        if self.stride < self.w || actual < expected {
            return Err(FilterError::BufferShape {
                width: self.w,
                height: self.h,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed 8-bit grayscale buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Take ownership of `data`, which must hold exactly `width * height` bytes.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FilterError> {
        let expected = pixel_count(width, height, data.len())?;
        if data.len() != expected {
            return Err(FilterError::BufferShape {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
