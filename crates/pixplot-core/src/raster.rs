//! Flat 24-bit pixel buffer.

use crate::canvas::Canvas;
use crate::error::RasterError;
use crate::geometry::{PixelPoint, PixelRect};
use crate::{ppm, Color};
use std::io;

/// A `width × height` grid of 24-bit pixels.
///
/// Pixels live in one contiguous row-major `Vec`, indexed by `y * width + x`.
/// The origin is the top-left corner. Freshly created buffers are black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl RasterBuffer {
    /// Allocate a black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if either side is zero or
    /// the buffer cannot be addressed with `i32` pixel coordinates.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let len = Self::pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Color::BLACK; len],
        })
    }

    /// Build a buffer from existing row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if the dimensions are
    /// invalid or do not match `pixels.len()`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, RasterError> {
        if pixels.len() != Self::pixel_count(width, height)? {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Read one pixel, `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, point: PixelPoint) -> Option<Color> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Number of pixels equal to `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Encode as a plain PPM (`P3`) document.
    #[must_use]
    pub fn to_ppm(&self) -> String {
        ppm::encode(self)
    }

    /// Stream the plain PPM encoding into `writer`.
    pub fn write_ppm<W: io::Write>(&self, writer: &mut W) -> Result<(), RasterError> {
        ppm::write_to(self, writer)?;
        Ok(())
    }

    /// Number of pixels in a valid `width × height` buffer.
    fn pixel_count(width: u32, height: u32) -> Result<usize, RasterError> {
        let invalid = || RasterError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(invalid());
        }
        (width as usize).checked_mul(height as usize).ok_or_else(invalid)
    }

    fn index(&self, point: PixelPoint) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}

impl Canvas for RasterBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, point: PixelPoint, color: Color) {
        if let Some(i) = self.index(point) {
            self.pixels[i] = color;
        }
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let Some(clipped) = rect.intersection(&self.bounds()) else {
            return;
        };
        let stride = self.width as usize;
        let (x0, x1) = (clipped.x0 as usize, clipped.x1 as usize);
        for y in clipped.y0 as usize..clipped.y1 as usize {
            self.pixels[y * stride + x0..y * stride + x1].fill(color);
        }
    }
}
