//! HDR Images

use super::check_pixel;
use crate::error::*;
use crate::spectrum::*;

/// A high dynamic range image stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct HdrImage {
    width: usize,
    height: usize,
    pixels: Vec<Spectrum>,
}

impl HdrImage {
    /// Create a black image.
    ///
    /// * `width`  - Width in pixels.
    /// * `height` - Height in pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Spectrum::black(); width * height],
        }
    }

    /// Create an image from pixel data.
    ///
    /// * `width`  - Width in pixels.
    /// * `height` - Height in pixels.
    /// * `pixels` - Row major pixel data; must hold `width * height` values.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Spectrum>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(Error::InvalidArgument(format!(
                "{} pixels given for a {width}x{height} image",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixels in row major order.
    pub fn pixels(&self) -> &[Spectrum] {
        &self.pixels
    }

    /// Returns the pixels in row major order for modification.
    pub fn pixels_mut(&mut self) -> &mut [Spectrum] {
        &mut self.pixels
    }

    /// Returns the colour of a pixel.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Spectrum> {
        check_pixel(x, y, self.width, self.height)?;
        Ok(self.pixels[y * self.width + x])
    }

    /// Sets the colour of a pixel.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    /// * `c` - The colour.
    pub fn set_pixel(&mut self, x: usize, y: usize, c: Spectrum) -> Result<()> {
        check_pixel(x, y, self.width, self.height)?;
        self.pixels[y * self.width + x] = c;
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
