//! Checkerboard Texture

use oxatrace_core::common::*;
use oxatrace_core::error::*;
use oxatrace_core::spectrum::*;
use oxatrace_core::texture::*;

/// Checkerboard with `n` squares along each side of the unit texture square.
#[derive(Clone)]
pub struct Checkerboard {
    /// Colour of even squares.
    tex1: Spectrum,

    /// Colour of odd squares.
    tex2: Spectrum,

    /// Side length of a square in texture space.
    divisor: Float,
}

impl Checkerboard {
    /// Create a new `Checkerboard`.
    ///
    /// * `tex1` - Colour of the square containing `(0, 0)`.
    /// * `tex2` - Colour of the alternate squares.
    /// * `n`    - Number of squares along each side; must be positive.
    pub fn new(tex1: Spectrum, tex2: Spectrum, n: u32) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "checkerboard needs at least one square".to_string(),
            ));
        }
        debug!("Checkerboard with {n}x{n} squares");
        Ok(Self {
            tex1,
            tex2,
            divisor: 1.0 / n as Float,
        })
    }
}

impl Texture for Checkerboard {
    fn get(&self, u: Float, v: Float) -> Spectrum {
        let a = (u / self.divisor) as u64 % 2 == 1;
        let b = (v / self.divisor) as u64 % 2 == 1;
        if a != b {
            self.tex2
        } else {
            self.tex1
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
