//! RGB Spectrum

use crate::common::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub};

/// Number of channels in an `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// Linear RGB colour. Channels are unbounded HDR values; clamping only
/// happens when converting to a low dynamic range image.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    c: [Float; RGB_SAMPLES],
}

impl RGBSpectrum {
    /// Creates a new `RGBSpectrum`.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { c: [r, g, b] }
    }

    /// Creates a grey `RGBSpectrum` with every channel set to `v`.
    ///
    /// * `v` - Channel value.
    pub const fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    /// Returns black.
    pub const fn black() -> Self {
        Self::splat(0.0)
    }

    /// Returns white.
    pub const fn white() -> Self {
        Self::splat(1.0)
    }

    /// Returns the red channel.
    pub fn r(&self) -> Float {
        self.c[0]
    }

    /// Returns the green channel.
    pub fn g(&self) -> Float {
        self.c[1]
    }

    /// Returns the blue channel.
    pub fn b(&self) -> Float {
        self.c[2]
    }

    /// Returns the luminance (the Y coefficient of CIE XYZ).
    pub fn y(&self) -> Float {
        0.212671 * self.c[0] + 0.715160 * self.c[1] + 0.072169 * self.c[2]
    }

    /// Returns the per-channel minimum of two spectra.
    ///
    /// * `other` - The other spectrum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            min(self.c[0], other.c[0]),
            min(self.c[1], other.c[1]),
            min(self.c[2], other.c[2]),
        )
    }

    /// Returns the per-channel maximum of two spectra.
    ///
    /// * `other` - The other spectrum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            max(self.c[0], other.c[0]),
            max(self.c[1], other.c[1]),
            max(self.c[2], other.c[2]),
        )
    }

    /// Returns the Euclidean distance between two spectra treated as
    /// 3-D points.
    ///
    /// * `other` - The other spectrum.
    pub fn distance(&self, other: &Self) -> Float {
        let d = *self - *other;
        (d.c[0] * d.c[0] + d.c[1] * d.c[1] + d.c[2] * d.c[2]).sqrt()
    }

    /// Clamps every channel to `[low, high]`.
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        self.map(|v| clamp(v, low, high))
    }

    /// Applies `f` to every channel.
    ///
    /// * `f` - The function to apply.
    pub fn map<F: Fn(Float) -> Float>(&self, f: F) -> Self {
        Self::new(f(self.c[0]), f(self.c[1]), f(self.c[2]))
    }
}

impl From<[Float; RGB_SAMPLES]> for RGBSpectrum {
    fn from(c: [Float; RGB_SAMPLES]) -> Self {
        Self { c }
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    /// Adds the given spectrum and returns the result.
    ///
    /// * `other` - The spectrum to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(
            self.c[0] + other.c[0],
            self.c[1] + other.c[1],
            self.c[2] + other.c[2],
        )
    }
}

impl AddAssign for RGBSpectrum {
    /// Performs the `+=` operation.
    ///
    /// * `other` - The spectrum to add.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for RGBSpectrum {
    type Output = Self;

    /// Subtracts the given spectrum and returns the result.
    ///
    /// * `other` - The spectrum to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(
            self.c[0] - other.c[0],
            self.c[1] - other.c[1],
            self.c[2] - other.c[2],
        )
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Multiplies channel by channel.
    ///
    /// * `other` - The spectrum to multiply.
    fn mul(self, other: Self) -> Self::Output {
        Self::new(
            self.c[0] * other.c[0],
            self.c[1] * other.c[1],
            self.c[2] * other.c[2],
        )
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales every channel.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self::Output {
        self.map(|v| v * f)
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    /// Scales every channel.
    ///
    /// * `s` - The spectrum.
    fn mul(self, s: RGBSpectrum) -> Self::Output {
        s * self
    }
}

impl MulAssign<Float> for RGBSpectrum {
    /// Scales every channel and assigns the result.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: Float) {
        *self = *self * f;
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales every channel by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: Float) -> Self::Output {
        debug_assert!(f != 0.0);
        let inv = 1.0 / f;
        self * inv
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Returns the channel at index `i`.
    ///
    /// * `i` - Channel index in [0, 2].
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl IndexMut<usize> for RGBSpectrum {
    /// Returns a mutable reference to the channel at index `i`.
    ///
    /// * `i` - Channel index in [0, 2].
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.c[i]
    }
}

impl fmt::Display for RGBSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
