//! Tone Mapping

use crate::common::*;
use crate::error::*;
use crate::film::*;
use crate::spectrum::*;

/// Offset added to luminance before taking its logarithm so black pixels do
/// not produce negative infinity.
const LUMINANCE_DELTA: Float = 0.001;

/// Default display gamma.
pub const DEFAULT_GAMMA: Float = 2.2;

/// An 8-bit RGB image ready to be encoded.
#[derive(Clone, Debug, PartialEq)]
pub struct LdrImage {
    /// Width in pixels.
    pub width: usize,

    /// Height in pixels.
    pub height: usize,

    /// Row major pixel data.
    pub pixels: Vec<[u8; 3]>,
}

/// Returns the log-average luminance of an image.
///
/// * `image` - The image.
pub fn log_avg_luminance(image: &HdrImage) -> Float {
    let n = image.pixels().len();
    if n == 0 {
        return 0.0;
    }
    let accum: Float = image
        .pixels()
        .iter()
        .map(|c| (LUMINANCE_DELTA + c.y()).ln())
        .sum();
    (accum / n as Float).exp()
}

/// Simulates film exposure: every channel `c` becomes `1 - e^(-c * exposure)`.
///
/// * `image`    - The image.
/// * `exposure` - Exposure; must be positive.
pub fn expose(mut image: HdrImage, exposure: Float) -> Result<HdrImage> {
    check_positive("exposure", exposure)?;
    for p in image.pixels_mut() {
        *p = p.map(|c| 1.0 - (c * -exposure).exp());
    }
    Ok(image)
}

/// Applies Reinhard's global operator scaled to the log-average luminance.
///
/// * `image` - The image.
/// * `key`   - Key value; must be positive.
pub fn apply_reinhard(mut image: HdrImage, key: Float) -> Result<HdrImage> {
    check_positive("key", key)?;
    let scale = key / log_avg_luminance(&image);
    for p in image.pixels_mut() {
        *p = (*p * scale).map(|c| c / (1.0 + c));
    }
    Ok(image)
}

/// Applies gamma correction to every channel.
///
/// * `image` - The image.
/// * `gamma` - Display gamma; must be positive.
pub fn correct_gamma(mut image: HdrImage, gamma: Float) -> Result<HdrImage> {
    check_positive("gamma", gamma)?;
    let g = 1.0 / gamma;
    for p in image.pixels_mut() {
        *p = p.map(|c| c.powf(g));
    }
    Ok(image)
}

/// Clips every channel to `[0, 1]` and quantises to 8 bits.
///
/// * `image` - The image.
pub fn ldr_from_hdr(image: &HdrImage) -> LdrImage {
    let pixels = image
        .pixels()
        .iter()
        .map(|p| {
            let c = p.clamp(0.0, 1.0);
            [to_byte(c.r()), to_byte(c.g()), to_byte(c.b())]
        })
        .collect();
    LdrImage {
        width: image.width(),
        height: image.height(),
        pixels,
    }
}

/// Operators applied, in order, to turn a rendered image into a displayable
/// one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToneMapping {
    /// Exposure, if the image should be exposed.
    pub exposure: Option<Float>,

    /// Reinhard key, if the Reinhard operator should be applied.
    pub reinhard_key: Option<Float>,

    /// Display gamma.
    pub gamma: Float,
}

impl Default for ToneMapping {
    fn default() -> Self {
        Self {
            exposure: None,
            reinhard_key: None,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl ToneMapping {
    /// Returns the 8-bit image produced by exposure, Reinhard and gamma
    /// correction in that order.
    ///
    /// * `image` - The rendered image.
    pub fn apply(&self, mut image: HdrImage) -> Result<LdrImage> {
        if let Some(exposure) = self.exposure {
            image = expose(image, exposure)?;
        }
        if let Some(key) = self.reinhard_key {
            image = apply_reinhard(image, key)?;
        }
        image = correct_gamma(image, self.gamma)?;
        Ok(ldr_from_hdr(&image))
    }
}

fn check_positive(name: &str, v: Float) -> Result<()> {
    if v > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("{name} {v} must be positive")))
    }
}

#[inline(always)]
fn to_byte(c: Float) -> u8 {
    (c * 255.0).round() as u8
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
