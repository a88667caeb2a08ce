//! Shading Policy

use crate::common::*;
use crate::error::*;
use crate::spectrum::*;

/// Default maximum recursion depth for reflected rays.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Default minimum importance below which reflected rays are not traced.
pub const DEFAULT_MIN_IMPORTANCE: Float = EPSILON;

/// Default supersampling grid size.
pub const DEFAULT_SUPERSAMPLING: u32 = 2;

/// Default colour distance at which the adaptive sampler refines a region.
pub const DEFAULT_VARIANCE_THRESHOLD: Float = 0.2;

/// Parameters that control shading and sampling. Validated on construction
/// and on every setter, then cloned into the render pool and read without
/// synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadingPolicy {
    background: Spectrum,
    max_depth: u32,
    min_importance: Float,
    jitter: bool,
    supersampling: u32,
    variance_threshold: Float,
    glossy: bool,
}

impl Default for ShadingPolicy {
    fn default() -> Self {
        Self {
            background: Spectrum::black(),
            max_depth: DEFAULT_MAX_DEPTH,
            min_importance: DEFAULT_MIN_IMPORTANCE,
            jitter: true,
            supersampling: DEFAULT_SUPERSAMPLING,
            variance_threshold: DEFAULT_VARIANCE_THRESHOLD,
            glossy: false,
        }
    }
}

impl ShadingPolicy {
    /// Create a new `ShadingPolicy`. Variance threshold and glossiness take
    /// their defaults and can be changed through the setters.
    ///
    /// * `background`     - Colour of rays that escape the scene or terminate.
    /// * `max_depth`      - Maximum recursion depth for reflected rays.
    /// * `min_importance` - Importance floor in `[0, 1]`.
    /// * `jitter`         - Jitter sample positions within their cells.
    /// * `supersampling`  - Supersampling grid size; a power of 2.
    pub fn new(
        background: Spectrum,
        max_depth: u32,
        min_importance: Float,
        jitter: bool,
        supersampling: u32,
    ) -> Result<Self> {
        let mut policy = Self {
            background,
            max_depth,
            jitter,
            ..Self::default()
        };
        policy.set_min_importance(min_importance)?;
        policy.set_supersampling(supersampling)?;
        Ok(policy)
    }

    /// Returns the background colour.
    pub fn background(&self) -> Spectrum {
        self.background
    }

    /// Returns the maximum recursion depth.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Returns the importance floor.
    pub fn min_importance(&self) -> Float {
        self.min_importance
    }

    /// Returns true if sample positions are jittered.
    pub fn jitter(&self) -> bool {
        self.jitter
    }

    /// Returns the supersampling grid size.
    pub fn supersampling(&self) -> u32 {
        self.supersampling
    }

    /// Returns the colour distance above which a region is refined.
    pub fn variance_threshold(&self) -> Float {
        self.variance_threshold
    }

    /// Returns true if reflections are perturbed around the mirror direction.
    pub fn glossy(&self) -> bool {
        self.glossy
    }

    /// Sets the background colour.
    ///
    /// * `background` - The colour.
    pub fn set_background(&mut self, background: Spectrum) {
        self.background = background;
    }

    /// Sets the maximum recursion depth.
    ///
    /// * `max_depth` - The depth.
    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    /// Sets the importance floor.
    ///
    /// * `min_importance` - Value in `[0, 1]`.
    pub fn set_min_importance(&mut self, min_importance: Float) -> Result<()> {
        if !(0.0..=1.0).contains(&min_importance) {
            return Err(Error::InvalidArgument(format!(
                "min importance {min_importance} outside [0, 1]"
            )));
        }
        self.min_importance = min_importance;
        Ok(())
    }

    /// Enables or disables jittering.
    ///
    /// * `jitter` - The flag.
    pub fn set_jitter(&mut self, jitter: bool) {
        self.jitter = jitter;
    }

    /// Sets the supersampling grid size.
    ///
    /// * `supersampling` - A power of 2.
    pub fn set_supersampling(&mut self, supersampling: u32) -> Result<()> {
        if !is_power_of_2(supersampling) {
            return Err(Error::OutOfRange(format!(
                "supersampling {supersampling} is not a power of 2"
            )));
        }
        self.supersampling = supersampling;
        Ok(())
    }

    /// Sets the colour distance above which a region is refined.
    ///
    /// * `variance_threshold` - Non-negative distance.
    pub fn set_variance_threshold(&mut self, variance_threshold: Float) -> Result<()> {
        if variance_threshold.is_nan() || variance_threshold < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "variance threshold {variance_threshold} is negative"
            )));
        }
        self.variance_threshold = variance_threshold;
        Ok(())
    }

    /// Enables or disables glossy reflection.
    ///
    /// * `glossy` - The flag.
    pub fn set_glossy(&mut self, glossy: bool) {
        self.glossy = glossy;
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = ShadingPolicy::default();
        assert_eq!(p.background(), Spectrum::black());
        assert_eq!(p.max_depth(), 16);
        assert_eq!(p.min_importance(), EPSILON);
        assert!(p.jitter());
        assert_eq!(p.supersampling(), 2);
        assert_eq!(p.variance_threshold(), 0.2);
        assert!(!p.glossy());
    }

    #[test]
    fn supersampling_must_be_power_of_2() {
        let mut p = ShadingPolicy::default();
        for s in [1, 2, 4, 8, 16] {
            assert!(p.set_supersampling(s).is_ok());
            assert_eq!(p.supersampling(), s);
        }
        for s in [0, 3, 6, 12] {
            assert!(matches!(p.set_supersampling(s), Err(Error::OutOfRange(_))));
        }
        assert_eq!(p.supersampling(), 16);
        assert!(ShadingPolicy::new(Spectrum::black(), 4, 0.1, false, 3).is_err());
    }

    #[test]
    fn min_importance_range() {
        let mut p = ShadingPolicy::default();
        assert!(p.set_min_importance(0.0).is_ok());
        assert!(p.set_min_importance(1.0).is_ok());
        assert!(matches!(p.set_min_importance(-0.01), Err(Error::InvalidArgument(_))));
        assert!(matches!(p.set_min_importance(1.01), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            p.set_min_importance(Float::NAN),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(p.min_importance(), 1.0);
    }

    #[test]
    fn variance_threshold_non_negative() {
        let mut p = ShadingPolicy::default();
        assert!(p.set_variance_threshold(0.0).is_ok());
        assert!(p.set_variance_threshold(-1.0).is_err());
        assert!(p.set_variance_threshold(Float::NAN).is_err());
    }
}
