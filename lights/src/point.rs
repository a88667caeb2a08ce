//! Point Light Source

use oxatrace_core::geometry::*;
use oxatrace_core::light::*;
use oxatrace_core::spectrum::*;

/// Implements an isotropic point light source that emits the same amount of
/// light in all directions. Intensity does not fall off with distance.
#[derive(Copy, Clone, Debug)]
pub struct PointLight {
    /// Position.
    pub p_light: Vector3f,

    /// Colour.
    pub color: Spectrum,
}

impl PointLight {
    /// Returns a new `PointLight`.
    ///
    /// * `p_light` - Position in world space.
    /// * `color`   - Emitted colour.
    pub fn new(p_light: Vector3f, color: Spectrum) -> Self {
        Self { p_light, color }
    }
}

impl Light for PointLight {
    fn position(&self) -> Vector3f {
        self.p_light
    }

    fn color(&self) -> Spectrum {
        self.color
    }
}
