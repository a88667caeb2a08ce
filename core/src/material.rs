//! Materials

use crate::common::*;
use crate::error::*;
use crate::spectrum::*;

/// Phong material coefficients of a solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Surface colour used when the solid has no texture.
    pub ambient: Spectrum,

    /// Diffuse coefficient in `[0, 1]`.
    pub diffuse: Float,

    /// Specular coefficient in `[0, 1]`.
    pub specular: Float,

    /// Phong exponent; higher values give tighter highlights.
    pub specular_exponent: u32,

    /// Fraction of reflected light blended into the surface colour, in `[0, 1]`.
    pub reflectance: Float,
}

impl Material {
    /// Create a new `Material`.
    ///
    /// * `ambient`           - Surface colour used without a texture.
    /// * `diffuse`           - Diffuse coefficient in `[0, 1]`.
    /// * `specular`          - Specular coefficient in `[0, 1]`.
    /// * `specular_exponent` - Phong exponent.
    /// * `reflectance`       - Reflectance in `[0, 1]`.
    pub fn new(
        ambient: Spectrum,
        diffuse: Float,
        specular: Float,
        specular_exponent: u32,
        reflectance: Float,
    ) -> Result<Self> {
        check_unit("diffuse", diffuse)?;
        check_unit("specular", specular)?;
        check_unit("reflectance", reflectance)?;

        Ok(Self {
            ambient,
            diffuse,
            specular,
            specular_exponent,
            reflectance,
        })
    }

    /// Returns true if the material reflects like a perfect mirror.
    pub fn is_mirror(&self) -> bool {
        self.reflectance >= 1.0
    }
}

impl Default for Material {
    /// Returns a dull white material that does not reflect.
    fn default() -> Self {
        Self {
            ambient: Spectrum::white(),
            diffuse: 1.0,
            specular: 0.0,
            specular_exponent: 1,
            reflectance: 0.0,
        }
    }
}

fn check_unit(name: &str, v: Float) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("{name} {v} outside [0, 1]")))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
