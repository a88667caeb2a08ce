//! UV Texture

use oxatrace_core::common::*;
use oxatrace_core::spectrum::*;
use oxatrace_core::texture::*;

/// Maps texture coordinates to red and green. Useful for checking UV
/// mappings of shapes.
#[derive(Copy, Clone, Default)]
pub struct UVTexture;

impl Texture for UVTexture {
    fn get(&self, u: Float, v: Float) -> Spectrum {
        Spectrum::new(u - u.floor(), v - v.floor(), 0.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
