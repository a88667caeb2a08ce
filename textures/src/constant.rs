//! Constant Texture

use oxatrace_core::common::*;
use oxatrace_core::spectrum::*;
use oxatrace_core::texture::*;

/// Implements a texture that returns the same value everywhere.
#[derive(Clone)]
pub struct ConstantTexture {
    /// The texture value.
    value: Spectrum,
}

impl ConstantTexture {
    /// Create a new `ConstantTexture`.
    ///
    /// * `value` - The texture value.
    pub fn new(value: Spectrum) -> Self {
        Self { value }
    }
}

impl Texture for ConstantTexture {
    fn get(&self, _u: Float, _v: Float) -> Spectrum {
        self.value
    }
}
