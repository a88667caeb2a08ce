//! Textures

use crate::common::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Texture interface.
pub trait Texture {
    /// Evaluate the texture at the given texture coordinates.
    ///
    /// * `u` - Horizontal texture coordinate in `[0, 1]`.
    /// * `v` - Vertical texture coordinate in `[0, 1]`.
    fn get(&self, u: Float, v: Float) -> Spectrum;
}

/// Atomic reference counted `Texture`.
pub type ArcTexture = Arc<dyn Texture + Send + Sync>;
