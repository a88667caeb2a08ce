//! Light

use crate::geometry::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Light trait provides common behavior.
pub trait Light {
    /// Returns the world space position of the light.
    fn position(&self) -> Vector3f;

    /// Returns the colour emitted by the light.
    fn color(&self) -> Spectrum;
}

/// Atomic reference counted `Light`.
pub type ArcLight = Arc<dyn Light + Send + Sync>;
