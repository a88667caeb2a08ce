//! Rays

use super::*;
use crate::common::*;

/// A ray with an origin and a direction. The direction need not be of unit
/// length, so that a ray parameter means the same thing in object space and
/// world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Vector3f,

    /// Direction.
    pub d: Vector3f,
}

impl Ray {
    /// Returns a new ray.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Vector3f, d: Vector3f) -> Self {
        Self { o, d }
    }

    /// Returns the position along the ray at parameter `t`.
    ///
    /// * `t` - The parameter.
    pub fn at(&self, t: Float) -> Vector3f {
        self.o + self.d * t
    }
}
