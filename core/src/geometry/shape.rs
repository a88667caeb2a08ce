//! Shapes

use super::*;
use crate::common::*;
use std::sync::Arc;

/// Geometry of a solid in its own object space. Shapes know nothing about
/// placement in the world; `Solid` maps rays into object space first.
pub trait Shape {
    /// Returns the shape type. Shapes sit behind `ArcShape` so this helps
    /// with logging.
    fn get_type(&self) -> &'static str;

    /// Returns the smallest ray parameter greater than `EPSILON` at which the
    /// ray hits the shape, or `None` if it misses.
    ///
    /// * `r` - The ray in object space.
    fn intersect(&self, r: &Ray) -> Option<Float>;

    /// Returns the object space surface normal at a point on the shape.
    ///
    /// * `p` - A point on the surface in object space.
    /// * `r` - The ray that produced the point, for one-sided shapes that face
    ///         the viewer.
    fn normal_at(&self, p: &Vector3f, r: &Ray) -> Vector3f;

    /// Returns texture coordinates in `[0, 1]^2` for a point on the shape.
    ///
    /// * `p` - A point on the surface in object space.
    fn texture_at(&self, p: &Vector3f) -> Point2f;
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape + Send + Sync>;
