//! Camera

use crate::common::*;
use crate::error::*;
use crate::geometry::*;
use std::sync::Arc;

/// Camera trait generates primary rays from normalized film coordinates.
pub trait Camera {
    /// Returns the ray through the film at the given normalized coordinates.
    /// `(0, 0)` is the top-left corner of the film.
    ///
    /// * `u` - Horizontal film coordinate in `[0, 1)`.
    /// * `v` - Vertical film coordinate in `[0, 1)`.
    fn make_ray(&self, u: Float, v: Float) -> Result<Ray>;
}

/// Atomic reference counted `Camera`.
pub type ArcCamera = Arc<dyn Camera + Send + Sync>;

/// Returns an `OutOfRange` error unless both film coordinates lie in `[0, 1)`.
///
/// * `u` - Horizontal film coordinate.
/// * `v` - Vertical film coordinate.
pub fn check_film_coordinates(u: Float, v: Float) -> Result<()> {
    if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
        Err(Error::OutOfRange(format!(
            "film coordinates ({u}, {v}) outside [0, 1)"
        )))
    } else {
        Ok(())
    }
}
