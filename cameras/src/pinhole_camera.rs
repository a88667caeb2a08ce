//! Pinhole Camera

use oxatrace_core::camera::*;
use oxatrace_core::common::*;
use oxatrace_core::error::*;
use oxatrace_core::geometry::*;

/// A pinhole camera at the origin. The film sits behind the pinhole at
/// `z = 1` and rays start on the film and pass through the origin, so the
/// camera looks down -z until it is transformed.
#[derive(Clone, Debug)]
pub struct PinholeCamera {
    /// Half extent of the film along x.
    film_max_x: Float,

    /// Half extent of the film along y.
    film_max_y: Float,

    /// Camera to world transformation.
    camera_to_world: Transform,
}

impl PinholeCamera {
    /// Create a new `PinholeCamera`.
    ///
    /// * `aspect_ratio`  - Film width divided by film height.
    /// * `field_of_view` - Horizontal field of view in radians, in `(0, π)`.
    pub fn new(aspect_ratio: Float, field_of_view: Float) -> Result<Self> {
        if !(field_of_view > 0.0 && field_of_view < PI) {
            return Err(Error::OutOfRange(format!(
                "field of view {field_of_view} outside (0, π)"
            )));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(Error::OutOfRange(format!(
                "aspect ratio {aspect_ratio} must be positive"
            )));
        }

        let film_max_x = (field_of_view / 2.0).sin();
        let film_max_y = (field_of_view / aspect_ratio / 2.0).sin();
        debug!("Pinhole camera film extent {film_max_x} x {film_max_y}");

        Ok(Self {
            film_max_x,
            film_max_y,
            camera_to_world: Transform::default(),
        })
    }

    /// Moves the camera.
    ///
    /// * `delta` - Translation.
    pub fn translate(&mut self, delta: &Vector3f) -> &mut Self {
        self.camera_to_world = translate(delta) * self.camera_to_world;
        self
    }

    /// Rotates the camera about an axis through the world origin.
    ///
    /// * `axis`  - Axis of rotation.
    /// * `theta` - Angle in degrees.
    pub fn rotate(&mut self, axis: &Vector3f, theta: Float) -> &mut Self {
        self.camera_to_world = rotate(theta, axis) * self.camera_to_world;
        self
    }
}

impl Camera for PinholeCamera {
    fn make_ray(&self, u: Float, v: Float) -> Result<Ray> {
        check_film_coordinates(u, v)?;

        // The film is behind the pinhole so its image is inverted; x is
        // flipped back here while y already grows downwards in the bitmap.
        let film_point = Vector3f::new(
            self.film_max_x * -2.0 * (u - 0.5),
            self.film_max_y * 2.0 * (v - 0.5),
            1.0,
        );
        Ok(self
            .camera_to_world
            .transform_ray(&Ray::new(film_point, -film_point)))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_bad_field_of_view() {
        assert!(matches!(PinholeCamera::new(1.0, 0.0), Err(Error::OutOfRange(_))));
        assert!(matches!(PinholeCamera::new(1.0, PI), Err(Error::OutOfRange(_))));
        assert!(matches!(PinholeCamera::new(0.0, 1.0), Err(Error::OutOfRange(_))));
        assert!(PinholeCamera::new(4.0 / 3.0, PI / 2.0).is_ok());
    }

    #[test]
    fn rejects_film_coordinates_outside_unit_square() {
        let cam = PinholeCamera::new(1.0, PI / 2.0).unwrap();
        assert!(cam.make_ray(0.0, 0.0).is_ok());
        assert!(matches!(cam.make_ray(1.0, 0.5), Err(Error::OutOfRange(_))));
        assert!(matches!(cam.make_ray(0.5, -0.1), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn centre_ray_looks_down_negative_z() {
        let cam = PinholeCamera::new(1.0, PI / 2.0).unwrap();
        let r = cam.make_ray(0.5, 0.5).unwrap();
        assert_eq!(r.o, Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(r.d, Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(r.at(1.0), Vector3f::zero());
    }

    #[test]
    fn top_left_looks_up_and_left() {
        let cam = PinholeCamera::new(1.0, PI / 2.0).unwrap();
        let r = cam.make_ray(0.0, 0.0).unwrap();
        let half = (PI / 4.0).sin();
        assert!(approx_eq!(Float, r.d.x, -half, epsilon = 1e-12));
        assert!(approx_eq!(Float, r.d.y, half, epsilon = 1e-12));
    }

    #[test]
    fn translated_camera_moves_origin() {
        let mut cam = PinholeCamera::new(1.0, PI / 2.0).unwrap();
        cam.translate(&Vector3f::new(0.0, 1.0, 5.0));
        let r = cam.make_ray(0.5, 0.5).unwrap();
        assert_eq!(r.o, Vector3f::new(0.0, 1.0, 6.0));
        assert_eq!(r.d, Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn rotated_camera_turns_direction() {
        let mut cam = PinholeCamera::new(1.0, PI / 2.0).unwrap();
        cam.rotate(&Vector3f::new(0.0, 1.0, 0.0), 180.0);
        let d = cam.make_ray(0.5, 0.5).unwrap().d;
        assert!(approx_eq!(Float, d.z, 1.0, epsilon = 1e-12));
    }

    proptest! {
        #[test]
        fn rays_pass_through_pinhole(u in 0.0..1.0f64, v in 0.0..1.0f64) {
            let cam = PinholeCamera::new(1.5, 1.0).unwrap();
            let r = cam.make_ray(u, v).unwrap();
            prop_assert_eq!(r.d.z, -1.0);
            prop_assert_eq!(r.at(1.0), Vector3f::zero());
        }
    }
}
