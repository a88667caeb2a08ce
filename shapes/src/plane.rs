//! Planes

use oxatrace_core::common::*;
use oxatrace_core::geometry::*;

/// The xy-plane. It can be seen from both sides; the normal always faces the
/// side the ray came from.
#[derive(Copy, Clone, Debug, Default)]
pub struct Plane;

impl Plane {
    /// Create a new xy-plane.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Plane {
    fn get_type(&self) -> &'static str {
        "plane"
    }

    /// Solves `o.z + t d.z = 0`. Rays parallel to or embedded in the plane
    /// miss it.
    fn intersect(&self, r: &Ray) -> Option<Float> {
        if float_eq(r.d.z, 0.0) {
            return None;
        }
        let t = -r.o.z / r.d.z;
        (t > EPSILON).then_some(t)
    }

    fn normal_at(&self, _p: &Vector3f, r: &Ray) -> Vector3f {
        if r.o.z > 0.0 {
            Vector3f::new(0.0, 0.0, 1.0)
        } else {
            Vector3f::new(0.0, 0.0, -1.0)
        }
    }

    /// Tiles the unit square across the plane using the fractional parts of
    /// x and y.
    fn texture_at(&self, p: &Vector3f) -> Point2f {
        let wrap = |c: Float| {
            let f = c.fract();
            if f < 0.0 {
                f + 1.0
            } else {
                f
            }
        };
        Point2f::new(wrap(p.x), wrap(p.y))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn intersection() {
        let p = Plane::new();
        let down = Ray::new(Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(p.intersect(&down), Some(3.0));

        let away = Ray::new(Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(p.intersect(&away), None);

        let parallel = Ray::new(Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(p.intersect(&parallel), None);
    }

    #[test]
    fn normal_faces_ray_origin() {
        let p = Plane::new();
        let above = Ray::new(Vector3f::new(0.0, 0.0, 3.0), Vector3f::new(0.0, 0.0, -1.0));
        let below = Ray::new(Vector3f::new(0.0, 0.0, -3.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(p.normal_at(&Vector3f::zero(), &above), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(p.normal_at(&Vector3f::zero(), &below), Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn uv_wraps_negative_coordinates() {
        let p = Plane::new();
        let uv = p.texture_at(&Vector3f::new(2.25, -0.25, 0.0));
        assert!(approx_eq!(Float, uv.x, 0.25, epsilon = 1e-12));
        assert!(approx_eq!(Float, uv.y, 0.75, epsilon = 1e-12));
    }
}
