//! Spheres

use oxatrace_core::common::*;
use oxatrace_core::geometry::*;

/// A unit sphere at origin [0, 0, 0]. Other sizes and positions come from
/// the transformation of the solid that holds it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sphere;

impl Sphere {
    /// Create a new unit sphere.
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Sphere {
    fn get_type(&self) -> &'static str {
        "sphere"
    }

    /// Solves `|o + td|^2 = 1` for `t`.
    fn intersect(&self, r: &Ray) -> Option<Float> {
        let od = r.o.dot(&r.d);
        let d2 = r.d.length_squared();
        let o2 = r.o.length_squared();
        let discrim = od * od - d2 * (o2 - 1.0);
        if discrim < 0.0 || d2 == 0.0 {
            return None;
        }

        let root = discrim.sqrt();
        let t0 = (-od - root) / d2;
        let t1 = (-od + root) / d2;

        // The origin itself is not part of the ray.
        if t0 > EPSILON {
            Some(t0)
        } else if t1 > EPSILON {
            Some(t1)
        } else {
            None
        }
    }

    fn normal_at(&self, p: &Vector3f, _r: &Ray) -> Vector3f {
        *p
    }

    fn texture_at(&self, p: &Vector3f) -> Point2f {
        let d = -*p;
        let u = 0.5 + d.z.atan2(d.x) / TWO_PI;
        let v = 0.5 - clamp(d.y, -1.0, 1.0).asin() / PI;
        Point2f::new(clamp(u, 0.0, 1.0), clamp(v, 0.0, 1.0))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use oxatrace_core::material::*;
    use oxatrace_core::scene::*;
    use oxatrace_core::solid::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn assert_vec_eq(a: Vector3f, b: Vector3f) {
        assert!(approx_eq!(Float, a.x, b.x, epsilon = 1e-9), "{a} != {b}");
        assert!(approx_eq!(Float, a.y, b.y, epsilon = 1e-9), "{a} != {b}");
        assert!(approx_eq!(Float, a.z, b.z, epsilon = 1e-9), "{a} != {b}");
    }

    #[test]
    fn intersections_from_outside_and_inside() {
        let s = Sphere::new();
        let outside = Ray::new(Vector3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(&outside), Some(4.0));

        let inside = Ray::new(Vector3f::zero(), Vector3f::new(0.0, 2.0, 0.0));
        assert_eq!(s.intersect(&inside), Some(0.5));

        let behind = Ray::new(Vector3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(&behind), None);

        let wide = Ray::new(Vector3f::new(0.0, 1.5, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(s.intersect(&wide), None);
    }

    #[test]
    fn starting_on_surface_finds_far_side() {
        let s = Sphere::new();
        let r = Ray::new(Vector3f::new(-1.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(s.intersect(&r), Some(2.0));
    }

    #[test]
    fn uv_of_poles_and_equator() {
        let s = Sphere::new();
        let top = s.texture_at(&Vector3f::new(0.0, 1.0, 0.0));
        assert!(approx_eq!(Float, top.y, 1.0, epsilon = 1e-12));
        let bottom = s.texture_at(&Vector3f::new(0.0, -1.0, 0.0));
        assert!(approx_eq!(Float, bottom.y, 0.0, epsilon = 1e-12));
        let side = s.texture_at(&Vector3f::new(-1.0, 0.0, 0.0));
        assert!(approx_eq!(Float, side.x, 0.5, epsilon = 1e-12));
        assert!(approx_eq!(Float, side.y, 0.5, epsilon = 1e-12));
    }

    fn two_spheres() -> SimpleScene {
        let mut left = Solid::new(Arc::new(Sphere::new()), Material::default());
        left.scale(2.0).unwrap();
        let mut right = Solid::new(Arc::new(Sphere::new()), Material::default());
        right.scale(2.0).unwrap().translate(&Vector3f::new(5.0, 0.0, 0.0));

        let mut def = SceneDefinition::new();
        def.add_solid(left).add_solid(right);
        SimpleScene::new(def)
    }

    #[test]
    fn unobstructed_hit() {
        let scene = two_spheres();
        let r = Ray::new(Vector3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        let i = scene.intersect_solid(&r).unwrap();
        assert_vec_eq(i.position(), Vector3f::new(0.0, 0.0, -2.0));
        assert_vec_eq(i.normal(), Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn hit_from_left() {
        let scene = two_spheres();
        let r = Ray::new(Vector3f::new(-5.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0));
        let i = scene.intersect_solid(&r).unwrap();
        assert_vec_eq(i.position(), Vector3f::new(-2.0, 0.0, 0.0));
        assert_vec_eq(i.normal(), Vector3f::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn hit_from_right() {
        let scene = two_spheres();
        let r = Ray::new(Vector3f::new(10.0, 0.0, 0.0), Vector3f::new(-1.0, 0.0, 0.0));
        let i = scene.intersect_solid(&r).unwrap();
        assert_vec_eq(i.position(), Vector3f::new(7.0, 0.0, 0.0));
        assert_vec_eq(i.normal(), Vector3f::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn miss() {
        let scene = two_spheres();
        let r = Ray::new(Vector3f::new(-5.0, 4.0, 10.0), Vector3f::new(1.0, 0.0, 5.0));
        assert!(scene.intersect_solid(&r).is_none());
    }

    proptest! {
        #[test]
        fn hits_lie_on_surface(
            ox in -5.0..5.0f64, oy in -5.0..5.0f64, oz in -5.0..5.0f64,
            dx in -1.0..1.0f64, dy in -1.0..1.0f64, dz in -1.0..1.0f64,
        ) {
            let r = Ray::new(Vector3f::new(ox, oy, oz), Vector3f::new(dx, dy, dz));
            prop_assume!(r.d.length_squared() > 0.01);
            if let Some(t) = Sphere::new().intersect(&r) {
                prop_assert!(t > EPSILON);
                prop_assert!(approx_eq!(Float, r.at(t).length(), 1.0, epsilon = 1e-6));
            }
        }
    }
}
