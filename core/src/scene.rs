//! Scene

use crate::common::*;
use crate::geometry::*;
use crate::light::*;
use crate::material::*;
use crate::solid::*;
use crate::spectrum::*;
use std::cell::OnceCell;
use std::sync::Arc;

/// A ray-solid intersection. The world space normal is computed on first use
/// and cached for the lifetime of the intersection, which belongs to a single
/// call frame.
pub struct Intersection<'a> {
    /// The world space ray.
    ray: Ray,

    /// The ray parameter of the hit.
    param: Float,

    /// The solid that was hit.
    solid: &'a Solid,

    /// Cached world space unit normal.
    normal: OnceCell<Vector3f>,
}

impl<'a> Intersection<'a> {
    /// Create a new `Intersection`.
    ///
    /// * `ray`   - The world space ray.
    /// * `param` - The ray parameter of the hit.
    /// * `solid` - The solid that was hit.
    pub fn new(ray: Ray, param: Float, solid: &'a Solid) -> Self {
        Self {
            ray,
            param,
            solid,
            normal: OnceCell::new(),
        }
    }

    /// Returns the ray parameter of the hit.
    pub fn param(&self) -> Float {
        self.param
    }

    /// Returns the world space hit position.
    pub fn position(&self) -> Vector3f {
        self.ray.at(self.param)
    }

    /// Returns the world space unit normal at the hit.
    pub fn normal(&self) -> Vector3f {
        *self
            .normal
            .get_or_init(|| self.solid.normal_at(&self.ray, self.param))
    }

    /// Returns the surface colour at the hit.
    pub fn texture_color(&self) -> Spectrum {
        self.solid.texture_at(&self.ray, self.param)
    }

    /// Returns the material of the hit solid.
    pub fn material(&self) -> &Material {
        self.solid.material()
    }

    /// Returns the hit solid.
    pub fn solid(&self) -> &'a Solid {
        self.solid
    }
}

/// An immutable collection of solids and lights that can be intersected.
pub trait Scene {
    /// Returns the intersection closest to the ray origin, if any.
    ///
    /// * `ray` - The world space ray.
    fn intersect_solid(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Returns the lights in the scene.
    fn lights(&self) -> &[ArcLight];
}

/// Atomic reference counted `Scene`.
pub type ArcScene = Arc<dyn Scene + Send + Sync>;

/// A mutable container of solids and lights, turned into a `Scene` once the
/// scene is set up.
#[derive(Clone, Default)]
pub struct SceneDefinition {
    solids: Vec<Solid>,
    lights: Vec<ArcLight>,
}

impl SceneDefinition {
    /// Create an empty `SceneDefinition`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a solid.
    ///
    /// * `solid` - The solid.
    pub fn add_solid(&mut self, solid: Solid) -> &mut Self {
        self.solids.push(solid);
        self
    }

    /// Adds a light.
    ///
    /// * `light` - The light.
    pub fn add_light(&mut self, light: ArcLight) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// Returns the solids added so far.
    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }
}

/// A scene without an acceleration structure; every ray is tested against
/// every solid.
pub struct SimpleScene {
    definition: SceneDefinition,
}

impl SimpleScene {
    /// Create a new `SimpleScene`.
    ///
    /// * `definition` - The solids and lights.
    pub fn new(definition: SceneDefinition) -> Self {
        info!(
            "Scene has {} solids and {} lights",
            definition.solids.len(),
            definition.lights.len()
        );
        Self { definition }
    }
}

impl From<SceneDefinition> for SimpleScene {
    fn from(definition: SceneDefinition) -> Self {
        Self::new(definition)
    }
}

impl Scene for SimpleScene {
    fn intersect_solid(&self, ray: &Ray) -> Option<Intersection<'_>> {
        self.definition
            .solids
            .iter()
            .filter_map(|solid| solid.intersect(ray).map(|t| (t, solid)))
            .min_by(|(t1, _), (t2, _)| t1.total_cmp(t2))
            .map(|(t, solid)| Intersection::new(*ray, t, solid))
    }

    fn lights(&self) -> &[ArcLight] {
        &self.definition.lights
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// The xy-plane facing the ray origin.
    struct Wall;

    impl Shape for Wall {
        fn get_type(&self) -> &'static str {
            "wall"
        }

        fn intersect(&self, r: &Ray) -> Option<Float> {
            if r.d.z == 0.0 {
                return None;
            }
            let t = -r.o.z / r.d.z;
            (t > EPSILON).then_some(t)
        }

        fn normal_at(&self, _p: &Vector3f, r: &Ray) -> Vector3f {
            Vector3f::new(0.0, 0.0, if r.o.z > 0.0 { 1.0 } else { -1.0 })
        }

        fn texture_at(&self, _p: &Vector3f) -> Point2f {
            Point2f::default()
        }
    }

    struct Bulb;

    impl Light for Bulb {
        fn position(&self) -> Vector3f {
            Vector3f::new(0.0, 0.0, 10.0)
        }

        fn color(&self) -> Spectrum {
            Spectrum::white()
        }
    }

    fn wall_at(z: Float, colour: Spectrum) -> Solid {
        let material = Material::new(colour, 1.0, 0.0, 1, 0.0).unwrap();
        let mut s = Solid::new(Arc::new(Wall), material);
        s.translate(&Vector3f::new(0.0, 0.0, z));
        s
    }

    fn two_walls() -> SimpleScene {
        let mut def = SceneDefinition::new();
        def.add_solid(wall_at(5.0, Spectrum::new(1.0, 0.0, 0.0)))
            .add_solid(wall_at(2.0, Spectrum::new(0.0, 1.0, 0.0)))
            .add_light(Arc::new(Bulb));
        SimpleScene::from(def)
    }

    #[test]
    fn closest_solid_wins() {
        let scene = two_walls();
        let r = Ray::new(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0));
        let i = scene.intersect_solid(&r).unwrap();
        assert_eq!(i.param(), 2.0);
        assert_eq!(i.position(), Vector3f::new(0.0, 0.0, 2.0));
        assert_eq!(i.texture_color(), Spectrum::new(0.0, 1.0, 0.0));
        assert_eq!(i.normal(), Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(i.normal(), i.normal());
    }

    #[test]
    fn ray_away_from_solids_misses() {
        let scene = two_walls();
        let r = Ray::new(Vector3f::zero(), Vector3f::new(0.0, 0.0, -1.0));
        assert!(scene.intersect_solid(&r).is_none());
    }

    #[test]
    fn lights_are_exposed() {
        let scene = two_walls();
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.lights()[0].position(), Vector3f::new(0.0, 0.0, 10.0));
    }
}
