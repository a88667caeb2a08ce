//! Solids

use crate::common::*;
use crate::error::*;
use crate::geometry::*;
use crate::material::*;
use crate::spectrum::*;
use crate::texture::*;

/// A renderable entity: a shape placed in the world with a material and an
/// optional texture.
#[derive(Clone)]
pub struct Solid {
    /// The shape in object space.
    shape: ArcShape,

    /// The material.
    material: Material,

    /// Optional texture; the material's ambient colour is used without one.
    texture: Option<ArcTexture>,

    /// Object to world space transformation.
    object_to_world: Transform,

    /// World to object space transformation.
    world_to_object: Transform,
}

impl Solid {
    /// Create a new `Solid` at the origin with no texture.
    ///
    /// * `shape`    - The shape.
    /// * `material` - The material.
    pub fn new(shape: ArcShape, material: Material) -> Self {
        Self {
            shape,
            material,
            texture: None,
            object_to_world: Transform::default(),
            world_to_object: Transform::default(),
        }
    }

    /// Sets the texture.
    ///
    /// * `texture` - The texture.
    pub fn with_texture(mut self, texture: ArcTexture) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Returns the material.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Returns the shape.
    pub fn shape(&self) -> &ArcShape {
        &self.shape
    }

    /// Returns the object to world transformation.
    pub fn object_to_world(&self) -> &Transform {
        &self.object_to_world
    }

    /// Returns the smallest world space ray parameter at which the ray hits
    /// the solid.
    ///
    /// * `r` - The ray in world space.
    pub fn intersect(&self, r: &Ray) -> Option<Float> {
        self.shape.intersect(&self.world_to_object.transform_ray(r))
    }

    /// Returns the world space unit normal at the point `r.at(t)`.
    ///
    /// * `r` - The world space ray that hit the solid.
    /// * `t` - The ray parameter of the hit.
    pub fn normal_at(&self, r: &Ray, t: Float) -> Vector3f {
        let object_ray = self.world_to_object.transform_ray(r);
        let n = self.shape.normal_at(&object_ray.at(t), &object_ray);
        self.object_to_world.transform_normal(&n).normalize()
    }

    /// Returns the surface colour at the point `r.at(t)`.
    ///
    /// * `r` - The world space ray that hit the solid.
    /// * `t` - The ray parameter of the hit.
    pub fn texture_at(&self, r: &Ray, t: Float) -> Spectrum {
        match &self.texture {
            Some(texture) => {
                let object_ray = self.world_to_object.transform_ray(r);
                let uv = self.shape.texture_at(&object_ray.at(t));
                texture.get(uv.x, uv.y)
            }
            None => self.material.ambient,
        }
    }

    /// Translates the solid.
    ///
    /// * `delta` - Translation.
    pub fn translate(&mut self, delta: &Vector3f) -> &mut Self {
        self.transform(translate(delta))
    }

    /// Scales the solid uniformly.
    ///
    /// * `factor` - Scaling factor; must be positive.
    pub fn scale(&mut self, factor: Float) -> Result<&mut Self> {
        self.scale_xyz(factor, factor, factor)
    }

    /// Scales the solid along each axis.
    ///
    /// * `x` - Scaling factor along x; must be positive.
    /// * `y` - Scaling factor along y; must be positive.
    /// * `z` - Scaling factor along z; must be positive.
    pub fn scale_xyz(&mut self, x: Float, y: Float, z: Float) -> Result<&mut Self> {
        if !(x >= EPSILON && y >= EPSILON && z >= EPSILON) {
            return Err(Error::InvalidArgument(format!(
                "scale factors ({x}, {y}, {z}) must be positive"
            )));
        }
        Ok(self.transform(scale(x, y, z)))
    }

    /// Rotates the solid about an axis through the origin.
    ///
    /// * `axis`  - Axis of rotation.
    /// * `theta` - Angle in degrees.
    pub fn rotate(&mut self, axis: &Vector3f, theta: Float) -> &mut Self {
        self.transform(rotate(theta, axis))
    }

    /// Applies a transformation after the existing ones.
    ///
    /// * `t` - The transformation.
    pub fn transform(&mut self, t: Transform) -> &mut Self {
        self.object_to_world = t * self.object_to_world;
        self.world_to_object = self.object_to_world.inverse();
        self
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
