//! Whitted Shader

use oxatrace_core::common::*;
use oxatrace_core::error::*;
use oxatrace_core::geometry::*;
use oxatrace_core::integrator::*;
use oxatrace_core::rng::*;
use oxatrace_core::scene::*;
use oxatrace_core::shading::*;
use oxatrace_core::spectrum::*;

/// Computes the colour seen along a ray: the surface colour, Phong lighting
/// from every unoccluded light and the recursively shaded reflection.
///
/// * `scene`      - The scene.
/// * `ray`        - The ray.
/// * `policy`     - Shading policy.
/// * `depth`      - Recursion depth of `ray`; primary rays have depth 0.
/// * `importance` - Weight of this ray's result in the final pixel, in `[0, 1]`.
/// * `rng`        - Random number generator for glossy reflections.
pub fn shade(
    scene: &dyn Scene,
    ray: &Ray,
    policy: &ShadingPolicy,
    depth: u32,
    importance: Float,
    rng: &mut RNG,
) -> Result<Spectrum> {
    if !(0.0..=1.0).contains(&importance) {
        return Err(Error::InvalidArgument(format!(
            "importance {importance} outside [0, 1]"
        )));
    }

    if depth > policy.max_depth() || importance < policy.min_importance() {
        return Ok(policy.background());
    }

    let isect = match scene.intersect_solid(ray) {
        Some(isect) => isect,
        None => return Ok(policy.background()),
    };

    let p = isect.position();
    let n = isect.normal();
    let material = *isect.material();
    let mut result = isect.texture_color();

    for light in scene.lights() {
        let to_light = light.position() - p;
        let light_dir = to_light.normalize();

        let shadow_ray = Ray::new(p, light_dir);
        if let Some(obstacle) = scene.intersect_solid(&shadow_ray) {
            if obstacle.position().distance_squared(&p) < to_light.length_squared() {
                continue;
            }
        }

        let cos_a = max(n.dot(&light_dir), 0.0);
        if cos_a > 0.0 {
            let diffuse = light.color() * (material.diffuse * cos_a);
            let specular =
                light.color() * (material.specular * cos_a.powf(material.specular_exponent as Float));
            result += diffuse + specular;
        }
    }

    let mirror = ray.d.normalize().reflect(&n);
    let reflect_dir = if policy.glossy() && !material.is_mirror() {
        glossy_direction(&mirror, &n, material.specular_exponent, rng)
    } else {
        mirror
    };

    let reflection = shade(
        scene,
        &Ray::new(p, reflect_dir),
        policy,
        depth + 1,
        importance * material.reflectance,
        rng,
    )?;
    result += reflection * material.reflectance;

    Ok(result)
}

/// Samples a direction from a cosine-power lobe around the mirror direction.
/// Samples below the surface are replaced by the mirror direction.
///
/// * `mirror`   - Unit mirror reflection direction.
/// * `n`        - Unit surface normal.
/// * `exponent` - Lobe exponent; larger values give tighter lobes.
/// * `rng`      - Random number generator.
fn glossy_direction(mirror: &Vector3f, n: &Vector3f, exponent: u32, rng: &mut RNG) -> Vector3f {
    let u1 = rng.uniform_float();
    let u2 = rng.uniform_float();

    let cos_theta = u1.powf(1.0 / (exponent as Float + 1.0));
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    let phi = TWO_PI * u2;

    let (t1, t2) = mirror.coordinate_system();
    let dir = t1 * (sin_theta * phi.cos()) + t2 * (sin_theta * phi.sin()) + *mirror * cos_theta;

    if dir.dot(n) > 0.0 {
        dir
    } else {
        *mirror
    }
}

/// Traces primary rays through a scene with `shade`.
pub struct WhittedShader<'a> {
    /// The scene.
    scene: &'a dyn Scene,

    /// Shading policy.
    policy: &'a ShadingPolicy,
}

impl<'a> WhittedShader<'a> {
    /// Create a new `WhittedShader`.
    ///
    /// * `scene`  - The scene.
    /// * `policy` - Shading policy.
    pub fn new(scene: &'a dyn Scene, policy: &'a ShadingPolicy) -> Self {
        Self { scene, policy }
    }
}

impl<'a> RayTracer for WhittedShader<'a> {
    fn trace(&self, ray: &Ray, rng: &mut RNG) -> Result<Spectrum> {
        shade(self.scene, ray, self.policy, 0, 1.0, rng)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
