//! Demo Scenes

use cameras::*;
use lights::*;
use oxatrace_core::app::*;
use oxatrace_core::common::*;
use oxatrace_core::error::*;
use oxatrace_core::geometry::*;
use oxatrace_core::material::*;
use oxatrace_core::scene::*;
use oxatrace_core::solid::*;
use oxatrace_core::spectrum::*;
use shapes::*;
use std::sync::Arc;
use textures::*;

/// Builds one of the built-in scenes and a camera looking at it.
///
/// * `preset`        - The scene.
/// * `aspect_ratio`  - Image width divided by height.
/// * `field_of_view` - Horizontal field of view in radians.
pub fn build_scene(
    preset: ScenePreset,
    aspect_ratio: Float,
    field_of_view: Float,
) -> Result<(SimpleScene, PinholeCamera)> {
    let mut camera = PinholeCamera::new(aspect_ratio, field_of_view)?;
    let definition = match preset {
        ScenePreset::Spheres => spheres()?,
        ScenePreset::Mirrors => mirrors()?,
        ScenePreset::Single => single()?,
    };

    // Slightly above the floor, looking a little down.
    camera
        .rotate(&Vector3f::new(1.0, 0.0, 0.0), -10.0)
        .translate(&Vector3f::new(0.0, 1.0, 0.0));

    Ok((SimpleScene::new(definition), camera))
}

fn ball(colour: Spectrum, reflectance: Float, radius: Float, centre: Vector3f) -> Result<Solid> {
    let material = Material::new(colour, 0.7, 0.5, 32, reflectance)?;
    let mut s = Solid::new(Arc::new(Sphere::new()), material);
    s.scale(radius)?.translate(&centre);
    Ok(s)
}

/// A checkerboard floor at `y = -1`.
fn floor() -> Result<Solid> {
    let checks = Checkerboard::new(Spectrum::splat(0.9), Spectrum::splat(0.1), 2)?;
    let material = Material::new(Spectrum::white(), 0.8, 0.1, 4, 0.2)?;
    let mut s = Solid::new(Arc::new(Plane::new()), material).with_texture(Arc::new(checks));
    s.rotate(&Vector3f::new(1.0, 0.0, 0.0), 90.0)
        .translate(&Vector3f::new(0.0, -1.0, 0.0));
    Ok(s)
}

fn spheres() -> Result<SceneDefinition> {
    let mut def = SceneDefinition::new();
    def.add_solid(floor()?)
        .add_solid(ball(
            Spectrum::new(0.8, 0.1, 0.1),
            0.1,
            1.0,
            Vector3f::new(-2.2, 0.0, -6.0),
        )?)
        .add_solid(
            ball(Spectrum::white(), 0.3, 1.0, Vector3f::new(0.0, 0.0, -7.5))?
                .with_texture(Arc::new(UVTexture)),
        )
        .add_solid(ball(
            Spectrum::new(0.1, 0.2, 0.8),
            0.5,
            1.0,
            Vector3f::new(2.2, 0.0, -6.0),
        )?)
        .add_light(Arc::new(PointLight::new(
            Vector3f::new(-6.0, 8.0, 0.0),
            Spectrum::splat(0.7),
        )))
        .add_light(Arc::new(PointLight::new(
            Vector3f::new(6.0, 5.0, -2.0),
            Spectrum::new(0.5, 0.45, 0.4),
        )));
    Ok(def)
}

fn mirrors() -> Result<SceneDefinition> {
    let wall_checks = Checkerboard::new(Spectrum::new(0.9, 0.8, 0.2), Spectrum::new(0.2, 0.2, 0.6), 4)?;
    let wall_material = Material::new(Spectrum::white(), 0.9, 0.0, 1, 0.0)?;
    let mut wall = Solid::new(Arc::new(Plane::new()), wall_material).with_texture(Arc::new(wall_checks));
    wall.scale(4.0)?.translate(&Vector3f::new(0.0, 0.0, -14.0));

    let mut def = SceneDefinition::new();
    def.add_solid(floor()?)
        .add_solid(wall)
        .add_solid(ball(Spectrum::black(), 1.0, 1.5, Vector3f::new(0.0, 0.5, -7.0))?)
        .add_solid(
            ball(Spectrum::white(), 0.2, 0.6, Vector3f::new(-2.5, -0.4, -5.5))?
                .with_texture(Arc::new(ConstantTexture::new(Spectrum::new(0.9, 0.5, 0.1)))),
        )
        .add_light(Arc::new(PointLight::new(
            Vector3f::new(0.0, 10.0, 2.0),
            Spectrum::splat(0.8),
        )));
    Ok(def)
}

fn single() -> Result<SceneDefinition> {
    let mut def = SceneDefinition::new();
    def.add_solid(ball(
        Spectrum::new(0.2, 0.2, 0.2),
        0.0,
        1.0,
        Vector3f::new(0.0, 0.0, -5.0),
    )?)
    .add_light(Arc::new(PointLight::new(
        Vector3f::new(5.0, 5.0, 0.0),
        Spectrum::white(),
    )));
    Ok(def)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
