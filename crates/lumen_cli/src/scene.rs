//! Built-in demo scene.

use lumen_core::{Camera, Material, Plane, Scene, SceneResult, Sphere};
use lumen_math::{to_radians, Axis, Color, Vector3};

/// Cornell-style box with a mirror sphere, a glass sphere and a huge
/// emissive sphere poking through the ceiling.
pub fn demo_scene() -> SceneResult<Scene> {
    let [x, y, z] = [Axis::X, Axis::Y, Axis::Z].map(Axis::unit_vector);

    let camera = Camera::new(
        Vector3::new(50.0, 52.0, 295.6),
        Vector3::new(0.0, -0.042612, -1.0),
        y,
        to_radians(30.0),
    )?;

    let white = Material::diffuse(Color::splat(0.75));
    let red = Material::diffuse(Color::new(0.75, 0.25, 0.25));
    let blue = Material::diffuse(Color::new(0.25, 0.25, 0.75));
    let chrome = Color::splat(0.999);

    let scene = Scene::new(camera)
        .with(Sphere::new(
            Vector3::new(27.0, 16.5, 47.0),
            16.5,
            Material::mirror(chrome),
        )?)
        .with(Sphere::new(
            Vector3::new(73.0, 16.5, 78.0),
            16.5,
            Material::glass(chrome, 1.5168),
        )?)
        .with(Sphere::new(
            Vector3::new(50.0, 681.33, 81.6),
            600.0,
            Material::emissive(Color::splat(1.0e6)).with_diffuse(Color::splat(0.75)),
        )?)
        // Ceiling, floor, left, right, back
        .with(Plane::new(81.6 * y, -y, white)?)
        .with(Plane::new(Vector3::ZERO, y, white)?)
        .with(Plane::new(x, x, red)?)
        .with(Plane::new(99.0 * x, -x, blue)?)
        .with(Plane::new(Vector3::ZERO, z, white)?);

    Ok(scene)
}
