//! Simple path tracer example.
//!
//! Renders a mirror and a glass sphere inside a lit box and saves it as PPM.
//!
//! Run with: cargo run --release --example simple_render

use lumen_core::{save_image, Camera, Material, Plane, Scene, Sphere};
use lumen_renderer::{render, Color, RenderConfig, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = build_scene()?;

    let config = RenderConfig::default()
        .with_resolution(320, 240)
        .with_sampling_count(64)
        .with_trace_recursion_limit(8)
        .with_distance_attenuation(false);

    let image = render(&scene, config)?;
    save_image("simple_render.ppm", &image)?;

    println!("Saved to simple_render.ppm");
    Ok(())
}

fn build_scene() -> Result<Scene, Box<dyn std::error::Error>> {
    let camera = Camera::new(
        Vector3::new(0.0, 1.0, 6.0),
        Vector3::new(0.0, -0.1, -1.0),
        Vector3::Y,
        45f64.to_radians(),
    )?;

    let white = Material::diffuse(Color::splat(0.75));

    let scene = Scene::new(camera)
        // Floor, back wall, colored side walls
        .with(Plane::new(Vector3::new(0.0, -1.0, 0.0), Vector3::Y, white)?)
        .with(Plane::new(Vector3::new(0.0, 0.0, -3.0), Vector3::Z, white)?)
        .with(Plane::new(
            Vector3::new(-3.0, 0.0, 0.0),
            Vector3::X,
            Material::diffuse(Color::new(0.75, 0.25, 0.25)),
        )?)
        .with(Plane::new(
            Vector3::new(3.0, 0.0, 0.0),
            -Vector3::X,
            Material::diffuse(Color::new(0.25, 0.25, 0.75)),
        )?)
        // Light
        .with(Sphere::new(
            Vector3::new(0.0, 8.0, 0.0),
            5.2,
            Material::emissive(Color::splat(4.0)),
        )?)
        .with(Sphere::new(
            Vector3::new(-1.2, -0.2, -1.0),
            0.8,
            Material::mirror(Color::splat(0.95)),
        )?)
        .with(Sphere::new(
            Vector3::new(1.2, -0.2, 0.0),
            0.8,
            Material::glass(Color::splat(0.95), 1.5),
        )?);

    Ok(scene)
}
