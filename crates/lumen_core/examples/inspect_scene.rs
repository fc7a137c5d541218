//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/cornell.json

use std::env;

use lumen_core::{load_scene, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/cornell.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let camera = &scene.camera;
            println!("\n=== Camera ===");
            println!("  origin:    {}", camera.origin());
            println!("  direction: {}", camera.direction());
            println!("  up:        {}", camera.up());
            println!("  fov:       {:.1} deg", camera.fov().to_degrees());

            println!("\n=== Shapes ({}) ===", scene.shape_count());
            for (i, shape) in scene.shapes.iter().enumerate() {
                let material = shape.material();
                let kind = match shape {
                    Shape::Sphere(s) => format!("sphere center={} radius={}", s.center(), s.radius()),
                    Shape::Plane(p) => format!("plane point={} normal={}", p.point(), p.normal()),
                };
                println!(
                    "  [{}] {} emissive={} diffuse={} specular={} ior={:?}",
                    i,
                    kind,
                    material.is_emissive(),
                    material.is_diffuse(),
                    material.is_specular(),
                    material.index_of_refraction
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
