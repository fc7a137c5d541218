//! Lumen Core - Scene model for the Lumen path tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Shape` (`Sphere`, `Plane`), `Material`
//! - **Intersection**: ray/shape hit tests and nearest-hit queries
//! - **Images**: `Image` frame buffer plus PPM/PNG output
//! - **Scene files**: JSON scene descriptions
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scenes/cornell.json")?;
//! println!("Loaded {} shapes", scene.shape_count());
//! ```

pub mod camera;
pub mod description;
pub mod hittable;
pub mod image_buffer;
pub mod material;
pub mod output;
pub mod plane;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use camera::Camera;
pub use description::{load_scene, CameraDescription, SceneDescription, ShapeDescription};
pub use hittable::{HitRecord, Shape};
pub use image_buffer::{Coordinate, Image, Pixel, Resolution};
pub use material::Material;
pub use output::{save_image, write_ppm, OutputError, OutputResult};
pub use plane::Plane;
pub use scene::{Scene, SceneError, SceneResult};
pub use sphere::Sphere;

/// Re-export math types from lumen_math
pub use lumen_math::{Color, Ray, Vector3};
