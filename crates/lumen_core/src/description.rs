//! JSON scene descriptions.
//!
//! A description mirrors the scene types but with plain fields and the
//! field of view in degrees. [`SceneDescription::build`] validates it.
//!
//! ```json
//! {
//!   "camera": { "origin": [0, 0, 10], "direction": [0, 0, -1], "up": [0, 1, 0], "fov": 60 },
//!   "shapes": [
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 1,
//!       "material": { "diffuse": [0.75, 0.75, 0.75] } },
//!     { "type": "plane", "point": [0, -1, 0], "normal": [0, 1, 0],
//!       "material": { "emission": [1, 1, 1] } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use lumen_math::{to_radians, Axis, Vector3};
use serde::{Deserialize, Serialize};

use crate::{Camera, Material, Plane, Scene, SceneResult, Shape, Sphere};

/// Camera parameters as they appear in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraDescription {
    pub origin: Vector3,
    pub direction: Vector3,
    #[serde(default = "default_up")]
    pub up: Vector3,
    /// Vertical field of view in degrees
    pub fov: f64,
}

fn default_up() -> Vector3 {
    Axis::Y.unit_vector()
}

/// A shape as it appears in a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere {
        center: Vector3,
        radius: f64,
        #[serde(default)]
        material: Material,
    },
    Plane {
        point: Vector3,
        normal: Vector3,
        #[serde(default)]
        material: Material,
    },
}

/// Complete scene file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    #[serde(default)]
    pub shapes: Vec<ShapeDescription>,
}

impl CameraDescription {
    pub fn build(&self) -> SceneResult<Camera> {
        Camera::new(self.origin, self.direction, self.up, to_radians(self.fov))
    }
}

impl ShapeDescription {
    pub fn build(&self) -> SceneResult<Shape> {
        let shape: Shape = match *self {
            ShapeDescription::Sphere {
                center,
                radius,
                material,
            } => Sphere::new(center, radius, material)?.into(),
            ShapeDescription::Plane {
                point,
                normal,
                material,
            } => Plane::new(point, normal, material)?.into(),
        };
        Ok(shape)
    }
}

impl SceneDescription {
    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the description and build a renderable scene.
    pub fn build(&self) -> SceneResult<Scene> {
        let shapes = self
            .shapes
            .iter()
            .map(ShapeDescription::build)
            .collect::<SceneResult<Vec<_>>>()?;

        Ok(Scene {
            camera: self.camera.build()?,
            shapes,
        })
    }
}

/// Load a JSON scene file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let scene = SceneDescription::from_json(&text)?.build()?;

    log::debug!("Loaded {} shapes from {}", scene.shape_count(), path.display());
    Ok(scene)
}
