//! Scene container and nearest-hit query.

use lumen_math::{MathError, Ray, Vector3};
use thiserror::Error;

use crate::{Camera, HitRecord, Shape};

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("Degenerate camera (direction {direction}, up {up})")]
    DegenerateCamera { direction: Vector3, up: Vector3 },

    #[error("Field of view must be in (0, pi) radians, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("Index of refraction must be positive, got {0}")]
    InvalidIndexOfRefraction(f64),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A camera plus an unordered collection of shapes.
///
/// Immutable while rendering, so it can be shared across worker threads.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            shapes: Vec::new(),
        }
    }

    /// Add a shape.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Builder-style variant of [`Scene::add`].
    pub fn with(mut self, shape: impl Into<Shape>) -> Self {
        self.add(shape);
        self
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Find the closest intersection along `ray`.
    ///
    /// Linear scan; on equal t the shape added first wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut nearest: Option<HitRecord<'_>> = None;

        for shape in &self.shapes {
            if let Some(hit) = shape.intersect(ray) {
                if nearest.map_or(true, |n| hit.t < n.t) {
                    nearest = Some(hit);
                }
            }
        }

        nearest
    }
}
