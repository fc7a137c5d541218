//! Infinite plane primitive.

use lumen_math::{unit, Ray, Vector3};

use crate::{Material, SceneResult};

/// An infinite plane through `point` with unit `normal`.
///
/// Both sides are hittable; the stored normal is reported unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vector3,
    normal: Vector3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized and must be non-zero.
    pub fn new(point: Vector3, normal: Vector3, material: Material) -> SceneResult<Self> {
        material.validate()?;
        Ok(Self {
            point,
            normal: unit(normal)?,
            material,
        })
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Ray parameter of the intersection, if it lies in front of the origin.
    pub fn hit(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom == 0.0 {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        (t > 0.0).then_some(t)
    }
}
