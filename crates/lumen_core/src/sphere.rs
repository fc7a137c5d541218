//! Sphere primitive.

use lumen_math::{Ray, Vector3};

use crate::{Material, SceneError, SceneResult};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vector3, radius: f64, material: Material) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        material.validate()?;

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Solve for the nearest positive ray parameter, if any.
    ///
    /// With a unit direction the quadratic is t² + b·t + c = 0. When the origin
    /// lies inside the sphere only one root is positive and that one is used.
    pub fn hit(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - 4.0 * c;

        let t = if discriminant > 0.0 {
            let sqrtd = discriminant.sqrt();
            let t1 = (-b + sqrtd) / 2.0;
            let t2 = (-b - sqrtd) / 2.0;

            if t1 > 0.0 && t2 > 0.0 {
                t1.min(t2)
            } else if t1 < 0.0 && t2 < 0.0 {
                return None;
            } else {
                t1.max(t2)
            }
        } else if discriminant < 0.0 {
            return None;
        } else {
            // Tangent
            -b / 2.0
        };

        (t > 0.0).then_some(t)
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, position: Vector3) -> Vector3 {
        (position - self.center).normalize()
    }
}
