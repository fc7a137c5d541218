//! Shape enum and HitRecord for ray-object intersection.

use lumen_math::{Ray, Vector3};

use crate::{Material, Plane, Sphere};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Shape that was hit
    pub shape: &'a Shape,
    /// Point of intersection
    pub position: Vector3,
    /// Geometric surface normal (unit length, not flipped toward the ray)
    pub normal: Vector3,
    /// Parameter t where the intersection occurs (always > 0)
    pub t: f64,
}

impl HitRecord<'_> {
    /// Material of the shape that was hit.
    pub fn material(&self) -> &Material {
        self.shape.material()
    }

    /// True when the ray arrived from the side the normal points away from.
    pub fn is_back_face(&self, ray: &Ray) -> bool {
        (-ray.direction).dot(self.normal) < 0.0
    }
}

/// A renderable primitive.
///
/// The set of shapes is closed, so dispatch is a plain `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Intersect `ray` with this shape, returning the nearest hit with t > 0.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let (t, normal) = match self {
            Shape::Sphere(sphere) => {
                let t = sphere.hit(ray)?;
                (t, sphere.normal_at(ray.at(t)))
            }
            Shape::Plane(plane) => (plane.hit(ray)?, plane.normal()),
        };

        Some(HitRecord {
            shape: self,
            position: ray.at(t),
            normal,
            t,
        })
    }

    /// Get the material of this shape.
    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
            Shape::Plane(plane) => plane.material(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_dispatch() {
        let material = Material::diffuse(lumen_math::Color::ONE);
        let shape: Shape = Sphere::new(Vector3::ZERO, 1.0, material).unwrap().into();
        let ray = Ray::from_unit(Vector3::new(0.0, 0.0, 5.0), -Vector3::Z);

        let hit = shape.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-12);
        assert!((hit.position - Vector3::Z).length() < 1e-12);
        assert!((hit.normal - Vector3::Z).length() < 1e-12);
        assert!(std::ptr::eq(hit.shape, &shape));
        assert_eq!(hit.material(), &material);
    }

    #[test]
    fn test_back_face() {
        let shape: Shape = Plane::new(Vector3::ZERO, Vector3::Y, Material::default())
            .unwrap()
            .into();

        let from_above = Ray::from_unit(Vector3::Y, -Vector3::Y);
        let hit = shape.intersect(&from_above).unwrap();
        assert!(!hit.is_back_face(&from_above));

        let from_below = Ray::from_unit(-Vector3::Y, Vector3::Y);
        let hit = shape.intersect(&from_below).unwrap();
        assert!(hit.is_back_face(&from_below));
        // Normal is geometric, not flipped toward the ray
        assert_eq!(hit.normal, Vector3::Y);
    }
}
