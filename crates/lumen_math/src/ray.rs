use crate::{unit, MathResult, Vector3};

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized once at construction and never re-checked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// Fails if `direction` has zero length.
    pub fn new(origin: Vector3, direction: Vector3) -> MathResult<Self> {
        Ok(Self {
            origin,
            direction: unit(direction)?,
        })
    }

    /// Create a ray from a direction that is already unit length.
    #[inline]
    pub fn from_unit(origin: Vector3, direction: Vector3) -> Self {
        debug_assert!(
            (direction.length_squared() - 1.0).abs() < 1e-6,
            "ray direction must be unit length, got {direction}"
        );
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
