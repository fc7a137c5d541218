// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod axis;
mod ray;
mod vector;

pub use axis::Axis;
pub use ray::Ray;
pub use vector::{
    color_nearly_equal, is_black, nearly_equal, to_radians, unit, MathError, MathResult,
};

/// World-space vector/point type (double precision).
pub type Vector3 = DVec3;

/// Linear RGB color. Display-bound, so single precision is enough.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_operations() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
    }

    #[test]
    fn test_color_operations() {
        let a = Color::new(0.1, 0.2, 0.3);
        let b = Color::new(0.01, 0.02, 0.03);

        assert!(color_nearly_equal(a * b, Color::new(0.001, 0.004, 0.009)));
        assert!(color_nearly_equal(a * 2.0, Color::new(0.2, 0.4, 0.6)));
        assert!(color_nearly_equal(a / 2.0, Color::new(0.05, 0.1, 0.15)));
        assert!(color_nearly_equal(a + b, Color::new(0.11, 0.22, 0.33)));
    }
}
