use thiserror::Error;

use crate::{Color, Vector3};

/// Errors raised by vector operations with undefined results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("cannot normalize degenerate vector ({0}, {1}, {2})")]
    DegenerateVector(f64, f64, f64),

    #[error("unknown axis: {0}")]
    UnknownAxis(u8),
}

pub type MathResult<T> = Result<T, MathError>;

/// Normalize `v`, failing instead of producing NaN when its length is zero.
pub fn unit(v: Vector3) -> MathResult<Vector3> {
    v.try_normalize()
        .ok_or(MathError::DegenerateVector(v.x, v.y, v.z))
}

/// Component-wise comparison within f64 machine epsilon.
pub fn nearly_equal(a: Vector3, b: Vector3) -> bool {
    a.abs_diff_eq(b, f64::EPSILON)
}

/// Component-wise comparison within f32 machine epsilon.
pub fn color_nearly_equal(a: Color, b: Color) -> bool {
    a.abs_diff_eq(b, f32::EPSILON)
}

/// True when every channel is (nearly) zero.
#[inline]
pub fn is_black(color: Color) -> bool {
    color_nearly_equal(color, Color::ZERO)
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_has_length_one() {
        let vectors = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.0, 0.5, 0.0),
            Vector3::new(1e-3, -1e-3, 2e-3),
            Vector3::new(250.0, 0.0, -600.0),
        ];

        for v in vectors {
            let u = unit(v).unwrap();
            assert!((u.length() - 1.0).abs() < 1e-12, "{v} -> {u}");
            // Parallel with the same sign
            assert!((u.dot(v) - v.length()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_rejects_zero() {
        assert_eq!(
            unit(Vector3::ZERO),
            Err(MathError::DegenerateVector(0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_nearly_equal() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        assert!(nearly_equal(a, a));
        assert!(nearly_equal(a, a + Vector3::new(0.0, 0.0, f64::EPSILON / 2.0)));
        assert!(!nearly_equal(a, Vector3::new(0.11, 0.2, 0.3)));
    }

    #[test]
    fn test_color_nearly_equal() {
        let c = Color::new(0.1, 0.2, 0.3);
        assert!(color_nearly_equal(c, c));
        assert!(!color_nearly_equal(c, Color::new(0.1, 0.21, 0.3)));
        assert!(!color_nearly_equal(c, Color::new(0.1, 0.2, 0.3 + 4.0 * f32::EPSILON)));
    }

    #[test]
    fn test_is_black() {
        assert!(is_black(Color::ZERO));
        assert!(!is_black(Color::new(0.0, 0.0, 0.01)));
    }
}
