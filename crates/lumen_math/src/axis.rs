use serde::{Deserialize, Serialize};

use crate::{MathError, Vector3};

/// Coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector pointing along this axis.
    pub fn unit_vector(self) -> Vector3 {
        match self {
            Axis::X => Vector3::X,
            Axis::Y => Vector3::Y,
            Axis::Z => Vector3::Z,
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = MathError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            n => Err(MathError::UnknownAxis(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_unit_vector() {
        assert_eq!(Axis::X.unit_vector(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Axis::Y.unit_vector(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::Z.unit_vector(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_axis_from_discriminant() {
        assert_eq!(Axis::try_from(1), Ok(Axis::Y));
        assert_eq!(Axis::try_from(3), Err(MathError::UnknownAxis(3)));
    }
}
