//! Pinhole camera extrinsics.

use lumen_math::{unit, Vector3};

use crate::{SceneError, SceneResult};

/// Camera position and orientation.
///
/// `direction` and `up` are unit length and mutually perpendicular.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vector3,
    direction: Vector3,
    up: Vector3,
    /// Vertical field of view in radians
    fov: f64,
}

impl Camera {
    /// Create a new camera.
    ///
    /// `up` only needs to be roughly upward: it is re-orthogonalized against
    /// `direction` (Gram-Schmidt). Fails if either vector is zero, if they are
    /// parallel, or if `fov` is not in (0, π).
    pub fn new(origin: Vector3, direction: Vector3, up: Vector3, fov: f64) -> SceneResult<Self> {
        if !(fov > 0.0 && fov < std::f64::consts::PI) {
            return Err(SceneError::InvalidFieldOfView(fov));
        }

        let degenerate = |_| SceneError::DegenerateCamera { direction, up };
        let corrected_dir = unit(direction).map_err(degenerate)?;
        let corrected_up = unit(direction.cross(up.cross(direction))).map_err(degenerate)?;

        Ok(Self {
            origin,
            direction: corrected_dir,
            up: corrected_up,
            fov,
        })
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f64 {
        self.fov
    }
}
