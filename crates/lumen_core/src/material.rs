//! Surface material description.

use lumen_math::{is_black, Color};
use serde::{Deserialize, Serialize};

use crate::{SceneError, SceneResult};

/// How a surface emits, scatters, reflects and transmits light.
///
/// Each channel only contributes when it is non-black. A material without an
/// index of refraction is opaque and never refracts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Radiated light
    pub emission: Color,
    /// Diffuse (Lambertian) reflectance
    pub diffuse: Color,
    /// Mirror reflectance, also gates specular reflection on dielectrics
    pub specular: Color,
    /// Index of refraction (`None` = opaque)
    pub index_of_refraction: Option<f64>,
}

impl Material {
    /// A black, opaque material.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emitted light.
    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    /// Set the diffuse reflectance.
    pub fn with_diffuse(mut self, diffuse: Color) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Set the mirror reflectance.
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    /// Make the material a dielectric with the given index of refraction.
    pub fn with_index_of_refraction(mut self, ior: f64) -> Self {
        self.index_of_refraction = Some(ior);
        self
    }

    /// Pure diffuse surface.
    pub fn diffuse(albedo: Color) -> Self {
        Self::new().with_diffuse(albedo)
    }

    /// Pure emitter.
    pub fn emissive(emission: Color) -> Self {
        Self::new().with_emission(emission)
    }

    /// Perfect mirror.
    pub fn mirror(reflectance: Color) -> Self {
        Self::new().with_specular(reflectance)
    }

    /// Glass-like dielectric. Reflected light is tinted by `reflectance`.
    pub fn glass(reflectance: Color, ior: f64) -> Self {
        Self::mirror(reflectance).with_index_of_refraction(ior)
    }

    pub fn is_emissive(&self) -> bool {
        !is_black(self.emission)
    }

    pub fn is_diffuse(&self) -> bool {
        !is_black(self.diffuse)
    }

    pub fn is_specular(&self) -> bool {
        !is_black(self.specular)
    }

    /// True when the material has no index of refraction.
    pub fn is_opaque(&self) -> bool {
        self.index_of_refraction.is_none()
    }

    /// Check that the index of refraction, if any, is positive and finite.
    pub fn validate(&self) -> SceneResult<()> {
        match self.index_of_refraction {
            Some(ior) if !(ior.is_finite() && ior > 0.0) => {
                Err(SceneError::InvalidIndexOfRefraction(ior))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_black_and_opaque() {
        let material = Material::default();
        assert!(!material.is_emissive());
        assert!(!material.is_diffuse());
        assert!(!material.is_specular());
        assert!(material.is_opaque());
    }

    #[test]
    fn test_glass_material() {
        let glass = Material::glass(Color::splat(0.999), 1.5168);
        assert!(glass.is_specular());
        assert!(!glass.is_opaque());
        assert_eq!(glass.index_of_refraction, Some(1.5168));
    }

    #[test]
    fn test_validate_index_of_refraction() {
        assert!(Material::default().validate().is_ok());
        assert!(Material::glass(Color::ONE, 1.5).validate().is_ok());

        for ior in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Material::glass(Color::ONE, ior).validate(),
                Err(SceneError::InvalidIndexOfRefraction(_))
            ));
        }
    }

    #[test]
    fn test_material_from_partial_json() {
        let json = r#"{ "diffuse": [0.75, 0.25, 0.25] }"#;
        let material: Material = serde_json::from_str(json).unwrap();

        assert_eq!(material.diffuse, Color::new(0.75, 0.25, 0.25));
        assert_eq!(material.emission, Color::ZERO);
        assert!(material.is_opaque());
    }
}
