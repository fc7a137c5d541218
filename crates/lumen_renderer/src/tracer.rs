//! Recursive radiance estimator.
//!
//! Each hit sums up to four contributions:
//! - emission, weighted by the cosine toward the viewer
//! - diffuse, one cosine-weighted hemisphere sample
//! - refraction, chosen stochastically against Fresnel reflectance
//! - specular, a perfect mirror bounce when refraction did not happen

use std::f64::consts::PI;

use lumen_core::{HitRecord, Scene};
use lumen_math::{Color, Ray, Vector3};
use rand::{Rng, RngCore};

use crate::RenderConfig;

/// Offset applied to secondary ray origins to avoid re-hitting the surface.
pub const SURFACE_BIAS: f64 = 1.0e4 * f64::EPSILON;

/// Estimate the radiance arriving along `ray`.
///
/// `depth` is a hard bounce limit: at zero the path is cut off and
/// contributes nothing. There is no background term.
pub fn trace(
    scene: &Scene,
    ray: &Ray,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return Color::ZERO;
    };

    let material = *hit.material();
    let attenuate = |color: Color| {
        if config.distance_attenuation_enabled {
            distance_attenuation(color, (hit.position - ray.origin).length())
        } else {
            color
        }
    };

    let mut emission = Color::ZERO;
    if material.is_emissive() {
        // Back faces do not emit
        let cos_theta = (-ray.direction).dot(hit.normal).max(0.0);
        emission = attenuate(material.emission * cos_theta as f32);
    }

    let mut diffuse = Color::ZERO;
    if material.is_diffuse() {
        let bounce = diffuse_ray(ray, &hit, rng);
        diffuse = attenuate(material.diffuse * trace(scene, &bounce, depth - 1, config, rng));
    }

    let mut refraction = Color::ZERO;
    let mut refracted = false;
    if let Some(ior) = material.index_of_refraction {
        if let Refraction::Transmitted(transmitted) = refract_ray(ray, &hit, ior) {
            let kr = reflectance(ray.direction, facing_normal(ray, &hit), 1.0, ior);
            if kr < rng.gen::<f64>() {
                refraction = attenuate(trace(scene, &transmitted, depth - 1, config, rng));
                refracted = true;
            }
        }
    }

    let mut specular = Color::ZERO;
    if !refracted && material.is_specular() {
        let reflected = reflect_ray(ray, &hit);
        specular = attenuate(material.specular * trace(scene, &reflected, depth - 1, config, rng));
    }

    emission + diffuse + refraction + specular
}

/// Divide `color` by 1 + 0.01·distance².
#[inline]
pub fn distance_attenuation(color: Color, distance: f64) -> Color {
    color / (1.0 + 0.01 * distance * distance) as f32
}

/// Schlick's approximation of Fresnel reflectance.
///
/// `normal` must face the incoming ray.
pub fn reflectance(direction: Vector3, normal: Vector3, n1: f64, n2: f64) -> f64 {
    let cos_theta = (-direction).dot(normal);
    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}

/// Hit normal flipped, if needed, to face the incoming ray.
#[inline]
fn facing_normal(ray: &Ray, hit: &HitRecord<'_>) -> Vector3 {
    if hit.is_back_face(ray) {
        -hit.normal
    } else {
        hit.normal
    }
}

/// Cosine-weighted hemisphere sample around the surface normal.
pub fn diffuse_ray(ray: &Ray, hit: &HitRecord<'_>, rng: &mut dyn RngCore) -> Ray {
    let n = facing_normal(ray, hit);

    // Tangent frame; a head-on ray leaves n × d degenerate
    let (u, v) = match n.cross(ray.direction).try_normalize() {
        Some(u) => (u, u.cross(n).normalize()),
        None => n.any_orthonormal_pair(),
    };

    let r = rng.gen::<f64>().sqrt();
    let theta = 2.0 * PI * rng.gen::<f64>();
    let x = r * theta.cos();
    let y = r * theta.sin();
    let z = (1.0 - x * x - y * y).max(0.0).sqrt();

    let direction = (x * u + y * v + z * n).normalize();
    Ray::from_unit(hit.position + SURFACE_BIAS * n, direction)
}

/// Mirror `direction` about `normal`.
#[inline]
pub fn reflect_direction(direction: Vector3, normal: Vector3) -> Vector3 {
    let incoming = -direction;
    2.0 * incoming.dot(normal) * normal - incoming
}

/// Perfect mirror bounce, leaving from the side the ray arrived on.
pub fn reflect_ray(ray: &Ray, hit: &HitRecord<'_>) -> Ray {
    let direction = reflect_direction(ray.direction, hit.normal).normalize();
    Ray::from_unit(hit.position + SURFACE_BIAS * facing_normal(ray, hit), direction)
}

/// Outcome of a refraction attempt at a dielectric boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    /// Light crosses the boundary along this ray
    Transmitted(Ray),
    /// Snell's law has no solution; all light is reflected
    TotalInternalReflection,
}

/// Refract `ray` through the surface at `hit` using Snell's law.
///
/// Outside is assumed to be vacuum (index 1). Whether the ray is entering or
/// leaving is decided by which side of the geometric normal it arrives on.
pub fn refract_ray(ray: &Ray, hit: &HitRecord<'_>, ior: f64) -> Refraction {
    let inside = hit.is_back_face(ray);
    let normal = facing_normal(ray, hit);
    let eta = if inside { ior } else { 1.0 / ior };

    let incoming = -ray.direction;
    let cos_i = incoming.dot(normal);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return Refraction::TotalInternalReflection;
    }

    let direction = (-eta * (incoming - cos_i * normal) - k.sqrt() * normal).normalize();
    Refraction::Transmitted(Ray::from_unit(hit.position - SURFACE_BIAS * normal, direction))
}
