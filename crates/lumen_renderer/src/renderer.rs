//! Per-pixel radiance estimation and tone mapping.

use lumen_core::Scene;
use lumen_math::Color;
use rand::RngCore;

use crate::{trace, RenderConfig, Screen};

/// Display gamma applied by [`tone_map`].
pub const GAMMA: f32 = 2.2;

/// Gamma-encode a linear color. Channels are not clamped here.
#[inline]
pub fn tone_map(color: Color) -> Color {
    color.powf(1.0 / GAMMA)
}

/// Average `sampling_count` path samples through pixel (x, y), in linear space.
pub fn estimate_radiance(
    scene: &Scene,
    screen: &Screen,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for ray in screen.pixel_rays(x, y, config.sampling_count, rng) {
        pixel_color += trace(scene, &ray, config.trace_recursion_limit, config, rng);
    }

    pixel_color / config.sampling_count as f32
}

/// Estimate pixel (x, y) and tone map it for display.
pub fn render_pixel(
    scene: &Scene,
    screen: &Screen,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    tone_map(estimate_radiance(scene, screen, x, y, config, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Camera, Material, Plane};
    use lumen_math::Vector3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tone_map() {
        assert_eq!(tone_map(Color::ZERO), Color::ZERO);
        assert_eq!(tone_map(Color::ONE), Color::ONE);

        let mapped = tone_map(Color::splat(0.5));
        assert!((mapped.x - 0.5f32.powf(1.0 / 2.2)).abs() < 1e-6);
        // Brighter than linear, and not clamped above one
        assert!(mapped.x > 0.5);
        assert!(tone_map(Color::splat(4.0)).x > 1.0);
    }

    #[test]
    fn test_uniform_emitter_estimate() {
        // Camera looking straight at an emissive wall fills every pixel
        let camera = Camera::new(Vector3::ZERO, -Vector3::Z, Vector3::Y, 40f64.to_radians()).unwrap();
        let scene = Scene::new(camera).with(
            Plane::new(Vector3::new(0.0, 0.0, -1.0), Vector3::Z, Material::emissive(Color::ONE))
                .unwrap(),
        );
        let config = RenderConfig::default()
            .with_resolution(8, 8)
            .with_sampling_count(16)
            .with_distance_attenuation(false);
        let screen = Screen::new(&scene.camera, config.resolution);
        let mut rng = StdRng::seed_from_u64(3);

        // Off-axis pixels see the wall at an angle, so the cosine weight is below one
        let center = estimate_radiance(&scene, &screen, 4, 4, &config, &mut rng);
        let corner = estimate_radiance(&scene, &screen, 0, 0, &config, &mut rng);
        assert!(center.x > 0.95 && center.x <= 1.0);
        assert!(corner.x > 0.8 && corner.x < center.x);

        let mapped = render_pixel(&scene, &screen, 0, 0, &config, &mut rng);
        assert!(mapped.x > corner.x);
    }
}
