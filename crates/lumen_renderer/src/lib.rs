//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for emissive, diffuse, mirror and dielectric
//! surfaces, with a multi-threaded per-pixel scheduler.

mod config;
mod progress;
mod renderer;
mod scheduler;
mod screen;
mod tracer;

pub use config::{RenderConfig, RenderError, RenderResult};
pub use progress::{NoProgress, ProgressPrinter, ProgressReporter};
pub use renderer::{estimate_radiance, render_pixel, tone_map, GAMMA};
pub use scheduler::{render, RenderPhase, Renderer};
pub use screen::Screen;
pub use tracer::{
    diffuse_ray, distance_attenuation, reflect_direction, reflect_ray, reflectance, refract_ray,
    trace, Refraction, SURFACE_BIAS,
};

/// Re-export scene types from lumen_core
pub use lumen_core::{Camera, Image, Resolution, Scene};
pub use lumen_math::{Color, Ray, Vector3};
