//! Render settings and renderer errors.

use lumen_core::Resolution;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("render worker lost after {completed} of {total} pixels")]
    WorkerLost { completed: usize, total: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image size
    pub resolution: Resolution,
    /// Samples per pixel
    pub sampling_count: u32,
    /// Maximum ray bounce depth
    pub trace_recursion_limit: u32,
    /// Divide each contribution by 1 + 0.01·distance²
    pub distance_attenuation_enabled: bool,
    /// Worker thread count, defaults to the available parallelism
    pub workers: Option<usize>,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
    /// Pixels between progress reports, defaults to five rows
    pub progress_interval: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            sampling_count: 1000,
            trace_recursion_limit: 10,
            distance_attenuation_enabled: true,
            workers: None,
            seed: None,
            progress_interval: None,
        }
    }
}

impl RenderConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Resolution::new(width, height);
        self
    }

    pub fn with_sampling_count(mut self, samples: u32) -> Self {
        self.sampling_count = samples;
        self
    }

    pub fn with_trace_recursion_limit(mut self, depth: u32) -> Self {
        self.trace_recursion_limit = depth;
        self
    }

    pub fn with_distance_attenuation(mut self, enabled: bool) -> Self {
        self.distance_attenuation_enabled = enabled;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_progress_interval(mut self, pixels: usize) -> Self {
        self.progress_interval = Some(pixels);
        self
    }

    /// Pixels between progress reports.
    pub fn progress_interval(&self) -> usize {
        self.progress_interval
            .unwrap_or(5 * self.resolution.width as usize)
            .max(1)
    }

    /// Check that the configuration can produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.resolution.width, self.resolution.height
            )));
        }
        if self.sampling_count == 0 {
            return Err(RenderError::InvalidConfig(
                "sampling count must be at least 1".to_string(),
            ));
        }
        if self.workers == Some(0) {
            return Err(RenderError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.resolution, Resolution::new(640, 640));
        assert_eq!(config.sampling_count, 1000);
        assert_eq!(config.trace_recursion_limit, 10);
        assert!(config.distance_attenuation_enabled);
        assert_eq!(config.progress_interval(), 3200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = RenderConfig::default()
            .with_resolution(32, 16)
            .with_sampling_count(4)
            .with_trace_recursion_limit(3)
            .with_distance_attenuation(false)
            .with_workers(2)
            .with_seed(99)
            .with_progress_interval(7);

        assert_eq!(config.resolution, Resolution::new(32, 16));
        assert_eq!(config.sampling_count, 4);
        assert_eq!(config.trace_recursion_limit, 3);
        assert!(!config.distance_attenuation_enabled);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.progress_interval(), 7);
    }

    #[test]
    fn test_validate_rejects_empty_work() {
        assert!(matches!(
            RenderConfig::default().with_resolution(0, 10).validate(),
            Err(RenderError::InvalidConfig(_))
        ));
        assert!(RenderConfig::default().with_sampling_count(0).validate().is_err());
        assert!(RenderConfig::default().with_workers(0).validate().is_err());
        // Depth zero is legal, it just renders black
        assert!(RenderConfig::default().with_trace_recursion_limit(0).validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "sampling_count": 16, "seed": 5 }"#).unwrap();
        assert_eq!(config.sampling_count, 16);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.trace_recursion_limit, 10);
        assert_eq!(config.resolution, Resolution::new(640, 640));
    }
}
