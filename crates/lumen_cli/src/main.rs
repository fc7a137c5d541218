use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{load_scene, save_image};
use lumen_renderer::{ProgressPrinter, RenderConfig, Renderer};

mod scene;

/// Monte Carlo path tracer.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// JSON scene file. Renders the built-in demo scene when omitted.
    #[clap(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// JSON render configuration. Flags below override its fields.
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[clap(long, value_name = "PIXELS")]
    width: Option<u32>,

    #[clap(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Samples per pixel.
    #[clap(long, value_name = "NUM")]
    samples: Option<u32>,

    /// Maximum bounce depth.
    #[clap(long, value_name = "NUM")]
    depth: Option<u32>,

    /// Enable or disable distance attenuation.
    #[clap(long, value_name = "BOOL")]
    attenuation: Option<bool>,

    /// Seed for a reproducible image.
    #[clap(long, value_name = "NUM")]
    seed: Option<u64>,

    /// Worker threads. Defaults to the available parallelism.
    #[clap(long, short = 't', value_name = "NUM")]
    workers: Option<usize>,

    /// Output path; `.ppm` writes ASCII PPM, other extensions go through the image encoder.
    #[clap(long, short = 'o', value_name = "FILE", default_value = "image.ppm")]
    output: PathBuf,
}

impl Args {
    /// Base configuration from `--config` (or defaults) with flag overrides applied.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.resolution.width = width;
        }
        if let Some(height) = self.height {
            config.resolution.height = height;
        }
        if let Some(samples) = self.samples {
            config.sampling_count = samples;
        }
        if let Some(depth) = self.depth {
            config.trace_recursion_limit = depth;
        }
        if let Some(enabled) = self.attenuation {
            config.distance_attenuation_enabled = enabled;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config = args.render_config()?;

    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the demo scene");
            scene::demo_scene().context("Failed to build demo scene")?
        }
    };
    log::info!("Scene has {} shapes", scene.shape_count());

    let start = Instant::now();
    let mut renderer = Renderer::new(&scene, config)?;
    let image = renderer.render(&mut ProgressPrinter)?;
    log::info!("Elapsed time: {:.2?}", start.elapsed());

    save_image(&args.output, &image)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
