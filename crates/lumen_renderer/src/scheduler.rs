//! Multi-threaded render scheduler.
//!
//! The scheduling thread queues every pixel coordinate, a pool of scoped
//! workers pulls coordinates and pushes finished pixels back, and the
//! scheduling thread writes each result into the frame buffer. Workers never
//! touch the image directly; the result channel is the only hand-off.

use std::thread;
use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};
use lumen_core::{Coordinate, Image, Pixel, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    render_pixel, ProgressPrinter, ProgressReporter, RenderConfig, RenderError, RenderResult,
    Screen,
};

/// Lifecycle of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// Nothing queued yet
    #[default]
    Idle,
    /// Workers started, coordinates being queued
    Dispatching,
    /// Work queue closed, collecting results
    Draining,
    /// Every pixel written
    Done,
}

/// Renders a scene into an [`Image`] across a pool of worker threads.
pub struct Renderer<'a> {
    scene: &'a Scene,
    config: RenderConfig,
    phase: RenderPhase,
}

impl<'a> Renderer<'a> {
    /// Create a renderer, rejecting configurations that cannot produce an image.
    pub fn new(scene: &'a Scene, config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;
        Ok(Self {
            scene,
            config,
            phase: RenderPhase::Idle,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Number of worker threads a render will start.
    ///
    /// Never more than there are pixels.
    pub fn worker_count(&self) -> usize {
        let requested = self.config.workers.unwrap_or_else(|| {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
        requested.min(self.config.resolution.pixel_count()).max(1)
    }

    /// Render the full frame.
    ///
    /// Fails with [`RenderError::WorkerLost`] if the workers stop before every
    /// pixel has been delivered; a failed render stays in
    /// [`RenderPhase::Draining`].
    pub fn render(&mut self, progress: &mut dyn ProgressReporter) -> RenderResult<Image> {
        let start = Instant::now();
        let resolution = self.config.resolution;
        let total = resolution.pixel_count();
        let workers = self.worker_count();
        let interval = self.config.progress_interval();

        let scene = self.scene;
        let config = &self.config;
        let screen = Screen::new(&scene.camera, resolution);
        let mut image = Image::from_resolution(resolution);

        log::info!(
            "Rendering {}x{} at {} spp, depth {}, {} workers",
            resolution.width,
            resolution.height,
            config.sampling_count,
            config.trace_recursion_limit,
            workers
        );

        // Both queues hold the whole frame so neither side ever stalls on send
        let (work_tx, work_rx) = bounded::<Coordinate>(total);
        let (result_tx, result_rx) = bounded::<Pixel>(total);

        self.phase = RenderPhase::Dispatching;

        let completed = thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|id| {
                    let work = work_rx.clone();
                    let results = result_tx.clone();
                    let screen = &screen;
                    s.spawn(move || run_worker(id, scene, screen, config, work, results))
                })
                .collect();
            drop(work_rx);
            drop(result_tx);

            'dispatch: for y in 0..resolution.height {
                for x in 0..resolution.width {
                    // Only fails once every worker is gone
                    if work_tx.send(Coordinate { x, y }).is_err() {
                        break 'dispatch;
                    }
                }
            }
            drop(work_tx);

            self.phase = RenderPhase::Draining;
            let completed = drain(&mut image, &result_rx, interval, total, progress);

            for handle in handles {
                if handle.join().is_err() {
                    log::error!("Render worker panicked");
                }
            }
            completed
        });

        if completed < total {
            return Err(RenderError::WorkerLost { completed, total });
        }

        self.phase = RenderPhase::Done;
        log::info!("Render finished in {:.2?}", start.elapsed());
        Ok(image)
    }
}

/// Render `scene` with progress logged at info level.
pub fn render(scene: &Scene, config: RenderConfig) -> RenderResult<Image> {
    Renderer::new(scene, config)?.render(&mut ProgressPrinter)
}

/// Pull coordinates until the work queue closes.
fn run_worker(
    id: usize,
    scene: &Scene,
    screen: &Screen,
    config: &RenderConfig,
    work: Receiver<Coordinate>,
    results: Sender<Pixel>,
) {
    let width = config.resolution.width as usize;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut rendered = 0usize;

    for coordinate in work.iter() {
        if let Some(seed) = config.seed {
            let index = coordinate.y as usize * width + coordinate.x as usize;
            rng = StdRng::seed_from_u64(pixel_seed(seed, index));
        }

        let color = render_pixel(scene, screen, coordinate.x, coordinate.y, config, &mut rng);
        if results.send(Pixel { coordinate, color }).is_err() {
            break;
        }
        rendered += 1;
    }

    log::debug!("Worker {} rendered {} pixels", id, rendered);
}

/// Seed for one pixel's sample stream, independent of which worker draws it.
#[inline]
fn pixel_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Write results into `image` until `total` pixels arrived or every sender is gone.
///
/// Returns the number of pixels written.
fn drain(
    image: &mut Image,
    results: &Receiver<Pixel>,
    interval: usize,
    total: usize,
    progress: &mut dyn ProgressReporter,
) -> usize {
    let mut completed = 0;

    while completed < total {
        let Ok(pixel) = results.recv() else {
            break;
        };

        let index = image.index_of(pixel.coordinate);
        image.pixels[index] = pixel;
        completed += 1;

        if completed % interval == 0 || completed == total {
            progress.report(completed, total);
        }
    }

    completed
}
