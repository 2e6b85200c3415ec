//! Concurrent curve runs painting into one shared surface.
//!
//! Every curve runs on its own named thread and holds its own `Arc` to the
//! surface, so the buffer is freed only after the last writer exits. The
//! launcher never blocks. It keeps the join handles so callers can poll
//! progress or wait for completion. Runs cannot be cancelled.

use std::{
    mem, panic,
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    curve::{self, CurveConfig, CurveCursor},
    error::{Error, Result},
    layout::DEFAULT_STEP_DELAY,
    surface::PixelSurface,
};

/// Pacing and colour options shared by every run of an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationOptions {
    /// Pause after each painted segment.
    pub step_delay: Duration,
    /// Base seed for segment colours. Run `i` uses `seed + i`. `None` seeds
    /// every run from the OS.
    pub seed: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            seed: None,
        }
    }
}

/// A set of curve runs launched together over one surface.
#[derive(Debug)]
pub struct Animation {
    /// The surface all runs paint into.
    surface: Arc<PixelSurface>,
    /// One handle per run, in launch order.
    runs: Vec<JoinHandle<CurveCursor>>,
}

impl Animation {
    /// Start one thread per curve and return immediately.
    ///
    /// If a thread cannot be spawned, the error is returned. Runs that were
    /// already started keep drawing on their own.
    pub fn launch(
        surface: Arc<PixelSurface>,
        curves: &[CurveConfig],
        options: AnimationOptions,
    ) -> Result<Self> {
        let mut runs = Vec::with_capacity(curves.len());
        for (index, config) in curves.iter().copied().enumerate() {
            let target = Arc::clone(&surface);
            let seed = options.seed.map(|s| s.wrapping_add(index as u64));
            let handle = thread::Builder::new()
                .name(format!("hilbert-{index}-order-{}", config.order()))
                .spawn(move || run_curve(&config, &target, seed, options.step_delay))
                .map_err(Error::Spawn)?;
            runs.push(handle);
        }
        info!(
            "launched {} curve runs on a {}x{} surface",
            runs.len(),
            surface.width(),
            surface.height()
        );
        Ok(Self { surface, runs })
    }

    /// The shared surface.
    pub fn surface(&self) -> &Arc<PixelSurface> {
        &self.surface
    }

    /// Number of runs launched.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether no runs were launched.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runs still drawing.
    pub fn running(&self) -> usize {
        self.runs.iter().filter(|h| !h.is_finished()).count()
    }

    /// Whether every run has finished.
    pub fn is_finished(&self) -> bool {
        self.running() == 0
    }

    /// Block until every run finishes and return their final cursors in
    /// launch order.
    ///
    /// A panic inside a run is re-raised on the calling thread.
    pub fn join(mut self) -> Vec<CurveCursor> {
        mem::take(&mut self.runs)
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    }
}

/// Dropping stops tracking the runs without waiting. Unfinished runs keep
/// painting into their own handle on the surface until they complete.
impl Drop for Animation {
    fn drop(&mut self) {
        let running = self.running();
        if running > 0 {
            warn!("dropping animation with {running} curves still drawing");
        }
    }
}

/// Body of one curve thread.
fn run_curve(
    config: &CurveConfig,
    surface: &PixelSurface,
    seed: Option<u64>,
    step_delay: Duration,
) -> CurveCursor {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(
        "order {} curve at {:?}: {} steps",
        config.order(),
        config.origin(),
        config.step_count()
    );
    let end = curve::paint(config, surface, &mut rng, step_delay);
    debug!("order {} curve finished at {:?}", config.order(), end);
    end
}
