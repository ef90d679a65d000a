//! The step → render → sleep loop

use crate::display::Renderer;
use crate::error::Result;
use crate::game_of_life::Engine;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation token checked once per generation
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag on SIGINT or SIGTERM
    pub fn install_signal_handlers(&self) -> std::io::Result<()> {
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.0))?;
        }
        Ok(())
    }

    /// Ask the running loop to finish after the current generation
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Pause between frames
    pub interval: Duration,
    /// Stop after this many generations; `None` runs until stopped
    pub max_generations: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_generations: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub final_population: usize,
    pub elapsed: Duration,
}

/// Run the simulation until the generation limit or the stop flag is hit
pub fn run<R: Renderer>(
    engine: &mut Engine,
    renderer: &mut R,
    options: &RunOptions,
    stop: &StopFlag,
) -> Result<RunSummary> {
    let start = Instant::now();
    let mut generations = 0u64;
    let (width, height) = engine.dimensions();

    log::info!(
        "Starting {}x{} simulation, interval {:?}, limit {:?}",
        width,
        height,
        options.interval,
        options.max_generations
    );

    loop {
        if stop.is_stopped() {
            log::info!("Stop requested after {} generations", generations);
            break;
        }
        if options.max_generations.is_some_and(|max| generations >= max) {
            break;
        }

        engine.step();
        generations += 1;
        log::debug!(
            "generation {}: {} live cells",
            engine.generation(),
            engine.snapshot().living_count()
        );

        renderer.render(engine.snapshot())?;

        if options.max_generations.is_some_and(|max| generations >= max) {
            break;
        }
        if !options.interval.is_zero() {
            std::thread::sleep(options.interval);
        }
    }

    let summary = RunSummary {
        generations,
        final_population: engine.snapshot().living_count(),
        elapsed: start.elapsed(),
    };
    log::info!(
        "Finished after {} generations with {} live cells",
        summary.generations,
        summary.final_population
    );
    Ok(summary)
}
