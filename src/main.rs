//! Command line entry point: `toroidal_life -f stateFile`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use toroidal_life::{
    clear_sequence, config::CliOverrides, driver, load_engine, Settings, StopFlag, TerminalRenderer,
};

#[derive(Parser, Debug)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wrapping grid")]
#[command(version)]
struct Cli {
    /// State file, one grid row per line ('x' alive, anything else dead)
    #[arg(short = 'f', value_name = "stateFile")]
    file: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many generations instead of running forever
    #[arg(short, long)]
    generations: Option<u64>,

    /// Milliseconds between generations (overrides config)
    #[arg(short, long, value_name = "MS")]
    interval: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let mut engine = load_engine(&cli.file, &settings)
        .with_context(|| format!("Failed to load state file {}", cli.file.display()))?;

    let stop = StopFlag::new();
    if let Err(e) = stop.install_signal_handlers() {
        log::warn!("Could not install signal handlers: {}", e);
    }

    let mut renderer = TerminalRenderer::new(std::io::stdout(), clear_sequence(&settings), settings.markers());
    let summary = driver::run(&mut engine, &mut renderer, &settings.run_options(), &stop)
        .context("Simulation stopped unexpectedly")?;

    log::info!(
        "Ran {} generations in {:.3}s",
        summary.generations,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    settings.merge_with_cli(&CliOverrides {
        interval_ms: cli.interval,
        max_generations: cli.generations,
    });
    settings.validate().context("Configuration validation failed")?;

    log::debug!("Settings: {:?}", settings);
    Ok(settings)
}
