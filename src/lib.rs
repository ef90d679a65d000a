//! Conway's Game of Life on a toroidal grid
//!
//! A state file is parsed into a [`Grid`], handed to a double-buffered
//! [`Engine`], and the [`driver`] loop steps the engine and draws every
//! generation through a [`Renderer`].

pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod game_of_life;

pub use config::Settings;
pub use display::{ClearSequence, Renderer, TerminalRenderer};
pub use driver::{run, RunOptions, RunSummary, StopFlag};
pub use error::{LifeError, Result};
pub use game_of_life::{Cell, Engine, Grid, Markers};

use std::path::Path;

/// Load a state file with the configured markers and build an engine for it
pub fn load_engine<P: AsRef<Path>>(state_file: P, settings: &Settings) -> Result<Engine> {
    let grid = game_of_life::load_grid_from_file(state_file, &settings.markers())?;
    Engine::new(grid)
}

/// Clear sequence from the settings, or the one for the current terminal
pub fn clear_sequence(settings: &Settings) -> ClearSequence {
    match &settings.display.clear_sequence {
        Some(sequence) => ClearSequence::custom(sequence.clone()),
        None => ClearSequence::detect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_engine() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.txt");
        std::fs::write(&path, "....\n.xx.\n.xx.\n....\n").unwrap();

        let mut engine = load_engine(&path, &Settings::default()).unwrap();
        assert_eq!(engine.dimensions(), (4, 4));
        engine.step();
        assert_eq!(engine.snapshot().living_count(), 4);
    }

    #[test]
    fn test_load_engine_rejects_jagged_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.txt");
        std::fs::write(&path, "x..\n.x\n").unwrap();

        let result = load_engine(&path, &Settings::default());
        assert!(matches!(result, Err(LifeError::MalformedGrid { .. })));
    }

    #[test]
    fn test_configured_clear_sequence_wins() {
        let mut settings = Settings::default();
        settings.display.clear_sequence = Some("\x0c".to_string());
        assert_eq!(clear_sequence(&settings).as_str(), "\x0c");
    }
}
