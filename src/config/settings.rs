//! Configuration settings for the simulator

use crate::driver::RunOptions;
use crate::error::{LifeError, Result};
use crate::game_of_life::Markers;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Milliseconds between generations
    pub interval_ms: u64,
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub alive_marker: char,
    pub dead_marker: char,
    /// Replaces the clear sequence derived from `TERM`
    pub clear_sequence: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            max_generations: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let markers = Markers::default();
        Self {
            alive_marker: markers.alive,
            dead_marker: markers.dead,
            clear_sequence: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_error = |reason: String| LifeError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let settings: Settings =
            serde_yaml::from_str(&content).map_err(|e| config_error(e.to_string()))?;

        settings.validate().map_err(|e| config_error(e.to_string()))?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let config_error = |reason: String| LifeError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = serde_yaml::to_string(self).map_err(|e| config_error(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| config_error(e.to_string()))?;
        }

        std::fs::write(path, content).map_err(|e| config_error(e.to_string()))?;
        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;

        if display.alive_marker == display.dead_marker {
            return Err(LifeError::InvalidSettings(format!(
                "alive and dead markers must differ, both are {:?}",
                display.alive_marker
            )));
        }

        for marker in [display.alive_marker, display.dead_marker] {
            if marker == '\n' || marker == '\r' {
                return Err(LifeError::InvalidSettings(format!(
                    "{:?} cannot be used as a cell marker",
                    marker
                )));
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.simulation.interval_ms = interval_ms;
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
    }

    pub fn markers(&self) -> Markers {
        Markers {
            alive: self.display.alive_marker,
            dead: self.display.dead_marker,
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            interval: Duration::from_millis(self.simulation.interval_ms),
            max_generations: self.simulation.max_generations,
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interval_ms: Option<u64>,
    pub max_generations: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_original_behaviour() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.interval_ms, 100);
        assert_eq!(settings.simulation.max_generations, None);
        assert_eq!(settings.markers(), Markers { alive: 'x', dead: '.' });
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("simulation:\n  interval_ms: 250\n").unwrap();
        assert_eq!(settings.simulation.interval_ms, 250);
        assert_eq!(settings.display, DisplayConfig::default());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config").join("life.yaml");

        let mut settings = Settings::default();
        settings.simulation.max_generations = Some(50);
        settings.display.alive_marker = '#';
        settings.display.clear_sequence = Some("\x0c".to_string());
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_markers_rejected() {
        let mut settings = Settings::default();
        settings.display.dead_marker = 'x';
        assert!(matches!(settings.validate(), Err(LifeError::InvalidSettings(_))));

        let mut settings = Settings::default();
        settings.display.alive_marker = '\n';
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_file_reports_config_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        std::fs::write(&path, "simulation:\n  interval_ms: soon\n").unwrap();

        let err = Settings::from_file(&path).unwrap_err();
        assert!(matches!(err, LifeError::Config { .. }));

        let missing = Settings::from_file(&temp_dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(LifeError::Config { .. })));
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            interval_ms: Some(0),
            max_generations: Some(12),
        });

        let options = settings.run_options();
        assert_eq!(options.interval, Duration::ZERO);
        assert_eq!(options.max_generations, Some(12));
    }
}
