//! Error types for the toroidal Game of Life simulator

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong before the simulation is running.
///
/// Command line usage errors never reach this type: clap prints the usage
/// text and exits with a non-zero status on its own. Once an
/// [`Engine`](crate::game_of_life::Engine) has been built from a valid grid,
/// stepping cannot fail; only rendering can.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cannot open state file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },

    #[error("failed to allocate a grid buffer of {cells} cells")]
    AllocationFailure { cells: usize },

    #[error("invalid configuration {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to render frame: {0}")]
    Render(#[from] std::io::Error),
}

impl LifeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LifeError::MalformedGrid {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
