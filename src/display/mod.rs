//! Rendering generations to a terminal

pub mod terminal;

pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::game_of_life::Grid;

/// ANSI "cursor home" followed by "erase display"
pub const ANSI_CLEAR: &str = "\x1b[H\x1b[2J";

/// Sink that clears the screen and draws one generation
pub trait Renderer {
    fn render(&mut self, grid: &Grid) -> Result<()>;
}

/// Control sequence written before every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearSequence(String);

impl ClearSequence {
    /// Resolve the sequence for the terminal named by `TERM`
    pub fn detect() -> Self {
        Self::for_term(std::env::var("TERM").ok().as_deref())
    }

    /// Terminals that cannot clear (unset `TERM`, `dumb`) get an empty sequence
    pub fn for_term(term: Option<&str>) -> Self {
        match term {
            None | Some("") | Some("dumb") => {
                log::warn!("terminal cannot clear the screen, frames will be appended");
                Self::none()
            }
            Some(name) => {
                log::debug!("using ANSI clear sequence for TERM={}", name);
                Self(ANSI_CLEAR.to_string())
            }
        }
    }

    /// Use `sequence` verbatim
    pub fn custom(sequence: impl Into<String>) -> Self {
        Self(sequence.into())
    }

    /// Write nothing between frames
    pub fn none() -> Self {
        Self(String::new())
    }

    /// The raw control sequence
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
