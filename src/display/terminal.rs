//! Plain-text renderer over any `Write` sink

use super::{ClearSequence, Renderer};
use crate::error::Result;
use crate::game_of_life::{Grid, Markers};
use std::io::Write;

/// Writes each frame as the clear sequence followed by one line per row
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear: ClearSequence,
    markers: Markers,
    line: String,
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer writing to `out`
    pub fn new(out: W, clear: ClearSequence, markers: Markers) -> Self {
        Self {
            out,
            clear,
            markers,
            line: String::new(),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid) -> Result<()> {
        let markers = self.markers;
        self.out.write_all(self.clear.as_str().as_bytes())?;

        for row in grid.rows() {
            self.line.clear();
            self.line.extend(row.iter().map(|&cell| markers.symbol(cell)));
            self.line.push('\n');
            self.out.write_all(self.line.as_bytes())?;
        }

        self.out.flush()?;
        Ok(())
    }
}
