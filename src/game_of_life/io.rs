//! Reading and writing state files
//!
//! A state file is plain text with one grid row per line. A cell is alive iff
//! it is the alive marker; every other character is a dead cell.

use super::{Cell, Grid};
use crate::error::{LifeError, Result};
use std::path::Path;

/// Characters used for live and dead cells, in files and on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub alive: char,
    pub dead: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            alive: 'x',
            dead: '.',
        }
    }
}

impl Markers {
    /// Cell for a character read from a state file
    #[inline]
    pub fn cell(&self, ch: char) -> Cell {
        Cell::from(ch == self.alive)
    }

    /// Character drawn for a cell
    #[inline]
    pub fn symbol(&self, cell: Cell) -> char {
        if cell.is_alive() {
            self.alive
        } else {
            self.dead
        }
    }
}

/// Load a grid from a state file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P, markers: &Markers) -> Result<Grid> {
    let path = path.as_ref();
    log::info!("Reading state file {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| LifeError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = parse_grid_from_string(&content, markers)?;
    log::info!(
        "Loaded {}x{} grid with {} live cells",
        grid.width(),
        grid.height(),
        grid.living_count()
    );
    Ok(grid)
}

/// Parse a grid from its text form.
///
/// Width comes from the first row and every following row must match it.
/// One trailing newline is accepted, as are `\r\n` line endings; blank rows
/// and a lone `\r` are not.
pub fn parse_grid_from_string(content: &str, markers: &Markers) -> Result<Grid> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.is_empty() {
        return Err(LifeError::malformed("state file is empty"));
    }

    let width = lines[0].chars().count();
    if width == 0 {
        return Err(LifeError::malformed("first row is empty"));
    }

    let mut grid = Grid::try_new(width, lines.len())?;

    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len == 0 {
            return Err(LifeError::malformed(format!("row {} is blank", row)));
        }
        if line.contains('\r') {
            return Err(LifeError::malformed(format!(
                "row {} contains a carriage return not followed by a newline",
                row
            )));
        }
        if len != width {
            return Err(LifeError::malformed(format!(
                "row {} has length {}, expected {} (all rows must have the same length)",
                row, len, width
            )));
        }

        for (col, ch) in line.chars().enumerate() {
            grid.set(row, col, markers.cell(ch))?;
        }
    }

    Ok(grid)
}

/// Save a grid to a state file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P, markers: &Markers) -> std::io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, grid_to_string(grid, markers))
}

/// Convert a grid to its text form, one newline-terminated line per row
pub fn grid_to_string(grid: &Grid, markers: &Markers) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for row in grid.rows() {
        result.extend(row.iter().map(|&cell| markers.symbol(cell)));
        result.push('\n');
    }

    result
}
