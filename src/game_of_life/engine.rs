//! Double-buffered simulation engine

use super::{GameOfLifeRules, Grid};
use crate::error::Result;

/// Which of the two buffers currently holds the visible generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferId {
    A,
    B,
}

/// Owns both generation buffers and advances them one step at a time.
///
/// The buffer at `read` is the current generation. `step` fills the other
/// buffer from it and then flips `read`, so a generation is never computed
/// from cells of the one being written.
#[derive(Debug, Clone)]
pub struct Engine {
    buffers: [Grid; 2],
    read: usize,
    generation: u64,
}

impl Engine {
    /// Take ownership of the initial grid and allocate the second buffer
    pub fn new(initial: Grid) -> Result<Self> {
        let scratch = Grid::try_new(initial.width(), initial.height())?;
        Ok(Self {
            buffers: [initial, scratch],
            read: 0,
            generation: 0,
        })
    }

    /// Advance the simulation by exactly one generation
    pub fn step(&mut self) {
        let [a, b] = &mut self.buffers;
        if self.read == 0 {
            GameOfLifeRules::evolve_into(a, b);
        } else {
            GameOfLifeRules::evolve_into(b, a);
        }

        self.read = 1 - self.read;
        self.generation += 1;
    }

    /// The most recently finalized generation
    #[inline]
    pub fn snapshot(&self) -> &Grid {
        &self.buffers[self.read]
    }

    /// Number of steps taken since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `(width, height)` of both buffers
    pub fn dimensions(&self) -> (usize, usize) {
        let grid = self.snapshot();
        (grid.width(), grid.height())
    }

    /// Buffer currently holding the visible generation
    pub fn reading_from(&self) -> BufferId {
        if self.read == 0 {
            BufferId::A
        } else {
            BufferId::B
        }
    }
}
