//! Game of Life rules (B3/S23) on a toroidal grid

use super::{Cell, Grid};

/// Mathematical modulo: always in `0..m`, also for negative `a`.
///
/// `%` truncates toward zero, so `-1 % 5 == -1`; wrapping a coordinate of
/// `-1` must give `m - 1` instead.
#[inline]
pub fn floor_mod(a: isize, m: usize) -> usize {
    let m = m as isize;
    (((a % m) + m) % m) as usize
}

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Fate of a cell given its current state and live neighbor count
    #[inline]
    pub fn should_be_alive(cell: Cell, neighbor_count: u8) -> Cell {
        match (cell, neighbor_count) {
            (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Write the generation following `read` into `write`.
    ///
    /// Every neighbor count is taken from `read`; `write` is only ever
    /// written, so no cell observes a partially updated generation.
    pub fn evolve_into(read: &Grid, write: &mut Grid) {
        debug_assert!(
            read.same_dimensions(write),
            "evolve_into needs equally sized buffers"
        );

        let width = read.width();
        for (i, slot) in write.cells_mut().iter_mut().enumerate() {
            let (row, col) = (i / width, i % width);
            // Both coordinates are in bounds by construction
            let cell = read.get(row, col).unwrap_or(Cell::Dead);
            *slot = Self::should_be_alive(cell, read.count_neighbors(row, col));
        }
    }

    /// Evolve the grid one generation forward into a fresh grid
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::evolve_into(current, &mut next);
        next
    }
}
