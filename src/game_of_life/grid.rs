//! Grid representation and utilities for Game of Life

use super::rules::floor_mod;
use crate::error::{LifeError, Result};
use itertools::iproduct;
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    Dead,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A fixed-size toroidal grid stored as one row-major buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Both dimensions must be at least 1. The buffer is reserved up front so
    /// an oversized grid is reported instead of aborting the process.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::malformed(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                width, height
            )));
        }

        let len = width
            .checked_mul(height)
            .ok_or(LifeError::AllocationFailure { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::AllocationFailure { cells: len })?;
        cells.resize(len, Cell::Dead);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid from rows of cells, rejecting jagged or empty input
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut grid = Self::try_new(width, height)?;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::malformed(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            let start = grid.index(i, 0);
            grid.cells[start..start + width].copy_from_slice(row);
        }

        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::malformed(format!(
                "coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.width, self.height
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Get a cell with both coordinates wrapped around the torus
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> Cell {
        let r = floor_mod(row, self.height);
        let c = floor_mod(col, self.width);
        self.cells[self.index(r, c)]
    }

    /// Positions of the 8 cells surrounding `(row, col)`, wrapping at the edges.
    ///
    /// On grids narrower or shorter than 3 some positions repeat; each one
    /// still counts as a separate neighbor.
    pub fn neighbor_positions(&self, row: usize, col: usize) -> [(usize, usize); 8] {
        let mut positions = [(0, 0); 8];
        let offsets = iproduct!(-1isize..=1, -1isize..=1).filter(|&(dr, dc)| dr != 0 || dc != 0);

        for (slot, (dr, dc)) in positions.iter_mut().zip(offsets) {
            *slot = (
                floor_mod(row as isize + dr, self.height),
                floor_mod(col as isize + dc, self.width),
            );
        }

        positions
    }

    /// Count living neighbors of a cell on the torus
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbor_positions(row, col)
            .iter()
            .filter(|&&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// True when both grids have the same width and height
    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = if cell.is_alive() { 'x' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|c| Cell::from(c == 'x')).collect())
            .collect();
        Grid::from_rows(cells).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::try_new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Grid::try_new(0, 3),
            Err(LifeError::MalformedGrid { .. })
        ));
        assert!(matches!(
            Grid::try_new(3, 0),
            Err(LifeError::MalformedGrid { .. })
        ));
        assert!(Grid::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_huge_grid_reports_allocation_failure() {
        let result = Grid::try_new(usize::MAX, 2);
        assert!(matches!(result, Err(LifeError::AllocationFailure { .. })));
    }

    #[test]
    fn test_jagged_rows_rejected() {
        let rows = vec![vec![Cell::Dead; 3], vec![Cell::Alive; 2]];
        let err = Grid::from_rows(rows).unwrap_err();
        assert!(err.to_string().contains("row 1 has length 2, expected 3"));
    }

    #[test]
    fn test_get_and_set() {
        let mut grid = Grid::try_new(3, 2).unwrap();
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(1, 2), Some(Cell::Alive));
        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(grid.set(2, 0, Cell::Alive).is_err());
        assert_eq!(grid.living_count(), 1);
    }

    #[test]
    fn test_get_wrapped() {
        let grid = pattern(&["x..", "...", "..x"]);
        assert_eq!(grid.get_wrapped(-1, -1), Cell::Alive);
        assert_eq!(grid.get_wrapped(3, 3), Cell::Alive);
        assert_eq!(grid.get_wrapped(-3, 0), Cell::Alive);
        assert_eq!(grid.get_wrapped(-1, 0), Cell::Dead);
    }

    #[test]
    fn test_corner_neighbors_wrap() {
        let grid = Grid::try_new(5, 4).unwrap();
        let mut positions = grid.neighbor_positions(0, 0).to_vec();
        positions.sort();

        let mut expected = vec![
            (3, 4),
            (3, 0),
            (3, 1),
            (0, 4),
            (0, 1),
            (1, 4),
            (1, 0),
            (1, 1),
        ];
        expected.sort();

        assert_eq!(positions, expected);
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = pattern(&["xxx", "x.x", "xxx"]);
        assert_eq!(grid.count_neighbors(1, 1), 8);
        // On a 3x3 torus every other cell touches all of them
        assert_eq!(grid.count_neighbors(0, 0), 7);
    }

    #[test]
    fn test_neighbors_across_edges() {
        let grid = pattern(&["....x", ".....", ".....", "x...x"]);
        // (0,0) sees (3,4), (3,0) and (0,4) through the edges
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(2, 2), 0);
    }

    #[test]
    fn test_neighbors_repeat_on_small_grids() {
        let single = pattern(&["x"]);
        assert_eq!(single.neighbor_positions(0, 0), [(0, 0); 8]);
        assert_eq!(single.count_neighbors(0, 0), 8);

        let row = pattern(&[".x."]);
        assert_eq!(row.count_neighbors(0, 1), 2);
        assert_eq!(row.count_neighbors(0, 0), 3);
    }

    #[test]
    fn test_display_uses_markers() {
        let grid = pattern(&[".x", "x."]);
        assert_eq!(grid.to_string(), ".x\nx.\n");
    }
}
