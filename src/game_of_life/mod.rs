//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{BufferId, Engine};
pub use grid::{Cell, Grid};
pub use io::{grid_to_string, load_grid_from_file, parse_grid_from_string, save_grid_to_file, Markers};
pub use rules::{floor_mod, GameOfLifeRules};
