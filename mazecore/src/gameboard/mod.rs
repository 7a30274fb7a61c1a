pub mod cell;
pub mod grid;
pub mod lattice;
pub mod maze;

pub use cell::{Cell, CellWall, Walls};
pub use grid::{Grid, GridError};
pub use lattice::Lattice;
pub use maze::Maze;
