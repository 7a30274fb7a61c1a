use crate::{
    algorithms::{solve, GenObserver, MazeGenerator, Random, SolveObserver},
    dims::Dims,
};

use super::{CellWall, Grid, GridError, Lattice};

/// Grid together with its geometry, entrance and exit.
///
/// Entrance is always the top left cell, opened to the top, exit is the bottom right cell,
/// opened to the bottom.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    lattice: Lattice,
}

impl Maze {
    pub fn new(origin: Dims, cell_size: Dims, rows: usize, cols: usize) -> Result<Self, GridError> {
        let lattice = Lattice::new(origin, cell_size);
        Ok(Maze {
            grid: Grid::on_lattice(lattice, rows, cols)?,
            lattice,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    pub fn origin(&self) -> Dims {
        self.lattice.origin
    }

    pub fn cell_size(&self) -> Dims {
        self.lattice.cell_size
    }

    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    pub fn num_cols(&self) -> usize {
        self.grid.num_cols()
    }

    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    pub fn exit(&self) -> Dims {
        self.grid.size() - Dims::ONE
    }

    /// Opens the top wall of the entrance and the bottom wall of the exit.
    ///
    /// Both walls face outside of the grid, so this never changes the passages inside it.
    pub fn break_entrance_and_exit(&mut self) {
        let (entrance, exit) = (self.entrance(), self.exit());
        self.grid.open_border(entrance, CellWall::Top);
        self.grid.open_border(exit, CellWall::Bottom);
        log::debug!("Opened entrance at {:?} and exit at {:?}", entrance, exit);
    }

    /// Carves the maze from the entrance and opens the entrance and the exit.
    pub fn generate(
        &mut self,
        generator: &dyn MazeGenerator,
        rng: &mut Random,
        observer: &mut dyn GenObserver,
    ) {
        let entrance = self.entrance();
        generator.carve(&mut self.grid, entrance, rng, observer);
        self.break_entrance_and_exit();
    }

    pub fn reset_cells_visited(&mut self) {
        self.grid.reset_visited();
    }

    /// Clears the traversal state left by generation and searches a path from the entrance to
    /// the exit.
    pub fn solve(&mut self, observer: &mut dyn SolveObserver) -> bool {
        self.reset_cells_visited();
        let (entrance, exit) = (self.entrance(), self.exit());
        solve(&mut self.grid, entrance, exit, observer)
    }
}
