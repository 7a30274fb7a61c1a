use smallvec::SmallVec;
use thiserror::Error;

use crate::{array::Array2D, dims::Dims};

use super::{
    cell::{Cell, CellWall},
    Lattice,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid size {0:?}, both columns and rows must be at least 1")]
    InvalidSize(Dims),
}

/// Matrix of `num_cols` × `num_rows` cells, indexed by `Dims(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Allocates a grid of fully walled cells laid out on a regular lattice, see [`Lattice`].
    pub fn new(origin: Dims, cell_size: Dims, rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::on_lattice(Lattice::new(origin, cell_size), rows, cols)
    }

    pub fn on_lattice(lattice: Lattice, rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidSize(Dims(cols as i32, rows as i32)));
        }

        let cells = Array2D::from_fn(cols, rows, |pos| Cell::new(lattice.cell_rect(pos)));

        Ok(Grid { cells })
    }

    /// Size of the grid as `Dims(num_cols, num_rows)`.
    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.width()
    }

    pub fn num_rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Dims, &Cell)> {
        self.cells.iter_pos().zip(self.cells.iter())
    }

    /// Returns the wall of `cell` facing `cell2`, `None` if they are not adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        use CellWall::*;

        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (0, -1) => Some(Top),
            (1, 0) => Some(Right),
            (0, 1) => Some(Bottom),
            (-1, 0) => Some(Left),
            _ => None,
        }
    }

    /// Position of the neighbour behind `wall`, if it's inside the grid.
    pub fn neighbor(&self, cell: Dims, wall: CellWall) -> Option<Dims> {
        let pos = cell + wall.to_coord();
        self.is_in_bounds(pos).then_some(pos)
    }

    /// In-bounds neighbours of the cell, in top, right, bottom, left order.
    pub fn get_neighbors_pos(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.neighbor(cell, wall))
            .collect()
    }

    /// Neighbour reachable from `cell` through `wall`, `None` if the wall is present or the
    /// neighbour doesn't exist.
    pub fn passage(&self, cell: Dims, wall: CellWall) -> Option<Dims> {
        let open = !self.get_cell(cell)?.get_wall(wall);
        open.then(|| self.neighbor(cell, wall)).flatten()
    }

    /// Removes the wall of `cell` and the matching wall of its neighbour.
    ///
    /// # Panics
    ///
    /// Panics if `cell` has no neighbour behind `wall`.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        let neighbor = self.neighbor(cell, wall).unwrap_or_else(|| {
            panic!("cannot remove {wall:?} wall of {cell:?}, there is no cell behind it")
        });

        self.cells[cell].remove_wall(wall);
        self.cells[neighbor].remove_wall(wall.reverse_wall());
    }

    /// Carves a passage between two adjacent cells.
    ///
    /// # Panics
    ///
    /// Panics if the cells are not adjacent.
    pub fn remove_wall_between(&mut self, cell: Dims, cell2: Dims) {
        let wall = Self::which_wall_between(cell, cell2)
            .unwrap_or_else(|| panic!("cells {cell:?} and {cell2:?} are not adjacent"));
        self.remove_wall(cell, wall);
    }

    /// Removes a wall facing outside of the grid. Such wall has no counterpart, so it's the only
    /// wall which may be removed on its own.
    ///
    /// # Panics
    ///
    /// Panics if the wall is not on the border of the grid.
    pub fn open_border(&mut self, cell: Dims, wall: CellWall) {
        assert!(
            self.is_in_bounds(cell) && self.neighbor(cell, wall).is_none(),
            "{wall:?} wall of {cell:?} is not on the border"
        );

        self.cells[cell].remove_wall(wall);
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.cells[pos].is_visited()
    }

    pub fn mark_visited(&mut self, pos: Dims) {
        self.cells[pos].set_visited(true);
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_visited(false);
        }
    }

    /// Number of open passages between distinct cells.
    pub fn passage_count(&self) -> usize {
        self.iter_pos()
            .flat_map(|pos| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(move |wall| self.passage(pos, *wall).is_some())
            })
            .count()
    }

    /// Checks that every pair of adjacent cells agrees on the wall between them.
    pub fn is_consistent(&self) -> bool {
        self.iter_pos().all(|pos| {
            [CellWall::Right, CellWall::Bottom].into_iter().all(|wall| {
                match self.neighbor(pos, wall) {
                    Some(other) => {
                        self.cells[pos].get_wall(wall)
                            == self.cells[other].get_wall(wall.reverse_wall())
                    }
                    None => true,
                }
            })
        })
    }
}
