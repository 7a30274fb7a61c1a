use mazecore::{
    dims::Dims,
    gameboard::{Cell, CellWall, Grid, Lattice},
};

use crate::surface::{Line, Stroke, Surface};

/// Draws the present walls of `cell` and erases the missing ones.
pub fn draw_cell(surface: &mut impl Surface, cell: &Cell) {
    for wall in CellWall::get_in_order() {
        let (from, to) = cell.wall_line(wall);
        let stroke = if cell.get_wall(wall) {
            Stroke::Wall
        } else {
            Stroke::Erase
        };
        surface.draw_line(Line(from, to), stroke);
    }
}

pub fn draw_grid(surface: &mut impl Surface, grid: &Grid) {
    for (_, cell) in grid.cells() {
        draw_cell(surface, cell);
    }
}

/// Draws a move between the centres of two cells.
pub fn draw_move(surface: &mut impl Surface, lattice: Lattice, from: Dims, to: Dims, stroke: Stroke) {
    surface.draw_line(
        Line(lattice.cell_center(from), lattice.cell_center(to)),
        stroke,
    );
}
