use std::fmt;

use crate::dims::{Dims, Rect};

use self::CellWall::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    /// Order in which neighbours are enumerated by both the generator and the solver.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Top => 0b0001,
            Right => 0b0010,
            Bottom => 0b0100,
            Left => 0b1000,
        }
    }
}

/// Set of walls of a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const ALL: Walls = Walls(0b1111);
    pub const NONE: Walls = Walls(0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, wall: CellWall) -> bool {
        self.0 & wall.bit() != 0
    }

    pub fn insert(&mut self, wall: CellWall) {
        self.0 |= wall.bit();
    }

    pub fn remove(&mut self, wall: CellWall) {
        self.0 &= !wall.bit();
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .filter(move |wall| self.contains(*wall))
    }
}

impl FromIterator<CellWall> for Walls {
    fn from_iter<I: IntoIterator<Item = CellWall>>(iter: I) -> Self {
        let mut walls = Walls::NONE;
        for wall in iter {
            walls.insert(wall);
        }
        walls
    }
}

impl fmt::Debug for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: Walls,
    visited: bool,
    rect: Rect,
}

impl Cell {
    pub fn new(rect: Rect) -> Cell {
        Cell {
            walls: Walls::ALL,
            visited: false,
            rect,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        self.walls.remove(wall);
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        self.walls.contains(wall)
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Area of the cell on the drawing surface.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// End points of the line the given wall is drawn with.
    pub fn wall_line(&self, wall: CellWall) -> (Dims, Dims) {
        let r = self.rect;
        match wall {
            Top => (r.top_left(), r.top_right()),
            Right => (r.top_right(), r.bottom_right()),
            Bottom => (r.bottom_right(), r.bottom_left()),
            Left => (r.bottom_left(), r.top_left()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_wall_points_back() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Dims::ZERO);
        }
    }

    #[test]
    fn walls_set() {
        let mut walls = Walls::ALL;
        assert_eq!(walls.count(), 4);

        walls.remove(Right);
        walls.remove(Left);
        assert!(walls.contains(Top) && walls.contains(Bottom));
        assert!(!walls.contains(Right) && !walls.contains(Left));
        assert_eq!(walls, [Top, Bottom].into_iter().collect());
        assert_eq!(walls.bits(), 0b0101);

        walls.insert(Left);
        assert_eq!(walls.iter().collect::<Vec<_>>(), vec![Top, Bottom, Left]);
    }

    #[test]
    fn new_cell_is_closed() {
        let cell = Cell::new(Rect::sized_at(Dims(1, 1), Dims(4, 2)));
        assert_eq!(cell.walls(), Walls::ALL);
        assert!(!cell.is_visited());
        assert_eq!(cell.wall_line(Top), (Dims(1, 1), Dims(5, 1)));
        assert_eq!(cell.wall_line(Right), (Dims(5, 1), Dims(5, 3)));
    }
}
