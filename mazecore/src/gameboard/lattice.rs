use crate::dims::{Dims, Rect};

/// Regular layout of cells on a drawing surface.
///
/// Cell `(i, j)` covers the rectangle from `origin + (i·w, j·h)` to `origin + (i·w + w, j·h + h)`,
/// so neighbouring cells share their edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    pub origin: Dims,
    pub cell_size: Dims,
}

impl Lattice {
    pub fn new(origin: Dims, cell_size: Dims) -> Self {
        Lattice { origin, cell_size }
    }

    pub fn cell_rect(&self, pos: Dims) -> Rect {
        let Dims(w, h) = self.cell_size;
        Rect::sized_at(self.origin + Dims(pos.0 * w, pos.1 * h), self.cell_size)
    }

    pub fn cell_center(&self, pos: Dims) -> Dims {
        self.cell_rect(pos).center()
    }

    /// Number of `(cols, rows)` fitting into `area`, keeping the same margin as `origin` on the
    /// far side.
    pub fn fit(&self, area: Dims) -> Dims {
        let free = area - self.origin * 2;
        if !free.all_positive() || !self.cell_size.all_positive() {
            return Dims::ZERO;
        }
        free / self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_share_edges() {
        let lattice = Lattice::new(Dims(1, 1), Dims(4, 2));
        let a = lattice.cell_rect(Dims(0, 0));
        let b = lattice.cell_rect(Dims(1, 0));
        let c = lattice.cell_rect(Dims(0, 1));

        assert_eq!(a, Rect::new(Dims(1, 1), Dims(5, 3)));
        assert_eq!(a.top_right(), b.top_left());
        assert_eq!(a.bottom_left(), c.top_left());
        assert_eq!(lattice.cell_center(Dims(1, 1)), Dims(7, 4));
    }

    #[test]
    fn fit() {
        let lattice = Lattice::new(Dims(1, 1), Dims(4, 2));
        assert_eq!(lattice.fit(Dims(80, 24)), Dims(19, 11));
        assert_eq!(lattice.fit(Dims(6, 4)), Dims(1, 1));
        assert_eq!(lattice.fit(Dims(5, 3)), Dims(0, 0));
        assert_eq!(lattice.fit(Dims(2, 2)), Dims::ZERO);

        let framed = Lattice::new(Dims(10, 10), Dims(20, 20));
        assert_eq!(framed.fit(Dims(800, 600)), Dims(39, 29));
    }
}
