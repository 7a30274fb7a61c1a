mod canvas;
mod terminal;

use std::io;

use mazecore::dims::Dims;

pub use canvas::{Canvas, Glyph};
pub use terminal::{term_size, Terminal};

/// Segment between two points of a surface, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line(pub Dims, pub Dims);

impl Line {
    /// Every point of the line, from the first end to the second one.
    pub fn points(self) -> impl Iterator<Item = Dims> {
        let Line(from, to) = self;
        let delta = to - from;
        let steps = delta.0.abs().max(delta.1.abs());

        (0..=steps).map(move |i| match steps {
            0 => from,
            _ => from + delta * i / steps,
        })
    }

    pub fn is_horizontal(self) -> bool {
        self.0 .1 == self.1 .1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    Wall,
    Erase,
    Path,
    Undo,
}

/// Something the maze can be drawn on.
pub trait Surface {
    /// Size of the drawable area, `Dims(width, height)`.
    fn size(&self) -> Dims;

    /// Draws `line`, parts outside of the surface are clipped.
    fn draw_line(&mut self, line: Line, stroke: Stroke);

    /// Makes everything drawn so far visible.
    fn redraw(&mut self) -> io::Result<()>;

    /// Whether the user asked to close the surface.
    fn is_closed(&mut self) -> io::Result<bool> {
        Ok(false)
    }

    /// Blocks until the user asks to close the surface.
    fn wait_for_close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_points() {
        let points = |from, to| Line(from, to).points().collect::<Vec<_>>();

        assert_eq!(points(Dims(1, 1), Dims(1, 1)), vec![Dims(1, 1)]);
        assert_eq!(
            points(Dims(3, 2), Dims(0, 2)),
            vec![Dims(3, 2), Dims(2, 2), Dims(1, 2), Dims(0, 2)]
        );
        assert_eq!(points(Dims(3, 2), Dims(3, 4)), vec![Dims(3, 2), Dims(3, 3), Dims(3, 4)]);
        assert_eq!(points(Dims(0, 0), Dims(2, 2)), vec![Dims(0, 0), Dims(1, 1), Dims(2, 2)]);
    }
}
