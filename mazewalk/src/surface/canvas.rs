use std::io;

use mazecore::{array::Array2D, dims::Dims};

use crate::constants::glyphs;

use super::{Line, Stroke, Surface};

/// One character of a [`Canvas`] together with the stroke that put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub character: char,
    pub stroke: Option<Stroke>,
}

impl Glyph {
    pub const EMPTY: Glyph = Glyph {
        character: glyphs::EMPTY,
        stroke: None,
    };

    pub fn new(character: char, stroke: Stroke) -> Self {
        Glyph {
            character,
            stroke: Some(stroke),
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::EMPTY
    }
}

/// In-memory character buffer, one glyph per surface unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Array2D<Glyph>,
}

impl Canvas {
    pub fn new(size: Dims) -> Self {
        let Dims(w, h) = size;
        Canvas {
            glyphs: Array2D::new(Glyph::EMPTY, w.max(0) as usize, h.max(0) as usize),
        }
    }

    pub fn get(&self, pos: Dims) -> Option<Glyph> {
        self.glyphs.get(pos).copied()
    }

    pub fn char_at(&self, pos: Dims) -> Option<char> {
        self.get(pos).map(|g| g.character)
    }

    /// Puts `glyph` at `pos`, does nothing when it's outside of the canvas.
    pub fn put(&mut self, pos: Dims, glyph: Glyph) {
        if let Some(slot) = self.glyphs.get_mut(pos) {
            *slot = glyph;
        }
    }

    pub fn row(&self, y: i32) -> impl Iterator<Item = Glyph> + '_ {
        (0..self.glyphs.width() as i32).filter_map(move |x| self.get(Dims(x, y)))
    }

    pub fn row_eq(&self, other: &Canvas, y: i32) -> bool {
        self.size() == other.size() && self.row(y).eq(other.row(y))
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::EMPTY);
    }

    /// Plain text picture, rows separated by newlines, trailing spaces trimmed.
    pub fn to_text(&self) -> String {
        (0..self.glyphs.height() as i32)
            .map(|y| {
                let row = self.row(y).map(|g| g.character).collect::<String>();
                row.trim_end().to_owned()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for Canvas {
    fn size(&self) -> Dims {
        self.glyphs.size()
    }

    fn draw_line(&mut self, line: Line, stroke: Stroke) {
        let Line(from, to) = line;
        let is_end = |pos: Dims| pos == from || pos == to;

        for pos in line.points() {
            let glyph = match stroke {
                Stroke::Wall if is_end(pos) => Glyph::new(glyphs::POST, stroke),
                Stroke::Wall if line.is_horizontal() => Glyph::new(glyphs::HORIZONTAL_WALL, stroke),
                Stroke::Wall => Glyph::new(glyphs::VERTICAL_WALL, stroke),
                // posts stay, they may belong to other walls
                Stroke::Erase if is_end(pos) => continue,
                Stroke::Erase => Glyph::EMPTY,
                Stroke::Path => Glyph::new(glyphs::PATH, stroke),
                Stroke::Undo => Glyph::new(glyphs::UNDO, stroke),
            };
            self.put(pos, glyph);
        }
    }

    fn redraw(&mut self) -> io::Result<()> {
        Ok(())
    }
}
