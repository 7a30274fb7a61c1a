use std::{io, thread, time::Duration};

use mazecore::{
    algorithms::{GenObserver, PathRecorder, SolveObserver},
    dims::Dims,
    gameboard::{Grid, Lattice},
};

use crate::{
    draw::{draw_cell, draw_move},
    surface::{Line, Stroke, Surface},
};

/// Observer drawing every step of generation and solving onto a [`Surface`].
///
/// After each step the surface is redrawn and the animator sleeps for `delay`. Once the surface
/// is closed the rest is only drawn, never shown or waited for. The first io error stops any
/// further redraws and is returned from [`Animator::finish`].
pub struct Animator<'a, S: Surface> {
    surface: &'a mut S,
    lattice: Lattice,
    delay: Duration,
    recorder: PathRecorder,
    fast_forward: bool,
    error: Option<io::Error>,
}

impl<'a, S: Surface> Animator<'a, S> {
    pub fn new(surface: &'a mut S, lattice: Lattice, delay: Duration) -> Self {
        Animator {
            surface,
            lattice,
            delay,
            recorder: PathRecorder::new(),
            fast_forward: false,
            error: None,
        }
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }

    pub fn is_fast_forward(&self) -> bool {
        self.fast_forward
    }

    pub fn finish(self) -> io::Result<PathRecorder> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.recorder),
        }
    }

    fn step(&mut self) {
        if self.fast_forward || self.error.is_some() {
            return;
        }

        let closed = self
            .surface
            .redraw()
            .and_then(|_| self.surface.is_closed());

        match closed {
            Ok(true) => {
                log::info!("Skipping the rest of the animation");
                self.fast_forward = true;
            }
            Ok(false) if !self.delay.is_zero() => thread::sleep(self.delay),
            Ok(false) => {}
            Err(err) => {
                log::error!("Failed to redraw: {}", err);
                self.error = Some(err);
            }
        }
    }

    fn draw_center(&mut self, cell: Dims, stroke: Stroke) {
        let center = self.lattice.cell_center(cell);
        self.surface.draw_line(Line(center, center), stroke);
    }
}

impl<S: Surface> GenObserver for Animator<'_, S> {
    fn on_carve(&mut self, grid: &Grid, from: Dims, to: Dims) {
        for pos in [from, to] {
            if let Some(cell) = grid.get_cell(pos) {
                draw_cell(&mut *self.surface, cell);
            }
        }
        self.step();
    }

    fn on_cell_done(&mut self, grid: &Grid, cell: Dims) {
        if let Some(cell) = grid.get_cell(cell) {
            draw_cell(&mut *self.surface, cell);
        }
        self.step();
    }
}

impl<S: Surface> SolveObserver for Animator<'_, S> {
    fn on_enter(&mut self, cell: Dims) {
        self.recorder.on_enter(cell);
        self.draw_center(cell, Stroke::Path);
    }

    fn on_move(&mut self, from: Dims, to: Dims) {
        self.recorder.on_move(from, to);
        draw_move(&mut *self.surface, self.lattice, from, to, Stroke::Path);
        self.step();
    }

    fn on_undo(&mut self, from: Dims, to: Dims) {
        self.recorder.on_undo(from, to);
        draw_move(&mut *self.surface, self.lattice, from, to, Stroke::Undo);
        // `from` is still on the path
        self.draw_center(from, Stroke::Path);
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    /// Canvas counting redraws, closing itself after `close_after` of them.
    struct Counting {
        canvas: Canvas,
        redraws: usize,
        close_after: Option<usize>,
        fail: bool,
    }

    impl Counting {
        fn new(close_after: Option<usize>) -> Self {
            Counting {
                canvas: Canvas::new(Dims(20, 10)),
                redraws: 0,
                close_after,
                fail: false,
            }
        }
    }

    impl Surface for Counting {
        fn size(&self) -> Dims {
            self.canvas.size()
        }

        fn draw_line(&mut self, line: Line, stroke: Stroke) {
            self.canvas.draw_line(line, stroke);
        }

        fn redraw(&mut self) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
            }
            self.redraws += 1;
            Ok(())
        }

        fn is_closed(&mut self) -> io::Result<bool> {
            Ok(self.close_after.is_some_and(|n| self.redraws >= n))
        }
    }

    fn lattice() -> Lattice {
        Lattice::new(Dims::ZERO, Dims(4, 2))
    }

    #[test]
    fn every_step_is_shown() {
        let mut surface = Counting::new(None);
        let mut animator = Animator::new(&mut surface, lattice(), Duration::ZERO);

        animator.on_enter(Dims(0, 0));
        animator.on_move(Dims(0, 0), Dims(1, 0));
        animator.on_enter(Dims(1, 0));
        animator.on_undo(Dims(0, 0), Dims(1, 0));

        let recorder = animator.finish().unwrap();
        assert_eq!(recorder.path(), &[Dims(0, 0)]);
        assert_eq!((recorder.moves(), recorder.undos()), (1, 1));
        assert_eq!(surface.redraws, 2);
        assert_eq!(surface.canvas.to_text().trim_end(), "\n  *....");
    }

    #[test]
    fn closing_fast_forwards() {
        let mut surface = Counting::new(Some(1));
        let mut animator = Animator::new(&mut surface, lattice(), Duration::from_secs(60));

        animator.on_move(Dims(0, 0), Dims(1, 0));
        assert!(animator.is_fast_forward());
        animator.on_move(Dims(1, 0), Dims(2, 0));

        assert_eq!(animator.finish().unwrap().moves(), 2);
        assert_eq!(surface.redraws, 1);
        assert_eq!(surface.canvas.char_at(Dims(10, 1)), Some('*'));
    }

    #[test]
    fn first_error_is_kept() {
        let mut surface = Counting::new(None);
        surface.fail = true;
        let mut animator = Animator::new(&mut surface, lattice(), Duration::ZERO);

        animator.on_move(Dims(0, 0), Dims(1, 0));
        animator.on_move(Dims(1, 0), Dims(2, 0));

        let err = animator.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn finished_cell_is_redrawn() {
        let mut grid = Grid::new(Dims::ZERO, Dims(4, 2), 1, 1).unwrap();
        grid.open_border(Dims::ZERO, mazecore::gameboard::CellWall::Top);
        let mut surface = Counting::new(None);
        let mut animator = Animator::new(&mut surface, lattice(), Duration::ZERO);

        animator.on_cell_done(&grid, Dims::ZERO);
        animator.on_cell_done(&grid, Dims(3, 3));

        assert_eq!(surface.redraws, 2);
        assert_eq!(surface.canvas.to_text().trim_end(), "+   +\n|   |\n+---+");
    }

    #[test]
    fn carving_redraws_both_cells() {
        let mut grid = Grid::new(Dims::ZERO, Dims(4, 2), 1, 2).unwrap();
        let mut surface = Counting::new(None);
        let mut animator = Animator::new(&mut surface, lattice(), Duration::ZERO);

        grid.remove_wall_between(Dims(0, 0), Dims(1, 0));
        animator.on_carve(&grid, Dims(0, 0), Dims(1, 0));

        assert_eq!(surface.redraws, 1);
        assert_eq!(surface.canvas.to_text().trim_end(), "+---+---+\n|       |\n+---+---+");
    }
}
