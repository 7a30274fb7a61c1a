use crate::{dims::Dims, gameboard::Grid};

/// Hooks called synchronously while a maze is carved.
pub trait GenObserver {
    /// Passage between `from` and `to` was just carved, `to` is entered next.
    fn on_carve(&mut self, _grid: &Grid, _from: Dims, _to: Dims) {}

    /// Every neighbour of `cell` is visited, the generator backs up from it.
    fn on_cell_done(&mut self, _grid: &Grid, _cell: Dims) {}
}

/// Hooks called synchronously while a maze is solved.
///
/// They only observe, the solver state is not reachable from them.
pub trait SolveObserver {
    fn on_enter(&mut self, _cell: Dims) {}

    fn on_move(&mut self, _from: Dims, _to: Dims) {}

    /// Move from `from` to `to` led to a dead end and is taken back.
    fn on_undo(&mut self, _from: Dims, _to: Dims) {}
}

/// Observer which ignores everything, used when running headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenObserver for NoopObserver {}

impl SolveObserver for NoopObserver {}
