use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use crate::{dims::Dims, gameboard::Grid};

use super::{GenObserver, MazeGenerator, Random};

/// Randomized recursive backtracker.
///
/// Walks from the start cell into a random unvisited neighbour, carving the wall between them,
/// and backs up whenever the current cell has no unvisited neighbour left. The recursion is kept
/// on an explicit stack, so its depth is limited only by memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveBacktracker;

impl MazeGenerator for RecursiveBacktracker {
    fn carve(
        &self,
        grid: &mut Grid,
        start: Dims,
        rng: &mut Random,
        observer: &mut dyn GenObserver,
    ) {
        assert!(grid.is_in_bounds(start), "start {start:?} is outside of the grid");

        let mut stack = Vec::with_capacity(grid.cell_count());
        let mut carved = 0usize;

        grid.mark_visited(start);
        stack.push(start);

        while let Some(&current) = stack.last() {
            let unvisited_neighbors = grid
                .get_neighbors_pos(current)
                .into_iter()
                .filter(|pos| !grid.is_visited(*pos))
                .collect::<SmallVec<[_; 4]>>();

            match unvisited_neighbors.choose(rng) {
                Some(&next) => {
                    grid.remove_wall_between(current, next);
                    grid.mark_visited(next);
                    carved += 1;
                    observer.on_carve(grid, current, next);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                    observer.on_cell_done(grid, current);
                }
            }
        }

        log::debug!(
            "Carved {} passages into {}x{} grid from {:?}",
            carved,
            grid.num_cols(),
            grid.num_rows(),
            start
        );
    }
}
