use crate::{
    dims::Dims,
    gameboard::{CellWall, Grid},
};

use super::SolveObserver;

const DIRECTIONS: [CellWall; 4] = CellWall::get_in_order();

struct Frame {
    cell: Dims,
    next_dir: usize,
}

impl Frame {
    fn new(cell: Dims) -> Self {
        Self { cell, next_dir: 0 }
    }
}

/// Depth-first search from `start` to `end` through open passages.
///
/// Each cell is entered at most once, directions are tried in top, right, bottom, left order. A
/// move that leads only into dead ends is reported back through [`SolveObserver::on_undo`].
///
/// Visited flags must be cleared before calling this, otherwise already visited cells are never
/// entered.
pub fn solve(grid: &mut Grid, start: Dims, end: Dims, observer: &mut dyn SolveObserver) -> bool {
    if !grid.is_in_bounds(start) || !grid.is_in_bounds(end) {
        log::warn!("Cannot solve from {:?} to {:?}, out of the grid", start, end);
        return false;
    }

    grid.mark_visited(start);
    observer.on_enter(start);
    if start == end {
        return true;
    }

    let mut stack = vec![Frame::new(start)];
    let (mut moves, mut undos) = (0usize, 0usize);

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;

        let Some(&dir) = DIRECTIONS.get(frame.next_dir) else {
            stack.pop();
            if let Some(parent) = stack.last() {
                undos += 1;
                observer.on_undo(parent.cell, cell);
            }
            continue;
        };
        frame.next_dir += 1;

        let Some(next) = grid.passage(cell, dir) else {
            continue;
        };
        if grid.is_visited(next) {
            continue;
        }

        moves += 1;
        observer.on_move(cell, next);
        grid.mark_visited(next);
        observer.on_enter(next);

        if next == end {
            log::debug!("Found path to {:?} after {} moves, {} undone", end, moves, undos);
            return true;
        }

        stack.push(Frame::new(next));
    }

    log::debug!("No path from {:?} to {:?} after {} moves", start, end, moves);
    false
}

/// Observer keeping the path currently walked by the solver.
///
/// After a successful search [`PathRecorder::path`] holds the found path, start and end included.
#[derive(Debug, Default, Clone)]
pub struct PathRecorder {
    path: Vec<Dims>,
    moves: usize,
    undos: usize,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[Dims] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Dims> {
        self.path
    }

    /// Number of forward moves, including the ones undone later.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn undos(&self) -> usize {
        self.undos
    }
}

impl SolveObserver for PathRecorder {
    fn on_enter(&mut self, cell: Dims) {
        self.path.push(cell);
    }

    fn on_move(&mut self, _from: Dims, _to: Dims) {
        self.moves += 1;
    }

    fn on_undo(&mut self, _from: Dims, to: Dims) {
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(to));
        self.undos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::generate, gameboard::Maze};

    fn maze(cols: usize, rows: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(Dims::ZERO, Dims(4, 2), rows, cols).unwrap();
        generate(maze.grid_mut(), Dims::ZERO, seed);
        maze.break_entrance_and_exit();
        maze.reset_cells_visited();
        maze
    }

    fn solved(maze: &mut Maze) -> (bool, PathRecorder) {
        let mut recorder = PathRecorder::new();
        let (start, end) = (maze.entrance(), maze.exit());
        let found = solve(maze.grid_mut(), start, end, &mut recorder);
        (found, recorder)
    }

    #[derive(Default)]
    struct Log(Vec<String>);

    impl SolveObserver for Log {
        fn on_enter(&mut self, cell: Dims) {
            self.0.push(format!("enter {},{}", cell.0, cell.1));
        }

        fn on_move(&mut self, from: Dims, to: Dims) {
            self.0.push(format!("move {},{}->{},{}", from.0, from.1, to.0, to.1));
        }

        fn on_undo(&mut self, from: Dims, to: Dims) {
            self.0.push(format!("undo {},{}->{},{}", from.0, from.1, to.0, to.1));
        }
    }

    #[test]
    fn path_is_valid() {
        for (cols, rows) in [(2, 2), (3, 8), (9, 4), (20, 20)] {
            for seed in 0..10 {
                let mut maze = maze(cols, rows, seed);
                let (found, recorder) = solved(&mut maze);
                assert!(found, "{cols}x{rows} seed {seed}");

                let path = recorder.path();
                assert_eq!(path.first(), Some(&maze.entrance()));
                assert_eq!(path.last(), Some(&maze.exit()));
                assert_eq!(recorder.moves() - recorder.undos(), path.len() - 1);

                for step in path.windows(2) {
                    let wall = Grid::which_wall_between(step[0], step[1]).unwrap();
                    assert_eq!(maze.grid().passage(step[0], wall), Some(step[1]));
                }

                let mut unique = path.to_vec();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), path.len());
            }
        }
    }

    #[test]
    fn two_by_two_seed_zero() {
        let mut maze = maze(2, 2, 0);
        let (found, recorder) = solved(&mut maze);

        assert!(found);
        assert_eq!(recorder.path(), &[Dims(0, 0), Dims(0, 1), Dims(1, 1)]);
        assert_eq!(recorder.moves(), 2);
        assert_eq!(recorder.undos(), 0);
    }

    #[test]
    fn single_cell() {
        let mut maze = maze(1, 1, 0);
        let cell = maze.grid().get_cell(Dims::ZERO).unwrap();
        assert!(!cell.get_wall(CellWall::Top));
        assert!(!cell.get_wall(CellWall::Bottom));
        assert!(cell.get_wall(CellWall::Left) && cell.get_wall(CellWall::Right));

        let (found, recorder) = solved(&mut maze);
        assert!(found);
        assert_eq!(recorder.path(), &[Dims::ZERO]);
        assert_eq!(recorder.moves(), 0);
    }

    #[test]
    fn dead_ends_are_undone() {
        // 3x2 grid, passages:
        // (0,0) - (1,0) - (2,0)
        //   |
        // (0,1) - (1,1) - (2,1)
        let mut grid = Grid::new(Dims::ZERO, Dims::ONE, 2, 3).unwrap();
        grid.remove_wall_between(Dims(0, 0), Dims(1, 0));
        grid.remove_wall_between(Dims(1, 0), Dims(2, 0));
        grid.remove_wall_between(Dims(0, 0), Dims(0, 1));
        grid.remove_wall_between(Dims(0, 1), Dims(1, 1));
        grid.remove_wall_between(Dims(1, 1), Dims(2, 1));

        let mut log = Log::default();
        assert!(solve(&mut grid, Dims(0, 0), Dims(2, 1), &mut log));
        assert_eq!(
            log.0,
            vec![
                "enter 0,0",
                "move 0,0->1,0",
                "enter 1,0",
                "move 1,0->2,0",
                "enter 2,0",
                "undo 1,0->2,0",
                "undo 0,0->1,0",
                "move 0,0->0,1",
                "enter 0,1",
                "move 0,1->1,1",
                "enter 1,1",
                "move 1,1->2,1",
                "enter 2,1",
            ]
        );
    }

    #[test]
    fn unreachable_end() {
        let mut grid = Grid::new(Dims::ZERO, Dims::ONE, 1, 3).unwrap();
        grid.remove_wall_between(Dims(0, 0), Dims(1, 0));

        let mut recorder = PathRecorder::new();
        assert!(!solve(&mut grid, Dims(0, 0), Dims(2, 0), &mut recorder));
        assert_eq!(recorder.moves(), 1);
        assert_eq!(recorder.undos(), 1);
        assert_eq!(recorder.path(), &[Dims(0, 0)]);
    }

    #[test]
    fn out_of_bounds_end() {
        let mut grid = Grid::new(Dims::ZERO, Dims::ONE, 2, 2).unwrap();
        assert!(!solve(&mut grid, Dims(0, 0), Dims(5, 5), &mut PathRecorder::new()));
    }
}
