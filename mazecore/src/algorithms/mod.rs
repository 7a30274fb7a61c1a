mod backtracker;
mod observer;
mod solver;

use std::fmt;

use rand::SeedableRng as _;

use crate::{dims::Dims, gameboard::Grid};

pub use backtracker::RecursiveBacktracker;
pub use observer::{GenObserver, NoopObserver, SolveObserver};
pub use solver::{solve, PathRecorder};

/// Random number generator used for anything, where determinism is required.
///
/// Always created through [`SeedableRng::seed_from_u64`](rand::SeedableRng::seed_from_u64), so
/// the same seed yields the same maze on every platform.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Algorithm carving passages into a fully walled grid.
pub trait MazeGenerator: fmt::Debug {
    /// Carves a perfect maze covering every cell reachable from `start`.
    ///
    /// Leaves the visited flag of each carved cell set.
    fn carve(
        &self,
        grid: &mut Grid,
        start: Dims,
        rng: &mut Random,
        observer: &mut dyn GenObserver,
    );
}

/// Carves `grid` from `start` with the recursive backtracker, seeded by `seed`.
pub fn generate(grid: &mut Grid, start: Dims, seed: u64) {
    let mut rng = Random::seed_from_u64(seed);
    RecursiveBacktracker.carve(grid, start, &mut rng, &mut NoopObserver);
}
