use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazecore::{
    algorithms::{MazeGenerator as _, NoopObserver, Random, RecursiveBacktracker},
    dims::Dims,
    gameboard::Maze,
};
use rand::SeedableRng as _;

const ROWS: usize = 200;
const COLS: usize = 200;

pub fn generate(c: &mut Criterion) {
    c.bench_function("backtracker_200x200", |b| {
        b.iter(|| {
            let mut maze = Maze::new(Dims::ZERO, Dims::ONE, ROWS, COLS).unwrap();
            let mut rng = Random::seed_from_u64(black_box(42));
            RecursiveBacktracker.carve(maze.grid_mut(), Dims::ZERO, &mut rng, &mut NoopObserver);
            maze
        })
    });
}

pub fn generate_and_solve(c: &mut Criterion) {
    c.bench_function("backtracker_and_solve_200x200", |b| {
        b.iter(|| {
            let mut maze = Maze::new(Dims::ZERO, Dims::ONE, ROWS, COLS).unwrap();
            let mut rng = Random::seed_from_u64(black_box(42));
            maze.generate(&RecursiveBacktracker, &mut rng, &mut NoopObserver);
            assert!(maze.solve(&mut NoopObserver));
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = generate, generate_and_solve}
criterion_main!(benches);
