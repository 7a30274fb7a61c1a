use std::{fmt, time::Duration};

use mazecore::{
    algorithms::{NoopObserver, Random, RecursiveBacktracker},
    dims::Dims,
    gameboard::{Lattice, Maze},
};
use rand::SeedableRng as _;

use crate::{animate::Animator, draw::draw_grid, settings::Settings, surface::Surface, AppError};

/// Everything a single run needs, settings and command line already merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub screen: Dims,
    pub origin: Dims,
    pub cell_size: Dims,
    pub seed: u64,
    pub delay: Duration,
    pub generation_delay: Duration,
    pub animate_generation: bool,
}

impl RunConfig {
    pub fn from_settings(settings: &Settings, screen: Dims, seed: u64) -> Self {
        let cell_size = settings.get_cell_size();
        if cell_size.0 < 2 || cell_size.1 < 2 {
            log::warn!("Cells of size {:?} draw walls over each other", cell_size);
        }
        if !settings.get_origin().all_non_negative() {
            log::warn!("Origin {:?} puts part of the maze off screen", settings.get_origin());
        }

        RunConfig {
            screen,
            origin: settings.get_origin(),
            cell_size,
            seed,
            delay: settings.get_delay(),
            generation_delay: settings.get_generation_delay(),
            animate_generation: settings.get_animate_generation(),
        }
    }

    /// Same run without any waiting, for surfaces nobody watches.
    pub fn headless(self) -> Self {
        RunConfig {
            delay: Duration::ZERO,
            generation_delay: Duration::ZERO,
            animate_generation: false,
            ..self
        }
    }

    pub fn lattice(&self) -> Lattice {
        Lattice::new(self.origin, self.cell_size)
    }

    /// Returns `(rows, cols)` of the largest grid fitting on the screen with the same margin
    /// on every side.
    pub fn grid_dims(&self) -> Result<(usize, usize), AppError> {
        let Dims(cols, rows) = self.lattice().fit(self.screen);
        if cols <= 0 || rows <= 0 {
            return Err(AppError::TooSmall {
                screen: self.screen,
                origin: self.origin,
                cell_size: self.cell_size,
            });
        }
        Ok((rows as usize, cols as usize))
    }
}

/// Shrinks `screen` to fit into `available`, the surface would clip anything beyond it.
pub fn clamp_screen(screen: Dims, available: Dims) -> Dims {
    let clamped = Dims(screen.0.min(available.0), screen.1.min(available.1));
    if clamped != screen {
        log::warn!(
            "Drawing area {:?} doesn't fit into {:?}, using {:?}",
            screen,
            available,
            clamped
        );
    }
    clamped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub seed: u64,
    pub cols: usize,
    pub rows: usize,
    pub path: Vec<Dims>,
    pub moves: usize,
    pub undos: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {}: {}x{} maze solved, path of {} cells, {} moves, {} undone",
            self.seed,
            self.cols,
            self.rows,
            self.path.len(),
            self.moves,
            self.undos
        )
    }
}

/// Generates a maze filling `surface`, solves it, and waits until the surface is closed.
pub fn run<S: Surface>(surface: &mut S, config: &RunConfig) -> Result<Report, AppError> {
    let (rows, cols) = config.grid_dims()?;
    let mut maze = Maze::new(config.origin, config.cell_size, rows, cols)?;
    log::info!("Generating {}x{} maze, seed {}", cols, rows, config.seed);

    draw_grid(surface, maze.grid());
    surface.redraw()?;

    let mut rng = Random::seed_from_u64(config.seed);
    let mut animator = Animator::new(surface, maze.lattice(), config.generation_delay);
    if config.animate_generation {
        maze.generate(&RecursiveBacktracker, &mut rng, &mut animator);
    } else {
        maze.generate(&RecursiveBacktracker, &mut rng, &mut NoopObserver);
    }

    // shows the opened entrance and exit, and everything carved without animation
    draw_grid(animator.surface(), maze.grid());
    animator.surface().redraw()?;

    animator.set_delay(config.delay);
    let solved = maze.solve(&mut animator);
    let recorder = animator.finish()?;
    assert!(solved, "maze generated from seed {} has no solution", config.seed);

    surface.redraw()?;
    log::info!(
        "Solved in {} moves, {} of them undone",
        recorder.moves(),
        recorder.undos()
    );

    surface.wait_for_close()?;

    Ok(Report {
        seed: config.seed,
        cols,
        rows,
        moves: recorder.moves(),
        undos: recorder.undos(),
        path: recorder.into_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    fn config(screen: Dims, origin: Dims, seed: u64) -> RunConfig {
        RunConfig {
            screen,
            origin,
            cell_size: Dims(4, 2),
            seed,
            delay: Duration::ZERO,
            generation_delay: Duration::ZERO,
            animate_generation: true,
        }
    }

    #[test]
    fn grid_dims() {
        assert_eq!(config(Dims(80, 24), Dims(1, 1), 0).grid_dims().unwrap(), (11, 19));
        assert_eq!(config(Dims(13, 7), Dims::ZERO, 0).grid_dims().unwrap(), (3, 3));

        let err = config(Dims(5, 24), Dims(1, 1), 0).grid_dims().unwrap_err();
        assert!(matches!(err, AppError::TooSmall { screen: Dims(5, 24), .. }));
    }

    #[test]
    fn screen_is_clamped_to_the_surface() {
        let available = Dims(80, 23);
        assert_eq!(clamp_screen(Dims(800, 600), available), Dims(80, 23));
        assert_eq!(clamp_screen(Dims(200, 10), available), Dims(80, 10));
        assert_eq!(clamp_screen(Dims(41, 21), available), Dims(41, 21));

        let config = config(clamp_screen(Dims(200, 23), available), Dims(1, 1), 0);
        let (rows, cols) = config.grid_dims().unwrap();
        let far_corner = config.lattice().cell_rect(Dims(cols as i32 - 1, rows as i32 - 1));
        assert!(far_corner.bottom_right().0 < available.0);
        assert!(far_corner.bottom_right().1 < available.1);
    }

    #[test]
    fn three_by_three_seed_zero() {
        let config = config(Dims(13, 7), Dims::ZERO, 0);
        let mut canvas = Canvas::new(config.screen);
        let report = run(&mut canvas, &config).unwrap();

        assert_eq!(
            report,
            Report {
                seed: 0,
                cols: 3,
                rows: 3,
                path: vec![Dims(0, 0), Dims(0, 1), Dims(0, 2), Dims(1, 2), Dims(2, 2)],
                moves: 4,
                undos: 0,
            }
        );
        assert_eq!(
            report.to_string(),
            "seed 0: 3x3 maze solved, path of 5 cells, 4 moves, 0 undone"
        );
        assert_eq!(
            canvas.to_text(),
            [
                "+   +---+---+",
                "| * |       |",
                "+ * +   +---+",
                "| * |       |",
                "+ * +---+   +",
                "| ********* |",
                "+---+---+   +",
            ]
            .join("\n")
        );
    }

    #[test]
    fn animation_does_not_change_the_result() {
        let animated = config(Dims(80, 24), Dims(1, 1), 42);
        let headless = animated.clone().headless();
        assert!(!headless.animate_generation);

        let mut a = Canvas::new(animated.screen);
        let mut b = Canvas::new(headless.screen);
        assert_eq!(run(&mut a, &animated).unwrap(), run(&mut b, &headless).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn settings_are_carried_over() {
        let settings = Settings {
            cell_size: Some(Dims(2, 1)),
            delay_ms: Some(7),
            ..Settings::default()
        };
        let config = RunConfig::from_settings(&settings, Dims(40, 20), 3);

        assert_eq!(config.cell_size, Dims(2, 1));
        assert_eq!(config.origin, Dims(1, 1));
        assert_eq!(config.delay, Duration::from_millis(7));
        assert_eq!(config.seed, 3);
        assert_eq!(config.grid_dims().unwrap(), (18, 19));
    }
}
