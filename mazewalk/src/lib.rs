//! Terminal front end animating the generation and solving of `mazecore` mazes.

pub mod animate;
pub mod app;
pub mod constants;
pub mod draw;
pub mod logging;
pub mod settings;
pub mod surface;

use std::io;

use mazecore::{dims::Dims, gameboard::GridError};
use thiserror::Error;

use settings::SettingsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("Surface {screen:?} is too small for a single cell of size {cell_size:?} at {origin:?}")]
    TooSmall {
        screen: Dims,
        origin: Dims,
        cell_size: Dims,
    },
}
