pub mod theme;

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use mazecore::dims::Dims;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::paths::settings_path;

pub use theme::{Color, ColorScheme, NamedColor};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read or write settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub screen: Option<Dims>,
    #[serde(default)]
    pub origin: Option<Dims>,
    #[serde(default)]
    pub cell_size: Option<Dims>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub generation_delay_ms: Option<u64>,
    #[serde(default)]
    pub animate_generation: Option<bool>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        settings_path()
    }

    pub fn get_screen(&self) -> Option<Dims> {
        self.screen
    }

    pub fn get_origin(&self) -> Dims {
        self.origin.unwrap_or(Dims(1, 1))
    }

    pub fn get_cell_size(&self) -> Dims {
        self.cell_size.unwrap_or(Dims(4, 2))
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or(50))
    }

    pub fn get_generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms.unwrap_or(5))
    }

    pub fn get_animate_generation(&self) -> bool {
        self.animate_generation.unwrap_or(true)
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.unwrap_or_default()
    }

    pub fn from_ron(settings: &str, path: &Path) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options
            .from_str(settings)
            .map_err(|source| SettingsError::Parse {
                path: path.to_owned(),
                source,
            })
    }

    /// Loads settings from `path`, creating the file with default settings first if it's missing.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings) => Self::from_ron(&settings, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {:?}", path);
                Self::reset_config(path)?;
                Self::from_ron(DEFAULT_SETTINGS, path)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
