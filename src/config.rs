//! Map options, read from TOML.
//!
//! Every field is optional; missing ones take the defaults below.
//!
//! ```toml
//! width = 600.0
//! height = 400.0
//! padding = 1
//! size = 12.5     # omit to fit hexagons to width x height
//! grid = true
//! ```
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted `padding`, in cells.
pub const MAX_PADDING: i32 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapOptions {
    /// Target drawing width in pixels.
    pub width: f64,
    /// Target drawing height in pixels.
    pub height: f64,
    /// Extra empty cells to leave around the occupied grid.
    pub padding: i32,
    /// Hexagon side length; estimated from width and height when unset.
    pub size: Option<f64>,
    /// Whether to report the background grid tile.
    pub grid: bool,
}

impl Default for MapOptions {
    fn default() -> MapOptions {
        MapOptions {
            width: 300.0,
            height: 150.0,
            padding: 0,
            size: None,
            grid: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid options: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid options: {0}")]
    Invalid(String),
}

impl MapOptions {
    pub fn from_toml_str(s: &str) -> Result<MapOptions, ConfigError> {
        let options: MapOptions = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<MapOptions, ConfigError> {
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        log::debug!("read options from {}", path.display());
        MapOptions::from_toml_str(&text)
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "width and height must be positive, got {}x{}", self.width, self.height
            )));
        }
        if self.padding < 0 || self.padding > MAX_PADDING {
            return Err(ConfigError::Invalid(format!(
                "padding must be within 0..={}, got {}", MAX_PADDING, self.padding
            )));
        }
        match self.size {
            Some(size) if !(size > 0.0) => {
                Err(ConfigError::Invalid(format!("size must be positive, got {}", size)))
            }
            _ => Ok(()),
        }
    }
}
