//! Startup configuration
//!
//! Room dimensions, pan speed and window size are read from a RON file
//! (`roomplan.ron` by default, `ROOMPLAN_CONFIG` overrides the path).
//! Every field has a default, so a partial file or no file at all is fine.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "roomplan.ron";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_ENV_VAR: &str = "ROOMPLAN_CONFIG";

/// Validation limits
pub mod limits {
    /// Largest supported lattice edge; keeps per-frame tile meshes within u16 indices
    pub const MAX_TILE_COUNT: u32 = 128;
    /// Largest room edge in world units
    pub const MAX_ROOM_SIZE: f32 = 1000.0;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Edge length of the square room
    pub room_size: f32,
    /// Tiles per room edge
    pub tile_count: u32,
    pub wall_height: f32,
    /// World units per pan keypress
    pub pan_speed: f32,
    pub window_width: i32,
    pub window_height: i32,
    /// Fixed seed for color randomization; the clock is used when absent
    pub color_seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            room_size: 20.0,
            tile_count: 15,
            wall_height: 3.0,
            pan_speed: crate::camera::DEFAULT_PAN_SPEED,
            window_width: 1024,
            window_height: 768,
            color_seed: None,
        }
    }
}

impl RoomConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: RoomConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields `Ok(None)`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path.as_ref()) {
            Ok(contents) => contents,
            // WASM has no filesystem and reports Unsupported
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::Unsupported) => {
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_ron_str(&contents).map(Some)
    }

    /// Resolve the config path and load it, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        match Self::load(&path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "loaded room config");
                config
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), "no room config found, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "invalid room config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.room_size.is_finite() || self.room_size <= 0.0 || self.room_size > limits::MAX_ROOM_SIZE {
            return Err(ConfigError::Validation(format!(
                "room_size must be in (0, {}], got {}",
                limits::MAX_ROOM_SIZE,
                self.room_size
            )));
        }
        if self.tile_count == 0 || self.tile_count > limits::MAX_TILE_COUNT {
            return Err(ConfigError::Validation(format!(
                "tile_count must be in 1..={}, got {}",
                limits::MAX_TILE_COUNT,
                self.tile_count
            )));
        }
        if !self.wall_height.is_finite() || self.wall_height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "wall_height must be positive, got {}",
                self.wall_height
            )));
        }
        if !self.pan_speed.is_finite() || self.pan_speed <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "pan_speed must be positive, got {}",
                self.pan_speed
            )));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}
