// config.rs - Front-end settings
// Read from the YAML file named by TILE_LIFE_CONFIG when set, every field
// falls back to its default

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tile_life_core::UpdatePolicy;

pub const CONFIG_ENV: &str = "TILE_LIFE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas size in pixels.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Edge of one tile in pixels.
    pub cell_size: u32,
    /// Generations per second, and the slider's range.
    pub rate: u32,
    pub min_rate: u32,
    pub max_rate: u32,
    pub update_policy: UpdatePolicy,
    pub colors: Colors,
}

/// RGB fills for the two tile states and the tile border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub alive: [u8; 3],
    pub dead: [u8; 3],
    pub border: [u8; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            cell_size: 10,
            rate: 60,
            min_rate: 1,
            max_rate: 60,
            update_policy: UpdatePolicy::InPlace,
            colors: Colors::default(),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            alive: [40, 44, 52],
            dead: [216, 212, 204],
            border: [236, 232, 224],
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `TILE_LIFE_CONFIG` if set, otherwise defaults.
    ///
    /// A broken file is logged and replaced by defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %Path::new(&path).display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %Path::new(&path).display(), "{e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be > 0".into()));
        }
        if self.canvas_width < self.cell_size || self.canvas_height < self.cell_size {
            return Err(ConfigError::Invalid("canvas must fit at least one cell".into()));
        }
        if self.min_rate == 0 || self.min_rate > self.max_rate {
            return Err(ConfigError::Invalid("need 1 <= min_rate <= max_rate".into()));
        }
        if !(self.min_rate..=self.max_rate).contains(&self.rate) {
            return Err(ConfigError::Invalid("rate outside min_rate..=max_rate".into()));
        }
        Ok(())
    }

    /// Grid size in tiles. A zero cell size yields an empty grid.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let tiles = |pixels: u32| pixels.checked_div(self.cell_size).unwrap_or(0) as usize;
        (tiles(self.canvas_width), tiles(self.canvas_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_dimensions(), (60, 40));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("cell_size: 20\nupdate_policy: double_buffered\n").unwrap();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.update_policy, UpdatePolicy::DoubleBuffered);
        assert_eq!(config.grid_dimensions(), (30, 20));
        assert_eq!(config.colors, Colors::default());
    }

    #[test]
    fn zero_cell_size_has_no_tiles() {
        let config = Config { cell_size: 0, ..Config::default() };
        assert_eq!(config.grid_dimensions(), (0, 0));
    }

    #[test]
    fn rejects_zero_cell_size() {
        assert!(matches!(Config::from_yaml("cell_size: 0"), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_rate_outside_range() {
        let err = Config::from_yaml("rate: 90\nmax_rate: 60").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(Config::from_yaml("cell_size: [1, 2"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(Config::load("/nonexistent/tile_life.yaml"), Err(ConfigError::Io(_))));
    }
}
