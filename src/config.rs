//! # Configuration
//!
//! Compiled-in game constants plus the optional JSON config file.
//!
//! The config file is looked up at `grottos.json` in the working directory
//! unless a path is given explicitly. Every field is optional and falls back
//! to the defaults below; unknown fields are rejected. The top-level `seed`
//! is the only seed: each new map derives its own from it.

use crate::generation::GenerationConfig;
use crate::{GrottoError, GrottoResult};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Display width in character cells
pub const DISPLAY_WIDTH: u16 = 80;

/// Display height in character cells
pub const DISPLAY_HEIGHT: u16 = 24;

/// Default viewport width in tiles
pub const VIEWPORT_WIDTH: i32 = 60;

/// Default viewport height in tiles
pub const VIEWPORT_HEIGHT: i32 = 20;

/// Default map width: twice the display width
pub const MAP_WIDTH: i32 = 2 * DISPLAY_WIDTH as i32;

/// Default map height: twice the display height
pub const MAP_HEIGHT: i32 = 2 * DISPLAY_HEIGHT as i32;

/// A cell becomes wall when at least this many of its 9 cells are wall
pub const WALL_THRESHOLD: u32 = 5;

/// Smoothing generations applied by the cave pipeline
pub const SMOOTHING_PASSES: u32 = 3;

/// Rows below the viewport reserved for the status line
pub const STATUS_ROWS: u16 = 2;

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "grottos.json";

/// Runtime configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Session seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Viewport width in tiles
    pub viewport_width: i32,
    /// Viewport height in tiles
    pub viewport_height: i32,
    /// Map generation settings
    pub generation: GenerationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            generation: GenerationConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist and parse. Without one, `grottos.json` in
    /// the working directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> GrottoResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    info!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses a config file without validating it.
    pub fn from_file(path: &Path) -> GrottoResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks that the viewport fits both the map and the display.
    pub fn validate(&self) -> GrottoResult<()> {
        let generation = &self.generation;

        if self.viewport_width <= 0 || self.viewport_height <= 0 {
            return Err(GrottoError::InvalidConfig(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            )));
        }
        if generation.map_width < self.viewport_width
            || generation.map_height < self.viewport_height
        {
            return Err(GrottoError::InvalidConfig(format!(
                "map {}x{} is smaller than viewport {}x{}",
                generation.map_width,
                generation.map_height,
                self.viewport_width,
                self.viewport_height
            )));
        }
        if self.viewport_width > DISPLAY_WIDTH as i32
            || self.viewport_height + STATUS_ROWS as i32 > DISPLAY_HEIGHT as i32
        {
            return Err(GrottoError::InvalidConfig(format!(
                "viewport {}x{} does not fit the {}x{} display",
                self.viewport_width, self.viewport_height, DISPLAY_WIDTH, DISPLAY_HEIGHT
            )));
        }
        for (name, chance) in [
            ("tree_chance", generation.tree_chance),
            ("rabbit_chance", generation.rabbit_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(GrottoError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, chance
                )));
            }
        }
        if generation.smoothing_passes == 0 {
            warn!("smoothing_passes is 0, caves will be raw noise");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation.map_width, 160);
        assert_eq!(config.generation.map_height, 48);
    }

    #[test]
    fn test_partial_file_uses_defaults() -> GrottoResult<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "seed": 7, "generation": {{ "tree_chance": 0.2 }} }}"#)?;

        let config = GameConfig::load(Some(file.path()))?;
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.viewport_width, VIEWPORT_WIDTH);
        assert_eq!(config.generation.tree_chance, 0.2);
        assert_eq!(config.generation.smoothing_passes, SMOOTHING_PASSES);
        Ok(())
    }

    #[test]
    fn test_generation_seed_is_rejected() -> GrottoResult<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "generation": {{ "seed": 99 }} }}"#)?;

        let result = GameConfig::load(Some(file.path()));
        assert!(matches!(result, Err(GrottoError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_unknown_field_is_rejected() -> GrottoResult<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "viewport_widht": 40 }}"#)?;
        assert!(matches!(
            GameConfig::load(Some(file.path())),
            Err(GrottoError::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_serialized_config_omits_generation_seed() -> GrottoResult<()> {
        let text = serde_json::to_string(&GameConfig::default())?;
        assert!(text.contains("\"seed\":null"));
        assert!(!text.contains("\"seed\":42"));

        let parsed: GameConfig = serde_json::from_str(&text)?;
        assert_eq!(parsed, GameConfig::default());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::load(Some(&dir.path().join("absent.json")));
        assert!(matches!(result, Err(GrottoError::Io(_))));
    }

    #[test]
    fn test_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = GameConfig::load(Some(file.path()));
        assert!(matches!(result, Err(GrottoError::Config(_))));
    }

    #[test]
    fn test_viewport_larger_than_map_rejected() {
        let mut config = GameConfig::default();
        config.generation.map_width = 30;
        assert!(matches!(
            config.validate(),
            Err(GrottoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_viewport_must_fit_display() {
        let mut config = GameConfig::default();
        config.viewport_height = 23;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let mut config = GameConfig::default();
        config.generation.rabbit_chance = 1.5;
        assert!(config.validate().is_err());
    }
}
