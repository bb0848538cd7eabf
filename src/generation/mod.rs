//! # Generation Module
//!
//! Procedural map generation: cellular-automaton cave carving and themed
//! fills.
//!
//! All passes draw from an injected random number generator so a fixed seed
//! reproduces a map exactly.

pub mod cave;
pub mod themes;

pub use cave::*;
pub use themes::*;

use crate::config::{MAP_HEIGHT, MAP_WIDTH, SMOOTHING_PASSES};
use crate::GrottoResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation. Derived per map from the
    /// session seed, so it is not part of the config file.
    #[serde(skip)]
    pub seed: u64,
    /// Map width in tiles
    pub map_width: i32,
    /// Map height in tiles
    pub map_height: i32,
    /// Number of smoothing generations after the random fill
    pub smoothing_passes: u32,
    /// Chance for an open cell to sprout a tree (0.0 to 1.0)
    pub tree_chance: f64,
    /// Chance for an open cell to hold a rabbit (0.0 to 1.0)
    pub rabbit_chance: f64,
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use grottos::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.smoothing_passes, 3);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            smoothing_passes: SMOOTHING_PASSES,
            tree_chance: 0.05,
            rabbit_chance: 0.01,
        }
    }

    /// Creates a configuration for testing with a small map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            map_width: 20,
            map_height: 10,
            ..Self::new(seed)
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> GrottoResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> GrottoResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
