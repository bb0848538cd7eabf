//! # Grottos
//!
//! A terminal roguelike prototype: the player explores a procedurally carved
//! cave map through a scrolling viewport, driven by a small menu/play/end
//! screen machine.
//!
//! ## Architecture Overview
//!
//! - **Game State**: the [`Game`] owns the terminal, the active screen and the quit flag
//! - **Generation**: cellular-automaton cave carving and themed fills on a [`TileGrid`]
//! - **Input**: key codes resolve to [`Command`]s through per-screen [`BindingTable`]s
//! - **Scenes**: [`Screen`] variants render themselves and apply screen-local commands
//! - **Rendering**: the [`Terminal`] seam, a crossterm backend and a [`Viewport`] camera

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;

pub use config::GameConfig;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;

/// Core error type for the Grottos game.
#[derive(thiserror::Error, Debug)]
pub enum GrottoError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Grid dimensions must both be positive
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// The key source has no more input
    #[error("Input closed")]
    InputClosed,
}

/// Result type used throughout the Grottos codebase.
pub type GrottoResult<T> = Result<T, GrottoError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
