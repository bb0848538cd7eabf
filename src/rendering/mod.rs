//! # Rendering Module
//!
//! The terminal seam the game draws through, its crossterm and in-memory
//! implementations, and the scrolling camera.

pub mod buffer;
pub mod camera;
pub mod display;

pub use buffer::*;
pub use camera::*;
pub use display::*;

use crate::input::KeyCode;
use crate::GrottoResult;

/// Character-cell terminal the game renders to and reads keys from.
///
/// Rows and columns are zero-based from the top-left corner. Writes outside
/// the terminal are ignored by implementations.
pub trait Terminal {
    /// Enters raw input mode and prepares the screen.
    fn init(&mut self) -> GrottoResult<()>;

    /// Restores the terminal to its original mode.
    fn shutdown(&mut self) -> GrottoResult<()>;

    /// Blanks every cell.
    fn clear(&mut self) -> GrottoResult<()>;

    /// Writes one character at `(row, col)`.
    fn write_char(&mut self, row: u16, col: u16, ch: char) -> GrottoResult<()>;

    /// Writes a string starting at `(row, col)`, left to right.
    fn write_string(&mut self, row: u16, col: u16, s: &str) -> GrottoResult<()>;

    /// Turns the bold attribute on or off for subsequent writes.
    fn set_bold(&mut self, on: bool) -> GrottoResult<()>;

    /// Presents pending output and blocks until one key arrives.
    fn read_key(&mut self) -> GrottoResult<KeyCode>;
}

/// Fixed size of the display, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u16,
    pub height: u16,
}

impl DisplaySize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::new(crate::config::DISPLAY_WIDTH, crate::config::DISPLAY_HEIGHT)
    }
}
