//! # Camera
//!
//! Maps the map onto a fixed-size viewport that follows the player.
//!
//! The viewport centres on the player until it would cross a map edge, where
//! it pins to that edge and the player marker slides off-centre instead.
//! The map is assumed to be at least as large as the viewport on both axes;
//! on a smaller map the origin pins to zero.

use crate::{GrottoError, GrottoResult, Position, TileGrid};

/// Viewport dimensions in tiles. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    /// Creates a viewport, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> GrottoResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GrottoError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Top-left map position shown in the viewport.
    ///
    /// # Examples
    ///
    /// ```
    /// use grottos::{Position, Viewport};
    ///
    /// let viewport = Viewport::new(60, 20)?;
    /// assert_eq!(viewport.origin(Position::new(50, 50), 100, 100), Position::new(20, 40));
    /// assert_eq!(viewport.origin(Position::new(99, 99), 100, 100), Position::new(40, 80));
    /// # Ok::<(), grottos::GrottoError>(())
    /// ```
    pub fn origin(&self, player: Position, map_width: i32, map_height: i32) -> Position {
        let max_x = (map_width - self.width).max(0);
        let max_y = (map_height - self.height).max(0);
        Position::new(
            (player.x - self.width / 2).clamp(0, max_x),
            (player.y - self.height / 2).clamp(0, max_y),
        )
    }

    /// Screen cell of the player marker, kept inside the viewport.
    pub fn marker(&self, player: Position, origin: Position) -> Position {
        (player - origin).clamp(
            Position::origin(),
            Position::new(self.width - 1, self.height - 1),
        )
    }

    /// Visits every viewport cell with its screen position and the tile
    /// under it, or `None` when the map does not reach that cell.
    pub fn for_each_cell<F>(&self, grid: &TileGrid, origin: Position, mut visit: F)
    where
        F: FnMut(Position, Option<crate::Tile>),
    {
        for vy in 0..self.height {
            for vx in 0..self.width {
                let screen = Position::new(vx, vy);
                visit(screen, grid.get_tile(origin + screen));
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::config::VIEWPORT_WIDTH,
            height: crate::config::VIEWPORT_HEIGHT,
        }
    }
}
