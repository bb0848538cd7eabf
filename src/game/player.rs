//! # Player
//!
//! Player position, movement, and wall collision.
//!
//! Movement happens in two steps. A movement command applies a unit delta
//! with [`Player::step`]; afterwards [`Player::settle`] clamps the result to
//! the map and resolves collisions. Bumping into rock digs it out: the wall
//! becomes floor while the player stays where they were, so the next move in
//! that direction succeeds.

use crate::{Direction, Position, Tile, TileGrid};
use log::debug;

/// The player-controlled avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    /// Current map position
    pub position: Position,
}

/// What a settled move ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The position did not change, e.g. pushing against the map edge
    Stayed,
    /// The player now stands on the new position
    Moved(Position),
    /// The destination wall was dug out and the player stayed put
    Dug(Position),
}

impl Player {
    /// Creates a player at the given position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Applies one unit of movement without any bounds or collision checks.
    pub fn step(&mut self, direction: Direction) {
        self.position = self.position + direction.to_delta();
    }

    /// Clamps the player onto the map and resolves a wall collision against
    /// the position held before the move.
    ///
    /// # Examples
    ///
    /// ```
    /// use grottos::{Direction, MoveOutcome, Player, Position, TileGrid};
    ///
    /// let mut grid = TileGrid::new(3, 3).unwrap();
    /// let mut player = Player::new(Position::new(2, 1));
    /// let previous = player.position;
    ///
    /// player.step(Direction::East);
    /// assert_eq!(player.settle(previous, &mut grid), MoveOutcome::Stayed);
    /// assert_eq!(player.position, Position::new(2, 1));
    /// ```
    pub fn settle(&mut self, previous: Position, grid: &mut TileGrid) -> MoveOutcome {
        let max = Position::new(grid.width() - 1, grid.height() - 1);
        let previous = previous.clamp(Position::origin(), max);
        self.position = self.position.clamp(Position::origin(), max);

        if self.position == previous {
            return MoveOutcome::Stayed;
        }

        if grid.get_tile(self.position).is_some_and(Tile::is_wall) {
            let dug = self.position;
            grid.set_tile(dug, Tile::Floor);
            self.position = previous;
            debug!("Dug out wall at {:?}", dug);
            return MoveOutcome::Dug(dug);
        }

        MoveOutcome::Moved(self.position)
    }
}
