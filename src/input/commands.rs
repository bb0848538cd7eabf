//! # Command Definitions
//!
//! Commands are what key bindings resolve to. Screens apply the commands
//! that only touch their own state; the rest switch screens or end the
//! session and are handled by [`crate::Game`].

use crate::Direction;

/// A zero-argument action a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    /// Does nothing; what unbound keys resolve to
    #[default]
    Noop,
    /// Set the quit flag
    Quit,
    /// Start a fresh game on a newly carved map
    NewGame,
    /// Return to the main menu
    MainMenu,
    /// End the game with the winning message
    Win,
    /// End the game with the losing message
    Lose,
    /// Select the previous menu item
    SelectPrev,
    /// Select the next menu item
    SelectNext,
    /// Run the selected menu item
    ExecuteItem,
    /// Move the player one step
    Move(Direction),
    /// Refill the map with wall/floor noise
    Randomize,
    /// Run one smoothing generation
    Smooth,
    /// Random fill plus the standard smoothing passes
    CarveCaves,
    /// Cover the map with grass
    Grasslands,
    /// Scatter trees, then rabbits
    Trees,
}

impl Command {
    /// Whether running this command replaces the active screen or ends the
    /// session, as opposed to touching only the active screen's state.
    pub fn is_transition(self) -> bool {
        matches!(
            self,
            Command::Quit | Command::NewGame | Command::MainMenu | Command::Win | Command::Lose
        )
    }
}
