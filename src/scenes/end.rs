//! # End Screen
//!
//! Shows the result of a game until the player continues to the menu.

use crate::input::{BindingTable, Command, KEY_ENTER};
use crate::rendering::{DisplaySize, Terminal};
use crate::GrottoResult;

pub const WIN_MESSAGE: &str = "You win!!!";
pub const LOSE_MESSAGE: &str = "You lose!!!";
pub const CONTINUE_HINT: &str = "Press Enter to continue";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndScreen {
    message: String,
    bindings: BindingTable,
}

impl EndScreen {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            bindings: BindingTable::from_pairs(&[(KEY_ENTER, Command::MainMenu)]),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn render(&self, _display: DisplaySize, terminal: &mut dyn Terminal) -> GrottoResult<()> {
        terminal.write_string(0, 0, &self.message)?;
        terminal.write_string(2, 0, CONTINUE_HINT)?;
        Ok(())
    }
}
