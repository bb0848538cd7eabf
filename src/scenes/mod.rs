//! # Scene Management System
//!
//! The screens the game moves between. Exactly one is active at a time;
//! switching replaces it wholesale, bindings included.
//!
//! Transitions, all triggered by bound commands:
//!
//! | From | Command    | To          |
//! |------|------------|-------------|
//! | Menu | `NewGame`  | Play        |
//! | Menu | `Quit`     | (quit flag) |
//! | Play | `MainMenu` | Menu        |
//! | Play | `Win`      | End         |
//! | Play | `Lose`     | End         |
//! | End  | `MainMenu` | Menu        |

pub mod end;
pub mod menu;
pub mod play;

pub use end::*;
pub use menu::*;
pub use play::*;

use crate::input::{BindingTable, Command};
use crate::rendering::{DisplaySize, Terminal};
use crate::GrottoResult;

/// Which kind of screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Menu,
    Play,
    End,
}

/// The active screen.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MenuScreen),
    Play(PlayScreen),
    End(EndScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu(_) => ScreenKind::Menu,
            Screen::Play(_) => ScreenKind::Play,
            Screen::End(_) => ScreenKind::End,
        }
    }

    /// The key bindings of this screen.
    pub fn bindings(&self) -> &BindingTable {
        match self {
            Screen::Menu(menu) => menu.bindings(),
            Screen::Play(play) => play.bindings(),
            Screen::End(end) => end.bindings(),
        }
    }

    /// Resolves a key to a command through this screen's bindings.
    pub fn command_for(&self, key: crate::input::KeyCode) -> Command {
        self.bindings().lookup(key)
    }

    /// Applies a command that only touches this screen's own state.
    pub fn apply(&mut self, command: Command) {
        match self {
            Screen::Menu(menu) => menu.apply(command),
            Screen::Play(play) => {
                play.apply(command);
            }
            Screen::End(_) => {}
        }
    }

    /// Repaints the whole screen.
    pub fn render(&self, display: DisplaySize, terminal: &mut dyn Terminal) -> GrottoResult<()> {
        match self {
            Screen::Menu(menu) => menu.render(display, terminal),
            Screen::Play(play) => play.render(display, terminal),
            Screen::End(end) => end.render(display, terminal),
        }
    }
}
