//! # Menu Screen
//!
//! A titled list of items with a wrapping selection cursor.

use crate::input::{key, BindingTable, Command, KEY_ENTER};
use crate::rendering::{DisplaySize, Terminal};
use crate::GrottoResult;

/// Title of the main menu
pub const MAIN_MENU_TITLE: &str = "Grottos of Go";

/// Row of the first menu item
const FIRST_ITEM_ROW: u16 = 2;

/// One selectable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub command: Command,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, command: Command) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

/// Menu screen state.
///
/// The selected index always lies in `0..items.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuScreen {
    title: String,
    items: Vec<MenuItem>,
    selected: usize,
    bindings: BindingTable,
}

impl MenuScreen {
    /// Creates a menu with the first item selected.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>, bindings: BindingTable) -> Self {
        assert!(!items.is_empty(), "a menu needs at least one item");
        Self {
            title: title.into(),
            items,
            selected: 0,
            bindings,
        }
    }

    /// The main menu: "New Game" and "Quit".
    pub fn main_menu() -> Self {
        Self::new(
            MAIN_MENU_TITLE,
            vec![
                MenuItem::new("New Game", Command::NewGame),
                MenuItem::new("Quit", Command::Quit),
            ],
            BindingTable::from_pairs(&[
                (key('n'), Command::NewGame),
                (key('q'), Command::Quit),
                (key('k'), Command::SelectPrev),
                (key('j'), Command::SelectNext),
                (KEY_ENTER, Command::ExecuteItem),
            ]),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Moves the cursor up, wrapping from the first item to the last.
    pub fn prev_item(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
    }

    /// Moves the cursor down, wrapping from the last item to the first.
    pub fn next_item(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Command of the currently selected item.
    pub fn selected_command(&self) -> Command {
        self.items[self.selected].command
    }

    /// Applies a selection command. Other commands are ignored.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectPrev => self.prev_item(),
            Command::SelectNext => self.next_item(),
            _ => {}
        }
    }

    pub fn render(&self, _display: DisplaySize, terminal: &mut dyn Terminal) -> GrottoResult<()> {
        terminal.set_bold(true)?;
        terminal.write_string(0, 0, &self.title)?;
        terminal.set_bold(false)?;

        for (i, item) in self.items.iter().enumerate() {
            let indicator = if i == self.selected { "> " } else { "  " };
            let row = FIRST_ITEM_ROW.saturating_add(i as u16);
            terminal.write_string(row, 0, &format!("{}{}", indicator, item.label))?;
        }
        Ok(())
    }
}
