//! # Key Bindings
//!
//! A per-screen table from key code to [`Command`]. Lookup is total:
//! unbound keys resolve to [`Command::Noop`].

use crate::input::{Command, KeyCode};
use std::collections::HashMap;

/// Mapping from key codes to commands, one per screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    bindings: HashMap<KeyCode, Command>,
}

impl BindingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(key, command)` pairs. Later pairs win.
    ///
    /// # Examples
    ///
    /// ```
    /// use grottos::{BindingTable, Command, KEY_ENTER};
    ///
    /// let table = BindingTable::from_pairs(&[(KEY_ENTER, Command::Quit)]);
    /// assert_eq!(table.lookup(KEY_ENTER), Command::Quit);
    /// assert_eq!(table.lookup(-1), Command::Noop);
    /// ```
    pub fn from_pairs(pairs: &[(KeyCode, Command)]) -> Self {
        let mut table = Self::new();
        for &(key, command) in pairs {
            table.bind(key, command);
        }
        table
    }

    /// Returns the bound command, or [`Command::Noop`].
    pub fn lookup(&self, key: KeyCode) -> Command {
        self.bindings.get(&key).copied().unwrap_or_default()
    }

    /// Binds `key`, replacing any earlier binding.
    pub fn bind(&mut self, key: KeyCode, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Removes the binding for `key`, if any.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
