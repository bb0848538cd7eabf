//! # Input Module
//!
//! Key codes, commands, and the per-screen binding tables that connect them.

pub mod bindings;
pub mod commands;

pub use bindings::*;
pub use commands::*;

/// An input code as delivered by the terminal, one per key.
pub type KeyCode = i32;

/// Enter / newline
pub const KEY_ENTER: KeyCode = 10;

/// Escape
pub const KEY_ESCAPE: KeyCode = 27;

/// Key code of a printable character.
///
/// # Examples
///
/// ```
/// use grottos::key;
///
/// assert_eq!(key('j'), 106);
/// ```
pub const fn key(c: char) -> KeyCode {
    c as KeyCode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(key('q'), 113);
        assert_eq!(key('\n'), KEY_ENTER);
        assert_eq!(key('\u{1b}'), KEY_ESCAPE);
    }
}
