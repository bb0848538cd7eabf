//! # In-Memory Terminal
//!
//! A [`Terminal`] backed by a character buffer and a scripted key queue.
//! Lets the whole game loop run without a real terminal.

use crate::input::KeyCode;
use crate::rendering::{DisplaySize, Terminal};
use crate::{GrottoError, GrottoResult};
use std::collections::VecDeque;

/// Terminal that draws into memory and replays queued keys.
#[derive(Debug, Clone)]
pub struct BufferTerminal {
    size: DisplaySize,
    cells: Vec<Vec<char>>,
    bold_cells: Vec<Vec<bool>>,
    bold: bool,
    keys: VecDeque<KeyCode>,
    frames: usize,
    initialized: bool,
}

impl BufferTerminal {
    /// Creates a blank buffer of the given size with no queued keys.
    pub fn new(size: DisplaySize) -> Self {
        let (w, h) = (size.width as usize, size.height as usize);
        Self {
            size,
            cells: vec![vec![' '; w]; h],
            bold_cells: vec![vec![false; w]; h],
            bold: false,
            keys: VecDeque::new(),
            frames: 0,
            initialized: false,
        }
    }

    /// Creates a buffer that will replay `keys` in order.
    pub fn with_keys<I>(size: DisplaySize, keys: I) -> Self
    where
        I: IntoIterator<Item = KeyCode>,
    {
        let mut terminal = Self::new(size);
        terminal.push_keys(keys);
        terminal
    }

    /// Queues more keys after any already waiting.
    pub fn push_keys<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = KeyCode>,
    {
        self.keys.extend(keys);
    }

    /// Number of times the screen was cleared, i.e. frames started.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Character at `(row, col)`, or `None` outside the buffer.
    pub fn char_at(&self, row: u16, col: u16) -> Option<char> {
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Whether the cell at `(row, col)` was written in bold.
    pub fn is_bold(&self, row: u16, col: u16) -> bool {
        self.bold_cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(false)
    }

    /// One row as text, trailing blanks removed.
    pub fn row_text(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|r| r.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    fn put(&mut self, row: u16, col: u16, ch: char) {
        if row < self.size.height && col < self.size.width {
            self.cells[row as usize][col as usize] = ch;
            self.bold_cells[row as usize][col as usize] = self.bold;
        }
    }
}

impl Terminal for BufferTerminal {
    fn init(&mut self) -> GrottoResult<()> {
        self.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) -> GrottoResult<()> {
        self.initialized = false;
        Ok(())
    }

    fn clear(&mut self) -> GrottoResult<()> {
        for row in self.cells.iter_mut() {
            row.fill(' ');
        }
        for row in self.bold_cells.iter_mut() {
            row.fill(false);
        }
        self.frames += 1;
        Ok(())
    }

    fn write_char(&mut self, row: u16, col: u16, ch: char) -> GrottoResult<()> {
        self.put(row, col, ch);
        Ok(())
    }

    fn write_string(&mut self, row: u16, col: u16, s: &str) -> GrottoResult<()> {
        for (offset, ch) in s.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            self.put(row, col.saturating_add(offset), ch);
        }
        Ok(())
    }

    fn set_bold(&mut self, on: bool) -> GrottoResult<()> {
        self.bold = on;
        Ok(())
    }

    fn read_key(&mut self) -> GrottoResult<KeyCode> {
        self.keys.pop_front().ok_or(GrottoError::InputClosed)
    }
}
