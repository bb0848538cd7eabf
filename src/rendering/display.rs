//! # Display Management
//!
//! Crossterm-backed terminal: raw mode, alternate screen, batched output.
//!
//! Output is queued and only flushed when the game blocks for a key, so
//! each frame reaches the terminal in one write.

use crate::input::{key, KeyCode, KEY_ENTER, KEY_ESCAPE};
use crate::rendering::Terminal;
use crate::GrottoResult;
use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use std::io::{self, BufWriter, Stdout, Write};

/// Terminal implementation writing to stdout through crossterm.
pub struct CrosstermTerminal {
    out: BufWriter<Stdout>,
    active: bool,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermTerminal {
    /// Creates a terminal handle. Nothing changes until [`Terminal::init`].
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
            active: false,
        }
    }

    /// Maps a crossterm key to the game's key code.
    ///
    /// Arrow keys decode to the vi movement keys. Keys with no code return
    /// `None` and are skipped.
    pub fn decode_key(code: event::KeyCode) -> Option<KeyCode> {
        match code {
            event::KeyCode::Char(c) => Some(key(c)),
            event::KeyCode::Enter => Some(KEY_ENTER),
            event::KeyCode::Esc => Some(KEY_ESCAPE),
            event::KeyCode::Up => Some(key('k')),
            event::KeyCode::Down => Some(key('j')),
            event::KeyCode::Left => Some(key('h')),
            event::KeyCode::Right => Some(key('l')),
            _ => None,
        }
    }

    /// Decodes a key event. Only presses without Control decode.
    pub fn decode_event(key_event: KeyEvent) -> Option<KeyCode> {
        if key_event.kind != KeyEventKind::Press
            || key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return None;
        }
        Self::decode_key(key_event.code)
    }
}

impl Terminal for CrosstermTerminal {
    fn init(&mut self) -> GrottoResult<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        info!("Terminal initialized");
        Ok(())
    }

    fn shutdown(&mut self) -> GrottoResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        info!("Terminal restored");
        Ok(())
    }

    fn clear(&mut self) -> GrottoResult<()> {
        queue!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    fn write_char(&mut self, row: u16, col: u16, ch: char) -> GrottoResult<()> {
        queue!(self.out, MoveTo(col, row), Print(ch))?;
        Ok(())
    }

    fn write_string(&mut self, row: u16, col: u16, s: &str) -> GrottoResult<()> {
        queue!(self.out, MoveTo(col, row), Print(s))?;
        Ok(())
    }

    fn set_bold(&mut self, on: bool) -> GrottoResult<()> {
        let attribute = if on {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        };
        queue!(self.out, SetAttribute(attribute))?;
        Ok(())
    }

    fn read_key(&mut self) -> GrottoResult<KeyCode> {
        self.out.flush()?;
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(decoded) = Self::decode_event(key_event) {
                    debug!("Key {:?} -> {}", key_event.code, decoded);
                    return Ok(decoded);
                }
            }
        }
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        // No-op when shutdown already ran.
        let _ = self.shutdown();
    }
}
