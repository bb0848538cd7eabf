//! # Play Screen
//!
//! The map, the player, and the viewport that follows them.

use crate::game::{MoveOutcome, Player};
use crate::generation::GenerationConfig;
use crate::input::{key, BindingTable, Command, KEY_ENTER, KEY_ESCAPE};
use crate::rendering::{DisplaySize, Terminal, Viewport};
use crate::{Direction, GrottoResult, Position, TileGrid};
use log::debug;
use rand::rngs::StdRng;

/// Glyph drawn for the player
pub const PLAYER_GLYPH: char = '@';

/// Key bindings for the play screen.
pub fn play_bindings() -> BindingTable {
    BindingTable::from_pairs(&[
        (key('y'), Command::Move(Direction::Northwest)),
        (key('u'), Command::Move(Direction::Northeast)),
        (key('h'), Command::Move(Direction::West)),
        (key('j'), Command::Move(Direction::South)),
        (key('k'), Command::Move(Direction::North)),
        (key('l'), Command::Move(Direction::East)),
        (key('b'), Command::Move(Direction::Southwest)),
        (key('n'), Command::Move(Direction::Southeast)),
        (key('r'), Command::Randomize),
        (key('s'), Command::Smooth),
        (key('c'), Command::CarveCaves),
        (key('g'), Command::Grasslands),
        (key('t'), Command::Trees),
        (key('q'), Command::MainMenu),
        (KEY_ENTER, Command::Win),
        (KEY_ESCAPE, Command::Lose),
    ])
}

/// Play screen state. Owns its map, player and random source.
#[derive(Debug, Clone)]
pub struct PlayScreen {
    grid: TileGrid,
    player: Player,
    viewport: Viewport,
    bindings: BindingTable,
    rng: StdRng,
    tree_chance: f64,
    rabbit_chance: f64,
}

impl PlayScreen {
    /// Creates a play screen with the player at the map origin.
    pub fn new(grid: TileGrid, viewport: Viewport, config: &GenerationConfig, rng: StdRng) -> Self {
        Self {
            grid,
            player: Player::default(),
            viewport,
            bindings: play_bindings(),
            rng,
            tree_chance: config.tree_chance,
            rabbit_chance: config.rabbit_chance,
        }
    }

    /// Places the player, clamped onto the map.
    pub fn with_player(mut self, position: Position) -> Self {
        let max = Position::new(self.grid.width() - 1, self.grid.height() - 1);
        self.player.position = position.clamp(Position::origin(), max);
        self
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Runs a screen-local command, then clamps the player to the map and
    /// resolves any wall collision.
    pub fn apply(&mut self, command: Command) -> MoveOutcome {
        let previous = self.player.position;

        match command {
            Command::Move(direction) => self.player.step(direction),
            Command::Randomize => self.grid.randomize(&mut self.rng),
            Command::Smooth => self.grid.smooth(),
            Command::CarveCaves => self.grid.carve_caves(&mut self.rng),
            Command::Grasslands => self.grid.grasslands(&mut self.rng),
            Command::Trees => {
                self.grid.trees(&mut self.rng, self.tree_chance);
                self.grid.rabbits(&mut self.rng, self.rabbit_chance);
            }
            _ => {}
        }

        let outcome = self.player.settle(previous, &mut self.grid);
        if outcome != MoveOutcome::Stayed {
            debug!("{:?} -> {:?}", command, outcome);
        }
        outcome
    }

    pub fn render(&self, display: DisplaySize, terminal: &mut dyn Terminal) -> GrottoResult<()> {
        let origin = self
            .viewport
            .origin(self.player.position, self.grid.width(), self.grid.height());

        let mut cells = Vec::with_capacity((self.viewport.width() * self.viewport.height()) as usize);
        self.viewport.for_each_cell(&self.grid, origin, |screen, tile| {
            if let Some(tile) = tile {
                cells.push((screen, tile.glyph()));
            }
        });
        for (screen, glyph) in cells {
            terminal.write_char(screen.y as u16, screen.x as u16, glyph)?;
        }

        let marker = self.viewport.marker(self.player.position, origin);
        terminal.write_char(marker.y as u16, marker.x as u16, PLAYER_GLYPH)?;

        let status_row = (self.viewport.height() + 1) as u16;
        if status_row < display.height {
            let Position { x, y } = self.player.position;
            terminal.write_string(status_row, 0, &format!("[{}, {}]", x, y))?;
        }
        Ok(())
    }
}
