//! # Game State Module
//!
//! The top-level game: terminal, active screen, quit flag, and the loop that
//! ties them together.
//!
//! Each loop iteration clears the display, renders the active screen, blocks
//! for one key, and dispatches the command that key is bound to. Commands
//! that switch screens or end the session are interpreted here; everything
//! else is handed to the active screen.

use crate::config::GameConfig;
use crate::generation::{utils, CaveGenerator, GenerationConfig, Generator};
use crate::input::{Command, KeyCode};
use crate::rendering::{DisplaySize, Terminal, Viewport};
use crate::scenes::{EndScreen, MenuScreen, PlayScreen, Screen, ScreenKind, LOSE_MESSAGE, WIN_MESSAGE};
use crate::GrottoResult;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Process-wide game state.
pub struct Game<T: Terminal> {
    terminal: T,
    display: DisplaySize,
    screen: Screen,
    quit: bool,
    config: GameConfig,
    rng: StdRng,
}

impl<T: Terminal> Game<T> {
    /// Creates a game showing the main menu. The terminal is untouched
    /// until [`Game::init`].
    pub fn new(terminal: T, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            terminal,
            display: DisplaySize::default(),
            screen: Screen::Menu(MenuScreen::main_menu()),
            quit: false,
            config,
            rng,
        }
    }

    /// Puts the terminal into raw mode and shows the main menu.
    pub fn init(&mut self) -> GrottoResult<()> {
        info!("Initializing");
        self.terminal.init()?;
        self.main_menu();
        Ok(())
    }

    /// Restores the terminal.
    pub fn shutdown(&mut self) -> GrottoResult<()> {
        info!("Shutting down");
        self.terminal.shutdown()
    }

    /// Runs render/input/dispatch iterations until the quit flag is set.
    pub fn run(&mut self) -> GrottoResult<()> {
        while !self.quit {
            self.terminal.clear()?;
            self.render()?;
            let key = self.terminal.read_key()?;
            self.handle_input(key)?;
        }
        info!("Game loop ended");
        Ok(())
    }

    /// Draws the active screen.
    pub fn render(&mut self) -> GrottoResult<()> {
        self.screen.render(self.display, &mut self.terminal)
    }

    /// Resolves `key` through the active screen's bindings and runs the
    /// resulting command. Unbound keys do nothing.
    pub fn handle_input(&mut self, key: KeyCode) -> GrottoResult<()> {
        let command = self.screen.command_for(key);
        self.dispatch(command)
    }

    /// Runs a command against the game.
    pub fn dispatch(&mut self, command: Command) -> GrottoResult<()> {
        if command.is_transition() {
            return self.transition(command);
        }
        match command {
            Command::Noop => {}
            Command::ExecuteItem => {
                if let Screen::Menu(menu) = &self.screen {
                    let selected = menu.selected_command();
                    // Menu items never hold ExecuteItem themselves.
                    if selected != Command::ExecuteItem {
                        self.dispatch(selected)?;
                    }
                }
            }
            other => self.screen.apply(other),
        }
        Ok(())
    }

    /// Switches screens or ends the session.
    fn transition(&mut self, command: Command) -> GrottoResult<()> {
        debug!("{:?} from {:?}", command, self.screen.kind());
        match command {
            Command::Quit => self.exit_game(),
            Command::NewGame => self.play_game()?,
            Command::MainMenu => self.main_menu(),
            Command::Win => self.end_game(WIN_MESSAGE),
            Command::Lose => self.end_game(LOSE_MESSAGE),
            other => self.screen.apply(other),
        }
        Ok(())
    }

    /// Sets the quit flag; the loop stops after the current iteration.
    pub fn exit_game(&mut self) {
        info!("Quit requested");
        self.quit = true;
    }

    /// Replaces the active screen with the main menu.
    pub fn main_menu(&mut self) {
        debug!("Switching to main menu");
        self.screen = Screen::Menu(MenuScreen::main_menu());
    }

    /// Carves a fresh map and replaces the active screen with play.
    pub fn play_game(&mut self) -> GrottoResult<()> {
        let config = GenerationConfig {
            seed: self.rng.gen(),
            ..self.config.generation.clone()
        };
        info!("Starting new game with seed {}", config.seed);

        let mut rng = utils::create_rng(&config);
        let grid = CaveGenerator::new().generate(&config, &mut rng)?;
        let viewport = Viewport::new(self.config.viewport_width, self.config.viewport_height)?;

        self.screen = Screen::Play(PlayScreen::new(grid, viewport, &config, rng));
        Ok(())
    }

    /// Replaces the active screen with an end screen showing `message`.
    pub fn end_game(&mut self, message: &str) {
        info!("Game over: {}", message);
        self.screen = Screen::End(EndScreen::new(message));
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Replaces the active screen directly.
    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn display(&self) -> DisplaySize {
        self.display
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }
}
