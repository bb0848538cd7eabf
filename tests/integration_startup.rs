//! Integration test to ensure the game can start up, play, and shut down
//! through the in-memory terminal.

use grottos::{
    key, BufferTerminal, DisplaySize, Game, GameConfig, GrottoError, GrottoResult, Position,
    Screen, ScreenKind, Terminal, KEY_ENTER,
};

fn seeded_game(keys: &[i32]) -> Game<BufferTerminal> {
    let config = GameConfig {
        seed: Some(12345),
        ..GameConfig::default()
    };
    let terminal = BufferTerminal::with_keys(DisplaySize::default(), keys.iter().copied());
    Game::new(terminal, config)
}

#[test]
fn test_basic_startup() -> GrottoResult<()> {
    let mut game = seeded_game(&[]);
    game.init()?;

    assert!(game.terminal().is_initialized());
    assert_eq!(game.screen_kind(), ScreenKind::Menu);
    assert_eq!(game.display(), DisplaySize::new(80, 24));

    game.render()?;
    assert_eq!(game.terminal().row_text(0), "Grottos of Go");
    assert_eq!(game.terminal().row_text(2), "> New Game");
    assert_eq!(game.terminal().row_text(3), "  Quit");

    game.shutdown()?;
    assert!(!game.terminal().is_initialized());
    Ok(())
}

#[test]
fn test_select_quit_and_exit() -> GrottoResult<()> {
    let mut game = seeded_game(&[key('j'), KEY_ENTER]);
    game.init()?;
    game.run()?;

    assert!(game.is_quit());
    assert_eq!(game.screen_kind(), ScreenKind::Menu);
    // One frame per key read; nothing is drawn after the quit.
    assert_eq!(game.terminal().frames(), 2);
    Ok(())
}

#[test]
fn test_full_session() -> GrottoResult<()> {
    let keys = [
        KEY_ENTER, // New Game
        key('l'),
        key('j'),
        KEY_ENTER, // win
        KEY_ENTER, // back to menu
        key('k'),  // wraps to Quit
        KEY_ENTER,
    ];
    let mut game = seeded_game(&keys);
    game.init()?;
    game.run()?;

    assert!(game.is_quit());
    assert_eq!(game.terminal().frames(), keys.len());
    assert_eq!(game.terminal().pending_keys(), 0);
    Ok(())
}

#[test]
fn test_play_screen_starts_at_origin() -> GrottoResult<()> {
    let mut game = seeded_game(&[key('n')]);
    game.init()?;
    game.render()?;
    let first = game.terminal_mut().read_key()?;
    game.handle_input(first)?;

    match game.screen() {
        Screen::Play(play) => {
            assert_eq!(play.player().position, Position::origin());
            assert_eq!(play.grid().width(), 160);
            assert_eq!(play.grid().height(), 48);
        }
        _ => panic!("expected the play screen"),
    }
    Ok(())
}

#[test]
fn test_input_exhaustion_is_an_error() {
    let mut game = seeded_game(&[key('n'), key('l')]);
    let result = game.init().and_then(|()| game.run());
    assert!(matches!(result, Err(GrottoError::InputClosed)));
    assert_eq!(game.screen_kind(), ScreenKind::Play);
}
