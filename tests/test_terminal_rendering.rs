//! Integration test for rendering screens into the in-memory terminal.

use grottos::{
    key, BufferTerminal, Command, DisplaySize, Direction, Game, GameConfig, GenerationConfig,
    GrottoResult, PlayScreen, Position, Screen, TileGrid, Viewport, KEY_ESCAPE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn play_screen(width: i32, height: i32, player: Position) -> GrottoResult<PlayScreen> {
    Ok(PlayScreen::new(
        TileGrid::new(width, height)?,
        Viewport::default(),
        &GenerationConfig::default(),
        StdRng::seed_from_u64(7),
    )
    .with_player(player))
}

fn game_with(screen: PlayScreen) -> Game<BufferTerminal> {
    let mut game = Game::new(BufferTerminal::new(DisplaySize::default()), GameConfig::default());
    game.set_screen(Screen::Play(screen));
    game
}

#[test]
fn test_viewport_centred_on_player() -> GrottoResult<()> {
    let mut game = game_with(play_screen(100, 100, Position::new(50, 50))?);
    game.render()?;

    let terminal = game.terminal();
    assert_eq!(terminal.char_at(10, 30), Some('@'));
    assert_eq!(terminal.row_text(21), "[50, 50]");
    // The viewport is 60 columns; the rest of the row stays blank.
    assert_eq!(terminal.row_text(0), ".".repeat(60));
    Ok(())
}

#[test]
fn test_viewport_pinned_at_far_corner() -> GrottoResult<()> {
    let mut game = game_with(play_screen(100, 100, Position::new(99, 99))?);
    game.render()?;
    assert_eq!(game.terminal().char_at(19, 59), Some('@'));
    assert_eq!(game.terminal().row_text(21), "[99, 99]");
    Ok(())
}

#[test]
fn test_walls_drawn_with_offset() -> GrottoResult<()> {
    let mut grid = TileGrid::new(100, 100)?;
    // Origin will be (20, 40) for a player at (50, 50).
    grid.set_tile(Position::new(21, 41), grottos::Tile::Wall);
    let screen = PlayScreen::new(
        grid,
        Viewport::default(),
        &GenerationConfig::default(),
        StdRng::seed_from_u64(7),
    )
    .with_player(Position::new(50, 50));

    let mut game = game_with(screen);
    game.render()?;
    assert_eq!(game.terminal().char_at(1, 1), Some('#'));
    Ok(())
}

#[test]
fn test_walking_east_to_the_edge() -> GrottoResult<()> {
    let mut game = game_with(play_screen(10, 10, Position::new(5, 5))?);

    game.handle_input(key('l'))?;
    let position = |game: &Game<BufferTerminal>| match game.screen() {
        Screen::Play(play) => play.player().position,
        _ => panic!("expected the play screen"),
    };
    assert_eq!(position(&game), Position::new(6, 5));

    for _ in 0..6 {
        game.handle_input(key('l'))?;
    }
    assert_eq!(position(&game), Position::new(9, 5));
    Ok(())
}

#[test]
fn test_unbound_keys_change_nothing() -> GrottoResult<()> {
    let screen = play_screen(20, 20, Position::new(3, 3))?;
    let before = screen.grid().clone();
    let mut game = game_with(screen);

    for code in [key('z'), key('?'), 0, -5, 4000] {
        game.handle_input(code)?;
    }
    match game.screen() {
        Screen::Play(play) => {
            assert_eq!(play.player().position, Position::new(3, 3));
            assert_eq!(play.grid(), &before);
        }
        _ => panic!("expected the play screen"),
    }
    Ok(())
}

#[test]
fn test_dig_through_then_walk_in() -> GrottoResult<()> {
    let grid = TileGrid::from_rows(&["....", ".##.", "...."])?;
    let screen = PlayScreen::new(
        grid,
        Viewport::new(4, 3)?,
        &GenerationConfig::default(),
        StdRng::seed_from_u64(7),
    )
    .with_player(Position::new(0, 1));
    let mut game = game_with(screen);

    game.dispatch(Command::Move(Direction::East))?;
    game.dispatch(Command::Move(Direction::East))?;
    game.dispatch(Command::Move(Direction::East))?;
    game.dispatch(Command::Move(Direction::East))?;

    match game.screen() {
        Screen::Play(play) => {
            assert_eq!(play.player().position, Position::new(2, 1));
            assert_eq!(play.grid().to_rows(), vec!["....", "....", "...."]);
        }
        _ => panic!("expected the play screen"),
    }
    Ok(())
}

#[test]
fn test_lose_screen_render() -> GrottoResult<()> {
    let mut game = game_with(play_screen(80, 30, Position::origin())?);
    game.handle_input(KEY_ESCAPE)?;
    game.render()?;
    assert_eq!(game.terminal().row_text(0), "You lose!!!");
    Ok(())
}
