//! # Grottos Main Entry Point
//!
//! Parses arguments, sets up file logging, and runs the game on the real
//! terminal.

use clap::Parser;
use grottos::{CrosstermTerminal, Game, GameConfig, GrottoResult};
use log::{error, info};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Command line arguments for Grottos.
#[derive(Parser, Debug)]
#[command(name = "grottos")]
#[command(about = "A terminal roguelike with cellular-automaton caves")]
#[command(version)]
struct Args {
    /// Random seed for map generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File the diagnostic log is appended to
    #[arg(long, default_value = "grottos.log")]
    log_file: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> GrottoResult<()> {
    let args = Args::parse();

    initialize_logging(&args)?;
    info!("Starting Grottos v{}", grottos::VERSION);

    let mut config = GameConfig::load(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut game = Game::new(CrosstermTerminal::new(), config);
    let result = game.init().and_then(|()| game.run());

    // The terminal is restored whether or not the loop failed.
    if let Err(e) = game.shutdown() {
        error!("Terminal cleanup failed: {}", e);
    }
    if let Err(ref e) = result {
        error!("Game error: {}", e);
    }
    result
}

/// Sends log output to the log file, since the terminal is in raw mode.
///
/// `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(args: &Args) -> GrottoResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)?;

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_micros()
        .init();

    Ok(())
}
