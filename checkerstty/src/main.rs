//! checkerstty - terminal driver for the checkers engine.
//!
//! Two modes:
//!
//! 1. **`play` (default)**: interactive hot-seat game. Each turn clears the
//!    screen, renders the board, and asks the active player for an origin and
//!    a destination. Rejected moves are reported and the same player goes
//!    again. Type `q` at any prompt to leave.
//! 2. **`board`**: print the opening position and exit, either rendered or as
//!    JSON (`--json`) for other tools.
//!
//! Game parameters come from the command line, then from the environment
//! (see [`config`]), then from built-in defaults. Logs go to a daily rolling
//! file so the interactive screen stays clean.

use std::io::{IsTerminal, Write};
use std::path::Path;

use checkers::{CapturePolicy, ConfigError, GameConfig, GameState};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod play;
mod prompt;
mod render;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "checkerstty", about = "Two-player checkers in the terminal")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,

    /// Optional subcommand. When omitted, starts an interactive game.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Board options shared by every subcommand.
#[derive(Args, Debug)]
struct GameArgs {
    /// Board edge length [env: CHECKERSTTY_BOARD_SIZE, default: 8]
    #[arg(long, global = true)]
    board_size: Option<usize>,

    /// Rows of pieces per side [env: CHECKERSTTY_STARTING_ROWS, default: 3]
    #[arg(long, global = true)]
    starting_rows: Option<usize>,

    /// `strict` requires the exact landing square for captures; `legacy`
    /// only looks at the direction [env: CHECKERSTTY_CAPTURE_POLICY]
    #[arg(long, global = true, value_parser = parse_policy)]
    capture_policy: Option<CapturePolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a hot-seat game.
    Play {
        /// Do not clear the screen between turns.
        #[arg(long)]
        no_clear: bool,
    },
    /// Print the opening position and exit.
    Board {
        /// Emit the cells as JSON instead of a rendered grid.
        #[arg(long)]
        json: bool,
    },
}

/// Error type for driver operations.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The requested board parameters are inconsistent.
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The board could not be encoded as JSON.
    #[error("failed to encode board: {0}")]
    Json(#[from] serde_json::Error),

    /// The log directory could not be prepared.
    #[error("failed to create log directory {path}: {source}")]
    LogDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn parse_policy(value: &str) -> Result<CapturePolicy, ConfigError> {
    value.parse()
}

/// Merge command-line flags over the environment-backed defaults.
fn resolve_config(args: &GameArgs) -> GameConfig {
    GameConfig {
        board_size: args.board_size.unwrap_or_else(config::get_board_size),
        starting_rows: args.starting_rows.unwrap_or_else(config::get_starting_rows),
        capture_policy: args
            .capture_policy
            .unwrap_or_else(config::get_capture_policy),
    }
}

/// Make sure `log_dir` exists so the file appender can write into it.
fn ensure_log_dir(log_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(log_dir).map_err(|source| CliError::LogDir {
        path: log_dir.display().to_string(),
        source,
    })
}

/// Install the tracing subscriber. The returned guard flushes on drop.
fn init_logging(log_dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard, CliError> {
    ensure_log_dir(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "checkerstty");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(guard)
}

fn print_board(game: &GameState, json: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &game.snapshot())?;
        writeln!(out)?;
    } else {
        render::render_board(&mut out, &game.snapshot(), stdout.is_terminal())?;
    }
    Ok(())
}

fn play_game(game: &mut GameState, no_clear: bool) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    let options = play::SessionOptions {
        clear_screen: is_tty && !no_clear,
        colour: is_tty,
    };

    let applied = play::run_session(game, &mut stdin.lock(), &mut stdout.lock(), options)?;
    println!("Goodbye! {applied} moves played.");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_logging(&config::get_log_dir())?;

    let game_config = resolve_config(&cli.game);
    tracing::info!(
        board_size = game_config.board_size,
        starting_rows = game_config.starting_rows,
        capture_policy = %game_config.capture_policy,
        "checkerstty starting"
    );
    let mut game = GameState::with_config(game_config).map_err(CliError::from)?;

    match cli.command {
        Some(Commands::Board { json }) => print_board(&game, json)?,
        Some(Commands::Play { no_clear }) => play_game(&mut game, no_clear)?,
        None => play_game(&mut game, false)?,
    }

    tracing::info!("checkerstty exiting");
    Ok(())
}
