//! Checkers rules engine.
//!
//! Owns the board, validates single moves (a diagonal step or one capture)
//! and tracks whose turn it is. Rendering and input belong to the driver.

pub mod board;
pub mod config;
pub mod game;
pub mod turn;
pub mod types;

pub use board::{new_board, Board, MoveOutcome, MoveRejection, PositionError};
pub use config::{CapturePolicy, ConfigError, GameConfig};
pub use game::{
    attempt_move, current_player, new_game, new_game_with, snapshot, GameState, MoveResult,
};
pub use turn::TurnController;
pub use types::{Cell, Coord, Player};
