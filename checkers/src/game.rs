use serde::{Deserialize, Serialize};

use crate::board::{Board, MoveOutcome, MoveRejection};
use crate::config::{ConfigError, GameConfig};
use crate::turn::TurnController;
use crate::types::{Cell, Coord, Player};

/// A running game: the board, whose turn it is, and what has been played.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turns: TurnController,
    config: GameConfig,
    history: Vec<MoveOutcome>,
}

/// Result of one move attempt. Rejections are ordinary values, not errors
/// the caller has to unwind from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    Applied(MoveOutcome),
    Rejected(MoveRejection),
}

impl MoveResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

impl From<Result<MoveOutcome, MoveRejection>> for MoveResult {
    fn from(result: Result<MoveOutcome, MoveRejection>) -> Self {
        match result {
            Ok(outcome) => Self::Applied(outcome),
            Err(rejection) => Self::Rejected(rejection),
        }
    }
}

impl GameState {
    /// Start a game on the standard 8x8 board.
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            board: Board::new(&config),
            turns: TurnController::new(),
            config,
            history: Vec::new(),
        }
    }

    /// Start a game with custom dimensions or capture policy.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(&config),
            turns: TurnController::new(),
            config,
            history: Vec::new(),
        })
    }

    /// Resume from an existing position with `active_player` to move.
    ///
    /// The board's own size wins over `config.board_size`.
    pub fn from_board(board: Board, active_player: Player, config: GameConfig) -> Self {
        let config = GameConfig {
            board_size: board.size(),
            ..config
        };
        Self {
            board,
            turns: TurnController::starting_with(active_player),
            config,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[MoveOutcome] {
        &self.history
    }

    pub fn current_player(&self) -> Player {
        self.turns.current_player()
    }

    /// Try to move the active player's piece from `origin` to `destination`.
    pub fn attempt_move(&mut self, origin: Coord, destination: Coord) -> MoveResult {
        let player = self.current_player();
        let result: MoveResult = self
            .board
            .validate_and_apply_move(player, origin, destination, self.config.capture_policy)
            .into();

        match result {
            MoveResult::Applied(outcome) => {
                tracing::debug!(%player, ?outcome, "move applied");
                self.history.push(outcome);
            }
            MoveResult::Rejected(reason) => {
                tracing::debug!(%player, ?origin, ?destination, %reason, "move rejected");
            }
        }

        self.turns.record(&result);
        result
    }

    /// Row-major copy of the board for rendering.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.board.to_rows()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a game on the standard 8x8 board.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Start a game from a custom configuration.
pub fn new_game_with(config: GameConfig) -> Result<GameState, ConfigError> {
    GameState::with_config(config)
}

pub fn attempt_move(state: &mut GameState, origin: Coord, destination: Coord) -> MoveResult {
    state.attempt_move(origin, destination)
}

pub fn snapshot(state: &GameState) -> Vec<Vec<Cell>> {
    state.snapshot()
}

pub fn current_player(state: &GameState) -> Player {
    state.current_player()
}
