//! Game configuration: board dimensions, starting rows and capture policy.

use serde::{Deserialize, Serialize};

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default number of rows each side fills at the start.
pub const DEFAULT_STARTING_ROWS: usize = 3;

/// Smallest board that still leaves room for a diagonal step.
const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board edge.
const MAX_BOARD_SIZE: usize = 64;

/// How the landing square of a capture is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapturePolicy {
    /// The destination must be exactly two squares away along the jumped
    /// diagonal and the landing square must be empty.
    #[default]
    Strict,
    /// Only the direction of the destination matters. The piece always lands
    /// two squares from the origin, overwriting whatever sits there.
    Legacy,
}

impl CapturePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for CapturePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            _ => Err(ConfigError::UnknownCapturePolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for CapturePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters a game is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: usize,
    pub starting_rows: usize,
    pub capture_policy: CapturePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            starting_rows: DEFAULT_STARTING_ROWS,
            capture_policy: CapturePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Check that both sides fit on the board without overlapping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::InvalidBoardSize(self.board_size));
        }
        if self.starting_rows == 0 {
            return Err(ConfigError::ZeroStartingRows);
        }
        if self.starting_rows * 2 > self.board_size {
            return Err(ConfigError::TooManyStartingRows {
                starting_rows: self.starting_rows,
                board_size: self.board_size,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is out of range (expected 2..=64)")]
    InvalidBoardSize(usize),
    #[error("starting rows must be at least 1")]
    ZeroStartingRows,
    #[error("{starting_rows} starting rows per side do not fit on a board of size {board_size}")]
    TooManyStartingRows {
        starting_rows: usize,
        board_size: usize,
    },
    #[error("unknown capture policy: {0:?} (expected \"strict\" or \"legacy\")")]
    UnknownCapturePolicy(String),
}
