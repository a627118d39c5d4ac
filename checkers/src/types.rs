//! Canonical player and cell types shared by the engine and its drivers.

use serde::{Deserialize, Serialize};

/// A (row, col) pair as supplied by a driver. Not assumed to be on the board.
pub type Coord = (i32, i32);

/// One of the two sides. `First` starts at the top of the board and moves
/// towards higher rows; `Second` starts at the bottom and moves towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

/// State of a single board cell.
///
/// Whether a cell is `Illegal` is fixed when the board is built; only the
/// occupancy of playable cells changes during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Illegal,
    Empty,
    OccupiedBy(Player),
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
        }
    }

    /// Colour label used when announcing turns.
    pub fn colour_name(self) -> &'static str {
        match self {
            Self::First => "green",
            Self::Second => "blue",
        }
    }

    /// Row delta a piece of this side travels per forward step.
    pub(crate) fn forward(self) -> i32 {
        match self {
            Self::First => 1,
            Self::Second => -1,
        }
    }
}

impl Cell {
    pub fn is_playable(self) -> bool {
        !matches!(self, Self::Illegal)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn occupant(self) -> Option<Player> {
        match self {
            Self::OccupiedBy(player) => Some(player),
            _ => None,
        }
    }

    /// Single-character token for plain-text rendering.
    pub fn to_char(self) -> char {
        match self {
            Self::Illegal => '0',
            Self::Empty => '1',
            Self::OccupiedBy(Player::First) => '2',
            Self::OccupiedBy(Player::Second) => '3',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
