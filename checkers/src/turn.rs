use crate::game::MoveResult;
use crate::types::Player;

/// Tracks whose turn it is. `First` always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    active_player: Player,
}

impl TurnController {
    pub fn new() -> Self {
        Self::starting_with(Player::First)
    }

    pub fn starting_with(player: Player) -> Self {
        Self {
            active_player: player,
        }
    }

    pub fn current_player(&self) -> Player {
        self.active_player
    }

    /// Hand the turn over after an applied move; a rejection changes nothing.
    pub fn record(&mut self, result: &MoveResult) {
        if result.is_applied() {
            self.active_player = self.active_player.opponent();
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
