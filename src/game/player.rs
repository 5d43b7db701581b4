use super::board::Cell;

/// The two sides of the minimax framing. `Max` is always the computer,
/// `Min` the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Max => "Computer",
            Player::Min => "Player",
        }
    }
}
