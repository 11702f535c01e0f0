use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Circle,
    Cross,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Circle => Player::Cross,
            Player::Cross => Player::Circle,
        }
    }

    /// Convert player to cell type
    pub fn cell(self) -> Cell {
        match self {
            Player::Circle => Cell::Circle,
            Player::Cross => Cell::Cross,
        }
    }

    /// Player symbol for display
    pub fn symbol(self) -> &'static str {
        match self {
            Player::Circle => "O",
            Player::Cross => "X",
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Circle => "Circle",
            Player::Cross => "Cross",
        }
    }
}
