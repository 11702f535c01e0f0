use crate::error::GameError;

use super::lines;
use super::{Board, Player, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One match in progress: the board, whose turn it is, and the outcome once
/// the game ends. All turn state lives here; the board and line detector
/// below it are pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    rules: Rules,
    board: Board,
    current_player: Player,
    last_move: Option<(usize, usize)>,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state for a match played under `rules`.
    pub fn new(rules: Rules) -> Self {
        let board = Board::new(rules.rows(), rules.cols())
            .expect("rules carry validated dimensions");
        GameState {
            rules,
            board,
            current_player: Player::Circle, // Circle always starts
            last_move: None,
            outcome: None,
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The (row, col) of the most recent drop, if any.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full); empty once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.available_columns()
    }

    /// Apply a move and return the new state (immutable).
    pub fn apply_move(&self, column: usize) -> Result<GameState, GameError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. On failure the state is unchanged.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let row = self.board.drop_piece(self.current_player.cell(), column)?;
        self.last_move = Some((row, column));

        if lines::check_win(&self.board, column, self.rules.win_length()) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if !self.board.has_empty_cell() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::classic())
    }
}
