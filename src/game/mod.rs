//! Core Connect-N game logic: board with gravity placement, line detection,
//! match rules, and the game state machine.

mod board;
pub mod lines;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell, MIN_COLS, MIN_ROWS};
pub use player::Player;
pub use rules::{Rules, MIN_WIN_LENGTH};
pub use state::{GameOutcome, GameState};
