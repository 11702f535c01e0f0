use crate::game::GameState;

/// Interface for computer opponents. An agent picks a column for the
/// current player of the given state, or `None` when the board is full.
pub trait Agent {
    /// Select a column to drop into.
    fn select_column(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
