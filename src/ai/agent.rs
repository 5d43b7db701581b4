use crate::game::GameState;

/// Common interface for anything that can pick a column to play.
pub trait Agent {
    /// Select a column given the current game state. Implementations may
    /// assume at least one legal move exists.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
