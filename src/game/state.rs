//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a player command.
    PlayerTurn,
    /// The opponent responds. Transient: the opponent plays synchronously
    /// inside the same command that handed it the turn.
    OpponentTurn,
    /// Both hands are exhausted; only [`new_game`](super::Game::new_game)
    /// has any effect.
    GameOver,
}
