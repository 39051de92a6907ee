//! Event types produced by game commands.

use core::fmt;

/// The side that won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player's score was strictly higher.
    Player,
    /// The opponent's score was strictly higher.
    Opponent,
    /// Both scores were equal.
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Player => "Player",
            Self::Opponent => "Opponent",
            Self::Tie => "Tie",
        };
        f.write_str(label)
    }
}

/// Notification produced by a game command.
///
/// Commands return the events they produced instead of signalling an
/// observer; the host reacts to the returned list after each call. A
/// command that was a no-op returns no events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Observable game state changed.
    Updated,
    /// Both hands are exhausted; carries the winner of the finished game.
    GameOver(Winner),
}
