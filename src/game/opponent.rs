use crate::card::Card;
use crate::event::Winner;

use super::{Game, GameState};

impl Game {
    /// Opponent response: plays the highest-rank card in the opponent hand
    /// (the first such card on ties) and returns the turn to the player.
    ///
    /// With an empty hand the opponent passes: no card is played and no
    /// score is added, but the turn still returns to the player.
    ///
    /// Returns the card the opponent played, if any.
    pub(super) fn opponent_respond(&mut self) -> Option<Card> {
        let played = self.opponent_hand.play_highest();

        if let Some(card) = played {
            self.opponent_score += u32::from(card.rank);
        }

        self.state = GameState::PlayerTurn;
        played
    }

    /// End-of-game check: once both hands are empty the game is over and
    /// the winner is whichever side holds the strictly higher score.
    pub(super) fn check_game_over(&mut self) -> Option<Winner> {
        if !(self.player_hand.is_empty() && self.opponent_hand.is_empty()) {
            return None;
        }

        let winner = if self.player_score > self.opponent_score {
            Winner::Player
        } else if self.opponent_score > self.player_score {
            Winner::Opponent
        } else {
            Winner::Tie
        };

        self.state = GameState::GameOver;
        Some(winner)
    }
}
