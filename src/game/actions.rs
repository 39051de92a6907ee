use alloc::vec::Vec;

use crate::event::GameEvent;

use super::{ANNOUNCE_BONUS, Game, GameState, TAKE_BONUS};

impl Game {
    /// Player action: play the last card in hand.
    ///
    /// The card's rank is added to the player score, then the opponent
    /// responds and the end-of-game check runs. A silent no-op when it is
    /// not the player's turn or the player hand is empty: no state changes
    /// and no events are produced. Out-of-turn commands are permitted so
    /// hosts can leave their controls enabled at all times.
    pub fn play_card(&mut self) -> Vec<GameEvent> {
        if self.state != GameState::PlayerTurn {
            return Vec::new();
        }

        let Some(card) = self.player_hand.play_last() else {
            return Vec::new();
        };

        self.player_score += u32::from(card.rank);
        self.state = GameState::OpponentTurn;

        self.finish_action()
    }

    /// Player action: take. Adds a fixed bonus of [`TAKE_BONUS`] points to
    /// the player score.
    ///
    /// Unlike [`play_card`](Game::play_card) there is no hand-emptiness
    /// precondition. A silent no-op when it is not the player's turn.
    pub fn take(&mut self) -> Vec<GameEvent> {
        self.bonus_action(TAKE_BONUS)
    }

    /// Player action: announce. Adds a fixed bonus of [`ANNOUNCE_BONUS`]
    /// points to the player score.
    ///
    /// Unlike [`play_card`](Game::play_card) there is no hand-emptiness
    /// precondition. A silent no-op when it is not the player's turn.
    pub fn announce(&mut self) -> Vec<GameEvent> {
        self.bonus_action(ANNOUNCE_BONUS)
    }

    fn bonus_action(&mut self, bonus: u32) -> Vec<GameEvent> {
        if self.state != GameState::PlayerTurn {
            return Vec::new();
        }

        self.player_score += bonus;
        self.state = GameState::OpponentTurn;

        self.finish_action()
    }

    /// Runs the opponent response and the end-of-game check, collecting
    /// the events every effective command produces.
    fn finish_action(&mut self) -> Vec<GameEvent> {
        self.opponent_respond();

        let mut events = alloc::vec![GameEvent::Updated];
        if let Some(winner) = self.check_game_over() {
            events.push(GameEvent::GameOver(winner));
        }
        events
    }
}
