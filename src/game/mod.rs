//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::event::GameEvent;
use crate::hand::Hand;

mod actions;
mod opponent;
pub mod state;

pub use state::GameState;

/// Cards dealt to each hand at the start of a round.
pub const HAND_SIZE: usize = 5;

/// Score bonus added by the "take" action.
pub const TAKE_BONUS: u32 = 5;

/// Score bonus added by the "announce" action.
pub const ANNOUNCE_BONUS: u32 = 10;

/// A two-player game engine that owns the deck, both hands, and the scores.
///
/// The host application constructs and owns one `Game` value, drives it
/// through the command methods ([`play_card`](Game::play_card),
/// [`take`](Game::take), [`announce`](Game::announce),
/// [`new_game`](Game::new_game)), and renders the public state after each
/// call. Commands return the [`GameEvent`]s they produced.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// The player's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub opponent_hand: Hand,
    /// The player's score.
    pub player_score: u32,
    /// The opponent's score.
    pub opponent_score: u32,
    /// Current game state.
    pub state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed and deals the first round,
    /// so a freshly built game is immediately playable.
    ///
    /// # Example
    ///
    /// ```
    /// use rondars::{Game, HAND_SIZE};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.player_hand.len(), HAND_SIZE);
    /// assert!(game.is_player_turn());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            deck: Deck::new(),
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            player_score: 0,
            opponent_score: 0,
            state: GameState::PlayerTurn,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.new_game();
        game
    }

    /// Starts a new game: rebuilds and shuffles the deck, clears both
    /// hands, zeroes the scores, deals [`HAND_SIZE`] cards to each hand
    /// alternating player/opponent, and hands the turn to the player.
    ///
    /// Always succeeds, whatever state the previous game ended in.
    pub fn new_game(&mut self) -> Vec<GameEvent> {
        self.deck = Deck::new();
        self.deck.shuffle(&mut self.rng);

        self.player_hand.clear();
        self.opponent_hand.clear();
        self.player_score = 0;
        self.opponent_score = 0;
        self.state = GameState::PlayerTurn;

        self.deal();

        alloc::vec![GameEvent::Updated]
    }

    /// Deals the opening hands, one card at a time, player first.
    fn deal(&mut self) {
        for _ in 0..HAND_SIZE {
            // A 40-card deck loses exactly ten cards to the deal; the draw
            // cannot fail unless the deck or deal constants diverge.
            let card = self
                .deck
                .draw()
                .expect("deck holds enough cards for the opening deal");
            self.player_hand.add_card(card);

            let card = self
                .deck
                .draw()
                .expect("deck holds enough cards for the opening deal");
            self.opponent_hand.add_card(card);
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the engine is waiting for a player command.
    #[must_use]
    pub const fn is_player_turn(&self) -> bool {
        matches!(self.state, GameState::PlayerTurn)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
