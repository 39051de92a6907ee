//! A two-player Ronda-style card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing from a shuffled 40-card Spanish-pattern deck, the three player
//! actions (play a card, take, announce), the opponent's greedy response,
//! and end-of-game scoring.
//!
//! Commands return the [`GameEvent`]s they produced; a host renders the
//! public state after each call and reacts to the events.
//!
//! # Example
//!
//! ```
//! use rondars::{Game, GameEvent};
//!
//! let mut game = Game::new(42);
//! let events = game.play_card();
//! assert_eq!(events, [GameEvent::Updated]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, Suit};
pub use deck::Deck;
pub use error::EmptyDeckError;
pub use event::{GameEvent, Winner};
pub use game::{ANNOUNCE_BONUS, Game, GameState, HAND_SIZE, TAKE_BONUS};
pub use hand::Hand;
