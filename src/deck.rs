//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of 40 Spanish-pattern cards, drawn from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards not yet drawn.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in deterministic order: suits in declaration
    /// order, ranks ascending within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in [Suit::Coins, Suit::Cups, Suit::Swords, Suit::Clubs] {
            for rank in 1..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Randomly permutes the deck with the given RNG.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card (the last in sequence).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards not yet drawn, bottom of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::Deck;
    use crate::card::{Card, DECK_SIZE, Suit};
    use crate::error::EmptyDeckError;

    #[test]
    fn full_deck_has_40_unique_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn draw_removes_from_the_back() {
        let mut deck = Deck::new();
        let top = deck.draw().unwrap();
        assert_eq!(top, Card::new(Suit::Clubs, 10));
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }

    #[test]
    fn draw_on_empty_deck_fails() {
        let mut deck = Deck::new();
        for _ in 0..DECK_SIZE {
            deck.draw().unwrap();
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);
    }

    #[test]
    fn shuffle_with_same_seed_is_deterministic() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);

        let mut deck_a = Deck::new();
        let mut deck_b = Deck::new();
        deck_a.shuffle(&mut rng_a);
        deck_b.shuffle(&mut rng_b);

        assert_eq!(deck_a, deck_b);
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(1);
        let mut rng_b = ChaCha8Rng::seed_from_u64(2);

        let mut deck_a = Deck::new();
        let mut deck_b = Deck::new();
        deck_a.shuffle(&mut rng_a);
        deck_b.shuffle(&mut rng_b);

        assert_ne!(deck_a, deck_b);
    }
}
