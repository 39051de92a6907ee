//! Hand representation for both seats.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// An ordered hand of cards.
///
/// Cards are appended at deal time and removed as they are played. The
/// player plays from the back; the opponent plays its highest card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the last card in the hand.
    pub fn play_last(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes and returns the highest-rank card in the hand.
    ///
    /// Ties are broken by position: the first maximal card found when
    /// scanning from the front of the hand is the one removed.
    pub fn play_highest(&mut self) -> Option<Card> {
        let mut best: Option<(usize, u8)> = None;

        for (index, card) in self.cards.iter().enumerate() {
            if best.is_none_or(|(_, rank)| card.rank > rank) {
                best = Some((index, card.rank));
            }
        }

        best.map(|(index, _)| self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
