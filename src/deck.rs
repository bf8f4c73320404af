//! The standard 52-card deck.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52-card deck in canonical order, every card face down.
    ///
    /// Canonical order is suit by suit (hearts, diamonds, clubs, spades), Ace
    /// to King within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Builds a standard deck and shuffles it with `seed`.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(seed);
        deck
    }

    /// Creates a deck from an explicit card order (last card on top).
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deterministically permutes the remaining cards.
    ///
    /// The same seed applied to the same order always yields the same order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Removes and returns the top `n` cards, in the order they were drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if fewer than `n` cards remain; the deck
    /// is left untouched.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::EmptyDeck {
                requested: n,
                remaining,
            });
        }
        let mut drawn = self.cards.split_off(remaining - n);
        drawn.reverse();
        Ok(drawn)
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the remaining cards are exactly the 52 distinct cards of
    /// a standard deck.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_full_set(self.cards.iter())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Returns whether `cards` is exactly one of each of the 52 standard cards.
pub(crate) fn is_full_set<'a>(cards: impl Iterator<Item = &'a Card>) -> bool {
    let mut seen = [false; DECK_SIZE];
    let mut count = 0;
    for card in cards {
        let slot = &mut seen[card.ordinal()];
        if *slot {
            return false;
        }
        *slot = true;
        count += 1;
    }
    count == DECK_SIZE
}
