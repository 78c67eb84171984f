//! The 52-card deck used for a single round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards. Cards are drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck holding the 52 canonical cards in suit/rank order.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.initialize();
        deck
    }

    /// Creates a deck from an explicit card order.
    ///
    /// The last card in `cards` is drawn first. This is mainly useful to
    /// replay a known round.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Refills the deck with the 52 canonical cards, discarding the rest.
    pub fn initialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// `SliceRandom::shuffle` is a Fisher-Yates shuffle: walking from the last
    /// index down to 1, each slot is swapped with a uniform index in `[0, i]`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top (last) card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.cards.pop().ok_or(EmptyDeckError)?;
        tracing::trace!(%card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Returns the cards in draw-last order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
