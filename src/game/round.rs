//! Cards on the table for one round.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::event::{Event, EventQueue, Seat};
use crate::hand::{DealerHand, Hand};

/// Dealer draws while below this total and stands on every 17, soft included.
pub const DEALER_STANDS_ON: u8 = 17;

/// The deck, the dealer's hand and the player's hand(s) for one round.
///
/// Every card reaches a hand by being moved out of the deck; nothing else
/// touches either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    deck: Deck,
    dealer: DealerHand,
    hands: Vec<Hand>,
}

impl Round {
    /// Creates a round with a single empty player hand.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            dealer: DealerHand::new(),
            hands: alloc::vec![Hand::new()],
        }
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns whether the player's hand was split this round.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.hands.len() > 1
    }

    /// Returns whether every player hand busted.
    #[must_use]
    pub fn all_bust(&self) -> bool {
        self.hands.iter().all(Hand::is_bust)
    }

    pub(super) fn hand_mut(&mut self, hand_index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(hand_index)
    }

    /// Draws a card into a player hand. `hand_index` must exist.
    pub(super) fn deal_player(
        &mut self,
        hand_index: usize,
        events: &mut EventQueue,
    ) -> Result<Card, EmptyDeckError> {
        let card = self.deck.draw()?;
        let hand = &mut self.hands[hand_index];
        hand.add_card(card);

        events.push(Event::CardDealt {
            card,
            seat: Seat::Player,
            hand_index,
            face_down: false,
        });
        events.push(Event::ScoreChanged {
            seat: Seat::Player,
            hand_index,
            value: hand.value(),
        });
        Ok(card)
    }

    /// Draws a card into the dealer's hand.
    pub(super) fn deal_dealer(
        &mut self,
        face_down: bool,
        events: &mut EventQueue,
    ) -> Result<Card, EmptyDeckError> {
        let card = self.deck.draw()?;
        self.dealer.add_card(card);

        events.push(Event::CardDealt {
            card,
            seat: Seat::Dealer,
            hand_index: 0,
            face_down,
        });
        events.push(Event::ScoreChanged {
            seat: Seat::Dealer,
            hand_index: 0,
            value: self.dealer.visible_value(),
        });
        Ok(card)
    }

    /// Deals player, dealer up card, player, dealer hole card.
    pub(super) fn deal_initial(&mut self, events: &mut EventQueue) -> Result<(), EmptyDeckError> {
        self.deal_player(0, events)?;
        self.deal_dealer(false, events)?;
        self.deal_player(0, events)?;
        self.deal_dealer(true, events)?;
        Ok(())
    }

    /// Turns the hole card over if it is still face down.
    pub(super) fn reveal_hole(&mut self, events: &mut EventQueue) {
        if !self.dealer.reveal_hole() {
            return;
        }
        if let Some(&card) = self.dealer.hole_card() {
            events.push(Event::HoleCardRevealed { card });
        }
        events.push(Event::ScoreChanged {
            seat: Seat::Dealer,
            hand_index: 0,
            value: self.dealer.value(),
        });
    }

    /// Reveals the hole card and draws until the dealer reaches 17.
    ///
    /// Returns the cards drawn after the reveal.
    pub(super) fn play_dealer(
        &mut self,
        events: &mut EventQueue,
    ) -> Result<Vec<Card>, EmptyDeckError> {
        self.reveal_hole(events);

        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STANDS_ON {
            drawn.push(self.deal_dealer(false, events)?);
        }
        tracing::debug!(
            value = self.dealer.value(),
            drawn = drawn.len(),
            bust = self.dealer.is_bust(),
            "dealer finished"
        );
        Ok(drawn)
    }

    /// Splits the pair in `hand_index` into two hands and deals each a second card.
    ///
    /// The caller has already checked the hand is a splittable pair.
    pub(super) fn split(
        &mut self,
        hand_index: usize,
        events: &mut EventQueue,
    ) -> Result<(), EmptyDeckError> {
        let Some(card) = self
            .hands
            .get_mut(hand_index)
            .and_then(Hand::take_split_card)
        else {
            return Ok(());
        };
        self.hands.insert(hand_index + 1, Hand::from_split(card));
        events.push(Event::HandSplit);

        for index in [hand_index, hand_index + 1] {
            events.push(Event::ScoreChanged {
                seat: Seat::Player,
                hand_index: index,
                value: self.hands[index].value(),
            });
        }

        self.deal_player(hand_index, events)?;
        self.deal_player(hand_index + 1, events)?;
        Ok(())
    }
}
