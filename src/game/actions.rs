use crate::card::Card;
use crate::error::{ActionError, EmptyDeckError};
use crate::hand::{Hand, HandStatus};

use super::{ActionAvailability, Game, Round};

impl Game {
    /// Returns the active hand index, or an error outside the player's turn.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        self.state
            .active_hand()
            .ok_or(ActionError::InvalidTransition)
    }

    fn active_round_hand(&self, hand_index: usize) -> Result<(&Round, &Hand), ActionError> {
        let round = self.round.as_ref().ok_or(ActionError::InvalidTransition)?;
        let hand = round
            .hands()
            .get(hand_index)
            .ok_or(ActionError::InvalidTransition)?;
        if hand.status() != HandStatus::Active {
            return Err(ActionError::InvalidTransition);
        }
        Ok((round, hand))
    }

    /// Converts a deck failure into an aborted round.
    fn fail_on_empty<T>(&mut self, result: Result<T, EmptyDeckError>) -> Result<T, ActionError> {
        result.map_err(|err| {
            self.abort_round();
            err.into()
        })
    }

    /// Player action: Hit (draw a card into the active hand).
    ///
    /// A bust ends the hand; reaching 21 does not.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or the deck runs out
    /// (the round is then aborted).
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let hand_index = self.ensure_player_turn()?;
        self.active_round_hand(hand_index)?;

        let dealt = match self.round.as_mut() {
            Some(round) => round.deal_player(hand_index, &mut self.events),
            None => return Err(ActionError::InvalidTransition),
        };
        let card = self.fail_on_empty(dealt)?;
        tracing::debug!(hand_index, %card, "hit");

        let bust = self
            .hands()
            .get(hand_index)
            .is_some_and(|hand| hand.status() == HandStatus::Bust);
        if bust {
            tracing::debug!(hand_index, "hand bust");
            let finished = self.finish_hand(hand_index);
            self.fail_on_empty(finished)?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the active hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or the deck runs out
    /// during the dealer's turn (the round is then aborted).
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let hand_index = self.ensure_player_turn()?;
        self.active_round_hand(hand_index)?;

        if let Some(hand) = self.round.as_mut().and_then(|round| round.hand_mut(hand_index)) {
            hand.stand();
        }
        tracing::debug!(hand_index, "stand");

        let finished = self.finish_hand(hand_index);
        self.fail_on_empty(finished)
    }

    /// Player action: Double down (double the wager, take one card, stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not hold
    /// exactly two cards, the balance cannot match the hand's wager, or the
    /// deck runs out (the round is then aborted).
    pub fn double(&mut self) -> Result<Card, ActionError> {
        let hand_index = self.ensure_player_turn()?;
        let (_, hand) = self.active_round_hand(hand_index)?;

        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let extra = self.ledger.raise(hand_index)?;
        self.emit_balance();

        let dealt = match self.round.as_mut() {
            Some(round) => round.deal_player(hand_index, &mut self.events),
            None => return Err(ActionError::InvalidTransition),
        };
        let card = self.fail_on_empty(dealt)?;
        tracing::debug!(hand_index, extra, %card, "double down");

        if let Some(hand) = self.round.as_mut().and_then(|round| round.hand_mut(hand_index)) {
            hand.stand();
        }

        let finished = self.finish_hand(hand_index);
        self.fail_on_empty(finished)?;

        Ok(card)
    }

    /// Player action: Split a pair into two hands.
    ///
    /// Both cards must have the same value (10, J, Q and K pair with each
    /// other), the round must not have been split already, and the balance
    /// must cover a second, equal wager. Each new hand is dealt a second card
    /// and play continues on hand 0.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand cannot be
    /// split, the round was already split, the player lacks funds, or the deck
    /// runs out (the round is then aborted).
    pub fn split(&mut self) -> Result<(), ActionError> {
        let hand_index = self.ensure_player_turn()?;
        let (round, hand) = self.active_round_hand(hand_index)?;

        if round.is_split() {
            return Err(ActionError::AlreadySplit);
        }
        if !hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }

        let extra = self.ledger.split(hand_index)?;
        self.emit_balance();
        tracing::debug!(hand_index, extra, "split");

        let dealt = match self.round.as_mut() {
            Some(round) => round.split(hand_index, &mut self.events),
            None => return Err(ActionError::InvalidTransition),
        };
        self.fail_on_empty(dealt)
    }

    /// Returns which actions are legal right now.
    #[must_use]
    pub fn available_actions(&self) -> ActionAvailability {
        let Ok(hand_index) = self.ensure_player_turn() else {
            return ActionAvailability::default();
        };
        let Ok((round, hand)) = self.active_round_hand(hand_index) else {
            return ActionAvailability::default();
        };

        let wager = self.ledger.hand_wager(hand_index).unwrap_or(0);
        let has_funds = wager > 0 && self.ledger.balance() >= wager;

        ActionAvailability {
            hit: true,
            stand: true,
            double: hand.len() == 2 && has_funds,
            split: hand.is_pair() && !round.is_split() && has_funds,
        }
    }
}
