use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::HandStatus;

use super::{Game, GameState, Round};

impl Game {
    /// Places (or adds to) the bet for the next round.
    ///
    /// After a settled round this also clears the finished round away.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero, or the
    /// amount exceeds the balance. Nothing changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::InvalidTransition);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.ledger.balance() {
            return Err(BetError::InsufficientFunds);
        }

        self.clear_round();
        self.ledger.add_to_bet(amount)?;
        tracing::debug!(
            amount,
            wager = self.ledger.wager(),
            balance = self.ledger.balance(),
            "bet placed"
        );
        self.emit_balance();

        Ok(())
    }

    /// Returns the pending bet to the balance.
    ///
    /// Returns the amount refunded.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn clear_bet(&mut self) -> Result<usize, BetError> {
        if !self.state.accepts_bets() {
            return Err(BetError::InvalidTransition);
        }

        self.clear_round();
        let refunded = self.ledger.clear_bet();
        tracing::debug!(refunded, "bet cleared");
        self.emit_balance();

        Ok(refunded)
    }

    /// Shuffles a fresh deck and deals the opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting state or no bet has
    /// been placed.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        self.check_can_deal()?;
        let deck = self.new_deck();
        self.start_round_with_deck(deck)
    }

    /// Deals the opening cards from a prepared deck.
    ///
    /// Cards are drawn from the end of the deck: player, dealer up card,
    /// player, dealer hole card. A player natural settles the round at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting state, no bet has
    /// been placed, or the deck runs out (the round is then aborted and the
    /// bet refunded).
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        self.check_can_deal()?;

        self.last_result = None;
        self.round = Some(Round::new(deck));
        self.set_state(GameState::Dealing);
        tracing::debug!(wager = self.ledger.wager(), "dealing round");

        let dealt = match self.round.as_mut() {
            Some(round) => round.deal_initial(&mut self.events),
            None => return Err(DealError::InvalidTransition),
        };
        if let Err(err) = dealt {
            self.abort_round();
            return Err(err.into());
        }

        let natural = self
            .hands()
            .first()
            .is_some_and(|hand| hand.status() == HandStatus::Blackjack);
        if natural {
            tracing::debug!("player blackjack");
            self.settle();
        } else {
            self.set_state(GameState::PlayerTurn { hand_index: 0 });
        }

        Ok(())
    }

    fn check_can_deal(&self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidTransition);
        }
        if self.ledger.wager() == 0 {
            return Err(DealError::NoBet);
        }
        Ok(())
    }
}
