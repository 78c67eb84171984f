use alloc::vec::Vec;

use crate::error::EmptyDeckError;
use crate::event::Event;
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, GameState};

/// Compares one player hand against the dealer's final hand.
#[must_use]
pub fn hand_outcome(hand: &Hand, dealer: &DealerHand) -> HandOutcome {
    match hand.status() {
        HandStatus::Bust => HandOutcome::Bust,
        HandStatus::Blackjack if dealer.is_blackjack() => HandOutcome::Push,
        HandStatus::Blackjack => HandOutcome::Blackjack,
        HandStatus::Active | HandStatus::Stand => {
            let player_value = hand.value();
            let dealer_value = dealer.value();
            if dealer.is_bust() {
                HandOutcome::DealerBust
            } else if player_value > dealer_value {
                HandOutcome::Win
            } else if player_value < dealer_value {
                HandOutcome::Lose
            } else {
                HandOutcome::Push
            }
        }
    }
}

impl Game {
    /// Moves on after the hand at `hand_index` is done (stood, doubled or bust).
    pub(super) fn finish_hand(&mut self, hand_index: usize) -> Result<(), EmptyDeckError> {
        let next = hand_index + 1;
        if next < self.hands().len() {
            tracing::debug!(hand_index = next, "moving to next split hand");
            self.set_state(GameState::PlayerTurn { hand_index: next });
            return Ok(());
        }
        self.end_player_turn()
    }

    /// Runs the dealer's turn and settles.
    ///
    /// If every player hand busted the dealer has nothing to play for: the
    /// hole card is turned and the round settles without further draws.
    fn end_player_turn(&mut self) -> Result<(), EmptyDeckError> {
        let Some(round) = self.round.as_ref() else {
            return Ok(());
        };
        if round.all_bust() {
            tracing::debug!("all player hands bust");
            self.settle();
            return Ok(());
        }

        self.set_state(GameState::DealerTurn);
        if let Some(round) = self.round.as_mut() {
            round.play_dealer(&mut self.events)?;
        }
        self.settle();
        Ok(())
    }

    /// Pays out every hand against the dealer and enters `Settled`.
    pub(super) fn settle(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.reveal_hole(&mut self.events);

        let dealer = round.dealer();
        let rounding = self.options.rounding_blackjack;

        let mut hands = Vec::with_capacity(round.hands().len());
        let mut entries = Vec::with_capacity(round.hands().len());
        for (hand_index, hand) in round.hands().iter().enumerate() {
            let bet = self.ledger.hand_wager(hand_index).unwrap_or(0);
            let outcome = hand_outcome(hand, dealer);
            let multiplier = outcome.multiplier();
            entries.push((bet, multiplier));
            hands.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout: multiplier.credit(bet, rounding),
                player_value: hand.value(),
            });
        }

        let total_bet = self.ledger.wager();
        let total_payout = self.ledger.settle(&entries, rounding);
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        let result = RoundResult {
            hands,
            dealer_value: dealer.value(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
            total_payout,
            net,
        };
        tracing::debug!(
            dealer_value = result.dealer_value,
            total_payout,
            net,
            balance = self.ledger.balance(),
            "round settled"
        );

        self.last_result = Some(result.clone());
        self.set_state(GameState::Settled);
        self.events.push(Event::RoundSettled { result });
        self.emit_balance();
    }
}
