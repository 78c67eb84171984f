//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::event::{Event, EventQueue};
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::{AbandonPolicy, GameOptions};
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use dealer::hand_outcome;
pub use round::{DEALER_STANDS_ON, Round};
pub use state::{ActionAvailability, GameState};

/// A single-player blackjack session.
///
/// The game owns the ledger, which persists across rounds, and the round in
/// progress (deck, dealer hand, player hands). Every operation is a plain
/// synchronous call; observable effects are also queued as [`Event`]s.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    state: GameState,
    ledger: Ledger,
    round: Option<Round>,
    last_result: Option<RoundResult>,
    events: EventQueue,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a starting balance and a shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 500, 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 500);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, balance: usize, seed: u64) -> Self {
        Self {
            options,
            state: GameState::Betting,
            ledger: Ledger::new(balance),
            round: None,
            last_result: None,
            events: EventQueue::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the available balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the total wager on the table.
    #[must_use]
    pub fn wager(&self) -> usize {
        self.ledger.wager()
    }

    /// Returns the round in progress (or the settled one until the next bet).
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the player's hands, or an empty slice between rounds.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        match &self.round {
            Some(round) => round.hands(),
            None => &[],
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> Option<&DealerHand> {
        self.round.as_ref().map(Round::dealer)
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn active_hand(&self) -> Option<usize> {
        self.state.active_hand()
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.deck().len())
    }

    /// Returns the result of the most recently settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Removes and returns the oldest pending event.
    pub fn poll_event(&mut self) -> Option<Event> {
        self.events.poll()
    }

    /// Removes and returns every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Discards the current round and returns to betting.
    ///
    /// After settlement this is the "play again" step. Called mid-round it
    /// abandons the round: the wagers on the table are forfeited or refunded
    /// according to [`GameOptions::abandon_policy`]. A pending bet placed
    /// during betting is left alone.
    pub fn clear_round(&mut self) {
        match self.state {
            GameState::Betting => return,
            GameState::Settled => {}
            GameState::Dealing | GameState::PlayerTurn { .. } | GameState::DealerTurn => {
                let amount = match self.options.abandon_policy {
                    AbandonPolicy::Forfeit => self.ledger.forfeit(),
                    AbandonPolicy::Refund => self.ledger.clear_bet(),
                };
                tracing::debug!(
                    policy = ?self.options.abandon_policy,
                    amount,
                    "round abandoned"
                );
                self.emit_balance();
            }
        }
        self.round = None;
        self.set_state(GameState::Betting);
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            tracing::debug!(from = ?self.state, to = ?state, "state changed");
            self.state = state;
            self.events.push(Event::StateChanged { state });
        }
    }

    fn emit_balance(&mut self) {
        self.events.push(Event::BalanceChanged {
            balance: self.ledger.balance(),
            wager: self.ledger.wager(),
        });
    }

    /// Aborts the round after the deck ran dry, refunding every wager.
    fn abort_round(&mut self) {
        let refunded = self.ledger.clear_bet();
        tracing::warn!(refunded, "deck exhausted mid-round, round aborted");
        self.round = None;
        self.emit_balance();
        self.set_state(GameState::Betting);
    }

    fn new_deck(&mut self) -> Deck {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        deck
    }
}
