//! Events emitted for presentation layers.
//!
//! The engine resolves every action instantly. Anything that wants to show the
//! round unfolding (dealing animations, a dealer drawing one card per tick)
//! drains these events and replays them at its own pace; only their order is
//! meaningful.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;
use crate::result::RoundResult;

/// Which side of the table a card or score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The engine moved to a new state.
    StateChanged {
        /// The new state.
        state: GameState,
    },
    /// A card left the deck.
    CardDealt {
        /// The card. Adapters must not show it while `face_down` is set.
        card: Card,
        /// Who received it.
        seat: Seat,
        /// Player hand index; always 0 for the dealer.
        hand_index: usize,
        /// Whether the card was dealt face down (the dealer's hole card).
        face_down: bool,
    },
    /// The dealer's hole card was turned over.
    HoleCardRevealed {
        /// The hole card.
        card: Card,
    },
    /// A displayed score changed.
    ScoreChanged {
        /// Whose score.
        seat: Seat,
        /// Player hand index; always 0 for the dealer.
        hand_index: usize,
        /// The new value. For the dealer this is the visible value.
        value: u8,
    },
    /// The player's hand was split into hands 0 and 1.
    HandSplit,
    /// Balance or wager changed.
    BalanceChanged {
        /// Available balance.
        balance: usize,
        /// Total wager on the table.
        wager: usize,
    },
    /// The round was settled.
    RoundSettled {
        /// Per-hand results and payouts.
        result: RoundResult,
    },
}

/// FIFO of pending events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: Event) {
        tracing::trace!(?event, "event queued");
        self.events.push_back(event);
    }

    /// Removes and returns the oldest event.
    pub fn poll(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Removes and returns every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
