//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! [`Game`] owns the player's [`Ledger`] and the round in progress, and
//! exposes the table actions (bet, deal, hit, stand, double, split). Every
//! action resolves synchronously; presentation layers follow along by
//! draining the [`Event`] queue at their own pace.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 100, 42);
//! game.place_bet(10).unwrap();
//! game.start_round().unwrap();
//!
//! while let GameState::PlayerTurn { .. } = game.state() {
//!     game.stand().unwrap();
//! }
//! assert_eq!(game.state(), GameState::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, EmptyDeckError, LedgerError};
pub use event::{Event, EventQueue, Seat};
pub use game::{ActionAvailability, DEALER_STANDS_ON, Game, GameState, Round, hand_outcome};
pub use hand::{BLACKJACK, DealerHand, Hand, HandStatus, evaluate};
pub use ledger::{BLACKJACK_PAYS, Ledger, Multiplier};
pub use options::{AbandonPolicy, GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult};
