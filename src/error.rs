//! Error types for game operations.

use thiserror::Error;

/// The deck ran out of cards.
///
/// A single round never needs anywhere near 52 cards, so this signals a logic
/// bug rather than a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors raised by the betting ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The amount exceeds the available balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The amount is zero.
    #[error("amount is zero")]
    ZeroAmount,
    /// No wager exists for the given hand.
    #[error("no wager for this hand")]
    NoSuchHand,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Betting is closed while a round is in progress.
    #[error("invalid transition: betting is closed")]
    InvalidTransition,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

impl From<LedgerError> for BetError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::ZeroAmount => Self::ZeroBet,
            LedgerError::InsufficientFunds | LedgerError::NoSuchHand => Self::InsufficientFunds,
        }
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress.
    #[error("invalid transition: cannot deal now")]
    InvalidTransition,
    /// No wager has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The deck ran out while dealing; the round was aborted.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid transition: not the player's turn")]
    InvalidTransition,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The round has already been split once.
    #[error("hand was already split this round")]
    AlreadySplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The deck ran out mid-action; the round was aborted.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

impl From<LedgerError> for ActionError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds | LedgerError::ZeroAmount => Self::InsufficientFunds,
            LedgerError::NoSuchHand => Self::InvalidTransition,
        }
    }
}
