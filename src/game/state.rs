//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player actions on the given hand.
    PlayerTurn {
        /// Index of the active hand (1 only after a split).
        hand_index: usize,
    },
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; results are final.
    Settled,
}

impl GameState {
    /// Returns whether bets can be placed or cleared.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        matches!(self, Self::Betting | Self::Settled)
    }

    /// Returns the active hand index during the player's turn.
    #[must_use]
    pub const fn active_hand(self) -> Option<usize> {
        match self {
            Self::PlayerTurn { hand_index } => Some(hand_index),
            _ => None,
        }
    }
}

/// Which player actions are currently legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionAvailability {
    /// Hit is allowed.
    pub hit: bool,
    /// Stand is allowed.
    pub stand: bool,
    /// Double down is allowed.
    pub double: bool,
    /// Split is allowed.
    pub split: bool,
}
