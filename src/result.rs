//! Round result types for settlement.

use alloc::vec::Vec;

use crate::ledger::Multiplier;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player busted.
    Bust,
    /// Natural blackjack against a dealer without one.
    Blackjack,
    /// Dealer busted while the player did not.
    DealerBust,
    /// Player total beats the dealer.
    Win,
    /// Dealer total beats the player.
    Lose,
    /// Equal totals, or blackjack against dealer blackjack.
    Push,
}

impl HandOutcome {
    /// Payout multiplier for this outcome.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Bust | Self::Lose => Multiplier::Lose,
            Self::Push => Multiplier::Push,
            Self::DealerBust | Self::Win => Multiplier::Win,
            Self::Blackjack => Multiplier::Blackjack,
        }
    }

    /// Table message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Bust => "Bust! You Lose!",
            Self::Blackjack => "Blackjack! You Win!",
            Self::DealerBust => "Dealer Busts! You Win!",
            Self::Win => "You Win!",
            Self::Lose => "Dealer Wins!",
            Self::Push => "Push - It's a Tie!",
        }
    }

    /// Returns whether the player won money on this hand.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::DealerBust | Self::Win)
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (1 only for the second split hand).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The wager on this hand.
    pub bet: usize,
    /// Amount credited back to the balance.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a two-card 21.
    pub dealer_blackjack: bool,
    /// Total credited to the balance.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}
