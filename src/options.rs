//! Game configuration options.

/// Rounding mode for the fractional part of a blackjack payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// What happens to the wagers when a round is abandoned before settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AbandonPolicy {
    /// Wagers already on the table are lost.
    #[default]
    Forfeit,
    /// Wagers are returned to the balance.
    Refund,
}

/// Configuration options for a game session.
///
/// The table rules themselves are fixed: one freshly shuffled deck per round,
/// dealer stands on all 17s, blackjack pays 3:2, one split per round.
///
/// ```
/// use bjsolo::{AbandonPolicy, GameOptions, RoundingMode};
///
/// let options = GameOptions::default()
///     .with_rounding_blackjack(RoundingMode::Nearest)
///     .with_abandon_policy(AbandonPolicy::Refund);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Rounding mode for blackjack payouts on odd wagers.
    pub rounding_blackjack: RoundingMode,
    /// Wager handling when a round is abandoned mid-play.
    pub abandon_policy: AbandonPolicy,
}

impl GameOptions {
    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the abandon policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{AbandonPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_abandon_policy(AbandonPolicy::Refund);
    /// assert_eq!(options.abandon_policy, AbandonPolicy::Refund);
    /// ```
    #[must_use]
    pub const fn with_abandon_policy(mut self, policy: AbandonPolicy) -> Self {
        self.abandon_policy = policy;
        self
    }
}
