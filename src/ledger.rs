//! Player balance and the wagers riding on the current round.

use alloc::vec::Vec;

use crate::error::LedgerError;
use crate::options::RoundingMode;

/// Profit ratio of a natural blackjack (3:2).
pub const BLACKJACK_PAYS: f64 = 1.5;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Factor applied to a wager at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    /// 0x: the wager is lost.
    Lose,
    /// 1x: the wager is returned.
    Push,
    /// 2x: even-money win.
    Win,
    /// 2.5x: wager returned plus 3:2 profit.
    Blackjack,
}

impl Multiplier {
    /// Returns the factor as a float (0, 1, 2 or 2.5).
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Lose => 0.0,
            Self::Push => 1.0,
            Self::Win => 2.0,
            Self::Blackjack => 1.0 + BLACKJACK_PAYS,
        }
    }

    /// Amount credited back to the balance for `wager`.
    ///
    /// Only the blackjack bonus can be fractional; it is rounded with `rounding`.
    #[must_use]
    pub fn credit(self, wager: usize, rounding: RoundingMode) -> usize {
        match self {
            Self::Lose => 0,
            Self::Push => wager,
            Self::Win => wager * 2,
            Self::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let profit = round_amount(wager as f64 * BLACKJACK_PAYS, rounding);
                wager + profit
            }
        }
    }
}

/// Balance and active wagers.
///
/// Money only moves between the balance and the wagers until [`Ledger::settle`]
/// or [`Ledger::forfeit`] is called, so `balance + wager` stays constant across
/// betting, doubling and splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: usize,
    /// One entry per player hand, indexed like the hands.
    wagers: Vec<usize>,
}

impl Ledger {
    /// Creates a ledger with the given starting balance and no wager.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            wagers: Vec::new(),
        }
    }

    /// Returns the available balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the total amount currently wagered.
    #[must_use]
    pub fn wager(&self) -> usize {
        self.wagers.iter().sum()
    }

    /// Returns the wager per hand.
    #[must_use]
    pub fn wagers(&self) -> &[usize] {
        &self.wagers
    }

    /// Returns the wager on a single hand.
    #[must_use]
    pub fn hand_wager(&self, hand_index: usize) -> Option<usize> {
        self.wagers.get(hand_index).copied()
    }

    fn take(&mut self, amount: usize) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Moves `amount` from the balance onto the main wager.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the balance.
    pub fn add_to_bet(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.take(amount)?;
        match self.wagers.first_mut() {
            Some(wager) => *wager += amount,
            None => self.wagers.push(amount),
        }
        Ok(())
    }

    /// Returns every wager to the balance. Returns the amount refunded.
    pub fn clear_bet(&mut self) -> usize {
        let refund = self.wager();
        self.balance += refund;
        self.wagers.clear();
        refund
    }

    /// Doubles the wager on a hand. Returns the extra amount taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has no wager or the balance cannot cover it.
    pub fn raise(&mut self, hand_index: usize) -> Result<usize, LedgerError> {
        let amount = self.hand_wager(hand_index).ok_or(LedgerError::NoSuchHand)?;
        self.take(amount)?;
        self.wagers[hand_index] += amount;
        Ok(amount)
    }

    /// Opens a new wager equal to the one on `hand_index`, for a split hand.
    /// Returns the amount taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has no wager or the balance cannot cover it.
    pub fn split(&mut self, hand_index: usize) -> Result<usize, LedgerError> {
        let amount = self.hand_wager(hand_index).ok_or(LedgerError::NoSuchHand)?;
        self.take(amount)?;
        self.wagers.insert(hand_index + 1, amount);
        Ok(amount)
    }

    /// Credits `wager × multiplier` for every entry, then clears all wagers.
    ///
    /// Returns the total credited.
    pub fn settle(&mut self, results: &[(usize, Multiplier)], rounding: RoundingMode) -> usize {
        let credited: usize = results
            .iter()
            .map(|&(wager, multiplier)| multiplier.credit(wager, rounding))
            .sum();
        self.balance += credited;
        self.wagers.clear();
        credited
    }

    /// Drops every wager without crediting it. Returns the amount lost.
    pub fn forfeit(&mut self) -> usize {
        let lost = self.wager();
        self.wagers.clear();
        lost
    }
}
