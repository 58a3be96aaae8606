//! Table configuration options.

use crate::error::StakeError;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

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

/// Table policy applied around a round: stake limits, the hand cap for
/// splits, and the natural-blackjack payout.
///
/// The round itself never consults these; callers use them to gate actions
/// and to price a natural.
///
/// ```
/// use bjsession::TableOptions;
///
/// let options = TableOptions::default()
///     .with_blackjack_pays(2.5)
///     .with_max_hands(4)
///     .with_min_bet(10);
/// assert_eq!(options.blackjack_payout(100), 250);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Amount credited on a natural, as a multiple of the stake (stake included).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Maximum number of hands a round may grow to through splits.
    pub max_hands: u8,
    /// Smallest accepted stake.
    pub min_bet: usize,
    /// Largest accepted stake.
    pub max_bet: usize,
    /// Stake used when the player does not name one.
    pub default_bet: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 2.5,
            rounding_blackjack: RoundingMode::Down,
            max_hands: 4,
            min_bet: 10,
            max_bet: 10_000,
            default_bet: 100,
        }
    }
}

impl TableOptions {
    /// Sets the natural-blackjack payout multiple.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(2.2);
    /// assert_eq!(options.blackjack_pays, 2.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the maximum number of hands per round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsession::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: u8) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets the smallest accepted stake.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the largest accepted stake.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the stake used when none is given.
    #[must_use]
    pub const fn with_default_bet(mut self, default_bet: usize) -> Self {
        self.default_bet = default_bet;
        self
    }

    /// Checks a requested stake against the table limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the stake is zero or outside `min_bet..=max_bet`.
    pub const fn check_stake(&self, stake: usize) -> Result<(), StakeError> {
        if stake == 0 {
            return Err(StakeError::Zero);
        }
        if stake < self.min_bet {
            return Err(StakeError::BelowMinimum { min: self.min_bet });
        }
        if stake > self.max_bet {
            return Err(StakeError::AboveMaximum { max: self.max_bet });
        }
        Ok(())
    }

    /// Returns the amount credited for a natural on `stake`.
    #[must_use]
    pub fn blackjack_payout(&self, stake: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let amount = (stake as f64) * self.blackjack_pays;
        round_amount(amount, self.rounding_blackjack)
    }
}
