//! Error types.
//!
//! Round actions never fail: an action that does not apply is a no-op. The
//! only fallible step is choosing a stake.

use thiserror::Error;

/// Errors that can occur when choosing a stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StakeError {
    /// Stake is zero.
    #[error("stake is zero")]
    Zero,
    /// Stake is below the table minimum.
    #[error("stake is below the table minimum of {min}")]
    BelowMinimum {
        /// The table minimum.
        min: usize,
    },
    /// Stake is too large to settle safely.
    #[error("stake is above the largest supported stake of {max}")]
    TooLarge {
        /// The largest supported stake.
        max: usize,
    },
    /// Stake is above the table maximum.
    #[error("stake is above the table maximum of {max}")]
    AboveMaximum {
        /// The table maximum.
        max: usize,
    },
}
