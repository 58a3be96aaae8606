//! A multi-hand blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals one player's hands against
//! the dealer, runs hit/stand/double/split actions, plays the dealer and
//! settles each hand, plus a [`Registry`] that keeps at most one round per
//! session and leases it to one caller at a time.
//!
//! Balances, stake affordability and presentation live outside the crate:
//! callers gate actions with the `can_*` predicates and credit the payouts
//! the round reports.
//!
//! # Example
//!
//! ```
//! use bjsession::{Registry, TableOptions};
//!
//! let options = TableOptions::default();
//! let registry = Registry::new();
//! let session = registry.start(1, options.default_bet, 42).unwrap();
//!
//! let mut round = session.lock();
//! if round.settle_natural(&options).is_none() {
//!     round.stand();
//!     round.next_hand();
//!     round.finish();
//!     let result = round.settle();
//!     assert_eq!(result.hands.len(), 1);
//! }
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
pub mod hand;
pub mod options;
pub mod registry;
pub mod result;
pub mod round;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE};
pub use deck::Deck;
pub use error::StakeError;
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::{RoundingMode, TableOptions};
pub use registry::{Registry, Session, SessionId};
pub use result::{HandResult, Natural, Outcome, RoundResult};
pub use round::{MAX_STAKE, Round, RoundState};
