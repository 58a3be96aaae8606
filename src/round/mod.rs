//! A single round of play and its state machine.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::StakeError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;

mod actions;
mod dealer;
mod natural;
pub mod state;

pub use state::RoundState;

/// Largest stake a round accepts.
///
/// A doubled hand on each side of a split, both winning, pays back eight
/// times the stake; that total must still fit in an `isize`.
pub const MAX_STAKE: usize = usize::MAX / 16;

/// One round: the player's hands, the dealer's cards and the deck they are
/// dealt from.
///
/// Hands are ordered left to right and grow through splits, each new hand
/// landing right after the one it came from. The active cursor walks them in
/// order. Once the round is no longer active it accepts no more actions.
///
/// A round is not synchronized; share it through the
/// [`Registry`](crate::Registry), which hands out one lease at a time.
///
/// # Example
///
/// ```
/// use bjsession::{Round, RoundState};
///
/// let mut round = Round::new(100, 7).unwrap();
/// if round.natural().is_none() {
///     round.stand();
///     round.next_hand();
///     assert_eq!(round.state(), RoundState::DealerTurn);
///     round.finish();
/// }
/// let _ = round.settle();
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    deck: Deck,
    hands: Vec<Hand>,
    dealer: DealerHand,
    active_index: usize,
    active: bool,
    initial_stake: usize,
}

impl Round {
    /// Deals a new round from a deck shuffled with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`StakeError::Zero`] if `stake` is zero, or
    /// [`StakeError::TooLarge`] if it exceeds [`MAX_STAKE`].
    pub fn new(stake: usize, seed: u64) -> Result<Self, StakeError> {
        Self::with_deck(stake, Deck::new(seed))
    }

    /// Deals a new round from `deck`: two cards to the player, then two to
    /// the dealer.
    ///
    /// The caller should check [`natural`](Self::natural) straight away.
    ///
    /// # Errors
    ///
    /// Returns [`StakeError::Zero`] if `stake` is zero, or
    /// [`StakeError::TooLarge`] if it exceeds [`MAX_STAKE`].
    pub fn with_deck(stake: usize, mut deck: Deck) -> Result<Self, StakeError> {
        if stake == 0 {
            return Err(StakeError::Zero);
        }
        if stake > MAX_STAKE {
            return Err(StakeError::TooLarge { max: MAX_STAKE });
        }

        let mut hand = Hand::new(stake);
        hand.add_card(deck.draw());
        hand.add_card(deck.draw());

        let mut dealer = DealerHand::new();
        dealer.add_card(deck.draw());
        dealer.add_card(deck.draw());

        Ok(Self {
            deck,
            hands: alloc::vec![hand],
            dealer,
            active_index: 0,
            active: true,
            initial_stake: stake,
        })
    }

    fn draw(&mut self) -> Card {
        self.deck.draw()
    }

    /// Returns the cursor if it points at a hand that can still act.
    fn actionable_index(&self) -> Option<usize> {
        if !self.active {
            return None;
        }
        self.hands
            .get(self.active_index)
            .filter(|hand| !hand.is_stood())
            .map(|_| self.active_index)
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RoundState {
        if !self.active {
            return RoundState::Settled;
        }
        match self.current_hand() {
            Some(hand) if !hand.is_stood() => RoundState::PlayerTurn {
                hand_index: self.active_index,
            },
            _ => RoundState::DealerTurn,
        }
    }

    /// Returns the player's hands in table order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns the hand under the cursor, if any.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active_index)
    }

    /// Returns the cursor position. Equal to the hand count once every hand
    /// has been walked.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns whether the round still accepts actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the stake of the first hand as dealt.
    #[must_use]
    pub const fn initial_stake(&self) -> usize {
        self.initial_stake
    }

    /// Returns the total wagered across all hands.
    #[must_use]
    pub fn total_stake(&self) -> usize {
        self.hands.iter().map(Hand::stake).sum()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of undrawn cards in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns whether the current hand may be doubled.
    ///
    /// Affordability is the caller's concern.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.active
            && self
                .current_hand()
                .is_some_and(|hand| !hand.is_stood() && hand.can_double())
    }

    /// Returns whether the current hand may be split.
    ///
    /// Neither affordability nor the table's hand cap is checked; see
    /// [`can_split_under`](Self::can_split_under).
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.active
            && self
                .current_hand()
                .is_some_and(|hand| !hand.is_stood() && hand.can_split())
    }

    /// Returns whether the current hand may be split without exceeding the
    /// table's hand cap.
    #[must_use]
    pub fn can_split_under(&self, options: &TableOptions) -> bool {
        self.hands.len() < usize::from(options.max_hands) && self.can_split()
    }
}
