//! Settlement types.

use alloc::vec::Vec;

use crate::hand::Hand;
use crate::score::BLACKJACK;

/// Outcome of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Judges a hand against a final dealer total.
    ///
    /// Returns the outcome and the amount credited back to the player: twice
    /// the stake for a win, the stake for a push, nothing for a loss. A busted
    /// hand loses even if the dealer also busts.
    #[must_use]
    pub fn judge(hand: &Hand, dealer_value: u8) -> (Self, usize) {
        let stake = hand.stake();

        if hand.is_busted() {
            return (Self::DealerWin, 0);
        }
        if dealer_value > BLACKJACK {
            return (Self::PlayerWin, stake.saturating_mul(2));
        }

        match hand.score().cmp(&dealer_value) {
            core::cmp::Ordering::Greater => (Self::PlayerWin, stake.saturating_mul(2)),
            core::cmp::Ordering::Equal => (Self::Push, stake),
            core::cmp::Ordering::Less => (Self::DealerWin, 0),
        }
    }
}

/// Which side was dealt a natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Natural {
    /// Both the player and the dealer have blackjack.
    Both,
    /// Only the player has blackjack.
    Player,
    /// Only the dealer has blackjack.
    Dealer,
}

impl Natural {
    /// Returns the outcome this natural settles to.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Both => Outcome::Push,
            Self::Player => Outcome::PlayerWin,
            Self::Dealer => Outcome::DealerWin,
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The stake riding on the hand.
    pub stake: usize,
    /// The amount credited back to the player.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, in table order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Sum of all stakes.
    pub total_stake: usize,
    /// Sum of all payouts.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}
