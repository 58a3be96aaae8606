use crate::options::TableOptions;
use crate::result::{HandResult, Natural};

use super::Round;

impl Round {
    /// Returns whether the opening deal is still untouched: one hand of two
    /// cards, no action taken.
    fn is_opening(&self) -> bool {
        self.active
            && self.active_index == 0
            && self.hands.len() == 1
            && self.hands.first().is_some_and(|hand| hand.len() == 2 && !hand.is_stood())
    }

    /// Checks the opening deal for naturals on either side.
    ///
    /// Returns `None` if neither side has blackjack, or if play has already
    /// moved past the opening deal.
    #[must_use]
    pub fn natural(&self) -> Option<Natural> {
        if !self.is_opening() {
            return None;
        }

        let player = self.hands.first().is_some_and(|hand| hand.is_blackjack());
        let dealer = self.dealer.is_blackjack();

        match (player, dealer) {
            (true, true) => Some(Natural::Both),
            (true, false) => Some(Natural::Player),
            (false, true) => Some(Natural::Dealer),
            (false, false) => None,
        }
    }

    /// Settles a natural on the opening deal and ends the round without an
    /// action phase.
    ///
    /// Both naturals push for the stake, a player natural pays
    /// [`TableOptions::blackjack_payout`], a dealer natural pays nothing. The
    /// dealer does not draw. Returns `None` and leaves the round alone if
    /// [`natural`](Self::natural) finds nothing.
    pub fn settle_natural(&mut self, options: &TableOptions) -> Option<HandResult> {
        let natural = self.natural()?;
        let hand = self.hands.first()?;
        let stake = hand.stake();

        let payout = match natural {
            Natural::Both => stake,
            Natural::Player => options.blackjack_payout(stake),
            Natural::Dealer => 0,
        };

        let result = HandResult {
            hand_index: 0,
            outcome: natural.outcome(),
            stake,
            payout,
            player_value: hand.score(),
            dealer_value: self.dealer.value(),
        };

        self.active = false;
        log::debug!("[round] natural {natural:?} settled, payout {payout}");
        Some(result)
    }
}
