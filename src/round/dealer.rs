use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{HandResult, Outcome, RoundResult};

use super::Round;

/// The dealer draws until reaching this total, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Dealer plays their hand.
    ///
    /// Draws until the dealer total is 17 or more; soft 17 stands like any
    /// other 17. If every player hand has busted the dealer draws nothing.
    ///
    /// Returns the cards drawn by the dealer.
    pub fn dealer_play(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();

        if self.hands.iter().all(Hand::is_busted) {
            return drawn_cards;
        }

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw();
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        drawn_cards
    }

    /// Ends the round: marks it terminal, then lets the dealer play.
    ///
    /// Does nothing on a round that is already over, so the dealer never
    /// plays twice. Returns the cards drawn by the dealer.
    pub fn finish(&mut self) -> Vec<Card> {
        if !self.active {
            return Vec::new();
        }

        self.active = false;
        let drawn = self.dealer_play();
        log::debug!(
            "[round] finished, dealer drew {} to {}",
            drawn.len(),
            self.dealer.value()
        );
        drawn
    }

    /// Judges the hand at `hand_index` against the dealer's current total.
    ///
    /// Returns `None` if there is no such hand.
    #[must_use]
    pub fn hand_result(&self, hand_index: usize) -> Option<HandResult> {
        let hand = self.hands.get(hand_index)?;
        let dealer_value = self.dealer.value();
        let (outcome, payout) = Outcome::judge(hand, dealer_value);

        Some(HandResult {
            hand_index,
            outcome,
            stake: hand.stake(),
            payout,
            player_value: hand.score(),
            dealer_value,
        })
    }

    /// Settles every hand against the dealer.
    ///
    /// Call after [`finish`](Self::finish); this only reads the round.
    #[must_use]
    pub fn settle(&self) -> RoundResult {
        let hands: Vec<HandResult> = (0..self.hands.len())
            .filter_map(|index| self.hand_result(index))
            .collect();

        let total_stake: usize = hands.iter().map(|result| result.stake).sum();
        let total_payout: usize = hands.iter().map(|result| result.payout).sum();

        let net = isize::try_from(total_payout)
            .unwrap_or(isize::MAX)
            .saturating_sub(isize::try_from(total_stake).unwrap_or(isize::MAX));

        RoundResult {
            hands,
            dealer_value: self.dealer.value(),
            dealer_bust: self.dealer.is_bust(),
            total_stake,
            total_payout,
            net,
        }
    }
}
