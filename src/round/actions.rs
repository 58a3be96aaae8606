use crate::card::Card;
use crate::hand::Hand;

use super::Round;

impl Round {
    /// Player action: Hit (draw a card into the current hand).
    ///
    /// A hand that goes over 21 is marked busted and finished. The cursor
    /// does not move; call [`next_hand`](Self::next_hand) afterwards.
    ///
    /// Returns the card drawn, or `None` if there is no actionable hand.
    pub fn hit(&mut self) -> Option<Card> {
        let index = self.actionable_index()?;
        let card = self.draw();
        let hand = self.hands.get_mut(index)?;
        hand.add_card(card);

        if hand.is_busted() {
            log::trace!("[round] hand {index} busted on {card}");
        }
        Some(card)
    }

    /// Player action: Stand (finish the current hand).
    ///
    /// Returns whether a hand was stood.
    pub fn stand(&mut self) -> bool {
        let Some(index) = self.actionable_index() else {
            return false;
        };
        let Some(hand) = self.hands.get_mut(index) else {
            return false;
        };
        hand.stand();
        true
    }

    /// Player action: Double down (double the stake, take exactly one card,
    /// then stand).
    ///
    /// The caller must have checked that the player can cover the extra
    /// stake. Returns the card drawn, or `None` if the current hand cannot
    /// be doubled.
    pub fn double_down(&mut self) -> Option<Card> {
        if !self.can_double() {
            return None;
        }
        let index = self.actionable_index()?;
        let card = self.draw();
        let hand = self.hands.get_mut(index)?;

        hand.double_stake();
        hand.add_card(card);
        hand.stand();

        log::debug!(
            "[round] hand {index} doubled to {} on {card}",
            hand.stake()
        );
        Some(card)
    }

    /// Player action: Split (turn a pair into two hands).
    ///
    /// The second card moves into a new hand inserted right after the
    /// current one, carrying an equal stake, and each hand then receives one
    /// card. Split aces get that one card only and are finished at once.
    ///
    /// The caller must have checked affordability and the table's hand cap
    /// (see [`can_split_under`](Self::can_split_under)). Returns whether the
    /// split happened.
    pub fn split(&mut self) -> bool {
        if !self.can_split() {
            return false;
        }
        let Some(index) = self.actionable_index() else {
            return false;
        };
        let Some(hand) = self.hands.get_mut(index) else {
            return false;
        };
        let Some(split_card) = hand.take_split_card() else {
            return false;
        };

        let split_aces = split_card.is_ace();
        let stake = hand.stake();
        hand.mark_split(split_aces);

        let mut new_hand = Hand::from_split(split_card, stake, split_aces);

        let first = self.draw();
        let second = self.draw();
        new_hand.add_card(second);

        let Some(hand) = self.hands.get_mut(index) else {
            return false;
        };
        hand.add_card(first);

        if split_aces {
            hand.stand();
            new_hand.stand();
        }

        self.hands.insert(index + 1, new_hand);

        log::debug!(
            "[round] hand {index} split{} into {} hands",
            if split_aces { " (aces)" } else { "" },
            self.hands.len()
        );
        true
    }

    /// Advances the cursor to the next hand that can still act, skipping
    /// finished ones.
    ///
    /// Returns `true` if such a hand was found, or `false` once every hand is
    /// done and the dealer should play.
    pub fn next_hand(&mut self) -> bool {
        if !self.active {
            return false;
        }
        while self.active_index < self.hands.len() {
            self.active_index += 1;
            if self
                .hands
                .get(self.active_index)
                .is_some_and(|hand| !hand.is_stood())
            {
                return true;
            }
        }
        false
    }
}
