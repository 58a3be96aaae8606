//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::score;

/// Derived status of a player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still take actions.
    Active,
    /// Hand is finished without busting (stood, doubled, or split aces).
    Stood,
    /// Hand has busted (over 21).
    Bust,
}

/// One group of player cards with its own stake.
///
/// A busted hand is always stood. Only the owning round mutates a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    stake: usize,
    stood: bool,
    doubled: bool,
    busted: bool,
    from_split: bool,
    split_aces: bool,
}

impl Hand {
    /// Creates an empty hand with the given stake.
    pub(crate) const fn new(stake: usize) -> Self {
        Self {
            cards: Vec::new(),
            stake,
            stood: false,
            doubled: false,
            busted: false,
            from_split: false,
            split_aces: false,
        }
    }

    /// Creates the second half of a split holding `card`.
    pub(crate) fn from_split(card: Card, stake: usize, split_aces: bool) -> Self {
        Self {
            cards: alloc::vec![card],
            stake,
            stood: false,
            doubled: false,
            busted: false,
            from_split: true,
            split_aces,
        }
    }

    /// Adds a card, finishing the hand if it busts.
    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if score::is_bust(&self.cards) {
            self.busted = true;
            self.stood = true;
        }
    }

    pub(crate) const fn stand(&mut self) {
        self.stood = true;
    }

    pub(crate) const fn double_stake(&mut self) {
        self.stake = self.stake.saturating_mul(2);
        self.doubled = true;
    }

    /// Marks this hand as one half of a split.
    pub(crate) const fn mark_split(&mut self, split_aces: bool) {
        self.from_split = true;
        self.split_aces = split_aces;
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the stake riding on this hand.
    #[must_use]
    pub const fn stake(&self) -> usize {
        self.stake
    }

    /// Returns whether the hand is finished.
    #[must_use]
    pub const fn is_stood(&self) -> bool {
        self.stood
    }

    /// Returns whether the hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand went over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns whether this hand came from splitting aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.split_aces
    }

    /// Returns the derived status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        if self.busted {
            HandStatus::Bust
        } else if self.stood {
            HandStatus::Stood
        } else {
            HandStatus::Active
        }
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        score::value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score::is_soft(&self.cards)
    }

    /// Returns whether the hand is a natural. Split hands never are.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && score::is_blackjack(&self.cards)
    }

    /// Returns whether the hand can be split.
    ///
    /// Any two cards of equal value qualify, so a ten and a king split just
    /// like a pair of eights. Split hands cannot be split again.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2
            && !self.from_split
            && self.cards[0].value() == self.cards[1].value()
    }

    /// Returns whether the hand can be doubled.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2 && !self.doubled && !self.split_aces
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score::value(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        score::is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        score::is_bust(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score::is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
