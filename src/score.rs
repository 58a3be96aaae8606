//! Hand scoring with soft-ace reduction.

use crate::card::Card;

/// Blackjack target total.
pub const BLACKJACK: u8 = 21;

fn evaluate(cards: &[Card]) -> (u8, bool) {
    let limit = usize::from(BLACKJACK);
    let mut total: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += usize::from(card.value());
    }

    while total > limit && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= limit;
    // Any total past u8 is long bust.
    (u8::try_from(total).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best total for `cards`.
///
/// Aces start at 11 and are recounted as 1, one at a time, while the total is
/// over 21.
///
/// ```
/// use bjsession::{Card, score};
///
/// assert_eq!(score::value(&[Card::Ace, Card::Ace, Card::Nine]), 21);
/// assert_eq!(score::value(&[Card::King, Card::Queen, Card::Two]), 22);
/// ```
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate(cards).0
}

/// Returns whether an ace is still counted as 11 in the best total.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate(cards).1
}

/// Returns whether `cards` is a natural: exactly two cards, one ace and one
/// ten-valued card.
///
/// ```
/// use bjsession::{Card, score};
///
/// assert!(score::is_blackjack(&[Card::Ace, Card::King]));
/// assert!(!score::is_blackjack(&[Card::Ten, Card::Jack]));
/// assert!(!score::is_blackjack(&[Card::Ace, Card::Five, Card::Five]));
/// ```
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    if cards.len() != 2 || value(cards) != BLACKJACK {
        return false;
    }

    let has_ace = cards.iter().any(|card| card.is_ace());
    let has_ten = cards.iter().any(|card| card.is_ten_valued());
    has_ace && has_ten
}

/// Returns whether the best total is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    value(cards) > BLACKJACK
}
