//! A single 52-card deck that refills itself when exhausted.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{COPIES_PER_RANK, Card, DECK_SIZE};

/// An ordered, shuffled sequence of cards owned by one round.
///
/// The deck is never empty to a caller: drawing from an exhausted deck
/// silently rebuilds and reshuffles a full 52 cards first. No cards are
/// burned and nothing models a continuous shoe.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: VecDeque::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.refill();
        deck
    }

    /// Creates a stacked deck that yields `cards` in order.
    ///
    /// Once the stacked cards run out the deck refills from `seed` like any
    /// other deck.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: cards.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn refill(&mut self) {
        self.cards.clear();
        for _ in 0..COPIES_PER_RANK {
            self.cards.extend(Card::ALL);
        }
        self.shuffle();
    }

    /// Shuffles the undrawn cards into a uniformly random order.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, refilling first if the deck is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop_front() {
                return card;
            }

            log::trace!("[deck] exhausted, reshuffling {DECK_SIZE} cards");
            self.refill();
        }
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
