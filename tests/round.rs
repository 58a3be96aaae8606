//! Round integration tests.

#![allow(clippy::float_cmp)]

use bjsession::{
    Card, DECK_SIZE, Deck, HandStatus, MAX_STAKE, Natural, Outcome, Round, RoundState,
    RoundingMode, StakeError, TableOptions, score,
};

/// Deals a round whose deck yields `draws` in order: two player cards, two
/// dealer cards, then whatever the actions draw.
fn stacked(stake: usize, draws: &[Card]) -> Round {
    Round::with_deck(stake, Deck::from_cards(draws.to_vec(), 1)).unwrap()
}

#[test]
fn scoring_reduces_aces_one_at_a_time() {
    assert_eq!(score::value(&[Card::Ace, Card::Ace, Card::Nine]), 21);
    assert_eq!(score::value(&[Card::Ace, Card::Ace]), 12);
    assert_eq!(score::value(&[Card::Ace, Card::Six]), 17);
    assert!(score::is_soft(&[Card::Ace, Card::Six]));
    assert_eq!(score::value(&[Card::Ace, Card::Six, Card::Ten]), 17);
    assert!(!score::is_soft(&[Card::Ace, Card::Six, Card::Ten]));
    assert_eq!(score::value(&[Card::King, Card::Queen, Card::Two]), 22);
    assert!(score::is_bust(&[Card::King, Card::Queen, Card::Two]));
    assert!(!score::is_bust(&[Card::King, Card::Ace, Card::Ace]));
    assert_eq!(score::value(&[]), 0);
}

#[test]
fn scoring_counts_every_ace_in_long_hands() {
    let aces = [Card::Ace; 24];
    assert_eq!(score::value(&aces), 24);
    assert!(!score::is_soft(&aces));
    assert!(score::is_bust(&aces));

    assert_eq!(score::value(&[Card::Ace; 11]), 21);
    assert!(score::is_soft(&[Card::Ace; 11]));

    let kings = [Card::King; 30];
    assert_eq!(score::value(&kings), u8::MAX);
    assert!(score::is_bust(&kings));
}

#[test]
fn blackjack_needs_an_ace_and_a_ten_valued_card() {
    assert!(score::is_blackjack(&[Card::Ace, Card::King]));
    assert!(score::is_blackjack(&[Card::Ten, Card::Ace]));
    assert!(!score::is_blackjack(&[Card::Ten, Card::Jack]));
    assert!(!score::is_blackjack(&[Card::Ace, Card::Five, Card::Five]));
    assert!(!score::is_blackjack(&[Card::Ace, Card::Ace]));
}

#[test]
fn card_symbols_and_values() {
    assert_eq!(Card::ALL.len() * 4, DECK_SIZE);
    assert_eq!(Card::Ten.to_string(), "10");
    assert_eq!(Card::Queen.to_string(), "Q");
    assert_eq!(Card::Ace.value(), 11);
    assert_eq!(Card::King.value(), 10);
    assert!(Card::Jack.is_ten_valued());
    assert!(!Card::Nine.is_ten_valued());
}

#[test]
fn deck_deals_four_of_each_rank_then_refills() {
    let mut deck = Deck::new(3);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let mut counts = [0usize; 13];
    for _ in 0..DECK_SIZE {
        let card = deck.draw();
        let rank = Card::ALL.iter().position(|&c| c == card).unwrap();
        counts[rank] += 1;
    }
    assert!(counts.iter().all(|&count| count == 4));
    assert_eq!(deck.remaining(), 0);

    deck.draw();
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
}

#[test]
fn deck_is_deterministic_per_seed() {
    let mut first = Deck::new(11);
    let mut second = Deck::new(11);
    let a: Vec<Card> = (0..10).map(|_| first.draw()).collect();
    let b: Vec<Card> = (0..10).map(|_| second.draw()).collect();
    assert_eq!(a, b);
}

#[test]
fn stacked_deck_yields_cards_in_order() {
    let mut deck = Deck::from_cards(vec![Card::Two, Card::Ace], 5);
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.draw(), Card::Two);
    assert_eq!(deck.draw(), Card::Ace);
    deck.draw();
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
}

#[test]
fn zero_stake_is_rejected() {
    assert_eq!(Round::new(0, 1).unwrap_err(), StakeError::Zero);
}

#[test]
fn oversized_stake_is_rejected() {
    let deck = Deck::from_cards(vec![Card::Five; 4], 1);
    assert_eq!(
        Round::with_deck(usize::MAX / 2 + 1, deck).unwrap_err(),
        StakeError::TooLarge { max: MAX_STAKE }
    );
    assert_eq!(
        Round::new(MAX_STAKE + 1, 1).unwrap_err(),
        StakeError::TooLarge { max: MAX_STAKE }
    );
    assert!(Round::new(MAX_STAKE, 1).is_ok());
}

#[test]
fn largest_stake_settles_split_and_doubled_hands() {
    let mut round = stacked(
        MAX_STAKE,
        &[
            Card::Eight,
            Card::Eight,
            Card::Ten,
            Card::Seven, // dealer 17
            Card::Three, // first hand: 11
            Card::Three, // second hand: 11
            Card::Ten,   // double on first hand: 21
            Card::Ten,   // double on second hand: 21
        ],
    );

    assert!(round.split());
    assert_eq!(round.double_down(), Some(Card::Ten));
    assert!(round.next_hand());
    assert_eq!(round.double_down(), Some(Card::Ten));
    assert!(!round.next_hand());
    assert!(round.finish().is_empty());

    let result = round.settle();
    assert!(
        result
            .hands
            .iter()
            .all(|hand| hand.outcome == Outcome::PlayerWin && hand.payout == MAX_STAKE * 4)
    );
    assert_eq!(result.total_stake, MAX_STAKE * 4);
    assert_eq!(result.total_payout, MAX_STAKE * 8);
    assert_eq!(result.net, isize::try_from(MAX_STAKE * 4).unwrap());
}

#[test]
fn new_round_deals_two_cards_each() {
    let round = stacked(
        100,
        &[Card::Seven, Card::Eight, Card::Six, Card::Nine],
    );

    assert!(round.is_active());
    assert_eq!(round.hands().len(), 1);
    assert_eq!(round.hands()[0].cards(), &[Card::Seven, Card::Eight]);
    assert_eq!(round.dealer().cards(), &[Card::Six, Card::Nine]);
    assert_eq!(round.dealer().up_card(), Some(Card::Six));
    assert_eq!(round.initial_stake(), 100);
    assert_eq!(round.total_stake(), 100);
    assert_eq!(round.state(), RoundState::PlayerTurn { hand_index: 0 });
}

#[test]
fn hit_then_stand_pushes_on_equal_totals() {
    let mut round = stacked(
        100,
        &[
            Card::Seven, // player
            Card::Eight, // player
            Card::Six,   // dealer
            Card::Nine,  // dealer
            Card::Five,  // player hit
            Card::Five,  // dealer draw
        ],
    );

    assert_eq!(round.natural(), None);
    assert_eq!(round.hit(), Some(Card::Five));
    assert_eq!(round.hands()[0].score(), 20);
    assert!(round.stand());
    assert!(!round.next_hand());
    assert_eq!(round.state(), RoundState::DealerTurn);

    let drawn = round.finish();
    assert_eq!(drawn, vec![Card::Five]);
    assert_eq!(round.state(), RoundState::Settled);

    let result = round.settle();
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.hands[0].outcome, Outcome::Push);
    assert_eq!(result.hands[0].payout, 100);
    assert_eq!(result.net, 0);
}

#[test]
fn dealer_stands_on_seventeen_and_loses_to_twenty() {
    let mut round = stacked(
        100,
        &[
            Card::Seven,
            Card::Eight,
            Card::Six,
            Card::Nine,
            Card::Five, // player hit
            Card::Two,  // dealer draw to 17
        ],
    );

    round.hit();
    round.stand();
    round.next_hand();
    assert_eq!(round.finish(), vec![Card::Two]);

    let result = round.settle();
    assert_eq!(result.dealer_value, 17);
    assert!(!result.dealer_bust);
    assert_eq!(result.hands[0].outcome, Outcome::PlayerWin);
    assert_eq!(result.hands[0].payout, 200);
    assert_eq!(result.net, 100);
}

#[test]
fn dealer_bust_pays_standing_hand() {
    let mut round = stacked(
        100,
        &[
            Card::Seven,
            Card::Eight,
            Card::Six,
            Card::Nine,
            Card::Five, // player hit
            Card::Ten,  // dealer busts
        ],
    );

    round.hit();
    round.stand();
    round.next_hand();
    round.finish();

    let result = round.settle();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 25);
    assert_eq!(result.hands[0].outcome, Outcome::PlayerWin);
    assert_eq!(result.hands[0].payout, 200);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut round = stacked(10, &[Card::Ten, Card::Eight, Card::Ace, Card::Six]);

    round.stand();
    round.next_hand();
    assert!(round.finish().is_empty());
    assert!(round.dealer().is_soft());
    assert_eq!(round.dealer().value(), 17);
    assert_eq!(round.settle().hands[0].outcome, Outcome::PlayerWin);
}

#[test]
fn bust_finishes_hand_and_dealer_skips_drawing() {
    let mut round = stacked(
        40,
        &[
            Card::Ten,
            Card::Six,
            Card::Five,
            Card::Six,
            Card::King, // player busts
        ],
    );

    assert_eq!(round.hit(), Some(Card::King));
    let hand = &round.hands()[0];
    assert!(hand.is_busted());
    assert!(hand.is_stood());
    assert_eq!(hand.status(), HandStatus::Bust);

    assert_eq!(round.hit(), None);
    assert!(!round.stand());
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(!round.next_hand());

    assert!(round.finish().is_empty());
    assert_eq!(round.dealer().len(), 2);

    let result = round.settle();
    assert_eq!(result.hands[0].outcome, Outcome::DealerWin);
    assert_eq!(result.hands[0].payout, 0);
    assert_eq!(result.net, -40);
}

#[test]
fn double_down_doubles_stake_and_ends_hand() {
    let mut round = stacked(
        100,
        &[
            Card::Five,
            Card::Six,
            Card::Nine,
            Card::Eight,
            Card::Ten, // double card
        ],
    );

    assert!(round.can_double());
    assert_eq!(round.double_down(), Some(Card::Ten));

    let hand = &round.hands()[0];
    assert_eq!(hand.stake(), 200);
    assert_eq!(hand.len(), 3);
    assert!(hand.is_doubled());
    assert!(hand.is_stood());
    assert!(!hand.is_busted());

    assert_eq!(round.hit(), None);
    assert_eq!(round.double_down(), None);
    assert!(!round.next_hand());

    assert!(round.finish().is_empty());
    let result = round.settle();
    assert_eq!(result.hands[0].outcome, Outcome::PlayerWin);
    assert_eq!(result.hands[0].payout, 400);
    assert_eq!(result.total_stake, 200);
}

#[test]
fn double_down_can_bust() {
    let mut round = stacked(
        20,
        &[Card::Ten, Card::Six, Card::Nine, Card::Eight, Card::Queen],
    );

    round.double_down();
    let hand = &round.hands()[0];
    assert!(hand.is_busted());
    assert!(hand.is_doubled());
    assert_eq!(hand.stake(), 40);
}

#[test]
fn double_down_needs_exactly_two_cards() {
    let mut round = stacked(
        100,
        &[Card::Two, Card::Three, Card::Nine, Card::Eight, Card::Two],
    );

    round.hit();
    assert!(!round.can_double());
    assert_eq!(round.double_down(), None);
    assert_eq!(round.hands()[0].stake(), 100);
    assert_eq!(round.hands()[0].len(), 3);
}

#[test]
fn split_creates_two_hands_with_matching_stakes() {
    let mut round = stacked(
        50,
        &[
            Card::Eight, // player
            Card::Eight, // player
            Card::Five,  // dealer
            Card::Nine,  // dealer
            Card::Three, // first hand
            Card::Two,   // second hand
        ],
    );

    assert!(round.can_split());
    assert!(round.split());

    let hands = round.hands();
    assert_eq!(hands.len(), 2);
    assert!(hands.iter().all(|hand| hand.is_from_split()));
    assert!(hands.iter().all(|hand| hand.len() == 2));
    assert!(hands.iter().all(|hand| !hand.is_split_aces()));
    assert_eq!(hands[0].cards(), &[Card::Eight, Card::Three]);
    assert_eq!(hands[1].cards(), &[Card::Eight, Card::Two]);
    assert_eq!(round.total_stake(), 100);
    assert_eq!(round.initial_stake(), 50);
    assert_eq!(round.state(), RoundState::PlayerTurn { hand_index: 0 });
}

#[test]
fn split_hands_are_played_in_order() {
    let mut round = stacked(
        50,
        &[
            Card::Eight,
            Card::Eight,
            Card::Ten,
            Card::Nine, // dealer 19
            Card::Three,
            Card::Two,
            Card::Ten, // hit on first hand: 21
            Card::Ten, // hit on second hand: 20
        ],
    );

    round.split();
    assert!(round.can_double());
    assert_eq!(round.hit(), Some(Card::Ten));
    assert!(round.stand());
    assert!(round.next_hand());
    assert_eq!(round.active_index(), 1);
    assert_eq!(round.state(), RoundState::PlayerTurn { hand_index: 1 });

    assert_eq!(round.hit(), Some(Card::Ten));
    round.stand();
    assert!(!round.next_hand());
    assert_eq!(round.active_index(), 2);
    assert_eq!(round.state(), RoundState::DealerTurn);

    assert!(round.finish().is_empty());
    let result = round.settle();
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].outcome, Outcome::PlayerWin);
    assert_eq!(result.hands[0].payout, 100);
    assert_eq!(result.hands[1].outcome, Outcome::PlayerWin);
    assert_eq!(result.total_payout, 200);
    assert_eq!(result.net, 100);
}

#[test]
fn split_accepts_equal_value_ranks() {
    let round = stacked(10, &[Card::Ten, Card::King, Card::Five, Card::Nine]);
    assert!(round.hands()[0].can_split());

    let round = stacked(10, &[Card::Eight, Card::Nine, Card::Five, Card::Nine]);
    assert!(!round.hands()[0].can_split());
    assert!(!round.can_split());
}

#[test]
fn split_hands_cannot_split_again() {
    let mut round = stacked(
        10,
        &[
            Card::Eight,
            Card::Eight,
            Card::Five,
            Card::Nine,
            Card::Eight, // first hand becomes another pair
            Card::Two,
        ],
    );

    assert!(round.split());
    assert_eq!(round.hands()[0].cards(), &[Card::Eight, Card::Eight]);
    assert!(!round.hands()[0].can_split());
    assert!(!round.split());
    assert_eq!(round.hands().len(), 2);
}

#[test]
fn split_aces_take_one_card_and_stand() {
    let mut round = stacked(
        25,
        &[
            Card::Ace,
            Card::Ace,
            Card::Five,
            Card::Nine,
            Card::King, // first ace
            Card::Nine, // second ace
            Card::Ten,  // dealer busts
        ],
    );

    assert!(round.split());
    let hands = round.hands();
    assert!(hands.iter().all(|hand| hand.is_split_aces() && hand.is_stood()));
    assert_eq!(hands[0].score(), 21);
    assert!(!hands[0].is_blackjack());
    assert!(!hands[0].can_double());

    assert_eq!(round.hit(), None);
    assert_eq!(round.double_down(), None);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(!round.next_hand());

    assert_eq!(round.finish(), vec![Card::Ten]);
    let result = round.settle();
    assert!(result.dealer_bust);
    assert!(
        result
            .hands
            .iter()
            .all(|hand| hand.outcome == Outcome::PlayerWin && hand.payout == 50)
    );
}

#[test]
fn split_respects_table_hand_cap() {
    let round = stacked(10, &[Card::Eight, Card::Eight, Card::Five, Card::Nine]);

    assert!(round.can_split_under(&TableOptions::default()));
    assert!(!round.can_split_under(&TableOptions::default().with_max_hands(1)));
}

#[test]
fn dealer_natural_ends_round_before_action() {
    let mut round = stacked(50, &[Card::Ace, Card::Eight, Card::Ace, Card::King]);

    assert_eq!(round.hands()[0].score(), 19);
    assert_eq!(round.natural(), Some(Natural::Dealer));

    let result = round.settle_natural(&TableOptions::default()).unwrap();
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(result.payout, 0);
    assert_eq!(result.stake, 50);

    assert!(!round.is_active());
    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.hit(), None);
    assert!(!round.split());
    assert_eq!(round.dealer().len(), 2);
    assert!(round.finish().is_empty());
}

#[test]
fn player_natural_pays_table_ratio() {
    let mut round = stacked(100, &[Card::Ace, Card::King, Card::Nine, Card::Eight]);

    assert!(round.hands()[0].is_blackjack());
    assert_eq!(round.natural(), Some(Natural::Player));

    let result = round.settle_natural(&TableOptions::default()).unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.payout, 250);
    assert!(!round.is_active());
}

#[test]
fn player_natural_payout_is_rounded() {
    let options = TableOptions::default();
    assert_eq!(options.blackjack_payout(15), 37);

    let options = options.with_rounding_blackjack(RoundingMode::Up);
    assert_eq!(options.blackjack_payout(15), 38);
}

#[test]
fn both_naturals_push() {
    let mut round = stacked(30, &[Card::Ace, Card::Queen, Card::King, Card::Ace]);

    assert_eq!(round.natural(), Some(Natural::Both));
    let result = round.settle_natural(&TableOptions::default()).unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.payout, 30);
}

#[test]
fn natural_check_only_applies_to_opening_deal() {
    let mut round = stacked(
        30,
        &[Card::Nine, Card::Eight, Card::Seven, Card::Five],
    );
    assert_eq!(round.natural(), None);
    assert_eq!(round.settle_natural(&TableOptions::default()), None);
    assert!(round.is_active());

    let mut round = stacked(
        30,
        &[Card::Ace, Card::King, Card::Nine, Card::Eight, Card::Two],
    );
    round.hit();
    assert_eq!(round.natural(), None);
    assert_eq!(round.settle_natural(&TableOptions::default()), None);
}

#[test]
fn finish_runs_dealer_only_once() {
    let mut round = stacked(
        10,
        &[Card::Ten, Card::Nine, Card::Two, Card::Three, Card::Four],
    );

    round.stand();
    round.next_hand();
    let drawn = round.finish();
    assert!(!drawn.is_empty());
    let dealer_cards = round.dealer().len();

    assert!(round.finish().is_empty());
    assert_eq!(round.dealer().len(), dealer_cards);
}

#[test]
fn dealer_always_ends_on_seventeen_or_more() {
    for seed in 0..200 {
        let mut round = Round::new(10, seed).unwrap();
        round.stand();
        round.next_hand();
        round.finish();
        assert!(round.dealer().value() >= 17, "seed {seed}");
    }
}

#[test]
fn dealer_never_draws_against_all_busted_hands() {
    for seed in 0..200 {
        let mut round = Round::new(10, seed).unwrap();
        while round.hit().is_some() {}
        assert!(round.hands()[0].is_busted(), "seed {seed}");

        round.finish();
        assert_eq!(round.dealer().len(), 2, "seed {seed}");
        assert_eq!(round.settle().hands[0].payout, 0);
    }
}

#[test]
fn settlement_covers_every_total() {
    let hands = [
        stacked(10, &[Card::Ten, Card::Seven, Card::Two, Card::Three]),
        stacked(10, &[Card::Ten, Card::Queen, Card::Two, Card::Three]),
        stacked(10, &[Card::Ace, Card::Nine, Card::Two, Card::Three]),
        stacked(10, &[Card::Four, Card::Two, Card::Two, Card::Three]),
    ];
    let mut busted = stacked(10, &[Card::Ten, Card::Six, Card::Two, Card::Three, Card::Nine]);
    busted.hit();

    for round in hands.iter().chain(core::iter::once(&busted)) {
        let hand = &round.hands()[0];
        for dealer_value in 2..=30 {
            let (outcome, payout) = Outcome::judge(hand, dealer_value);
            let expected = if hand.is_busted() {
                (Outcome::DealerWin, 0)
            } else if dealer_value > 21 || hand.score() > dealer_value {
                (Outcome::PlayerWin, 20)
            } else if hand.score() == dealer_value {
                (Outcome::Push, 10)
            } else {
                (Outcome::DealerWin, 0)
            };
            assert_eq!((outcome, payout), expected);
        }
    }
}

#[test]
fn stake_only_grows_during_a_round() {
    let mut round = stacked(
        10,
        &[
            Card::Six,
            Card::Six,
            Card::Ten,
            Card::Seven,
            Card::Five,
            Card::Four,
            Card::Two,
        ],
    );

    let mut last = round.total_stake();
    round.split();
    assert!(round.total_stake() >= last);
    last = round.total_stake();
    round.double_down();
    assert!(round.total_stake() >= last);
    assert_eq!(round.total_stake(), 30);
}

#[test]
fn table_options_check_stakes() {
    let options = TableOptions::default()
        .with_min_bet(10)
        .with_max_bet(500)
        .with_default_bet(50);

    assert_eq!(options.default_bet, 50);
    assert_eq!(options.check_stake(0), Err(StakeError::Zero));
    assert_eq!(
        options.check_stake(5),
        Err(StakeError::BelowMinimum { min: 10 })
    );
    assert_eq!(
        options.check_stake(501),
        Err(StakeError::AboveMaximum { max: 500 })
    );
    assert_eq!(options.check_stake(10), Ok(()));
    assert_eq!(options.check_stake(500), Ok(()));
}

#[test]
fn table_options_defaults() {
    let options = TableOptions::default();
    assert_eq!(options.blackjack_pays, 2.5);
    assert_eq!(options.rounding_blackjack, RoundingMode::Down);
    assert_eq!(options.max_hands, 4);
    assert_eq!(options.min_bet, 10);
    assert_eq!(options.max_bet, 10_000);
    assert_eq!(options.default_bet, 100);
}
