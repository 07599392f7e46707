//! Engine integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{
    ActionError, Card, DECK_SIZE, DealError, Decision, Deck, DeckExhausted, Game, GameState,
    Hand, RoundOutcome, ShowdownError, Suit, dealer,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deck_from_draws(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.to_vec())
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Hearts, rank));
    }
    hand
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(unique.contains(&card(suit, rank)));
        }
    }
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let mut deck = Deck::standard();
    let before: HashSet<Card> = deck.cards().iter().copied().collect();

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn shuffle_with_same_seed_is_deterministic() {
    let mut deck_a = Deck::standard();
    let mut deck_b = Deck::standard();

    deck_a.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    deck_b.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(deck_a.cards(), deck_b.cards());

    let mut deck_c = Deck::standard();
    deck_c.shuffle(&mut ChaCha8Rng::seed_from_u64(8));
    assert_ne!(deck_a.cards(), deck_c.cards());
}

#[test]
fn draw_removes_the_front_card() {
    let mut deck = deck_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 9),
    ]);

    let drawn = deck.draw().unwrap();
    assert_eq!(drawn, card(Suit::Hearts, 2));
    assert_eq!(deck.len(), 2);
    assert!(!deck.cards().contains(&drawn));
}

#[test]
fn draw_from_empty_deck_fails() {
    let mut deck = deck_from_draws(&[]);
    assert_eq!(deck.draw().unwrap_err(), DeckExhausted);

    let mut full = Deck::standard();
    for _ in 0..DECK_SIZE {
        full.draw().unwrap();
    }
    assert_eq!(full.draw().unwrap_err(), DeckExhausted);
}

#[test]
fn score_is_order_invariant() {
    assert_eq!(hand_of(&[3, 13, 1]).score(), 14);
    assert_eq!(hand_of(&[1, 13, 3]).score(), 14);
    assert_eq!(hand_of(&[13, 1, 3]).score(), 14);
}

#[test]
fn ace_always_scores_one() {
    // Ace + King: 1 + 10, not 21.
    assert_eq!(hand_of(&[1, 13]).score(), 11);
    // Ace + Jack.
    assert_eq!(hand_of(&[1, 11]).score(), 11);
}

#[test]
fn no_two_card_hand_is_blackjack() {
    // With an Ace fixed at 1, the best two-card score is 20, so the
    // two-card-21 flag can never hold for cards from a standard deck.
    for first in 1..=13 {
        for second in 1..=13 {
            let hand = hand_of(&[first, second]);
            assert!(hand.score() <= 20);
            assert!(!hand.is_blackjack());
        }
    }
}

#[test]
fn three_card_twenty_one_is_not_blackjack() {
    let hand = hand_of(&[7, 7, 7]);
    assert_eq!(hand.score(), 21);
    assert!(!hand.is_blackjack());
    assert!(!hand.is_bust());
}

#[test]
fn bust_detection() {
    let hand = hand_of(&[10, 9, 5]);
    assert_eq!(hand.score(), 24);
    assert!(hand.is_bust());
}

#[test]
fn dealer_draws_past_sixteen_then_stands() {
    let mut hand = hand_of(&[10, 6]);
    let mut deck = deck_from_draws(&[card(Suit::Clubs, 5), card(Suit::Spades, 9)]);

    let drawn = dealer::play(&mut hand, &mut deck).unwrap();

    assert_eq!(drawn, vec![card(Suit::Clubs, 5)]);
    assert_eq!(hand.score(), 21);
    assert_eq!(deck.len(), 1);
}

#[test]
fn dealer_with_seventeen_draws_nothing() {
    let mut hand = hand_of(&[10, 7]);
    let mut deck = deck_from_draws(&[card(Suit::Clubs, 5)]);

    let drawn = dealer::play(&mut hand, &mut deck).unwrap();

    assert!(drawn.is_empty());
    assert_eq!(hand.len(), 2);
    assert_eq!(deck.len(), 1);
}

#[test]
fn dealer_play_with_empty_deck_fails() {
    let mut hand = hand_of(&[2]);
    let mut deck = deck_from_draws(&[]);

    assert_eq!(dealer::play(&mut hand, &mut deck).unwrap_err(), DeckExhausted);
}

#[test]
fn winner_resolution_table() {
    // Both bust is a push.
    assert_eq!(RoundOutcome::from_scores(24, 24), RoundOutcome::Push);
    // A lone bust loses regardless of the other score.
    assert_eq!(RoundOutcome::from_scores(25, 19), RoundOutcome::DealerWin);
    assert_eq!(RoundOutcome::from_scores(19, 23), RoundOutcome::PlayerWin);
    // Equal scores push.
    assert_eq!(RoundOutcome::from_scores(20, 20), RoundOutcome::Push);
    // Otherwise the hand closer to 21 wins, which for two non-bust hands
    // is the higher score.
    assert_eq!(RoundOutcome::from_scores(19, 17), RoundOutcome::PlayerWin);
    assert_eq!(RoundOutcome::from_scores(18, 20), RoundOutcome::DealerWin);
}

#[test]
fn deal_alternates_player_and_dealer() {
    let draws = [
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 5),
        card(Suit::Hearts, 6),
    ];
    let mut game = Game::with_deck("Alice", deck_from_draws(&draws));

    game.deal().unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player().hand().cards(), &[draws[0], draws[2]]);
    assert_eq!(game.dealer().hand().cards(), &[draws[1], draws[3]]);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn basic_round_flow() {
    let mut game = Game::with_deck(
        "Alice",
        deck_from_draws(&[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 6),    // dealer
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // dealer
            card(Suit::Hearts, 4),   // player hit
            card(Suit::Clubs, 5),    // dealer draw
        ]),
    );

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, 4);
    assert_eq!(game.player().hand().score(), 19);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.state(), GameState::RoundOver);

    let summary = game.outcome().unwrap();
    assert_eq!(summary.outcome, RoundOutcome::DealerWin);
    assert_eq!(summary.player_score, 19);
    assert_eq!(summary.dealer_score, 21);
    assert!(!summary.player_bust);
    assert!(!summary.dealer_bust);
    assert!(!summary.player_blackjack);
    assert!(!summary.dealer_blackjack);
}

#[test]
fn player_bust_ends_round_without_dealer_play() {
    let mut game = Game::with_deck(
        "Alice",
        deck_from_draws(&[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 5),    // dealer
            card(Suit::Diamonds, 9), // player
            card(Suit::Spades, 7),   // dealer
            card(Suit::Hearts, 6),   // player hit, busting at 25
        ]),
    );

    game.deal().unwrap();
    game.hit().unwrap();

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);

    let summary = game.outcome().unwrap();
    assert_eq!(summary.outcome, RoundOutcome::DealerWin);
    assert!(summary.player_bust);
    assert_eq!(summary.player_score, 25);
    assert_eq!(summary.dealer_score, 12);
}

#[test]
fn wrong_state_calls_are_rejected() {
    let mut game = Game::with_deck("Alice", Deck::standard());

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.outcome().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn deal_requires_four_cards() {
    let mut game = Game::with_deck(
        "Alice",
        deck_from_draws(&[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ]),
    );

    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = Game::with_deck(
        "Alice",
        deck_from_draws(&[
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 5),
        ]),
    );

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.hit().unwrap_err(), ActionError::DeckExhausted);
}

#[test]
fn seeded_games_replay_identically() {
    let mut game_a = Game::new("Alice", 9);
    let mut game_b = Game::new("Alice", 9);

    game_a.deal().unwrap();
    game_b.deal().unwrap();

    assert_eq!(game_a.player().hand().cards(), game_b.player().hand().cards());
    assert_eq!(game_a.dealer().hand().cards(), game_b.dealer().hand().cards());
}

#[test]
fn decision_tokens_parse_case_insensitively() {
    assert_eq!(Decision::parse("s"), Some(Decision::Hit));
    assert_eq!(Decision::parse("S"), Some(Decision::Hit));
    assert_eq!(Decision::parse("n"), Some(Decision::Stand));
    assert_eq!(Decision::parse("N"), Some(Decision::Stand));

    // Anything else is a re-ask, not an error.
    assert_eq!(Decision::parse(""), None);
    assert_eq!(Decision::parse("x"), None);
    assert_eq!(Decision::parse("si"), None);
    assert_eq!(Decision::parse("yes"), None);
}
