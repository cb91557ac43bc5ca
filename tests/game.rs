//! Game integration tests.

use std::collections::HashMap;

use bjlive::{
    Action, ActionError, Card, DECK_SIZE, Deck, DrawError, Engine, GameOptions, GameState,
    Hand, Outcome, Session, StandError, Suit, Winner, hand_value, visible_cards,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Deals player [10, 9] and dealer [10, 6], followed by `rest`.
fn rigged_session(rest: &[Card]) -> Session {
    let mut draws = vec![
        card(Suit::Hearts, 10),   // player
        card(Suit::Clubs, 9),     // player
        card(Suit::Diamonds, 10), // dealer up
        card(Suit::Spades, 6),    // dealer hole
    ];
    draws.extend_from_slice(rest);
    Session::deal(Deck::from_cards(draws), GameOptions::default())
}

#[test]
fn hand_value_rules() {
    assert_eq!(hand_value(&[]), 0);
    assert_eq!(
        hand_value(&[card(Suit::Hearts, 1), card(Suit::Spades, 1)]),
        12
    );
    assert_eq!(
        hand_value(&[
            card(Suit::Hearts, 1),
            card(Suit::Spades, 1),
            card(Suit::Clubs, 1),
        ]),
        13
    );
    assert_eq!(
        hand_value(&[card(Suit::Hearts, 12), card(Suit::Spades, 13)]),
        20
    );
    assert_eq!(
        hand_value(&[
            card(Suit::Hearts, 1),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 5),
        ]),
        15
    );
}

#[test]
fn long_ace_hands_are_not_truncated() {
    let aces: Hand = Suit::ALL
        .into_iter()
        .cycle()
        .take(24)
        .map(|suit| card(suit, 1))
        .collect();
    assert_eq!(aces.value(), 24);
    assert!(aces.is_bust());
    assert!(!aces.is_soft());
}

#[test]
fn card_display_uses_rank_labels() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "A of Hearts");
    assert_eq!(card(Suit::Clubs, 10).to_string(), "10 of Clubs");
    assert_eq!(card(Suit::Spades, 12).to_string(), "Q of Spades");
}

#[test]
fn single_deck_has_every_card_once() {
    let mut engine = Engine::new(GameOptions::default(), 3);
    let mut deck = engine.shuffled_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    while let Ok(drawn) = deck.draw() {
        *counts.entry(drawn).or_default() += 1;
    }

    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 1));
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn six_deck_shoe_has_every_card_six_times() {
    let mut engine = Engine::new(GameOptions::default().with_decks(6), 9);
    let mut deck = engine.shuffled_deck();
    assert_eq!(deck.len(), 6 * DECK_SIZE);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    for _ in 0..6 * DECK_SIZE {
        *counts.entry(deck.draw().unwrap()).or_default() += 1;
    }

    assert!(deck.is_empty());
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 6));
}

#[test]
fn shuffle_permutes_the_shoe() {
    let mut engine = Engine::new(GameOptions::default(), 42);
    assert_ne!(engine.shuffled_deck(), Deck::ordered(1));
}

#[test]
fn same_seed_deals_same_round() {
    let first = Engine::new(GameOptions::default(), 7).new_session();
    let second = Engine::new(GameOptions::default(), 7).new_session();
    assert_eq!(first.player_hand(), second.player_hand());
    assert_eq!(first.dealer_hand(), second.dealer_hand());
}

#[test]
fn initialize_deals_two_cards_each() {
    let mut engine = Engine::new(GameOptions::default(), 1);
    let session = engine.new_session();

    assert_eq!(session.state(), GameState::PlayerTurn);
    assert_eq!(session.player_hand().len(), 2);
    assert_eq!(session.dealer_hand().len(), 2);
    assert_eq!(session.cards_remaining(), DECK_SIZE - 4);
    assert!(!session.is_dealer_revealed());
}

#[test]
fn initialize_discards_previous_round() {
    let mut engine = Engine::new(GameOptions::default(), 1);
    let mut session = engine.new_session();
    session.hit().unwrap();
    session.reveal_dealer_hand();

    engine.initialize(&mut session);
    assert_eq!(session.player_hand().len(), 2);
    assert_eq!(session.cards_remaining(), DECK_SIZE - 4);
    assert!(!session.is_dealer_revealed());
}

#[test]
fn short_deck_leaves_hands_short() {
    let session = Session::deal(
        Deck::from_cards([card(Suit::Hearts, 5), card(Suit::Clubs, 7), card(Suit::Spades, 2)]),
        GameOptions::default(),
    );
    assert_eq!(session.player_hand().len(), 2);
    assert_eq!(session.dealer_hand().len(), 1);
    assert_eq!(session.visible_dealer_hand().len(), 1);

    let empty = Session::deal(Deck::empty(), GameOptions::default());
    assert_eq!(empty.state(), GameState::Idle);
    assert!(empty.player_hand().is_empty());
    assert!(empty.visible_dealer_hand().is_empty());
    assert!(!empty.is_game_over());
}

#[test]
fn zero_decks_deals_nothing() {
    let mut engine = Engine::new(GameOptions::default().with_decks(0), 1);
    let session = engine.new_session();
    assert_eq!(session.state(), GameState::Idle);
    assert_eq!(session.cards_remaining(), 0);
}

#[test]
fn draw_card_takes_from_the_front() {
    let mut session = rigged_session(&[card(Suit::Hearts, 5), card(Suit::Clubs, 8)]);
    assert_eq!(session.draw_card().unwrap(), card(Suit::Hearts, 5));
    assert_eq!(session.draw_card().unwrap(), card(Suit::Clubs, 8));
    assert_eq!(session.draw_card().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(session.player_hand().len(), 2);
}

#[test]
fn visible_dealer_hand_hides_hole_card_until_reveal() {
    let mut session = rigged_session(&[]);
    assert_eq!(session.visible_dealer_hand(), &[card(Suit::Diamonds, 10)]);
    assert_eq!(session.visible_dealer_value(), 10);

    session.reveal_dealer_hand();
    session.reveal_dealer_hand();
    assert_eq!(session.visible_dealer_hand(), session.dealer_hand());
    assert_eq!(session.visible_dealer_hand().len(), 2);
}

#[test]
fn visible_cards_projection() {
    let cards = [card(Suit::Hearts, 4), card(Suit::Clubs, 7)];
    assert_eq!(visible_cards(&cards, false), &cards[..1]);
    assert_eq!(visible_cards(&cards, true), &cards[..]);
    assert!(visible_cards(&[], false).is_empty());
}

#[test]
fn dealer_draws_to_twenty_one_and_wins_tie_break() {
    let mut session = rigged_session(&[card(Suit::Hearts, 5)]);
    assert!(!session.is_game_over());

    let result = session.player_stands("alice").unwrap();
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.dealer_draws, vec![card(Suit::Hearts, 5)]);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.winner(), Winner::Dealer);
    assert_eq!(session.state(), GameState::RoundOver);
    assert!(session.is_dealer_revealed());
}

#[test]
fn dealer_bust_means_player_wins() {
    let mut session = rigged_session(&[card(Suit::Spades, 13)]);
    let result = session.player_stands("alice").unwrap();
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome, Outcome::DealerBusts);
    assert_eq!(result.winner(), Winner::Player);
    assert_eq!(result.outcome.to_string(), "Dealer busts! Player wins.");
}

#[test]
fn dealer_stops_once_seventeen_is_reached() {
    let mut session = rigged_session(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 4),
    ]);
    let result = session.player_stands("alice").unwrap();
    // 16 + 2 = 18, no further draws.
    assert_eq!(result.dealer_draws.len(), 1);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(session.cards_remaining(), 2);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn ace_drawn_on_sixteen_counts_as_one() {
    let mut session = rigged_session(&[card(Suit::Hearts, 1), card(Suit::Clubs, 2)]);
    let result = session.player_stands("alice").unwrap();
    // 16 + A = 17 hard, stop.
    assert_eq!(result.dealer_draws, vec![card(Suit::Hearts, 1)]);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn dealer_draws_one_card_at_a_time() {
    let mut session = Session::deal(
        Deck::from_cards([
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 8),    // player
            card(Suit::Diamonds, 2), // dealer up
            card(Suit::Spades, 3),   // dealer hole
            card(Suit::Hearts, 4),   // 9
            card(Suit::Clubs, 5),    // 14
            card(Suit::Spades, 2),   // 16
            card(Suit::Diamonds, 3), // 19
            card(Suit::Hearts, 9),
        ]),
        GameOptions::default(),
    );
    let result = session.player_stands("alice").unwrap();
    assert_eq!(result.dealer_draws.len(), 4);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(session.cards_remaining(), 1);
    assert_eq!(result.outcome, Outcome::DealerWins);
}

#[test]
fn player_wins_when_dealer_stands_lower() {
    let mut session = Session::deal(
        Deck::from_cards([
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 1),
            card(Suit::Diamonds, 10),
            card(Suit::Spades, 7),
        ]),
        GameOptions::default(),
    );
    let result = session.player_stands("bob").unwrap();
    assert!(result.dealer_draws.is_empty());
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn soft_seventeen_rule() {
    let draws = [
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 8),
        card(Suit::Diamonds, 1),
        card(Suit::Spades, 6),
        card(Suit::Hearts, 3),
    ];

    let mut stands = Session::deal(Deck::from_cards(draws), GameOptions::default());
    let result = stands.player_stands("alice").unwrap();
    assert!(result.dealer_draws.is_empty());
    assert_eq!(result.dealer_value, 17);

    let options = GameOptions::default().with_stand_on_soft_17(false);
    let mut hits = Session::deal(Deck::from_cards(draws), options);
    let result = hits.player_stands("alice").unwrap();
    assert_eq!(result.dealer_draws, vec![card(Suit::Hearts, 3)]);
    assert_eq!(result.dealer_value, 20);
}

#[test]
fn busted_player_still_faces_dealer_play() {
    let mut session = rigged_session(&[card(Suit::Hearts, 5), card(Suit::Clubs, 13)]);
    session.hit().unwrap();
    assert_eq!(session.player_value(), 24);
    assert!(session.is_game_over());

    let result = session.player_stands("alice").unwrap();
    assert_eq!(result.player_value, 24);
    assert_eq!(result.dealer_draws, vec![card(Suit::Clubs, 13)]);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.outcome, Outcome::DealerBusts);
    assert_eq!(result.winner(), Winner::Player);
    assert_eq!(result.events[1].action.to_string(), "Dealer busts! Player wins.");
}

#[test]
fn busted_player_loses_immediately_when_enabled() {
    let options = GameOptions::default().with_player_bust_loses_immediately(true);
    let mut session = Session::deal(
        Deck::from_cards([
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 10),
            card(Suit::Spades, 6),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 13),
        ]),
        options,
    );
    session.hit().unwrap();

    let result = session.player_stands("alice").unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBusts);
    assert_eq!(result.winner(), Winner::Dealer);
    assert!(result.dealer_draws.is_empty());
    assert_eq!(result.dealer_value, 16);
    assert_eq!(session.cards_remaining(), 1);
    assert_eq!(session.state(), GameState::RoundOver);
}

#[test]
fn stand_records_events_in_order() {
    let mut session = rigged_session(&[card(Suit::Hearts, 5)]);
    let result = session.player_stands("alice").unwrap();

    assert_eq!(result.events.len(), 2);
    assert_eq!(result.events[0].actor, "alice");
    assert_eq!(result.events[0].action, Action::Stands);
    assert_eq!(result.events[0].action.to_string(), "stands");
    assert_eq!(result.events[1].actor, "Dealer");
    assert_eq!(result.events[1].action, Action::Resolved(Outcome::DealerWins));
    assert_eq!(result.events[1].action.to_string(), "Dealer wins.");
}

#[test]
fn stand_is_one_shot() {
    let mut session = rigged_session(&[card(Suit::Hearts, 5)]);
    session.player_stands("alice").unwrap();
    assert_eq!(
        session.player_stands("alice").unwrap_err(),
        StandError::InvalidState
    );
    assert_eq!(session.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn stand_before_deal_is_rejected() {
    let mut session = Session::default();
    assert_eq!(
        session.player_stands("alice").unwrap_err(),
        StandError::InvalidState
    );
}

#[test]
fn empty_shoe_during_dealer_turn_fails() {
    let mut session = rigged_session(&[]);
    assert_eq!(
        session.player_stands("alice").unwrap_err(),
        StandError::NoCards
    );
    assert_eq!(session.state(), GameState::DealerTurn);
    assert!(session.is_dealer_revealed());

    // The stand was already announced and survives the failure.
    assert_eq!(session.round_events().len(), 1);
    assert_eq!(session.round_events()[0].actor, "alice");
    assert_eq!(session.round_events()[0].action, Action::Stands);

    // Retrying resumes the dealer's turn instead of rejecting the state.
    assert_eq!(
        session.player_stands("alice").unwrap_err(),
        StandError::NoCards
    );
    assert_eq!(session.round_events().len(), 1);
    assert_eq!(session.state(), GameState::DealerTurn);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut session = rigged_session(&[]);
    assert_eq!(session.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(session.player_hand().len(), 2);
}

#[test]
fn game_over_checks() {
    let fresh = rigged_session(&[]);
    assert!(!fresh.is_game_over());

    let natural = Session::deal(
        Deck::from_cards([
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 10),
            card(Suit::Spades, 6),
        ]),
        GameOptions::default(),
    );
    assert_eq!(natural.player_value(), 21);
    assert!(natural.is_game_over());

    let dealer_natural = Session::deal(
        Deck::from_cards([
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 1),
            card(Suit::Spades, 12),
        ]),
        GameOptions::default(),
    );
    assert!(dealer_natural.is_game_over());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(4)
        .with_stand_on_soft_17(false);

    assert_eq!(options.decks, 4);
    assert!(!options.stand_on_soft_17);
    assert!(options.dealer_draws(16, false));
    assert!(options.dealer_draws(17, true));
    assert!(!options.dealer_draws(17, false));
    assert!(!GameOptions::default().dealer_draws(17, true));
    assert!(!GameOptions::default().player_bust_loses_immediately);
}

#[test]
fn hand_helpers() {
    let natural: Hand = [card(Suit::Hearts, 1), card(Suit::Clubs, 12)]
        .into_iter()
        .collect();
    assert!(natural.is_blackjack());
    assert!(natural.is_twenty_one());
    assert!(natural.is_soft());
    assert!(!natural.is_bust());

    let mut three: Hand = [card(Suit::Hearts, 7), card(Suit::Clubs, 7)]
        .into_iter()
        .collect();
    three.add_card(card(Suit::Spades, 7));
    assert!(three.is_twenty_one());
    assert!(!three.is_blackjack());

    three.clear();
    assert!(three.is_empty());
    assert_eq!(three.value(), 0);
}
