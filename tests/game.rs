//! Game integration tests.

use bjsolo::{
    AbandonPolicy, ActionAvailability, ActionError, BetError, Card, DealError, Deck, EmptyDeckError,
    Event, Game, GameOptions, GameState, HandOutcome, HandStatus, Rank, RoundingMode, Seat, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that yields `draws` in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn game_with(balance: usize, bet: usize, draws: &[Card]) -> Game {
    game_with_options(GameOptions::default(), balance, bet, draws)
}

fn game_with_options(options: GameOptions, balance: usize, bet: usize, draws: &[Card]) -> Game {
    let mut game = Game::new(options, balance, 1);
    game.place_bet(bet).unwrap();
    game.start_round_with_deck(deck_from_draws(draws)).unwrap();
    game
}

#[test]
fn hit_while_betting_is_rejected_without_side_effects() {
    let mut game = Game::new(GameOptions::default(), 100, 1);
    game.place_bet(10).unwrap();
    game.drain_events();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidTransition);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidTransition);
    assert_eq!(game.double().unwrap_err(), ActionError::InvalidTransition);
    assert_eq!(game.split().unwrap_err(), ActionError::InvalidTransition);

    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.balance(), 90);
    assert_eq!(game.wager(), 10);
    assert_eq!(game.pending_events(), 0);
    assert!(game.round().is_none());
}

#[test]
fn bet_errors() {
    let mut game = Game::new(GameOptions::default(), 10, 1);

    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.place_bet(11).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(game.balance(), 10);
    assert_eq!(game.wager(), 0);

    game.place_bet(4).unwrap();
    game.place_bet(6).unwrap();
    assert_eq!(game.wager(), 10);
    assert_eq!(game.balance(), 0);
    assert_eq!(game.place_bet(1).unwrap_err(), BetError::InsufficientFunds);
}

#[test]
fn bets_accumulate_and_clear() {
    let mut game = Game::new(GameOptions::default(), 100, 1);
    game.place_bet(10).unwrap();
    game.place_bet(15).unwrap();
    assert_eq!(game.wager(), 25);
    assert_eq!(game.balance(), 75);

    assert_eq!(game.clear_bet().unwrap(), 25);
    assert_eq!(game.wager(), 0);
    assert_eq!(game.balance(), 100);
    assert_eq!(game.state(), GameState::Betting);
}

#[test]
fn betting_is_closed_during_a_round() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Ten),
        ],
    );

    assert_eq!(game.place_bet(5).unwrap_err(), BetError::InvalidTransition);
    assert_eq!(game.clear_bet().unwrap_err(), BetError::InvalidTransition);
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidTransition);
    assert_eq!(game.wager(), 10);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default(), 100, 1);
    assert_eq!(game.start_round().unwrap_err(), DealError::NoBet);

    game.place_bet(10).unwrap();
    let short = deck_from_draws(&[
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    assert_eq!(
        game.start_round_with_deck(short).unwrap_err(),
        DealError::EmptyDeck(EmptyDeckError)
    );

    // The aborted round refunds the bet.
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.balance(), 100);
    assert_eq!(game.wager(), 0);
    assert!(game.round().is_none());
}

#[test]
fn opening_deal_order_and_hole_card() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Ten),
        ],
    );

    assert_eq!(game.state(), GameState::PlayerTurn { hand_index: 0 });
    assert_eq!(game.hands()[0].value(), 18);

    let dealer = game.dealer_hand().unwrap();
    assert_eq!(dealer.len(), 2);
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 6);

    let dealt: Vec<(Seat, Card, bool)> = game
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            Event::CardDealt {
                card,
                seat,
                face_down,
                ..
            } => Some((seat, card, face_down)),
            _ => None,
        })
        .collect();
    assert_eq!(
        dealt,
        vec![
            (Seat::Player, card(Suit::Hearts, Rank::Ten), false),
            (Seat::Dealer, card(Suit::Clubs, Rank::Six), false),
            (Seat::Player, card(Suit::Diamonds, Rank::Eight), false),
            (Seat::Dealer, card(Suit::Spades, Rank::Ten), true),
        ]
    );
}

#[test]
fn dealer_busts_after_player_stands() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Six),     // dealer up
            card(Suit::Diamonds, Rank::Eight), // player
            card(Suit::Spades, Rank::Ten),    // dealer hole
            card(Suit::Hearts, Rank::Seven),  // dealer draw
        ],
    );
    game.drain_events();

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::Settled);

    let result = game.last_result().unwrap().clone();
    assert_eq!(result.dealer_value, 23);
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].outcome, HandOutcome::DealerBust);
    assert_eq!(result.hands[0].outcome.message(), "Dealer Busts! You Win!");
    assert_eq!(result.hands[0].payout, 20);
    assert_eq!(result.net, 10);
    assert_eq!(game.balance(), 110);
    assert_eq!(game.wager(), 0);

    let events = game.drain_events();
    let reveal = events
        .iter()
        .position(|event| {
            *event
                == Event::HoleCardRevealed {
                    card: card(Suit::Spades, Rank::Ten),
                }
        })
        .unwrap();
    let draw = events
        .iter()
        .position(|event| {
            matches!(
                event,
                Event::CardDealt {
                    seat: Seat::Dealer,
                    ..
                }
            )
        })
        .unwrap();
    assert!(reveal < draw);
    assert!(events.contains(&Event::StateChanged {
        state: GameState::DealerTurn
    }));
    assert_eq!(
        events.last(),
        Some(&Event::BalanceChanged {
            balance: 110,
            wager: 0
        })
    );
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Six),
        ],
    );

    game.stand().unwrap();
    let dealer = game.dealer_hand().unwrap();
    assert_eq!(dealer.len(), 2);
    assert_eq!(dealer.value(), 17);
    assert!(dealer.is_soft());

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].outcome.message(), "You Win!");
    assert_eq!(game.balance(), 110);
}

#[test]
fn lower_total_loses_and_tie_pushes() {
    let mut lose = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::King),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    lose.stand().unwrap();
    let outcome = lose.last_result().unwrap().hands[0].outcome;
    assert_eq!(outcome, HandOutcome::Lose);
    assert_eq!(outcome.message(), "Dealer Wins!");
    assert_eq!(lose.balance(), 90);

    let mut push = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::King),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    push.stand().unwrap();
    let outcome = push.last_result().unwrap().hands[0].outcome;
    assert_eq!(outcome, HandOutcome::Push);
    assert_eq!(outcome.message(), "Push - It's a Tie!");
    assert_eq!(push.balance(), 100);
}

#[test]
fn player_bust_settles_without_dealer_draw() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Two), // dealer holds 12
            card(Suit::Hearts, Rank::King),
        ],
    );

    game.hit().unwrap();
    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.hands()[0].status(), HandStatus::Bust);

    let dealer = game.dealer_hand().unwrap();
    assert_eq!(dealer.len(), 2);
    assert!(dealer.is_hole_revealed());

    let outcome = game.last_result().unwrap().hands[0].outcome;
    assert_eq!(outcome, HandOutcome::Bust);
    assert_eq!(outcome.message(), "Bust! You Lose!");
    assert_eq!(game.balance(), 90);
}

#[test]
fn hitting_to_twenty_one_keeps_the_turn_open() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Ten),
        ],
    );

    game.hit().unwrap();
    assert_eq!(game.hands()[0].value(), 21);
    assert_eq!(game.state(), GameState::PlayerTurn { hand_index: 0 });

    game.stand().unwrap();
    assert_eq!(game.last_result().unwrap().hands[0].outcome, HandOutcome::Win);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Spades, Rank::Ten),
        ],
    );

    assert_eq!(game.state(), GameState::Settled);
    assert!(game.dealer_hand().unwrap().is_hole_revealed());

    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_value, 20);
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].outcome.message(), "Blackjack! You Win!");
    assert_eq!(result.hands[0].payout, 25);
    assert_eq!(game.balance(), 115);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidTransition);
}

#[test]
fn blackjack_against_dealer_blackjack_pushes() {
    let game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Spades, Rank::King),
        ],
    );

    let result = game.last_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.hands[0].payout, 10);
    assert_eq!(game.balance(), 100);
}

#[test]
fn blackjack_rounding_on_odd_wager() {
    let draws = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::King),
        card(Suit::Spades, Rank::Nine),
    ];

    let down = game_with(100, 5, &draws);
    assert_eq!(down.last_result().unwrap().hands[0].payout, 12);
    assert_eq!(down.balance(), 107);

    let up = game_with_options(
        GameOptions::default().with_rounding_blackjack(RoundingMode::Up),
        100,
        5,
        &draws,
    );
    assert_eq!(up.last_result().unwrap().hands[0].payout, 13);

    let nearest = game_with_options(
        GameOptions::default().with_rounding_blackjack(RoundingMode::Nearest),
        100,
        5,
        &draws,
    );
    assert_eq!(nearest.last_result().unwrap().hands[0].payout, 13);
}

#[test]
fn double_down_doubles_wager_and_stands() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Ten), // double draw
        ],
    );

    let drawn = game.double().unwrap();
    assert_eq!(drawn, card(Suit::Hearts, Rank::Ten));
    assert_eq!(game.hands()[0].len(), 3);
    assert_eq!(game.state(), GameState::Settled);

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].bet, 20);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 40);
    assert_eq!(game.balance(), 120);
}

#[test]
fn double_down_rejections() {
    let mut three_cards = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Clubs, Rank::Four),
        ],
    );
    three_cards.hit().unwrap();
    assert_eq!(three_cards.double().unwrap_err(), ActionError::CannotDouble);

    let mut broke = game_with(
        10,
        10,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Seven),
        ],
    );
    assert_eq!(broke.double().unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(broke.balance(), 0);
    assert_eq!(broke.wager(), 10);
    assert_eq!(broke.hands()[0].len(), 2);
    assert_eq!(broke.state(), GameState::PlayerTurn { hand_index: 0 });
}

#[test]
fn split_eights_settle_independently() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Clubs, Rank::Ten),      // dealer up
            card(Suit::Diamonds, Rank::Eight), // player
            card(Suit::Spades, Rank::Seven),   // dealer hole
            card(Suit::Hearts, Rank::Three),   // split hand 0
            card(Suit::Spades, Rank::Ten),     // split hand 1
            card(Suit::Diamonds, Rank::Ten),   // hit hand 0
        ],
    );
    game.drain_events();

    game.split().unwrap();
    assert_eq!(game.balance(), 80);
    assert_eq!(game.ledger().wagers(), &[10, 10]);
    assert_eq!(game.hands().len(), 2);
    assert_eq!(game.hands()[0].value(), 11);
    assert_eq!(game.hands()[1].value(), 18);
    assert_eq!(game.state(), GameState::PlayerTurn { hand_index: 0 });
    assert!(game.drain_events().contains(&Event::HandSplit));

    game.hit().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn { hand_index: 1 });
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::Settled);

    let result = game.last_result().unwrap();
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].player_value, 21);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    assert_eq!(result.total_payout, 40);
    assert_eq!(game.balance(), 120);
}

#[test]
fn split_twenty_one_is_not_blackjack() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Queen), // K and Q split as equal tens
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Nine),
        ],
    );

    game.split().unwrap();
    assert_eq!(game.hands()[0].value(), 21);
    assert_eq!(game.hands()[0].status(), HandStatus::Active);
    assert_eq!(game.state(), GameState::PlayerTurn { hand_index: 0 });

    game.stand().unwrap();
    game.stand().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].payout, 20);
    assert_eq!(result.hands[1].outcome, HandOutcome::Lose);
    assert_eq!(game.balance(), 100);
}

#[test]
fn split_rejections() {
    let mut not_pair = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Spades, Rank::Seven),
        ],
    );
    assert_eq!(not_pair.split().unwrap_err(), ActionError::CannotSplit);

    let mut twice = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Spades, Rank::Eight), // hand 0 is a pair again
            card(Suit::Clubs, Rank::Two),
        ],
    );
    twice.split().unwrap();
    assert!(twice.hands()[0].is_pair());
    assert_eq!(twice.split().unwrap_err(), ActionError::AlreadySplit);
    assert!(!twice.available_actions().split);

    let mut broke = game_with(
        10,
        10,
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Seven),
        ],
    );
    assert_eq!(broke.split().unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(broke.hands().len(), 1);
    assert_eq!(broke.balance(), 0);
    assert_eq!(broke.state(), GameState::PlayerTurn { hand_index: 0 });
}

#[test]
fn bust_on_first_split_hand_moves_to_second() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Hearts, Rank::King), // busts hand 0
        ],
    );

    game.split().unwrap();
    game.hit().unwrap();
    assert_eq!(game.hands()[0].status(), HandStatus::Bust);
    assert_eq!(game.state(), GameState::PlayerTurn { hand_index: 1 });

    game.stand().unwrap();
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Bust);
    assert_eq!(result.hands[1].outcome, HandOutcome::Win);
    assert_eq!(game.balance(), 100);
}

#[test]
fn both_split_hands_bust_without_dealer_draw() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Two), // dealer holds 12
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Six),
            card(Suit::Hearts, Rank::King),
            card(Suit::Diamonds, Rank::King),
        ],
    );

    game.split().unwrap();
    game.hit().unwrap();
    game.hit().unwrap();

    assert_eq!(game.state(), GameState::Settled);
    assert_eq!(game.dealer_hand().unwrap().len(), 2);
    assert_eq!(game.balance(), 80);
}

#[test]
fn empty_deck_mid_round_aborts_and_refunds() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Seven),
        ],
    );
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(game.state(), GameState::Betting);
    assert_eq!(game.balance(), 100);
    assert!(game.round().is_none());

    // Dealer needs a card after the player stands on 18 against 16.
    let mut dealer_short = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Ten),
        ],
    );
    assert_eq!(
        dealer_short.stand().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(dealer_short.state(), GameState::Betting);
    assert_eq!(dealer_short.balance(), 100);
}

#[test]
fn abandon_policy_controls_wagers() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Ten),
    ];

    let mut forfeit = game_with(100, 10, &draws);
    forfeit.clear_round();
    assert_eq!(forfeit.state(), GameState::Betting);
    assert_eq!(forfeit.balance(), 90);
    assert_eq!(forfeit.wager(), 0);
    assert!(forfeit.round().is_none());

    let mut refund = game_with_options(
        GameOptions::default().with_abandon_policy(AbandonPolicy::Refund),
        100,
        10,
        &draws,
    );
    refund.clear_round();
    assert_eq!(refund.balance(), 100);
    assert_eq!(refund.wager(), 0);
}

#[test]
fn next_bet_clears_a_settled_round() {
    let mut game = game_with(
        100,
        10,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Queen),
            card(Suit::Spades, Rank::Ten),
        ],
    );
    assert_eq!(game.state(), GameState::Settled);

    // A rejected bet leaves the settled round on the table.
    assert_eq!(game.place_bet(500).unwrap_err(), BetError::InsufficientFunds);
    assert!(game.round().is_some());

    game.place_bet(10).unwrap();
    assert_eq!(game.state(), GameState::Betting);
    assert!(game.round().is_none());
    assert!(game.hands().is_empty());
    assert_eq!(game.balance(), 105);
    assert_eq!(game.wager(), 10);
    assert!(game.last_result().is_some());
}

#[test]
fn seeded_rounds_are_reproducible() {
    let mut first = Game::new(GameOptions::default(), 100, 7);
    let mut second = Game::new(GameOptions::default(), 100, 7);

    for game in [&mut first, &mut second] {
        game.place_bet(10).unwrap();
        game.start_round().unwrap();
    }

    assert_eq!(first.hands(), second.hands());
    assert_eq!(first.dealer_hand(), second.dealer_hand());
    assert_eq!(first.cards_remaining(), 48);
}

#[test]
fn available_actions_follow_the_hand() {
    let mut game = Game::new(GameOptions::default(), 100, 1);
    assert_eq!(game.available_actions(), ActionAvailability::default());

    game.place_bet(10).unwrap();
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::Ace),
    ]))
    .unwrap();

    assert_eq!(
        game.available_actions(),
        ActionAvailability {
            hit: true,
            stand: true,
            double: true,
            split: true,
        }
    );

    game.hit().unwrap();
    assert_eq!(
        game.available_actions(),
        ActionAvailability {
            hit: true,
            stand: true,
            double: false,
            split: false,
        }
    );
}
