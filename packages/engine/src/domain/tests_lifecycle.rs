use std::collections::HashSet;

use crate::domain::cards_types::Card;
use crate::domain::lifecycle::{
    add_player, check_round_complete, end_game, rotate_dealer, start_new_round,
};
use crate::domain::state::{Game, RoundPhase};
use crate::domain::test_state_helpers::play_round_through;
use crate::errors::domain::DomainError;

fn game_with_players(n: usize, number_of_rounds: u8) -> Game {
    let mut game = Game::new(1, number_of_rounds, 42).unwrap();
    for i in 0..n {
        add_player(&mut game, 100 + i as i64).unwrap();
    }
    game
}

#[test]
fn players_seat_in_join_order() {
    let mut game = Game::new(1, 3, 42).unwrap();
    let p0 = add_player(&mut game, 100).unwrap();
    let p1 = add_player(&mut game, 101).unwrap();
    assert_eq!((p0, p1), (0, 1));
    assert_eq!(game.seating, vec![0, 1]);
}

#[test]
fn duplicate_user_rejected() {
    let mut game = Game::new(1, 3, 42).unwrap();
    add_player(&mut game, 100).unwrap();
    assert!(matches!(
        add_player(&mut game, 100),
        Err(DomainError::Validation(_))
    ));
}

#[test]
fn no_seating_once_in_play() {
    let mut game = game_with_players(3, 3);
    start_new_round(&mut game).unwrap();
    assert!(matches!(
        add_player(&mut game, 999),
        Err(DomainError::PrematureOperation(_))
    ));
}

#[test]
fn rotate_dealer_shifts_every_position_by_one() {
    let mut game = game_with_players(3, 3);
    assert_eq!(game.seating, vec![0, 1, 2]);
    rotate_dealer(&mut game).unwrap();
    assert_eq!(game.seating, vec![1, 2, 0]);
    rotate_dealer(&mut game).unwrap();
    rotate_dealer(&mut game).unwrap();
    assert_eq!(game.seating, vec![0, 1, 2]);
}

#[test]
fn deal_gives_each_player_round_number_cards() {
    let mut game = game_with_players(3, 5);
    start_new_round(&mut game).unwrap();

    let round = game.cur_round().unwrap();
    assert_eq!(round.number, 5);
    assert_eq!(round.phase, RoundPhase::Betting);
    for player in &game.players {
        assert_eq!(player.hand.len(), 5);
    }

    // Trump is set and held by nobody; nothing duplicated or lost.
    let trump = round.trump.expect("trump turned up");
    let mut seen: HashSet<Card> = HashSet::new();
    for player in &game.players {
        seen.extend(player.hand.iter().copied());
    }
    assert!(!seen.contains(&trump));
    seen.insert(trump);
    seen.extend(round.deck.iter().copied());
    assert_eq!(seen.len(), 52);
    assert_eq!(round.deck.len(), 52 - 3 * 5 - 1);
}

#[test]
fn deal_is_reproducible_from_game_seed() {
    let mut a = game_with_players(3, 5);
    let mut b = game_with_players(3, 5);
    start_new_round(&mut a).unwrap();
    start_new_round(&mut b).unwrap();
    for (pa, pb) in a.players.iter().zip(&b.players) {
        assert_eq!(pa.hand, pb.hand);
    }
    assert_eq!(
        a.cur_round().unwrap().trump,
        b.cur_round().unwrap().trump
    );
}

#[test]
fn too_many_rounds_for_table_rejected() {
    // 3 players cannot deal 18-card hands from one deck.
    let mut game = game_with_players(3, 18);
    assert!(matches!(
        start_new_round(&mut game),
        Err(DomainError::Validation(_))
    ));
    let mut game = Game::new(1, 3, 42).unwrap();
    add_player(&mut game, 100).unwrap();
    assert!(matches!(
        start_new_round(&mut game),
        Err(DomainError::Validation(_))
    ));
}

#[test]
fn rounds_count_down_and_rotate_dealer() {
    let mut game = game_with_players(3, 3);

    start_new_round(&mut game).unwrap();
    assert_eq!(game.cur_round().unwrap().number, 3);
    assert_eq!(game.cur_round().unwrap().dealer, 0);
    play_round_through(&mut game);

    start_new_round(&mut game).unwrap();
    assert_eq!(game.cur_round().unwrap().number, 2);
    assert_eq!(game.cur_round().unwrap().dealer, 1);
    play_round_through(&mut game);

    start_new_round(&mut game).unwrap();
    assert_eq!(game.cur_round().unwrap().number, 1);
    assert_eq!(game.cur_round().unwrap().dealer, 2);
    play_round_through(&mut game);

    assert!(check_round_complete(&game));
    assert!(matches!(
        start_new_round(&mut game),
        Err(DomainError::PrematureOperation(_))
    ));
    assert_eq!(game.rounds.len(), 3);
}

#[test]
fn new_round_requires_previous_round_finished() {
    let mut game = game_with_players(3, 3);
    start_new_round(&mut game).unwrap();
    assert!(!check_round_complete(&game));
    assert!(matches!(
        start_new_round(&mut game),
        Err(DomainError::PrematureOperation(_))
    ));
}

#[test]
fn end_game_returns_score_leaders() {
    let mut game = game_with_players(3, 2);
    game.players[0].score = 20;
    game.players[1].score = 20;
    game.players[2].score = 15;
    assert_eq!(end_game(&game), vec![0, 1]);
}
