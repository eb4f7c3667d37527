use crate::domain::bidding::{bet_range, place_bet};
use crate::domain::state::{expected_bidder, RoundPhase};
use crate::domain::test_state_helpers::{card, ctx, game_with_round};
use crate::errors::domain::DomainError;

#[test]
fn full_range_for_non_last_bidders() {
    let game = game_with_round(vec![vec![]; 3], 3, card("3S"), RoundPhase::Betting);
    assert_eq!(bet_range(&game, 0).unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(bet_range(&game, 1).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn hook_player_range_excludes_exact_match() {
    // 3 cards dealt, prior bets sum to 2: last bidder may not bet 1.
    let mut game = game_with_round(vec![vec![]; 3], 3, card("3S"), RoundPhase::Betting);
    let c0 = ctx(&game, 0);
    let c1 = ctx(&game, 1);
    let c2 = ctx(&game, 2);
    place_bet(&mut game, &c0, 1).unwrap();
    place_bet(&mut game, &c1, 1).unwrap();

    assert_eq!(bet_range(&game, 2).unwrap(), vec![0, 2, 3]);
    assert_eq!(
        place_bet(&mut game, &c2, 1),
        Err(DomainError::InvalidBet {
            legal: vec![0, 2, 3]
        })
    );
    // State untouched by the rejected bet
    assert_eq!(game.players[2].bet, None);
    assert_eq!(game.cur_round().unwrap().bet_sum, 2);

    place_bet(&mut game, &c2, 3).unwrap();
}

#[test]
fn hook_exclusion_skipped_when_bets_already_exceed_cards() {
    let mut game = game_with_round(vec![vec![]; 3], 2, card("3S"), RoundPhase::Betting);
    let c0 = ctx(&game, 0);
    let c1 = ctx(&game, 1);
    place_bet(&mut game, &c0, 2).unwrap();
    place_bet(&mut game, &c1, 2).unwrap();
    // Sum 4 > 2 cards dealt: no value can make the sum match, full range.
    assert_eq!(bet_range(&game, 2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn bets_out_of_range_rejected() {
    let mut game = game_with_round(vec![vec![]; 3], 3, card("3S"), RoundPhase::Betting);
    let c0 = ctx(&game, 0);
    assert!(matches!(
        place_bet(&mut game, &c0, 4),
        Err(DomainError::InvalidBet { .. })
    ));
}

#[test]
fn bets_taken_strictly_in_bet_order() {
    let mut game = game_with_round(vec![vec![]; 3], 3, card("3S"), RoundPhase::Betting);
    let c0 = ctx(&game, 0);
    let c1 = ctx(&game, 1);
    assert_eq!(expected_bidder(&game), Some(0));
    assert!(matches!(
        place_bet(&mut game, &c1, 0),
        Err(DomainError::PrematureOperation(_))
    ));
    place_bet(&mut game, &c0, 0).unwrap();
    assert_eq!(expected_bidder(&game), Some(1));
}

#[test]
fn bet_sum_tracks_placed_bets() {
    let mut game = game_with_round(vec![vec![]; 3], 3, card("3S"), RoundPhase::Betting);
    let c0 = ctx(&game, 0);
    let c1 = ctx(&game, 1);
    place_bet(&mut game, &c0, 2).unwrap();
    place_bet(&mut game, &c1, 3).unwrap();
    let round = game.cur_round().unwrap();
    assert_eq!(round.bet_sum, 5);
    let set: u8 = game.players.iter().filter_map(|p| p.bet).sum();
    assert_eq!(set, round.bet_sum);
}

#[test]
fn last_bet_moves_round_into_trick_play() {
    let mut game = game_with_round(vec![vec![]; 2], 2, card("3S"), RoundPhase::Betting);
    let c0 = ctx(&game, 0);
    let c1 = ctx(&game, 1);
    place_bet(&mut game, &c0, 0).unwrap();
    assert_eq!(game.cur_round().unwrap().phase, RoundPhase::Betting);
    place_bet(&mut game, &c1, 1).unwrap();
    assert_eq!(
        game.cur_round().unwrap().phase,
        RoundPhase::Trick { trick_no: 1 }
    );
    // Betting is closed now
    assert!(matches!(
        place_bet(&mut game, &c0, 0),
        Err(DomainError::PrematureOperation(_))
    ));
}
