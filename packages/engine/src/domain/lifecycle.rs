//! Game lifecycle: seating, dealer rotation, round start and end.

use tracing::{debug, info};

use super::dealing::shuffled_deck;
use super::scoring;
use super::seed_derivation::derive_dealing_seed;
use super::state::{Game, Player, PlayerId, Round, RoundPhase};
use crate::errors::domain::DomainError;

/// Seat a new player. Players join only before the first deal; the
/// returned id is their stable arena index, and their initial bet and
/// play positions are one past the previous last player's.
pub fn add_player(game: &mut Game, user_id: i64) -> Result<PlayerId, DomainError> {
    if game.in_play() {
        return Err(DomainError::premature("game already in play"));
    }
    if game.players.iter().any(|p| p.user_id == user_id) {
        return Err(DomainError::validation(format!(
            "user {user_id} already seated"
        )));
    }
    let player_id = game.players.len() as PlayerId;
    game.players.push(Player::new(user_id));
    game.seating.push(player_id);
    info!(game_id = game.game_id, player_id, user_id, "player seated");
    Ok(player_id)
}

/// Left-rotate the seating by one so the next player becomes position
/// 0 (the next round's dealer). Called once per round transition by
/// `start_new_round`, never mid-round.
pub fn rotate_dealer(game: &mut Game) -> Result<&[PlayerId], DomainError> {
    if game.seating.is_empty() {
        return Err(DomainError::validation("no players to rotate"));
    }
    game.seating.rotate_left(1);
    Ok(&game.seating)
}

/// True iff no player holds any card, i.e. every trick of the current
/// round has been played. Vacuously true before the first deal.
pub fn check_round_complete(game: &Game) -> bool {
    game.players.iter().map(|p| p.hand.len()).sum::<usize>() == 0
}

/// Score the finished round and reset per-round player state (bet
/// unset, wins zero) ready for the next deal.
pub fn end_round(game: &mut Game) -> Result<(), DomainError> {
    let round = game.require_cur_round()?;
    if round.phase == RoundPhase::Scored {
        return Err(DomainError::premature("round already scored"));
    }
    if !check_round_complete(game) {
        return Err(DomainError::premature("round still has cards in play"));
    }

    scoring::calc_scores(game);
    for player in &mut game.players {
        player.bet = None;
        player.wins = 0;
    }
    let round = game.rounds.last_mut().expect("checked above");
    round.phase = RoundPhase::Scored;
    info!(
        game_id = game.game_id,
        round = round.number,
        "round scored"
    );
    Ok(())
}

/// Start the next round: the first round uses the configured round
/// count and the current seating; later rounds rotate the dealer first
/// and count down by one. Deals a fresh shuffled deck (`number` cards
/// each, next card turned up as trump) and leaves the round in the
/// betting phase.
pub fn start_new_round(game: &mut Game) -> Result<u8, DomainError> {
    game.ensure_dealable()?;

    let number = match game.cur_round() {
        None => game.number_of_rounds,
        Some(prev) => {
            if prev.phase != RoundPhase::Scored {
                return Err(DomainError::premature(
                    "previous round not finished; call end_round first",
                ));
            }
            if prev.number == 1 {
                return Err(DomainError::premature("all rounds complete"));
            }
            let next = prev.number - 1;
            rotate_dealer(game)?;
            next
        }
    };

    let mut round = Round::new(number, game.seating.clone());
    deal_cards(game, &mut round)?;
    info!(
        game_id = game.game_id,
        round = number,
        dealer = round.dealer,
        trump = %round.trump.expect("set by deal_cards"),
        "round dealt"
    );
    game.rounds.push(round);
    Ok(number)
}

/// Deal `round.number` cards to each player from a freshly shuffled
/// deck, then turn up the trump card. The remainder stays on the round,
/// unused for play.
fn deal_cards(game: &mut Game, round: &mut Round) -> Result<(), DomainError> {
    let seed = derive_dealing_seed(game.rng_seed, round.number);
    let mut deck = shuffled_deck(seed);

    let per_hand = round.cards_dealt() as usize;
    for &player_id in &round.bet_order {
        let player = game.player_mut(player_id)?;
        player.hand = deck.split_off(deck.len() - per_hand);
        // Suit-then-rank order for stable display; irrelevant to play.
        player.hand.sort();
        debug!(
            game_id = game.game_id,
            player_id,
            cards = round.number,
            "hand dealt"
        );
    }
    round.trump = deck.pop();
    round.deck = deck;
    round.phase = RoundPhase::Betting;
    Ok(())
}

/// Final standings: every player tied at the maximal score (multi-way
/// ties supported). Meaningful once round 1 has been scored.
pub fn end_game(game: &Game) -> Vec<PlayerId> {
    scoring::game_winners(game)
}
