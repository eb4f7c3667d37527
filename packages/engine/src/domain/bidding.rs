//! Bid phase: legal ranges and bet placement.

use tracing::debug;

use super::game_context::GameContext;
use super::state::{expected_bidder, player_entry_mut, Game, PlayerId, RoundPhase};
use crate::errors::domain::DomainError;

/// Legal bid values for `player_id` in the current round: `0..=cards
/// dealt`, except that the last bidder may not land the bet sum exactly
/// on the cards dealt (the "hook" house rule), so that value is removed
/// from their range when it is reachable.
pub fn bet_range(game: &Game, player_id: PlayerId) -> Result<Vec<u8>, DomainError> {
    let round = game.require_cur_round()?;
    game.player(player_id)?;

    let cards_dealt = round.cards_dealt();
    let forbidden = if round.is_last_bidder(player_id) {
        cards_dealt.checked_sub(round.bet_sum)
    } else {
        None
    };
    Ok((0..=cards_dealt).filter(|b| Some(*b) != forbidden).collect())
}

/// Place a bet for the player in `ctx`.
///
/// Bets are taken strictly in bet order; a bet from any other player is
/// a sequencing error, not an invalid bet. When the last bet lands, the
/// round moves to the first trick.
pub fn place_bet(game: &mut Game, ctx: &GameContext, bet: u8) -> Result<(), DomainError> {
    ctx.ensure(game)?;
    let round = game.require_cur_round()?;
    if round.phase != RoundPhase::Betting {
        return Err(DomainError::premature(format!(
            "cannot bet in phase {:?}",
            round.phase
        )));
    }
    match expected_bidder(game) {
        Some(p) if p == ctx.player_id => {}
        other => {
            return Err(DomainError::premature(format!(
                "not player {}'s turn to bet (expected {other:?})",
                ctx.player_id
            )))
        }
    }

    let legal = bet_range(game, ctx.player_id)?;
    if !legal.contains(&bet) {
        return Err(DomainError::InvalidBet { legal });
    }

    let round = game.rounds.last_mut().expect("checked above");
    let player = player_entry_mut(&mut game.players, ctx.player_id)?;
    player.bet = Some(bet);
    round.bet_sum += bet;
    debug!(
        game_id = game.game_id,
        player_id = ctx.player_id,
        bet,
        bet_sum = round.bet_sum,
        "bet placed"
    );

    // Bet phase complete once every player in bet order has a set bet.
    if expected_bidder(game).is_none() {
        let round = game.rounds.last_mut().expect("checked above");
        round.phase = RoundPhase::Trick { trick_no: 1 };
        debug!(game_id = game.game_id, "bets complete, trick play begins");
    }
    Ok(())
}
