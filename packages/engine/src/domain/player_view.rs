//! Presentation snapshot of the current round from one player's
//! perspective.
//!
//! The caller re-derives a `PlayerView` after every mutating engine
//! call and renders it; the engine never renders anything itself.

use serde::Serialize;

use super::bidding::bet_range;
use super::cards_types::Card;
use super::game_context::GameContext;
use super::state::{expected_bidder, expected_player, Game, PlayerId, RoundPhase};
use super::tricks::playable_cards;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub player_id: PlayerId,
    pub user_id: i64,
    pub bet: Option<u8>,
    pub wins: u8,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub round_number: u8,
    pub phase: RoundPhase,
    pub trump: Option<Card>,
    /// This player's hand, sorted by suit then rank for stable display.
    pub hand: Vec<Card>,
    /// Legal bets, only while it is this player's turn to bid.
    pub legal_bets: Vec<u8>,
    /// Playable cards, only while it is this player's turn to play.
    pub playable: Vec<Card>,
    /// Cards in the open trick, in play order.
    pub table: Vec<(PlayerId, Card)>,
    /// Whose turn it is: next unset-bet player in bet order while
    /// betting, next player without a played card during a trick.
    pub turn: Option<PlayerId>,
    /// Scoreboard in bet order.
    pub scoreboard: Vec<ScoreRow>,
}

pub fn player_view(game: &Game, ctx: &GameContext) -> Result<PlayerView, DomainError> {
    ctx.ensure(game)?;
    let round = game.require_cur_round()?;

    let turn = match round.phase {
        RoundPhase::Betting => expected_bidder(game),
        RoundPhase::Trick { .. } => expected_player(game),
        _ => None,
    };
    let my_turn = turn == Some(ctx.player_id);

    let legal_bets = if my_turn && round.phase == RoundPhase::Betting {
        bet_range(game, ctx.player_id)?
    } else {
        Vec::new()
    };
    let playable = if my_turn && matches!(round.phase, RoundPhase::Trick { .. }) {
        playable_cards(game, ctx.player_id)?
    } else {
        Vec::new()
    };

    let mut hand = game.player(ctx.player_id)?.hand.clone();
    hand.sort();

    let scoreboard = round
        .bet_order
        .iter()
        .map(|&player_id| {
            let p = game.player(player_id)?;
            Ok(ScoreRow {
                player_id,
                user_id: p.user_id,
                bet: p.bet,
                wins: p.wins,
                score: p.score,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(PlayerView {
        round_number: round.number,
        phase: round.phase,
        trump: round.trump,
        hand,
        legal_bets,
        playable,
        table: round.table.clone(),
        turn,
        scoreboard,
    })
}
