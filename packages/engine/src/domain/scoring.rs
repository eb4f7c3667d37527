//! Round scoring and end-of-game winner computation.

use super::state::{Game, Player, PlayerId};

/// Apply the exact-bid bonus to one player: `bet == wins` adds
/// `10 + bet` to the running score, anything else leaves it unchanged.
/// Missing a bid carries no penalty in this ruleset.
///
/// Not idempotent: callers score a round exactly once and then reset
/// `bet`/`wins` via `lifecycle::end_round`.
pub fn calc_score(player: &mut Player) {
    if let Some(bet) = player.bet {
        if bet == player.wins {
            player.score += 10 + bet as i32;
        }
    }
}

/// Score every player of the current round.
pub fn calc_scores(game: &mut Game) {
    for player in &mut game.players {
        calc_score(player);
    }
}

/// All players tied at the maximal score. Multi-way ties are returned
/// in seating-arena order; deterministic given final scores.
pub fn game_winners(game: &Game) -> Vec<PlayerId> {
    let Some(top) = game.players.iter().map(|p| p.score).max() else {
        return Vec::new();
    };
    game.players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.score == top)
        .map(|(idx, _)| idx as PlayerId)
        .collect()
}
