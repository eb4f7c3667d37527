//! Trick play: playable-card derivation, card play, and trick
//! resolution.
//!
//! The caller drives the trick boundary explicitly: after every
//! successful `play_card` it checks `check_trick_complete` and, when
//! true, calls `start_new_trick`. The round never auto-resolves.

use tracing::debug;

use super::cards_logic::{card_beats, hand_has_suit};
use super::cards_types::Card;
use super::game_context::GameContext;
use super::state::{expected_player, player_entry_mut, Game, PlayerId, RoundPhase};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Cards the player may legally contribute to the open trick.
///
/// No lead card yet: the whole hand. Otherwise lead-suit cards; a hand
/// with no lead-suit cards may play trump; a hand with neither is free
/// to play anything.
pub fn playable_cards(game: &Game, player_id: PlayerId) -> Result<Vec<Card>, DomainError> {
    let round = game.require_cur_round()?;
    let hand = &game.player(player_id)?.hand;

    let Some(lead) = round.trick_lead else {
        return Ok(hand.clone());
    };
    let trump_suit = round.require_trump()?.suit;

    if hand_has_suit(hand, lead.suit) {
        return Ok(hand.iter().copied().filter(|c| c.suit == lead.suit).collect());
    }
    if hand_has_suit(hand, trump_suit) {
        return Ok(hand.iter().copied().filter(|c| c.suit == trump_suit).collect());
    }
    Ok(hand.clone())
}

/// Play one card into the open trick for the player in `ctx`.
///
/// The card must be in hand and in `playable_cards`; failures leave the
/// round untouched and carry the playable set for re-prompting.
pub fn play_card(game: &mut Game, ctx: &GameContext, card: Card) -> Result<(), DomainError> {
    ctx.ensure(game)?;
    let round = game.require_cur_round()?;
    if !matches!(round.phase, RoundPhase::Trick { .. }) {
        return Err(DomainError::premature(format!(
            "cannot play a card in phase {:?}",
            round.phase
        )));
    }
    if round.check_trick_complete() {
        return Err(DomainError::premature(
            "trick is complete; resolve it with start_new_trick first",
        ));
    }
    match expected_player(game) {
        Some(p) if p == ctx.player_id => {}
        other => {
            return Err(DomainError::premature(format!(
                "not player {}'s turn to play (expected {other:?})",
                ctx.player_id
            )))
        }
    }

    let playable = playable_cards(game, ctx.player_id)?;
    if !playable.contains(&card) {
        return Err(DomainError::InvalidCard { playable });
    }

    let round = game.rounds.last_mut().expect("checked above");
    let player = player_entry_mut(&mut game.players, ctx.player_id)?;
    let pos = player
        .hand
        .iter()
        .position(|&c| c == card)
        .expect("playable cards come from the hand");
    let removed = player.hand.remove(pos);
    player.current_card = Some(removed);
    if round.table.is_empty() {
        round.trick_lead = Some(removed);
    }
    round.table.push((ctx.player_id, removed));
    debug!(
        game_id = game.game_id,
        player_id = ctx.player_id,
        card = %removed,
        on_table = round.table.len(),
        "card played"
    );
    Ok(())
}

/// True iff every player has contributed a card to the open trick.
pub fn check_trick_complete(game: &Game) -> Result<bool, DomainError> {
    Ok(game.require_cur_round()?.check_trick_complete())
}

/// Winner of the completed trick: running-best scan of the table in
/// play order, first card initializing the best. Comparing each
/// candidate against the running best only is what makes the
/// asymmetric `card_beats` relation safe.
pub fn trick_winner(game: &Game) -> Result<PlayerId, DomainError> {
    let round = game.require_cur_round()?;
    if !round.check_trick_complete() {
        return Err(DomainError::premature("trick is not complete"));
    }
    let trump_suit = round.require_trump()?.suit;

    let (mut best_player, mut best_card) = round.table[0];
    for &(player_id, card) in &round.table[1..] {
        if card_beats(card, best_card, trump_suit) {
            best_player = player_id;
            best_card = card;
        }
    }
    Ok(best_player)
}

/// Resolve the completed trick and open the next one: credit the
/// winner, clear played cards and the lead, and rotate play order so
/// the winner leads. Returns the winner.
pub fn start_new_trick(game: &mut Game) -> Result<PlayerId, DomainError> {
    let winner = trick_winner(game)?;

    let round = game.rounds.last_mut().expect("trick_winner found a round");
    for &(player_id, _) in &round.table {
        player_entry_mut(&mut game.players, player_id)?.current_card = None;
    }
    player_entry_mut(&mut game.players, winner)?.wins += 1;
    round.table.clear();
    round.trick_lead = None;
    super::state::rotate_to_front(&mut round.play_order, winner)?;
    if let RoundPhase::Trick { trick_no } = round.phase {
        round.phase = RoundPhase::Trick {
            trick_no: trick_no.saturating_add(1),
        };
    }
    debug!(game_id = game.game_id, winner, "trick resolved");
    Ok(winner)
}

/// Left-rotate the current round's play order so `starting_player`
/// leads, preserving the relative order of the rest.
pub fn update_play_order(game: &mut Game, starting_player: PlayerId) -> Result<(), DomainError> {
    let round = game.cur_round_mut().ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Round, "game has no current round")
    })?;
    super::state::rotate_to_front(&mut round.play_order, starting_player)
}
