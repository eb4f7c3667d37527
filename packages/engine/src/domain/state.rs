//! Game, Round, and Player state containers plus turn-order math.
//!
//! Players live in an arena on the game and are referenced by stable
//! [`PlayerId`]; bet order and play order are separate ordered index
//! arrays owned by each round. Positions are the indices in those
//! arrays, so both orders are a permutation of `0..N` by construction
//! and rotation never mutates a player record in place.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::rules::{cards_dealt_for_round, max_number_of_rounds, MIN_PLAYERS};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Stable index into the game's player arena.
pub type PlayerId = u8;

/// Per-game mutable player state. `score` accumulates for the whole
/// game; `bet` and `wins` are per-round and reset by `end_round`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Opaque identity key supplied by the caller's identity layer.
    pub user_id: i64,
    pub hand: Vec<Card>,
    pub bet: Option<u8>,
    pub wins: u8,
    pub score: i32,
    /// Card this player has contributed to the open trick, if any.
    pub current_card: Option<Card>,
}

impl Player {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            hand: Vec::new(),
            bet: None,
            wins: 0,
            score: 0,
            current_card: None,
        }
    }
}

/// Round progression: Dealing → Betting → Trick(1) → … → Scored.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Round created but cards not yet dealt.
    Dealing,
    /// Players place bets in bet order.
    Betting,
    /// Playing tricks; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// Round scored; bets and wins reset.
    Scored,
}

/// One deal of `number` cards per player. Owns the per-round turn-order
/// snapshot; player records themselves live on the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// Counts down from the game's round count to 1. Also the number of
    /// cards dealt to each player this round.
    pub number: u8,
    pub dealer: PlayerId,
    /// Bidding order; fixed for the round.
    pub bet_order: Vec<PlayerId>,
    /// Card-play order; rotates to each trick winner.
    pub play_order: Vec<PlayerId>,
    /// Undealt remainder of this round's shuffled deck.
    pub deck: Vec<Card>,
    /// Cards in the open trick, in play order. Never longer than the
    /// player count; when equal the trick must be resolved before more
    /// cards are accepted.
    pub table: Vec<(PlayerId, Card)>,
    /// Turned-up card whose suit is trump for the round.
    pub trump: Option<Card>,
    /// First card of the open trick; defines the suit to follow.
    pub trick_lead: Option<Card>,
    /// Running sum of placed bets.
    pub bet_sum: u8,
    pub phase: RoundPhase,
}

impl Round {
    pub(crate) fn new(number: u8, order: Vec<PlayerId>) -> Self {
        let dealer = order[0];
        Self {
            number,
            dealer,
            bet_order: order.clone(),
            play_order: order,
            deck: Vec::new(),
            table: Vec::new(),
            trump: None,
            trick_lead: None,
            bet_sum: 0,
            phase: RoundPhase::Dealing,
        }
    }

    /// Cards dealt to each player this round.
    pub fn cards_dealt(&self) -> u8 {
        cards_dealt_for_round(self.number)
    }

    pub fn bet_position(&self, player_id: PlayerId) -> Option<usize> {
        self.bet_order.iter().position(|&p| p == player_id)
    }

    pub fn play_position(&self, player_id: PlayerId) -> Option<usize> {
        self.play_order.iter().position(|&p| p == player_id)
    }

    /// The hook player: last to bid, forbidden from making the bet sum
    /// match the cards dealt.
    pub fn is_last_bidder(&self, player_id: PlayerId) -> bool {
        self.bet_order.last() == Some(&player_id)
    }

    pub fn check_trick_complete(&self) -> bool {
        self.table.len() == self.play_order.len()
    }

    pub fn require_trump(&self) -> Result<Card, DomainError> {
        self.trump.ok_or_else(|| {
            DomainError::premature("trump not set; cards have not been dealt this round")
        })
    }
}

/// Entire game container: player arena, seating rotation, and the
/// append-only round history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub game_id: i64,
    /// Player arena; `PlayerId` indexes into it and never changes.
    pub players: Vec<Player>,
    /// Game-level rotation order; each new round snapshots it and
    /// `rotate_dealer` advances it by one seat.
    pub seating: Vec<PlayerId>,
    /// Opening round number; rounds count down from here to 1.
    pub number_of_rounds: u8,
    /// Append-only round history; the last element is the current round.
    pub rounds: Vec<Round>,
    /// Base seed; all shuffling derives from it.
    pub rng_seed: u64,
}

impl Game {
    pub fn new(game_id: i64, number_of_rounds: u8, rng_seed: u64) -> Result<Self, DomainError> {
        if number_of_rounds == 0 {
            return Err(DomainError::validation("number_of_rounds must be >= 1"));
        }
        Ok(Self {
            game_id,
            players: Vec::new(),
            seating: Vec::new(),
            number_of_rounds,
            rounds: Vec::new(),
            rng_seed,
        })
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn in_play(&self) -> bool {
        !self.rounds.is_empty()
    }

    pub fn cur_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn cur_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    pub fn require_cur_round(&self) -> Result<&Round, DomainError> {
        self.cur_round()
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, "game has no current round"))
    }

    pub fn player(&self, player_id: PlayerId) -> Result<&Player, DomainError> {
        player_entry(&self.players, player_id)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Result<&mut Player, DomainError> {
        player_entry_mut(&mut self.players, player_id)
    }

    /// Smallest number of players that makes the configured opening
    /// round dealable (hands plus a trump card within one deck).
    pub fn ensure_dealable(&self) -> Result<(), DomainError> {
        if self.player_count() < MIN_PLAYERS {
            return Err(DomainError::validation(format!(
                "at least {MIN_PLAYERS} players required"
            )));
        }
        if self.number_of_rounds > max_number_of_rounds(self.player_count()) {
            return Err(DomainError::validation(format!(
                "{} rounds with {} players does not fit one deck",
                self.number_of_rounds,
                self.player_count()
            )));
        }
        Ok(())
    }
}

/// Arena lookups, usable where a whole `&mut Game` borrow would
/// conflict with a live round borrow.
pub(crate) fn player_entry(players: &[Player], player_id: PlayerId) -> Result<&Player, DomainError> {
    players.get(player_id as usize).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("no player {player_id}"))
    })
}

pub(crate) fn player_entry_mut(
    players: &mut [Player],
    player_id: PlayerId,
) -> Result<&mut Player, DomainError> {
    players.get_mut(player_id as usize).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("no player {player_id}"))
    })
}

/// Left-rotate `order` so `start` comes first, preserving the relative
/// order of the rest. Rotating to the current first element is a no-op.
pub fn rotate_to_front(order: &mut [PlayerId], start: PlayerId) -> Result<(), DomainError> {
    let idx = order.iter().position(|&p| p == start).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("player {start} not in order"))
    })?;
    order.rotate_left(idx);
    Ok(())
}

/// Next player expected to bid: first in bet order without a set bet.
/// `None` outside the betting phase or once every bet is placed.
pub fn expected_bidder(game: &Game) -> Option<PlayerId> {
    let round = game.cur_round()?;
    if round.phase != RoundPhase::Betting {
        return None;
    }
    round
        .bet_order
        .iter()
        .copied()
        .find(|&p| game.players.get(p as usize).is_some_and(|pl| pl.bet.is_none()))
}

/// Next player expected to play a card into the open trick. `None`
/// outside the trick phase or while a complete trick awaits resolution.
pub fn expected_player(game: &Game) -> Option<PlayerId> {
    let round = game.cur_round()?;
    if !matches!(round.phase, RoundPhase::Trick { .. }) {
        return None;
    }
    round.play_order.get(round.table.len()).copied()
}
