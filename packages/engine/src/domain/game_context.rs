//! Explicit per-call context: which game, acting as which player.
//!
//! The engine holds no ambient "current game/player" state; every
//! player-scoped operation receives a `GameContext` and validates it
//! against the game it is handed.

use super::state::{player_entry, Game, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameContext {
    pub game_id: i64,
    pub player_id: PlayerId,
}

impl GameContext {
    pub fn new(game_id: i64, player_id: PlayerId) -> Self {
        Self { game_id, player_id }
    }

    /// Check that this context refers to `game` and to a seated player.
    pub fn ensure(&self, game: &Game) -> Result<(), DomainError> {
        if game.game_id != self.game_id {
            return Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("context targets game {}, got game {}", self.game_id, game.game_id),
            ));
        }
        player_entry(&game.players, self.player_id)?;
        Ok(())
    }
}
