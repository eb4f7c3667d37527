//! In-memory game runner.
//!
//! Drives a complete game through the engine's public operations with a
//! configurable seat policy, re-deriving a `PlayerView` before every
//! decision the way an interactive caller would.

use clap::ValueEnum;
use rand::prelude::*;
use serde::Serialize;
use tracing::debug;

use tricks_engine::domain::bidding::place_bet;
use tricks_engine::domain::lifecycle::{add_player, check_round_complete, end_game, end_round, start_new_round};
use tricks_engine::domain::player_view::player_view;
use tricks_engine::domain::state::{expected_bidder, expected_player, Game, PlayerId};
use tricks_engine::domain::tricks::{play_card, start_new_trick};
use tricks_engine::{DomainError, GameContext};

/// Decision policy applied to every seat.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Strategy {
    /// Uniformly random choice among the legal options.
    Random,
    /// Always the lowest legal bet and the first playable card.
    Lowest,
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub game_num: u32,
    pub seed: u64,
    pub rounds_played: u8,
    pub final_scores: Vec<i32>,
    pub winners: Vec<PlayerId>,
}

pub struct Simulator {
    players: usize,
    rounds: u8,
    strategy: Strategy,
}

impl Simulator {
    pub fn new(players: usize, rounds: u8, strategy: Strategy) -> Self {
        Self {
            players,
            rounds,
            strategy,
        }
    }

    /// Run one game to completion and report the final standings.
    pub fn run(
        &self,
        game_num: u32,
        seed: u64,
        rng: &mut impl Rng,
    ) -> Result<GameResult, DomainError> {
        let mut game = Game::new(game_num as i64, self.rounds, seed)?;
        for i in 0..self.players {
            add_player(&mut game, 1000 + i as i64)?;
        }

        for _ in 0..self.rounds {
            start_new_round(&mut game)?;
            self.play_round(&mut game, rng)?;
        }

        let winners = end_game(&game);
        Ok(GameResult {
            game_num,
            seed,
            rounds_played: self.rounds,
            final_scores: game.players.iter().map(|p| p.score).collect(),
            winners,
        })
    }

    fn play_round(&self, game: &mut Game, rng: &mut impl Rng) -> Result<(), DomainError> {
        while let Some(bidder) = expected_bidder(game) {
            let ctx = GameContext::new(game.game_id, bidder);
            let view = player_view(game, &ctx)?;
            let bet = self.pick(&view.legal_bets, rng)?;
            place_bet(game, &ctx, bet)?;
        }

        while !check_round_complete(game) {
            while let Some(player) = expected_player(game) {
                let ctx = GameContext::new(game.game_id, player);
                let view = player_view(game, &ctx)?;
                let card = self.pick(&view.playable, rng)?;
                play_card(game, &ctx, card)?;
            }
            let winner = start_new_trick(game)?;
            debug!(game_id = game.game_id, winner, "trick taken");
        }

        end_round(game)
    }

    fn pick<T: Copy>(&self, options: &[T], rng: &mut impl Rng) -> Result<T, DomainError> {
        let choice = match self.strategy {
            Strategy::Random => options.choose(rng).copied(),
            Strategy::Lowest => options.first().copied(),
        };
        choice.ok_or_else(|| DomainError::validation("no legal option to choose from"))
    }
}
