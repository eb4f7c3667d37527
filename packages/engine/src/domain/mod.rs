//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_context;
pub mod lifecycle;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_lifecycle;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use game_context::GameContext;
pub use player_view::{player_view, PlayerView};
pub use rules::max_number_of_rounds;
pub use seed_derivation::derive_dealing_seed;
pub use state::{Game, Player, PlayerId, Round, RoundPhase};
