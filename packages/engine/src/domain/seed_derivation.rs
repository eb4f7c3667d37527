//! RNG seed derivation for deterministic game behavior.
//!
//! A game carries one base seed; every round's shuffle derives its own
//! seed from it, so a whole game replays identically from the base seed
//! while no round ever reuses a previous round's order.

/// Derive the shuffle seed for one round of one game.
///
/// Unique per (game, round) combination; round numbers are unique
/// within a game because they count down.
pub fn derive_dealing_seed(game_seed: u64, round_number: u8) -> u64 {
    game_seed
        .wrapping_add((round_number as u64).wrapping_mul(1_000_000))
        .wrapping_add(1)
}
