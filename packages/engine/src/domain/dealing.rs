//! Deck construction and shuffling.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::DECK_SIZE;

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A freshly built 52-card deck, uniformly shuffled from `seed`.
///
/// Non-cryptographic determinism is intentional: the same seed always
/// yields the same order, and each round derives a fresh seed so no
/// round replays a previous round's order.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let mut deck = full_deck();
    deck.shuffle(&mut rng);
    deck
}
