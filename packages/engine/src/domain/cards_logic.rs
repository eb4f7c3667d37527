//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `candidate` beats `best` as a trick-resolution candidate.
///
/// Rule, in order: same suit → higher rank wins; otherwise a trump-suit
/// candidate wins regardless of rank; otherwise the candidate loses.
///
/// The relation is deliberately asymmetric: it never inspects whether
/// `best` is trump, because a trump `best` and a trump `candidate` share
/// a suit and fall into the first arm. Callers must therefore always
/// compare each new card against the current best, never pairwise in
/// both directions. `tricks::trick_winner` is the canonical caller.
pub fn card_beats(candidate: Card, best: Card, trump_suit: Suit) -> bool {
    if candidate.suit == best.suit {
        candidate.rank > best.rank
    } else {
        candidate.suit == trump_suit
    }
}
