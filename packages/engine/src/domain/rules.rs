//! Table-stakes constants and bounds for the game.

pub const DECK_SIZE: usize = 52;
pub const MIN_PLAYERS: usize = 2;

/// Cards dealt per player in a round equals the round number, which
/// counts down from the game's round count to 1.
pub fn cards_dealt_for_round(round_number: u8) -> u8 {
    round_number
}

/// Largest opening round number for a given table size: every round
/// must deal `number` cards to each player and still leave a card to
/// turn up as trump.
pub fn max_number_of_rounds(player_count: usize) -> u8 {
    if player_count == 0 {
        return 0;
    }
    ((DECK_SIZE - 1) / player_count).min(u8::MAX as usize) as u8
}
