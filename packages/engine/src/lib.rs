//! Rules engine for a multi-round trick-taking card game.
//!
//! Fixed-size hands are dealt each round, players bid the number of
//! tricks they expect to win, then play cards in turn order. Trick
//! winners are determined by suit-following and trump rules, and scores
//! are computed from bid accuracy across a shrinking sequence of rounds
//! until one or more winners are declared.
//!
//! The engine is a pure library: persistence, transport, sessions, and
//! rendering are the caller's job. All mutation happens in short,
//! synchronous operations on an exclusively borrowed [`domain::Game`];
//! the caller serializes concurrent players onto that borrow.

pub mod domain;
pub mod errors;

pub use domain::{Card, Game, GameContext, PlayerId, Rank, Suit};
pub use errors::domain::DomainError;
