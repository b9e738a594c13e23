//! Error type for the game library.
//!
//! Rule outcomes (bust, freeze, stay, an empty deck) are never errors.
//! Errors only come from configuration and from the collaborators the
//! engine talks to: the decision source and the event sink.

use thiserror::Error;

/// Errors surfaced by sessions, decision sources and event sinks.
#[derive(Debug, Error)]
pub enum GameError {
    /// Decision input was neither "stay" nor "draw".
    #[error("invalid decision {0:?}: expected stay or draw")]
    InvalidDecision(String),

    /// A session needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// Seats are indexed by `u8`.
    #[error("{0} players requested, at most 255 are supported")]
    TooManyPlayers(usize),

    /// Player names must be non-empty.
    #[error("player at seat {0} has an empty name")]
    EmptyName(usize),

    /// Player names identify hands in the journal, so they must be unique.
    #[error("player name {0:?} is used twice")]
    DuplicateName(String),

    /// Target score must be positive.
    #[error("target score must be greater than zero")]
    InvalidTarget,

    /// The decision source failed to produce a decision.
    #[error("decision prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
