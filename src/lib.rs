//! # flip-seven
//!
//! Engine for a push-your-luck card game. Players flip cards from a shared
//! deck, collecting unique numbers; a duplicate busts the round, staying
//! banks it, and seven unique numbers end the round for everyone.
//!
//! ## Design Principles
//!
//! 1. **Closed card model**: `Card` is an enum, so resolution is an
//!    exhaustive match.
//!
//! 2. **Injected collaborators**: player input (`DecisionSource`), event
//!    output (`EventSink`) and randomness (`GameRng`) are passed in, so
//!    rounds are reproducible and testable.
//!
//! 3. **Reused hands**: each `Player` keeps one `PlayerHand` slot that is
//!    reset every round, while the cumulative score lives on the player.
//!
//! ## Modules
//!
//! - `core`: Seats, seeded RNG, configuration and rule constants, errors
//! - `cards`: Card model and the 97-card deck
//! - `hand`: Per-round hand state machine and scoring
//! - `round`: Round engine, decisions, events
//! - `session`: Multi-round sessions and the JSON journal
//! - `terminal`: Interactive front-end (feature `cli`)

pub mod core;
pub mod cards;
pub mod hand;
pub mod round;
pub mod session;
#[cfg(feature = "cli")]
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};

pub use crate::cards::{Card, CardKind, Deck};

pub use crate::hand::{AddNumber, HandStatus, Player, PlayerHand};

pub use crate::round::{
    Decision, DecisionSource, EventSink, MemorySink, NullSink,
    Resolution, RoundEngine, RoundEvent, RoundSummary,
};

pub use crate::session::{
    GameSession, GameSessionBuilder, Journal, JournalEntry, JsonJournal, RoundRecord, Standing,
};
