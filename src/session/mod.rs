//! Game sessions and the persistent game journal.
//!
//! A `GameSession` seats the players, owns the seeded RNG, and repeats
//! rounds until someone reaches the target score (200 by default). The
//! `JsonJournal` sink records every round to disk.

mod game;
mod journal;

pub use game::{GameSession, GameSessionBuilder, Standing};
pub use journal::{Journal, JournalEntry, JsonJournal, RoundRecord};
