//! Core types: seats, randomness, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::GameError;
