//! Card model and the draw pile.
//!
//! ## Key Types
//!
//! - `Card`: Closed sum type over number, action, bonus and multiplier cards
//! - `CardKind`: Fieldless card discriminant
//! - `Deck`: Fixed 97-card composition, seeded shuffle, draw-until-empty

pub mod card;
pub mod deck;

pub use card::{Card, CardKind};
pub use deck::Deck;
