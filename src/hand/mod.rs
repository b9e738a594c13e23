//! Player hands and the long-lived player entity.
//!
//! - `PlayerHand`: round-scoped numbers, bonuses, capabilities and flags
//! - `HandStatus`: derived state (`Playing`, `Stayed`, `Frozen`, `Busted`)
//! - `Player`: name, cumulative score, and the reused hand slot

pub mod state;
pub mod player;

pub use state::{AddNumber, HandStatus, PlayerHand};
pub use player::Player;
