//! Game configuration and rule constants.
//!
//! The deck composition and scoring constants are fixed by the rules and
//! live here as constants. The per-session knobs (target score, seed)
//! live in `GameConfig`, which the session builder validates.

use serde::{Deserialize, Serialize};

/// Highest number card value. Value `v` appears `v` times in the deck.
pub const NUMBER_CARD_MAX: u8 = 12;

/// Copies of each action card (Freeze, Flip Three, Second Chance).
pub const ACTION_CARD_COPIES: usize = 3;

/// Smallest bonus card value.
pub const BONUS_MIN: u8 = 2;

/// Largest bonus card value.
pub const BONUS_MAX: u8 = 10;

/// Total cards in a freshly built deck: 78 numbers, 9 actions, 9 bonuses, 1 multiplier.
pub const DECK_SIZE: usize = 97;

/// Unique numbers that end the round immediately.
pub const FLIP_SEVEN_COUNT: usize = 7;

/// Flat bonus for holding `FLIP_SEVEN_COUNT` unique numbers.
pub const FLIP_SEVEN_BONUS: u32 = 15;

/// Cards resolved by a Flip Three.
pub const FLIP_THREE_DRAWS: usize = 3;

/// Default score that ends a session.
pub const DEFAULT_TARGET_SCORE: u32 = 200;

/// Per-session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A session ends once any player's total reaches this score.
    pub target_score: u32,

    /// Seed for every shuffle of the session. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the target score (builder pattern).
    #[must_use]
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Set the seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
