//! Per-round hand state.
//!
//! A `PlayerHand` is reused across rounds: the session resets it at the
//! start of every round instead of allocating a new one, while the owning
//! `Player` keeps the cumulative score.
//!
//! ## State Machine
//!
//! ```text
//!            draw fresh number / bonus / x2 / second chance
//!                 +------+
//!                 v      |
//!  reset --> PLAYING ----+--- stay ----------> STAYED
//!                 |      +--- Freeze --------> FROZEN
//!                 |      +--- duplicate -----> BUSTED
//!                 +--- duplicate + second chance (consumed) --> PLAYING
//! ```
//!
//! `BUSTED` is `active == false` without `frozen`. A frozen hand is also
//! inactive.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{FLIP_SEVEN_BONUS, FLIP_SEVEN_COUNT};

/// Terminal-or-playing status of a hand, derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandStatus {
    /// Still drawing this round.
    Playing,
    /// Stopped voluntarily; eligible to score.
    Stayed,
    /// Stopped by a Freeze card; scores nothing.
    Frozen,
    /// Drew an unprotected duplicate; scores nothing.
    Busted,
}

/// Outcome of offering a number to a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddNumber {
    /// The number was new and is now held.
    Accepted,
    /// The number was already held; the hand is unchanged.
    Duplicate,
}

/// Round-scoped state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    /// Unique numbers held, kept sorted.
    numbers: SmallVec<[u8; 8]>,
    /// Bonus values in the order drawn.
    bonuses: SmallVec<[u8; 4]>,
    has_multiplier: bool,
    has_second_chance: bool,
    active: bool,
    stayed: bool,
    frozen: bool,
}

impl Default for PlayerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerHand {
    /// Create a hand in the freshly reset state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            numbers: SmallVec::new(),
            bonuses: SmallVec::new(),
            has_multiplier: false,
            has_second_chance: false,
            active: true,
            stayed: false,
            frozen: false,
        }
    }

    /// Clear all round state, keeping allocations.
    pub fn reset(&mut self) {
        self.numbers.clear();
        self.bonuses.clear();
        self.has_multiplier = false;
        self.has_second_chance = false;
        self.active = true;
        self.stayed = false;
        self.frozen = false;
    }

    /// Record a number unless it is already held.
    ///
    /// ```
    /// use flip_seven::hand::{AddNumber, PlayerHand};
    ///
    /// let mut hand = PlayerHand::new();
    /// assert_eq!(hand.try_add_number(4), AddNumber::Accepted);
    /// assert_eq!(hand.try_add_number(4), AddNumber::Duplicate);
    /// assert_eq!(hand.numbers(), &[4]);
    /// ```
    pub fn try_add_number(&mut self, value: u8) -> AddNumber {
        match self.numbers.binary_search(&value) {
            Ok(_) => AddNumber::Duplicate,
            Err(pos) => {
                self.numbers.insert(pos, value);
                AddNumber::Accepted
            }
        }
    }

    /// Append a bonus value.
    pub fn add_bonus(&mut self, value: u8) {
        self.bonuses.push(value);
    }

    /// Grant the x2 multiplier. Drawing it twice changes nothing.
    pub fn grant_multiplier(&mut self) {
        self.has_multiplier = true;
    }

    /// Grant a Second Chance.
    ///
    /// Returns `false` if one was already held: the extra card is discarded,
    /// second chances do not stack.
    pub fn grant_second_chance(&mut self) -> bool {
        !std::mem::replace(&mut self.has_second_chance, true)
    }

    /// Spend the Second Chance if one is held.
    pub fn consume_second_chance(&mut self) -> bool {
        std::mem::replace(&mut self.has_second_chance, false)
    }

    /// Stop drawing voluntarily.
    pub fn stay(&mut self) {
        self.stayed = true;
    }

    /// Stop drawing because of a Freeze card.
    pub fn freeze(&mut self) {
        self.frozen = true;
        self.active = false;
    }

    /// Leave the round on an unprotected duplicate.
    pub fn bust(&mut self) {
        self.active = false;
    }

    /// Current status, derived from the flags.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        if self.frozen {
            HandStatus::Frozen
        } else if !self.active {
            HandStatus::Busted
        } else if self.stayed {
            HandStatus::Stayed
        } else {
            HandStatus::Playing
        }
    }

    /// Check if the hand may still draw this round.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.active && !self.stayed && !self.frozen
    }

    /// Unique numbers held, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Bonus values in draw order.
    #[must_use]
    pub fn bonuses(&self) -> &[u8] {
        &self.bonuses
    }

    #[must_use]
    pub fn has_multiplier(&self) -> bool {
        self.has_multiplier
    }

    #[must_use]
    pub fn has_second_chance(&self) -> bool {
        self.has_second_chance
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn has_stayed(&self) -> bool {
        self.stayed
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Count of unique numbers held.
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.numbers.len()
    }

    /// Check if the hand holds enough unique numbers to end the round.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.numbers.len() >= FLIP_SEVEN_COUNT
    }

    /// Sum of the numbers held, before the multiplier.
    #[must_use]
    pub fn number_sum(&self) -> u32 {
        self.numbers.iter().map(|&v| u32::from(v)).sum()
    }

    /// Sum of the bonus cards held.
    #[must_use]
    pub fn bonus_sum(&self) -> u32 {
        self.bonuses.iter().map(|&v| u32::from(v)).sum()
    }

    /// Points this hand is worth at round end.
    ///
    /// Only a stayed hand scores. A frozen hand forfeits everything it holds,
    /// numbers and bonuses included. Otherwise the numbers are summed,
    /// doubled by the multiplier, then bonuses and the seven-number bonus
    /// are added on top.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        if !self.stayed || self.frozen {
            return 0;
        }

        let mut base = self.number_sum();
        if self.has_multiplier {
            base *= 2;
        }
        if self.numbers.len() == FLIP_SEVEN_COUNT {
            base += FLIP_SEVEN_BONUS;
        }
        base + self.bonus_sum()
    }
}
