//! Long-lived player entity.

use serde::{Deserialize, Serialize};

use super::state::PlayerHand;

/// A named player with a cumulative score and a reusable hand slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Sum of all banked round scores. Never decreases.
    pub total_score: u32,
    pub hand: PlayerHand,
}

impl Player {
    /// Create a player with no points and a reset hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            hand: PlayerHand::new(),
        }
    }

    /// Add the current hand's round score to the total and return it.
    pub fn bank_round(&mut self) -> u32 {
        let score = self.hand.round_score();
        self.total_score += score;
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_round_accumulates() {
        let mut player = Player::new("Ana");
        player.hand.try_add_number(6);
        player.hand.stay();

        assert_eq!(player.bank_round(), 6);
        assert_eq!(player.total_score, 6);

        player.hand.reset();
        player.hand.try_add_number(11);
        player.hand.bust();
        assert_eq!(player.bank_round(), 0);
        assert_eq!(player.total_score, 6);
    }
}
