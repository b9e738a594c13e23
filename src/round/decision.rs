//! Turn decisions and the source that supplies them.
//!
//! The engine only asks for a decision in the turn loop, once per playing
//! hand per pass. It never asks during the initial deal or while a
//! Flip Three is resolving.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};
use crate::hand::Player;

/// What a playing hand does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Stop drawing and bank the round.
    Stay,
    /// Resolve one more card.
    Draw,
}

impl FromStr for Decision {
    type Err = GameError;

    /// Parse typed input. Accepts `s`/`stay` and `d`/`draw`, plus `p`
    /// ("pioche") for draw. Case and surrounding whitespace are ignored.
    ///
    /// ```
    /// use flip_seven::round::Decision;
    ///
    /// assert_eq!(" S ".parse::<Decision>().unwrap(), Decision::Stay);
    /// assert_eq!("draw".parse::<Decision>().unwrap(), Decision::Draw);
    /// assert!("maybe".parse::<Decision>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "s" | "stay" => Ok(Decision::Stay),
            "d" | "p" | "draw" => Ok(Decision::Draw),
            _ => Err(GameError::InvalidDecision(input.to_string())),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Stay => write!(f, "stay"),
            Decision::Draw => write!(f, "draw"),
        }
    }
}

/// Supplies the decision of the player whose turn it is.
///
/// Implementations own input validation: a terminal source re-prompts on
/// malformed input, a scripted source never produces it. An `Err` aborts
/// the round.
pub trait DecisionSource {
    /// Decide for `player`, who may inspect their own state through `view`.
    fn decide(&mut self, player: PlayerId, view: &Player) -> Result<Decision, GameError>;
}

impl<F> DecisionSource for F
where
    F: FnMut(PlayerId, &Player) -> Decision,
{
    fn decide(&mut self, player: PlayerId, view: &Player) -> Result<Decision, GameError> {
        Ok(self(player, view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_choices() {
        for input in ["s", "S", "stay", "  Stay\n"] {
            assert_eq!(input.parse::<Decision>().unwrap(), Decision::Stay);
        }
        for input in ["d", "p", "DRAW", " draw "] {
            assert_eq!(input.parse::<Decision>().unwrap(), Decision::Draw);
        }
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for input in ["", "x", "stay please", "1"] {
            let err = input.parse::<Decision>().unwrap_err();
            assert!(matches!(err, GameError::InvalidDecision(ref s) if s == input));
        }
    }

    #[test]
    fn test_closure_is_a_decision_source() {
        let mut stay_when_rich = |_: PlayerId, p: &Player| {
            if p.hand.number_sum() >= 20 {
                Decision::Stay
            } else {
                Decision::Draw
            }
        };

        let mut player = Player::new("Ana");
        assert_eq!(stay_when_rich.decide(PlayerId::new(0), &player).unwrap(), Decision::Draw);

        player.hand.try_add_number(12);
        player.hand.try_add_number(9);
        assert_eq!(stay_when_rich.decide(PlayerId::new(0), &player).unwrap(), Decision::Stay);
    }
}
