//! Card values.
//!
//! A card is a closed sum type: resolution matches on it exhaustively, so
//! there is no "unknown card" state to handle.

use serde::{Deserialize, Serialize};

/// A single card of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Card {
    /// Number card, 0 to 12.
    Number(u8),
    /// Ends the drawing player's round; forfeits its points.
    Freeze,
    /// The drawing player resolves three more cards.
    FlipThree,
    /// Protects against one duplicate number.
    SecondChance,
    /// Flat points added after the multiplier, 2 to 10.
    Bonus(u8),
    /// Doubles the sum of the number cards.
    Multiplier,
}

/// Fieldless discriminant of a `Card`, for counting and grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Number,
    Freeze,
    FlipThree,
    SecondChance,
    Bonus,
    Multiplier,
}

impl Card {
    /// Get the kind of this card.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Card::Number(_) => CardKind::Number,
            Card::Freeze => CardKind::Freeze,
            Card::FlipThree => CardKind::FlipThree,
            Card::SecondChance => CardKind::SecondChance,
            Card::Bonus(_) => CardKind::Bonus,
            Card::Multiplier => CardKind::Multiplier,
        }
    }

    /// Get the printed value of number and bonus cards.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Card::Number(v) | Card::Bonus(v) => Some(v),
            _ => None,
        }
    }

    /// Check if this is an action card (Freeze, Flip Three, Second Chance).
    #[must_use]
    pub const fn is_action(self) -> bool {
        matches!(self, Card::Freeze | Card::FlipThree | Card::SecondChance)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Number(v) => write!(f, "{}", v),
            Card::Freeze => write!(f, "Freeze"),
            Card::FlipThree => write!(f, "Flip Three"),
            Card::SecondChance => write!(f, "Second Chance"),
            Card::Bonus(v) => write!(f, "+{}", v),
            Card::Multiplier => write!(f, "x2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_value() {
        assert_eq!(Card::Number(7).kind(), CardKind::Number);
        assert_eq!(Card::Number(7).value(), Some(7));
        assert_eq!(Card::Bonus(4).value(), Some(4));
        assert_eq!(Card::Freeze.value(), None);
        assert!(Card::FlipThree.is_action());
        assert!(!Card::Multiplier.is_action());
    }

    #[test]
    fn test_display() {
        let rendered: Vec<_> = [
            Card::Number(0),
            Card::Freeze,
            Card::FlipThree,
            Card::SecondChance,
            Card::Bonus(10),
            Card::Multiplier,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(rendered, ["0", "Freeze", "Flip Three", "Second Chance", "+10", "x2"]);
    }

    #[test]
    fn test_serde_shape() {
        assert_eq!(
            serde_json::to_string(&Card::Number(5)).unwrap(),
            r#"{"type":"number","value":5}"#
        );
        assert_eq!(
            serde_json::to_string(&Card::FlipThree).unwrap(),
            r#"{"type":"flip_three"}"#
        );

        let card: Card = serde_json::from_str(r#"{"type":"bonus","value":6}"#).unwrap();
        assert_eq!(card, Card::Bonus(6));
    }
}
