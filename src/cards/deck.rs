//! The shared draw pile.
//!
//! A deck is built with a fixed composition, shuffled once, then drawn from
//! the top (the end of the vector) until empty. Cards never return to the
//! deck within a round.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use crate::core::config::{ACTION_CARD_COPIES, BONUS_MAX, BONUS_MIN, DECK_SIZE, NUMBER_CARD_MAX};
use crate::core::GameRng;

/// Ordered draw pile. The last card is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 97-card deck, unshuffled.
    ///
    /// ```
    /// use flip_seven::cards::{Card, CardKind, Deck};
    ///
    /// let deck = Deck::build();
    /// assert_eq!(deck.len(), 97);
    /// assert_eq!(deck.count(CardKind::Freeze), 3);
    /// assert_eq!(deck.count_card(Card::Number(12)), 12);
    /// assert_eq!(deck.count_card(Card::Number(0)), 0);
    /// ```
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for value in 0..=NUMBER_CARD_MAX {
            cards.extend(std::iter::repeat(Card::Number(value)).take(value as usize));
        }

        for action in [Card::Freeze, Card::FlipThree, Card::SecondChance] {
            cards.extend(std::iter::repeat(action).take(ACTION_CARD_COPIES));
        }

        cards.extend((BONUS_MIN..=BONUS_MAX).map(Card::Bonus));
        cards.push(Card::Multiplier);

        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// Build the standard deck and shuffle it.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Create a stacked deck. The last card of `cards` is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Create a stacked deck from cards listed in draw order.
    ///
    /// ```
    /// use flip_seven::cards::{Card, Deck};
    ///
    /// let mut deck = Deck::from_draw_order([Card::Number(3), Card::Freeze]);
    /// assert_eq!(deck.draw(), Some(Card::Number(3)));
    /// assert_eq!(deck.draw(), Some(Card::Freeze));
    /// assert_eq!(deck.draw(), None);
    /// ```
    #[must_use]
    pub fn from_draw_order(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Shuffle the remaining cards with a uniform permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Take the top card. Returns `None` once the deck is empty, every time.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Count remaining cards of a kind.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|c| c.kind() == kind).count()
    }

    /// Count remaining copies of an exact card.
    #[must_use]
    pub fn count_card(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }
}
