//! Deck composition and draw properties.
//!
//! Shuffles must never change which cards are in the deck, and drawing
//! must hand out every card exactly once before running dry.

use proptest::prelude::*;

use flip_seven::cards::{Card, CardKind, Deck};
use flip_seven::core::GameRng;

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_unstable();
    cards
}

fn drain(deck: &mut Deck) -> Vec<Card> {
    std::iter::from_fn(|| deck.draw()).collect()
}

proptest! {
    /// Any seed yields the same 97-card multiset.
    #[test]
    fn shuffle_preserves_multiset(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), 97);
        prop_assert_eq!(
            sorted(deck.remaining().to_vec()),
            sorted(Deck::build().remaining().to_vec())
        );
    }

    /// Reshuffling an already shuffled deck keeps the multiset too.
    #[test]
    fn repeated_shuffles_preserve_multiset(seed in any::<u64>(), times in 1usize..5) {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::build();
        for _ in 0..times {
            deck.shuffle(&mut rng);
        }

        prop_assert_eq!(deck.count(CardKind::Number), 78);
        prop_assert_eq!(deck.count(CardKind::Bonus), 9);
        prop_assert_eq!(deck.count_card(Card::Number(7)), 7);
    }

    /// n cards come out over n draws, then the deck stays empty.
    #[test]
    fn draw_exhausts_exactly(seed in any::<u64>(), n in 0usize..40) {
        let mut rng = GameRng::new(seed);
        let mut full = Deck::shuffled(&mut rng);
        let cards: Vec<Card> = (0..n).filter_map(|_| full.draw()).collect();
        let mut deck = Deck::from_cards(cards.clone());

        let drawn = drain(&mut deck);
        prop_assert_eq!(drawn.len(), n);
        prop_assert_eq!(deck.draw(), None);
        prop_assert_eq!(deck.draw(), None);

        // Top of the deck is the end of the vector.
        let mut expected = cards;
        expected.reverse();
        prop_assert_eq!(drawn, expected);
    }
}

#[test]
fn test_full_deck_draws_each_card_once() {
    let mut deck = Deck::shuffled(&mut GameRng::new(77));
    let drawn = drain(&mut deck);

    assert_eq!(drawn.len(), 97);
    assert_eq!(sorted(drawn), sorted(Deck::build().remaining().to_vec()));
    assert!(deck.is_empty());
}

#[test]
fn test_zero_has_no_copies() {
    let deck = Deck::build();
    assert_eq!(deck.count_card(Card::Number(0)), 0);
    assert_eq!(deck.count_card(Card::Number(1)), 1);
    assert_eq!(deck.count_card(Card::Bonus(1)), 0);
    assert_eq!(deck.count_card(Card::Bonus(11)), 0);
}
