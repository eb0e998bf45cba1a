//! Property tests for deck invariants.

mod common;

use carddeck::{
    CardGenerator, CardListGenerator, CardQueue, Deck, DeckOptions, SecureRandom, StandardGenerator,
};
use proptest::prelude::*;

use common::{card_counts, labels};

proptest! {
    /// Shuffling any number of times only permutes the cards.
    #[test]
    fn shuffle_preserves_multiset(size in 0usize..=52, shuffles in 0usize..6, seed in any::<u64>()) {
        let mut deck = Deck::with_rng(
            StandardGenerator::with_limit(size),
            SecureRandom::seeded(seed),
            DeckOptions::default(),
        );
        let before = card_counts(&deck);

        for _ in 0..shuffles {
            deck.shuffle();
        }

        prop_assert_eq!(deck.len(), size);
        prop_assert_eq!(card_counts(&deck), before);
    }

    /// Dealing removes cards one at a time, in enumeration order.
    #[test]
    fn deal_follows_enumeration(size in 0usize..=52, amount in 0usize..60, seed in any::<u64>()) {
        let mut deck = Deck::with_rng(
            StandardGenerator::with_limit(size),
            SecureRandom::seeded(seed),
            DeckOptions::default().with_shuffle_on_create(true),
        );
        let expected = labels(deck.iter().take(amount));

        let results: Vec<_> = deck.deal(amount).collect();
        let dealt: Vec<_> = results.iter().filter_map(|result| result.as_ref().ok()).collect();

        prop_assert_eq!(labels(dealt), expected);
        prop_assert_eq!(deck.len(), size.saturating_sub(amount));
        prop_assert_eq!(results.iter().any(Result::is_err), amount > size);
    }

    /// Queue-backed decks keep their cards through shuffles too.
    #[test]
    fn queue_shuffle_preserves_multiset(seed in any::<u64>()) {
        let generator: CardListGenerator<CardQueue> =
            StandardGenerator::with_limit(13).canonical_cards().into_iter().collect();
        let mut deck = Deck::with_rng(generator, SecureRandom::seeded(seed), DeckOptions::default());
        let before = card_counts(&deck);

        deck.shuffle();

        prop_assert_eq!(card_counts(&deck), before);
    }
}
