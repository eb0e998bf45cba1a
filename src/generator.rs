//! Card generators.
//!
//! A generator defines what a full deck contains and which storage discipline
//! holds it. Keeping these in a generator lets callers bring their own card
//! set, for example one loaded from a data file, without writing a new deck
//! type.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::card::{Card, RANKS, SUITS};
use crate::storage::{CardStack, CardStorage};

/// Produces a deck's canonical cards and converts card sequences into storage.
pub trait CardGenerator {
    /// Storage the generated cards live in. This fixes the deal order.
    type Storage: CardStorage;

    /// Returns the canonical, unshuffled card sequence.
    fn canonical_cards(&self) -> Vec<Card>;

    /// Converts a card sequence into storage.
    ///
    /// The default pushes the cards in sequence order, so for a stack the last
    /// card of `cards` is dealt first.
    fn convert(&self, cards: Vec<Card>) -> Self::Storage {
        Self::Storage::from_sequence(cards)
    }

    /// Returns the canonical cards already converted into storage.
    fn canonical_storage(&self) -> Self::Storage {
        self.convert(self.canonical_cards())
    }
}

/// Generator for the standard 52-card deck, stored as a stack.
///
/// Cards are generated suit by suit (Hearts, Diamonds, Spades, Clubs), each
/// suit from `2` up to `A`. An optional limit truncates the sequence, which is
/// handy for small decks in statistical experiments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardGenerator {
    limit: Option<usize>,
}

impl StandardGenerator {
    /// Creates a generator for the full 52-card deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { limit: None }
    }

    /// Creates a generator that keeps only the first `limit` canonical cards.
    ///
    /// A limit larger than the deck yields the full deck.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// Returns the configured limit, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl CardGenerator for StandardGenerator {
    type Storage = CardStack;

    fn canonical_cards(&self) -> Vec<Card> {
        SUITS
            .into_iter()
            .flat_map(|suit| RANKS.into_iter().map(move |rank| Card::new(rank, suit.clone())))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Generator over a caller-supplied card list.
///
/// The list is used as-is as the canonical sequence. `S` picks the storage
/// discipline, a stack by default.
#[derive(Debug, Clone)]
pub struct CardListGenerator<S = CardStack> {
    cards: Vec<Card>,
    storage: PhantomData<fn() -> S>,
}

impl<S> CardListGenerator<S> {
    /// Creates a generator over `cards`.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            storage: PhantomData,
        }
    }

    /// Returns the canonical cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl<S> FromIterator<Card> for CardListGenerator<S> {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: CardStorage> CardGenerator for CardListGenerator<S> {
    type Storage = S;

    fn canonical_cards(&self) -> Vec<Card> {
        self.cards.clone()
    }
}
