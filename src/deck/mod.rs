//! Deck engine.

use alloc::vec::Vec;
use core::fmt;

use rand::CryptoRng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::generator::CardGenerator;
use crate::options::{DeckOptions, KeepPolicy};
#[cfg(feature = "os_rng")]
use crate::random::OsEntropy;
use crate::random::SecureRandom;
use crate::storage::CardStorage;

mod deal;
mod playing_cards;

pub use deal::Deal;
pub use playing_cards::PlayingCards;

/// A deck of cards that can be shuffled, dealt from, and replenished.
///
/// The generator `G` supplies the canonical cards and, through its storage
/// type, the deal order. `R` is the cryptographic RNG used for shuffling; the
/// deck owns it for its whole lifetime.
///
/// Shuffling only permutes the cards. Dealing removes them one at a time, and
/// [`replenish`](Self::replenish) is the only way cards are added or replaced.
pub struct Deck<G: CardGenerator, R> {
    /// Remaining cards.
    cards: G::Storage,
    /// Generator used to create and replenish the deck.
    generator: G,
    /// Random source for shuffling.
    rng: SecureRandom<R>,
    /// Deck options.
    options: DeckOptions,
}

#[cfg(feature = "os_rng")]
impl<G: CardGenerator> Deck<G, OsEntropy> {
    /// Creates a deck from `generator` that shuffles with operating-system
    /// entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{Deck, StandardGenerator};
    ///
    /// let deck = Deck::new(StandardGenerator::with_limit(4));
    /// assert_eq!(deck.len(), 4);
    /// ```
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self::with_options(generator, DeckOptions::default())
    }

    /// Creates a deck from `generator` with the given options.
    #[must_use]
    pub fn with_options(generator: G, options: DeckOptions) -> Self {
        Self::with_rng(generator, SecureRandom::new(), options)
    }
}

impl<G: CardGenerator, R: CryptoRng> Deck<G, R> {
    /// Creates a deck from `generator` that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(generator: G, rng: SecureRandom<R>, options: DeckOptions) -> Self {
        let cards = generator.canonical_storage();
        let mut deck = Self {
            cards,
            generator,
            rng,
            options,
        };
        if options.shuffle_on_create {
            deck.shuffle();
        }
        deck
    }

    /// Shuffles the remaining cards.
    ///
    /// Runs a Fisher-Yates shuffle from the last position down, swapping each
    /// position with a uniformly chosen position at or before it, then
    /// rebuilds storage from the permuted sequence through the generator. For
    /// a stack this puts the last card of the permutation on top.
    pub fn shuffle(&mut self) {
        let mut cards = core::mem::take(&mut self.cards).into_deal_order();

        for i in (1..cards.len()).rev() {
            let j = self.rng.next_index(i + 1);
            cards.swap(i, j);
        }

        trace!(cards = cards.len(), "shuffled deck");
        self.cards = self.generator.convert(cards);
    }
}

impl<G: CardGenerator, R> Deck<G, R> {
    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card that would be dealt next.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.peek()
    }

    /// Iterates the remaining cards in deal order without removing them.
    #[must_use]
    pub fn iter(&self) -> <G::Storage as CardStorage>::Iter<'_> {
        self.cards.iter()
    }

    /// Returns the generator this deck was created with.
    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Replenishes the deck.
    ///
    /// With `cards` of `None` the generator's canonical cards are used. When
    /// `keep_current_cards` is `false` the remaining cards are discarded;
    /// otherwise they are kept and placed according to the configured
    /// [`KeepPolicy`].
    pub fn replenish(&mut self, cards: Option<Vec<Card>>, keep_current_cards: bool) {
        if keep_current_cards {
            self.replenish_keeping(cards, self.options.keep_policy);
        } else {
            let cards = cards.unwrap_or_else(|| self.generator.canonical_cards());
            debug!(added = cards.len(), "replenished deck");
            self.cards = self.generator.convert(cards);
        }
    }

    /// Replenishes the deck while keeping the remaining cards, placed as
    /// `policy` says.
    ///
    /// The remaining cards keep their relative deal order, and the new cards
    /// keep the order the generator's conversion gives them.
    pub fn replenish_keeping(&mut self, cards: Option<Vec<Card>>, policy: KeepPolicy) {
        let cards = cards.unwrap_or_else(|| self.generator.canonical_cards());
        let added = self.generator.convert(cards).into_deal_order();
        let current = core::mem::take(&mut self.cards).into_deal_order();
        debug!(kept = current.len(), added = added.len(), ?policy, "replenished deck");

        let order = match policy {
            KeepPolicy::RemainingOnTop => {
                let mut order = current;
                order.extend(added);
                order
            }
            KeepPolicy::RemainingOnBottom => {
                let mut order = added;
                order.extend(current);
                order
            }
        };
        self.cards = G::Storage::from_deal_order(order);
    }
}

impl<'a, G: CardGenerator, R> IntoIterator for &'a Deck<G, R>
where
    G::Storage: 'a,
{
    type Item = &'a Card;
    type IntoIter = <G::Storage as CardStorage>::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<G: CardGenerator, R> fmt::Debug for Deck<G, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("remaining", &self.cards.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
