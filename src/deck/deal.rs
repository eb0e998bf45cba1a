use alloc::vec::Vec;
use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::DealError;
use crate::generator::CardGenerator;
use crate::storage::CardStorage;

use super::Deck;

/// Lazy iterator over cards being dealt, returned by [`Deck::deal`].
///
/// Each call to `next` removes one card from the deck. If the deck runs out
/// before the requested amount is reached, one `Err(DealError::Exhausted)` is
/// yielded and the iterator ends; cards already yielded stay dealt. Dropping
/// the iterator early leaves the undealt cards in the deck.
#[derive(Debug)]
#[must_use = "cards are only dealt as the iterator is consumed"]
pub struct Deal<'a, S> {
    storage: &'a mut S,
    remaining: usize,
}

impl<S: CardStorage> Iterator for Deal<'_, S> {
    type Item = Result<Card, DealError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        if let Some(card) = self.storage.pop() {
            self.remaining -= 1;
            trace!(%card, left = self.storage.len(), "dealt card");
            Some(Ok(card))
        } else {
            debug!(undealt = self.remaining, "deal attempted on an exhausted deck");
            self.remaining = 0;
            Some(Err(DealError::Exhausted))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Either every requested card is dealt, or all remaining cards are
        // followed by a single error.
        let items = self
            .remaining
            .min(self.storage.len().saturating_add(1));
        (items, Some(items))
    }
}

impl<S: CardStorage> ExactSizeIterator for Deal<'_, S> {}

impl<S: CardStorage> FusedIterator for Deal<'_, S> {}

impl<G: CardGenerator, R> Deck<G, R> {
    /// Deals `amount` cards lazily, in deal order.
    ///
    /// The returned iterator yields `Err(DealError::Exhausted)` at the point a
    /// card is needed from an empty deck. Cards yielded before that are not
    /// returned to the deck. Use [`deal_exact`](Self::deal_exact) when the
    /// deal must be all-or-nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{DealError, Deck, StandardGenerator};
    ///
    /// let mut deck = Deck::new(StandardGenerator::with_limit(2));
    /// let dealt: Vec<_> = deck.deal(3).collect();
    /// assert!(dealt[0].is_ok() && dealt[1].is_ok());
    /// assert_eq!(dealt[2], Err(DealError::Exhausted));
    /// ```
    pub fn deal(&mut self, amount: usize) -> Deal<'_, G::Storage> {
        Deal {
            storage: &mut self.cards,
            remaining: amount,
        }
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        self.deal(1).next().unwrap_or(Err(DealError::Exhausted))
    }

    /// Deals exactly `amount` cards, or none at all.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] without removing anything if
    /// fewer than `amount` cards remain.
    pub fn deal_exact(&mut self, amount: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.cards.len();
        if amount > remaining {
            debug!(requested = amount, remaining, "refused deal larger than the deck");
            return Err(DealError::NotEnoughCards {
                requested: amount,
                remaining,
            });
        }
        self.deal(amount).collect()
    }
}
