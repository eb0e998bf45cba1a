//! Storage disciplines that fix the order in which cards are dealt.
//!
//! A storage is built from a construction sequence and then dealt from its
//! top. Iterating a storage walks the cards top-first, which is exactly the
//! order successive pops would return them in.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
use core::iter::Rev;
use core::slice;

use crate::card::Card;

/// Card storage with a fixed deal order.
pub trait CardStorage: Default {
    /// Top-first iterator over the stored cards.
    type Iter<'a>: Iterator<Item = &'a Card>
    where
        Self: 'a;

    /// Builds storage by pushing `cards` in sequence order.
    #[must_use]
    fn from_sequence(cards: Vec<Card>) -> Self {
        let mut storage = Self::default();
        for card in cards {
            storage.push(card);
        }
        storage
    }

    /// Builds storage whose deal order is exactly `cards`.
    #[must_use]
    fn from_deal_order(cards: Vec<Card>) -> Self;

    /// Adds one card the way [`from_sequence`](Self::from_sequence) adds each card.
    fn push(&mut self, card: Card);

    /// Removes and returns the top card.
    fn pop(&mut self) -> Option<Card>;

    /// Returns the top card without removing it.
    fn peek(&self) -> Option<&Card>;

    /// Returns the number of stored cards.
    fn len(&self) -> usize;

    /// Returns whether the storage is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the stored cards top-first without removing them.
    fn iter(&self) -> Self::Iter<'_>;

    /// Consumes the storage, returning its cards in deal order.
    #[must_use]
    fn into_deal_order(self) -> Vec<Card>;
}

/// Last-in, first-out storage.
///
/// The last card of the construction sequence ends up on top and is dealt
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStack {
    /// Bottom card first, top card last.
    cards: Vec<Card>,
}

impl CardStorage for CardStack {
    type Iter<'a> = Rev<slice::Iter<'a, Card>>;

    fn from_sequence(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn from_deal_order(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.cards.iter().rev()
    }

    fn into_deal_order(mut self) -> Vec<Card> {
        self.cards.reverse();
        self.cards
    }
}

/// First-in, first-out storage.
///
/// The first card of the construction sequence is dealt first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardQueue {
    /// Front card is the top of the deck.
    cards: VecDeque<Card>,
}

impl CardStorage for CardQueue {
    type Iter<'a> = vec_deque::Iter<'a, Card>;

    fn from_deal_order(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
        }
    }

    fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    fn pop(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.cards.iter()
    }

    fn into_deal_order(self) -> Vec<Card> {
        Vec::from(self.cards)
    }
}
