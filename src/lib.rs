//! A playing-card deck engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that owns its cards, shuffles them with
//! a cryptographically secure Fisher-Yates shuffle, and deals them with
//! explicit exhaustion errors. What a deck contains, and in which order it is
//! dealt, comes from a pluggable [`CardGenerator`].
//!
//! # Example
//!
//! ```
//! use carddeck::{DealError, PlayingCards};
//!
//! let mut deck = PlayingCards::standard();
//! deck.shuffle();
//!
//! let hand: Vec<_> = deck.deal(5).collect::<Result<_, DealError>>().unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.len(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod generator;
pub mod options;
pub mod random;
pub mod storage;

// Re-export main types
pub use card::{CLUBS, Card, DECK_SIZE, DIAMONDS, HEARTS, RANKS, SPADES, SUITS, Suit};
pub use deck::{Deal, Deck, PlayingCards};
pub use error::{DealError, RandomError};
pub use generator::{CardGenerator, CardListGenerator, StandardGenerator};
pub use options::{DeckOptions, KeepPolicy};
#[cfg(feature = "os_rng")]
pub use random::OsEntropy;
pub use random::SecureRandom;
pub use storage::{CardQueue, CardStack, CardStorage};
