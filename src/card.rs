//! Card types and the standard deck layout.

use alloc::borrow::Cow;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Card suit.
///
/// A suit is a plain value: cards that share a suit each carry their own copy.
/// The standard suits borrow `'static` strings, so cloning them never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suit {
    name: Cow<'static, str>,
    color: Cow<'static, str>,
}

impl Suit {
    /// Creates a new suit.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, color: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Creates a suit from static strings.
    #[must_use]
    pub const fn from_static(name: &'static str, color: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            color: Cow::Borrowed(color),
        }
    }

    /// Returns the name of the suit, e.g. `"Hearts"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color of the suit, e.g. `"Red"`.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A playing card.
///
/// Two cards are the same card when their value and suit name match; the
/// suit color does not take part in equality.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    value: Cow<'static, str>,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: the value label is not validated, so custom decks may use any
    /// labels they like.
    #[must_use]
    pub fn new(value: impl Into<Cow<'static, str>>, suit: Suit) -> Self {
        Self {
            value: value.into(),
            suit,
        }
    }

    /// Returns the value label of the card, e.g. `"10"` or `"Q"`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> &Suit {
        &self.suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.suit.name == other.suit.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.suit.name.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit.name)
    }
}

/// Hearts.
pub const HEARTS: Suit = Suit::from_static("Hearts", "Red");
/// Diamonds.
pub const DIAMONDS: Suit = Suit::from_static("Diamonds", "Red");
/// Spades.
pub const SPADES: Suit = Suit::from_static("Spades", "Black");
/// Clubs.
pub const CLUBS: Suit = Suit::from_static("Clubs", "Black");

/// Standard suits, in canonical deck order.
pub const SUITS: [Suit; 4] = [HEARTS, DIAMONDS, SPADES, CLUBS];

/// Standard ranks, in canonical deck order.
pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
