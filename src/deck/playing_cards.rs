//! The standard 52-card deck.

use crate::generator::StandardGenerator;
#[cfg(feature = "os_rng")]
use crate::random::OsEntropy;

use super::Deck;

/// A standard deck of playing cards: the standard generator on stack storage.
///
/// The unshuffled deck deals the Ace of Clubs first.
///
/// ```
/// use carddeck::PlayingCards;
///
/// let mut deck = PlayingCards::standard();
/// let top = deck.deal_one().unwrap();
/// assert_eq!((top.value(), top.suit().name()), ("A", "Clubs"));
/// ```
#[cfg(feature = "os_rng")]
pub type PlayingCards<R = OsEntropy> = Deck<StandardGenerator, R>;

/// A standard deck of playing cards: the standard generator on stack storage.
#[cfg(not(feature = "os_rng"))]
pub type PlayingCards<R> = Deck<StandardGenerator, R>;

#[cfg(feature = "os_rng")]
impl Deck<StandardGenerator, OsEntropy> {
    /// Creates an unshuffled 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(StandardGenerator::new())
    }
}

#[cfg(feature = "os_rng")]
impl Default for Deck<StandardGenerator, OsEntropy> {
    fn default() -> Self {
        Self::standard()
    }
}
