//! Deck configuration options.

/// Where the cards still in the deck go when it is replenished while keeping
/// its current cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum KeepPolicy {
    /// Remaining cards stay on top and are dealt before the new cards.
    #[default]
    RemainingOnTop,
    /// Remaining cards go underneath the new cards.
    RemainingOnBottom,
}

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use carddeck::{DeckOptions, KeepPolicy};
///
/// let options = DeckOptions::default()
///     .with_keep_policy(KeepPolicy::RemainingOnBottom)
///     .with_shuffle_on_create(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Placement of remaining cards when replenishing with `keep_current_cards`.
    pub keep_policy: KeepPolicy,
    /// Whether the deck is shuffled once right after it is created.
    pub shuffle_on_create: bool,
}

impl DeckOptions {
    /// Sets where remaining cards go when replenishing.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::{DeckOptions, KeepPolicy};
    ///
    /// let options = DeckOptions::default().with_keep_policy(KeepPolicy::RemainingOnBottom);
    /// assert_eq!(options.keep_policy, KeepPolicy::RemainingOnBottom);
    /// ```
    #[must_use]
    pub const fn with_keep_policy(mut self, policy: KeepPolicy) -> Self {
        self.keep_policy = policy;
        self
    }

    /// Sets whether the deck is shuffled on creation.
    ///
    /// # Example
    ///
    /// ```
    /// use carddeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_create(true);
    /// assert!(options.shuffle_on_create);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_create(mut self, shuffle: bool) -> Self {
        self.shuffle_on_create = shuffle;
        self
    }
}
