//! Deck view configuration options.

/// Configuration options for a [`DeckView`](crate::DeckView).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckview::ViewOptions;
///
/// let options = ViewOptions::default()
///     .with_strict_ids(true)
///     .with_show_names(true);
/// assert!(options.strict_ids);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    /// Reject toggles of ids that are not in the catalog.
    ///
    /// When disabled, an unknown id is recorded like any other and simply
    /// matches no card.
    pub strict_ids: bool,
    /// Include each card's name label on its rendered tile.
    pub show_names: bool,
}

impl ViewOptions {
    /// Sets whether unknown ids are rejected by `toggle_card`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckview::ViewOptions;
    ///
    /// let options = ViewOptions::default().with_strict_ids(true);
    /// assert_eq!(options.strict_ids, true);
    /// ```
    #[must_use]
    pub const fn with_strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    /// Sets whether tiles carry the card name.
    ///
    /// # Example
    ///
    /// ```
    /// use deckview::ViewOptions;
    ///
    /// let options = ViewOptions::default().with_show_names(true);
    /// assert_eq!(options.show_names, true);
    /// ```
    #[must_use]
    pub const fn with_show_names(mut self, show: bool) -> Self {
        self.show_names = show;
        self
    }
}
