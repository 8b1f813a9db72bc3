//! The deck view: session state, user operations, and rendering.

use alloc::vec::Vec;

use log::{debug, warn};

use crate::card::CardId;
use crate::catalog::Catalog;
use crate::error::{CatalogError, ToggleError};
use crate::options::ViewOptions;
use crate::sync::Mutex;

mod render;
pub mod session;

pub use render::{DeckRender, Heading, SuitSection, Tile, TileStyle, Tone};
pub use session::Session;

/// A deck of cards the user marks as used, hides, and resets.
///
/// The view owns the catalog and one session. Each operation is a single
/// transition on the session; [`DeckView::render`] projects the current
/// state without changing it.
///
/// # Example
///
/// ```
/// use deckview::{CardId, DeckView, ViewOptions};
///
/// let view = DeckView::standard(ViewOptions::default()).unwrap();
/// view.toggle_card(CardId(1)).unwrap();
/// view.hide_used_cards();
/// assert_eq!(view.render().tile_count(), 51);
///
/// view.reset_game();
/// assert_eq!(view.render().tile_count(), 52);
/// ```
pub struct DeckView {
    /// The card catalog.
    pub catalog: Catalog,
    /// View options.
    pub options: ViewOptions,
    /// Session state.
    session: Mutex<Session>,
}

impl DeckView {
    /// Creates a view over `catalog` with a fresh session.
    #[must_use]
    pub fn new(catalog: Catalog, options: ViewOptions) -> Self {
        Self {
            catalog,
            options,
            session: Mutex::new(Session::default()),
        }
    }

    /// Creates a view over the bundled standard deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled catalog fails validation.
    pub fn standard(options: ViewOptions) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::standard()?, options))
    }

    /// Flips the used mark on a card and returns the new mark.
    ///
    /// Toggling twice restores the previous state. The hidden set is not
    /// touched: a card marked after [`DeckView::hide_used_cards`] stays
    /// visible until cards are hidden again.
    ///
    /// # Errors
    ///
    /// With [`ViewOptions::strict_ids`], returns an error if the id is not in
    /// the catalog. Otherwise never fails.
    pub fn toggle_card(&self, id: CardId) -> Result<bool, ToggleError> {
        if self.options.strict_ids && !self.catalog.contains(id) {
            warn!("rejected toggle of unknown card {id}");
            return Err(ToggleError::UnknownCard(id));
        }

        let clicked = self.session.lock().toggle(id);
        debug!("card {id} {}", if clicked { "marked used" } else { "unmarked" });
        Ok(clicked)
    }

    /// Hides every card currently marked as used.
    ///
    /// The hidden set is a copy taken now; later toggles do not change it.
    pub fn hide_used_cards(&self) {
        let mut session = self.session.lock();
        session.hide_used();
        debug!("hiding {} used cards", session.cards_to_hide.len());
    }

    /// Returns the session to its initial state: nothing marked or hidden.
    pub fn reset_game(&self) {
        self.session.replace(Session::default());
        debug!("session reset");
    }

    /// Returns whether the card is marked as used.
    pub fn is_clicked(&self, id: CardId) -> bool {
        self.session.lock().is_clicked(id)
    }

    /// Returns whether the card is currently left out of the render.
    pub fn is_hidden(&self, id: CardId) -> bool {
        self.session.lock().is_hidden(id)
    }

    /// Returns whether hiding is switched on.
    pub fn is_hiding(&self) -> bool {
        self.session.lock().hide_clicked_cards
    }

    /// Returns the used card ids in ascending order.
    pub fn clicked_cards(&self) -> Vec<CardId> {
        session::sorted_ids(&self.session.lock().clicked_cards)
    }

    /// Returns the frozen hidden set in ascending order.
    pub fn cards_to_hide(&self) -> Vec<CardId> {
        session::sorted_ids(&self.session.lock().cards_to_hide)
    }

    /// Returns a copy of the session state.
    pub fn session(&self) -> Session {
        self.session.lock().clone()
    }

    /// Returns the number of catalog cards that would be rendered.
    pub fn visible_count(&self) -> usize {
        let session = self.session.lock();
        self.catalog
            .iter()
            .filter(|card| !session.is_hidden(card.id))
            .count()
    }

    /// Renders the grouped, sorted deck for the current state.
    pub fn render(&self) -> DeckRender {
        let session = self.session.lock();
        render::render(&self.catalog, &session, &self.options)
    }
}

