//! Session state types.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::CardId;

/// Mutable state of one viewing session.
///
/// Starts empty and returns to empty on reset. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Cards currently marked as used.
    pub clicked_cards: HashSet<CardId>,
    /// Whether cards in `cards_to_hide` are left out of the render.
    pub hide_clicked_cards: bool,
    /// Copy of `clicked_cards` taken when cards were last hidden.
    pub cards_to_hide: HashSet<CardId>,
}

impl Session {
    /// Flips the used mark on `id` and returns the new mark.
    pub fn toggle(&mut self, id: CardId) -> bool {
        if self.clicked_cards.remove(&id) {
            false
        } else {
            self.clicked_cards.insert(id);
            true
        }
    }

    /// Freezes the current used set as the hidden set and turns hiding on.
    pub fn hide_used(&mut self) {
        self.cards_to_hide = self.clicked_cards.clone();
        self.hide_clicked_cards = true;
    }

    /// Returns whether the card is left out of the render.
    #[must_use]
    pub fn is_hidden(&self, id: CardId) -> bool {
        self.hide_clicked_cards && self.cards_to_hide.contains(&id)
    }

    /// Returns whether the card is marked as used.
    #[must_use]
    pub fn is_clicked(&self, id: CardId) -> bool {
        self.clicked_cards.contains(&id)
    }

    /// Returns whether the session is in its initial state.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.clicked_cards.is_empty() && !self.hide_clicked_cards && self.cards_to_hide.is_empty()
    }
}

pub(crate) fn sorted_ids(ids: &HashSet<CardId>) -> Vec<CardId> {
    let mut ids: Vec<CardId> = ids.iter().copied().collect();
    ids.sort_unstable();
    ids
}
