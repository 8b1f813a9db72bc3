//! The static card catalog and its suit/rank grouping.

use alloc::format;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use log::debug;
use serde::Deserialize;

use crate::card::{Card, CardId, DECK_SIZE, Rank, Suit};
use crate::error::CatalogError;

const STANDARD_CATALOG: &str = include_str!("../data/cards.json");

#[derive(Deserialize)]
struct CatalogFile {
    cards: Vec<Card>,
}

/// Cards of one suit, ordered by rank strength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroup<'a> {
    /// The suit shared by every card in the group.
    pub suit: Suit,
    /// Cards ordered A, K, Q, J, 10 down to 2.
    pub cards: Vec<&'a Card>,
}

/// A validated, immutable catalog of exactly [`DECK_SIZE`] cards.
///
/// # Example
///
/// ```
/// use deckview::{Catalog, Rank, Suit};
///
/// let catalog = Catalog::standard().unwrap();
/// assert_eq!(catalog.len(), 52);
///
/// let ace = catalog.find(Suit::Hearts, Rank::Ace).unwrap();
/// assert_eq!(ace.name, "Ace of Hearts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Loads the bundled standard deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails validation.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_json(STANDARD_CATALOG)
    }

    /// Parses and validates a catalog from JSON of the form
    /// `{"cards": [{"id": 1, "suit": "hearts", "rank": "A", ...}, ...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the text is not a catalog
    /// (including unknown suit, rank, or color names), or any validation
    /// error from [`Catalog::from_cards`].
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(source).map_err(|err| CatalogError::Malformed {
                message: format!("{err}"),
            })?;
        Self::from_cards(file.cards)
    }

    /// Validates a list of card records.
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not hold exactly one card per
    /// suit and rank, if an id repeats, or if a color disagrees with its suit.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.len() != DECK_SIZE {
            return Err(CatalogError::WrongCardCount {
                expected: DECK_SIZE,
                found: cards.len(),
            });
        }

        let mut ids = HashSet::with_capacity(DECK_SIZE);
        let mut faces = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if !ids.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
            if !faces.insert((card.suit, card.rank)) {
                return Err(CatalogError::DuplicateCard {
                    suit: card.suit,
                    rank: card.rank,
                });
            }
            if card.color != card.suit.color() {
                return Err(CatalogError::ColorMismatch {
                    id: card.id,
                    suit: card.suit,
                    color: card.color,
                });
            }
        }

        debug!("loaded catalog of {} cards", cards.len());
        Ok(Self { cards })
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the catalog is empty. Always `false` once validated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns whether the id belongs to a catalog card.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the card with the given suit and rank.
    #[must_use]
    pub fn find(&self, suit: Suit, rank: Rank) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.suit == suit && card.rank == rank)
    }

    /// Iterates over the cards in catalog order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Groups the cards by suit in display order (hearts, diamonds, clubs,
    /// spades), each group sorted by rank strength.
    ///
    /// The sort is stable, so cards of equal strength keep catalog order.
    #[must_use]
    pub fn grouped(&self) -> Vec<SuitGroup<'_>> {
        Suit::ALL
            .into_iter()
            .map(|suit| {
                let mut cards: Vec<&Card> =
                    self.cards.iter().filter(|card| card.suit == suit).collect();
                cards.sort_by_key(|card| card.rank.strength());
                SuitGroup { suit, cards }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
