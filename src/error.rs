//! Error types for catalog loading and view operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::{CardColor, CardId, Rank, Suit};

/// Errors that can occur while loading a card catalog.
///
/// A catalog that fails validation is rejected as a whole; there is no
/// partial deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The source could not be parsed into card records.
    #[error("malformed catalog: {message}")]
    Malformed {
        /// Parser diagnostic.
        message: String,
    },
    /// The catalog does not hold exactly one full deck.
    #[error("catalog has {found} cards, expected {expected}")]
    WrongCardCount {
        /// Required number of cards.
        expected: usize,
        /// Number of cards found.
        found: usize,
    },
    /// Two records share an id.
    #[error("duplicate card id {0}")]
    DuplicateId(CardId),
    /// Two records describe the same suit and rank.
    #[error("duplicate card {rank} of {suit}")]
    DuplicateCard {
        /// Suit of the repeated card.
        suit: Suit,
        /// Rank of the repeated card.
        rank: Rank,
    },
    /// A record's color disagrees with its suit.
    #[error("card {id} is {color} but {suit} cards are {}", .suit.color())]
    ColorMismatch {
        /// Offending card.
        id: CardId,
        /// Suit of the card.
        suit: Suit,
        /// Color given in the record.
        color: CardColor,
    },
}

/// Errors that can occur when toggling a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The id is not in the catalog (only reported with strict ids).
    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),
}
