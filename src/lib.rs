//! A 52-card deck tracker with optional `no_std` support.
//!
//! The crate provides a [`DeckView`] that shows a standard deck grouped by
//! suit and ordered by rank strength, lets the user mark cards as used,
//! hide the used cards, and reset.
//!
//! # Example
//!
//! ```
//! use deckview::{DeckView, Rank, Suit, ViewOptions};
//!
//! let view = DeckView::standard(ViewOptions::default()).unwrap();
//! let ace = view.catalog.find(Suit::Spades, Rank::Ace).unwrap().id;
//!
//! assert_eq!(view.toggle_card(ace), Ok(true));
//! view.hide_used_cards();
//! assert!(view.is_hidden(ace));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod catalog;
pub mod error;
pub mod options;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, CardColor, CardId, DECK_SIZE, Rank, Suit};
pub use catalog::{Catalog, SuitGroup};
pub use error::{CatalogError, ToggleError};
pub use options::ViewOptions;
pub use view::{DeckRender, DeckView, Heading, Session, SuitSection, Tile, TileStyle, Tone};
