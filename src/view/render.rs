//! Render model: a pure projection of catalog and session state.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{CardId, Suit};
use crate::catalog::Catalog;
use crate::options::ViewOptions;

use super::session::Session;

/// Text color of a heading or tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Red print.
    Red,
    /// Default dark print.
    Neutral,
    /// Greyed out (used cards).
    Muted,
}

/// Visual state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStyle {
    /// Unmarked card.
    Normal,
    /// Card marked as used.
    Clicked,
}

/// Heading of a suit section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The section suit.
    pub suit: Suit,
    /// Suit glyph.
    pub symbol: char,
    /// Capitalized suit name.
    pub title: &'static str,
    /// Red when the first card of the suit is red, otherwise neutral.
    pub tone: Tone,
}

/// A clickable card tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Id passed back to `toggle_card` when the tile is clicked.
    pub id: CardId,
    /// Rank label.
    pub rank: &'static str,
    /// Suit glyph.
    pub symbol: char,
    /// Used or not.
    pub style: TileStyle,
    /// Print color.
    pub tone: Tone,
    /// Card name, when enabled in the options.
    pub name: Option<String>,
}

/// One suit heading followed by its visible tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitSection {
    /// Section heading.
    pub heading: Heading,
    /// Visible tiles in rank strength order.
    pub tiles: Vec<Tile>,
}

/// The full rendered deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckRender {
    /// Sections in suit display order.
    pub sections: Vec<SuitSection>,
}

impl DeckRender {
    /// Returns the number of visible tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.sections.iter().map(|section| section.tiles.len()).sum()
    }

    /// Returns the ids of visible tiles in render order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<CardId> {
        self.sections
            .iter()
            .flat_map(|section| section.tiles.iter().map(|tile| tile.id))
            .collect()
    }
}

pub(super) fn render(catalog: &Catalog, session: &Session, options: &ViewOptions) -> DeckRender {
    let sections = catalog
        .grouped()
        .into_iter()
        .map(|group| {
            let tone = match group.cards.first() {
                Some(card) if card.is_red() => Tone::Red,
                _ => Tone::Neutral,
            };
            let heading = Heading {
                suit: group.suit,
                symbol: group.suit.symbol(),
                title: group.suit.title(),
                tone,
            };

            let tiles = group
                .cards
                .iter()
                .filter(|card| !session.is_hidden(card.id))
                .map(|card| {
                    let clicked = session.is_clicked(card.id);
                    let tone = if clicked {
                        Tone::Muted
                    } else if card.is_red() {
                        Tone::Red
                    } else {
                        Tone::Neutral
                    };
                    Tile {
                        id: card.id,
                        rank: card.rank.label(),
                        symbol: card.suit.symbol(),
                        style: if clicked {
                            TileStyle::Clicked
                        } else {
                            TileStyle::Normal
                        },
                        tone,
                        name: options.show_names.then(|| card.name.clone()),
                    }
                })
                .collect();

            SuitSection { heading, tiles }
        })
        .collect();

    DeckRender { sections }
}

impl fmt::Display for DeckRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{} {}", section.heading.symbol, section.heading.title)?;
            if section.tiles.is_empty() {
                writeln!(f, "  (all hidden)")?;
                continue;
            }
            for tile in &section.tiles {
                let face = match tile.style {
                    TileStyle::Normal => [' ', ' '],
                    TileStyle::Clicked => ['(', ')'],
                };
                write!(f, " {}{:>2}{}{}", face[0], tile.rank, tile.symbol, face[1])?;
                if let Some(name) = &tile.name {
                    write!(f, " {name}")?;
                }
                write!(f, " #{}", tile.id)?;
            }
            writeln!(f)?;
        }
        write!(f, "[Hide Cards] [Reset Game]")
    }
}
