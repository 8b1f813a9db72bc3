//! Card vocabulary: suits, ranks, colors, and the card record itself.

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of cards in a complete catalog.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in display order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the capitalized suit name used in section headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }

    /// Returns the color every card of this suit is printed in.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Self::Hearts | Self::Diamonds => CardColor::Red,
            Self::Clubs | Self::Spades => CardColor::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        })
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace.
    #[serde(rename = "A")]
    Ace,
    /// Two.
    #[serde(rename = "2")]
    Two,
    /// Three.
    #[serde(rename = "3")]
    Three,
    /// Four.
    #[serde(rename = "4")]
    Four,
    /// Five.
    #[serde(rename = "5")]
    Five,
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "J")]
    Jack,
    /// Queen.
    #[serde(rename = "Q")]
    Queen,
    /// King.
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// Ranks from strongest to weakest: A, K, Q, J, 10 down to 2.
    pub const STRENGTH_ORDER: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Returns the sort key within a suit (1 = Ace, 13 = Two).
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::King => 2,
            Self::Queen => 3,
            Self::Jack => 4,
            Self::Ten => 5,
            Self::Nine => 6,
            Self::Eight => 7,
            Self::Seven => 8,
            Self::Six => 9,
            Self::Five => 10,
            Self::Four => 11,
            Self::Three => 12,
            Self::Two => 13,
        }
    }

    /// Returns the short label printed on a card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Print color of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// Red (hearts, diamonds).
    Red,
    /// Black (clubs, spades).
    Black,
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Black => "black",
        })
    }
}

/// Catalog identifier of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A catalog card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the catalog.
    pub id: CardId,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
    /// Point value. Displayed only; never used for ordering.
    pub value: u32,
    /// Human-readable label, e.g. "Ace of Hearts".
    pub name: String,
    /// Print color. Must agree with [`Suit::color`].
    pub color: CardColor,
}

impl Card {
    /// Creates a card whose color is derived from its suit.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        suit: Suit,
        rank: Rank,
        value: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            suit,
            rank,
            value,
            name: name.into(),
            color: suit.color(),
        }
    }

    /// Returns whether the card prints red.
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color == CardColor::Red
    }
}
