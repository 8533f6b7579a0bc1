//! Cards, suits, ranks and the 52-card deck.
//!
//! ## Identity vs. State
//!
//! A card's identity is its `(suit, rank)` pair. `face_up` is table state:
//! the same card may be face-down in one layout and face-up in the next.
//! Lookups across piles therefore compare [`Card::key`], never the whole
//! value.
//!
//! ## Ordering
//!
//! Ranks run ace low to king high with no wraparound:
//!
//! ```
//! use klondike_engine::core::Rank;
//!
//! assert_eq!(Rank::Ace.successor(), Some(Rank::Two));
//! assert_eq!(Rank::King.successor(), None);
//! assert_eq!(Rank::Ace.predecessor(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in one suit (ace through king).
pub const SUIT_SIZE: usize = 13;

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Hearts and diamonds are red, spades and clubs black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The thirteen ranks, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "ace")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "jack")]
    Jack,
    #[serde(rename = "queen")]
    Queen,
    #[serde(rename = "king")]
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; SUIT_SIZE] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in the ascending order (ace = 0, king = 12).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The next rank up, or `None` for king.
    #[must_use]
    pub fn successor(self) -> Option<Rank> {
        Self::ALL.get(self.ordinal() + 1).copied()
    }

    /// The next rank down, or `None` for ace.
    #[must_use]
    pub fn predecessor(self) -> Option<Rank> {
        self.ordinal().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Name as used on the wire (`"ace"`, `"2"`, ..., `"king"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// The same card, turned face-up.
    #[must_use]
    pub const fn turned_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// The same card, turned face-down.
    #[must_use]
    pub const fn turned_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// Identity of the card, ignoring orientation.
    #[must_use]
    pub const fn key(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// Whether two values denote the same physical card.
    #[must_use]
    pub fn same_card(&self, other: &Card) -> bool {
        self.key() == other.key()
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// The 52-card deck, face-down, suit-major then rank-minor.
#[must_use]
pub fn fresh_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}
