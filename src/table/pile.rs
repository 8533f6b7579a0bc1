//! Pile names and pile contents.
//!
//! A table has exactly 13 piles, addressed by [`PileId`]:
//!
//! | Name              | Role                          |
//! |-------------------|-------------------------------|
//! | `pile1`..`pile7`  | tableau                       |
//! | `stack1`..`stack4`| foundations                   |
//! | `draw`            | stock, drawn from the head    |
//! | `discard`         | waste, receives drawn cards   |
//!
//! Every pile's top card is its last card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::error::Rejection;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation stacks.
pub const FOUNDATION_COUNT: usize = 4;

/// Total piles on the table.
pub const PILE_COUNT: usize = TABLEAU_COUNT + FOUNDATION_COUNT + 2;

/// Identifies one of the 13 piles.
///
/// Tableau and foundation indices are 0-based; `Tableau(0)` is `pile1`.
/// Construct from names with `str::parse`, or from indices with
/// [`PileId::tableau`] and [`PileId::foundation`], which check the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PileId {
    Tableau(u8),
    Foundation(u8),
    Draw,
    Discard,
}

impl PileId {
    /// The seven tableau piles, `pile1` first.
    pub const TABLEAU: [PileId; TABLEAU_COUNT] = [
        PileId::Tableau(0),
        PileId::Tableau(1),
        PileId::Tableau(2),
        PileId::Tableau(3),
        PileId::Tableau(4),
        PileId::Tableau(5),
        PileId::Tableau(6),
    ];

    /// The four foundations, `stack1` first.
    pub const FOUNDATIONS: [PileId; FOUNDATION_COUNT] = [
        PileId::Foundation(0),
        PileId::Foundation(1),
        PileId::Foundation(2),
        PileId::Foundation(3),
    ];

    /// Iterate over all 13 piles in storage order.
    pub fn all() -> impl Iterator<Item = PileId> {
        Self::TABLEAU
            .into_iter()
            .chain(Self::FOUNDATIONS)
            .chain([PileId::Draw, PileId::Discard])
    }

    /// The tableau pile at 0-based `index`, if there is one.
    #[must_use]
    pub const fn tableau(index: usize) -> Option<PileId> {
        if index < TABLEAU_COUNT {
            Some(PileId::Tableau(index as u8))
        } else {
            None
        }
    }

    /// The foundation at 0-based `index`, if there is one.
    #[must_use]
    pub const fn foundation(index: usize) -> Option<PileId> {
        if index < FOUNDATION_COUNT {
            Some(PileId::Foundation(index as u8))
        } else {
            None
        }
    }

    /// Whether the index names a real pile (`Tableau(7)` does not).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            PileId::Tableau(i) => (i as usize) < TABLEAU_COUNT,
            PileId::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
            PileId::Draw | PileId::Discard => true,
        }
    }

    /// Storage slot in a layout (0..13).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range, instead of aliasing another pile.
    #[must_use]
    pub const fn slot(self) -> usize {
        assert!(self.is_valid(), "pile index out of range");
        match self {
            PileId::Tableau(i) => i as usize,
            PileId::Foundation(i) => TABLEAU_COUNT + i as usize,
            PileId::Draw => TABLEAU_COUNT + FOUNDATION_COUNT,
            PileId::Discard => TABLEAU_COUNT + FOUNDATION_COUNT + 1,
        }
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Tableau(i) => write!(f, "pile{}", i + 1),
            PileId::Foundation(i) => write!(f, "stack{}", i + 1),
            PileId::Draw => f.write_str("draw"),
            PileId::Discard => f.write_str("discard"),
        }
    }
}

impl std::str::FromStr for PileId {
    type Err = Rejection;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        // 1-based on the wire
        let numbered = |prefix: &str| -> Option<usize> {
            let n: usize = name.strip_prefix(prefix)?.parse().ok()?;
            n.checked_sub(1)
        };

        match name {
            "draw" => Ok(PileId::Draw),
            "discard" => Ok(PileId::Discard),
            _ => numbered("pile")
                .and_then(PileId::tableau)
                .or_else(|| numbered("stack").and_then(PileId::foundation))
                .ok_or_else(|| Rejection::unknown_pile(name)),
        }
    }
}

/// An ordered pile of cards; the top card is the last one.
///
/// Backed by a persistent vector so that cloning a whole table for the
/// undo history shares structure instead of copying cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top (last) card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// The head (first) card. For the draw pile, the next card drawn.
    #[must_use]
    pub fn head(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Card at `index`, counting from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Index of `card` in this pile, matched by suit and rank.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c.same_card(card))
    }

    /// Add a card to the top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the cards from `index` to the top.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn split_off(&mut self, index: usize) -> Pile {
        Pile {
            cards: self.cards.split_off(index),
        }
    }

    /// Remove and return up to `count` cards starting at `index`.
    ///
    /// Cards after the taken range stay in place.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn take_range(&mut self, index: usize, count: usize) -> Pile {
        let mut taken = self.cards.split_off(index);
        let rest = taken.split_off(count.min(taken.len()));
        self.cards.append(rest);
        Pile { cards: taken }
    }

    /// Append another pile on top of this one, preserving its order.
    pub fn append(&mut self, other: Pile) {
        self.cards.append(other.cards);
    }

    /// Turn the top card face-up, if any.
    pub fn reveal_top(&mut self) {
        if let Some(card) = self.cards.back_mut() {
            card.face_up = true;
        }
    }

    /// Turn every card face-up.
    pub fn turn_all_up(&mut self) {
        for card in self.cards.iter_mut() {
            card.face_up = true;
        }
    }

    /// Copy the cards out, bottom to top.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Pile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
