//! Move requests and their classification.
//!
//! A [`Move`] is what a client asks for: the card being moved (plus, for
//! tableau runs, the cards stacked on it), a source pile name and a
//! destination pile name. It is a request, not a committed fact.
//!
//! Pile names stay strings here so that a misspelled name is reported as a
//! rejection by the validator instead of failing to decode.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;
use crate::core::error::Rejection;
use crate::table::PileId;

/// A requested card move.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::{Card, Rank, Suit};
/// use klondike_engine::rules::Move;
///
/// let six = Card::up(Suit::Diamonds, Rank::Six);
/// let mv = Move::new([six], "pile2", "pile1");
/// assert_eq!(mv.lead(), Some(&six));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The moved card first, then any cards stacked on it.
    /// SmallVec keeps the common single-card case off the heap.
    pub cards: SmallVec<[Card; 4]>,

    /// Source pile name.
    pub src: String,

    /// Destination pile name.
    pub dst: String,
}

impl Move {
    /// Create a move request.
    pub fn new(
        cards: impl IntoIterator<Item = Card>,
        src: impl Into<String>,
        dst: impl Into<String>,
    ) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            src: src.into(),
            dst: dst.into(),
        }
    }

    /// Create a move between known piles.
    pub fn between(cards: impl IntoIterator<Item = Card>, src: PileId, dst: PileId) -> Self {
        Self::new(cards, src.to_string(), dst.to_string())
    }

    /// The draw action: turn `card` (and any cards after it, up to the
    /// draw count) from the draw pile onto the discard pile.
    pub fn draw(card: Card) -> Self {
        Self::between([card], PileId::Draw, PileId::Discard)
    }

    /// The card being moved.
    #[must_use]
    pub fn lead(&self) -> Option<&Card> {
        self.cards.first()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lead() {
            Some(card) => write!(f, "{} from {} to {}", card, self.src, self.dst),
            None => write!(f, "(no card) from {} to {}", self.src, self.dst),
        }
    }
}

/// What kind of move a request is, decided once from its piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Turn cards from the draw pile onto the discard pile.
    DrawToDiscard,
    /// Play one card onto a foundation (0-based index).
    ToFoundation(u8),
    /// Move a card or run onto a tableau pile (0-based index).
    ToTableau(u8),
}

impl MoveKind {
    /// Classify a `(src, dst)` pair.
    ///
    /// Rejects destinations that can never receive a card from `src`.
    pub fn classify(src: PileId, dst: PileId) -> Result<Self, Rejection> {
        match dst {
            PileId::Draw => Err(Rejection::MoveToDraw),
            PileId::Discard if src == PileId::Draw => Ok(MoveKind::DrawToDiscard),
            PileId::Discard => Err(Rejection::DiscardFromNonDraw),
            _ if src == dst => Err(Rejection::SamePile),
            PileId::Foundation(i) => Ok(MoveKind::ToFoundation(i)),
            PileId::Tableau(i) => Ok(MoveKind::ToTableau(i)),
        }
    }

    /// The destination pile.
    #[must_use]
    pub fn destination(self) -> PileId {
        match self {
            MoveKind::DrawToDiscard => PileId::Discard,
            MoveKind::ToFoundation(i) => PileId::Foundation(i),
            MoveKind::ToTableau(i) => PileId::Tableau(i),
        }
    }
}
