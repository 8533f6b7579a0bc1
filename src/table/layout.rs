//! The table layout: all 13 piles at one instant.
//!
//! On the wire a layout is a map from pile name to its cards, bottom to top:
//!
//! ```json
//! { "pile1": [...], ..., "stack4": [...], "draw": [...], "discard": [...] }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileId, PILE_COUNT};
use crate::core::card::{Card, DECK_SIZE, SUIT_SIZE};
use crate::core::error::DeckError;

/// All 13 piles of a table.
///
/// Cloning is cheap: piles are persistent vectors, so history snapshots
/// share unchanged piles with the live layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LayoutRepr", into = "LayoutRepr")]
pub struct Layout {
    piles: [Pile; PILE_COUNT],
}

impl Layout {
    /// A table with every pile empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace one pile, builder style.
    #[must_use]
    pub fn with_pile(mut self, id: PileId, cards: impl IntoIterator<Item = Card>) -> Self {
        *self.pile_mut(id) = cards.into_iter().collect();
        self
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.slot()]
    }

    pub fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        &mut self.piles[id.slot()]
    }

    /// Iterate `(id, pile)` over all 13 piles.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> + '_ {
        PileId::all().map(move |id| (id, self.pile(id)))
    }

    /// Total cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Cards already on the foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        PileId::FOUNDATIONS.iter().map(|&id| self.pile(id).len()).sum()
    }

    /// True once every foundation holds a full suit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        PileId::FOUNDATIONS
            .iter()
            .all(|&id| self.pile(id).len() == SUIT_SIZE)
    }

    /// Check that the table holds exactly one 52-card deck.
    pub fn check_conservation(&self) -> Result<(), DeckError> {
        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(DeckError::WrongSize { found });
        }

        let mut seen = FxHashSet::default();
        for (_, pile) in self.piles() {
            for card in pile.iter() {
                if !seen.insert(card.key()) {
                    return Err(DeckError::Duplicate(*card));
                }
            }
        }
        Ok(())
    }
}

/// Named-field form used for serialization.
#[derive(Clone, Serialize, Deserialize)]
struct LayoutRepr {
    pile1: Pile,
    pile2: Pile,
    pile3: Pile,
    pile4: Pile,
    pile5: Pile,
    pile6: Pile,
    pile7: Pile,
    stack1: Pile,
    stack2: Pile,
    stack3: Pile,
    stack4: Pile,
    draw: Pile,
    discard: Pile,
}

impl From<LayoutRepr> for Layout {
    fn from(r: LayoutRepr) -> Self {
        Self {
            piles: [
                r.pile1, r.pile2, r.pile3, r.pile4, r.pile5, r.pile6, r.pile7, r.stack1, r.stack2,
                r.stack3, r.stack4, r.draw, r.discard,
            ],
        }
    }
}

impl From<Layout> for LayoutRepr {
    fn from(layout: Layout) -> Self {
        let [pile1, pile2, pile3, pile4, pile5, pile6, pile7, stack1, stack2, stack3, stack4, draw, discard] =
            layout.piles;
        Self {
            pile1,
            pile2,
            pile3,
            pile4,
            pile5,
            pile6,
            pile7,
            stack1,
            stack2,
            stack3,
            stack4,
            draw,
            discard,
        }
    }
}
