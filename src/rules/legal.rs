//! Enumeration of legal moves.
//!
//! Candidates are built from the table, then filtered through
//! [`validate`], so this module never restates a placement rule.
//!
//! Candidate sources:
//! - the draw action, from the head of the draw pile
//! - every face-up card in a tableau pile (moving its run)
//! - the top of the discard pile and of each foundation

use super::moves::Move;
use super::validator::{can_move_to_foundation, validate};
use crate::core::config::DrawMode;
use crate::table::{Layout, PileId};

/// Every move `validate` accepts from `layout`.
///
/// Order: the draw action first, then by source pile, then by destination
/// (foundations before tableau).
#[must_use]
pub fn legal_moves(layout: &Layout, draw_mode: DrawMode) -> Vec<Move> {
    let mut moves = Vec::new();

    if let Some(&head) = layout.pile(PileId::Draw).head() {
        moves.push(Move::draw(head));
    }

    let destinations: Vec<PileId> = PileId::FOUNDATIONS
        .into_iter()
        .chain(PileId::TABLEAU)
        .collect();

    for src in PileId::all().filter(|&p| p != PileId::Draw) {
        let pile = layout.pile(src);
        let starts: Vec<usize> = if src.is_tableau() {
            (0..pile.len()).filter(|&i| pile.get(i).is_some_and(|c| c.face_up)).collect()
        } else {
            pile.len().checked_sub(1).into_iter().collect()
        };

        for index in starts {
            let run: Vec<_> = pile.iter().skip(index).copied().collect();
            for &dst in &destinations {
                let candidate = Move::between(run.iter().copied(), src, dst);
                if validate(layout, &candidate, draw_mode).is_ok() {
                    moves.push(candidate);
                }
            }
        }
    }

    moves
}

/// Whether play can continue without undoing.
///
/// True while the draw pile has cards, or while some tableau top card can
/// go to a foundation.
#[must_use]
pub fn has_valid_moves(layout: &Layout) -> bool {
    if !layout.pile(PileId::Draw).is_empty() {
        return true;
    }

    PileId::TABLEAU.iter().filter_map(|&id| layout.pile(id).top()).any(|card| {
        PileId::FOUNDATIONS
            .iter()
            .any(|&stack| can_move_to_foundation(card, layout.pile(stack)))
    })
}
