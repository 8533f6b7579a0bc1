//! Undo/redo history.
//!
//! Two LIFO stacks of layouts plus the log of committed moves:
//!
//! - `undo`: layouts before each committed move, oldest first
//! - `moves`: the committed moves, parallel to `undo`
//! - `redo`: undone layouts, each with the move that produced it
//!
//! Undoing a move takes it off the log and carries it on the redo stack, so
//! redo restores the log exactly. Recording a fresh move clears the redo
//! stack (editor-style undo, not a branching history).

use serde::{Deserialize, Serialize};

use crate::rules::Move;
use crate::table::Layout;

/// A layout that was undone, with the move that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedoEntry {
    pub layout: Layout,
    pub mv: Move,
}

/// Undo and redo stacks for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<Layout>,
    moves: Vec<Move>,
    redo: Vec<RedoEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed move made from `prior`.
    pub fn record(&mut self, prior: Layout, mv: Move) {
        self.undo.push(prior);
        self.moves.push(mv);
        self.redo.clear();
    }

    /// Step back from `current`.
    ///
    /// Returns the layout to restore, or `None` if there is nothing to undo.
    pub fn step_back(&mut self, current: &Layout) -> Option<Layout> {
        let prior = self.undo.pop()?;
        // `moves` is parallel to `undo`
        let mv = self.moves.pop()?;
        self.redo.push(RedoEntry {
            layout: current.clone(),
            mv,
        });
        Some(prior)
    }

    /// Step forward from `current`.
    ///
    /// Returns the layout to restore, or `None` if there is nothing to redo.
    pub fn step_forward(&mut self, current: &Layout) -> Option<Layout> {
        let RedoEntry { layout, mv } = self.redo.pop()?;
        self.undo.push(current.clone());
        self.moves.push(mv);
        Some(layout)
    }

    /// Prior layouts, oldest first.
    #[must_use]
    pub fn undo_stack(&self) -> &[Layout] {
        &self.undo
    }

    /// Undone layouts; the next one to redo is last.
    #[must_use]
    pub fn redo_stack(&self) -> &[RedoEntry] {
        &self.redo
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Card, Rank, Suit};
    use crate::table::PileId;

    fn layout_with(rank: Rank) -> Layout {
        Layout::empty().with_pile(PileId::Discard, [Card::up(Suit::Hearts, rank)])
    }

    fn mv(rank: Rank) -> Move {
        Move::draw(Card::new(Suit::Hearts, rank))
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        let current = Layout::empty();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.step_back(&current), None);
        assert_eq!(history.step_forward(&current), None);
        assert_eq!(history, History::new());
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::new();
        let a = layout_with(Rank::Ace);
        let b = layout_with(Rank::Two);

        history.record(a.clone(), mv(Rank::Two));

        let restored = history.step_back(&b).unwrap();
        assert_eq!(restored, a);
        assert!(history.moves().is_empty());
        assert_eq!(history.redo_stack().len(), 1);

        let again = history.step_forward(&restored).unwrap();
        assert_eq!(again, b);
        assert_eq!(history.moves(), &[mv(Rank::Two)]);
        assert_eq!(history.undo_stack(), &[a]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        let a = layout_with(Rank::Ace);
        let b = layout_with(Rank::Two);

        history.record(a.clone(), mv(Rank::Two));
        history.step_back(&b);
        assert!(history.can_redo());

        history.record(a, mv(Rank::Three));
        assert!(!history.can_redo());
        assert_eq!(history.moves(), &[mv(Rank::Three)]);
    }

    #[test]
    fn test_lifo_order() {
        let mut history = History::new();
        let layouts: Vec<Layout> = [Rank::Ace, Rank::Two, Rank::Three].iter().map(|&r| layout_with(r)).collect();

        history.record(layouts[0].clone(), mv(Rank::Two));
        history.record(layouts[1].clone(), mv(Rank::Three));

        assert_eq!(history.step_back(&layouts[2]).as_ref(), Some(&layouts[1]));
        assert_eq!(history.step_back(&layouts[1]).as_ref(), Some(&layouts[0]));
        assert_eq!(history.step_back(&layouts[0]), None);
    }
}
