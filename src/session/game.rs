//! A single game of Klondike: the live layout plus its history.
//!
//! ## Lifecycle
//!
//! ```text
//! Active ──fold──▶ Folded
//!    │
//!    └──winning move──▶ Won
//! ```
//!
//! Both terminal states refuse every further move, undo, redo and fold.
//! A rejected operation leaves the session exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::History;
use crate::core::card::DECK_SIZE;
use crate::core::config::DrawMode;
use crate::core::error::{Rejection, SnapshotError};
use crate::rules::{self, Move};
use crate::table::{Layout, PileId};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    Active,
    Folded,
    Won,
}

impl SessionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != SessionStatus::Active
    }
}

/// Result of a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    /// Session status after the move (`Won` if it completed the foundations).
    pub status: SessionStatus,

    /// Advisory: false when the draw pile is empty and no tableau card can
    /// reach a foundation. The game stays active; the player may undo or fold.
    pub has_valid_moves: bool,
}

/// One player's game.
///
/// Owned by a single caller; hosts serving concurrent requests must allow at
/// most one mutation in flight per session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    current: Layout,
    history: History,
    draw_mode: DrawMode,
    status: SessionStatus,
    owner: Option<String>,
    winner: Option<String>,
    seed: Option<u64>,
}

impl GameSession {
    /// Start a session on `layout` with empty history.
    #[must_use]
    pub fn new(layout: Layout, draw_mode: DrawMode) -> Self {
        Self {
            current: layout,
            history: History::new(),
            draw_mode,
            status: SessionStatus::Active,
            owner: None,
            winner: None,
            seed: None,
        }
    }

    /// Set the player identity recorded as winner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Record the shuffle seed the layout was dealt from.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // === Mutations ===

    /// Validate and commit a move.
    ///
    /// On success the prior layout goes onto the undo stack, the redo stack
    /// is cleared, and win/stuck conditions are evaluated.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, Rejection> {
        self.ensure_active()?;

        let next = rules::validate(&self.current, &mv, self.draw_mode)?;
        debug!(%mv, "move committed");

        let prior = std::mem::replace(&mut self.current, next);
        self.history.record(prior, mv);

        if self.current.is_complete() {
            self.status = SessionStatus::Won;
            self.winner = self.owner.clone();
            info!(winner = ?self.winner, moves = self.history.moves().len(), "game won");
        }

        Ok(MoveOutcome {
            status: self.status,
            has_valid_moves: self.has_valid_moves(),
        })
    }

    /// Turn the next card(s) from the draw pile.
    pub fn draw(&mut self) -> Result<MoveOutcome, Rejection> {
        self.ensure_active()?;
        let head = *self.current.pile(PileId::Draw).head().ok_or(Rejection::CardNotFound)?;
        self.apply_move(Move::draw(head))
    }

    /// Restore the layout before the last committed move.
    pub fn undo(&mut self) -> Result<&Layout, Rejection> {
        self.ensure_active()?;
        let prior = self
            .history
            .step_back(&self.current)
            .ok_or(Rejection::NothingToUndo)?;
        self.current = prior;
        debug!(remaining = self.history.undo_stack().len(), "move undone");
        Ok(&self.current)
    }

    /// Re-apply the last undone move.
    pub fn redo(&mut self) -> Result<&Layout, Rejection> {
        self.ensure_active()?;
        let next = self
            .history
            .step_forward(&self.current)
            .ok_or(Rejection::NothingToRedo)?;
        self.current = next;
        debug!(remaining = self.history.redo_stack().len(), "move redone");
        Ok(&self.current)
    }

    /// Give up. The session becomes terminal.
    pub fn fold(&mut self) -> Result<(), Rejection> {
        self.ensure_active()?;
        self.status = SessionStatus::Folded;
        info!(owner = ?self.owner, cards_remaining = self.cards_remaining(), "game folded");
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::GameOver);
        }
        Ok(())
    }

    // === Queries ===

    /// The live layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.current
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        self.history.moves()
    }

    #[must_use]
    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// All four foundations are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current.is_complete()
    }

    /// See [`rules::has_valid_moves`].
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        rules::has_valid_moves(&self.current)
    }

    /// Cards not yet on a foundation.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        DECK_SIZE - self.current.foundation_count()
    }

    /// Every legal move from the live layout.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if !self.is_active() {
            return Vec::new();
        }
        rules::legal_moves(&self.current, self.draw_mode)
    }

    /// A legal move, if any, preferring foundation plays.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        let moves = self.legal_moves();
        moves
            .iter()
            .find(|m| m.dst.starts_with("stack"))
            .or_else(|| moves.iter().find(|m| m.dst != "discard"))
            .or_else(|| moves.first())
            .cloned()
    }

    // === Snapshots ===

    /// Encode the whole session (layout, history, status) for storage.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a session produced by [`GameSession::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
