//! Error types for the engine.
//!
//! ## Rejection
//!
//! Every refused move, undo, redo or fold is a [`Rejection`]. Its `Display`
//! output is the human-readable reason a host shows to the player, and
//! nothing more: no layout dump, no internal detail.
//!
//! Rejections fall into three kinds (see [`RejectionKind`]):
//! - **Structural**: the request itself is malformed
//! - **Rule**: a well-formed move breaks a placement rule
//! - **State**: the session cannot perform the operation right now

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;

/// Broad classification of a [`Rejection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Unknown pile, empty card list, card not present in the source, or a
    /// run listed wrongly.
    Structural,
    /// Ordering, suit, rank or empty-pile rule broken.
    Rule,
    /// Empty history, or the session is no longer active.
    State,
}

/// Why a requested operation was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    // === Structural ===
    #[error("unknown pile")]
    UnknownPile { name: String },

    #[error("move has no cards")]
    EmptyMove,

    #[error("card not found in source pile")]
    CardNotFound,

    #[error("source and destination are the same pile")]
    SamePile,

    #[error("cards do not match the run in source pile")]
    RunMismatch,

    // === Rule ===
    #[error("cannot move to draw pile")]
    MoveToDraw,

    #[error("can only move from draw to discard")]
    DiscardFromNonDraw,

    #[error("card is face down")]
    FaceDown,

    #[error("can only move one card to stack at a time")]
    MultipleToFoundation,

    #[error("card is not on top of source pile")]
    NotTopCard,

    #[error("first card on stack must be an ace")]
    FoundationNeedsAce,

    #[error("stack cards must be same suit")]
    FoundationSuitMismatch,

    #[error("card value does not match sequence")]
    SequenceMismatch,

    #[error("only kings can be moved to empty piles")]
    EmptyPileNeedsKing,

    #[error("cannot place card on top of same color")]
    SameColor,

    // === State ===
    #[error("no moves to undo")]
    NothingToUndo,

    #[error("no moves to redo")]
    NothingToRedo,

    #[error("game is over")]
    GameOver,
}

impl Rejection {
    /// Creates an UnknownPile rejection.
    pub fn unknown_pile(name: impl Into<String>) -> Self {
        Self::UnknownPile { name: name.into() }
    }

    /// Classify this rejection.
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::UnknownPile { .. }
            | Self::EmptyMove
            | Self::CardNotFound
            | Self::SamePile
            | Self::RunMismatch => RejectionKind::Structural,
            Self::NothingToUndo | Self::NothingToRedo | Self::GameOver => RejectionKind::State,
            _ => RejectionKind::Rule,
        }
    }

    /// The reason string shown to the player.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// A card sequence that is not exactly one 52-card deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("expected 52 cards, found {found}")]
    WrongSize { found: usize },

    #[error("duplicate card: {0}")]
    Duplicate(Card),
}

/// Failure encoding or decoding a session snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),
}
