//! Game sessions and their undo/redo history.
//!
//! A [`GameSession`] wraps the live [`Layout`](crate::table::Layout) with a
//! [`History`], applies validated moves, and tracks whether the game is
//! still active, folded, or won.

pub mod history;
pub mod game;

pub use history::{History, RedoEntry};
pub use game::{GameSession, MoveOutcome, SessionStatus};
