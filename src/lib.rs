//! # klondike-engine
//!
//! The rules engine of a Klondike solitaire game.
//!
//! Given a table layout and a requested move, the engine decides whether the
//! move is legal, produces the resulting layout, and keeps a reversible
//! history so moves can be undone and redone.
//!
//! ## Design Principles
//!
//! 1. **Value in, value out**: [`validate`] is a pure function over explicit
//!    inputs. No global state, no I/O.
//!
//! 2. **Conservation**: every successful move relocates a contiguous run of
//!    cards. The 52 cards are never duplicated or lost.
//!
//! 3. **Rejections are data**: illegal requests return a [`Rejection`]
//!    carrying the reason string. Nothing is mutated on rejection.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: piles are `im` vectors, so pushing a
//!   layout onto the undo stack shares structure with the live one.
//!
//! - **Seeded Dealing**: ChaCha8 shuffles; the seed is kept on the session
//!   so any deal can be replayed.
//!
//! ## Modules
//!
//! - `core`: Cards, configuration, errors, RNG
//! - `table`: Piles and layouts
//! - `rules`: Move requests, validation, legal-move enumeration
//! - `session`: Game sessions with undo/redo history
//! - `deal`: Shuffling and the opening deal
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{deal_new_game, DrawMode, GameConfig, SessionStatus};
//!
//! let mut session = deal_new_game(&GameConfig::new().with_seed(1).with_draw_mode(DrawMode::One));
//! session.draw().unwrap();
//! assert_eq!(session.move_log().len(), 1);
//!
//! session.undo().unwrap();
//! assert!(session.move_log().is_empty());
//!
//! session.fold().unwrap();
//! assert_eq!(session.status(), SessionStatus::Folded);
//! ```

pub mod core;
pub mod table;
pub mod rules;
pub mod session;
pub mod deal;

// Re-export commonly used types
pub use crate::core::{
    fresh_deck, Card, Color, Rank, Suit,
    DrawMode, GameConfig,
    DeckError, Rejection, RejectionKind, SnapshotError,
    GameRng,
};

pub use crate::table::{Layout, Pile, PileId};

pub use crate::rules::{legal_moves, validate, Move, MoveKind};

pub use crate::session::{GameSession, History, MoveOutcome, SessionStatus};

pub use crate::deal::{deal, deal_new_game, shuffle};
