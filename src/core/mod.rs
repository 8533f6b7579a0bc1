//! Core engine types: cards, configuration, errors, RNG.
//!
//! Everything here is independent of table layout and game rules.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{fresh_deck, Card, Color, Rank, Suit, DECK_SIZE, SUIT_SIZE};
pub use config::{DrawMode, GameConfig};
pub use error::{DeckError, Rejection, RejectionKind, SnapshotError};
pub use rng::GameRng;
