//! Klondike rules: move requests, validation, and move enumeration.
//!
//! Validation is a free function over explicit inputs. There is no shared
//! validator object, so sessions cannot interfere with each other.

pub mod moves;
pub mod validator;
pub mod legal;

pub use moves::{Move, MoveKind};
pub use validator::{can_move_to_foundation, validate};
pub use legal::{has_valid_moves, legal_moves};
