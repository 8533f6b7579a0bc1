//! Dealing: shuffle a fresh deck and lay out the opening table.

pub mod dealer;

pub use dealer::{deal, deal_new_game, shuffle};
