//! Table state: piles and layouts.
//!
//! ## Key Types
//!
//! - `PileId`: One of the 13 named piles (`pile1`..`pile7`, `stack1`..`stack4`, `draw`, `discard`)
//! - `Pile`: Ordered cards, top = last
//! - `Layout`: All 13 piles at one instant

pub mod pile;
pub mod layout;

pub use pile::{Pile, PileId, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
pub use layout::Layout;
