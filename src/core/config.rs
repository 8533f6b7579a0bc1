//! Game configuration.
//!
//! Hosts configure a new game by providing:
//! - `DrawMode`: how many cards the draw action turns over
//! - a shuffle seed (random when absent)
//! - an owner identity, recorded as the winner on a win

use serde::{Deserialize, Serialize};

/// Number of cards turned from the draw pile per draw action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawMode {
    /// Draw one card at a time.
    #[default]
    One,
    /// Draw three cards at a time.
    Three,
}

impl DrawMode {
    /// Cards moved per draw action.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// Parse a menu label such as `"Draw 3"`.
    ///
    /// Anything other than a draw-3 label selects draw-1.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("draw 3") {
            DrawMode::Three
        } else {
            DrawMode::One
        }
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(DrawMode::One),
            3 => Ok(DrawMode::Three),
            other => Err(format!("draw count must be 1 or 3, got {other}")),
        }
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> Self {
        mode.count() as u8
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Draw {}", self.count())
    }
}

/// Configuration for a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards turned per draw action.
    pub draw_mode: DrawMode,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Identity of the player, recorded as the winner on a win.
    pub owner: Option<String>,
}

impl GameConfig {
    /// Create a draw-1 configuration with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw mode.
    #[must_use]
    pub fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the owner identity.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}
