//! Rule constants and session configuration.
//!
//! The rules themselves are fixed: every game uses five dice, three rolls
//! per turn and a skill unlock threshold of three checked categories.
//! Only the surrounding session (seed, history recording) is configurable.

use serde::{Deserialize, Serialize};

/// Number of dice in a rolled hand.
pub const DICE_PER_HAND: usize = 5;

/// Rolls available per turn (the first roll plus two rerolls).
pub const MAX_ROLLS: u8 = 3;

/// Checked categories a group needs before its skill unlocks.
pub const SKILL_UNLOCK_THRESHOLD: usize = 3;

/// Configuration for a [`GameSession`](crate::session::GameSession).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the session's face generator.
    /// Same seed and same actions produce the same game.
    pub seed: u64,

    /// Keep an [`ActionRecord`](super::ActionRecord) for every accepted action.
    pub record_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            record_history: true,
        }
    }
}

impl SessionConfig {
    /// Create a config with the given seed and history enabled.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Use a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable action history recording.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
