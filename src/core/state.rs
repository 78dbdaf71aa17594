//! Game state: category progress, per-turn skill usage, dice, roll budget.
//!
//! ## GameState
//!
//! The whole game fits in one small value. Transitions never mutate the
//! caller's state; they return a new one (see [`crate::rules::step`]).
//!
//! Serializes with the front end's field names:
//!
//! ```json
//! {
//!   "categories": { "dungeon_floor_1": false, ... },
//!   "skillsUsed": { "skill_str_mighty": false, ... },
//!   "dice": [3, 3, 6, 1, 2],
//!   "rollsUsed": 1,
//!   "status": "playing"
//! }
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::config::{DICE_PER_HAND, MAX_ROLLS};
use super::dice::DiceHand;
use crate::catalog::{
    checked_in_group, is_unlocked, prerequisite_met, satisfied, CatalogKey, CategoryGroup,
    CategoryId, CategoryMap, SkillId, SkillMap,
};

/// Overall game status. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// No further action changes a game in this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(s)
    }
}

/// Ways a rehydrated state can break the game's invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("hand holds {0} dice, expected 0 or {DICE_PER_HAND}")]
    HandSize(usize),

    #[error("{0} rolls used, at most {MAX_ROLLS} allowed")]
    RollsExceeded(u8),

    #[error("rolls used ({rolls_used}) and hand size ({hand_size}) disagree")]
    RollsWithoutDice { rolls_used: u8, hand_size: usize },

    #[error("{category} is checked but its prerequisite {prerequisite} is not")]
    PrerequisiteBroken {
        category: CategoryId,
        prerequisite: CategoryId,
    },

    #[error("status is won but {0} is unchecked")]
    WonWithoutTerminal(CategoryId),
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Checked flag for every category.
    pub categories: CategoryMap<bool>,

    /// Used-this-turn flag for every skill. Cleared on each non-terminal commit.
    pub skills_used: SkillMap<bool>,

    /// Current hand; empty until the first roll of a turn.
    pub dice: DiceHand,

    /// Rolls taken this turn, `0..=MAX_ROLLS`.
    pub rolls_used: u8,

    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: nothing checked, no skills used, empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: CategoryMap::with_value(false),
            skills_used: SkillMap::with_value(false),
            dice: DiceHand::empty(),
            rolls_used: 0,
            status: GameStatus::Playing,
        }
    }

    /// Whether `category` is checked.
    #[must_use]
    pub fn is_checked(&self, category: CategoryId) -> bool {
        self.categories[category]
    }

    /// Whether `skill` has been used this turn.
    #[must_use]
    pub fn is_skill_used(&self, skill: SkillId) -> bool {
        self.skills_used[skill]
    }

    /// Number of checked categories in `group`.
    #[must_use]
    pub fn checked_in_group(&self, group: CategoryGroup) -> usize {
        checked_in_group(&self.categories, group)
    }

    /// Rolls left this turn.
    #[must_use]
    pub fn rolls_remaining(&self) -> u8 {
        MAX_ROLLS.saturating_sub(self.rolls_used)
    }

    /// Skills that are unlocked and not yet used this turn, in catalog order.
    #[must_use]
    pub fn available_skills(&self) -> SmallVec<[SkillId; 3]> {
        SkillId::ALL
            .iter()
            .copied()
            .filter(|&skill| !self.skills_used[skill] && is_unlocked(skill, &self.categories))
            .collect()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Clear the per-turn fields for the next turn.
    pub(crate) fn reset_turn(&mut self) {
        self.rolls_used = 0;
        self.dice = DiceHand::empty();
        for (_, used) in self.skills_used.iter_mut() {
            *used = false;
        }
    }

    /// Check a state built outside the engine (e.g. deserialized) against
    /// the game's invariants.
    pub fn validate(&self) -> Result<(), StateError> {
        let hand_size = self.dice.len();
        if hand_size != 0 && hand_size != DICE_PER_HAND {
            return Err(StateError::HandSize(hand_size));
        }
        if self.rolls_used > MAX_ROLLS {
            return Err(StateError::RollsExceeded(self.rolls_used));
        }
        if (self.rolls_used == 0) != (hand_size == 0) {
            return Err(StateError::RollsWithoutDice {
                rolls_used: self.rolls_used,
                hand_size,
            });
        }
        for (category, &checked) in self.categories.iter() {
            if let Some(prerequisite) = category.prerequisite() {
                if checked && !self.categories[prerequisite] {
                    return Err(StateError::PrerequisiteBroken {
                        category,
                        prerequisite,
                    });
                }
            }
        }
        if self.status == GameStatus::Won && !self.categories[CategoryId::TERMINAL] {
            return Err(StateError::WonWithoutTerminal(CategoryId::TERMINAL));
        }
        Ok(())
    }

    /// Whether `category` could be checked right now.
    #[must_use]
    pub fn can_select(&self, category: CategoryId) -> bool {
        self.status == GameStatus::Playing
            && !self.categories[category]
            && prerequisite_met(category, &self.categories)
            && satisfied(category, &self.dice)
    }
}
