//! Player actions: the closed set of moves fed to the rules engine.
//!
//! Actions serialize with the wire shape the front end sends:
//!
//! ```json
//! { "type": "roll_dice", "indexesToReroll": [0, 4] }
//! { "type": "use_skill", "skillId": "skill_str_mighty", "targetDieIndex": 2 }
//! { "type": "select_category", "categoryId": "str_full_house" }
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::DICE_PER_HAND;
use crate::catalog::{CategoryId, SkillId};

/// A single player move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Roll the dice. On the first roll of a turn all five dice are rolled
    /// and the indexes are ignored; afterwards only the listed dice are.
    #[serde(rename_all = "camelCase")]
    RollDice {
        /// SmallVec keeps a full reroll inline.
        indexes_to_reroll: SmallVec<[usize; DICE_PER_HAND]>,
    },

    /// Apply a skill's transform to one die.
    #[serde(rename_all = "camelCase")]
    UseSkill {
        skill_id: SkillId,
        target_die_index: usize,
    },

    /// Check off a category, ending the turn.
    #[serde(rename_all = "camelCase")]
    SelectCategory { category_id: CategoryId },
}

impl PlayerAction {
    /// Roll every die.
    #[must_use]
    pub fn roll_all() -> Self {
        Self::reroll(0..DICE_PER_HAND)
    }

    /// Reroll the dice at the given indexes.
    #[must_use]
    pub fn reroll(indexes: impl IntoIterator<Item = usize>) -> Self {
        Self::RollDice {
            indexes_to_reroll: indexes.into_iter().collect(),
        }
    }

    /// Use `skill` on the die at `index`.
    #[must_use]
    pub fn use_skill(skill: SkillId, index: usize) -> Self {
        Self::UseSkill {
            skill_id: skill,
            target_die_index: index,
        }
    }

    /// Check off `category`.
    #[must_use]
    pub fn select(category: CategoryId) -> Self {
        Self::SelectCategory {
            category_id: category,
        }
    }
}

/// An accepted action with its position in the game.
///
/// Used for:
/// - Replay/debugging
/// - Session history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: PlayerAction,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: PlayerAction, turn: u32, sequence: u32) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}
