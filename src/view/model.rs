//! Render-ready snapshot types.
//!
//! Field names follow the front end's DTOs:
//!
//! ```json
//! {
//!   "dice": [6, 6, 6, 2, 2],
//!   "rolls": { "current": 1, "max": 3, "canRoll": true },
//!   "skills": { "skill_str_mighty": { "status": "locked", ... }, ... },
//!   "categories": [{ "id": "dungeon_floor_1", "group": "dungeon", "isChecked": false, "isSelectable": true }, ...],
//!   "gameStatus": "playing"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryGroup, CategoryId, SkillId, SkillMap};
use crate::core::GameStatus;

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub dice: Vec<u8>,
    pub rolls: RollsView,
    pub skills: SkillMap<SkillView>,
    /// One entry per category, in catalog order.
    pub categories: Vec<CategoryView>,
    pub game_status: GameStatus,
}

impl GameView {
    /// The entry for `id`.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&CategoryView> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Ids of every category that can be checked right now.
    pub fn selectable(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories
            .iter()
            .filter(|c| c.is_selectable)
            .map(|c| c.id)
    }
}

/// Roll budget for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollsView {
    pub current: u8,
    pub max: u8,
    pub can_roll: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: CategoryId,
    pub group: CategoryGroup,
    pub is_checked: bool,
    pub is_selectable: bool,
}

/// Skill state as shown to the player. `Used` wins over `Locked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Locked,
    Available,
    Used,
}

/// Checked categories in the skill's group against the unlock threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockProgress {
    pub current: usize,
    pub required: usize,
}

impl UnlockProgress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.required
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub id: SkillId,
    pub name: String,
    pub status: SkillStatus,
    pub effect_description: String,
    pub unlock_progress: UnlockProgress,
}
