//! State → view projection.

use crate::catalog::{CatalogKey, CategoryId, SkillMap};
use crate::core::{GameState, GameStatus, MAX_ROLLS, SKILL_UNLOCK_THRESHOLD};

use super::model::{CategoryView, GameView, RollsView, SkillStatus, SkillView, UnlockProgress};

/// Project `state` into a render-ready snapshot. Pure; holds no memory
/// between calls.
///
/// ```
/// use flyer_dungeon::rules::init;
/// use flyer_dungeon::view::get_view;
///
/// let view = get_view(&init());
/// assert!(view.rolls.can_roll);
/// assert_eq!(view.selectable().count(), 0);
/// ```
#[must_use]
pub fn get_view(state: &GameState) -> GameView {
    let categories = CategoryId::ALL
        .iter()
        .map(|&id| CategoryView {
            id,
            group: id.group(),
            is_checked: state.categories[id],
            is_selectable: state.can_select(id),
        })
        .collect();

    let skills = SkillMap::from_fn(|id| {
        let definition = id.definition();
        let progress = UnlockProgress {
            current: state.checked_in_group(definition.group),
            required: SKILL_UNLOCK_THRESHOLD,
        };
        let status = if state.skills_used[id] {
            SkillStatus::Used
        } else if progress.is_complete() {
            SkillStatus::Available
        } else {
            SkillStatus::Locked
        };

        SkillView {
            id,
            name: definition.name.to_string(),
            status,
            effect_description: definition.description.to_string(),
            unlock_progress: progress,
        }
    });

    GameView {
        dice: state.dice.faces(),
        rolls: RollsView {
            current: state.rolls_used,
            max: MAX_ROLLS,
            can_roll: state.status == GameStatus::Playing && state.rolls_used < MAX_ROLLS,
        },
        skills,
        categories,
        game_status: state.status,
    }
}
