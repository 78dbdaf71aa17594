//! Skills: single-die transforms unlocked by group progress.
//!
//! Each non-dungeon group owns one skill. A skill unlocks once three of
//! its group's categories are checked and may then be used once per turn.

use serde::{Deserialize, Serialize};

use crate::core::config::SKILL_UNLOCK_THRESHOLD;
use crate::core::dice::DieValue;

use super::category::{checked_in_group, CategoryGroup, CategoryMap};
use super::map::{CatalogKey, CatalogMap};

/// Per-skill flags (used this turn).
pub type SkillMap<V> = CatalogMap<SkillId, V>;

/// Skill identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillId {
    #[serde(rename = "skill_str_mighty")]
    Mighty,
    #[serde(rename = "skill_dex_acrobatics")]
    Acrobatics,
    #[serde(rename = "skill_int_metamorph")]
    Metamorph,
}

impl SkillId {
    /// The static catalog record for this skill.
    #[must_use]
    pub fn definition(self) -> &'static Skill {
        &SKILLS[self.index()]
    }

    /// The group whose progress unlocks this skill.
    #[must_use]
    pub fn group(self) -> CategoryGroup {
        self.definition().group
    }

    /// Transform a single face.
    #[must_use]
    pub fn apply(self, face: DieValue) -> DieValue {
        self.definition().transform.apply(face)
    }

    /// Translation key for the skill name.
    #[must_use]
    pub fn name_key(self) -> String {
        format!("skill_name_{}", self.as_str())
    }

    /// Translation key for the effect description.
    #[must_use]
    pub fn description_key(self) -> String {
        format!("skill_desc_{}", self.as_str())
    }
}

impl CatalogKey for SkillId {
    const ALL: &'static [Self] = &[SkillId::Mighty, SkillId::Acrobatics, SkillId::Metamorph];

    fn index(self) -> usize {
        self as usize
    }

    fn as_str(self) -> &'static str {
        match self {
            SkillId::Mighty => "skill_str_mighty",
            SkillId::Acrobatics => "skill_dex_acrobatics",
            SkillId::Metamorph => "skill_int_metamorph",
        }
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a skill does to the die it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DieTransform {
    /// Replace the face with a fixed value.
    SetTo(DieValue),

    /// Lower the face by one, never below 1.
    StepDown,

    /// Flip to the opposite face (`7 - face`).
    Flip,
}

impl DieTransform {
    /// Apply the transform. Total over `[1, 6]`.
    #[must_use]
    pub fn apply(self, face: DieValue) -> DieValue {
        let pips = match self {
            DieTransform::SetTo(value) => return value,
            DieTransform::StepDown => face.get().saturating_sub(1).max(1),
            DieTransform::Flip => 7 - face.get(),
        };
        DieValue::new(pips).unwrap_or(face)
    }
}

/// Static catalog record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub group: CategoryGroup,
    pub transform: DieTransform,
    /// English display name.
    pub name: &'static str,
    /// English effect description.
    pub description: &'static str,
}

/// The full skill catalog, indexed by `SkillId::index()`.
pub static SKILLS: [Skill; 3] = [
    Skill {
        id: SkillId::Mighty,
        group: CategoryGroup::Str,
        transform: DieTransform::SetTo(DieValue::MAX),
        name: "Mighty",
        description: "Set a die to 6",
    },
    Skill {
        id: SkillId::Acrobatics,
        group: CategoryGroup::Dex,
        transform: DieTransform::StepDown,
        name: "Acrobatics",
        description: "Reduce die value by 1 (min 1)",
    },
    Skill {
        id: SkillId::Metamorph,
        group: CategoryGroup::Int,
        transform: DieTransform::Flip,
        name: "Metamorph",
        description: "Flip a die (1<->6, 2<->5, 3<->4)",
    },
];

/// Transform `face` with `skill`.
#[must_use]
pub fn apply_effect(skill: SkillId, face: DieValue) -> DieValue {
    skill.apply(face)
}

/// A skill is unlocked once its group has enough checked categories.
#[must_use]
pub fn is_unlocked(skill: SkillId, categories: &CategoryMap<bool>) -> bool {
    checked_in_group(categories, skill.group()) >= SKILL_UNLOCK_THRESHOLD
}
