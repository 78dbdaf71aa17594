//! Static rule catalogs: scoring categories and skills.
//!
//! Both catalogs are immutable tables keyed by closed enums, so every place
//! the engine branches on an id is an exhaustive `match`.

pub mod category;
pub mod map;
pub mod skill;

pub use category::{
    checked_in_group, prerequisite_met, satisfied, Category, CategoryGroup, CategoryId, CategoryMap,
    Condition, CATEGORIES,
};
pub use map::{CatalogKey, CatalogMap};
pub use skill::{apply_effect, is_unlocked, DieTransform, Skill, SkillId, SkillMap, SKILLS};
