//! Scoring categories and their dice conditions.
//!
//! The catalog is a static table: one `Category` record per `CategoryId`,
//! holding its group, its `Condition` and an optional prerequisite. The
//! dungeon floors form a chain (floor N requires floor N-1); checking
//! floor 5 wins the game.

use serde::{Deserialize, Serialize};

use crate::core::dice::{self, DieValue, FaceCounts};

use super::map::{CatalogKey, CatalogMap};
use super::skill::SkillId;

/// Per-category checked flags.
pub type CategoryMap<V> = CatalogMap<CategoryId, V>;

/// Thematic cluster of categories. Every group except the dungeon
/// unlocks a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroup {
    Dungeon,
    Str,
    Dex,
    Int,
}

impl CategoryGroup {
    /// All groups in display order.
    pub const ALL: [CategoryGroup; 4] = [
        CategoryGroup::Dungeon,
        CategoryGroup::Str,
        CategoryGroup::Dex,
        CategoryGroup::Int,
    ];

    /// Stable wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryGroup::Dungeon => "dungeon",
            CategoryGroup::Str => "str",
            CategoryGroup::Dex => "dex",
            CategoryGroup::Int => "int",
        }
    }

    /// Translation key for the group's section header.
    #[must_use]
    pub fn header_key(self) -> String {
        format!("header_{}", self.as_str())
    }

    /// The skill this group unlocks. The dungeon has none.
    #[must_use]
    pub const fn skill(self) -> Option<SkillId> {
        match self {
            CategoryGroup::Dungeon => None,
            CategoryGroup::Str => Some(SkillId::Mighty),
            CategoryGroup::Dex => Some(SkillId::Acrobatics),
            CategoryGroup::Int => Some(SkillId::Metamorph),
        }
    }

    /// Categories belonging to this group, in catalog order.
    pub fn categories(self) -> impl Iterator<Item = CategoryId> {
        CategoryId::ALL
            .iter()
            .copied()
            .filter(move |id| id.group() == self)
    }
}

impl std::fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring category identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryId {
    #[serde(rename = "dungeon_floor_1")]
    DungeonFloor1,
    #[serde(rename = "dungeon_floor_2")]
    DungeonFloor2,
    #[serde(rename = "dungeon_floor_3")]
    DungeonFloor3,
    #[serde(rename = "dungeon_floor_4")]
    DungeonFloor4,
    #[serde(rename = "dungeon_floor_5")]
    DungeonFloor5,
    #[serde(rename = "str_three_of_a_kind_5")]
    ThreeOfAKind5,
    #[serde(rename = "str_three_of_a_kind_6")]
    ThreeOfAKind6,
    #[serde(rename = "str_full_house")]
    FullHouse,
    #[serde(rename = "str_four_of_a_kind")]
    FourOfAKind,
    #[serde(rename = "dex_three_of_a_kind_1")]
    ThreeOfAKind1,
    #[serde(rename = "dex_three_of_a_kind_2")]
    ThreeOfAKind2,
    #[serde(rename = "dex_small_straight")]
    SmallStraight,
    #[serde(rename = "dex_large_straight")]
    LargeStraight,
    #[serde(rename = "int_three_of_a_kind_3")]
    ThreeOfAKind3,
    #[serde(rename = "int_three_of_a_kind_4")]
    ThreeOfAKind4,
    #[serde(rename = "int_one_pair")]
    OnePair,
    #[serde(rename = "int_two_pair")]
    TwoPair,
}

impl CategoryId {
    /// The category whose check wins the game.
    pub const TERMINAL: CategoryId = CategoryId::DungeonFloor5;

    /// The static catalog record for this category.
    #[must_use]
    pub fn definition(self) -> &'static Category {
        &CATEGORIES[self.index()]
    }

    /// Which group this category belongs to.
    #[must_use]
    pub fn group(self) -> CategoryGroup {
        self.definition().group
    }

    /// Category that must be checked before this one, if any.
    #[must_use]
    pub fn prerequisite(self) -> Option<CategoryId> {
        self.definition().prerequisite
    }

    /// Checking this category ends the game in victory.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::TERMINAL
    }

    /// Translation key for the category label, e.g. `cat_dungeon_floor_1`.
    #[must_use]
    pub fn i18n_key(self) -> String {
        format!("cat_{}", self.as_str())
    }
}

impl CatalogKey for CategoryId {
    const ALL: &'static [Self] = &[
        CategoryId::DungeonFloor1,
        CategoryId::DungeonFloor2,
        CategoryId::DungeonFloor3,
        CategoryId::DungeonFloor4,
        CategoryId::DungeonFloor5,
        CategoryId::ThreeOfAKind5,
        CategoryId::ThreeOfAKind6,
        CategoryId::FullHouse,
        CategoryId::FourOfAKind,
        CategoryId::ThreeOfAKind1,
        CategoryId::ThreeOfAKind2,
        CategoryId::SmallStraight,
        CategoryId::LargeStraight,
        CategoryId::ThreeOfAKind3,
        CategoryId::ThreeOfAKind4,
        CategoryId::OnePair,
        CategoryId::TwoPair,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn as_str(self) -> &'static str {
        match self {
            CategoryId::DungeonFloor1 => "dungeon_floor_1",
            CategoryId::DungeonFloor2 => "dungeon_floor_2",
            CategoryId::DungeonFloor3 => "dungeon_floor_3",
            CategoryId::DungeonFloor4 => "dungeon_floor_4",
            CategoryId::DungeonFloor5 => "dungeon_floor_5",
            CategoryId::ThreeOfAKind5 => "str_three_of_a_kind_5",
            CategoryId::ThreeOfAKind6 => "str_three_of_a_kind_6",
            CategoryId::FullHouse => "str_full_house",
            CategoryId::FourOfAKind => "str_four_of_a_kind",
            CategoryId::ThreeOfAKind1 => "dex_three_of_a_kind_1",
            CategoryId::ThreeOfAKind2 => "dex_three_of_a_kind_2",
            CategoryId::SmallStraight => "dex_small_straight",
            CategoryId::LargeStraight => "dex_large_straight",
            CategoryId::ThreeOfAKind3 => "int_three_of_a_kind_3",
            CategoryId::ThreeOfAKind4 => "int_three_of_a_kind_4",
            CategoryId::OnePair => "int_one_pair",
            CategoryId::TwoPair => "int_two_pair",
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dice condition a category checks.
///
/// Conditions are evaluated against a non-empty hand; an empty hand
/// satisfies nothing (see [`satisfied`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Total pips at least N.
    SumAtLeast(u32),

    /// Total pips at most N.
    SumAtMost(u32),

    /// Some face appears at least N times.
    OfAKind(u8),

    /// A specific face appears at least `count` times.
    FaceCount { face: DieValue, count: u8 },

    /// Three of one face and two of another, or five of a kind.
    FullHouse,

    /// Two distinct faces appearing at least twice, or four of a kind.
    TwoPair,

    /// A run of at least N consecutive faces.
    RunAtLeast(usize),
}

impl Condition {
    /// Check this condition against `dice`.
    #[must_use]
    pub fn evaluate(&self, dice: &[DieValue]) -> bool {
        let counts = FaceCounts::of(dice);
        match *self {
            Condition::SumAtLeast(n) => dice::sum(dice) >= n,
            Condition::SumAtMost(n) => dice::sum(dice) <= n,
            Condition::OfAKind(n) => counts.has_at_least(n),
            Condition::FaceCount { face, count } => counts.count(face) >= count,
            Condition::FullHouse => {
                (counts.has_exactly(3) && counts.has_exactly(2)) || counts.has_exactly(5)
            }
            Condition::TwoPair => counts.pairs() >= 2 || counts.has_at_least(4),
            Condition::RunAtLeast(n) => dice::run_length(dice) >= n,
        }
    }
}

/// Static catalog record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub group: CategoryGroup,
    pub condition: Condition,
    pub prerequisite: Option<CategoryId>,
}

const fn face(pips: u8) -> DieValue {
    match DieValue::new(pips) {
        Some(face) => face,
        None => panic!("catalog face out of range"),
    }
}

const fn category(
    id: CategoryId,
    group: CategoryGroup,
    condition: Condition,
    prerequisite: Option<CategoryId>,
) -> Category {
    Category {
        id,
        group,
        condition,
        prerequisite,
    }
}

const fn three_of(pips: u8) -> Condition {
    Condition::FaceCount {
        face: face(pips),
        count: 3,
    }
}

/// The full category catalog, indexed by `CategoryId::index()`.
pub static CATEGORIES: [Category; 17] = {
    use CategoryGroup::{Dex, Dungeon, Int, Str};
    use CategoryId as C;
    [
        category(C::DungeonFloor1, Dungeon, Condition::SumAtLeast(20), None),
        category(C::DungeonFloor2, Dungeon, Condition::SumAtLeast(24), Some(C::DungeonFloor1)),
        category(C::DungeonFloor3, Dungeon, Condition::SumAtLeast(26), Some(C::DungeonFloor2)),
        category(C::DungeonFloor4, Dungeon, Condition::SumAtMost(9), Some(C::DungeonFloor3)),
        category(C::DungeonFloor5, Dungeon, Condition::OfAKind(5), Some(C::DungeonFloor4)),
        category(C::ThreeOfAKind5, Str, three_of(5), None),
        category(C::ThreeOfAKind6, Str, three_of(6), None),
        category(C::FullHouse, Str, Condition::FullHouse, None),
        category(C::FourOfAKind, Str, Condition::OfAKind(4), None),
        category(C::ThreeOfAKind1, Dex, three_of(1), None),
        category(C::ThreeOfAKind2, Dex, three_of(2), None),
        category(C::SmallStraight, Dex, Condition::RunAtLeast(4), None),
        category(C::LargeStraight, Dex, Condition::RunAtLeast(5), None),
        category(C::ThreeOfAKind3, Int, three_of(3), None),
        category(C::ThreeOfAKind4, Int, three_of(4), None),
        category(C::OnePair, Int, Condition::OfAKind(2), None),
        category(C::TwoPair, Int, Condition::TwoPair, None),
    ]
};

/// Whether `dice` meet the category's condition.
///
/// Always false for an empty hand, so nothing can be scored before the
/// first roll of a turn.
#[must_use]
pub fn satisfied(id: CategoryId, dice: &[DieValue]) -> bool {
    !dice.is_empty() && id.definition().condition.evaluate(dice)
}

/// True unless `id` has a prerequisite that is still unchecked.
#[must_use]
pub fn prerequisite_met(id: CategoryId, categories: &CategoryMap<bool>) -> bool {
    id.prerequisite().map_or(true, |pre| categories[pre])
}

/// Number of checked categories in `group`.
#[must_use]
pub fn checked_in_group(categories: &CategoryMap<bool>, group: CategoryGroup) -> usize {
    categories
        .iter()
        .filter(|&(id, &checked)| checked && id.group() == group)
        .count()
}
