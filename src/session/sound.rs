//! Semantic sound cues for the audio layer.
//!
//! Cues are fire-and-forget names; the audio layer maps them to samples
//! and never sees game state.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryGroup, CategoryId, SkillId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Roll,
    Mighty,
    Acrobatics,
    Metamorph,
    Win,
    Lose,
    DungeonProgress,
    AttributeGain,
    Hold,
}

impl SoundCue {
    /// Every cue, for preloading.
    pub const ALL: [SoundCue; 9] = [
        SoundCue::Roll,
        SoundCue::Mighty,
        SoundCue::Acrobatics,
        SoundCue::Metamorph,
        SoundCue::Win,
        SoundCue::Lose,
        SoundCue::DungeonProgress,
        SoundCue::AttributeGain,
        SoundCue::Hold,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SoundCue::Roll => "roll",
            SoundCue::Mighty => "mighty",
            SoundCue::Acrobatics => "acrobatics",
            SoundCue::Metamorph => "metamorph",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
            SoundCue::DungeonProgress => "dungeon_progress",
            SoundCue::AttributeGain => "attribute_gain",
            SoundCue::Hold => "hold",
        }
    }

    /// Cue for using `skill`.
    #[must_use]
    pub const fn for_skill(skill: SkillId) -> Self {
        match skill {
            SkillId::Mighty => SoundCue::Mighty,
            SkillId::Acrobatics => SoundCue::Acrobatics,
            SkillId::Metamorph => SoundCue::Metamorph,
        }
    }

    /// Cue for checking `category`.
    #[must_use]
    pub fn for_category(category: CategoryId) -> Self {
        if category.is_terminal() {
            SoundCue::Win
        } else if category.group() == CategoryGroup::Dungeon {
            SoundCue::DungeonProgress
        } else {
            SoundCue::AttributeGain
        }
    }

    /// Cue for toggling a die's hold in the UI. Holding is presentation
    /// state only and never reaches the engine.
    #[must_use]
    pub const fn for_hold() -> Self {
        SoundCue::Hold
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for cue in SoundCue::ALL {
            let json = serde_json::to_string(&cue).unwrap();
            assert_eq!(json, format!("\"{}\"", cue.as_str()));
        }
    }

    #[test]
    fn test_category_cues() {
        assert_eq!(SoundCue::for_category(CategoryId::DungeonFloor5), SoundCue::Win);
        assert_eq!(
            SoundCue::for_category(CategoryId::DungeonFloor2),
            SoundCue::DungeonProgress
        );
        assert_eq!(
            SoundCue::for_category(CategoryId::SmallStraight),
            SoundCue::AttributeGain
        );
    }

    #[test]
    fn test_skill_cues() {
        assert_eq!(SoundCue::for_skill(SkillId::Metamorph), SoundCue::Metamorph);
        assert_eq!(SoundCue::for_skill(SkillId::Mighty).as_str(), "mighty");
        assert_eq!(SoundCue::for_hold().to_string(), "hold");
    }
}
