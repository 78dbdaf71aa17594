//! Rejection reasons for player actions.
//!
//! [`step`](super::step) turns every one of these into a silent no-op;
//! [`try_step`](super::try_step) reports which rule was broken.

use thiserror::Error;

use crate::catalog::{CategoryId, SkillId};
use crate::core::GameStatus;

/// Why an action was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("game is over ({0})")]
    GameOver(GameStatus),

    #[error("no rolls remaining this turn")]
    NoRollsRemaining,

    #[error("die index {index} is outside the hand of {len}")]
    DieIndexOutOfRange { index: usize, len: usize },

    #[error("{0} was already used this turn")]
    SkillAlreadyUsed(SkillId),

    #[error("{0} is locked")]
    SkillLocked(SkillId),

    #[error("{0} is already checked")]
    CategoryAlreadyChecked(CategoryId),

    #[error("{category} requires {prerequisite} first")]
    PrerequisiteUnmet {
        category: CategoryId,
        prerequisite: CategoryId,
    },

    #[error("dice do not satisfy {0}")]
    ConditionUnmet(CategoryId),
}
