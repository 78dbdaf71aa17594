//! Turn state machine.
//!
//! `step` is the only way a game moves forward:
//! - Rejected actions return the input state unchanged
//! - Accepted actions return a new state; the input is never modified
//! - After any dice change with the roll budget spent, the loss check runs
//!
//! Randomness comes in through a [`FaceSource`], so the same faces and the
//! same actions always produce the same game.

use crate::catalog::{
    is_unlocked, satisfied, CatalogKey, CategoryId, SkillId,
};
use crate::core::{
    DiceHand, FaceSource, GameState, GameStatus, PlayerAction, DICE_PER_HAND, MAX_ROLLS,
};

use super::error::IllegalAction;
use super::reachability::check_lose_condition;

/// Fresh starting state.
#[must_use]
pub fn init() -> GameState {
    GameState::new()
}

/// Apply `action`, or return `state` unchanged if it is illegal.
///
/// ```
/// use flyer_dungeon::core::{PlayerAction, ScriptedFaces};
/// use flyer_dungeon::rules::{init, step};
///
/// let mut faces = ScriptedFaces::from_pips(&[6, 6, 6, 2, 2]);
/// let state = step(&init(), &PlayerAction::roll_all(), &mut faces);
///
/// assert_eq!(state.dice.faces(), vec![6, 6, 6, 2, 2]);
/// assert_eq!(state.rolls_used, 1);
/// ```
#[must_use]
pub fn step<F: FaceSource + ?Sized>(
    state: &GameState,
    action: &PlayerAction,
    faces: &mut F,
) -> GameState {
    try_step(state, action, faces).unwrap_or_else(|_| state.clone())
}

/// Apply `action`, reporting why it was rejected.
pub fn try_step<F: FaceSource + ?Sized>(
    state: &GameState,
    action: &PlayerAction,
    faces: &mut F,
) -> Result<GameState, IllegalAction> {
    if state.status != GameStatus::Playing {
        return Err(IllegalAction::GameOver(state.status));
    }

    match action {
        PlayerAction::RollDice { indexes_to_reroll } => roll_dice(state, indexes_to_reroll, faces),
        PlayerAction::UseSkill {
            skill_id,
            target_die_index,
        } => use_skill(state, *skill_id, *target_die_index),
        PlayerAction::SelectCategory { category_id } => select_category(state, *category_id),
    }
}

fn roll_dice<F: FaceSource + ?Sized>(
    state: &GameState,
    indexes: &[usize],
    faces: &mut F,
) -> Result<GameState, IllegalAction> {
    if state.rolls_used >= MAX_ROLLS {
        return Err(IllegalAction::NoRollsRemaining);
    }

    let dice = if state.dice.is_empty() {
        DiceHand::new(std::array::from_fn(|_| faces.next_face()))
    } else {
        // Out-of-range indexes are skipped and draw nothing.
        let mut dice = state.dice.clone();
        for &index in indexes {
            if index < dice.len() {
                if let Some(next) = dice.with_face(index, faces.next_face()) {
                    dice = next;
                }
            }
        }
        dice
    };

    let next = GameState {
        dice,
        rolls_used: state.rolls_used + 1,
        ..state.clone()
    };
    Ok(check_lose_condition(next))
}

fn use_skill(
    state: &GameState,
    skill: SkillId,
    index: usize,
) -> Result<GameState, IllegalAction> {
    let Some(&face) = state.dice.get(index) else {
        return Err(IllegalAction::DieIndexOutOfRange {
            index,
            len: state.dice.len(),
        });
    };
    if state.skills_used[skill] {
        return Err(IllegalAction::SkillAlreadyUsed(skill));
    }
    if !is_unlocked(skill, &state.categories) {
        return Err(IllegalAction::SkillLocked(skill));
    }

    let mut next = state.clone();
    if let Some(dice) = state.dice.with_face(index, skill.apply(face)) {
        next.dice = dice;
    }
    next.skills_used[skill] = true;
    Ok(check_lose_condition(next))
}

fn select_category(state: &GameState, category: CategoryId) -> Result<GameState, IllegalAction> {
    if state.categories[category] {
        return Err(IllegalAction::CategoryAlreadyChecked(category));
    }
    if let Some(prerequisite) = category.prerequisite().filter(|&p| !state.categories[p]) {
        return Err(IllegalAction::PrerequisiteUnmet {
            category,
            prerequisite,
        });
    }
    if !satisfied(category, &state.dice) {
        return Err(IllegalAction::ConditionUnmet(category));
    }

    let mut next = state.clone();
    next.categories[category] = true;

    if category.is_terminal() {
        next.status = GameStatus::Won;
        return Ok(next);
    }

    next.reset_turn();
    Ok(next)
}

/// Every action `try_step` would accept in `state`.
///
/// Rolls are listed as a single full roll when the hand is empty, and as
/// every non-empty reroll subset otherwise.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<PlayerAction> {
    let mut actions = Vec::new();
    if state.status != GameStatus::Playing {
        return actions;
    }

    if state.rolls_used < MAX_ROLLS {
        if state.dice.is_empty() {
            actions.push(PlayerAction::roll_all());
        } else {
            for mask in 1u32..(1 << DICE_PER_HAND) {
                let indexes = (0..DICE_PER_HAND).filter(|&i| mask & (1 << i) != 0);
                actions.push(PlayerAction::reroll(indexes));
            }
        }
    }

    for skill in state.available_skills() {
        for index in 0..state.dice.len() {
            actions.push(PlayerAction::use_skill(skill, index));
        }
    }

    for &category in CategoryId::ALL {
        if state.can_select(category) {
            actions.push(PlayerAction::select(category));
        }
    }

    actions
}
