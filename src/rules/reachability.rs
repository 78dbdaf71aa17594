//! Loss detection: can the player still end the turn legally?
//!
//! Once the roll budget is spent, the only way to change the dice is to
//! use skills. The oracle searches every order of distinct, still-usable
//! skills applied to every die, depth-first, and stops at the first hand
//! that satisfies some open category.
//!
//! The search is over immutable hand snapshots: each branch builds its own
//! hand with one die replaced, so no branch sees another branch's changes.
//! With three skills and five dice the tree has at most
//! 15 + 15·10 + 15·10·5 nodes, small enough to run on every action.

use smallvec::SmallVec;

use crate::catalog::{prerequisite_met, satisfied, CatalogKey, CategoryId, CategoryMap, SkillId};
use crate::core::{DieValue, GameState, GameStatus, DICE_PER_HAND, MAX_ROLLS};

/// Whether some unchecked category with its prerequisite met is satisfied
/// by `dice`.
#[must_use]
pub fn can_take_any_category(dice: &[DieValue], categories: &CategoryMap<bool>) -> bool {
    CategoryId::ALL.iter().any(|&id| {
        !categories[id] && prerequisite_met(id, categories) && satisfied(id, dice)
    })
}

/// Whether `dice` can reach a scorable hand by applying some sequence of
/// distinct skills from `available`, each at most once.
#[must_use]
pub fn can_reach_valid_state(
    dice: &[DieValue],
    available: &[SkillId],
    categories: &CategoryMap<bool>,
) -> bool {
    if can_take_any_category(dice, categories) {
        return true;
    }

    available.iter().enumerate().any(|(i, &skill)| {
        let remaining: SmallVec<[SkillId; 3]> = available
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &s)| s)
            .collect();

        dice.iter().enumerate().any(|(pos, &face)| {
            let next_face = skill.apply(face);
            if next_face == face {
                return false;
            }
            let mut next: SmallVec<[DieValue; DICE_PER_HAND]> = SmallVec::from_slice(dice);
            next[pos] = next_face;
            can_reach_valid_state(&next, &remaining, categories)
        })
    })
}

/// Whether the player has any legal way to end the current turn, using
/// the skills that are unlocked and unused.
#[must_use]
pub fn has_valid_move(state: &GameState) -> bool {
    can_reach_valid_state(&state.dice, &state.available_skills(), &state.categories)
}

/// Mark the game lost if the roll budget is spent and no valid move remains.
///
/// A no-op while rolls remain.
#[must_use]
pub fn check_lose_condition(state: GameState) -> GameState {
    if state.rolls_used < MAX_ROLLS || has_valid_move(&state) {
        return state;
    }
    GameState {
        status: GameStatus::Lost,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiceHand;

    fn hand(faces: &[u8]) -> DiceHand {
        DiceHand::from_faces(faces).unwrap()
    }

    fn checked(ids: &[CategoryId]) -> CategoryMap<bool> {
        let mut categories = CategoryMap::with_value(false);
        for &id in ids {
            categories[id] = true;
        }
        categories
    }

    #[test]
    fn test_direct_hit() {
        let categories = checked(&[]);
        assert!(can_take_any_category(&hand(&[1, 1, 2, 3, 4]), &categories));
        assert!(can_reach_valid_state(&hand(&[1, 1, 2, 3, 4]), &[], &categories));
    }

    #[test]
    fn test_nothing_without_skills() {
        let categories = checked(&[CategoryId::SmallStraight, CategoryId::OnePair]);
        assert!(!can_take_any_category(&hand(&[1, 1, 2, 3, 4]), &categories));
        assert!(!can_reach_valid_state(&hand(&[1, 1, 2, 3, 4]), &[], &categories));
    }

    #[test]
    fn test_prerequisite_gates_dungeon() {
        let mut categories = checked(&[
            CategoryId::ThreeOfAKind6,
            CategoryId::FourOfAKind,
            CategoryId::OnePair,
            CategoryId::TwoPair,
        ]);
        let dice = hand(&[6, 6, 6, 6, 1]);

        // Sum 25: floor 1 is open.
        assert!(can_take_any_category(&dice, &categories));

        // Floor 1 checked: floor 2 (24+) opens.
        categories[CategoryId::DungeonFloor1] = true;
        assert!(can_take_any_category(&dice, &categories));

        // Floor 2 checked: floor 3 needs 26.
        categories[CategoryId::DungeonFloor2] = true;
        assert!(!can_take_any_category(&dice, &categories));
    }

    #[test]
    fn test_single_skill_rescue() {
        // Mighty on a 5 turns 5,5,6,6,6 into four 6s.
        let categories = checked(&[
            CategoryId::ThreeOfAKind6,
            CategoryId::ThreeOfAKind5,
            CategoryId::FullHouse,
            CategoryId::OnePair,
            CategoryId::TwoPair,
            CategoryId::DungeonFloor1,
            CategoryId::DungeonFloor2,
            CategoryId::DungeonFloor3,
        ]);
        let dice = hand(&[5, 5, 6, 6, 6]);

        assert!(!can_take_any_category(&dice, &categories));
        assert!(can_reach_valid_state(&dice, &[SkillId::Mighty], &categories));
    }

    #[test]
    fn test_skill_that_changes_nothing_does_not_help() {
        // Mighty can't change a hand of sixes; nothing is open that it could reach.
        let categories = checked(&[
            CategoryId::ThreeOfAKind6,
            CategoryId::FourOfAKind,
            CategoryId::FullHouse,
            CategoryId::OnePair,
            CategoryId::TwoPair,
            CategoryId::DungeonFloor1,
        ]);
        let dice = hand(&[6, 6, 6, 6, 6]);
        // Floor 2 is open and 30 >= 24.
        assert!(can_take_any_category(&dice, &categories));

        let mut categories = categories;
        categories[CategoryId::DungeonFloor2] = true;
        categories[CategoryId::DungeonFloor3] = true;
        // Floor 4 needs <= 9; no change from Mighty can get there.
        assert!(!can_reach_valid_state(&dice, &[SkillId::Mighty], &categories));
    }

    #[test]
    fn test_one_skill_enough() {
        // Stepping a 5 down to 4 completes 1-2-3-4-5; flipping never helps.
        let categories = checked(&[
            CategoryId::DungeonFloor1,
            CategoryId::OnePair,
            CategoryId::TwoPair,
            CategoryId::ThreeOfAKind1,
            CategoryId::ThreeOfAKind2,
            CategoryId::ThreeOfAKind3,
            CategoryId::ThreeOfAKind5,
            CategoryId::FullHouse,
        ]);
        let dice = hand(&[1, 2, 3, 5, 5]);
        assert!(!can_take_any_category(&dice, &categories));

        assert!(!can_reach_valid_state(&dice, &[SkillId::Metamorph], &categories));
        assert!(can_reach_valid_state(&dice, &[SkillId::Acrobatics], &categories));
    }

    #[test]
    fn test_two_skill_chain() {
        // Only four of a kind is open. 6,6,5,5,1 needs Mighty on a 5 and a flip of the 1.
        let categories = checked(&[
            CategoryId::DungeonFloor1,
            CategoryId::DungeonFloor2,
            CategoryId::DungeonFloor3,
            CategoryId::ThreeOfAKind5,
            CategoryId::ThreeOfAKind6,
            CategoryId::FullHouse,
            CategoryId::ThreeOfAKind1,
            CategoryId::ThreeOfAKind2,
            CategoryId::SmallStraight,
            CategoryId::LargeStraight,
            CategoryId::ThreeOfAKind3,
            CategoryId::ThreeOfAKind4,
            CategoryId::OnePair,
            CategoryId::TwoPair,
        ]);
        let dice = hand(&[6, 6, 5, 5, 1]);

        assert!(!can_reach_valid_state(&dice, &[SkillId::Mighty], &categories));
        assert!(!can_reach_valid_state(&dice, &[SkillId::Metamorph], &categories));
        assert!(can_reach_valid_state(
            &dice,
            &[SkillId::Mighty, SkillId::Metamorph],
            &categories
        ));
        assert!(can_reach_valid_state(
            &dice,
            &[SkillId::Metamorph, SkillId::Mighty],
            &categories
        ));
    }

    #[test]
    fn test_search_does_not_leak_between_branches() {
        let categories = checked(&[]);
        let dice = hand(&[1, 2, 4, 5, 6]);
        let before = dice.clone();
        let _ = can_reach_valid_state(
            &dice,
            &[SkillId::Mighty, SkillId::Acrobatics, SkillId::Metamorph],
            &categories,
        );
        assert_eq!(dice, before);
    }

    #[test]
    fn test_check_lose_condition_waits_for_last_roll() {
        let mut state = GameState::new();
        state.categories = checked(&[CategoryId::SmallStraight, CategoryId::OnePair]);
        state.dice = hand(&[1, 1, 2, 3, 4]);
        state.rolls_used = 2;

        let next = check_lose_condition(state.clone());
        assert_eq!(next.status, GameStatus::Playing);

        state.rolls_used = 3;
        let next = check_lose_condition(state);
        assert_eq!(next.status, GameStatus::Lost);
    }
    /// Every ordering of every subset of `skills`, the empty one included.
    fn orderings(skills: &[SkillId]) -> Vec<Vec<SkillId>> {
        let mut out = vec![Vec::new()];
        for (i, &skill) in skills.iter().enumerate() {
            let rest: Vec<SkillId> = skills
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &s)| s)
                .collect();
            for mut tail in orderings(&rest) {
                tail.insert(0, skill);
                out.push(tail);
            }
        }
        out
    }

    /// Exhaustive search: apply each skill ordering at every combination
    /// of target dice and test the final hand.
    fn brute_force(dice: &[DieValue], skills: &[SkillId], categories: &CategoryMap<bool>) -> bool {
        orderings(skills).iter().any(|order| {
            let combos = DICE_PER_HAND.pow(order.len() as u32);
            (0..combos).any(|mut code| {
                let mut hand = dice.to_vec();
                for &skill in order {
                    let pos = code % DICE_PER_HAND;
                    code /= DICE_PER_HAND;
                    hand[pos] = skill.apply(hand[pos]);
                }
                can_take_any_category(&hand, categories)
            })
        })
    }

    #[test]
    fn test_matches_exhaustive_search() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut dead_ends = 0;

        for _ in 0..2000 {
            let faces: Vec<u8> = (0..DICE_PER_HAND).map(|_| rng.gen_range(1..=6)).collect();
            let dice = hand(&faces);

            // Mostly-filled sheets, so dead ends actually occur.
            let mut categories = CategoryMap::with_value(false);
            for &id in CategoryId::ALL {
                categories[id] = rng.gen_bool(0.75);
            }
            let skills: Vec<SkillId> = SkillId::ALL
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();

            let expected = brute_force(&dice, &skills, &categories);
            assert_eq!(
                can_reach_valid_state(&dice, &skills, &categories),
                expected,
                "dice {:?}, skills {:?}",
                faces,
                skills
            );
            if !expected {
                dead_ends += 1;
            }
        }

        assert!(dead_ends > 0);
    }
}

