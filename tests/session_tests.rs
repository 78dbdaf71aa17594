//! Session integration tests.
//!
//! These tests verify the event-dispatch layer around the rules:
//! - Sound cues for every kind of accepted action
//! - Turn and history bookkeeping across commits
//! - Restart and seeded replay

use flyer_dungeon::catalog::{CategoryId, SkillId};
use flyer_dungeon::core::{GameRng, GameStatus, PlayerAction, ScriptedFaces, SessionConfig};
use flyer_dungeon::rules::{init, legal_actions, IllegalAction};
use flyer_dungeon::session::{GameSession, SoundCue};
use flyer_dungeon::view::SkillStatus;

fn scripted(pips: &[u8]) -> GameSession<ScriptedFaces> {
    GameSession::with_faces(&SessionConfig::default(), ScriptedFaces::from_pips(pips))
}

/// Play greedily until the game ends, returning the actions taken.
fn play_out<F: flyer_dungeon::core::FaceSource>(session: &mut GameSession<F>) -> Vec<PlayerAction> {
    let mut taken = Vec::new();
    while !session.state().is_over() && taken.len() < 500 {
        let actions = legal_actions(session.state());
        let action = actions
            .iter()
            .find(|a| matches!(a, PlayerAction::SelectCategory { .. }))
            .unwrap_or(&actions[0])
            .clone();
        assert!(session.dispatch(&action).is_accepted());
        taken.push(action);
    }
    taken
}

// =============================================================================
// Sound Cues
// =============================================================================

#[test]
fn test_win_cue() {
    #[rustfmt::skip]
    let mut session = scripted(&[
        4, 4, 4, 4, 4,
        5, 5, 5, 5, 5,
        6, 6, 6, 6, 6,
        1, 1, 1, 1, 1,
        2, 2, 2, 2, 2,
    ]);
    let floors = [
        CategoryId::DungeonFloor1,
        CategoryId::DungeonFloor2,
        CategoryId::DungeonFloor3,
        CategoryId::DungeonFloor4,
    ];
    for floor in floors {
        session.dispatch(&PlayerAction::roll_all());
        let dispatch = session.dispatch(&PlayerAction::select(floor));
        assert_eq!(dispatch.cues.as_slice(), &[SoundCue::DungeonProgress]);
    }

    session.dispatch(&PlayerAction::roll_all());
    let dispatch = session.dispatch(&PlayerAction::select(CategoryId::DungeonFloor5));

    assert_eq!(dispatch.cues.as_slice(), &[SoundCue::Win]);
    assert_eq!(session.state().status, GameStatus::Won);
    // The winning commit does not start a new turn.
    assert_eq!(session.turn(), 5);
    assert_eq!(session.history().len(), 10);
}

#[test]
fn test_rejections_are_silent() {
    let mut session = scripted(&[1, 2, 3, 4, 6]);
    session.dispatch(&PlayerAction::roll_all());

    let dispatch = session.dispatch(&PlayerAction::use_skill(SkillId::Mighty, 0));
    assert_eq!(dispatch.result, Err(IllegalAction::SkillLocked(SkillId::Mighty)));
    assert!(dispatch.cues.is_empty());
    assert_eq!(session.history().len(), 1);
}

// =============================================================================
// Turns and History
// =============================================================================

#[test]
fn test_history_numbers_actions_within_turns() {
    let mut session = scripted(&[6, 6, 6, 2, 2]);
    session.dispatch(&PlayerAction::roll_all());
    session.dispatch(&PlayerAction::reroll([3]));
    session.dispatch(&PlayerAction::select(CategoryId::ThreeOfAKind6));
    session.dispatch(&PlayerAction::roll_all());

    let positions: Vec<(u32, u32)> = session
        .history()
        .iter()
        .map(|r| (r.turn, r.sequence))
        .collect();
    assert_eq!(positions, vec![(1, 0), (1, 1), (1, 2), (2, 0)]);
    assert_eq!(session.turn(), 2);
}

#[test]
fn test_view_tracks_unlocks() {
    let mut session = scripted(&[3, 3, 3, 4, 4]);
    for category in [
        CategoryId::ThreeOfAKind3,
        CategoryId::OnePair,
        CategoryId::TwoPair,
    ] {
        session.dispatch(&PlayerAction::roll_all());
        assert!(session.dispatch(&PlayerAction::select(category)).is_accepted());
    }

    let view = session.view();
    assert_eq!(view.skills[SkillId::Metamorph].status, SkillStatus::Available);
    assert_eq!(view.skills[SkillId::Metamorph].unlock_progress.current, 3);
    assert_eq!(view.skills[SkillId::Mighty].status, SkillStatus::Locked);
    assert_eq!(view.rolls.current, 0);

    session.dispatch(&PlayerAction::roll_all());
    let dispatch = session.dispatch(&PlayerAction::use_skill(SkillId::Metamorph, 0));
    assert_eq!(dispatch.cues.as_slice(), &[SoundCue::Metamorph]);
    assert_eq!(session.view().skills[SkillId::Metamorph].status, SkillStatus::Used);
    assert_eq!(session.state().dice.faces(), vec![4, 3, 3, 4, 4]);
}

// =============================================================================
// Restart and Replay
// =============================================================================

#[test]
fn test_restart_mid_game() {
    let mut session = GameSession::new(&SessionConfig::new(3));
    session.dispatch(&PlayerAction::roll_all());
    session.dispatch(&PlayerAction::roll_all());

    assert_eq!(session.restart(), SoundCue::Roll);
    assert_eq!(session.state(), &init());
    assert_eq!(session.turn(), 1);
    assert!(session.history().is_empty());
    assert!(session.view().rolls.can_roll);
}

#[test]
fn test_seeded_game_replays_from_history() {
    let config = SessionConfig::new(2024);
    let mut session = GameSession::new(&config);
    let taken = play_out(&mut session);

    assert!(session.state().is_over());
    let recorded: Vec<PlayerAction> = session.history().iter().map(|r| r.action.clone()).collect();
    assert_eq!(recorded, taken);

    let mut replay = GameSession::new(&config);
    for action in &recorded {
        assert!(replay.dispatch(action).is_accepted());
    }
    assert_eq!(replay.state(), session.state());
    assert_eq!(replay.turn(), session.turn());
}

#[test]
fn test_checkpointed_rng_resumes() {
    let config = SessionConfig::new(11);
    let mut session = GameSession::new(&config);
    session.dispatch(&PlayerAction::roll_all());

    let checkpoint = session.faces().state();
    let mut resumed =
        GameSession::with_faces(&config, GameRng::from_state(&checkpoint));
    let mut original = session.clone();
    original.restart();

    original.dispatch(&PlayerAction::roll_all());
    resumed.dispatch(&PlayerAction::roll_all());
    assert_eq!(original.state().dice, resumed.state().dice);
}

#[test]
fn test_game_over_cue_sequence() {
    let mut session = GameSession::new(&SessionConfig::new(5).without_history());
    play_out(&mut session);

    let after = session.dispatch(&PlayerAction::roll_all());
    assert!(matches!(after.result, Err(IllegalAction::GameOver(_))));
    assert!(after.cues.is_empty());
    assert!(session.history().is_empty());
}
