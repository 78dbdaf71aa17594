//! Game session: owns the single live `GameState` and its face source.
//!
//! The session is the event-dispatch layer around the pure rules. It
//! applies actions, tracks turns and history, reports sound cues for the
//! audio layer, and is the only place in the crate that logs.

use smallvec::{smallvec, SmallVec};

use crate::core::{
    ActionRecord, FaceSource, GameRng, GameState, GameStatus, PlayerAction, SessionConfig,
};
use crate::rules::{init, try_step, IllegalAction};
use crate::view::{get_view, GameView};

use super::sound::SoundCue;

/// Outcome of [`GameSession::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// `Err` when the action was rejected; the state is then unchanged.
    pub result: Result<(), IllegalAction>,

    /// Cues to play, in order. Empty for rejected actions.
    pub cues: SmallVec<[SoundCue; 2]>,
}

impl Dispatch {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// A single game from first roll to win or loss, restartable.
///
/// ```
/// use flyer_dungeon::core::{PlayerAction, SessionConfig};
/// use flyer_dungeon::session::{GameSession, SoundCue};
///
/// let mut session = GameSession::new(&SessionConfig::new(7));
/// let dispatch = session.dispatch(&PlayerAction::roll_all());
///
/// assert!(dispatch.is_accepted());
/// assert_eq!(dispatch.cues.as_slice(), &[SoundCue::Roll]);
/// assert_eq!(session.state().dice.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<F: FaceSource = GameRng> {
    state: GameState,
    faces: F,
    config: SessionConfig,
    history: Vec<ActionRecord>,
    turn: u32,
    sequence: u32,
}

impl GameSession<GameRng> {
    /// Session rolling with a `GameRng` seeded from `config`.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_faces(config, GameRng::new(config.seed))
    }
}

impl<F: FaceSource> GameSession<F> {
    /// Session rolling with a caller-supplied face source.
    #[must_use]
    pub fn with_faces(config: &SessionConfig, faces: F) -> Self {
        Self {
            state: init(),
            faces,
            config: config.clone(),
            history: Vec::new(),
            turn: 1,
            sequence: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render-ready snapshot of the current state.
    #[must_use]
    pub fn view(&self) -> GameView {
        get_view(&self.state)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The face source, e.g. to checkpoint a `GameRng`.
    #[must_use]
    pub fn faces(&self) -> &F {
        &self.faces
    }

    /// Current turn, starting at 1. Advances on every category check that
    /// does not win the game.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Accepted actions since the last restart. Empty when history
    /// recording is disabled.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Apply `action` to the live state.
    pub fn dispatch(&mut self, action: &PlayerAction) -> Dispatch {
        let next = match try_step(&self.state, action, &mut self.faces) {
            Ok(next) => next,
            Err(reason) => {
                tracing::debug!("Rejected {:?}: {}", action, reason);
                return Dispatch {
                    result: Err(reason),
                    cues: SmallVec::new(),
                };
            }
        };

        let mut cues: SmallVec<[SoundCue; 2]> = match action {
            PlayerAction::RollDice { .. } => {
                tracing::trace!("Rolled {:?}", next.dice.faces());
                smallvec![SoundCue::Roll]
            }
            PlayerAction::UseSkill { skill_id, .. } => smallvec![SoundCue::for_skill(*skill_id)],
            PlayerAction::SelectCategory { category_id } => {
                smallvec![SoundCue::for_category(*category_id)]
            }
        };

        tracing::debug!(
            "Turn {} #{}: accepted {:?}",
            self.turn,
            self.sequence,
            action
        );

        if self.config.record_history {
            self.history
                .push(ActionRecord::new(action.clone(), self.turn, self.sequence));
        }
        self.sequence += 1;

        match next.status {
            GameStatus::Playing if matches!(action, PlayerAction::SelectCategory { .. }) => {
                self.turn += 1;
                self.sequence = 0;
            }
            GameStatus::Playing => {}
            GameStatus::Lost => {
                cues.push(SoundCue::Lose);
                tracing::info!("Game lost on turn {}", self.turn);
            }
            GameStatus::Won => {
                tracing::info!("Game won on turn {}", self.turn);
            }
        }

        self.state = next;
        Dispatch {
            result: Ok(()),
            cues,
        }
    }

    /// Start a new game. The face source carries on from where it was, so
    /// a seeded session replays identically only from construction.
    pub fn restart(&mut self) -> SoundCue {
        tracing::info!(
            "Restarting after {} turns ({})",
            self.turn,
            self.state.status
        );
        self.state = init();
        self.history.clear();
        self.turn = 1;
        self.sequence = 0;
        SoundCue::Roll
    }
}
