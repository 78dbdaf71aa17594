//! # flyer-dungeon
//!
//! Rules engine for a single-player dice game: roll five dice up to three
//! times a turn, then check off one of 17 scoring categories. Filling
//! categories unlocks skills that alter a single die. Reaching the fifth
//! dungeon floor wins; running out of rolls with nothing to score loses.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `step(state, action, faces)` returns a new
//!    state and never mutates its input. Illegal actions are no-ops.
//!
//! 2. **Injected randomness**: every die face is drawn from a
//!    [`FaceSource`], so tests and replays are fully deterministic.
//!
//! 3. **Closed catalogs**: categories and skills are enums backed by static
//!    tables; every rule branch is an exhaustive `match`.
//!
//! ## Modules
//!
//! - `core`: dice, face sources, actions, state, constants and configuration
//! - `catalog`: category and skill tables, enum-keyed maps
//! - `rules`: `init` / `step` / `try_step`, legal actions, loss detection
//! - `view`: render-ready projection of a state
//! - `session`: a live game with history, restart and sound cues
//!
//! ## Example
//!
//! ```
//! use flyer_dungeon::{get_view, init, step, PlayerAction, ScriptedFaces};
//!
//! let mut faces = ScriptedFaces::from_pips(&[4, 4, 4, 4, 4]);
//! let state = step(&init(), &PlayerAction::roll_all(), &mut faces);
//!
//! let view = get_view(&state);
//! assert!(view.selectable().any(|id| id.to_string() == "dungeon_floor_1"));
//! ```

pub mod core;
pub mod catalog;
pub mod rules;
pub mod view;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DieValue, DiceHand, DiceError,
    FaceSource, GameRng, GameRngState, ScriptedFaces,
    PlayerAction, ActionRecord,
    GameState, GameStatus, StateError,
    SessionConfig, DICE_PER_HAND, MAX_ROLLS, SKILL_UNLOCK_THRESHOLD,
};

pub use crate::catalog::{
    CatalogKey, CatalogMap,
    CategoryGroup, CategoryId, CategoryMap,
    SkillId, SkillMap,
};

pub use crate::rules::{init, legal_actions, step, try_step, IllegalAction};

pub use crate::view::{get_view, CategoryView, GameView, RollsView, SkillStatus, SkillView, UnlockProgress};

pub use crate::session::{Dispatch, GameSession, SoundCue};
