//! Core engine types: dice, face generation, actions, state, configuration.
//!
//! This module contains the data the rules operate on. The rules
//! themselves live in `rules`; the static tables in `catalog`.

pub mod action;
pub mod config;
pub mod dice;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, PlayerAction};
pub use config::{SessionConfig, DICE_PER_HAND, MAX_ROLLS, SKILL_UNLOCK_THRESHOLD};
pub use dice::{DiceError, DiceHand, DieValue, FaceCounts};
pub use rng::{FaceSource, GameRng, GameRngState, ScriptedFaces};
pub use state::{GameState, GameStatus, StateError};
