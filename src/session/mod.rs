//! Session layer: one live game, its face source, history and sound cues.
//!
//! This is the only module that logs. Rules, catalog and view stay silent.

pub mod game;
pub mod sound;

pub use game::{Dispatch, GameSession};
pub use sound::SoundCue;
