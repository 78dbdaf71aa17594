//! Read-only projection of a `GameState` for the renderer.
//!
//! The view carries derived flags (selectability, skill status, roll
//! budget) so the UI never re-implements a rule.

pub mod model;
pub mod projector;

pub use model::{CategoryView, GameView, RollsView, SkillStatus, SkillView, UnlockProgress};
pub use projector::get_view;
