//! Rules engine: the pure transition function and its helpers.
//!
//! - `engine`: `init`, `step`, `try_step`, `legal_actions`
//! - `reachability`: loss detection over skill sequences
//! - `error`: why an action was rejected
//!
//! Nothing here logs or touches global state; randomness arrives through
//! the caller's [`FaceSource`](crate::core::FaceSource).

pub mod engine;
pub mod error;
pub mod reachability;

pub use engine::{init, legal_actions, step, try_step};
pub use error::IllegalAction;
pub use reachability::{
    can_reach_valid_state, can_take_any_category, check_lose_condition, has_valid_move,
};
