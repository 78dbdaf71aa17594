//! Die face generation.
//!
//! ## Key Features
//!
//! - **Injectable**: transitions draw faces through the `FaceSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces the same faces
//! - **Serializable**: `GameRng` state can be captured and restored in O(1)
//! - **Scripted**: `ScriptedFaces` replays a fixed face list for tests
//!
//! ```
//! use flyer_dungeon::core::{FaceSource, GameRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.next_face(), rng2.next_face());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::DieValue;

/// Source of fresh die faces.
///
/// Faces are drawn one at a time, at the point of use.
pub trait FaceSource {
    /// Produce the next face.
    fn next_face(&mut self) -> DieValue;
}

impl<F: FaceSource + ?Sized> FaceSource for &mut F {
    fn next_face(&mut self) -> DieValue {
        (**self).next_face()
    }
}

/// Deterministic RNG for die rolls.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible
/// from the seed alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl FaceSource for GameRng {
    fn next_face(&mut self) -> DieValue {
        let pips: u8 = self.inner.gen_range(1..=6);
        DieValue::new(pips).unwrap_or(DieValue::MIN)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many faces have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Face source that cycles through a fixed list.
///
/// ```
/// use flyer_dungeon::core::{FaceSource, ScriptedFaces};
///
/// let mut faces = ScriptedFaces::from_pips(&[6, 1]);
/// assert_eq!(faces.next_face().get(), 6);
/// assert_eq!(faces.next_face().get(), 1);
/// assert_eq!(faces.next_face().get(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedFaces {
    faces: Vec<DieValue>,
    cursor: usize,
}

impl ScriptedFaces {
    /// Cycle through `faces`. An empty list yields 1s.
    #[must_use]
    pub fn new(faces: Vec<DieValue>) -> Self {
        Self { faces, cursor: 0 }
    }

    /// Cycle through raw pip counts, skipping values outside `[1, 6]`.
    #[must_use]
    pub fn from_pips(pips: &[u8]) -> Self {
        Self::new(pips.iter().filter_map(|&p| DieValue::new(p)).collect())
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for ScriptedFaces {
    fn next_face(&mut self) -> DieValue {
        if self.faces.is_empty() {
            return DieValue::MIN;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
