//! Dice values, hands and the pure helpers the category predicates use.
//!
//! ## DieValue
//!
//! A single face in `[1, 6]`. Construction is checked, so every
//! `DieValue` in the engine is a legal face.
//!
//! ## DiceHand
//!
//! The current hand: empty before the first roll of a turn, five dice
//! afterwards. Hands are small and `Clone` is cheap (inline storage), so
//! transitions build new hands rather than mutating shared ones.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Deref;
use thiserror::Error;

use super::config::DICE_PER_HAND;

/// Errors from building dice out of raw numbers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("die face {0} is outside 1..=6")]
    InvalidFace(u8),

    #[error("a hand holds 0 or {DICE_PER_HAND} dice, got {0}")]
    InvalidHandSize(usize),
}

/// A single die face in `[1, 6]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    pub const MIN: DieValue = DieValue(1);
    pub const MAX: DieValue = DieValue(6);

    /// Create a die value, returning `None` outside `[1, 6]`.
    #[must_use]
    pub const fn new(face: u8) -> Option<Self> {
        if face >= 1 && face <= 6 {
            Some(Self(face))
        } else {
            None
        }
    }

    /// Get the number of pips.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over all six faces in ascending order.
    pub fn all() -> impl Iterator<Item = DieValue> {
        (1..=6).map(DieValue)
    }
}

impl TryFrom<u8> for DieValue {
    type Error = DiceError;

    fn try_from(face: u8) -> Result<Self, Self::Error> {
        Self::new(face).ok_or(DiceError::InvalidFace(face))
    }
}

impl From<DieValue> for u8 {
    fn from(value: DieValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The dice currently in play.
///
/// Derefs to `[DieValue]`, so slice methods and the free helpers in this
/// module work on it directly.
///
/// ```
/// use flyer_dungeon::core::DiceHand;
///
/// let hand = DiceHand::from_faces(&[6, 6, 6, 6, 6]).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(hand.sum(), 30);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DieValue>", into = "Vec<DieValue>")]
pub struct DiceHand {
    dice: SmallVec<[DieValue; DICE_PER_HAND]>,
}

impl DiceHand {
    /// An empty hand (start of a turn).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a full hand from already-validated faces.
    #[must_use]
    pub fn new(faces: [DieValue; DICE_PER_HAND]) -> Self {
        Self {
            dice: SmallVec::from_buf(faces),
        }
    }

    /// Build a hand from raw pip counts.
    ///
    /// Accepts either zero or exactly five faces, each in `[1, 6]`.
    pub fn from_faces(faces: &[u8]) -> Result<Self, DiceError> {
        if !faces.is_empty() && faces.len() != DICE_PER_HAND {
            return Err(DiceError::InvalidHandSize(faces.len()));
        }
        let dice = faces
            .iter()
            .map(|&f| DieValue::try_from(f))
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self { dice })
    }

    /// Copy of this hand with the die at `index` replaced.
    ///
    /// Returns `None` if `index` is out of range.
    #[must_use]
    pub fn with_face(&self, index: usize, face: DieValue) -> Option<Self> {
        if index >= self.dice.len() {
            return None;
        }
        let mut next = self.clone();
        next.dice[index] = face;
        Some(next)
    }

    /// Raw pip counts, in hand order.
    #[must_use]
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().map(|d| d.get()).collect()
    }

    /// Total pips.
    #[must_use]
    pub fn sum(&self) -> u32 {
        sum(self)
    }

    /// Face histogram.
    #[must_use]
    pub fn counts(&self) -> FaceCounts {
        FaceCounts::of(self)
    }

    /// Longest run of consecutive distinct faces.
    #[must_use]
    pub fn run_length(&self) -> usize {
        run_length(self)
    }
}

impl TryFrom<Vec<DieValue>> for DiceHand {
    type Error = DiceError;

    /// Same size rule as [`DiceHand::from_faces`].
    fn try_from(faces: Vec<DieValue>) -> Result<Self, Self::Error> {
        if !faces.is_empty() && faces.len() != DICE_PER_HAND {
            return Err(DiceError::InvalidHandSize(faces.len()));
        }
        Ok(Self {
            dice: SmallVec::from_vec(faces),
        })
    }
}

impl From<DiceHand> for Vec<DieValue> {
    fn from(hand: DiceHand) -> Self {
        hand.dice.into_vec()
    }
}

impl Deref for DiceHand {
    type Target = [DieValue];

    fn deref(&self) -> &Self::Target {
        &self.dice
    }
}

/// Histogram of faces: `count(face)` dice show `face`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; 7]);

impl FaceCounts {
    /// Count the faces in `dice`.
    #[must_use]
    pub fn of(dice: &[DieValue]) -> Self {
        let mut counts = [0u8; 7];
        for die in dice {
            counts[die.get() as usize] += 1;
        }
        Self(counts)
    }

    /// How many dice show `face`.
    #[must_use]
    pub fn count(&self, face: DieValue) -> u8 {
        self.0[face.get() as usize]
    }

    /// Counts for faces 1 through 6.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.0[1..].iter().copied()
    }

    /// Some face appears exactly `n` times.
    #[must_use]
    pub fn has_exactly(&self, n: u8) -> bool {
        self.values().any(|c| c == n)
    }

    /// Some face appears at least `n` times.
    #[must_use]
    pub fn has_at_least(&self, n: u8) -> bool {
        self.values().any(|c| c >= n)
    }

    /// Number of distinct faces appearing at least twice.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.values().filter(|&c| c >= 2).count()
    }
}

/// Total pips showing.
#[must_use]
pub fn sum(dice: &[DieValue]) -> u32 {
    dice.iter().map(|d| u32::from(d.get())).sum()
}

/// Longest run of consecutive distinct faces present.
///
/// `0` for no dice, at least `1` otherwise.
#[must_use]
pub fn run_length(dice: &[DieValue]) -> usize {
    let counts = FaceCounts::of(dice);
    let mut longest = 0;
    let mut current = 0;
    for face in DieValue::all() {
        if counts.count(face) > 0 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
