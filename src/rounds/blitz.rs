//! Time Attack Blitz: a burst of automatic dice rolls scored by how many
//! land on the chosen face.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ArcadeError, ArcadeResult, RandomSource};

use super::target::{check_face, DIE_MAX, DIE_MIN};

/// Fewest rolls in a blitz.
pub const BLITZ_MIN_ROLLS: u32 = 6;
/// Most rolls in a blitz.
pub const BLITZ_MAX_ROLLS: u32 = 24;

/// Roll sequence of one blitz; never longer than `BLITZ_MAX_ROLLS`.
pub type BlitzRolls = SmallVec<[u32; 24]>;

/// Validated blitz setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blitz {
    target: u32,
    rolls: u32,
}

impl Blitz {
    /// Validate a target face and an even roll count in `[6, 24]`.
    pub fn new(target: u32, rolls: u32) -> ArcadeResult<Self> {
        let target = check_face(target)?;
        if rolls % 2 != 0 || !(BLITZ_MIN_ROLLS..=BLITZ_MAX_ROLLS).contains(&rolls) {
            return Err(ArcadeError::InvalidBlitzRolls {
                rolls,
                min: BLITZ_MIN_ROLLS,
                max: BLITZ_MAX_ROLLS,
            });
        }
        Ok(Self { target, rolls })
    }

    /// Roll the whole burst.
    pub fn run(&self, rng: &mut impl RandomSource) -> BlitzReport {
        let rolls: BlitzRolls = (0..self.rolls).map(|_| rng.uniform(DIE_MIN, DIE_MAX)).collect();
        let hits = rolls.iter().filter(|&&roll| roll == self.target).count() as u32;
        BlitzReport {
            target: self.target,
            rolls,
            hits,
        }
    }
}

/// Result of one blitz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlitzReport {
    pub target: u32,
    pub rolls: BlitzRolls,
    pub hits: u32,
}

impl BlitzReport {
    /// Number of rolls made.
    #[must_use]
    pub fn roll_count(&self) -> u32 {
        self.rolls.len() as u32
    }
}

/// Blitz history of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlitzRecord {
    /// Blitz runs played.
    pub runs: u32,
    /// Most hits in a single run.
    pub best_hits: u32,
}

impl BlitzRecord {
    /// Fold a finished run into the record.
    pub fn record(&mut self, report: &BlitzReport) {
        self.runs += 1;
        self.best_hits = self.best_hits.max(report.hits);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
