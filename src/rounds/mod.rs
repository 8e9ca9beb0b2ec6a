//! Round engine for the three chance games plus the blitz burst.
//!
//! - **Coin**: draw a side per attempt until it matches the player's pick
//! - **Dice**: draw a face per attempt until it matches the lucky number
//! - **Number**: guess a secret drawn once per round, with higher/lower hints
//! - **Blitz**: a fixed burst of dice rolls scored by hits
//!
//! Rounds only judge attempts. Accounting (attempt totals, streaks, history)
//! is the session's job.

pub mod target;
pub mod round;
pub mod blitz;

pub use target::{check_face, CoinSide, Difficulty, Target, DIE_MAX, DIE_MIN};
pub use round::{Attempt, Hint, Resolution, Round, RoundState, Verdict};
pub use blitz::{Blitz, BlitzRecord, BlitzReport, BlitzRolls, BLITZ_MAX_ROLLS, BLITZ_MIN_ROLLS};
