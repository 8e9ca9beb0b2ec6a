//! UI events the dashboard reacts to.

use serde::{Deserialize, Serialize};

use crate::rounds::{CoinSide, Difficulty};

/// One control interaction.
///
/// Encoded as JSON objects tagged by `type`, e.g.
/// `{"type":"roll_dice","lucky":4}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// Flip the coin aiming for `side`.
    FlipCoin { side: CoinSide },
    /// Roll the die aiming for `lucky`.
    RollDice { lucky: u32 },
    /// Guess the secret of the current number round.
    ///
    /// Switching difficulty draws a fresh secret first.
    SubmitGuess { difficulty: Difficulty, guess: u32 },
    /// Draw a fresh secret.
    NewNumber { difficulty: Difficulty },
    /// Guess today's number.
    SubmitDaily { guess: u32 },
    /// Run a Time Attack Blitz.
    StartBlitz { target: u32, rolls: u32 },
    /// Clear all statistics.
    ResetStats,
    /// Render the current view without acting.
    Snapshot,
}
