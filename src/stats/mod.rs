//! Session statistics.
//!
//! Counters are updated after every attempt and every round resolution:
//!
//! - per-kind attempt and win totals
//! - current and best win streak across all kinds
//! - a sliding window of grand-total-attempt samples for trend display

pub mod history;

pub use history::BoundedHistory;

use serde::{Deserialize, Serialize};

use crate::core::{GameKind, KindMap};

/// Aggregate counters for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    attempts: KindMap<u64>,
    wins: KindMap<u64>,
    streak_current: u32,
    streak_best: u32,
    history: BoundedHistory,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(30)
    }
}

impl Stats {
    /// Create empty statistics keeping `history_capacity` trend samples.
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            attempts: KindMap::default(),
            wins: KindMap::default(),
            streak_current: 0,
            streak_best: 0,
            history: BoundedHistory::new(history_capacity),
        }
    }

    /// Count one attempt and sample the new grand total.
    pub fn record_attempt(&mut self, kind: GameKind) {
        self.record_attempts(kind, 1);
    }

    /// Count `count` attempts at once, taking a single trend sample.
    pub fn record_attempts(&mut self, kind: GameKind, count: u64) {
        self.attempts[kind] += count;
        self.history.push(self.total_attempts());
    }

    /// Apply a resolution: a win extends the streak, anything else ends it.
    ///
    /// Returns the current streak afterwards.
    pub fn record_outcome(&mut self, kind: GameKind, won: bool) -> u32 {
        if won {
            self.wins[kind] += 1;
        }
        self.record_streak(won)
    }

    /// Extend or break the streak without counting a win.
    pub fn record_streak(&mut self, won: bool) -> u32 {
        if won {
            self.streak_current += 1;
            self.streak_best = self.streak_best.max(self.streak_current);
        } else {
            self.streak_current = 0;
        }
        self.streak_current
    }

    /// Add wins without touching the streak.
    pub fn record_wins(&mut self, kind: GameKind, count: u64) {
        self.wins[kind] += count;
    }

    /// Zero every counter, best streak included, and clear the history.
    pub fn reset(&mut self) {
        *self = Self::new(self.history.capacity());
    }

    #[must_use]
    pub fn attempts(&self, kind: GameKind) -> u64 {
        self.attempts[kind]
    }

    #[must_use]
    pub fn wins(&self, kind: GameKind) -> u64 {
        self.wins[kind]
    }

    #[must_use]
    pub fn total_attempts(&self) -> u64 {
        self.attempts.values().sum()
    }

    #[must_use]
    pub fn total_wins(&self) -> u64 {
        self.wins.values().sum()
    }

    /// Wins per attempt, or `None` before the first attempt.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        match self.total_attempts() {
            0 => None,
            attempts => Some(self.total_wins() as f64 / attempts as f64),
        }
    }

    #[must_use]
    pub fn streak_current(&self) -> u32 {
        self.streak_current
    }

    #[must_use]
    pub fn streak_best(&self) -> u32 {
        self.streak_best
    }

    /// Streak length that beats the best so far.
    #[must_use]
    pub fn next_goal(&self) -> u32 {
        self.streak_best + 1
    }

    /// True when the current streak sits exactly on a milestone.
    #[must_use]
    pub fn is_milestone(&self, step: u32) -> bool {
        step > 0 && self.streak_current > 0 && self.streak_current % step == 0
    }

    /// Next milestone strictly above the current streak.
    #[must_use]
    pub fn next_milestone(&self, step: u32) -> u32 {
        let step = step.max(1);
        (self.streak_current / step + 1) * step
    }

    /// Progress toward the next milestone, in `[0, 1)`.
    #[must_use]
    pub fn milestone_progress(&self, step: u32) -> f64 {
        f64::from(self.streak_current) / f64::from(self.next_milestone(step))
    }

    /// Trend samples, oldest first.
    #[must_use]
    pub fn history(&self) -> &BoundedHistory {
        &self.history
    }
}
