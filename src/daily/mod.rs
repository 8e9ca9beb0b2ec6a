//! Daily challenge: a number round whose secret comes from the calendar.
//!
//! The secret for a date is `seeded_uniform(YYYYMMDD, 1, bound)`, so every
//! player on the same date faces the same number. Exactly one challenge is
//! active at a time; when the date changes it is replaced as a whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{date_seed, seeded_uniform, ArcadeError, ArcadeResult};
use crate::rounds::{Attempt, Round};

/// Today's number challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    date: NaiveDate,
    round: Round,
    /// Attempts already charged as a loss by `settle_loss`.
    settled: u32,
}

impl DailyChallenge {
    /// Build the challenge for `date` with secrets in `[1, bound]`.
    #[must_use]
    pub fn for_date(date: NaiveDate, bound: u32) -> Self {
        let bound = bound.max(1);
        let target = seeded_uniform(date_seed(date), 1, bound);
        Self {
            date,
            round: Round::with_secret(target, bound),
            settled: 0,
        }
    }

    /// Replace the challenge if `today` differs from its date.
    ///
    /// Returns true when a rollover happened.
    pub fn refresh(&mut self, today: NaiveDate) -> bool {
        if self.date == today {
            return false;
        }
        *self = Self::for_date(today, self.round.bound());
        true
    }

    /// Submit a guess. Rejected once the challenge is completed.
    pub fn guess(&mut self, guess: u32) -> ArcadeResult<Attempt> {
        if self.is_completed() {
            return Err(ArcadeError::DailyCompleted);
        }
        self.round.guess(guess)
    }

    /// Charge the attempts made since the last settlement as a lost round.
    ///
    /// The challenge stays open for more guesses today. Returns false when
    /// there is nothing to charge: no new attempts, or already completed.
    pub fn settle_loss(&mut self) -> bool {
        let attempts = self.round.attempts();
        if self.is_completed() || attempts <= self.settled {
            return false;
        }
        self.settled = attempts;
        true
    }

    /// Clear attempts and the completed flag, keeping date and target.
    pub fn reset_progress(&mut self) {
        *self = Self::for_date(self.date, self.round.bound());
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.round.secret().unwrap_or_default()
    }

    #[must_use]
    pub fn bound(&self) -> u32 {
        self.round.bound()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.round.attempts()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.round.is_won()
    }
}
