//! Calendar date source.
//!
//! The daily challenge keys off today's date. Production reads the local
//! calendar; tests pin or advance the date with `FixedClock`.

use chrono::{Datelike, Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

/// Provides today's calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system calendar.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually controlled date.
///
/// Clones share the same date, so a test can keep a handle and advance the
/// date a session is reading.
#[derive(Clone, Debug)]
pub struct FixedClock {
    date: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    /// Move forward by whole days.
    pub fn advance_days(&self, days: u64) {
        let next = self.date.get() + chrono::Days::new(days);
        self.date.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

/// Integer encoding of a date as `YYYYMMDD`.
///
/// ```
/// use chrono::NaiveDate;
/// use luck_arcade::core::date_seed;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// assert_eq!(date_seed(date), 20261016);
/// ```
#[must_use]
pub fn date_seed(date: NaiveDate) -> u64 {
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_seed() {
        assert_eq!(date_seed(date(2024, 1, 5)), 20240105);
        assert_eq!(date_seed(date(1999, 12, 31)), 19991231);
    }

    #[test]
    fn test_fixed_clock_shared_between_clones() {
        let clock = FixedClock::new(date(2024, 12, 31));
        let handle = clock.clone();

        handle.advance_days(1);

        assert_eq!(clock.today(), date(2025, 1, 1));
    }
}
