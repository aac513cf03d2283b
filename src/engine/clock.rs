//! Evaluation clock
//!
//! Resolves "today" in the application's home time zone exactly once per
//! evaluation pass. Every engine function takes the same [`Clock`], so a
//! pass that straddles midnight cannot disagree with itself about which
//! day it is.

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Home time zone used when the config does not name one
pub const DEFAULT_HOME_ZONE: Tz = chrono_tz::Europe::Berlin;

/// A calendar date captured once and shared by all computations of a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    today: NaiveDate,
}

impl Clock {
    /// Capture the current civil date in the given home zone
    pub fn for_zone(zone: Tz) -> Self {
        Self {
            today: Utc::now().with_timezone(&zone).date_naive(),
        }
    }

    /// A clock pinned to a known date, for tests and replays
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The captured calendar date
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Yesterday relative to the captured date
    pub fn yesterday(&self) -> NaiveDate {
        self.today - Duration::days(1)
    }

    /// Whole days from today until `date`
    ///
    /// Zero when `date` is today, negative when it is in the past.
    pub fn days_until(&self, date: NaiveDate) -> i64 {
        (date - self.today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_counts_from_the_captured_date() {
        let clock = Clock::fixed(date(2026, 3, 10));

        assert_eq!(clock.days_until(date(2026, 3, 10)), 0);
        assert_eq!(clock.days_until(date(2026, 3, 17)), 7);
        assert_eq!(clock.days_until(date(2026, 3, 8)), -2);
    }

    #[test]
    fn test_days_until_crosses_month_boundaries() {
        let clock = Clock::fixed(date(2026, 2, 27));
        assert_eq!(clock.days_until(date(2026, 3, 2)), 3);
    }

    #[test]
    fn test_yesterday_is_one_day_back() {
        let clock = Clock::fixed(date(2026, 1, 1));
        assert_eq!(clock.yesterday(), date(2025, 12, 31));
    }
}
