//! Reference-date clock
//!
//! Age is computed "as of" a reference date. Production code asks the
//! system clock; tests and reproducible runs pin the date with
//! [`FixedClock`].

use chrono::{NaiveDate, Utc};
use std::fmt::Debug;
use std::str::FromStr;

use crate::error::CoreError;

/// Source of the current calendar date
pub trait Clock: Debug + Send + Sync + 'static {
    /// Returns today's date in UTC
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a fixed clock from year, month and day
    ///
    /// Returns `None` when the components do not form a calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for FixedClock {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CoreError::invalid_date(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::from_ymd(2025, 5, 26).unwrap();
        assert_eq!(clock.today(), clock.today());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
    }

    #[test]
    fn test_fixed_clock_parse() {
        let clock: FixedClock = "2025-05-26".parse().unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 5, 26).unwrap());
    }

    #[test]
    fn test_fixed_clock_rejects_bad_date() {
        assert!("2025-02-30".parse::<FixedClock>().is_err());
        assert!("26/05/2025".parse::<FixedClock>().is_err());
    }

    #[test]
    fn test_fixed_clock_from_invalid_components() {
        assert!(FixedClock::from_ymd(2025, 13, 1).is_none());
    }
}
