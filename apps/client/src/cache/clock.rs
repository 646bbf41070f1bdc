//! Injectable calendar clock so tests can simulate day rollover.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// The current local calendar date. Freshness is a plain date-equality
    /// check, never a rolling 24-hour window.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used outside tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Formats a date the way cache entries store it, e.g. `Mon Jan 01 2024`.
pub fn day_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
