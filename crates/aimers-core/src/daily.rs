//! Records that only describe a single calendar day.

use chrono::{Local, NaiveDate};

/// A record keyed by calendar date.
///
/// Loading a record dated anything other than today yields a fresh default
/// for today instead.
pub trait DailyRecord: Sized {
    fn date(&self) -> NaiveDate;

    /// Default record for `date`.
    fn fresh(date: NaiveDate) -> Self;

    fn is_current(&self, today: NaiveDate) -> bool {
        self.date() == today
    }

    /// Returns `self` if it belongs to `today`, otherwise a fresh record.
    fn roll_over(self, today: NaiveDate) -> Self {
        if self.is_current(today) {
            self
        } else {
            tracing::debug!(stale = %self.date(), %today, "resetting daily record");
            Self::fresh(today)
        }
    }
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
