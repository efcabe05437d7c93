//! Schedule matching: which trackers are due on which calendar dates.

use crate::libs::tracker::Tracker;
use crate::libs::weekday::Weekday;
use chrono::{Datelike, NaiveDate};

/// Weekday of a calendar date in the proleptic Gregorian calendar.
pub fn weekday_of(date: NaiveDate) -> Weekday {
    Weekday::from(date.weekday())
}

/// Whether a tracker is due on the given date.
///
/// A tracker is due when the date's weekday is part of its schedule. An empty
/// schedule never matches; a tracker meant to run every day carries all seven
/// weekdays explicitly. Total over all inputs.
pub fn is_due(tracker: &Tracker, date: NaiveDate) -> bool {
    tracker.schedule.contains(&weekday_of(date))
}
