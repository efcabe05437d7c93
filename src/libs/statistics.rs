//! Aggregate statistics over the full completion history.
//!
//! Four metrics are computed from one snapshot in one pass structure:
//!
//! - **best period**: the longest run of consecutive calendar days that each
//!   contain at least one completion record
//! - **ideal days**: days on which every tracker scheduled for that weekday
//!   was completed
//! - **completed trackers**: the raw completion count across all days
//! - **average per day**: completions divided by distinct active days,
//!   rounded to the nearest integer
//!
//! Taking the snapshot as a single argument keeps the metrics mutually
//! consistent: no metric can observe a different data generation than the
//! others.

use crate::libs::schedule;
use crate::libs::tracker::Snapshot;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use uuid::Uuid;

/// Summary metrics for the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub best_period: u32,
    pub ideal_days: u32,
    pub completed_trackers: u32,
    pub average_per_day: u32,
}

/// Computes all four metrics from a snapshot.
///
/// With no records every metric is zero, regardless of how many trackers
/// exist. The average uses real division rounded half away from zero, so
/// 7 completions over 2 days round to 4.
pub fn calculate(snapshot: &Snapshot) -> Statistics {
    if snapshot.records.is_empty() {
        return Statistics::default();
    }

    let unique_days: BTreeSet<NaiveDate> = snapshot.records.iter().map(|record| record.date).collect();

    // Days are distinct, so a gap of zero cannot occur: each step either
    // extends the streak by exactly one day or starts a new one.
    let mut best_period = 0u32;
    let mut current = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &day in &unique_days {
        current = match previous {
            Some(prev) if (day - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        best_period = best_period.max(current);
        previous = Some(day);
    }

    let completed_trackers = snapshot.records.len() as u32;
    let average_per_day = (f64::from(completed_trackers) / unique_days.len() as f64).round() as u32;

    let mut by_day: BTreeMap<NaiveDate, HashSet<Uuid>> = BTreeMap::new();
    for record in &snapshot.records {
        by_day.entry(record.date).or_default().insert(record.tracker_id);
    }

    // A day with nothing scheduled can never be ideal, which also rules out
    // the ambiguous 0 == 0 comparison.
    let ideal_days = by_day
        .iter()
        .filter(|(day, completed)| {
            let weekday = schedule::weekday_of(**day);
            let available = snapshot.trackers().filter(|tracker| tracker.schedule.contains(&weekday)).count();
            available > 0 && completed.len() == available
        })
        .count() as u32;

    Statistics {
        best_period,
        ideal_days,
        completed_trackers,
        average_per_day,
    }
}
