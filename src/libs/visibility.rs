//! Visibility filtering for the tracker list.
//!
//! Computes which trackers to display for a selected date, an optional search
//! string and a filter mode, grouped by category. Also classifies the two
//! distinct empty states: nothing scheduled on the date at all, versus
//! trackers scheduled but filtered or searched away.

use crate::libs::ledger;
use crate::libs::schedule;
use crate::libs::tracker::{Snapshot, Tracker};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fmt;

/// Restriction applied on top of date-due filtering.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every tracker due on the selected date.
    #[default]
    All,
    /// Forces the selected date to today, then behaves like `All`.
    Today,
    /// Due and completed on the selected date.
    Completed,
    /// Due and not completed on the selected date.
    Incomplete,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            FilterMode::All => "all",
            FilterMode::Today => "today",
            FilterMode::Completed => "completed",
            FilterMode::Incomplete => "incomplete",
        };
        write!(f, "{}", label)
    }
}

/// One category worth of visible trackers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: String,
    pub trackers: Vec<Tracker>,
}

/// Why the visible list came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No tracker is scheduled on the date at all.
    NothingScheduled,
    /// Trackers are scheduled, but search or the filter mode excluded them.
    NothingFound,
}

fn effective_date(selected_date: NaiveDate, today: NaiveDate, mode: FilterMode) -> NaiveDate {
    match mode {
        FilterMode::Today => today,
        _ => selected_date,
    }
}

/// Computes the ordered (category, trackers) sections to display.
///
/// Trackers pass when they are due on the effective date, match the trimmed
/// search string case-insensitively (when one is given) and satisfy the
/// filter mode. Categories with no passing trackers are dropped; the rest are
/// ordered ascending by name. Trackers keep their storage order.
pub fn visible_sections(
    snapshot: &Snapshot,
    selected_date: NaiveDate,
    today: NaiveDate,
    search: &str,
    mode: FilterMode,
) -> Vec<Section> {
    let date = effective_date(selected_date, today, mode);
    let needle = search.trim().to_lowercase();

    let mut sections: Vec<Section> = snapshot
        .categories
        .iter()
        .filter_map(|category| {
            let trackers: Vec<Tracker> = category
                .trackers
                .iter()
                .filter(|tracker| schedule::is_due(tracker, date))
                .filter(|tracker| needle.is_empty() || tracker.name.to_lowercase().contains(&needle))
                .filter(|tracker| match mode {
                    FilterMode::All | FilterMode::Today => true,
                    FilterMode::Completed => ledger::is_completed(&snapshot.records, tracker.id, date),
                    FilterMode::Incomplete => !ledger::is_completed(&snapshot.records, tracker.id, date),
                })
                .cloned()
                .collect();

            (!trackers.is_empty()).then(|| Section {
                category: category.name.clone(),
                trackers,
            })
        })
        .collect();

    sections.sort_by(|a, b| a.category.cmp(&b.category));
    sections
}

/// Whether any tracker at all is due on the date, ignoring search and mode.
pub fn has_any_due(snapshot: &Snapshot, date: NaiveDate) -> bool {
    snapshot.trackers().any(|tracker| schedule::is_due(tracker, date))
}

/// Classifies an empty visible list, or `None` when it is not empty.
pub fn empty_reason(
    snapshot: &Snapshot,
    selected_date: NaiveDate,
    today: NaiveDate,
    search: &str,
    mode: FilterMode,
) -> Option<EmptyReason> {
    if !visible_sections(snapshot, selected_date, today, search, mode).is_empty() {
        return None;
    }
    let date = effective_date(selected_date, today, mode);
    if !has_any_due(snapshot, date) {
        Some(EmptyReason::NothingScheduled)
    } else {
        Some(EmptyReason::NothingFound)
    }
}
