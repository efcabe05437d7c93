//! Domain model for trackers, categories and completion records.
//!
//! These are plain value types. The persistence layer maps them to and from
//! SQLite rows; the engine functions in [`crate::libs::schedule`],
//! [`crate::libs::visibility`], [`crate::libs::ledger`] and
//! [`crate::libs::statistics`] operate on an immutable [`Snapshot`] of them.

use crate::libs::weekday::Weekday;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

/// A recurring habit with a weekly schedule.
///
/// The `id` and `created_at` fields are assigned at creation and survive
/// edits; every other field is replaced wholesale when the tracker is edited.
/// An empty schedule means the tracker is never due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub color: String,
    pub schedule: BTreeSet<Weekday>,
    pub created_at: NaiveDate,
}

impl Tracker {
    pub fn new(name: &str, emoji: &str, color: &str, schedule: BTreeSet<Weekday>, created_at: NaiveDate) -> Self {
        Tracker {
            id: Uuid::new_v4(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
            schedule,
            created_at,
        }
    }
}

/// A named grouping of trackers.
///
/// Category names are unique under case-insensitive comparison; member
/// trackers keep their storage (insertion) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerCategory {
    pub name: String,
    pub trackers: Vec<Tracker>,
}

/// The fact that a tracker was completed on a calendar day.
///
/// `tracker_id` references a [`Tracker`] by value, not by ownership; at most
/// one record exists per (tracker_id, date) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompletionRecord {
    pub tracker_id: Uuid,
    pub date: NaiveDate,
}

/// An immutable point-in-time view of all categories, trackers and records.
///
/// Every engine function takes a snapshot (or slices of one) explicitly, so
/// the four statistics and the visible list are always computed against one
/// consistent generation of the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub categories: Vec<TrackerCategory>,
    pub records: Vec<CompletionRecord>,
}

impl Snapshot {
    /// All trackers across categories, in storage order.
    pub fn trackers(&self) -> impl Iterator<Item = &Tracker> {
        self.categories.iter().flat_map(|category| category.trackers.iter())
    }

    /// Looks up a tracker by id.
    pub fn tracker(&self, id: Uuid) -> Option<&Tracker> {
        self.trackers().find(|tracker| tracker.id == id)
    }
}
