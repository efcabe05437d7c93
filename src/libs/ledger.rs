//! Completion ledger: pure queries and toggles over completion records.
//!
//! All functions here are pure; the persistence layer durably applies the
//! state these functions describe. `toggle` takes `today` explicitly so the
//! future-date rule stays testable and timezone decisions stay at the caller.

use crate::libs::tracker::{CompletionRecord, Snapshot};
use chrono::NaiveDate;
use uuid::Uuid;

/// True iff a record exists for the tracker on that day.
pub fn is_completed(records: &[CompletionRecord], tracker_id: Uuid, date: NaiveDate) -> bool {
    records.iter().any(|record| record.tracker_id == tracker_id && record.date == date)
}

/// Total completions for a tracker across all days.
pub fn completion_count(records: &[CompletionRecord], tracker_id: Uuid) -> usize {
    records.iter().filter(|record| record.tracker_id == tracker_id).count()
}

/// Returns the record set after toggling a tracker's completion on a day.
///
/// If the tracker is already completed on that day, every matching record is
/// removed (a duplicate pair would violate the uniqueness invariant, so the
/// removal also restores it); otherwise exactly one record is inserted.
/// Toggling twice returns the original set.
///
/// Two inputs leave the records unchanged: a date after `today` and a tracker
/// id not present in the snapshot. The snapshot may be one refresh behind the
/// store, so an unknown id is not an error.
pub fn toggle(snapshot: &Snapshot, tracker_id: Uuid, date: NaiveDate, today: NaiveDate) -> Vec<CompletionRecord> {
    let mut records = snapshot.records.clone();

    if date > today || snapshot.tracker(tracker_id).is_none() {
        return records;
    }

    if is_completed(&records, tracker_id, date) {
        records.retain(|record| !(record.tracker_id == tracker_id && record.date == date));
    } else {
        records.push(CompletionRecord { tracker_id, date });
    }
    records
}
