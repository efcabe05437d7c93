#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habt::libs::ledger;
    use habt::libs::tracker::{CompletionRecord, Snapshot, Tracker, TrackerCategory};
    use habt::libs::weekday::Weekday;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn snapshot_with_tracker(records: Vec<CompletionRecord>) -> (Snapshot, Uuid) {
        let tracker = Tracker::new(
            "Read a book",
            "📖",
            "#007AFF",
            Weekday::ALL.iter().copied().collect::<BTreeSet<_>>(),
            date(1),
        );
        let id = tracker.id;
        let snapshot = Snapshot {
            categories: vec![TrackerCategory {
                name: "Leisure".to_string(),
                trackers: vec![tracker],
            }],
            records,
        };
        (snapshot, id)
    }

    #[test]
    fn test_toggle_inserts_single_record() {
        let (snapshot, id) = snapshot_with_tracker(vec![]);

        let records = ledger::toggle(&snapshot, id, date(5), date(10));
        assert_eq!(records, vec![CompletionRecord { tracker_id: id, date: date(5) }]);
        assert!(ledger::is_completed(&records, id, date(5)));
        assert!(!ledger::is_completed(&records, id, date(6)));
    }

    #[test]
    fn test_double_toggle_restores_original_records() {
        let (snapshot, id) = snapshot_with_tracker(vec![]);

        let once = ledger::toggle(&snapshot, id, date(5), date(10));
        let again = Snapshot {
            records: once,
            ..snapshot.clone()
        };
        let twice = ledger::toggle(&again, id, date(5), date(10));

        assert_eq!(twice, snapshot.records);
    }

    #[test]
    fn test_toggle_removes_all_duplicates_for_day() {
        let other = Uuid::new_v4();
        let (mut snapshot, id) = snapshot_with_tracker(vec![]);
        // Two records for the same day violate the uniqueness invariant;
        // un-completing must remove both and leave other data alone.
        snapshot.records = vec![
            CompletionRecord { tracker_id: id, date: date(5) },
            CompletionRecord { tracker_id: id, date: date(5) },
            CompletionRecord { tracker_id: other, date: date(5) },
            CompletionRecord { tracker_id: id, date: date(6) },
        ];

        let records = ledger::toggle(&snapshot, id, date(5), date(10));
        assert!(!ledger::is_completed(&records, id, date(5)));
        assert!(records.contains(&CompletionRecord { tracker_id: other, date: date(5) }));
        assert!(records.contains(&CompletionRecord { tracker_id: id, date: date(6) }));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_toggle_rejects_future_dates() {
        let (snapshot, id) = snapshot_with_tracker(vec![]);

        let records = ledger::toggle(&snapshot, id, date(11), date(10));
        assert!(records.is_empty());

        // The boundary day itself is allowed.
        let records = ledger::toggle(&snapshot, id, date(10), date(10));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_toggle_unknown_tracker_is_noop() {
        let (snapshot, id) = snapshot_with_tracker(vec![CompletionRecord {
            tracker_id: Uuid::new_v4(),
            date: date(2),
        }]);

        let records = ledger::toggle(&snapshot, Uuid::new_v4(), date(5), date(10));
        assert_eq!(records, snapshot.records);

        // The known tracker still toggles normally.
        let records = ledger::toggle(&snapshot, id, date(5), date(10));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_uniqueness_holds_after_toggle_sequences() {
        let (mut snapshot, id) = snapshot_with_tracker(vec![]);

        for day in [3u32, 4, 3, 5, 4, 4, 5, 3] {
            snapshot.records = ledger::toggle(&snapshot, id, date(day), date(10));
            for record in &snapshot.records {
                let matches = snapshot
                    .records
                    .iter()
                    .filter(|r| r.tracker_id == record.tracker_id && r.date == record.date)
                    .count();
                assert_eq!(matches, 1);
            }
        }
    }

    #[test]
    fn test_completion_count_ignores_dates() {
        let other = Uuid::new_v4();
        let (_, id) = snapshot_with_tracker(vec![]);
        let records = vec![
            CompletionRecord { tracker_id: id, date: date(1) },
            CompletionRecord { tracker_id: id, date: date(2) },
            CompletionRecord { tracker_id: id, date: date(9) },
            CompletionRecord { tracker_id: other, date: date(2) },
        ];

        assert_eq!(ledger::completion_count(&records, id), 3);
        assert_eq!(ledger::completion_count(&records, other), 1);
        assert_eq!(ledger::completion_count(&records, Uuid::new_v4()), 0);
    }
}
