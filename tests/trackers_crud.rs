#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habt::db;
    use habt::db::records::Records;
    use habt::db::trackers::Trackers;
    use habt::libs::tracker::Tracker;
    use habt::libs::weekday::Weekday;
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TrackerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrackerTestContext { _temp_dir: temp_dir }
        }
    }

    fn sample_tracker(name: &str, days: &[Weekday]) -> Tracker {
        Tracker::new(
            name,
            "💪",
            "#FF3B30",
            days.iter().copied().collect::<BTreeSet<_>>(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_insert_and_fetch_tracker(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let tracker = sample_tracker("Pushups", &[Weekday::Monday, Weekday::Friday]);

        trackers.insert(&tracker, "Sport").unwrap();

        let fetched = trackers.fetch_by_id(tracker.id).unwrap().unwrap();
        assert_eq!(fetched, tracker);

        let categories = trackers.fetch_all().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Sport");
        assert_eq!(categories[0].trackers, vec![tracker]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_update_preserves_id_and_created_at(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let tracker = sample_tracker("Pushups", &[Weekday::Monday]);
        trackers.insert(&tracker, "Sport").unwrap();

        let edited = Tracker {
            name: "Situps".to_string(),
            emoji: "🤸".to_string(),
            color: "#5856D6".to_string(),
            schedule: [Weekday::Tuesday, Weekday::Thursday].into_iter().collect(),
            ..tracker.clone()
        };
        trackers.update(&edited, Some("Evening")).unwrap();

        let fetched = trackers.fetch_by_id(tracker.id).unwrap().unwrap();
        assert_eq!(fetched.id, tracker.id);
        assert_eq!(fetched.created_at, tracker.created_at);
        assert_eq!(fetched.name, "Situps");
        assert_eq!(fetched.schedule, edited.schedule);

        // The tracker moved to the new category.
        let categories = trackers.fetch_all().unwrap();
        let evening = categories.iter().find(|c| c.name == "Evening").unwrap();
        assert_eq!(evening.trackers.len(), 1);
        let sport = categories.iter().find(|c| c.name == "Sport").unwrap();
        assert!(sport.trackers.is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_update_unknown_tracker_fails(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let tracker = sample_tracker("Pushups", &[Weekday::Monday]);

        assert!(trackers.update(&tracker, None).is_err());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_cascades_completion_records(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let keep = sample_tracker("Pushups", &[Weekday::Monday]);
        let gone = sample_tracker("Situps", &[Weekday::Monday]);
        trackers.insert(&keep, "Sport").unwrap();
        trackers.insert(&gone, "Sport").unwrap();

        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        records.toggle(keep.id, date).unwrap();
        records.toggle(gone.id, date).unwrap();

        trackers.delete(gone.id).unwrap();

        let snapshot = db::load_snapshot().unwrap();
        assert!(snapshot.tracker(gone.id).is_none());
        assert!(snapshot.records.iter().all(|record| record.tracker_id != gone.id));
        assert!(snapshot.records.iter().any(|record| record.tracker_id == keep.id));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_snapshot_round_trip(_ctx: &mut TrackerTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let first = sample_tracker("Pushups", &[Weekday::Monday]);
        let second = sample_tracker("Read", &Weekday::ALL);
        trackers.insert(&first, "Sport").unwrap();
        trackers.insert(&second, "Leisure").unwrap();

        let snapshot = db::load_snapshot().unwrap();
        assert_eq!(snapshot.trackers().count(), 2);
        assert_eq!(snapshot.tracker(second.id).unwrap().schedule.len(), 7);
    }
}
