#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habt::db::records::Records;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use uuid::Uuid;

    struct RecordTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for RecordTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_toggle_round_trip(_ctx: &mut RecordTestContext) {
        let mut records = Records::new().unwrap();
        let id = Uuid::new_v4();

        assert!(records.toggle(id, date(1)).unwrap());
        assert_eq!(records.fetch_all().unwrap().len(), 1);

        assert!(!records.toggle(id, date(1)).unwrap());
        assert!(records.fetch_all().unwrap().is_empty());
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_one_record_per_tracker_and_day(_ctx: &mut RecordTestContext) {
        let mut records = Records::new().unwrap();
        let id = Uuid::new_v4();

        records.toggle(id, date(1)).unwrap();
        records.toggle(id, date(2)).unwrap();
        // Different trackers on the same day are independent.
        records.toggle(Uuid::new_v4(), date(1)).unwrap();

        let all = records.fetch_all().unwrap();
        assert_eq!(all.len(), 3);
        let matching = all.iter().filter(|r| r.tracker_id == id && r.date == date(1)).count();
        assert_eq!(matching, 1);
    }

    #[test_context(RecordTestContext)]
    #[test]
    fn test_fetch_all_is_date_ordered(_ctx: &mut RecordTestContext) {
        let mut records = Records::new().unwrap();
        let id = Uuid::new_v4();

        records.toggle(id, date(9)).unwrap();
        records.toggle(id, date(2)).unwrap();
        records.toggle(id, date(5)).unwrap();

        let dates: Vec<NaiveDate> = records.fetch_all().unwrap().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2), date(5), date(9)]);
    }
}
