#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habt::db;
    use habt::db::records::Records;
    use habt::db::trackers::Trackers;
    use habt::libs::export::{ExportData, ExportFormat, Exporter};
    use habt::libs::tracker::Tracker;
    use habt::libs::weekday::Weekday;
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { temp_dir }
        }
    }

    fn seed_tracker() -> Tracker {
        let tracker = Tracker::new(
            "Morning run",
            "🏃",
            "#2FD058",
            Weekday::ALL.iter().copied().collect::<BTreeSet<_>>(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        Trackers::new().unwrap().insert(&tracker, "Sport").unwrap();
        Records::new()
            .unwrap()
            .toggle(tracker.id, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        tracker
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_trackers_csv(ctx: &mut ExportTestContext) {
        seed_tracker();
        let snapshot = db::load_snapshot().unwrap();

        let output_path = ctx.temp_dir.path().join("trackers.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::Trackers, &snapshot).unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("Morning run"));
        assert!(content.contains("Sport"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_records_json(ctx: &mut ExportTestContext) {
        let tracker = seed_tracker();
        let snapshot = db::load_snapshot().unwrap();

        let output_path = ctx.temp_dir.path().join("records.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));
        exporter.export(ExportData::Records, &snapshot).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["tracker_id"], tracker.id.to_string());
        assert_eq!(parsed[0]["date"], "2024-01-01");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_statistics_excel(ctx: &mut ExportTestContext) {
        seed_tracker();
        let snapshot = db::load_snapshot().unwrap();

        let output_path = ctx.temp_dir.path().join("statistics.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));
        exporter.export(ExportData::Statistics, &snapshot).unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_store_writes_nothing(ctx: &mut ExportTestContext) {
        let snapshot = db::load_snapshot().unwrap();

        let output_path = ctx.temp_dir.path().join("empty.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::Trackers, &snapshot).unwrap();

        assert!(!output_path.exists());
    }
}
