#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use habt::db::categories::Categories;
    use habt::db::trackers::Trackers;
    use habt::libs::tracker::Tracker;
    use habt::libs::weekday::Weekday;
    use std::collections::BTreeSet;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CategoryTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CategoryTestContext { _temp_dir: temp_dir }
        }
    }

    fn sample_tracker(name: &str) -> Tracker {
        Tracker::new(
            name,
            "",
            "#34C759",
            [Weekday::Monday].into_iter().collect::<BTreeSet<_>>(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_create_and_list_categories(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();

        let (id, created) = categories.create("Sport").unwrap();
        assert!(created);

        let names = categories.fetch_names().unwrap();
        assert_eq!(names, vec!["Sport".to_string()]);
        assert!(id > 0);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_duplicate_name_resolves_to_existing_category(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();

        let (first_id, _) = categories.create("Sport").unwrap();
        // Same name in a different case is the same category.
        let (second_id, created) = categories.create("SPORT").unwrap();

        assert_eq!(first_id, second_id);
        assert!(!created);
        assert_eq!(categories.fetch_names().unwrap().len(), 1);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_reassigns_members_to_default(_ctx: &mut CategoryTestContext) {
        let mut trackers = Trackers::new().unwrap();
        let tracker = sample_tracker("Pushups");
        trackers.insert(&tracker, "Sport").unwrap();

        let mut categories = Categories::new().unwrap();
        let reassigned = categories.delete("Sport", "General").unwrap();
        assert_eq!(reassigned, 1);

        let all = trackers.fetch_all().unwrap();
        let general = all.iter().find(|c| c.name == "General").unwrap();
        assert_eq!(general.trackers.len(), 1);
        assert!(all.iter().all(|c| c.name != "Sport"));
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_default_category_with_members_is_refused(_ctx: &mut CategoryTestContext) {
        let mut trackers = Trackers::new().unwrap();
        trackers.insert(&sample_tracker("Pushups"), "General").unwrap();

        let mut categories = Categories::new().unwrap();
        assert!(categories.delete("General", "General").is_err());

        // Without members the default category deletes like any other.
        let mut empty_default = Categories::new().unwrap();
        empty_default.create("Empty").unwrap();
        assert_eq!(empty_default.delete("Empty", "Empty").unwrap(), 0);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_unknown_category_fails(_ctx: &mut CategoryTestContext) {
        let mut categories = Categories::new().unwrap();
        assert!(categories.delete("Nowhere", "General").is_err());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_member_count(_ctx: &mut CategoryTestContext) {
        let mut trackers = Trackers::new().unwrap();
        trackers.insert(&sample_tracker("Pushups"), "Sport").unwrap();
        trackers.insert(&sample_tracker("Situps"), "Sport").unwrap();

        let mut categories = Categories::new().unwrap();
        assert_eq!(categories.member_count("sport").unwrap(), 2);
        assert_eq!(categories.member_count("Nowhere").unwrap(), 0);
    }
}
