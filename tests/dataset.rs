#[cfg(test)]
mod tests {
    use rekap::libs::dataset::Dataset;
    use rekap::libs::obligation::YearMonth;
    use rekap::libs::record::Attendance;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DatasetTestContext {
        temp_dir: TempDir,
    }

    impl DatasetTestContext {
        fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }
    }

    impl TestContext for DatasetTestContext {
        fn setup() -> Self {
            DatasetTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    const DATASET: &str = r#"{
        "subjects": [
            { "id": "s1", "name": "Ayu", "secondary_id": "1001", "group": "7A" },
            { "id": "s2", "name": "Bima" }
        ],
        "attendance": [
            { "subject_id": "s1", "date": "2024-02-05", "category": "present" },
            { "subject_id": "s1", "date": "2024-02-06", "category": "alpha" }
        ],
        "obligations": [{ "id": "spp", "name": "Tuition", "due_day": 10, "active_from": "2024-01-01" }],
        "fulfillments": [{ "subject_id": "s1", "obligation_id": "spp", "period": "2024-02", "fulfilled_on": "2024-02-08", "amount": 150000 }],
        "permits": [{ "subject_id": "s2", "starts_at": "2024-02-12T08:00:00", "ends_at": "2024-02-12T12:00:00", "reason": "dentist" }]
    }"#;

    #[test_context(DatasetTestContext)]
    #[test]
    fn test_load_full_dataset(ctx: &mut DatasetTestContext) {
        let path = ctx.write("data.json", DATASET);
        let dataset = Dataset::load(&path).unwrap();

        assert_eq!(dataset.subjects.len(), 2);
        assert_eq!(dataset.attendance[1].category, Attendance::Absent);
        assert_eq!(dataset.fulfillments[0].period, YearMonth::new(2024, 2).unwrap());
        assert!(dataset.fulfillments[0].satisfied);
        assert_eq!(dataset.permits[0].reason.as_deref(), Some("dentist"));

        assert_eq!(dataset.subject("s1").map(|subject| subject.name.as_str()), Some("Ayu"));
        assert!(dataset.subject("s9").is_none());
        assert_eq!(dataset.obligation("spp").map(|obligation| obligation.due_day()), Some(10));
        assert_eq!(
            dataset.loaded_message().to_string(),
            "Loaded 2 students, 2 attendance records, 1 bills, 1 payments, 1 permits"
        );
    }

    #[test_context(DatasetTestContext)]
    #[test]
    fn test_missing_sections_default_to_empty(ctx: &mut DatasetTestContext) {
        let path = ctx.write("subjects.json", r#"{ "subjects": [{ "id": "s1", "name": "Ayu" }] }"#);
        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.subjects.len(), 1);
        assert!(dataset.attendance.is_empty());
        assert!(dataset.obligations.is_empty());
        assert!(dataset.permits.is_empty());
    }

    #[test_context(DatasetTestContext)]
    #[test]
    fn test_invalid_obligation_fails_load(ctx: &mut DatasetTestContext) {
        let path = ctx.write("bad.json", r#"{ "obligations": [{ "id": "spp", "due_day": 0 }] }"#);
        let error = Dataset::load(&path).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse dataset"));
    }

    #[test_context(DatasetTestContext)]
    #[test]
    fn test_loose_category_codes_load(ctx: &mut DatasetTestContext) {
        let path = ctx.write(
            "codes.json",
            r#"{ "attendance": [
                { "subject_id": "s1", "date": "2024-02-05", "category": "H" },
                { "subject_id": "s1", "date": "2024-02-06", "category": "Sakit" },
                { "subject_id": "s1", "date": "2024-02-07", "category": "PRESENT" },
                { "subject_id": "s1", "date": "2024-02-08", "category": "i" },
                { "subject_id": "s1", "date": "2024-02-09", "category": "Alpha" }
            ] }"#,
        );
        let dataset = Dataset::load(&path).unwrap();
        let categories: Vec<Attendance> = dataset.attendance.iter().map(|record| record.category).collect();
        assert_eq!(
            categories,
            vec![Attendance::Present, Attendance::Sick, Attendance::Present, Attendance::Excused, Attendance::Absent]
        );
    }

    #[test_context(DatasetTestContext)]
    #[test]
    fn test_unknown_category_fails_load(ctx: &mut DatasetTestContext) {
        let path = ctx.write("bad.json", r#"{ "attendance": [{ "subject_id": "s1", "date": "2024-02-05", "category": "late" }] }"#);
        assert!(Dataset::load(&path).is_err());
    }

    #[test_context(DatasetTestContext)]
    #[test]
    fn test_missing_file(ctx: &mut DatasetTestContext) {
        let error = Dataset::load(&ctx.temp_dir.path().join("absent.json")).unwrap_err();
        assert!(error.to_string().starts_with("Failed to read dataset"));
    }
}
