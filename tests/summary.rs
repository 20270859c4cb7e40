#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rekap::libs::period::{resolve_period, PeriodKind, PeriodWindow};
    use rekap::libs::record::{Attendance, EventRecord, Subject};
    use rekap::libs::summary::{aggregate, aggregate_with, filter_group, percentage, DuplicatePolicy, SummaryTotals};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn february() -> PeriodWindow {
        resolve_period(PeriodKind::Monthly, date(2024, 2, 10))
    }

    fn subjects() -> Vec<Subject> {
        vec![
            Subject::new("s1", "Ayu").with_secondary_id("1001").with_group("7A"),
            Subject::new("s2", "Bima").with_group("7B"),
        ]
    }

    fn records() -> Vec<EventRecord<Attendance>> {
        vec![
            EventRecord::new("s1", date(2024, 2, 5), Attendance::Present),
            EventRecord::new("s1", date(2024, 2, 6), Attendance::Present),
            EventRecord::new("s1", date(2024, 2, 7), Attendance::Sick),
            EventRecord::new("s1", date(2024, 3, 1), Attendance::Absent),
        ]
    }

    #[test]
    fn test_monthly_recap_counts_and_percentage() {
        let summaries = aggregate(&subjects(), &records(), &february(), Attendance::Present);
        assert_eq!(summaries.len(), 2);

        let ayu = &summaries[0];
        assert_eq!(ayu.subject_id, "s1");
        assert_eq!(ayu.count(Attendance::Present), 2);
        assert_eq!(ayu.count(Attendance::Sick), 1);
        assert_eq!(ayu.count(Attendance::Excused), 0);
        assert_eq!(ayu.count(Attendance::Absent), 0);
        assert_eq!(ayu.total, 3);
        assert_eq!(ayu.percentage, 66.7);
        assert_eq!(ayu.secondary_id.as_deref(), Some("1001"));
        assert_eq!(ayu.group.as_deref(), Some("7A"));
    }

    #[test]
    fn test_subject_without_records_gets_zero_summary() {
        let summaries = aggregate(&subjects(), &records(), &february(), Attendance::Present);
        let bima = &summaries[1];
        assert_eq!(bima.subject_id, "s2");
        assert_eq!(bima.total, 0);
        assert_eq!(bima.percentage, 0.0);
        assert_eq!(bima.counts.len(), 4);
        assert!(bima.counts.values().all(|count| *count == 0));
    }

    #[test]
    fn test_counts_sum_to_total() {
        let mut records = records();
        records.push(EventRecord::new("s2", date(2024, 2, 12), Attendance::Excused));
        records.push(EventRecord::new("s2", date(2024, 2, 13), Attendance::Absent));
        for summary in aggregate(&subjects(), &records, &february(), Attendance::Present) {
            assert_eq!(summary.counts.values().sum::<usize>(), summary.total);
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let first = aggregate(&subjects(), &records(), &february(), Attendance::Present);
        let second = aggregate(&subjects(), &records(), &february(), Attendance::Present);
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_outside_window_and_unknown_subjects_are_ignored() {
        let mut records = records();
        records.push(EventRecord::new("ghost", date(2024, 2, 5), Attendance::Present));
        records.push(EventRecord::new("s2", date(2024, 1, 31), Attendance::Present));
        let summaries = aggregate(&subjects(), &records, &february(), Attendance::Present);
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|summary| summary.subject_id != "ghost"));
        assert_eq!(summaries[1].total, 0);
    }

    #[test]
    fn test_window_edges_are_included() {
        let records = vec![
            EventRecord::new("s2", date(2024, 2, 1), Attendance::Present),
            EventRecord::new("s2", date(2024, 2, 29), Attendance::Present),
        ];
        let summaries = aggregate(&subjects(), &records, &february(), Attendance::Present);
        assert_eq!(summaries[1].total, 2);
        assert_eq!(summaries[1].percentage, 100.0);
    }

    #[test]
    fn test_duplicate_records_count_each_by_default() {
        let records = vec![
            EventRecord::new("s1", date(2024, 2, 5), Attendance::Absent),
            EventRecord::new("s1", date(2024, 2, 5), Attendance::Present),
        ];
        let summaries = aggregate(&subjects(), &records, &february(), Attendance::Present);
        assert_eq!(summaries[0].total, 2);
        assert_eq!(summaries[0].percentage, 50.0);
    }

    #[test]
    fn test_duplicate_records_last_write_wins() {
        let records = vec![
            EventRecord::new("s1", date(2024, 2, 5), Attendance::Absent),
            EventRecord::new("s1", date(2024, 2, 5), Attendance::Present),
            EventRecord::new("s1", date(2024, 2, 6), Attendance::Sick),
        ];
        let summaries = aggregate_with(&subjects(), &records, &february(), Attendance::Present, DuplicatePolicy::LastWriteWins);
        let ayu = &summaries[0];
        assert_eq!(ayu.total, 2);
        assert_eq!(ayu.count(Attendance::Present), 1);
        assert_eq!(ayu.count(Attendance::Absent), 0);
        assert_eq!(ayu.count(Attendance::Sick), 1);
    }

    #[test]
    fn test_summaries_sorted_by_name_case_insensitively() {
        let subjects = vec![Subject::new("s3", "citra"), Subject::new("s1", "Bima"), Subject::new("s2", "ayu")];
        let summaries = aggregate(&subjects, &[], &february(), Attendance::Present);
        let names: Vec<&str> = summaries.iter().map(|summary| summary.name.as_str()).collect();
        assert_eq!(names, vec!["ayu", "Bima", "citra"]);
    }

    #[test]
    fn test_duplicated_subject_ids_produce_one_summary() {
        let subjects = vec![Subject::new("s1", "Ayu"), Subject::new("s1", "Ayu Copy")];
        let summaries = aggregate(&subjects, &records(), &february(), Attendance::Present);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Ayu");
    }

    #[test]
    fn test_other_positive_category() {
        let summaries = aggregate(&subjects(), &records(), &february(), Attendance::Sick);
        assert_eq!(summaries[0].percentage, 33.3);
    }

    #[test]
    fn test_filter_group_ignores_case() {
        let subjects = subjects();
        let filtered = filter_group(&subjects, Some("7a"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "s1");
        assert_eq!(filter_group(&subjects, None).len(), 2);
        assert!(filter_group(&subjects, Some("9C")).is_empty());
    }

    #[test]
    fn test_totals_over_recap() {
        let mut records = records();
        records.push(EventRecord::new("s2", date(2024, 2, 12), Attendance::Present));
        let summaries = aggregate(&subjects(), &records, &february(), Attendance::Present);
        let totals = summaries.totals(Attendance::Present);
        assert_eq!(totals.subjects, 2);
        assert_eq!(totals.total, 4);
        assert_eq!(totals.counts[&Attendance::Present], 3);
        assert_eq!(totals.counts[&Attendance::Sick], 1);
        assert_eq!(totals.counts[&Attendance::Absent], 0);
        assert_eq!(totals.percentage, 75.0);
    }

    #[test]
    fn test_totals_of_empty_recap() {
        let summaries = aggregate::<Attendance>(&[], &[], &february(), Attendance::Present);
        let totals = summaries.totals(Attendance::Present);
        assert_eq!(totals.subjects, 0);
        assert_eq!(totals.total, 0);
        assert_eq!(totals.percentage, 0.0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 5), 100.0);
        assert_eq!(percentage(1, 8), 12.5);
    }

    #[test]
    fn test_percentage_ties_round_up() {
        assert_eq!(percentage(23, 80), 28.8);
        assert_eq!(percentage(41, 80), 51.3);
        assert_eq!(percentage(51, 80), 63.8);
        assert_eq!(percentage(1, 400), 0.3);
    }

    #[test]
    fn test_percentage_matches_integer_rounding() {
        for total in 1..=400usize {
            for part in 0..=total {
                // Tenths of a percent, half up: floor((1000 * part / total) + 1/2).
                let expected = ((2000 * part + total) / (2 * total)) as f64 / 10.0;
                assert_eq!(percentage(part, total), expected, "{}/{}", part, total);

                let exact_tenths_x2 = 2000 * part;
                let rounded = (percentage(part, total) * 10.0).round() as usize;
                assert!(rounded * 2 * total + total > exact_tenths_x2, "{}/{} rounded down too far", part, total);
                assert!(rounded * 2 * total <= exact_tenths_x2 + total, "{}/{} rounded up too far", part, total);
            }
        }
    }
}
