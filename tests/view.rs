#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rekap::libs::obligation::{statement, ObligationDefinition, YearMonth};
    use rekap::libs::period::{resolve_period, PeriodKind};
    use rekap::libs::permit::LeavePermit;
    use rekap::libs::record::{Attendance, EventRecord, Subject};
    use rekap::libs::summary::{aggregate, SummaryTotals};
    use rekap::libs::view::View;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_recap_table() {
        let window = resolve_period(PeriodKind::Monthly, date(2024, 2, 10));
        let subjects = vec![Subject::new("s1", "Ayu").with_group("7A")];
        let records = vec![
            EventRecord::new("s1", date(2024, 2, 5), Attendance::Present),
            EventRecord::new("s1", date(2024, 2, 6), Attendance::Excused),
        ];
        let summaries = aggregate(&subjects, &records, &window, Attendance::Present);
        let totals = summaries.totals(Attendance::Present);

        let table = View::recap_table(&summaries, &totals);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("PRESENT"));
        assert!(rendered.contains("EXCUSED"));
        assert!(rendered.contains("Ayu"));
        assert!(rendered.contains("7A"));
        assert!(rendered.contains("50.0%"));
        assert!(rendered.contains("TOTAL"));
    }

    #[test]
    fn test_statement_table() {
        let obligation = ObligationDefinition::new("spp", "Tuition", 10, None, None).unwrap().with_amount(150_000);
        let from = YearMonth::new(2024, 1).unwrap();
        let to = YearMonth::new(2024, 2).unwrap();
        let lines = statement(&obligation, "s1", &[], from, to, date(2024, 2, 5));

        let rendered = View::statement_table(&lines, ", ").to_string();
        assert!(rendered.contains("2024-01"));
        assert!(rendered.contains("Overdue"));
        assert!(rendered.contains("Pending"));
        assert!(rendered.contains("150.000"));
        assert!(rendered.contains("26 days"));
    }

    #[test]
    fn test_permits_table() {
        let starts = date(2024, 2, 12).and_hms_opt(8, 0, 0).unwrap();
        let ends = date(2024, 2, 12).and_hms_opt(12, 0, 0).unwrap();
        let permit = LeavePermit::new("s1", starts, ends).unwrap().with_reason("dentist");
        let subjects = vec![Subject::new("s1", "Ayu")];
        let now = date(2024, 2, 12).and_hms_opt(10, 15, 0).unwrap();

        let rendered = View::permits_table(&[&permit], &subjects, now, ", ").to_string();
        assert!(rendered.contains("Ayu"));
        assert!(rendered.contains("4 hours"));
        assert!(rendered.contains("Ongoing"));
        assert!(rendered.contains("1 hour, 45 minutes"));
        assert!(rendered.contains("dentist"));
    }
}
