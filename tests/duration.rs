#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rekap::libs::duration::{clock_duration, duration, duration_minutes, DurationBreakdown};
    use rekap::libs::error::Error;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn calendar(years: i64, months: i64, days: i64) -> DurationBreakdown {
        DurationBreakdown::Calendar { years, months, days }
    }

    #[test]
    fn test_same_instant_is_zero() {
        let instant = at(2024, 3, 5, 9, 30);
        let result = duration(instant, instant).unwrap();
        assert_eq!(result, calendar(0, 0, 0));
        assert!(result.is_zero());
        assert_eq!(result.to_string(), "no time elapsed");
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        let result = duration(at(2024, 3, 5, 0, 0), at(2023, 1, 20, 0, 0));
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
        assert!(clock_duration(at(2024, 3, 5, 10, 0), at(2024, 3, 5, 9, 0)).is_err());
        assert!(duration_minutes(at(2024, 3, 5, 10, 0), at(2024, 3, 5, 9, 0)).is_err());
    }

    #[test]
    fn test_day_borrow_uses_month_before_end() {
        // February 2024 has 29 days: 5 - 20 + 29 = 14.
        let result = duration(at(2023, 1, 20, 0, 0), at(2024, 3, 5, 0, 0)).unwrap();
        assert_eq!(result, calendar(1, 1, 14));
    }

    #[test]
    fn test_partial_last_day_is_not_counted() {
        let result = duration(at(2023, 1, 20, 8, 0), at(2024, 3, 5, 7, 0)).unwrap();
        assert_eq!(result, calendar(1, 1, 13));
    }

    #[test]
    fn test_day_borrow_in_common_year() {
        let result = duration(at(2022, 1, 20, 0, 0), at(2023, 3, 5, 0, 0)).unwrap();
        assert_eq!(result, calendar(1, 1, 13));
    }

    #[test]
    fn test_repeated_borrow_end_of_january_to_march() {
        let result = duration(at(2023, 1, 31, 0, 0), at(2023, 3, 1, 0, 0)).unwrap();
        assert_eq!(result, calendar(0, 0, 29));
    }

    #[test]
    fn test_month_borrow_across_year() {
        let result = duration(at(2023, 11, 15, 0, 0), at(2024, 2, 15, 0, 0)).unwrap();
        assert_eq!(result, calendar(0, 3, 0));
    }

    #[test]
    fn test_exact_years() {
        let result = duration(at(2020, 7, 17, 0, 0), at(2024, 7, 17, 0, 0)).unwrap();
        assert_eq!(result, calendar(4, 0, 0));
    }

    #[test]
    fn test_components_are_never_negative() {
        let from = at(2023, 5, 31, 12, 0);
        let mut to = from;
        for _ in 0..500 {
            to += chrono::Duration::hours(17);
            if let DurationBreakdown::Calendar { years, months, days } = duration(from, to).unwrap() {
                assert!(years >= 0 && (0..12).contains(&months) && days >= 0, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_clock_duration_splits_minutes() {
        let result = clock_duration(at(2024, 3, 5, 8, 0), at(2024, 3, 7, 11, 45)).unwrap();
        assert_eq!(result, DurationBreakdown::Clock { days: 2, hours: 3, minutes: 45 });
        assert_eq!(duration_minutes(at(2024, 3, 5, 8, 0), at(2024, 3, 5, 9, 30)).unwrap(), 90);
    }

    #[test]
    fn test_clock_duration_ignores_seconds() {
        let from = at(2024, 3, 5, 8, 0);
        let to = from + chrono::Duration::seconds(119);
        assert_eq!(clock_duration(from, to).unwrap(), DurationBreakdown::Clock { days: 0, hours: 0, minutes: 1 });
    }

    #[test]
    fn test_breakdown_serializes_with_form_tag() {
        let json = serde_json::to_value(calendar(1, 2, 3)).unwrap();
        assert_eq!(json["form"], "calendar");
        assert_eq!(json["years"], 1);
    }
}
