//! Month arithmetic shared by the period resolver, the obligation evaluator
//! and the duration calculator.
//!
//! Month lengths are never hard-coded: the last day of a month is found as
//! "day 0 of the next month", i.e. the day before the first of the next one.

use chrono::{Datelike, Days, NaiveDate};

/// First day of the month following `year`/`month`.
pub fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month >= 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
}

/// Last calendar day of `year`/`month`.
///
/// Returns `None` only for months chrono cannot represent.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    first_of_next_month(year, month)?.pred_opt()
}

/// Number of days in `year`/`month`, leap Februaries included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match last_day_of_month(year, month) {
        Some(last) => last.day(),
        // Only December of chrono's last representable year lands here.
        None => 31,
    }
}

/// The year/month immediately before `year`/`month`.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Builds a date in `year`/`month`, clamping `day` to the month's length.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `date - days`, saturating at the earliest representable date.
pub fn saturating_sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

/// `date + days`, saturating at the latest representable date.
pub fn saturating_add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
