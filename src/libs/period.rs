//! Reporting period resolution.
//!
//! Turns a period kind selected on a recap screen and a reference date into
//! an inclusive calendar window with a display label. Weeks start on Monday.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rekap::libs::period::{resolve_period, PeriodKind};
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
//! let window = resolve_period(PeriodKind::Monthly, reference);
//! assert_eq!(window.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
//! assert_eq!(window.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! assert_eq!(window.label, "Monthly: February 2024");
//! ```

use crate::libs::calendar::{last_day_of_month, saturating_add_days, saturating_sub_days};
use crate::libs::messages::Message;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity requested for a report.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A resolved reporting interval, inclusive at both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub kind: PeriodKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl PeriodWindow {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Day-resolution membership test; time-of-day never matters.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }
}

/// Last representable instant of a day.
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN)
}

/// Resolves `kind` around `reference` into an inclusive window.
///
/// Never fails. At the very edges of chrono's calendar a bound that cannot
/// be represented falls back to `reference` itself.
pub fn resolve_period(kind: PeriodKind, reference: NaiveDate) -> PeriodWindow {
    let (start, end) = match kind {
        PeriodKind::Daily => (reference, reference),
        PeriodKind::Weekly => {
            // Monday = 1 .. Sunday = 7, so Sunday steps back six days.
            let offset = u64::from(reference.weekday().number_from_monday() - 1);
            let monday = saturating_sub_days(reference, offset);
            (monday, saturating_add_days(monday, 6))
        }
        PeriodKind::Monthly => {
            let first = reference.with_day(1).unwrap_or(reference);
            let last = last_day_of_month(reference.year(), reference.month()).unwrap_or(reference);
            (first, last)
        }
        PeriodKind::Yearly => {
            let first = NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference);
            let last = NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(reference);
            (first, last)
        }
    };

    let label = period_label(kind, start, end);
    tracing::debug!(%kind, %reference, %start, %end, "resolved period window");

    PeriodWindow {
        kind,
        start: start.and_time(NaiveTime::MIN),
        end: end.and_time(end_of_day()),
        label,
    }
}

fn period_label(kind: PeriodKind, start: NaiveDate, end: NaiveDate) -> String {
    let message = match kind {
        PeriodKind::Daily => Message::PeriodDaily(start.format("%A, %-d %B %Y").to_string()),
        PeriodKind::Weekly => Message::PeriodWeekly(start.format("%d %b %Y").to_string(), end.format("%d %b %Y").to_string()),
        PeriodKind::Monthly => Message::PeriodMonthly(start.format("%B %Y").to_string()),
        PeriodKind::Yearly => Message::PeriodYearly(start.year()),
    };
    message.to_string()
}
