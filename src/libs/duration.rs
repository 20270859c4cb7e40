//! Elapsed-time breakdowns between two points in time.
//!
//! Two shapes are produced from the same pair of instants:
//!
//! - **Calendar** (`years, months, days`), used for tenure and age. Chrono
//!   has no year/month/day difference, so the borrowing rules are applied by
//!   hand: a negative day count borrows the length of the month preceding
//!   the end date's month, a negative month count borrows a year.
//! - **Clock** (`days, hours, minutes`), used for short spans such as leave
//!   permits. Whole elapsed minutes are split by integer division only.
//!
//! Both fail with [`Error::InvalidRange`] when the end precedes the start.
//! Rendering lives in [`crate::libs::formatter`].

use crate::libs::calendar::{days_in_month, previous_month};
use crate::libs::error::{Error, Result};
use crate::libs::formatter::render_breakdown;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Default separator between rendered units.
pub const DEFAULT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum DurationBreakdown {
    Calendar { years: i64, months: i64, days: i64 },
    Clock { days: i64, hours: i64, minutes: i64 },
}

impl DurationBreakdown {
    pub fn is_zero(&self) -> bool {
        match *self {
            DurationBreakdown::Calendar { years, months, days } => years == 0 && months == 0 && days == 0,
            DurationBreakdown::Clock { days, hours, minutes } => days == 0 && hours == 0 && minutes == 0,
        }
    }

    pub fn render(&self, separator: &str) -> String {
        render_breakdown(self, separator)
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_SEPARATOR))
    }
}

fn check_range(from: NaiveDateTime, to: NaiveDateTime) -> Result<()> {
    if to < from {
        return Err(Error::InvalidRange { from, to });
    }
    Ok(())
}

/// Calendar-aware `years, months, days` between `from` and `to`.
///
/// A partial last day (when `to`'s time of day is earlier than `from`'s)
/// is not counted.
pub fn duration(from: NaiveDateTime, to: NaiveDateTime) -> Result<DurationBreakdown> {
    check_range(from, to)?;

    let mut years = i64::from(to.year() - from.year());
    let mut months = i64::from(to.month()) - i64::from(from.month());
    let mut days = i64::from(to.day()) - i64::from(from.day());

    if to.time() < from.time() {
        days -= 1;
    }

    // One borrow is not always enough: 31 Jan to 1 Mar leaves the day count
    // negative after adding February, so keep walking back.
    let (mut borrow_year, mut borrow_month) = (to.year(), to.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        days += i64::from(days_in_month(borrow_year, borrow_month));
        months -= 1;
    }

    while months < 0 {
        months += 12;
        years -= 1;
    }

    Ok(DurationBreakdown::Calendar { years, months, days })
}

/// Whole minutes elapsed from `from` to `to`.
pub fn duration_minutes(from: NaiveDateTime, to: NaiveDateTime) -> Result<i64> {
    check_range(from, to)?;
    Ok((to - from).num_minutes())
}

/// `days, hours, minutes` between `from` and `to`, without calendar rules.
pub fn clock_duration(from: NaiveDateTime, to: NaiveDateTime) -> Result<DurationBreakdown> {
    let total = duration_minutes(from, to)?;
    Ok(DurationBreakdown::Clock {
        days: total / MINUTES_PER_DAY,
        hours: total % MINUTES_PER_DAY / MINUTES_PER_HOUR,
        minutes: total % MINUTES_PER_HOUR,
    })
}
