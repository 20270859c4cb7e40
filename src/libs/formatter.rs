//! Human-readable rendering of durations, percentages and amounts.
//!
//! This module turns the engine's numeric outputs into the compact strings
//! shown in recap tables, bill statements and exports.
//!
//! ## Format Specifications
//!
//! ### Duration Breakdowns
//! - Units with a value of 0 are omitted
//! - Singular/plural unit names (`1 day`, `2 days`)
//! - Units are joined by a separator, `", "` unless configured otherwise
//! - An all-zero breakdown renders as `"no time elapsed"`
//! - A range that could not be computed renders as `"invalid range"`
//!
//! ### Examples
//! - 1 year, 1 month, 14 days → `"1 year, 1 month, 14 days"`
//! - 0 days, 3 hours, 0 minutes → `"3 hours"`
//! - 2 days, 0 hours, 30 minutes with `" "` → `"2 days 30 minutes"`
//!
//! ## Examples
//!
//! ```rust
//! use rekap::libs::duration::DurationBreakdown;
//! use rekap::libs::formatter::{format_percentage, render_breakdown};
//!
//! let breakdown = DurationBreakdown::Clock { days: 1, hours: 0, minutes: 5 };
//! assert_eq!(render_breakdown(&breakdown, ", "), "1 day, 5 minutes");
//! assert_eq!(format_percentage(66.66), "66.7%");
//! ```

use crate::libs::duration::DurationBreakdown;
use crate::libs::error::Result;
use crate::libs::messages::Message;

fn unit(value: i64, singular: &str, plural: &str) -> Option<String> {
    match value {
        0 => None,
        1 => Some(format!("1 {}", singular)),
        n => Some(format!("{} {}", n, plural)),
    }
}

/// Renders a breakdown, omitting zero units and joining the rest with
/// `separator`.
///
/// # Examples
///
/// ```rust
/// use rekap::libs::duration::DurationBreakdown;
/// use rekap::libs::formatter::render_breakdown;
///
/// let tenure = DurationBreakdown::Calendar { years: 2, months: 0, days: 1 };
/// assert_eq!(render_breakdown(&tenure, ", "), "2 years, 1 day");
///
/// let zero = DurationBreakdown::Calendar { years: 0, months: 0, days: 0 };
/// assert_eq!(render_breakdown(&zero, ", "), "no time elapsed");
/// ```
pub fn render_breakdown(breakdown: &DurationBreakdown, separator: &str) -> String {
    let parts: Vec<String> = match *breakdown {
        DurationBreakdown::Calendar { years, months, days } => [unit(years, "year", "years"), unit(months, "month", "months"), unit(days, "day", "days")]
            .into_iter()
            .flatten()
            .collect(),
        DurationBreakdown::Clock { days, hours, minutes } => [unit(days, "day", "days"), unit(hours, "hour", "hours"), unit(minutes, "minute", "minutes")]
            .into_iter()
            .flatten()
            .collect(),
    };

    if parts.is_empty() {
        return Message::DurationSameInstant.to_string();
    }
    parts.join(separator)
}

/// Presentation wrapper for a duration computation.
///
/// Screens call this instead of handling the error themselves: a failed
/// computation (end before start) is shown as the fixed invalid-range text,
/// while the computation functions keep returning the error to other
/// callers.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use rekap::libs::duration::duration;
/// use rekap::libs::formatter::display_duration;
///
/// let a = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let b = NaiveDate::from_ymd_opt(2023, 1, 20).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(display_duration(duration(a, b), ", "), "invalid range");
/// ```
pub fn display_duration(result: Result<DurationBreakdown>, separator: &str) -> String {
    match result {
        Ok(breakdown) => render_breakdown(&breakdown, separator),
        Err(e) => {
            tracing::debug!(error = %e, "duration fell back to invalid range text");
            Message::DurationInvalidRange.to_string()
        }
    }
}

/// Formats a percentage with one decimal place.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats an amount with `.` as the thousands separator (`1.250.000`).
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
