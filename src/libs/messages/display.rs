//! Display implementation for rekap application messages.
//!
//! Every piece of user-facing text lives here, including the period labels
//! and the fixed duration fallback strings produced by the engine. Keeping
//! the wording in one match makes it the single place to localize.
//!
//! ## Usage Integration
//!
//! ```rust
//! use rekap::libs::messages::Message;
//!
//! assert_eq!(Message::PeriodMonthly("February 2024".to_string()).to_string(), "Monthly: February 2024");
//! assert_eq!(Message::DurationSameInstant.to_string(), "no time elapsed");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PERIOD MESSAGES ===
            Message::PeriodDaily(day) => format!("Daily: {}", day),
            Message::PeriodWeekly(first, last) => format!("Weekly: {} - {}", first, last),
            Message::PeriodMonthly(month_year) => format!("Monthly: {}", month_year),
            Message::PeriodYearly(year) => format!("Yearly: {}", year),
            Message::PeriodWindow(start, end, days) => format!("From {} to {} ({} day{})", start, end, days, if *days == 1 { "" } else { "s" }),

            // === DURATION MESSAGES ===
            Message::DurationSameInstant => "no time elapsed".to_string(),
            Message::DurationInvalidRange => "invalid range".to_string(),
            Message::TenureResult(from, to, rendered) => format!("From {} to {}: {}", from, to, rendered),

            // === RECAP MESSAGES ===
            Message::RecapHeader(label) => format!("Attendance recap, {}", label),
            Message::RecapGroupHeader(group, label) => format!("Attendance recap for {}, {}", group, label),
            Message::NoSubjectsFound => "No students found in the dataset.".to_string(),
            Message::NoSubjectsInGroup(group) => format!("No students found in group {}.", group),
            Message::RecapTotals(subjects, records, percentage) => {
                format!("{} student(s), {} record(s), overall attendance {:.1}%", subjects, records, percentage)
            }

            // === BILL MESSAGES ===
            Message::StatementHeader(subject, obligation) => format!("{} for {}", obligation, subject),
            Message::StatementTally {
                satisfied,
                pending,
                overdue,
                inactive,
                received,
            } => format!(
                "Paid: {}, pending: {}, overdue: {}, inactive: {}. Received {}",
                satisfied, pending, overdue, inactive, received
            ),
            Message::SubjectNotFound(id) => format!("Student {} not found", id),
            Message::ObligationNotFound(id) => format!("Bill {} not found", id),
            Message::NoObligationsDefined => "No bills are defined in the dataset.".to_string(),
            Message::StatementRangeEmpty(from, to) => format!("No months between {} and {}.", from, to),

            // === PERMIT MESSAGES ===
            Message::PermitsHeader(now) => format!("Leave permits as of {}", now),
            Message::NoPermitsFound => "No leave permits found.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === DATASET MESSAGES ===
            Message::DatasetReadFailed(path) => format!("Failed to read dataset {}", path),
            Message::DatasetParseFailed(path) => format!("Failed to parse dataset {}", path),
            Message::DatasetLoaded {
                subjects,
                records,
                obligations,
                fulfillments,
                permits,
            } => format!(
                "Loaded {} students, {} attendance records, {} bills, {} payments, {} permits",
                subjects, records, obligations, fulfillments, permits
            ),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === INPUT MESSAGES ===
            Message::InvalidDateInput(input) => format!("Invalid date {:?}, expected YYYY-MM-DD or YYYY-MM-DD HH:MM", input),
            Message::InvalidPeriodKeyInput(input) => format!("Invalid month {:?}, expected YYYY-MM", input),
        };

        write!(f, "{}", text)
    }
}
