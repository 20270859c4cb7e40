//! # Rekap - school records recap engine
//!
//! A command-line utility and library that derives report data from
//! already-loaded school records: attendance, bills and leave permits.
//!
//! ## Features
//!
//! - **Period Resolution**: daily, weekly (Monday first), monthly and yearly windows
//! - **Attendance Recap**: per-student category counts and attendance percentage
//! - **Bill Status**: satisfied, pending, overdue or inactive per month
//! - **Elapsed Time**: calendar (years/months/days) and clock (days/hours/minutes) breakdowns
//! - **Data Export**: recaps as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rekap::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
