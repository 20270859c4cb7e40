//! Core library modules for the rekap application.
//!
//! ## Features
//!
//! - **Engine**: period resolution, record aggregation, obligation status and
//!   duration breakdowns, all pure functions with explicit "today"/"now"
//! - **Core Infrastructure**: configuration, data storage, messaging, errors
//! - **Presentation**: console tables, formatting, data export
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rekap::libs::obligation::{evaluate, ObligationDefinition, ObligationStatus, YearMonth};
//!
//! let bill = ObligationDefinition::new(
//!     "spp",
//!     "Tuition",
//!     10,
//!     NaiveDate::from_ymd_opt(2024, 1, 1),
//!     NaiveDate::from_ymd_opt(2024, 12, 31),
//! )?;
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let status = evaluate(&bill, "2024-03".parse()?, None, today);
//! assert_eq!(status, ObligationStatus::Overdue);
//! assert_eq!(evaluate(&bill, YearMonth::new(2025, 1)?, None, today), ObligationStatus::Inactive);
//! # Ok::<(), rekap::libs::error::Error>(())
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod dataset;
pub mod duration;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod obligation;
pub mod period;
pub mod permit;
pub mod record;
pub mod summary;
pub mod view;
