//! Error types for the recap engine.
//!
//! Only validation failures are raised. Period resolution and aggregation
//! treat empty or sparse input as a valid state and never fail.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range: {to} is before {from}")]
    InvalidRange { from: NaiveDateTime, to: NaiveDateTime },

    #[error("invalid obligation definition: {0}")]
    InvalidObligationDefinition(String),

    #[error("invalid period key {0:?}, expected YYYY-MM")]
    InvalidPeriodKey(String),

    #[error("unknown category code: {0:?}")]
    UnknownCategory(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
