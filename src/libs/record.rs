//! Subjects and the dated records reported on them.

use crate::libs::error::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// An entity being reported on, usually a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Membership or registration number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<String>,
    /// Class or group label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            secondary_id: None,
            group: None,
        }
    }

    pub fn with_secondary_id(mut self, secondary_id: impl Into<String>) -> Self {
        self.secondary_id = Some(secondary_id.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// A closed set of event categories that records are counted under.
///
/// `ALL` lists every member in display order; the aggregator emits a counter
/// for each of them even when no record carries it.
pub trait Category: Copy + Ord + Hash + fmt::Debug + fmt::Display + 'static {
    const ALL: &'static [Self];
}

/// Daily attendance outcome.
///
/// Deserialization goes through [`FromStr`], so data files may carry any of
/// the accepted codes.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all(serialize = "lowercase"), try_from = "String")]
pub enum Attendance {
    #[default]
    Present,
    Sick,
    Excused,
    Absent,
}

impl Category for Attendance {
    const ALL: &'static [Self] = &[Attendance::Present, Attendance::Sick, Attendance::Excused, Attendance::Absent];
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Attendance {
    type Err = Error;

    /// Accepts the English names, the legacy Indonesian names and their
    /// single-letter codes, case-insensitively.
    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_lowercase().as_str() {
            "present" | "hadir" | "h" => Ok(Attendance::Present),
            "sick" | "sakit" | "s" => Ok(Attendance::Sick),
            "excused" | "izin" | "i" => Ok(Attendance::Excused),
            "absent" | "alpha" | "alpa" | "a" => Ok(Attendance::Absent),
            _ => Err(Error::UnknownCategory(code.to_string())),
        }
    }
}

impl TryFrom<String> for Attendance {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        code.parse()
    }
}

/// A single dated occurrence tied to one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord<C> {
    pub subject_id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub category: C,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl<C: Category> EventRecord<C> {
    pub fn new(subject_id: impl Into<String>, date: NaiveDate, category: C) -> Self {
        Self {
            subject_id: subject_id.into(),
            date,
            time: None,
            category,
            note: None,
        }
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
