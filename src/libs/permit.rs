//! Leave permits: short, dated absences granted to a subject.

use crate::libs::duration::{clock_duration, DurationBreakdown};
use crate::libs::error::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Deserialize)]
struct PermitDraft {
    subject_id: String,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PermitDraft")]
pub struct LeavePermit {
    pub subject_id: String,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
    pub reason: Option<String>,
}

impl TryFrom<PermitDraft> for LeavePermit {
    type Error = Error;

    fn try_from(draft: PermitDraft) -> Result<Self> {
        let permit = LeavePermit::new(draft.subject_id, draft.starts_at, draft.ends_at)?;
        Ok(LeavePermit { reason: draft.reason, ..permit })
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PermitStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl fmt::Display for PermitStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl LeavePermit {
    /// Fails with [`Error::InvalidRange`] when `ends_at` precedes `starts_at`.
    pub fn new(subject_id: impl Into<String>, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> Result<Self> {
        if ends_at < starts_at {
            return Err(Error::InvalidRange { from: starts_at, to: ends_at });
        }
        Ok(Self {
            subject_id: subject_id.into(),
            starts_at,
            ends_at,
            reason: None,
        })
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.starts_at
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.ends_at
    }

    /// Span of the whole permit.
    pub fn length(&self) -> DurationBreakdown {
        clock_duration(self.starts_at, self.ends_at).unwrap_or(DurationBreakdown::Clock { days: 0, hours: 0, minutes: 0 })
    }

    /// Time left on an ongoing permit; `None` once less than a minute is left.
    pub fn remaining(&self, now: NaiveDateTime) -> Option<DurationBreakdown> {
        match permit_status(self, now) {
            PermitStatus::Ongoing => clock_duration(now, self.ends_at).ok().filter(|left| !left.is_zero()),
            _ => None,
        }
    }
}

/// Where `now` falls relative to the permit; both ends count as ongoing.
pub fn permit_status(permit: &LeavePermit, now: NaiveDateTime) -> PermitStatus {
    if now < permit.starts_at {
        PermitStatus::Upcoming
    } else if now <= permit.ends_at {
        PermitStatus::Ongoing
    } else {
        PermitStatus::Ended
    }
}
