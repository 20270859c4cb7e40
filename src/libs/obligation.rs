//! Status derivation for recurring monthly obligations such as tuition bills.
//!
//! An obligation is due on a fixed day of every month, optionally only
//! within an active window. For a target month the status is decided in a
//! fixed order, first match wins:
//!
//! 1. a satisfied fulfillment for that month exists → `Satisfied`
//! 2. the 15th of the month lies outside the active window → `Inactive`
//! 3. today is past the (clamped) due date → `Overdue`
//! 4. otherwise → `Pending`
//!
//! The order matters: an inactive obligation is never overdue and a paid
//! one is always satisfied, whatever the dates say.

use crate::libs::calendar::{clamped_date, first_of_next_month};
use crate::libs::duration::{duration, DurationBreakdown};
use crate::libs::error::{Error, Result};
use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the month used to test the active window.
const MID_PERIOD_DAY: u64 = 15;

/// A calendar month, the key obligations are billed under.
///
/// Stored as the first day of the month, so every key is a representable
/// date and keys order chronologically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .filter(|_| first_of_next_month(year, month).is_some())
            .map(YearMonth)
            .ok_or_else(|| Error::InvalidPeriodKey(format!("{:04}-{:02}", year, month)))
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// The 15th of the month.
    pub fn mid_period(&self) -> NaiveDate {
        self.0.checked_add_days(Days::new(MID_PERIOD_DAY - 1)).unwrap_or(self.0)
    }

    /// `day` of this month, clamped to the month's last day.
    pub fn due_date(&self, day: u32) -> NaiveDate {
        clamped_date(self.year(), self.month(), day).unwrap_or(self.0)
    }

    /// The following month, if representable.
    pub fn succ(&self) -> Option<Self> {
        first_of_next_month(self.year(), self.month()).and_then(|first| YearMonth::new(first.year(), first.month()).ok())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        let invalid = || Error::InvalidPeriodKey(key.to_string());
        let (year, month) = key.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = Error;

    fn try_from(key: String) -> Result<Self> {
        key.parse()
    }
}

impl From<YearMonth> for String {
    fn from(period: YearMonth) -> Self {
        period.to_string()
    }
}

/// Unvalidated obligation as it arrives from a data file.
#[derive(Deserialize)]
struct ObligationDraft {
    id: String,
    #[serde(default)]
    name: Option<String>,
    due_day: u32,
    #[serde(default)]
    active_from: Option<NaiveDate>,
    #[serde(default)]
    active_until: Option<NaiveDate>,
    #[serde(default)]
    amount: Option<u64>,
}

/// A recurring monthly duty, such as a tuition bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ObligationDraft")]
pub struct ObligationDefinition {
    pub id: String,
    pub name: String,
    due_day: u32,
    active_from: Option<NaiveDate>,
    active_until: Option<NaiveDate>,
    /// Amount billed per month, if fixed.
    pub amount: Option<u64>,
}

impl ObligationDefinition {
    /// Validates `due_day` (1-31) and the active window bounds.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        due_day: u32,
        active_from: Option<NaiveDate>,
        active_until: Option<NaiveDate>,
    ) -> Result<Self> {
        let id = id.into();
        if !(1..=31).contains(&due_day) {
            return Err(Error::InvalidObligationDefinition(format!("{}: due day {} is outside 1-31", id, due_day)));
        }
        if let (Some(from), Some(until)) = (active_from, active_until) {
            if until < from {
                return Err(Error::InvalidObligationDefinition(format!("{}: active window ends {} before it starts {}", id, until, from)));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            due_day,
            active_from,
            active_until,
            amount: None,
        })
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn due_day(&self) -> u32 {
        self.due_day
    }

    pub fn active_from(&self) -> Option<NaiveDate> {
        self.active_from
    }

    pub fn active_until(&self) -> Option<NaiveDate> {
        self.active_until
    }
}

impl TryFrom<ObligationDraft> for ObligationDefinition {
    type Error = Error;

    fn try_from(draft: ObligationDraft) -> Result<Self> {
        let name = draft.name.unwrap_or_else(|| draft.id.clone());
        let definition = ObligationDefinition::new(draft.id, name, draft.due_day, draft.active_from, draft.active_until)?;
        Ok(ObligationDefinition { amount: draft.amount, ..definition })
    }
}

fn default_satisfied() -> bool {
    true
}

/// Evidence that an obligation was met for one month, e.g. a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentRecord {
    pub subject_id: String,
    pub obligation_id: String,
    pub period: YearMonth,
    pub fulfilled_on: NaiveDate,
    #[serde(default)]
    pub amount: u64,
    #[serde(default = "default_satisfied")]
    pub satisfied: bool,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ObligationStatus {
    Satisfied,
    Pending,
    Overdue,
    Inactive,
}

impl fmt::Display for ObligationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Derives the status of `obligation` for `period` as of `today`.
pub fn evaluate(obligation: &ObligationDefinition, period: YearMonth, fulfillment: Option<&FulfillmentRecord>, today: NaiveDate) -> ObligationStatus {
    let status = if fulfillment.is_some_and(|record| record.satisfied && record.period == period) {
        ObligationStatus::Satisfied
    } else if is_inactive(obligation, period) {
        ObligationStatus::Inactive
    } else if today > period.due_date(obligation.due_day) {
        ObligationStatus::Overdue
    } else {
        ObligationStatus::Pending
    };

    tracing::debug!(obligation = %obligation.id, %period, %today, %status, "evaluated obligation");
    status
}

fn is_inactive(obligation: &ObligationDefinition, period: YearMonth) -> bool {
    // TODO: compare the whole month against the window instead of its 15th
    // once billing no longer depends on the old heuristic.
    let mid = period.mid_period();
    obligation.active_from.is_some_and(|from| mid < from) || obligation.active_until.is_some_and(|until| mid > until)
}

/// Picks the fulfillment for one subject, obligation and month, preferring a
/// satisfied record over an unsatisfied one.
pub fn find_fulfillment<'a>(fulfillments: &'a [FulfillmentRecord], subject_id: &str, obligation_id: &str, period: YearMonth) -> Option<&'a FulfillmentRecord> {
    let mut matching = fulfillments
        .iter()
        .filter(|record| record.subject_id == subject_id && record.obligation_id == obligation_id && record.period == period);
    let first = matching.next()?;
    if first.satisfied {
        return Some(first);
    }
    Some(matching.find(|record| record.satisfied).unwrap_or(first))
}

/// One month of a subject's obligation statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub period: YearMonth,
    pub due_date: NaiveDate,
    pub status: ObligationStatus,
    pub fulfilled_on: Option<NaiveDate>,
    pub amount: Option<u64>,
    /// How long past the due date an overdue month is, for display.
    pub overdue_by: Option<DurationBreakdown>,
}

/// Evaluates every month from `from` to `to` inclusive for one subject.
///
/// An empty statement is returned when `to` precedes `from`.
pub fn statement(
    obligation: &ObligationDefinition,
    subject_id: &str,
    fulfillments: &[FulfillmentRecord],
    from: YearMonth,
    to: YearMonth,
    today: NaiveDate,
) -> Vec<StatementLine> {
    let mut lines = vec![];
    let mut cursor = Some(from);

    while let Some(period) = cursor.filter(|period| *period <= to) {
        let fulfillment = find_fulfillment(fulfillments, subject_id, &obligation.id, period);
        let status = evaluate(obligation, period, fulfillment, today);
        let due_date = period.due_date(obligation.due_day);

        let overdue_by = match status {
            ObligationStatus::Overdue => duration(due_date.and_time(NaiveTime::MIN), today.and_time(NaiveTime::MIN)).ok(),
            _ => None,
        };

        lines.push(StatementLine {
            period,
            due_date,
            status,
            fulfilled_on: fulfillment.map(|record| record.fulfilled_on),
            amount: fulfillment.map(|record| record.amount).or(obligation.amount),
            overdue_by,
        });

        cursor = period.succ();
    }

    lines
}

/// Status counts over a statement, plus the amount actually received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub satisfied: usize,
    pub pending: usize,
    pub overdue: usize,
    pub inactive: usize,
    pub received: u64,
}

impl StatusTally {
    pub fn from_lines(lines: &[StatementLine]) -> Self {
        lines.iter().fold(StatusTally::default(), |mut tally, line| {
            match line.status {
                ObligationStatus::Satisfied => {
                    tally.satisfied += 1;
                    tally.received = tally.received.saturating_add(line.amount.unwrap_or(0));
                }
                ObligationStatus::Pending => tally.pending += 1,
                ObligationStatus::Overdue => tally.overdue += 1,
                ObligationStatus::Inactive => tally.inactive += 1,
            }
            tally
        })
    }
}
