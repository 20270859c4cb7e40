//! Per-subject aggregation of dated records over a reporting window.
//!
//! Records are filtered to the window at day resolution, grouped by subject
//! and folded into one [`Summary`] per subject: a counter for every category,
//! the total, and the share of the positive category as a percentage rounded
//! to one decimal place. Subjects with no records in the window still get an
//! all-zero summary.

use crate::libs::period::PeriodWindow;
use crate::libs::record::{Category, EventRecord, Subject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// How several records for the same subject on the same day are counted.
#[derive(clap::ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Every occurrence counts.
    #[default]
    CountEach,
    /// Only the last record in input order counts.
    LastWriteWins,
}

/// Aggregated statistics for one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<C: Category> {
    pub subject_id: String,
    pub name: String,
    pub secondary_id: Option<String>,
    pub group: Option<String>,
    /// One entry per member of `C::ALL`.
    pub counts: BTreeMap<C, usize>,
    pub total: usize,
    pub percentage: f64,
}

impl<C: Category> Summary<C> {
    fn tally(subject: &Subject, categories: &[C], positive: C) -> Self {
        let mut counts: BTreeMap<C, usize> = C::ALL.iter().map(|category| (*category, 0)).collect();
        for category in categories {
            *counts.entry(*category).or_insert(0) += 1;
        }

        let total = categories.len();
        let positive_count = counts.get(&positive).copied().unwrap_or(0);

        Self {
            subject_id: subject.id.clone(),
            name: subject.name.clone(),
            secondary_id: subject.secondary_id.clone(),
            group: subject.group.clone(),
            counts,
            total,
            percentage: percentage(positive_count, total),
        }
    }

    pub fn count(&self, category: C) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// `part / total` as a percentage with one decimal, or 0 when `total` is 0.
///
/// Halves round up. The tenths are computed on integers so that exact ties
/// such as 23/80 = 28.75% are not lost to binary floating point.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let (part, total) = (part as u128, total as u128);
    let tenths = (part * 2000 + total) / (2 * total);
    tenths as f64 / 10.0
}

/// Aggregates `records` for `subjects` inside `window`, counting every
/// occurrence of duplicated records.
pub fn aggregate<C: Category>(subjects: &[Subject], records: &[EventRecord<C>], window: &PeriodWindow, positive: C) -> Vec<Summary<C>> {
    aggregate_with(subjects, records, window, positive, DuplicatePolicy::CountEach)
}

/// Aggregates `records` for `subjects` inside `window` under `policy`.
///
/// The result holds one summary per distinct subject id, sorted by display
/// name (case-folded first, then exact, then by id).
pub fn aggregate_with<C: Category>(
    subjects: &[Subject],
    records: &[EventRecord<C>],
    window: &PeriodWindow,
    positive: C,
    policy: DuplicatePolicy,
) -> Vec<Summary<C>> {
    let in_window = records.iter().filter(|record| window.contains(record.date));

    let mut by_subject: HashMap<&str, Vec<C>> = HashMap::new();
    match policy {
        DuplicatePolicy::CountEach => {
            for record in in_window {
                by_subject.entry(record.subject_id.as_str()).or_default().push(record.category);
            }
        }
        DuplicatePolicy::LastWriteWins => {
            let mut latest: HashMap<(&str, NaiveDate), C> = HashMap::new();
            for record in in_window {
                latest.insert((record.subject_id.as_str(), record.date), record.category);
            }
            for ((subject_id, _), category) in latest {
                by_subject.entry(subject_id).or_default().push(category);
            }
        }
    }

    let mut seen = HashSet::new();
    let mut summaries: Vec<Summary<C>> = subjects
        .iter()
        .filter(|subject| seen.insert(subject.id.as_str()))
        .map(|subject| {
            let categories = by_subject.get(subject.id.as_str()).map(Vec::as_slice).unwrap_or(&[]);
            Summary::tally(subject, categories, positive)
        })
        .collect();

    summaries.sort_by_cached_key(|summary| (summary.name.to_lowercase(), summary.name.clone(), summary.subject_id.clone()));

    tracing::debug!(
        window = %window.label,
        subjects = summaries.len(),
        records = summaries.iter().map(|s| s.total).sum::<usize>(),
        ?policy,
        "aggregated records"
    );

    summaries
}

/// Keeps the subjects whose group label matches `group`, ignoring case.
/// `None` keeps every subject.
pub fn filter_group(subjects: &[Subject], group: Option<&str>) -> Vec<Subject> {
    match group {
        None => subjects.to_vec(),
        Some(wanted) => subjects
            .iter()
            .filter(|subject| subject.group.as_deref().is_some_and(|label| label.eq_ignore_ascii_case(wanted.trim())))
            .cloned()
            .collect(),
    }
}

/// Column totals over a recap, used for report footers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecapTotals<C: Category> {
    pub subjects: usize,
    pub counts: BTreeMap<C, usize>,
    pub total: usize,
    pub percentage: f64,
}

pub trait SummaryTotals<C: Category> {
    fn totals(&self, positive: C) -> RecapTotals<C>;
}

impl<C: Category> SummaryTotals<C> for [Summary<C>] {
    fn totals(&self, positive: C) -> RecapTotals<C> {
        let mut counts: BTreeMap<C, usize> = C::ALL.iter().map(|category| (*category, 0)).collect();
        for summary in self {
            for (category, count) in &summary.counts {
                *counts.entry(*category).or_insert(0) += count;
            }
        }

        let total = self.iter().map(|summary| summary.total).sum();
        let positive_count = counts.get(&positive).copied().unwrap_or(0);

        RecapTotals {
            subjects: self.len(),
            counts,
            total,
            percentage: percentage(positive_count, total),
        }
    }
}
