//! Recap export for external analysis and printing.
//!
//! ## Features
//!
//! - **Export Formats**: CSV (one column per category) and pretty JSON
//! - **File Naming**: timestamped default names when no path is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rekap::libs::export::{ExportFormat, Exporter};
//! use rekap::libs::period::{resolve_period, PeriodKind};
//! use rekap::libs::record::{Attendance, EventRecord, Subject};
//! use rekap::libs::summary::aggregate;
//! use chrono::NaiveDate;
//!
//! let window = resolve_period(PeriodKind::Monthly, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
//! let subjects = vec![Subject::new("s1", "Ayu")];
//! let records: Vec<EventRecord<Attendance>> = vec![];
//! let summaries = aggregate(&subjects, &records, &window, Attendance::Present);
//!
//! Exporter::new(ExportFormat::Csv, None).export_recap(&window, &summaries)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::period::PeriodWindow;
use crate::libs::record::Category;
use crate::libs::summary::Summary;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet applications.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

/// JSON document written for a recap export.
#[derive(Debug, Serialize)]
pub struct ExportRecap<'a, C: Category> {
    pub period: &'a str,
    pub start: String,
    pub end: String,
    pub summaries: &'a [Summary<C>],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `rekap_export_<YYYYmmdd_HHMMSS>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("rekap_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_recap<C: Category + Serialize>(&self, window: &PeriodWindow, summaries: &[Summary<C>]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_recap_csv(summaries),
            ExportFormat::Json => self.export_recap_json(window, summaries),
        }?;

        tracing::info!(path = %self.output_path.display(), rows = summaries.len(), "recap exported");
        Ok(())
    }

    fn export_recap_csv<C: Category>(&self, summaries: &[Summary<C>]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        let mut header = vec!["id".to_string(), "name".to_string(), "secondary_id".to_string(), "group".to_string()];
        header.extend(C::ALL.iter().map(|category| category.to_string().to_lowercase()));
        header.extend(["total".to_string(), "percentage".to_string()]);
        wtr.write_record(&header)?;

        for summary in summaries {
            let mut record = vec![
                summary.subject_id.clone(),
                summary.name.clone(),
                summary.secondary_id.clone().unwrap_or_default(),
                summary.group.clone().unwrap_or_default(),
            ];
            record.extend(C::ALL.iter().map(|category| summary.count(*category).to_string()));
            record.extend([summary.total.to_string(), format!("{:.1}", summary.percentage)]);
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_recap_json<C: Category + Serialize>(&self, window: &PeriodWindow, summaries: &[Summary<C>]) -> Result<()> {
        let document = ExportRecap {
            period: &window.label,
            start: window.start_date().format("%Y-%m-%d").to_string(),
            end: window.end_date().format("%Y-%m-%d").to_string(),
            summaries,
        };

        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, &document)?;
        Ok(())
    }
}
