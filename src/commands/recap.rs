use crate::{
    commands::parse_date,
    libs::{
        config::Config,
        dataset::Dataset,
        export::{ExportFormat, Exporter},
        messages::Message,
        period::{resolve_period, PeriodKind},
        record::Attendance,
        summary::{aggregate_with, filter_group, DuplicatePolicy, SummaryTotals},
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RecapArgs {
    #[arg(long, help = "Dataset file (JSON)")]
    data: PathBuf,
    #[arg(short, long, value_enum, help = "Reporting period, defaults to the configured one")]
    period: Option<PeriodKind>,
    #[arg(short, long, value_parser = parse_date, help = "Reference date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
    #[arg(short, long, help = "Only students in this group")]
    group: Option<String>,
    #[arg(long, value_enum, help = "Category counted toward the percentage")]
    positive: Option<Attendance>,
    #[arg(long, value_enum, help = "How duplicate records on the same day are counted")]
    duplicates: Option<DuplicatePolicy>,
    #[arg(long, value_enum, help = "Also export the recap")]
    export: Option<ExportFormat>,
    #[arg(short, long, help = "Export file path")]
    output: Option<PathBuf>,
}

pub fn cmd(recap_args: RecapArgs) -> Result<()> {
    let report = Config::read()?.report();
    let dataset = Dataset::load(&recap_args.data)?;
    msg_debug!(dataset.loaded_message());

    let kind = recap_args.period.unwrap_or(report.default_period);
    let positive = recap_args.positive.unwrap_or(report.positive_category);
    let policy = recap_args.duplicates.unwrap_or(report.duplicate_policy);
    let reference = recap_args.date.unwrap_or_else(|| Local::now().date_naive());
    let window = resolve_period(kind, reference);

    if dataset.subjects.is_empty() {
        msg_warning!(Message::NoSubjectsFound);
        return Ok(());
    }

    let subjects = filter_group(&dataset.subjects, recap_args.group.as_deref());
    let header = match recap_args.group.as_deref() {
        Some(group) => {
            if subjects.is_empty() {
                msg_warning!(Message::NoSubjectsInGroup(group.to_string()));
                return Ok(());
            }
            Message::RecapGroupHeader(group.to_string(), window.label.clone())
        }
        None => Message::RecapHeader(window.label.clone()),
    };

    let summaries = aggregate_with(&subjects, &dataset.attendance, &window, positive, policy);
    let totals = summaries.totals(positive);

    msg_print!(header, true);
    View::recap(&summaries, &totals)?;
    msg_info!(Message::RecapTotals(totals.subjects, totals.total, totals.percentage));

    if let Some(format) = recap_args.export {
        let exporter = Exporter::new(format, recap_args.output);
        exporter
            .export_recap(&window, &summaries)
            .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;
        msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    }

    Ok(())
}
