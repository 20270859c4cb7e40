use crate::{
    commands::parse_date_time,
    libs::{config::Config, dataset::Dataset, messages::Message, permit::LeavePermit, view::View},
    msg_bail_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PermitsArgs {
    #[arg(long, help = "Dataset file (JSON)")]
    data: PathBuf,
    #[arg(short, long, help = "Only permits of this student")]
    subject: Option<String>,
    #[arg(long, value_parser = parse_date_time, help = "Reference time (YYYY-MM-DD HH:MM), defaults to now")]
    now: Option<NaiveDateTime>,
}

pub fn cmd(permits_args: PermitsArgs) -> Result<()> {
    let report = Config::read()?.report();
    let dataset = Dataset::load(&permits_args.data)?;
    let now = permits_args.now.unwrap_or_else(|| Local::now().naive_local());

    if let Some(id) = permits_args.subject.as_deref() {
        if dataset.subject(id).is_none() {
            msg_bail_anyhow!(Message::SubjectNotFound(id.to_string()));
        }
    }

    let mut permits: Vec<&LeavePermit> = dataset
        .permits
        .iter()
        .filter(|permit| permits_args.subject.as_deref().map_or(true, |id| permit.subject_id == id))
        .collect();
    if permits.is_empty() {
        msg_warning!(Message::NoPermitsFound);
        return Ok(());
    }
    permits.sort_by_key(|permit| permit.starts_at());

    msg_print!(Message::PermitsHeader(now.format("%d %b %Y %H:%M").to_string()), true);
    View::permits(&permits, &dataset.subjects, now, &report.unit_separator)?;

    Ok(())
}
