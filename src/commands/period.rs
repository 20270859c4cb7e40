use crate::{
    commands::parse_date,
    libs::{
        messages::Message,
        period::{resolve_period, PeriodKind},
    },
    msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct PeriodArgs {
    #[arg(value_enum, help = "Period kind")]
    kind: PeriodKind,
    #[arg(short, long, value_parser = parse_date, help = "Reference date (YYYY-MM-DD), defaults to today")]
    date: Option<NaiveDate>,
}

pub fn cmd(period_args: PeriodArgs) -> Result<()> {
    let reference = period_args.date.unwrap_or_else(|| Local::now().date_naive());
    let window = resolve_period(period_args.kind, reference);

    msg_print!(window.label, true);
    msg_print!(Message::PeriodWindow(
        window.start_date().format("%Y-%m-%d").to_string(),
        window.end_date().format("%Y-%m-%d").to_string(),
        window.days(),
    ));

    Ok(())
}
