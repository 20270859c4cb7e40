use crate::{
    commands::parse_date_time,
    libs::{config::Config, duration::duration, formatter::display_duration, messages::Message},
    msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct TenureArgs {
    #[arg(long, value_parser = parse_date_time, help = "Start (YYYY-MM-DD or YYYY-MM-DD HH:MM)")]
    from: NaiveDateTime,
    #[arg(long, value_parser = parse_date_time, help = "End (YYYY-MM-DD or YYYY-MM-DD HH:MM), defaults to now")]
    to: Option<NaiveDateTime>,
}

pub fn cmd(tenure_args: TenureArgs) -> Result<()> {
    let report = Config::read()?.report();
    let to = tenure_args.to.unwrap_or_else(|| Local::now().naive_local());
    let rendered = display_duration(duration(tenure_args.from, to), &report.unit_separator);

    msg_print!(Message::TenureResult(
        tenure_args.from.format("%Y-%m-%d %H:%M").to_string(),
        to.format("%Y-%m-%d %H:%M").to_string(),
        rendered,
    ));

    Ok(())
}
