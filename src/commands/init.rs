use crate::{
    libs::{config::Config, messages::Message, period::PeriodKind, record::Attendance, summary::DuplicatePolicy},
    msg_success,
};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, value_enum, help = "Default reporting period")]
    period: Option<PeriodKind>,
    #[arg(long, value_enum, help = "Attendance category counted toward the percentage")]
    positive: Option<Attendance>,
    #[arg(long, value_enum, help = "How duplicate records on the same day are counted")]
    duplicates: Option<DuplicatePolicy>,
    #[arg(long, help = "Separator between duration units")]
    separator: Option<String>,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut config = Config::read().context(Message::ConfigParseError)?;
    let mut report = config.report();

    if let Some(period) = init_args.period {
        report.default_period = period;
    }
    if let Some(positive) = init_args.positive {
        report.positive_category = positive;
    }
    if let Some(duplicates) = init_args.duplicates {
        report.duplicate_policy = duplicates;
    }
    if let Some(separator) = init_args.separator {
        report.unit_separator = separator;
    }

    config.report = Some(report);
    config.save().context(Message::ConfigSaveError)?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
