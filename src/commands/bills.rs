use crate::{
    commands::parse_date,
    libs::{
        config::Config,
        dataset::Dataset,
        formatter::format_amount,
        messages::Message,
        obligation::{statement, ObligationDefinition, StatusTally, YearMonth},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

fn parse_period(input: &str) -> Result<YearMonth, String> {
    input.parse().map_err(|_| Message::InvalidPeriodKeyInput(input.to_string()).to_string())
}

#[derive(Debug, Args)]
pub struct BillsArgs {
    #[arg(long, help = "Dataset file (JSON)")]
    data: PathBuf,
    #[arg(short, long, help = "Student id")]
    subject: String,
    #[arg(short = 'b', long, help = "Bill id, defaults to every bill in the dataset")]
    obligation: Option<String>,
    #[arg(long, value_parser = parse_period, help = "First month (YYYY-MM), defaults to January of the current year")]
    from: Option<YearMonth>,
    #[arg(long, value_parser = parse_period, help = "Last month (YYYY-MM), defaults to December of the current year")]
    to: Option<YearMonth>,
    #[arg(long, value_parser = parse_date, help = "Evaluate as of this date (YYYY-MM-DD), defaults to today")]
    today: Option<NaiveDate>,
}

pub fn cmd(bills_args: BillsArgs) -> Result<()> {
    let report = Config::read()?.report();
    let dataset = Dataset::load(&bills_args.data)?;
    let today = bills_args.today.unwrap_or_else(|| Local::now().date_naive());

    let Some(subject) = dataset.subject(&bills_args.subject) else {
        msg_bail_anyhow!(Message::SubjectNotFound(bills_args.subject));
    };

    let obligations: Vec<&ObligationDefinition> = match bills_args.obligation.as_deref() {
        Some(id) => match dataset.obligation(id) {
            Some(obligation) => vec![obligation],
            None => msg_bail_anyhow!(Message::ObligationNotFound(id.to_string())),
        },
        None => dataset.obligations.iter().collect(),
    };
    if obligations.is_empty() {
        msg_warning!(Message::NoObligationsDefined);
        return Ok(());
    }

    let from = match bills_args.from {
        Some(from) => from,
        None => YearMonth::new(today.year(), 1)?,
    };
    let to = match bills_args.to {
        Some(to) => to,
        None => YearMonth::new(today.year(), 12)?,
    };

    for obligation in obligations {
        let lines = statement(obligation, &subject.id, &dataset.fulfillments, from, to, today);
        if lines.is_empty() {
            msg_warning!(Message::StatementRangeEmpty(from.to_string(), to.to_string()));
            continue;
        }

        let tally = StatusTally::from_lines(&lines);
        tracing::info!(subject = %subject.id, obligation = %obligation.id, months = lines.len(), overdue = tally.overdue, "statement built");

        msg_print!(Message::StatementHeader(subject.name.clone(), obligation.name.clone()), true);
        View::statement(&lines, &report.unit_separator)?;
        msg_info!(Message::StatementTally {
            satisfied: tally.satisfied,
            pending: tally.pending,
            overdue: tally.overdue,
            inactive: tally.inactive,
            received: format_amount(tally.received),
        });
    }

    Ok(())
}
