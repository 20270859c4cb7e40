pub mod bills;
pub mod init;
pub mod period;
pub mod permits;
pub mod recap;
pub mod tenure;

use crate::libs::messages::Message;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Save report defaults")]
    Init(init::InitArgs),
    #[command(about = "Show the window a reporting period resolves to")]
    Period(period::PeriodArgs),
    #[command(about = "Attendance recap per student")]
    Recap(recap::RecapArgs),
    #[command(about = "Monthly bill statement for a student")]
    Bills(bills::BillsArgs),
    #[command(about = "Leave permits and their status")]
    Permits(permits::PermitsArgs),
    #[command(about = "Elapsed years, months and days between two dates")]
    Tenure(tenure::TenureArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Period(args) => period::cmd(args),
            Commands::Recap(args) => recap::cmd(args),
            Commands::Bills(args) => bills::cmd(args),
            Commands::Permits(args) => permits::cmd(args),
            Commands::Tenure(args) => tenure::cmd(args),
        }
    }
}

/// Parses `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| Message::InvalidDateInput(input.to_string()).to_string())
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS` or the
/// same with a `T` separator. A bare date means midnight.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, String> {
    let trimmed = input.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    parse_date(trimmed).map(|date| date.and_time(NaiveTime::MIN))
}
