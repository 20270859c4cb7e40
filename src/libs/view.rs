use crate::libs::formatter::{format_amount, format_percentage, render_breakdown};
use crate::libs::obligation::StatementLine;
use crate::libs::permit::{permit_status, LeavePermit};
use crate::libs::record::{Category, Subject};
use crate::libs::summary::{RecapTotals, Summary};
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn recap_table<C: Category>(summaries: &[Summary<C>], totals: &RecapTotals<C>) -> Table {
        let mut table = Table::new();

        let mut titles = vec![Cell::new("#"), Cell::new("ID"), Cell::new("NAME"), Cell::new("NO"), Cell::new("GROUP")];
        titles.extend(C::ALL.iter().map(|category| Cell::new(&category.to_string().to_uppercase())));
        titles.extend([Cell::new("TOTAL"), Cell::new("%")]);
        table.set_titles(Row::new(titles));

        for (index, summary) in summaries.iter().enumerate() {
            let mut cells = vec![
                Cell::new(&(index + 1).to_string()),
                Cell::new(&summary.subject_id),
                Cell::new(&summary.name),
                Cell::new(summary.secondary_id.as_deref().unwrap_or("-")),
                Cell::new(summary.group.as_deref().unwrap_or("-")),
            ];
            cells.extend(C::ALL.iter().map(|category| Cell::new(&summary.count(*category).to_string())));
            cells.extend([Cell::new(&summary.total.to_string()), Cell::new(&format_percentage(summary.percentage))]);
            table.add_row(Row::new(cells));
        }

        let mut footer = vec![Cell::new(""), Cell::new(""), Cell::new("TOTAL"), Cell::new(""), Cell::new("")];
        footer.extend(C::ALL.iter().map(|category| Cell::new(&totals.counts.get(category).copied().unwrap_or(0).to_string())));
        footer.extend([Cell::new(&totals.total.to_string()), Cell::new(&format_percentage(totals.percentage))]);
        table.add_row(Row::new(footer));

        table
    }

    pub fn recap<C: Category>(summaries: &[Summary<C>], totals: &RecapTotals<C>) -> Result<()> {
        Self::recap_table(summaries, totals).printstd();
        Ok(())
    }

    pub fn statement_table(lines: &[StatementLine], separator: &str) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["MONTH", "DUE", "STATUS", "PAID ON", "AMOUNT", "OVERDUE BY"]);
        for line in lines {
            table.add_row(row![
                line.period,
                line.due_date.format("%d %b %Y"),
                line.status,
                line.fulfilled_on.map(|date| date.format("%d %b %Y").to_string()).unwrap_or_else(|| "-".to_string()),
                line.amount.map(format_amount).unwrap_or_else(|| "-".to_string()),
                line.overdue_by.map(|span| render_breakdown(&span, separator)).unwrap_or_else(|| "-".to_string())
            ]);
        }

        table
    }

    pub fn statement(lines: &[StatementLine], separator: &str) -> Result<()> {
        Self::statement_table(lines, separator).printstd();
        Ok(())
    }

    pub fn permits_table(permits: &[&LeavePermit], subjects: &[Subject], now: NaiveDateTime, separator: &str) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["STUDENT", "FROM", "UNTIL", "LENGTH", "STATUS", "REMAINING", "REASON"]);
        for permit in permits {
            let name = subjects
                .iter()
                .find(|subject| subject.id == permit.subject_id)
                .map(|subject| subject.name.as_str())
                .unwrap_or(permit.subject_id.as_str());
            table.add_row(row![
                name,
                permit.starts_at().format("%d %b %Y %H:%M"),
                permit.ends_at().format("%d %b %Y %H:%M"),
                render_breakdown(&permit.length(), separator),
                permit_status(permit, now),
                permit.remaining(now).map(|left| render_breakdown(&left, separator)).unwrap_or_else(|| "-".to_string()),
                permit.reason.as_deref().unwrap_or("-")
            ]);
        }

        table
    }

    pub fn permits(permits: &[&LeavePermit], subjects: &[Subject], now: NaiveDateTime, separator: &str) -> Result<()> {
        Self::permits_table(permits, subjects, now, separator).printstd();
        Ok(())
    }
}
