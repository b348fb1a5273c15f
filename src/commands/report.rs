//! Period reports: hours worked, holiday shifts and overtime.
//!
//! The report is printed as a table, or written to a file when `--format`
//! is given.
//!
//! ```bash
//! turnos report hours --from 2025-03-01 --to 2025-03-31
//! turnos report overtime --from 2025-03-01 --employees 4,7 --format excel
//! ```

use super::input::{parse_date, parse_employee_ids};
use crate::api::ShiftBackend;
use crate::libs::{
    calendar::first_of_month,
    export::{ExportFormat, Exporter},
    messages::Message,
    report::{overtime_rows, shift_rows, ReportKind, ReportQuery, ReportRow},
    view::View,
};
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for period reports.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Which report to build
    #[arg(value_enum)]
    kind: ReportKind,

    /// First day of the period, defaults to the first of the `--to` month
    #[arg(long)]
    from: Option<String>,

    /// Last day of the period: `today` or `YYYY-MM-DD`
    #[arg(long, default_value = "today")]
    to: String,

    /// Comma-separated employee IDs; all employees when omitted
    #[arg(short, long)]
    employees: Option<String>,

    /// Write the report to a file in this format instead of printing it
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Output file, defaults to `turnos_export_<timestamp>.<ext>`
    #[arg(short, long, requires = "format")]
    output: Option<PathBuf>,
}

/// Executes the report command.
///
/// The range defaults to the first of the `--to` month through `--to`.
/// An inverted range is rejected before any request is made.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `backend` - Backend that builds the report
pub async fn cmd<B: ShiftBackend>(args: ReportArgs, backend: &B) -> Result<()> {
    let end = parse_date(&args.to)?;
    let start = match &args.from {
        Some(from) => parse_date(from)?,
        None => first_of_month(end),
    };
    let employee_ids = parse_employee_ids(args.employees.as_deref())?;
    let query = ReportQuery::new(start, end, employee_ids).map_err(|e| msg_error_anyhow!(e))?;

    let rows = fetch(backend, args.kind, &query).await?;

    if let Some(format) = args.format {
        return Exporter::new(format, args.output).export_rows(&rows);
    }

    msg_print!(
        Message::ReportHeader(
            args.kind.to_string(),
            query.start.format("%Y-%m-%d").to_string(),
            query.end.format("%Y-%m-%d").to_string()
        ),
        true
    );
    if rows.is_empty() {
        msg_info!(Message::NoReportRows);
        return Ok(());
    }
    View::report(&rows)
}

/// Requests the rows of one report kind.
///
/// # Returns
///
/// Rows tagged with their kind, in the order the backend returned them.
pub async fn fetch<B: ShiftBackend>(backend: &B, kind: ReportKind, query: &ReportQuery) -> Result<Vec<ReportRow>> {
    let rows = match kind {
        ReportKind::Hours => shift_rows(kind, backend.hours_worked(query).await?),
        ReportKind::Holidays => shift_rows(kind, backend.holiday_shifts(query).await?),
        ReportKind::Overtime => overtime_rows(backend.overtime(query).await?),
    };
    Ok(rows)
}
