//! Monthly summary: hours, holiday days and holiday hours per employee.

use super::input::{parse_employee_ids, parse_month};
use crate::api::ShiftBackend;
use crate::libs::{
    calendar::month_title,
    export::{ExportFormat, Exporter},
    messages::Message,
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Datelike;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the monthly summary.
///
/// Without `--format` the summary is printed as a table. With it, the
/// summary is written to a file instead.
#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Month to summarize: `current` or `YYYY-MM`
    #[arg(short, long, default_value = "current")]
    month: String,

    /// Comma-separated employee IDs; all employees when omitted
    #[arg(short, long)]
    employees: Option<String>,

    /// Write the summary to a file in this format instead of printing it
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Output file, defaults to `turnos_export_<timestamp>.<ext>`
    #[arg(short, long, requires = "format")]
    output: Option<PathBuf>,
}

/// Executes the monthly summary command.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `backend` - Backend that computes the summaries
///
/// # Returns
///
/// Returns `Ok(())` once the summary is printed or exported, or an error if
/// an argument does not parse, the backend fails or the file cannot be
/// written.
pub async fn cmd<B: ShiftBackend>(args: SummaryArgs, backend: &B) -> Result<()> {
    let month = parse_month(&args.month)?;
    let employee_ids = parse_employee_ids(args.employees.as_deref())?;

    let summaries = backend.monthly_summary(month.year(), month.month(), &employee_ids).await?;

    if let Some(format) = args.format {
        return Exporter::new(format, args.output).export_summaries(&summaries);
    }

    msg_print!(Message::SummaryHeader(month_title(month)), true);
    if summaries.is_empty() {
        msg_info!(Message::NoSummaries);
        return Ok(());
    }
    View::summaries(&summaries)
}
