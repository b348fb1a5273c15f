//! Report export to CSV, JSON and Excel.
//!
//! Rows of any report kind are flattened into one [`ExportRow`] shape so a
//! single sheet layout serves all three reports. Hours are written twice:
//! `HH:MM` for people and decimal for spreadsheets.
//!
//! ```rust,no_run
//! use turnos::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export_rows(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::{format_duration, round_hours};
use crate::libs::messages::Message;
use crate::libs::report::{MonthlySummary, ReportRow};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// Excel workbook (.xlsx)
    Excel,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Columns and cells of one exported line.
trait Tabular {
    fn headers() -> &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

/// One report row, flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub kind: String,
    pub employee_id: i64,
    pub employee: String,
    /// Shift date, or the Monday of the week for overtime rows.
    pub date: String,
    pub store: String,
    pub entry: String,
    pub exit: String,
    pub hours: String,
    pub hours_decimal: f64,
    pub period_total: String,
}

impl From<&ReportRow> for ExportRow {
    fn from(row: &ReportRow) -> Self {
        let (date, store, entry, exit) = match row {
            ReportRow::HoursWorked(shift) | ReportRow::HolidayShift(shift) => (
                shift.date.format("%Y-%m-%d").to_string(),
                shift.store.clone(),
                shift.start.to_string(),
                shift.end.to_string(),
            ),
            ReportRow::Overtime(overtime) => (
                overtime.week_start.format("%Y-%m-%d").to_string(),
                String::new(),
                String::new(),
                String::new(),
            ),
        };
        Self {
            kind: row.kind().to_string(),
            employee_id: row.employee_id(),
            employee: row.employee_name().to_string(),
            date,
            store,
            entry,
            exit,
            hours: format_duration(row.hours()),
            hours_decimal: round_hours(row.hours()),
            period_total: format_duration(row.period_total()),
        }
    }
}

impl Tabular for ExportRow {
    fn headers() -> &'static [&'static str] {
        &["Report", "Employee ID", "Employee", "Date", "Store", "Entry", "Exit", "Hours", "Hours (decimal)", "Period total"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.kind.clone(),
            self.employee_id.to_string(),
            self.employee.clone(),
            self.date.clone(),
            self.store.clone(),
            self.entry.clone(),
            self.exit.clone(),
            self.hours.clone(),
            format!("{:.2}", self.hours_decimal),
            self.period_total.clone(),
        ]
    }
}

/// One employee's monthly summary, flattened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub employee_id: i64,
    pub employee: String,
    pub total_hours: String,
    pub total_hours_decimal: f64,
    pub holiday_days: u32,
    pub holiday_hours: String,
    pub shifts: usize,
}

impl From<&MonthlySummary> for ExportSummary {
    fn from(summary: &MonthlySummary) -> Self {
        Self {
            employee_id: summary.employee_id,
            employee: summary.employee_name.clone(),
            total_hours: format_duration(summary.total_hours),
            total_hours_decimal: round_hours(summary.total_hours),
            holiday_days: summary.holiday_days,
            holiday_hours: format_duration(summary.holiday_hours),
            shifts: summary.shifts.len(),
        }
    }
}

impl Tabular for ExportSummary {
    fn headers() -> &'static [&'static str] {
        &["Employee ID", "Employee", "Total hours", "Total hours (decimal)", "Holiday days", "Holiday hours", "Shifts"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.employee_id.to_string(),
            self.employee.clone(),
            self.total_hours.clone(),
            format!("{:.2}", self.total_hours_decimal),
            self.holiday_days.to_string(),
            self.holiday_hours.clone(),
            self.shifts.to_string(),
        ]
    }
}

/// Writes report rows or summaries to one file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without a path the file is written to the working directory as
    /// `turnos_export_<timestamp>.<ext>`.
    ///
    /// # Arguments
    ///
    /// * `format` - Output format
    /// * `output_path` - Target file; an existing file is overwritten
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "turnos_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes report rows, one line per row, under a `Report` sheet when
    /// exporting to Excel.
    pub fn export_rows(&self, rows: &[ReportRow]) -> Result<()> {
        let rows: Vec<ExportRow> = rows.iter().map(ExportRow::from).collect();
        self.write(&rows, "Report")
    }

    /// Writes monthly summaries, one line per employee.
    pub fn export_summaries(&self, summaries: &[MonthlySummary]) -> Result<()> {
        let summaries: Vec<ExportSummary> = summaries.iter().map(ExportSummary::from).collect();
        self.write(&summaries, "Monthly summary")
    }

    fn write<T: Tabular + Serialize>(&self, items: &[T], sheet: &str) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.write_csv(items)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(items)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.write_excel(items, sheet)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_csv<T: Tabular>(&self, items: &[T]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(T::headers())?;
        for item in items {
            wtr.write_record(item.record())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Cells that parse as numbers are written as numbers.
    fn write_excel<T: Tabular>(&self, items: &[T], sheet: &str) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet)?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, header) in T::headers().iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, item) in items.iter().enumerate() {
            let row = i as u32 + 1;
            for (col, cell) in item.record().iter().enumerate() {
                match cell.parse::<f64>() {
                    Ok(number) => worksheet.write_number(row, col as u16, number)?,
                    Err(_) => worksheet.write_string(row, col as u16, cell)?,
                };
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
