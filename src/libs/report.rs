//! Report rows and the little arithmetic done on them client-side.
//!
//! The backend aggregates; this module only types what comes back and
//! re-sums it. Each report kind has its own row shape:
//!
//! | Kind | Row | Source |
//! |------|-----|--------|
//! | hours worked | [`ShiftRow`] | one per shift in range |
//! | holiday shifts | [`ShiftRow`] | one per shift dated on a holiday |
//! | overtime | [`OvertimeRow`] | one per employee and week over the limit |

use crate::libs::error::{Field, ValidationError};
use crate::libs::shift::Shift;
use crate::libs::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Message attached to [`Field::Period`] when the range is inverted.
pub const PERIOD_INVERTED: &str = "Start date must not be after end date.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Hours worked per shift
    Hours,
    /// Shifts worked on holidays
    Holidays,
    /// Weekly hours above the limit
    Overtime,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::Hours => "Hours worked",
            ReportKind::Holidays => "Holiday shifts",
            ReportKind::Overtime => "Overtime",
        };
        f.write_str(name)
    }
}

/// Date range and employee filter of a report. An empty filter means every
/// employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub employee_ids: Vec<i64>,
}

impl ReportQuery {
    /// Builds a query over `[start, end]`, both days included.
    ///
    /// # Arguments
    ///
    /// * `start` - First day of the range
    /// * `end` - Last day of the range
    /// * `employee_ids` - Employees to include; empty means all
    ///
    /// # Returns
    ///
    /// The query, or a [`ValidationError`] on [`Field::Period`] when `start`
    /// is after `end`. A single-day range is accepted.
    pub fn new(start: NaiveDate, end: NaiveDate, employee_ids: Vec<i64>) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::single(Field::Period, PERIOD_INVERTED));
        }
        Ok(Self { start, end, employee_ids })
    }

    /// Whether the employee filter lets `employee_id` through.
    pub fn includes(&self, employee_id: i64) -> bool {
        self.employee_ids.is_empty() || self.employee_ids.contains(&employee_id)
    }

    /// `1,2,3` as sent in the `colaboradores` query parameter.
    pub fn employee_param(&self) -> String {
        self.employee_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One shift in an hours-worked or holiday-shift report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRow {
    pub employee_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub store: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub hours_worked: f64,
    /// Backend aggregate for the employee over the shift's week.
    pub period_total: f64,
}

impl From<Shift> for ShiftRow {
    fn from(shift: Shift) -> Self {
        Self {
            employee_id: shift.employee_id,
            employee_name: shift.employee_name,
            date: shift.date,
            store: shift.store_name.unwrap_or_else(|| "-".to_string()),
            start: shift.start,
            end: shift.end,
            hours_worked: shift.hours_worked.unwrap_or(0.0),
            period_total: shift.week_total.unwrap_or(0.0),
        }
    }
}

/// One employee-week above the weekly hour limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRow {
    #[serde(rename = "colaboradorId")]
    pub employee_id: i64,
    #[serde(rename = "nombreColaborador", default)]
    pub employee_name: String,
    #[serde(rename = "semanaInicio")]
    pub week_start: NaiveDate,
    /// Hours worked that week, overtime included
    #[serde(rename = "horasTrabajadas")]
    pub hours_worked: f64,
    /// Hours above the weekly limit
    #[serde(rename = "horasExtra")]
    pub overtime: f64,
}

/// A report row tagged with the report it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    HoursWorked(ShiftRow),
    HolidayShift(ShiftRow),
    Overtime(OvertimeRow),
}

impl ReportRow {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportRow::HoursWorked(_) => ReportKind::Hours,
            ReportRow::HolidayShift(_) => ReportKind::Holidays,
            ReportRow::Overtime(_) => ReportKind::Overtime,
        }
    }

    pub fn employee_id(&self) -> i64 {
        match self {
            ReportRow::HoursWorked(row) | ReportRow::HolidayShift(row) => row.employee_id,
            ReportRow::Overtime(row) => row.employee_id,
        }
    }

    pub fn employee_name(&self) -> &str {
        match self {
            ReportRow::HoursWorked(row) | ReportRow::HolidayShift(row) => &row.employee_name,
            ReportRow::Overtime(row) => &row.employee_name,
        }
    }

    /// Hours the row contributes: shift hours, or overtime hours.
    pub fn hours(&self) -> f64 {
        match self {
            ReportRow::HoursWorked(row) | ReportRow::HolidayShift(row) => row.hours_worked,
            ReportRow::Overtime(row) => row.overtime,
        }
    }

    /// The employee's period aggregate carried by the row.
    pub fn period_total(&self) -> f64 {
        match self {
            ReportRow::HoursWorked(row) | ReportRow::HolidayShift(row) => row.period_total,
            ReportRow::Overtime(row) => row.hours_worked,
        }
    }
}

/// Wraps backend shift records as rows of a shift-based report kind.
/// Overtime has its own row shape and yields nothing here.
pub fn shift_rows(kind: ReportKind, shifts: Vec<Shift>) -> Vec<ReportRow> {
    let wrap: fn(ShiftRow) -> ReportRow = match kind {
        ReportKind::Hours => ReportRow::HoursWorked,
        ReportKind::Holidays => ReportRow::HolidayShift,
        ReportKind::Overtime => return Vec::new(),
    };
    shifts.into_iter().map(ShiftRow::from).map(wrap).collect()
}

/// Wraps overtime records as report rows.
pub fn overtime_rows(rows: Vec<OvertimeRow>) -> Vec<ReportRow> {
    rows.into_iter().map(ReportRow::Overtime).collect()
}

/// Sum of [`ReportRow::hours`].
pub fn sum_hours(rows: &[ReportRow]) -> f64 {
    rows.iter().map(ReportRow::hours).sum()
}

/// Sum of period aggregates, counting each employee once for shift rows.
/// Overtime rows are per employee-week and all count.
pub fn sum_period_totals(rows: &[ReportRow]) -> f64 {
    let mut seen: BTreeMap<i64, f64> = BTreeMap::new();
    let mut overtime = 0.0;
    for row in rows {
        match row {
            ReportRow::Overtime(row) => overtime += row.hours_worked,
            _ => {
                seen.entry(row.employee_id()).or_insert(row.period_total());
            }
        }
    }
    seen.values().sum::<f64>() + overtime
}

/// Rows grouped by employee id, list order kept within each group.
pub fn by_employee(rows: &[ReportRow]) -> BTreeMap<i64, Vec<&ReportRow>> {
    let mut groups: BTreeMap<i64, Vec<&ReportRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.employee_id()).or_default().push(row);
    }
    groups
}

/// One employee's month as aggregated by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    #[serde(rename = "colaboradorId")]
    pub employee_id: i64,
    #[serde(rename = "nombreColaborador", default)]
    pub employee_name: String,
    #[serde(rename = "totalHorasMes")]
    pub total_hours: f64,
    /// Distinct holiday dates worked, not holiday shifts
    #[serde(rename = "diasFeriadosTrabajados")]
    pub holiday_days: u32,
    #[serde(rename = "horasEnFeriados")]
    pub holiday_hours: f64,
    #[serde(rename = "turnos", default)]
    pub shifts: Vec<Shift>,
}
