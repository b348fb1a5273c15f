//! Placing raw shift records into schedule cells and summing them.
//!
//! Every lookup accepts an absent list: "no shifts loaded yet" and "no shift
//! that day" are normal states, never errors.

use crate::libs::calendar::CalendarWeek;
use crate::libs::formatter::format_duration;
use crate::libs::shift::{Holiday, Shift};
use crate::libs::store::name_order;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// First record for `(employee_id, date)`.
pub fn find_shift(shifts: Option<&[Shift]>, employee_id: i64, date: NaiveDate) -> Option<&Shift> {
    shifts?
        .iter()
        .find(|shift| shift.employee_id == employee_id && shift.date == date)
}

/// Every record for `(employee_id, date)`, in list order. A persisted split
/// shift shows up here as two entries.
pub fn find_shifts(shifts: Option<&[Shift]>, employee_id: i64, date: NaiveDate) -> Vec<&Shift> {
    shifts
        .unwrap_or_default()
        .iter()
        .filter(|shift| shift.employee_id == employee_id && shift.date == date)
        .collect()
}

/// Raw decimal sum of one employee's worked hours. Missing values count as 0.
pub fn total_hours(shifts: Option<&[Shift]>, employee_id: i64) -> f64 {
    shifts
        .unwrap_or_default()
        .iter()
        .filter(|shift| shift.employee_id == employee_id)
        .map(|shift| shift.hours_worked.unwrap_or(0.0))
        .sum()
}

/// [`total_hours`] rendered as `HH:MM`.
pub fn sum_hours(shifts: Option<&[Shift]>, employee_id: i64) -> String {
    format_duration(total_hours(shifts, employee_id))
}

pub fn is_holiday(date: NaiveDate, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|holiday| holiday.date == date)
}

/// Hours per store for one employee, stores in store order. Shifts with no
/// store are grouped under `"-"`.
pub fn hours_by_store(shifts: &[Shift], employee_id: i64) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for shift in shifts.iter().filter(|shift| shift.employee_id == employee_id) {
        let store = shift.store_name.clone().unwrap_or_else(|| "-".to_string());
        *totals.entry(store).or_default() += shift.hours_worked.unwrap_or(0.0);
    }

    let mut breakdown: Vec<(String, f64)> = totals.into_iter().collect();
    breakdown.sort_by(|a, b| name_order(&a.0, &b.0));
    breakdown
}

/// Per-employee hour totals over a list of shifts.
pub fn week_totals(shifts: &[Shift]) -> BTreeMap<i64, f64> {
    let mut totals = BTreeMap::new();
    for shift in shifts {
        *totals.entry(shift.employee_id).or_insert(0.0) += shift.hours_worked.unwrap_or(0.0);
    }
    totals
}

/// Records dated on one of the week's non-padding days.
pub fn shifts_in_view<'a>(shifts: &'a [Shift], week: &CalendarWeek) -> Vec<&'a Shift> {
    shifts.iter().filter(|shift| week.contains(shift.date)).collect()
}

/// Distinct employees appearing in the shifts, first appearance order, with
/// the name the backend attached to their records.
pub fn employees_in(shifts: &[Shift]) -> Vec<(i64, String)> {
    let mut seen: Vec<(i64, String)> = Vec::new();
    for shift in shifts {
        if !seen.iter().any(|(id, _)| *id == shift.employee_id) {
            seen.push((shift.employee_id, shift.employee_name.clone()));
        }
    }
    seen
}
