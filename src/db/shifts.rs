//! Local SQLite implementation of the shift backend.
//!
//! [`LocalBackend`] plays the role of the shift service for offline use and
//! tests. It derives the same values the service does:
//!
//! - **Hours worked**: minutes between entry and exit, minus a 45 minute
//!   lunch when the shift starts no later than 12:00 and ends after 13:00.
//! - **Holiday flag**: looked up in the `holidays` table on every read.
//! - **Period totals**: per-employee sum over the rows of the same answer
//!   (the week for weekly lists, the range for reports).
//! - **Overtime**: weekly hours above the configured limit, per
//!   Monday-start week intersecting the report range.
//!
//! The connection is shared behind a `parking_lot::Mutex`; no lock is held
//! across an await point.

use crate::api::{BackendResult, ShiftBackend};
use crate::db::db::Db;
use crate::db::{employees, holidays, stores};
use crate::libs::calendar::{first_of_month, last_of_month, week_start};
use crate::libs::error::TransportError;
use crate::libs::report::{MonthlySummary, OvertimeRow, ReportQuery};
use crate::libs::shift::{Employee, Holiday, Shift, ShiftPayload, Store};
use crate::libs::time_of_day::{ShiftWindow, TimeOfDay};
use anyhow::Result;
use chrono::{Days, NaiveDate};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Weekly hours above which the overtime report lists an employee.
pub const DEFAULT_WEEKLY_HOURS_LIMIT: f64 = 48.0;

// Lunch break deducted from shifts that span midday
const LUNCH_MINUTES: u32 = 45;
const LUNCH_LATEST_START: TimeOfDay = TimeOfDay::hm(12, 0);
const LUNCH_EARLIEST_END: TimeOfDay = TimeOfDay::hm(13, 0);

const INSERT_SHIFT: &str = "INSERT INTO shifts (employee_id, company_id, store_id, date, start, end, hours_worked)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_SHIFT: &str = "UPDATE shifts
    SET employee_id = ?2, company_id = ?3, store_id = ?4, date = ?5, start = ?6, end = ?7, hours_worked = ?8
    WHERE id = ?1";
const DELETE_SHIFT: &str = "DELETE FROM shifts WHERE id = ?1";
const SELECT_SHIFT: &str = "SELECT s.id, s.employee_id, TRIM(COALESCE(e.name, '') || ' ' || COALESCE(e.surname, '')),
        s.company_id, e.company_name, s.store_id, st.name, s.date, s.start, s.end, s.hours_worked,
        EXISTS (SELECT 1 FROM holidays h WHERE h.date = s.date)
    FROM shifts s
    LEFT JOIN employees e ON e.id = s.employee_id
    LEFT JOIN stores st ON st.id = s.store_id";
const ORDER_SHIFTS: &str = "ORDER BY s.date, s.start, s.id";

/// Worked hours of a window after the lunch deduction.
///
/// # Arguments
///
/// * `window` - Accepted shift window, entry before exit
///
/// # Returns
///
/// Decimal hours, e.g. `8.25` for 08:00-17:00 (nine hours minus lunch).
pub fn hours_for(window: ShiftWindow) -> f64 {
    let mut minutes = window.span_minutes();
    if window.start <= LUNCH_LATEST_START && window.end > LUNCH_EARLIEST_END {
        minutes = minutes.saturating_sub(LUNCH_MINUTES);
    }
    minutes as f64 / 60.0
}

/// Reads a `HH:MM` text column. A value that does not parse is reported
/// as a conversion failure for that column.
fn time_column(row: &Row, idx: usize) -> rusqlite::Result<TimeOfDay> {
    let raw: String = row.get(idx)?;
    TimeOfDay::parse(&raw).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Maps a row of [`SELECT_SHIFT`] onto a [`Shift`]. `week_total` is filled
/// later by [`attach_totals`].
fn shift_from_row(row: &Row) -> rusqlite::Result<Shift> {
    Ok(Shift {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        employee_name: row.get(2)?,
        company_id: row.get(3)?,
        company_name: row.get(4)?,
        store_id: row.get(5)?,
        store_name: row.get(6)?,
        date: row.get(7)?,
        start: time_column(row, 8)?,
        end: time_column(row, 9)?,
        hours_worked: row.get(10)?,
        week_total: None,
        is_holiday: row.get(11)?,
    })
}

/// Sets `week_total` on every shift to the employee's sum over the list.
fn attach_totals(mut shifts: Vec<Shift>) -> Vec<Shift> {
    let totals = crate::libs::reconcile::week_totals(&shifts);
    for shift in shifts.iter_mut() {
        shift.week_total = totals.get(&shift.employee_id).copied();
    }
    shifts
}

/// Shift backend over a local SQLite database.
///
/// Clones share the same connection.
#[derive(Clone)]
pub struct LocalBackend {
    conn: Arc<Mutex<Connection>>,
    weekly_hours_limit: f64,
}

impl LocalBackend {
    /// Opens the database in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    /// Opens (or creates) the database at `path` and runs pending migrations.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    /// Throwaway database, migrated and seeded like a fresh file.
    pub fn in_memory() -> Result<Self> {
        Ok(Self::from_db(Db::in_memory()?))
    }

    fn from_db(db: Db) -> Self {
        Self {
            conn: Arc::new(Mutex::new(db.conn)),
            weekly_hours_limit: DEFAULT_WEEKLY_HOURS_LIMIT,
        }
    }

    /// Replaces the weekly limit used by the overtime report.
    ///
    /// # Arguments
    ///
    /// * `hours` - Weekly hours an employee may work before overtime starts
    pub fn with_weekly_limit(mut self, hours: f64) -> Self {
        self.weekly_hours_limit = hours;
        self
    }

    pub fn weekly_hours_limit(&self) -> f64 {
        self.weekly_hours_limit
    }

    /// Inserts a store.
    ///
    /// # Arguments
    ///
    /// * `store` - Store to insert; its `id` is ignored
    ///
    /// # Returns
    ///
    /// The stored copy with the `id` assigned by the database.
    pub fn add_store(&self, store: &Store) -> BackendResult<Store> {
        let conn = self.conn.lock();
        let id = stores::insert(&conn, store)?;
        Ok(Store {
            id: Some(id),
            ..store.clone()
        })
    }

    /// Overwrites the name and address of store `id`.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the store was updated, or [`TransportError::NotFound`]
    /// when no store has that id.
    pub fn update_store(&self, id: i64, store: &Store) -> BackendResult<()> {
        let conn = self.conn.lock();
        match stores::update(&conn, id, store)? {
            0 => Err(TransportError::NotFound { entity: "store", id }),
            _ => Ok(()),
        }
    }

    /// Deletes store `id`.
    ///
    /// Fails with a storage error while shifts still reference the store,
    /// and with [`TransportError::NotFound`] when the store does not exist.
    pub fn delete_store(&self, id: i64) -> BackendResult<()> {
        let conn = self.conn.lock();
        match stores::delete(&conn, id)? {
            0 => Err(TransportError::NotFound { entity: "store", id }),
            _ => Ok(()),
        }
    }

    /// Inserts an employee and returns it with its new id.
    pub fn add_employee(&self, employee: &Employee) -> BackendResult<Employee> {
        let conn = self.conn.lock();
        let id = employees::insert(&conn, employee)?;
        Ok(Employee { id, ..employee.clone() })
    }

    /// Adds a holiday, or renames the one already on that date.
    pub fn add_holiday(&self, holiday: &Holiday) -> BackendResult<()> {
        let conn = self.conn.lock();
        holidays::upsert(&conn, holiday)?;
        Ok(())
    }

    /// Removes the holiday on `date`.
    ///
    /// # Returns
    ///
    /// `true` if a holiday was removed, `false` if the date had none.
    pub fn remove_holiday(&self, date: NaiveDate) -> BackendResult<bool> {
        let conn = self.conn.lock();
        Ok(holidays::delete(&conn, date)? > 0)
    }

    /// Runs [`SELECT_SHIFT`] with an extra `WHERE` clause and the shared ordering.
    fn query_shifts(&self, filter: &str, values: Vec<rusqlite::types::Value>) -> BackendResult<Vec<Shift>> {
        let conn = self.conn.lock();
        let sql = format!("{} {} {}", SELECT_SHIFT, filter, ORDER_SHIFTS);
        let mut stmt = conn.prepare(&sql)?;
        let shifts = stmt
            .query_map(params_from_iter(values), shift_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(shifts)
    }

    /// Single shift by id, or [`TransportError::NotFound`].
    fn get_shift(&self, id: i64) -> BackendResult<Shift> {
        let conn = self.conn.lock();
        let sql = format!("{} WHERE s.id = ?1", SELECT_SHIFT);
        conn.query_row(&sql, params![id], shift_from_row)
            .optional()?
            .ok_or(TransportError::NotFound { entity: "shift", id })
    }

    /// Shifts in `[start, end]`, restricted to `employee_ids` unless empty.
    fn shifts_between(&self, start: NaiveDate, end: NaiveDate, employee_ids: &[i64]) -> BackendResult<Vec<Shift>> {
        use rusqlite::types::Value;

        let mut filter = String::from("WHERE s.date BETWEEN ?1 AND ?2");
        let mut values = vec![
            Value::Text(start.format("%Y-%m-%d").to_string()),
            Value::Text(end.format("%Y-%m-%d").to_string()),
        ];
        if !employee_ids.is_empty() {
            let placeholders: Vec<String> = (0..employee_ids.len()).map(|i| format!("?{}", i + 3)).collect();
            filter.push_str(&format!(" AND s.employee_id IN ({})", placeholders.join(", ")));
            values.extend(employee_ids.iter().map(|id| Value::Integer(*id)));
        }
        self.query_shifts(&filter, values)
    }

    /// Checks the references of a payload and resolves the company from the
    /// employee when the payload has none. Mirrors the service's rejections.
    fn check_payload(&self, payload: &ShiftPayload) -> BackendResult<Option<i64>> {
        if payload.window.start >= payload.window.end {
            return Err(TransportError::Rejected("exit time must be after entry time".to_string()));
        }
        let conn = self.conn.lock();
        let employee = employees::get(&conn, payload.employee_id)?.ok_or(TransportError::NotFound {
            entity: "employee",
            id: payload.employee_id,
        })?;
        if stores::get(&conn, payload.store_id)?.is_none() {
            return Err(TransportError::NotFound {
                entity: "store",
                id: payload.store_id,
            });
        }
        Ok(payload.company_id.or(employee.company_id))
    }
}

impl ShiftBackend for LocalBackend {
    /// Monday to Sunday around `week_start`, with weekly totals attached.
    async fn list_shifts(&self, week_start: NaiveDate) -> BackendResult<Vec<Shift>> {
        let monday = crate::libs::calendar::week_start(week_start);
        let sunday = monday + Days::new(6);
        tracing::debug!(%monday, %sunday, "listing local shifts");
        Ok(attach_totals(self.shifts_between(monday, sunday, &[])?))
    }

    async fn list_shifts_for_employee(&self, employee_id: i64) -> BackendResult<Vec<Shift>> {
        self.query_shifts("WHERE s.employee_id = ?1", vec![employee_id.into()])
    }

    /// Every shift of the month. Week totals are left empty since the rows
    /// span several weeks.
    async fn list_month_shifts(&self, year: i32, month: u32) -> BackendResult<Vec<Shift>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| TransportError::Rejected(format!("invalid month {}-{}", year, month)))?;
        self.shifts_between(first, last_of_month(first), &[])
    }

    /// Validates the references, computes hours worked and inserts the row.
    ///
    /// # Returns
    ///
    /// The stored shift as a read would return it: names joined, holiday
    /// flag set, `week_total` empty.
    async fn create_shift(&self, payload: &ShiftPayload) -> BackendResult<Shift> {
        let company_id = self.check_payload(payload)?;
        let id = {
            let conn = self.conn.lock();
            conn.execute(
                INSERT_SHIFT,
                params![
                    payload.employee_id,
                    company_id,
                    payload.store_id,
                    payload.date,
                    payload.window.start.to_string(),
                    payload.window.end.to_string(),
                    hours_for(payload.window)
                ],
            )?;
            conn.last_insert_rowid()
        };
        tracing::debug!(id, "created local shift");
        self.get_shift(id)
    }

    /// Same checks as [`Self::create_shift`], then overwrites shift `id`.
    async fn update_shift(&self, id: i64, payload: &ShiftPayload) -> BackendResult<Shift> {
        let company_id = self.check_payload(payload)?;
        let affected = {
            let conn = self.conn.lock();
            conn.execute(
                UPDATE_SHIFT,
                params![
                    id,
                    payload.employee_id,
                    company_id,
                    payload.store_id,
                    payload.date,
                    payload.window.start.to_string(),
                    payload.window.end.to_string(),
                    hours_for(payload.window)
                ],
            )?
        };
        if affected == 0 {
            return Err(TransportError::NotFound { entity: "shift", id });
        }
        self.get_shift(id)
    }

    async fn delete_shift(&self, id: i64) -> BackendResult<()> {
        let affected = self.conn.lock().execute(DELETE_SHIFT, params![id])?;
        if affected == 0 {
            return Err(TransportError::NotFound { entity: "shift", id });
        }
        Ok(())
    }

    async fn list_holidays(&self) -> BackendResult<Vec<Holiday>> {
        Ok(holidays::list(&self.conn.lock())?)
    }

    async fn list_stores(&self) -> BackendResult<Vec<Store>> {
        Ok(stores::list(&self.conn.lock())?)
    }

    async fn list_employees(&self) -> BackendResult<Vec<Employee>> {
        Ok(employees::list(&self.conn.lock())?)
    }

    async fn hours_worked(&self, query: &ReportQuery) -> BackendResult<Vec<Shift>> {
        Ok(attach_totals(self.shifts_between(query.start, query.end, &query.employee_ids)?))
    }

    async fn holiday_shifts(&self, query: &ReportQuery) -> BackendResult<Vec<Shift>> {
        let shifts = self
            .shifts_between(query.start, query.end, &query.employee_ids)?
            .into_iter()
            .filter(|shift| shift.is_holiday)
            .collect();
        Ok(attach_totals(shifts))
    }

    async fn overtime(&self, query: &ReportQuery) -> BackendResult<Vec<OvertimeRow>> {
        // Whole weeks are summed even when the range cuts one.
        let first_monday = week_start(query.start);
        let last_sunday = week_start(query.end) + Days::new(6);
        let shifts = self.shifts_between(first_monday, last_sunday, &query.employee_ids)?;

        // (employee, Monday) -> (name, hours)
        let mut weeks: BTreeMap<(i64, NaiveDate), (String, f64)> = BTreeMap::new();
        for shift in &shifts {
            let entry = weeks
                .entry((shift.employee_id, week_start(shift.date)))
                .or_insert_with(|| (shift.employee_name.clone(), 0.0));
            entry.1 += shift.hours_worked.unwrap_or(0.0);
        }

        let rows = weeks
            .into_iter()
            .filter(|(_, (_, hours))| *hours > self.weekly_hours_limit)
            .map(|((employee_id, week_start), (employee_name, hours))| OvertimeRow {
                employee_id,
                employee_name,
                week_start,
                hours_worked: hours,
                overtime: hours - self.weekly_hours_limit,
            })
            .collect();
        Ok(rows)
    }

    /// One summary per employee, including employees with no shifts.
    ///
    /// An empty `employee_ids` means every employee. Holiday days count
    /// distinct dates, so a split shift on a holiday is one day.
    async fn monthly_summary(&self, year: i32, month: u32, employee_ids: &[i64]) -> BackendResult<Vec<MonthlySummary>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| TransportError::Rejected(format!("invalid month {}-{}", year, month)))?;
        let ids = if employee_ids.is_empty() {
            employees::ids(&self.conn.lock())?
        } else {
            employee_ids.to_vec()
        };
        let shifts = self.shifts_between(first_of_month(first), last_of_month(first), &ids)?;

        let mut summaries = Vec::with_capacity(ids.len());
        for id in ids {
            let employee = employees::get(&self.conn.lock(), id)?.ok_or(TransportError::NotFound { entity: "employee", id })?;
            let own: Vec<Shift> = shifts.iter().filter(|shift| shift.employee_id == id).cloned().collect();

            let holiday_shifts: Vec<&Shift> = own.iter().filter(|shift| shift.is_holiday).collect();
            let mut holiday_dates: Vec<NaiveDate> = holiday_shifts.iter().map(|shift| shift.date).collect();
            holiday_dates.dedup();

            summaries.push(MonthlySummary {
                employee_id: id,
                employee_name: employee.full_name(),
                total_hours: own.iter().map(|shift| shift.hours_worked.unwrap_or(0.0)).sum(),
                holiday_days: holiday_dates.len() as u32,
                holiday_hours: holiday_shifts.iter().map(|shift| shift.hours_worked.unwrap_or(0.0)).sum(),
                shifts: own,
            });
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> ShiftWindow {
        ShiftWindow::new(TimeOfDay::parse(start).unwrap(), TimeOfDay::parse(end).unwrap())
    }

    #[test]
    fn lunch_is_deducted_only_when_spanned() {
        assert_eq!(hours_for(window("08:00", "17:00")), 8.25);
        assert_eq!(hours_for(window("08:00", "12:00")), 4.0);
        assert_eq!(hours_for(window("12:01", "18:00")), 359.0 / 60.0);
        assert_eq!(hours_for(window("12:00", "13:00")), 1.0);
    }
}
