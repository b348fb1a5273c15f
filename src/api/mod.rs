//! Storage backends for shifts and the catalogs around them.
//!
//! Everything the schedule needs from the outside world goes through
//! [`ShiftBackend`]. Two implementations ship:
//!
//! - [`HttpBackend`]: the REST service (`/api/turnos`, `/api/feriados`,
//!   `/api/tiendas`, `/api/colaboradores`).
//! - [`LocalBackend`](crate::db::shifts::LocalBackend): a SQLite file in the
//!   data directory that computes the same derived values the service does.
//!
//! Commands are generic over the trait and the backend is picked once from
//! the configuration.

use crate::libs::error::TransportError;
use crate::libs::report::{MonthlySummary, OvertimeRow, ReportQuery};
use crate::libs::shift::{Employee, Holiday, Shift, ShiftPayload, Store};
use chrono::NaiveDate;

pub mod http;

pub use http::HttpBackend;

/// Result of a backend call.
pub type BackendResult<T> = Result<T, TransportError>;

/// Contract of the shift storage collaborator.
///
/// Calls are never retried here; a failure surfaces to the caller as a
/// [`TransportError`].
#[allow(async_fn_in_trait)]
pub trait ShiftBackend {
    /// All shifts touching the week that starts on `week_start` (a Monday).
    async fn list_shifts(&self, week_start: NaiveDate) -> BackendResult<Vec<Shift>>;

    /// Every shift of one employee, any date.
    async fn list_shifts_for_employee(&self, employee_id: i64) -> BackendResult<Vec<Shift>>;

    /// Every shift dated inside the month.
    ///
    /// # Arguments
    ///
    /// * `year` - Calendar year
    /// * `month` - Month number, 1 to 12
    async fn list_month_shifts(&self, year: i32, month: u32) -> BackendResult<Vec<Shift>>;

    /// Stores a new shift.
    ///
    /// # Returns
    ///
    /// The shift as stored, with its id, names and hours worked filled in.
    async fn create_shift(&self, payload: &ShiftPayload) -> BackendResult<Shift>;

    /// Overwrites shift `id` with `payload` and returns the stored result.
    async fn update_shift(&self, id: i64, payload: &ShiftPayload) -> BackendResult<Shift>;

    /// Deletes shift `id`.
    async fn delete_shift(&self, id: i64) -> BackendResult<()>;

    /// The holiday catalog, sorted by date.
    async fn list_holidays(&self) -> BackendResult<Vec<Holiday>>;

    /// Stores in store order ("Tienda N" first, by N).
    async fn list_stores(&self) -> BackendResult<Vec<Store>>;

    /// The employee directory.
    async fn list_employees(&self) -> BackendResult<Vec<Employee>>;

    /// Shifts in the report range with their period totals.
    async fn hours_worked(&self, query: &ReportQuery) -> BackendResult<Vec<Shift>>;

    /// Shifts in the report range that fall on a holiday.
    async fn holiday_shifts(&self, query: &ReportQuery) -> BackendResult<Vec<Shift>>;

    /// One row per employee and week whose hours exceed the weekly limit.
    async fn overtime(&self, query: &ReportQuery) -> BackendResult<Vec<OvertimeRow>>;

    /// Per-employee totals for a month.
    ///
    /// # Arguments
    ///
    /// * `year` - Calendar year
    /// * `month` - Month number, 1 to 12
    /// * `employee_ids` - Employees to include; empty means all
    async fn monthly_summary(&self, year: i32, month: u32, employee_ids: &[i64]) -> BackendResult<Vec<MonthlySummary>>;
}
