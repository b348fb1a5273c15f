//! One employee's worked hours broken down by store.

use super::input::parse_date;
use crate::api::ShiftBackend;
use crate::libs::{messages::Message, view::View};
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the per-store hours profile.
///
/// Both bounds are optional and inclusive. Dates take `today` or
/// `YYYY-MM-DD`.
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Employee ID
    employee: i64,

    /// Only shifts on or after this date
    #[arg(long)]
    from: Option<String>,

    /// Only shifts on or before this date
    #[arg(long)]
    to: Option<String>,
}

/// Prints one employee's hours per store, in store order, with a total row.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `backend` - Source of the employee directory and the shifts
///
/// # Returns
///
/// Returns `Ok(())` once the table is printed, or an error when the
/// employee is unknown or a date does not parse.
pub async fn cmd<B: ShiftBackend>(args: ProfileArgs, backend: &B) -> Result<()> {
    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;

    let (employees, mut shifts) = tokio::try_join!(backend.list_employees(), backend.list_shifts_for_employee(args.employee))?;
    let employee = employees
        .iter()
        .find(|employee| employee.id == args.employee)
        .ok_or_else(|| msg_error_anyhow!(Message::EmployeeNotFound(args.employee)))?;

    shifts.retain(|shift| from.map_or(true, |from| shift.date >= from) && to.map_or(true, |to| shift.date <= to));

    msg_print!(Message::ProfileHeader(employee.full_name()), true);
    if shifts.is_empty() {
        msg_info!(Message::NoShiftsInPeriod);
        return Ok(());
    }
    View::profile(&shifts, args.employee)
}
