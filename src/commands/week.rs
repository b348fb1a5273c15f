//! Weekly schedule.
//!
//! Weeks are the in-month weeks of the reference date's month, so the first
//! and last week of a month may be short; stepping with `--next`/`--prev`
//! crosses into the neighbouring month.
//!
//! ```bash
//! turnos week
//! turnos week --date 2025-03-31 --next 1
//! ```

use super::input::parse_date;
use crate::api::ShiftBackend;
use crate::libs::{
    messages::Message,
    period::{PeriodContext, ViewMode},
    reconcile::shifts_in_view,
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the weekly schedule.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any date of the week to show: `today` or `YYYY-MM-DD`
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Weeks to step forward from the date
    #[arg(long, default_value_t = 0)]
    next: u32,

    /// Weeks to step back from the date
    #[arg(long, default_value_t = 0, conflicts_with = "next")]
    prev: u32,
}

/// Executes the weekly schedule command.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `backend` - Source of shifts and holidays
///
/// # Returns
///
/// Returns `Ok(())` once the week is printed, including when it has no
/// shifts, or an error if the date does not parse or a request fails.
pub async fn cmd<B: ShiftBackend>(args: WeekArgs, backend: &B) -> Result<()> {
    let mut period = PeriodContext::new(parse_date(&args.date)?, ViewMode::Week);
    for _ in 0..args.next {
        period.next_week();
    }
    for _ in 0..args.prev {
        period.previous_week();
    }

    let (shifts, holidays) = tokio::try_join!(backend.list_shifts(period.week_start()), backend.list_holidays())?;
    let mut week = period.week();
    week.mark_holidays(&holidays);

    // Header names the first in-month day of the week
    let first = week.iter().find(|day| !day.is_empty()).map(|day| day.label()).unwrap_or_default();
    msg_print!(Message::WeekHeader(period.title(), first), true);

    if shifts_in_view(&shifts, &week).is_empty() {
        msg_info!(Message::NoShiftsInPeriod);
        return Ok(());
    }

    View::week(&week, &shifts)?;
    if week.iter().any(|day| day.is_holiday) {
        msg_print!(Message::HolidayLegend);
    }

    Ok(())
}
