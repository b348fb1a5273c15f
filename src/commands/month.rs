//! Month calendar with the number of shifts per day.

use super::input::parse_date;
use crate::api::ShiftBackend;
use crate::libs::{
    messages::Message,
    period::{PeriodContext, ViewMode},
    view::View,
};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the month calendar.
#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Any date of the month to show: `today` or `YYYY-MM-DD`
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Months to step forward
    #[arg(long, default_value_t = 0)]
    next: u32,

    /// Months to step back
    #[arg(long, default_value_t = 0, conflicts_with = "next")]
    prev: u32,
}

/// Shows the month grid with shift counts and holidays marked.
///
/// `--next`/`--prev` step from the month of `--date`. A legend is printed
/// when an in-month day is a holiday.
pub async fn cmd<B: ShiftBackend>(args: MonthArgs, backend: &B) -> Result<()> {
    let mut period = PeriodContext::new(parse_date(&args.date)?, ViewMode::Month);
    for _ in 0..args.next {
        period.next_month();
    }
    for _ in 0..args.prev {
        period.previous_month();
    }

    // Shifts and holidays are independent requests
    let (shifts, holidays) = tokio::try_join!(
        backend.list_month_shifts(period.year(), period.month()),
        backend.list_holidays()
    )?;
    let mut grid = period.grid();
    grid.mark_holidays(&holidays);

    msg_print!(Message::MonthHeader(period.title()), true);
    View::month(&grid, &shifts)?;
    if grid.weeks.iter().flat_map(|week| week.iter()).any(|day| day.is_holiday && !day.is_overflow) {
        msg_print!(Message::HolidayLegend);
    }

    Ok(())
}
