//! Holiday catalog listing.

use crate::api::ShiftBackend;
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;
use chrono::Datelike;
use clap::Args;

/// Command-line arguments for the holidays command.
#[derive(Debug, Args)]
pub struct HolidaysArgs {
    /// Only holidays of this year
    #[arg(short, long)]
    year: Option<i32>,
}

/// Prints holidays sorted by date, optionally restricted to one year.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `backend` - Where the holiday catalog comes from
pub async fn cmd<B: ShiftBackend>(args: HolidaysArgs, backend: &B) -> Result<()> {
    let mut holidays = backend.list_holidays().await?;
    if let Some(year) = args.year {
        holidays.retain(|holiday| holiday.date.year() == year);
    }
    holidays.sort_by_key(|holiday| holiday.date);

    msg_print!(Message::HolidaysHeader, true);
    View::holidays(&holidays)
}
