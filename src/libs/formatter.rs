//! Hour formatting for schedules and reports.
//!
//! Worked hours arrive from the backend as decimal hours (`7.5`). Everything
//! shown to the user goes through [`format_duration`], which renders the
//! zero-padded `HH:MM` form.
//!
//! ## Examples
//!
//! ```rust
//! use turnos::libs::formatter::format_duration;
//!
//! assert_eq!(format_duration(7.5), "07:30");
//! assert_eq!(format_duration(1.999), "02:00");
//! assert_eq!(format_duration(-3.0), "00:00");
//! ```

use crate::libs::shift::Shift;
use serde::{Deserialize, Serialize};

/// A shift with every value pre-rendered for tables and exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedShift {
    pub id: i64,
    pub date: String,
    pub store: String,
    pub start: String,
    pub end: String,
    pub hours: String,
}

impl From<&Shift> for FormattedShift {
    fn from(shift: &Shift) -> Self {
        Self {
            id: shift.id.unwrap_or(0),
            date: shift.date.format("%Y-%m-%d").to_string(),
            store: shift.store_name.clone().unwrap_or_else(|| "-".to_string()),
            start: shift.start.to_string(),
            end: shift.end.to_string(),
            hours: format_optional(shift.hours_worked),
        }
    }
}

/// Formats a decimal hour count as `HH:MM`.
///
/// The integer part is floored, the fraction is rounded to the nearest
/// minute. A rounding that reaches 60 minutes carries into the hour field.
/// Zero, negative and non-finite input all yield `"00:00"`.
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "00:00".to_string();
    }

    let mut whole = hours.floor() as u64;
    let mut minutes = ((hours - hours.floor()) * 60.0).round() as u64;
    // Rounding 59.5+ minutes up must not print "01:60".
    whole += minutes / 60;
    minutes %= 60;

    format!("{:02}:{:02}", whole, minutes)
}

/// Same as [`format_duration`] with a missing value counted as zero.
pub fn format_optional(hours: Option<f64>) -> String {
    format_duration(hours.unwrap_or(0.0))
}

/// Rounds decimal hours to two places for exports.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
