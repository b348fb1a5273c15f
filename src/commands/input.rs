//! Parsing of command-line values shared by several commands.

use crate::libs::calendar::first_of_month;
use crate::libs::messages::Message;
use crate::libs::shift::WindowDraft;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// `today` (any case) or `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

/// `current` (any case) or `YYYY-MM`, as the first day of that month.
pub fn parse_month(value: &str) -> Result<NaiveDate> {
    if value.eq_ignore_ascii_case("current") {
        return Ok(first_of_month(Local::now().date_naive()));
    }
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| msg_error_anyhow!(Message::InvalidMonth(value.to_string())))
}

/// Comma-separated employee ids. `None` or a blank list means every employee.
pub fn parse_employee_ids(value: Option<&str>) -> Result<Vec<i64>> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(Vec::new());
    };
    value
        .split(',')
        .map(|id| {
            id.trim()
                .parse::<i64>()
                .map_err(|_| msg_error_anyhow!(Message::InvalidEmployeeList(value.to_string())))
        })
        .collect()
}

/// `HH:MM-HH:MM` split into its two raw times. The times themselves are
/// left for the validator; only the separator is checked here.
pub fn parse_window(value: &str) -> Result<WindowDraft> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidWindow(value.to_string())))?;
    Ok(WindowDraft::new(start.trim(), end.trim()))
}
