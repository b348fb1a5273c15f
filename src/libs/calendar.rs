//! Calendar partitioning for schedule views and report periods.
//!
//! Weeks always start on Monday and always hold exactly seven
//! [`CalendarDay`]s. Two month layouts are produced:
//!
//! - [`month_grid`]: full Monday-to-Sunday weeks covering the month, with
//!   days of the neighbouring months flagged `is_overflow`.
//! - [`month_weeks`]: only in-month days, split at Mondays. Short weeks are
//!   padded with empty days at the *front* by [`pad_week`]; this is the
//!   layout the weekly schedule steps through.
//!
//! Day and month names are Spanish, as shown in the schedule.

use crate::libs::shift::Holiday;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;

const WEEKDAY_NAMES: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];
const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Date of a calendar cell, or the padding sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayDate {
    Date(NaiveDate),
    Empty,
}

impl DayDate {
    /// The date, or `None` for padding.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DayDate::Date(date) => Some(*date),
            DayDate::Empty => None,
        }
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DayDate::Empty => f.write_str("empty"),
        }
    }
}

/// One cell of a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: DayDate,
    /// Spanish short weekday, `"lun"` to `"dom"`
    pub weekday_name: &'static str,
    pub day_number: u32,
    /// Spanish month name, lowercase
    pub month_name: &'static str,
    pub year: i32,
    /// Set by `mark_holidays`
    pub is_holiday: bool,
    /// Belongs to a neighbouring month in a month grid
    pub is_overflow: bool,
}

impl CalendarDay {
    /// In-month cell for `date`, not yet marked as a holiday.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date: DayDate::Date(date),
            weekday_name: weekday_name(date),
            day_number: date.day(),
            month_name: month_name(date),
            year: date.year(),
            is_holiday: false,
            is_overflow: false,
        }
    }

    /// Padding cell with no date.
    pub fn empty() -> Self {
        Self {
            date: DayDate::Empty,
            weekday_name: "",
            day_number: 0,
            month_name: "",
            year: 0,
            is_holiday: false,
            is_overflow: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date == DayDate::Empty
    }

    /// Short header label, `"lun 10"`; empty for padding cells.
    pub fn label(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} {}", self.weekday_name, self.day_number)
        }
    }
}

/// Seven consecutive cells, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    days: [CalendarDay; 7],
}

impl CalendarWeek {
    pub fn days(&self) -> &[CalendarDay; 7] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }

    /// Dates of the non-padding cells, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().filter_map(|day| day.date.as_date()).collect()
    }

    /// First non-padding date of the week.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.iter().find_map(|day| day.date.as_date())
    }

    /// Whether a non-padding cell holds `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.iter().any(|day| day.date == DayDate::Date(date))
    }

    /// Flags the cells whose date is in `holidays`.
    pub fn mark_holidays(&mut self, holidays: &[Holiday]) {
        for day in self.days.iter_mut() {
            if let Some(date) = day.date.as_date() {
                day.is_holiday = holidays.iter().any(|holiday| holiday.date == date);
            }
        }
    }
}

/// Every week intersecting one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub weeks: Vec<CalendarWeek>,
}

impl MonthGrid {
    /// Index of the week holding `date`.
    pub fn week_index(&self, date: NaiveDate) -> Option<usize> {
        self.weeks.iter().position(|week| week.contains(date))
    }

    pub fn mark_holidays(&mut self, holidays: &[Holiday]) {
        for week in self.weeks.iter_mut() {
            week.mark_holidays(holidays);
        }
    }
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// `"marzo 2025"`.
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

/// First day of the month of `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month of `date`, leap years included.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Moves `months` months forward (negative: backward), clamping the day to
/// the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    let moved = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    moved.unwrap_or(date)
}

/// The Monday-start week containing `date`.
pub fn week_of(date: NaiveDate) -> CalendarWeek {
    let monday = week_start(date);
    CalendarWeek {
        days: std::array::from_fn(|offset| CalendarDay::from_date(monday + Days::new(offset as u64))),
    }
}

/// Full weeks covering the month of `date`, neighbouring days flagged.
pub fn month_grid(date: NaiveDate) -> MonthGrid {
    let first = first_of_month(date);
    let last = last_of_month(date);
    let in_month = |day: NaiveDate| day.year() == first.year() && day.month() == first.month();

    let mut weeks = Vec::new();
    let mut cursor = week_start(first);
    while cursor <= last || in_month(cursor) {
        let mut week = week_of(cursor);
        for day in week.days.iter_mut() {
            if let Some(day_date) = day.date.as_date() {
                day.is_overflow = day_date < first || day_date > last;
            }
        }
        weeks.push(week);
        cursor = cursor + Days::new(7);
    }

    MonthGrid { first, last, weeks }
}

/// In-month dates of the month of `date`, split at every Monday.
///
/// The first chunk runs from the 1st up to the first Sunday, the last chunk
/// from the last Monday to the end of the month.
pub fn month_week_dates(date: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let last = last_of_month(date);
    let mut weeks: Vec<Vec<NaiveDate>> = Vec::new();
    let mut current = Vec::new();

    for day in first_of_month(date).iter_days().take_while(|day| *day <= last) {
        if day.weekday().num_days_from_monday() == 0 && !current.is_empty() {
            weeks.push(std::mem::take(&mut current));
        }
        current.push(day);
    }
    if !current.is_empty() {
        weeks.push(current);
    }

    weeks
}

/// Completes a short list of days to seven, inserting empty cells at the
/// front. Longer input keeps its last seven days.
pub fn pad_week(days: Vec<CalendarDay>) -> CalendarWeek {
    let missing = 7usize.saturating_sub(days.len());
    let skip = days.len().saturating_sub(7);
    let mut cells = std::iter::repeat_with(CalendarDay::empty)
        .take(missing)
        .chain(days.into_iter().skip(skip));

    CalendarWeek {
        days: std::array::from_fn(|_| cells.next().unwrap_or_else(CalendarDay::empty)),
    }
}

/// In-month weeks of the month of `date`, each padded to seven cells.
pub fn month_weeks(date: NaiveDate) -> Vec<CalendarWeek> {
    month_week_dates(date)
        .into_iter()
        .map(|dates| pad_week(dates.into_iter().map(CalendarDay::from_date).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_of_month_handles_leap_years() {
        assert_eq!(last_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2025, 2, 10)), date(2025, 2, 28));
        assert_eq!(last_of_month(date(2025, 12, 31)), date(2025, 12, 31));
    }

    #[test]
    fn shift_month_clamps_day() {
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2025, 3, 31), -1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2025, 12, 15), 1), date(2026, 1, 15));
    }

    #[test]
    fn pad_week_keeps_last_seven_of_long_input() {
        let days: Vec<CalendarDay> = date(2025, 3, 1).iter_days().take(9).map(CalendarDay::from_date).collect();
        let week = pad_week(days);
        assert_eq!(week.first_date(), Some(date(2025, 3, 3)));
    }
}
