//! The period a schedule view is looking at.
//!
//! A [`PeriodContext`] is a plain value owned by whoever renders the view.
//! Week navigation steps through the in-month weeks of
//! [`month_weeks`](crate::libs::calendar::month_weeks): stepping past the
//! last week of a month lands on the first week of the next one, and
//! stepping before the first week lands on the last week of the previous
//! month. The reference date always sits on the first in-month day of the
//! selected week.

use crate::libs::calendar::{self, CalendarWeek, MonthGrid};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

/// Which period a schedule view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// One in-month week, Monday to Sunday
    #[default]
    Week,
    /// The whole month grid
    Month,
}

/// Reference date plus view mode.
///
/// Navigation mutates the context in place. In the month view the reference
/// date is always the first of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodContext {
    reference: NaiveDate,
    view: ViewMode,
}

impl PeriodContext {
    /// Creates a context looking at `reference`.
    ///
    /// # Arguments
    ///
    /// * `reference` - Any date inside the period to show
    /// * `view` - Week or month view; the month view snaps `reference` to
    ///   the first of its month
    pub fn new(reference: NaiveDate, view: ViewMode) -> Self {
        let mut context = Self { reference, view };
        if view == ViewMode::Month {
            context.reference = calendar::first_of_month(reference);
        }
        context
    }

    /// Context for today's date.
    pub fn today(view: ViewMode) -> Self {
        Self::new(chrono::Local::now().date_naive(), view)
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Calendar year of the reference date.
    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    /// Switches view. Entering the month view moves the reference to the
    /// first of the month so a later week step starts from the top.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        if view == ViewMode::Month {
            self.reference = calendar::first_of_month(self.reference);
        }
    }

    /// The in-month week holding the reference date, padded to seven days.
    pub fn week(&self) -> CalendarWeek {
        let weeks = calendar::month_weeks(self.reference);
        let index = self.week_index(&weeks);
        weeks
            .into_iter()
            .nth(index)
            .unwrap_or_else(|| calendar::week_of(self.reference))
    }

    /// Monday of the week the reference date falls in; the key the backend
    /// uses for weekly shift lists.
    pub fn week_start(&self) -> NaiveDate {
        calendar::week_start(self.reference)
    }

    /// Full month grid around the reference date, Monday-first.
    pub fn grid(&self) -> MonthGrid {
        calendar::month_grid(self.reference)
    }

    /// Spanish month title, e.g. `"marzo 2025"`.
    pub fn title(&self) -> String {
        calendar::month_title(self.reference)
    }

    /// Steps to the next in-month week.
    ///
    /// From the last week of a month the reference moves to the first of
    /// the following month. Within a month it moves to the first in-month
    /// day of the next week, so a week that starts on a Wednesday the 1st
    /// is entered on that Wednesday.
    pub fn next_week(&mut self) {
        let weeks = calendar::month_weeks(self.reference);
        let index = self.week_index(&weeks);
        self.reference = match weeks.get(index + 1).and_then(CalendarWeek::first_date) {
            Some(first) => first,
            None => calendar::first_of_month(calendar::shift_month(self.reference, 1)),
        };
    }

    /// Steps to the previous in-month week.
    ///
    /// From the first week of a month the reference moves to the first
    /// in-month day of the previous month's last week. The reference is
    /// left as is if that month has no weeks, which the calendar never
    /// produces.
    pub fn previous_week(&mut self) {
        let weeks = calendar::month_weeks(self.reference);
        let index = self.week_index(&weeks);
        let target = match index.checked_sub(1) {
            Some(previous) => weeks.get(previous).and_then(CalendarWeek::first_date),
            None => {
                let previous_month = calendar::shift_month(calendar::first_of_month(self.reference), -1);
                calendar::month_weeks(previous_month)
                    .last()
                    .and_then(CalendarWeek::first_date)
            }
        };
        if let Some(first) = target {
            self.reference = first;
        }
    }

    /// Moves one month forward.
    ///
    /// The day of month is clamped to the target month's length, e.g.
    /// January 31 becomes February 28. The month view snaps to the first.
    pub fn next_month(&mut self) {
        self.reference = calendar::shift_month(self.reference, 1);
        if self.view == ViewMode::Month {
            self.reference = calendar::first_of_month(self.reference);
        }
    }

    /// Moves one month back, with the same clamping as [`Self::next_month`].
    pub fn previous_month(&mut self) {
        self.reference = calendar::shift_month(self.reference, -1);
        if self.view == ViewMode::Month {
            self.reference = calendar::first_of_month(self.reference);
        }
    }

    /// Index of the week holding the reference date, or the first week.
    fn week_index(&self, weeks: &[CalendarWeek]) -> usize {
        weeks
            .iter()
            .position(|week| week.contains(self.reference))
            .unwrap_or(0)
    }
}
