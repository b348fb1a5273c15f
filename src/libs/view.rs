//! Console tables for schedules, reports and reference data.

use crate::libs::calendar::{CalendarWeek, MonthGrid};
use crate::libs::formatter::{format_duration, FormattedShift};
use crate::libs::reconcile::{employees_in, find_shifts, hours_by_store, shifts_in_view, sum_hours};
use crate::libs::report::{sum_hours as sum_report_hours, sum_period_totals, MonthlySummary, ReportRow};
use crate::libs::shift::{Employee, Holiday, Shift, Store};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

/// Marker appended to holiday day labels.
const HOLIDAY_MARK: &str = "*";

pub struct View {}

impl View {
    /// Weekly schedule: one row per employee, one column per day. Cells list
    /// every shift of the day, so a split shift shows as two lines.
    pub fn week(week: &CalendarWeek, shifts: &[Shift]) -> Result<()> {
        let visible: Vec<Shift> = shifts_in_view(shifts, week).into_iter().cloned().collect();

        let mut table = Table::new();
        let mut header = vec![Cell::new("EMPLOYEE")];
        for day in week.iter() {
            let mut label = day.label();
            if day.is_holiday {
                label.push_str(HOLIDAY_MARK);
            }
            header.push(Cell::new(&label));
        }
        header.push(Cell::new("TOTAL"));
        table.add_row(Row::new(header));

        for (employee_id, name) in employees_in(&visible) {
            let mut cells = vec![Cell::new(&name)];
            for day in week.iter() {
                let text = match day.date.as_date() {
                    Some(date) => find_shifts(Some(visible.as_slice()), employee_id, date)
                        .into_iter()
                        .map(Self::cell_text)
                        .collect::<Vec<_>>()
                        .join("\n"),
                    None => String::new(),
                };
                cells.push(Cell::new(&text));
            }
            cells.push(Cell::new(&sum_hours(Some(visible.as_slice()), employee_id)));
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }

    /// Month grid with the number of shifts per day. Days of neighbouring
    /// months are shown in parentheses.
    pub fn month(grid: &MonthGrid, shifts: &[Shift]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["lun", "mar", "mié", "jue", "vie", "sáb", "dom"]);

        for week in &grid.weeks {
            let cells = week
                .iter()
                .map(|day| {
                    let Some(date) = day.date.as_date() else {
                        return Cell::new("");
                    };
                    let mut text = if day.is_overflow {
                        format!("({})", day.day_number)
                    } else {
                        day.day_number.to_string()
                    };
                    if day.is_holiday {
                        text.push_str(HOLIDAY_MARK);
                    }
                    let count = shifts.iter().filter(|shift| shift.date == date).count();
                    if count > 0 && !day.is_overflow {
                        text.push_str(&format!("\n{} turnos", count));
                    }
                    Cell::new(&text)
                })
                .collect();
            table.add_row(Row::new(cells));
        }
        table.printstd();

        Ok(())
    }

    /// Report rows with a totals line. Overtime rows put the week in the
    /// date column and the overtime in the hours column.
    pub fn report(rows: &[ReportRow]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["EMPLOYEE", "DATE", "STORE", "ENTRY", "EXIT", "HOURS", "PERIOD TOTAL"]);

        for row in rows {
            match row {
                ReportRow::HoursWorked(shift) | ReportRow::HolidayShift(shift) => {
                    table.add_row(row![
                        shift.employee_name,
                        shift.date.format("%Y-%m-%d"),
                        shift.store,
                        shift.start,
                        shift.end,
                        format_duration(shift.hours_worked),
                        format_duration(shift.period_total)
                    ]);
                }
                ReportRow::Overtime(overtime) => {
                    table.add_row(row![
                        overtime.employee_name,
                        format!("week of {}", overtime.week_start.format("%Y-%m-%d")),
                        "",
                        "",
                        "",
                        format_duration(overtime.overtime),
                        format_duration(overtime.hours_worked)
                    ]);
                }
            }
        }
        table.add_row(row![
            "TOTAL",
            "",
            "",
            "",
            "",
            format_duration(sum_report_hours(rows)),
            format_duration(sum_period_totals(rows))
        ]);
        table.printstd();

        Ok(())
    }

    pub fn summaries(summaries: &[MonthlySummary]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "EMPLOYEE", "HOURS", "HOLIDAY DAYS", "HOLIDAY HOURS", "SHIFTS"]);
        for summary in summaries {
            table.add_row(row![
                summary.employee_id,
                summary.employee_name,
                format_duration(summary.total_hours),
                summary.holiday_days,
                format_duration(summary.holiday_hours),
                summary.shifts.len()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Hours per store for one employee, with the grand total last.
    pub fn profile(shifts: &[Shift], employee_id: i64) -> Result<()> {
        let breakdown = hours_by_store(shifts, employee_id);
        let total: f64 = breakdown.iter().map(|(_, hours)| hours).sum();

        let mut table = Table::new();
        table.add_row(row!["STORE", "HOURS"]);
        for (store, hours) in &breakdown {
            table.add_row(row![store, format_duration(*hours)]);
        }
        table.add_row(row!["TOTAL", format_duration(total)]);
        table.printstd();

        Ok(())
    }

    /// Every shift of one employee, oldest first.
    pub fn shifts(shifts: &[Shift]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "DATE", "STORE", "ENTRY", "EXIT", "HOURS"]);
        for shift in shifts {
            let formatted = FormattedShift::from(shift);
            table.add_row(row![
                formatted.id,
                formatted.date,
                formatted.store,
                formatted.start,
                formatted.end,
                formatted.hours
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stores(stores: &[Store]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "ADDRESS"]);
        for store in stores {
            table.add_row(row![
                store.id.map(|id| id.to_string()).unwrap_or_default(),
                store.name,
                store.address
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn holidays(holidays: &[Holiday]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["DATE", "DESCRIPTION"]);
        for holiday in holidays {
            table.add_row(row![holiday.date.format("%Y-%m-%d"), holiday.description]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "DNI", "COMPANY"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.full_name(),
                employee.dni,
                employee.company_name.clone().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// `HH:MM-HH:MM Store`, or the window alone when the store is unknown.
    fn cell_text(shift: &Shift) -> String {
        match &shift.store_name {
            Some(store) => format!("{} {}", shift.window(), store),
            None => shift.window().to_string(),
        }
    }
}
