//! `holidays` table.

use crate::libs::shift::Holiday;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result};

const UPSERT_HOLIDAY: &str = "INSERT INTO holidays (date, description) VALUES (?1, ?2)
    ON CONFLICT(date) DO UPDATE SET description = excluded.description";
const DELETE_HOLIDAY: &str = "DELETE FROM holidays WHERE date = ?1";
const SELECT_HOLIDAYS: &str = "SELECT date, description FROM holidays ORDER BY date";

/// Adds a holiday, replacing the description of an existing date.
pub fn upsert(conn: &Connection, holiday: &Holiday) -> Result<()> {
    conn.execute(UPSERT_HOLIDAY, params![holiday.date, holiday.description])?;
    Ok(())
}

/// Delete the holiday on `date`, returning the number of rows removed
pub fn delete(conn: &Connection, date: NaiveDate) -> Result<usize> {
    conn.execute(DELETE_HOLIDAY, params![date])
}

/// All holidays, ordered by date
pub fn list(conn: &Connection) -> Result<Vec<Holiday>> {
    let mut stmt = conn.prepare(SELECT_HOLIDAYS)?;
    let holidays = stmt
        .query_map([], |row| {
            Ok(Holiday {
                date: row.get(0)?,
                description: row.get(1)?,
            })
        })?
        .collect();
    holidays
}
