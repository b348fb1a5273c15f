//! `employees` table.

use crate::libs::shift::Employee;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, surname, dni, company_id, company_name) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EMPLOYEES: &str = "SELECT id, name, surname, dni, company_id, company_name FROM employees ORDER BY name, surname";
const SELECT_EMPLOYEE_BY_ID: &str = "SELECT id, name, surname, dni, company_id, company_name FROM employees WHERE id = ?1";
const SELECT_EMPLOYEE_IDS: &str = "SELECT id FROM employees ORDER BY id";

fn employee_from_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        dni: row.get(3)?,
        company_id: row.get(4)?,
        company_name: row.get(5)?,
    })
}

/// Inserts the employee, ignoring `employee.id`, and returns the new id.
pub fn insert(conn: &Connection, employee: &Employee) -> Result<i64> {
    conn.execute(
        INSERT_EMPLOYEE,
        params![
            employee.name,
            employee.surname,
            employee.dni,
            employee.company_id,
            employee.company_name
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Get an employee by id
pub fn get(conn: &Connection, id: i64) -> Result<Option<Employee>> {
    conn.query_row(SELECT_EMPLOYEE_BY_ID, params![id], employee_from_row).optional()
}

/// All employees, ordered by name then surname
pub fn list(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare(SELECT_EMPLOYEES)?;
    let employees = stmt.query_map([], employee_from_row)?.collect();
    employees
}

/// Ids of every employee, ascending
pub fn ids(conn: &Connection) -> Result<Vec<i64>> {
    let mut stmt = conn.prepare(SELECT_EMPLOYEE_IDS)?;
    let ids = stmt.query_map([], |row| row.get(0))?.collect();
    ids
}
