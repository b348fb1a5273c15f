//! `stores` table.

use crate::libs::shift::Store;
use crate::libs::store::sort_stores;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

const INSERT_STORE: &str = "INSERT INTO stores (name, address) VALUES (?1, ?2)";
const UPDATE_STORE: &str = "UPDATE stores SET name = ?2, address = ?3 WHERE id = ?1";
const DELETE_STORE: &str = "DELETE FROM stores WHERE id = ?1";
const SELECT_STORES: &str = "SELECT id, name, address FROM stores";
const SELECT_STORE_BY_ID: &str = "SELECT id, name, address FROM stores WHERE id = ?1";

fn store_from_row(row: &Row) -> Result<Store> {
    Ok(Store {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
    })
}

/// Insert a store and return its id
pub fn insert(conn: &Connection, store: &Store) -> Result<i64> {
    conn.execute(INSERT_STORE, params![store.name, store.address])?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of rows touched, 0 when the id is unknown.
pub fn update(conn: &Connection, id: i64, store: &Store) -> Result<usize> {
    conn.execute(UPDATE_STORE, params![id, store.name, store.address])
}

/// Delete a store, returning the number of rows removed
pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute(DELETE_STORE, params![id])
}

/// Get a store by id
pub fn get(conn: &Connection, id: i64) -> Result<Option<Store>> {
    conn.query_row(SELECT_STORE_BY_ID, params![id], store_from_row).optional()
}

/// All stores in store order.
pub fn list(conn: &Connection) -> Result<Vec<Store>> {
    let mut stmt = conn.prepare(SELECT_STORES)?;
    let mut stores = stmt.query_map([], store_from_row)?.collect::<Result<Vec<_>>>()?;
    sort_stores(&mut stores);
    Ok(stores)
}
