//! Versioned schema for the local shift database.
//!
//! Every migration runs once, inside the transaction that records it in the
//! `migrations` table. Pending migrations are applied in version order when
//! the database is opened.
//!
//! | Version | Change |
//! |---------|--------|
//! | 1 | stores, employees, holidays and shifts tables |
//! | 2 | 2025 national holidays |

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS stores (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    address TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    surname TEXT NOT NULL DEFAULT '',
    dni TEXT NOT NULL DEFAULT '',
    company_id INTEGER,
    company_name TEXT
);
CREATE TABLE IF NOT EXISTS holidays (
    date DATE NOT NULL PRIMARY KEY,
    description TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS shifts (
    id INTEGER PRIMARY KEY,
    employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
    company_id INTEGER,
    store_id INTEGER NOT NULL REFERENCES stores(id),
    date DATE NOT NULL,
    start TEXT NOT NULL,
    end TEXT NOT NULL,
    hours_worked REAL NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(date);
CREATE INDEX IF NOT EXISTS idx_shifts_employee_date ON shifts(employee_id, date);
";

/// National holidays of 2025.
pub const HOLIDAYS_2025: [(&str, &str); 16] = [
    ("2025-01-01", "Año Nuevo"),
    ("2025-04-17", "Jueves Santo"),
    ("2025-04-18", "Viernes Santo"),
    ("2025-05-01", "Día del Trabajo"),
    ("2025-06-07", "Batalla de Arica y Día de la Bandera"),
    ("2025-06-29", "San Pedro y San Pablo"),
    ("2025-07-23", "Día de la Fuerza Aérea"),
    ("2025-07-28", "Fiestas Patrias"),
    ("2025-07-29", "Fiestas Patrias"),
    ("2025-08-06", "Batalla de Junín"),
    ("2025-08-30", "Santa Rosa de Lima"),
    ("2025-10-08", "Combate de Angamos"),
    ("2025-11-01", "Día de Todos los Santos"),
    ("2025-12-08", "Inmaculada Concepción"),
    ("2025-12-09", "Batalla de Ayacucho"),
    ("2025-12-25", "Navidad"),
];

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of schema migrations, applied in version order.
///
/// Each migration is registered once in [`MigrationManager::new`]. A
/// database records the versions it has applied in its `migrations` table,
/// so opening it again only runs what is new.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// Creates a manager with every known migration registered.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_tables", |tx| {
            tx.execute_batch(SCHEMA)?;
            Ok(())
        });

        // Only seeds an empty table so holidays entered by hand are kept.
        self.add_migration(2, "seed_holidays_2025", |tx| {
            let count: i64 = tx.query_row("SELECT COUNT(*) FROM holidays", [], |row| row.get(0))?;
            if count > 0 {
                return Ok(());
            }
            for (date, description) in HOLIDAYS_2025 {
                tx.execute(
                    "INSERT OR IGNORE INTO holidays (date, description) VALUES (?1, ?2)",
                    params![date, description],
                )?;
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's version.
    ///
    /// All pending migrations share one transaction: if one fails, none of
    /// them is recorded and the schema is left as it was.
    ///
    /// # Arguments
    ///
    /// * `conn` - Connection to migrate
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnos::db::migrations::MigrationManager;
    /// use rusqlite::Connection;
    ///
    /// let manager = MigrationManager::new();
    /// let mut conn = Connection::open_in_memory()?;
    /// manager.run_migrations(&mut conn)?;
    /// assert_eq!(manager.current_version(&conn)?, manager.latest_version());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();
        if pending.is_empty() {
            return Ok(());
        }

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));
            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Highest applied version, 0 for a database that was never migrated.
    ///
    /// Requires the `migrations` table, which [`Self::run_migrations`]
    /// creates.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// Version of the newest registered migration.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

/// Brings a freshly opened connection up to the latest schema.
///
/// # Returns
///
/// Returns `Ok(())` if the schema is current, or the error of the failing
/// migration.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Schema version of a migrated database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}
