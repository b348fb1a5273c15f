//! # Turnos - shift scheduling for retail staff
//!
//! A command-line front-end for planning and reviewing employee shifts
//! across stores.
//!
//! ## Features
//!
//! - **Weekly and monthly schedules**: Monday-first calendars with holidays
//! - **Shift editing**: simple and split shifts with time-window validation
//! - **Reports**: hours worked, holiday shifts and overtime per period
//! - **Monthly summaries** and per-employee hours by store
//! - **Backends**: the REST shift service, or a local SQLite database
//! - **Data Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use turnos::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
