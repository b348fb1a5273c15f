//! Local SQLite storage.
//!
//! Backs [`LocalBackend`](shifts::LocalBackend), the offline implementation
//! of [`ShiftBackend`](crate::api::ShiftBackend). Each table has its own
//! module holding its SQL; the backend composes them.

/// Connection setup and migration on open.
pub mod db;

/// Versioned schema and holiday seed.
pub mod migrations;

pub mod employees;
pub mod holidays;
pub mod stores;

/// The backend itself, with the derived hour computations.
pub mod shifts;
