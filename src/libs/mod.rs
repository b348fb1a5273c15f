//! Core library modules for turnos.
//!
//! - **Domain**: shift records, times of day, calendars and periods
//! - **Rules**: validation, reconciliation and report arithmetic
//! - **Editing**: submission flow and the edit dialog state machine
//! - **Infrastructure**: configuration, data storage, messages
//! - **Output**: console tables and file export
//!
//! ```rust
//! use turnos::libs::validation::validate_simple;
//!
//! let shift = validate_simple("08:00", "17:00", Some(1)).unwrap();
//! assert_eq!(shift.window.to_string(), "08:00-17:00");
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod modal;
pub mod period;
pub mod reconcile;
pub mod report;
pub mod shift;
pub mod store;
pub mod submission;
pub mod time_of_day;
pub mod validation;
pub mod view;
