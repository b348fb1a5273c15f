//! Text of every [`Message`].
//!
//! All user-facing strings live here so the command layer only ever names a
//! variant. Parameters are interpolated in the order the variant declares
//! them.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(path, error) => format!("Failed to parse configuration file {}: {}", path, error),
            Message::InvalidBackend(value) => format!("Unknown backend '{}', expected 'http' or 'local'", value),
            Message::BackendHttp => "Shift service (HTTP)".to_string(),
            Message::BackendLocal => "Local database (SQLite)".to_string(),
            Message::PromptBackend => "Where are shifts stored?".to_string(),
            Message::ConfigModuleApi => "Shift service settings".to_string(),
            Message::PromptApiUrl => "Service base URL".to_string(),
            Message::ConfigModuleRules => "Scheduling rules".to_string(),
            Message::PromptWeeklyHoursLimit => "Weekly hours before overtime".to_string(),
            Message::UsingBackend(backend) => format!("Using backend: {}", backend),

            // === DATABASE MESSAGES ===
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::LocalBackendOnly => {
                "This command manages the local database. Set the backend to 'local' first (turnos init or TURNOS_BACKEND=local)".to_string()
            }

            // === SCHEDULE MESSAGES ===
            Message::WeekHeader(title, first) => format!("📅 {} · semana del {}", title, first),
            Message::MonthHeader(title) => format!("📅 {}", title),
            Message::NoShiftsInPeriod => "No shifts in this period".to_string(),
            Message::HolidayLegend => "* holiday".to_string(),

            // === SHIFT MESSAGES ===
            Message::ShiftCreated(window) => format!("Shift {} created", window),
            Message::ShiftUpdated(window) => format!("Shift updated to {}", window),
            Message::SplitShiftCreated(morning, afternoon) => format!("Split shift {} / {} created", morning, afternoon),
            Message::ShiftDeleted(id) => format!("Shift {} deleted", id),
            Message::ShiftNotFound(id) => format!("Shift {} not found", id),
            Message::ShiftRejected => "The shift was not saved:".to_string(),
            Message::FieldError(field, message) => format!("  {}: {}", field, message),
            Message::SubmitBusy => "A submission is already in progress".to_string(),
            Message::SplitCompensated(cause) => {
                format!("Split shift not saved, the stored half was removed again: {}", cause)
            }
            Message::SplitOrphaned(id, cause) => format!(
                "Split shift not saved and shift {} could not be removed, delete it manually: {}",
                id, cause
            ),
            Message::ShiftBackendError(error) => format!("Shift backend error: {}", error),
            Message::EditingShift(employee, date) => format!("Editing shift of {} on {}", employee, date),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteShift(id) => format!("Delete shift {}?", id),
            Message::ConfirmDiscardChanges => "Discard unsaved changes?".to_string(),
            Message::ConfirmRetry => "Correct the shift and try again?".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::PromptEntry => "Entry (HH:MM)".to_string(),
            Message::PromptExit => "Exit (HH:MM)".to_string(),
            Message::PromptMorning => "Morning (HH:MM-HH:MM)".to_string(),
            Message::PromptAfternoon => "Afternoon (HH:MM-HH:MM)".to_string(),
            Message::PromptStore => "Store".to_string(),
            Message::NoStoresAvailable => "No stores available".to_string(),

            // === REFERENCE DATA MESSAGES ===
            Message::StoresHeader => "🏬 Stores".to_string(),
            Message::HolidaysHeader => "🎉 Holidays".to_string(),
            Message::EmployeesHeader => "👥 Employees".to_string(),
            Message::StoreAdded(id, name) => format!("Store '{}' added with ID {}", name, id),
            Message::EmployeeAdded(id, name) => format!("Employee '{}' added with ID {}", name, id),
            Message::HolidayAdded(date) => format!("Holiday {} saved", date),
            Message::HolidayRemoved(date) => format!("Holiday {} removed", date),
            Message::HolidayNotFound(date) => format!("No holiday on {}", date),
            Message::EmployeeNotFound(id) => format!("Employee {} not found", id),

            // === REPORT MESSAGES ===
            Message::ReportHeader(kind, from, to) => format!("📊 {} from {} to {}", kind, from, to),
            Message::NoReportRows => "Nothing to report for this period".to_string(),
            Message::SummaryHeader(title) => format!("📊 Monthly summary · {}", title),
            Message::NoSummaries => "No shifts recorded this month".to_string(),
            Message::ProfileHeader(name) => format!("👤 Hours by store · {}", name),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === INPUT MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", value),
            Message::InvalidMonth(value) => format!("Invalid month '{}', expected YYYY-MM", value),
            Message::InvalidEmployeeList(value) => format!("Invalid employee list '{}', expected ids like 1,2,3", value),
            Message::InvalidWindow(value) => format!("Invalid shift '{}', expected HH:MM-HH:MM", value),
        };

        write!(f, "{}", text)
    }
}
