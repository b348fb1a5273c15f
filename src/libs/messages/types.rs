#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String, String), // path, error
    InvalidBackend(String),
    BackendHttp,
    BackendLocal,
    PromptBackend,
    ConfigModuleApi,
    PromptApiUrl,
    ConfigModuleRules,
    PromptWeeklyHoursLimit,
    UsingBackend(String),

    // === DATABASE MESSAGES ===
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    LocalBackendOnly,

    // === SCHEDULE MESSAGES ===
    WeekHeader(String, String), // month title, first day label
    MonthHeader(String),
    NoShiftsInPeriod,
    HolidayLegend,

    // === SHIFT MESSAGES ===
    ShiftCreated(String),           // window
    ShiftUpdated(String),           // window
    SplitShiftCreated(String, String),
    ShiftDeleted(i64),
    ShiftNotFound(i64),
    ShiftRejected,
    FieldError(String, String), // field, message
    SubmitBusy,
    SplitCompensated(String),    // cause
    SplitOrphaned(i64, String), // kept id, cause
    ShiftBackendError(String),
    EditingShift(String, String), // employee, date
    NoChangesDetected,
    ConfirmDeleteShift(i64),
    ConfirmDiscardChanges,
    ConfirmRetry,
    OperationCancelled,
    PromptEntry,
    PromptExit,
    PromptMorning,
    PromptAfternoon,
    PromptStore,
    NoStoresAvailable,

    // === REFERENCE DATA MESSAGES ===
    StoresHeader,
    HolidaysHeader,
    EmployeesHeader,
    StoreAdded(i64, String),
    EmployeeAdded(i64, String),
    HolidayAdded(String),
    HolidayRemoved(String),
    HolidayNotFound(String),
    EmployeeNotFound(i64),

    // === REPORT MESSAGES ===
    ReportHeader(String, String, String), // kind, from, to
    NoReportRows,
    SummaryHeader(String),
    NoSummaries,
    ProfileHeader(String),
    ExportCompleted(String),

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidMonth(String),
    InvalidEmployeeList(String),
    InvalidWindow(String),
}
