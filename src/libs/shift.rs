//! Domain records exchanged with the shift backend.
//!
//! Field names follow the backend's JSON contract (`colaboradorId`, `fecha`,
//! `horaEntrada`, ...) through serde renames, so the same types are used for
//! wire decoding, local storage and display.

use crate::libs::time_of_day::{ShiftWindow, TimeOfDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee's work period on one date.
///
/// `hours_worked` is computed by the backend and treated as authoritative.
/// A persisted split shift is simply two `Shift` records for the same
/// employee and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "colaboradorId")]
    pub employee_id: i64,
    #[serde(rename = "nombreColaborador", default)]
    pub employee_name: String,
    #[serde(rename = "empresaId", default)]
    pub company_id: Option<i64>,
    #[serde(rename = "nombreEmpresa", default)]
    pub company_name: Option<String>,
    #[serde(rename = "tiendaId", default)]
    pub store_id: Option<i64>,
    #[serde(rename = "nombreTienda", default)]
    pub store_name: Option<String>,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "horaEntrada")]
    pub start: TimeOfDay,
    #[serde(rename = "horaSalida")]
    pub end: TimeOfDay,
    /// Decimal hours after the lunch deduction; `None` when the backend
    /// left it out
    #[serde(rename = "horasTrabajadas", default)]
    pub hours_worked: Option<f64>,
    /// Backend aggregate for the employee over the requested week.
    #[serde(rename = "horasTotalesSemana", default)]
    pub week_total: Option<f64>,
    /// Set when `date` is in the holiday catalog
    #[serde(rename = "esFeriado", default)]
    pub is_holiday: bool,
}

impl Shift {
    /// Entry and exit as a window.
    pub fn window(&self) -> ShiftWindow {
        ShiftWindow::new(self.start, self.end)
    }

    /// Editable part of the shift, used for unsaved-change detection.
    pub fn snapshot(&self) -> ShiftSnapshot {
        ShiftSnapshot {
            start: self.start.to_string(),
            end: self.end.to_string(),
            date: self.date,
            store_id: self.store_id,
        }
    }

    /// Turns a persisted shift back into an edit form.
    pub fn to_draft(&self) -> ShiftDraft {
        ShiftDraft {
            id: self.id,
            employee_id: self.employee_id,
            company_id: self.company_id,
            store_id: self.store_id,
            date: self.date,
            start: self.start.to_string(),
            end: self.end.to_string(),
        }
    }
}

/// Attributes sent on create and update. Mirrors [`Shift`] minus identity
/// and the derived hours.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftPayload {
    pub employee_id: i64,
    pub company_id: Option<i64>,
    pub store_id: i64,
    pub date: NaiveDate,
    pub window: ShiftWindow,
}

/// Raw input of the simple shift form. Times stay strings until validated
/// so an empty field can be told apart from a malformed one.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDraft {
    pub id: Option<i64>,
    pub employee_id: i64,
    pub company_id: Option<i64>,
    pub store_id: Option<i64>,
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
}

impl ShiftDraft {
    /// Blank form for a new shift in the given cell.
    pub fn new(employee_id: i64, company_id: Option<i64>, date: NaiveDate) -> Self {
        Self {
            id: None,
            employee_id,
            company_id,
            store_id: None,
            date,
            start: String::new(),
            end: String::new(),
        }
    }

    /// Persisted shifts carry a non-zero id; anything else is a creation.
    pub fn is_new(&self) -> bool {
        !matches!(self.id, Some(id) if id != 0)
    }

    pub fn snapshot(&self) -> ShiftSnapshot {
        ShiftSnapshot {
            start: self.start.clone(),
            end: self.end.clone(),
            date: self.date,
            store_id: self.store_id,
        }
    }
}

/// Start/end pair as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowDraft {
    pub start: String,
    pub end: String,
}

impl WindowDraft {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// True when neither time has been typed; whitespace counts as empty.
    pub fn is_blank(&self) -> bool {
        self.start.trim().is_empty() && self.end.trim().is_empty()
    }
}

/// Creation-only form for a split ("partido") shift.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitShiftProposal {
    pub employee_id: i64,
    pub company_id: Option<i64>,
    pub store_id: Option<i64>,
    pub date: NaiveDate,
    pub morning: WindowDraft,
    pub afternoon: WindowDraft,
}

impl SplitShiftProposal {
    pub fn new(employee_id: i64, company_id: Option<i64>, date: NaiveDate) -> Self {
        Self {
            employee_id,
            company_id,
            store_id: None,
            date,
            morning: WindowDraft::default(),
            afternoon: WindowDraft::default(),
        }
    }

    /// The two independent records a validated split becomes.
    ///
    /// # Arguments
    ///
    /// * `store_id` - Validated store, shared by both halves
    /// * `morning` - Validated morning window
    /// * `afternoon` - Validated afternoon window
    ///
    /// # Returns
    ///
    /// `(morning, afternoon)` payloads that differ only in their window.
    pub fn payloads(&self, store_id: i64, morning: ShiftWindow, afternoon: ShiftWindow) -> (ShiftPayload, ShiftPayload) {
        let base = ShiftPayload {
            employee_id: self.employee_id,
            company_id: self.company_id,
            store_id,
            date: self.date,
            window: morning,
        };
        let second = ShiftPayload {
            window: afternoon,
            ..base.clone()
        };
        (base, second)
    }
}

/// The fields compared by unsaved-change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSnapshot {
    pub start: String,
    pub end: String,
    pub date: NaiveDate,
    pub store_id: Option<i64>,
}

/// Store ("tienda") a shift is worked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
}

impl Store {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            address: address.to_string(),
        }
    }
}

/// Public holiday ("feriado").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, description: &str) -> Self {
        Self {
            date,
            description: description.to_string(),
        }
    }
}

/// Employee ("colaborador") as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido", default)]
    pub surname: String,
    #[serde(default)]
    pub dni: String,
    #[serde(rename = "empresaId", default)]
    pub company_id: Option<i64>,
    #[serde(rename = "empresaNombre", default)]
    pub company_name: Option<String>,
}

impl Employee {
    /// `"Name Surname"`, or just the name when there is no surname.
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}
