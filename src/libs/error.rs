//! Error taxonomy for shift handling.
//!
//! - [`ValidationError`]: a rejected form. Field-scoped, resolved locally and
//!   never sent to the backend.
//! - [`TransportError`]: anything that went wrong talking to the storage
//!   backend, HTTP or SQLite.
//! - [`SubmitError`]: what a submission attempt can end in, including the
//!   split-shift partial failure.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Form fields a validation message can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Entry,
    Exit,
    MorningEntry,
    MorningExit,
    AfternoonEntry,
    AfternoonExit,
    Store,
    Period,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Entry => "entry",
            Field::Exit => "exit",
            Field::MorningEntry => "morning entry",
            Field::MorningExit => "morning exit",
            Field::AfternoonEntry => "afternoon entry",
            Field::AfternoonExit => "afternoon exit",
            Field::Store => "store",
            Field::Period => "period",
        };
        f.write_str(name)
    }
}

/// Field-scoped rejection of a proposed shift. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationError {
    fields: BTreeMap<Field, &'static str>,
}

impl ValidationError {
    /// An error with no field messages yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// An error carrying one message.
    ///
    /// # Arguments
    ///
    /// * `field` - Field the message belongs to
    /// * `message` - Text shown next to the field
    pub fn single(field: Field, message: &'static str) -> Self {
        let mut error = Self::new();
        error.set(field, message);
        error
    }

    /// Records a message for `field` unless one is already there.
    pub fn set(&mut self, field: Field, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Recorded messages in [`Field`] order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.values().copied().collect();
        f.write_str(&messages.join(" "))
    }
}

/// Failure of the storage backend.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("local storage error: {0}")]
    Storage(rusqlite::Error),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("rejected: {0}")]
    Rejected(String),

    /// A stored row holds a value that no longer parses, e.g. a `start` of `"9h"`.
    #[error("invalid stored value: {0}")]
    Corrupt(String),
}

/// SQLite errors, with values that fail to convert from their column
/// reported as [`TransportError::Corrupt`].
impl From<rusqlite::Error> for TransportError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::FromSqlConversionFailure(column, _, source) => {
                TransportError::Corrupt(format!("column {}: {}", column, source))
            }
            other => TransportError::Storage(other),
        }
    }
}

/// Outcome of a failed submission attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// One half of a split shift was stored and the other was not.
    #[error("split shift could not be saved: {source}")]
    PartialFailure {
        kept_id: Option<i64>,
        compensated: bool,
        #[source]
        source: TransportError,
    },
}
