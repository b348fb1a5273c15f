//! Time-window rules for proposed shifts.
//!
//! Two forms are validated:
//!
//! - **Simple shift**: one entry/exit pair plus a store.
//! - **Split shift** ("turno partido"): a morning and an afternoon window
//!   sharing one store. Only reachable on creation; a persisted half is
//!   edited as a simple shift.
//!
//! All bounds are inclusive. The split ranges deliberately overlap around
//! lunch (morning exit up to 14:00, afternoon entry from 13:00); the overlap
//! rule then keeps the two halves from crossing.
//!
//! Validation is pure. A rejection never touches the backend and is never
//! logged as a fault.

use crate::libs::error::{Field, ValidationError};
use crate::libs::shift::{ShiftDraft, ShiftSnapshot, SplitShiftProposal, WindowDraft};
use crate::libs::time_of_day::{ShiftWindow, TimeOfDay};

// Field messages, shown verbatim next to the offending field
pub const ENTRY_REQUIRED: &str = "Entry time is required.";
pub const ENTRY_RANGE: &str = "Entry time must be between 05:00 and 22:00.";
pub const EXIT_REQUIRED: &str = "Exit time is required.";
pub const EXIT_RANGE: &str = "Exit time must be between 10:00 and 24:00.";
pub const EXIT_BEFORE_ENTRY: &str = "Exit time must be after entry time.";
pub const STORE_REQUIRED: &str = "A store must be selected.";
pub const MORNING_ENTRY_RANGE: &str = "Morning entry must be between 05:00 and 12:00.";
pub const MORNING_EXIT_RANGE: &str = "Morning exit must be between 08:00 and 14:00.";
pub const AFTERNOON_ENTRY_RANGE: &str = "Afternoon entry must be between 13:00 and 18:00.";
pub const AFTERNOON_EXIT_RANGE: &str = "Afternoon exit must be between 16:00 and 22:00.";
pub const MORNING_OVERLAP: &str = "Morning exit must precede afternoon entry.";
pub const AFTERNOON_OVERLAP: &str = "Afternoon entry must follow morning exit.";
pub const TIME_REQUIRED: &str = "Time is required.";

/// Inclusive range check applied to one form field.
struct Bound {
    field: Field,
    min: TimeOfDay,
    max: TimeOfDay,
    required: &'static str,
    range: &'static str,
}

const SIMPLE_ENTRY: Bound = Bound {
    field: Field::Entry,
    min: TimeOfDay::hm(5, 0),
    max: TimeOfDay::hm(22, 0),
    required: ENTRY_REQUIRED,
    range: ENTRY_RANGE,
};

const SIMPLE_EXIT: Bound = Bound {
    field: Field::Exit,
    min: TimeOfDay::hm(10, 0),
    max: TimeOfDay::MIDNIGHT_END,
    required: EXIT_REQUIRED,
    range: EXIT_RANGE,
};

// Morning entry, morning exit, afternoon entry, afternoon exit
const SPLIT_BOUNDS: [Bound; 4] = [
    Bound {
        field: Field::MorningEntry,
        min: TimeOfDay::hm(5, 0),
        max: TimeOfDay::hm(12, 0),
        required: TIME_REQUIRED,
        range: MORNING_ENTRY_RANGE,
    },
    Bound {
        field: Field::MorningExit,
        min: TimeOfDay::hm(8, 0),
        max: TimeOfDay::hm(14, 0),
        required: TIME_REQUIRED,
        range: MORNING_EXIT_RANGE,
    },
    Bound {
        field: Field::AfternoonEntry,
        min: TimeOfDay::hm(13, 0),
        max: TimeOfDay::hm(18, 0),
        required: TIME_REQUIRED,
        range: AFTERNOON_ENTRY_RANGE,
    },
    Bound {
        field: Field::AfternoonExit,
        min: TimeOfDay::hm(16, 0),
        max: TimeOfDay::hm(22, 0),
        required: TIME_REQUIRED,
        range: AFTERNOON_EXIT_RANGE,
    },
];

impl Bound {
    /// Parses `raw` and checks it against the range. Blank input reports
    /// the "required" message, unparsable input the range message.
    fn check(&self, raw: &str, errors: &mut ValidationError) -> Option<TimeOfDay> {
        if raw.trim().is_empty() {
            errors.set(self.field, self.required);
            return None;
        }
        match TimeOfDay::parse(raw) {
            Ok(time) if time >= self.min && time <= self.max => Some(time),
            _ => {
                errors.set(self.field, self.range);
                None
            }
        }
    }
}

/// A store must be picked; ids are positive.
fn check_store(store_id: Option<i64>, errors: &mut ValidationError) -> Option<i64> {
    match store_id {
        Some(id) if id > 0 => Some(id),
        _ => {
            errors.set(Field::Store, STORE_REQUIRED);
            None
        }
    }
}

/// A simple shift that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSimple {
    pub window: ShiftWindow,
    pub store_id: i64,
}

/// A split shift that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSplit {
    pub morning: ShiftWindow,
    pub afternoon: ShiftWindow,
    pub store_id: i64,
}

/// Checks a simple entry/exit pair.
///
/// Entry and exit are checked together so both fields can carry a message.
/// The store is checked alongside them. Ordering is only compared once every
/// other rule passed.
pub fn validate_simple(start: &str, end: &str, store_id: Option<i64>) -> Result<ValidSimple, ValidationError> {
    let mut errors = ValidationError::new();

    let start = SIMPLE_ENTRY.check(start, &mut errors);
    let end = SIMPLE_EXIT.check(end, &mut errors);
    let store_id = check_store(store_id, &mut errors);

    let (Some(start), Some(end), Some(store_id)) = (start, end, store_id) else {
        return Err(errors);
    };

    if start >= end {
        return Err(ValidationError::single(Field::Exit, EXIT_BEFORE_ENTRY));
    }

    Ok(ValidSimple {
        window: ShiftWindow::new(start, end),
        store_id,
    })
}

/// [`validate_simple`] over a form draft.
pub fn validate_draft(draft: &ShiftDraft) -> Result<ValidSimple, ValidationError> {
    validate_simple(&draft.start, &draft.end, draft.store_id)
}

/// Checks a split proposal: four bounded times, no overlap, then the store.
pub fn validate_split(proposal: &SplitShiftProposal) -> Result<ValidSplit, ValidationError> {
    let mut errors = ValidationError::new();
    let raw = [
        proposal.morning.start.as_str(),
        proposal.morning.end.as_str(),
        proposal.afternoon.start.as_str(),
        proposal.afternoon.end.as_str(),
    ];

    let times: Vec<Option<TimeOfDay>> = SPLIT_BOUNDS
        .iter()
        .zip(raw)
        .map(|(bound, value)| bound.check(value, &mut errors))
        .collect();

    let windows = match times.as_slice() {
        [Some(morning_start), Some(morning_end), Some(afternoon_start), Some(afternoon_end)] => {
            if morning_end >= afternoon_start {
                errors.set(Field::MorningExit, MORNING_OVERLAP);
                errors.set(Field::AfternoonEntry, AFTERNOON_OVERLAP);
                None
            } else {
                Some((
                    ShiftWindow::new(*morning_start, *morning_end),
                    ShiftWindow::new(*afternoon_start, *afternoon_end),
                ))
            }
        }
        _ => None,
    };

    let store_id = check_store(proposal.store_id, &mut errors);

    match (windows, store_id) {
        (Some((morning, afternoon)), Some(store_id)) if errors.is_empty() => Ok(ValidSplit {
            morning,
            afternoon,
            store_id,
        }),
        _ => Err(errors),
    }
}

/// Edit-flow dirty check. Without an original everything counts as a change.
pub fn has_unsaved_changes(current: &ShiftSnapshot, original: Option<&ShiftSnapshot>) -> bool {
    match original {
        None => true,
        Some(original) => current != original,
    }
}

/// Split-creation dirty check: any typed time, or a store different from
/// the one the form opened with.
pub fn split_has_input(proposal: &SplitShiftProposal, original_store: Option<i64>) -> bool {
    let typed = |window: &WindowDraft| !window.start.is_empty() || !window.end.is_empty();
    typed(&proposal.morning) || typed(&proposal.afternoon) || proposal.store_id != original_store
}

/// Where one submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    /// Passed validation and was handed to the backend
    Accepted,
    Rejected(ValidationError),
}

impl SubmissionState {
    /// `Idle -> Validating`. Any other state is left untouched and `false`
    /// is returned.
    pub fn begin(&mut self) -> bool {
        if *self == SubmissionState::Idle {
            *self = SubmissionState::Validating;
            true
        } else {
            false
        }
    }

    /// Settles a `Validating` attempt with the validator's verdict.
    pub fn settle<T>(&mut self, verdict: &Result<T, ValidationError>) {
        if *self != SubmissionState::Validating {
            return;
        }
        *self = match verdict {
            Ok(_) => SubmissionState::Accepted,
            Err(errors) => SubmissionState::Rejected(errors.clone()),
        };
    }

    /// Back to `Idle` after the user edits the form.
    pub fn reset(&mut self) {
        *self = SubmissionState::Idle;
    }

    /// Field messages of a rejected attempt.
    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            SubmissionState::Rejected(errors) => Some(errors),
            _ => None,
        }
    }
}
