//! Turning validated forms into backend calls.
//!
//! [`ShiftEditor`] runs one submission at a time: a second attempt while the
//! first is in flight gets [`SubmitError::Busy`]. The latch is released on
//! every exit path, including validation and transport failures.
//!
//! A split shift is stored as two independent records created concurrently.
//! When exactly one create succeeds the stored half is deleted again, so a
//! failed split never leaves an orphaned half behind unless that delete
//! fails too ([`SubmitError::PartialFailure`] reports which).

use crate::api::ShiftBackend;
use crate::libs::error::{SubmitError, TransportError, ValidationError};
use crate::libs::shift::{Shift, ShiftDraft, ShiftPayload, SplitShiftProposal};
use crate::libs::validation::{validate_draft, validate_split, SubmissionState};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Single-flight guard for submissions.
#[derive(Debug, Default)]
pub struct SubmitLatch {
    busy: AtomicBool,
}

/// Holds the latch; dropping it releases the latch.
#[derive(Debug)]
pub struct LatchGuard<'a> {
    latch: &'a SubmitLatch,
}

impl SubmitLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the latch, or `None` when a submission is already running.
    pub fn try_acquire(&self) -> Option<LatchGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LatchGuard { latch: self })
    }

    /// Whether a guard is currently held.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch.busy.store(false, Ordering::Release);
    }
}

/// What a successful submission did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(Shift),
    Updated(Shift),
    SplitCreated(Shift, Shift),
}

/// Submits shift forms to a backend, one at a time.
///
/// The editor keeps the verdict of the last validation in
/// [`SubmissionState`] so the caller can show field messages.
pub struct ShiftEditor<'a, B: ShiftBackend> {
    backend: &'a B,
    latch: SubmitLatch,
    state: Mutex<SubmissionState>,
}

impl<'a, B: ShiftBackend> ShiftEditor<'a, B> {
    /// Creates an idle editor over `backend`.
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            latch: SubmitLatch::new(),
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub fn latch(&self) -> &SubmitLatch {
        &self.latch
    }

    /// State of the last validation.
    pub fn state(&self) -> SubmissionState {
        self.state.lock().clone()
    }

    /// Clears a previous verdict so the form can be submitted again.
    pub fn reset(&self) {
        self.state.lock().reset();
    }

    /// Validates and creates or updates a simple shift. Drafts carrying a
    /// non-zero id update that record in place.
    ///
    /// # Returns
    ///
    /// The stored shift, [`SubmitError::Invalid`] when the form fails
    /// validation (nothing is sent), [`SubmitError::Busy`] while another
    /// submission runs, or the backend's error.
    pub async fn submit_simple(&self, draft: &ShiftDraft) -> Result<Outcome, SubmitError> {
        let _guard = self.latch.try_acquire().ok_or(SubmitError::Busy)?;

        let valid = self.validate(|| validate_draft(draft))?;
        let payload = ShiftPayload {
            employee_id: draft.employee_id,
            company_id: draft.company_id,
            store_id: valid.store_id,
            date: draft.date,
            window: valid.window,
        };

        match draft.id {
            Some(id) if id != 0 => {
                let shift = self.backend.update_shift(id, &payload).await?;
                Ok(Outcome::Updated(shift))
            }
            _ => {
                let shift = self.backend.create_shift(&payload).await?;
                Ok(Outcome::Created(shift))
            }
        }
    }

    /// Validates a split proposal and creates both halves concurrently.
    ///
    /// # Returns
    ///
    /// Both stored halves, morning first. When only one create succeeds the
    /// result is [`SubmitError::PartialFailure`]; when both fail it is the
    /// morning half's transport error.
    pub async fn submit_split(&self, proposal: &SplitShiftProposal) -> Result<Outcome, SubmitError> {
        let _guard = self.latch.try_acquire().ok_or(SubmitError::Busy)?;

        let valid = self.validate(|| validate_split(proposal))?;
        let (morning, afternoon) = proposal.payloads(valid.store_id, valid.morning, valid.afternoon);

        let (first, second) = tokio::join!(self.backend.create_shift(&morning), self.backend.create_shift(&afternoon));

        match (first, second) {
            (Ok(first), Ok(second)) => Ok(Outcome::SplitCreated(first, second)),
            (Ok(kept), Err(source)) | (Err(source), Ok(kept)) => {
                tracing::warn!(error = %source, "split shift half failed, removing the stored half");
                Err(self.compensate(kept, source).await)
            }
            (Err(source), Err(other)) => {
                tracing::warn!(error = %other, "both split shift halves failed");
                Err(SubmitError::Transport(source))
            }
        }
    }

    /// Deletes a persisted shift.
    pub async fn delete(&self, id: i64) -> Result<(), SubmitError> {
        let _guard = self.latch.try_acquire().ok_or(SubmitError::Busy)?;
        self.backend.delete_shift(id).await?;
        Ok(())
    }

    /// Runs `check` while recording its verdict in the submission state.
    fn validate<T>(&self, check: impl FnOnce() -> Result<T, ValidationError>) -> Result<T, SubmitError> {
        let mut state = self.state.lock();
        state.reset();
        state.begin();
        let verdict = check();
        state.settle(&verdict);
        Ok(verdict?)
    }

    /// Deletes the half of a split that was stored and reports the outcome.
    async fn compensate(&self, kept: Shift, source: TransportError) -> SubmitError {
        let Some(id) = kept.id else {
            return SubmitError::PartialFailure {
                kept_id: None,
                compensated: false,
                source,
            };
        };

        match self.backend.delete_shift(id).await {
            Ok(()) => SubmitError::PartialFailure {
                kept_id: None,
                compensated: true,
                source,
            },
            Err(error) => {
                tracing::warn!(id, error = %error, "could not remove orphaned split shift half");
                SubmitError::PartialFailure {
                    kept_id: Some(id),
                    compensated: false,
                    source,
                }
            }
        }
    }
}
