//! Lifecycle of an edit dialog.
//!
//! ```text
//! Closed --Open--> Opening --AnimationFinished--> Open
//!   ^                                              |
//!   +--AnimationFinished-- Closing <----Close------+
//! ```
//!
//! Transitions are driven by events only. An event that does not apply to
//! the current state is ignored.

/// Visibility phase of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Inputs of the dialog state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    AnimationFinished,
    Close,
}

impl ModalState {
    /// State after `event`; unchanged when the event does not apply.
    pub fn next(self, event: ModalEvent) -> ModalState {
        match (self, event) {
            (ModalState::Closed, ModalEvent::Open) => ModalState::Opening,
            (ModalState::Opening, ModalEvent::AnimationFinished) => ModalState::Open,
            (ModalState::Open, ModalEvent::Close) => ModalState::Closing,
            (ModalState::Closing, ModalEvent::AnimationFinished) => ModalState::Closed,
            (state, _) => state,
        }
    }
}

/// A dialog and the form it edits.
#[derive(Debug, Clone, Default)]
pub struct Modal<T> {
    state: ModalState,
    form: Option<T>,
}

impl<T> Modal<T> {
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
            form: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// The loaded form, from `open` until the close animation finishes.
    pub fn form(&self) -> Option<&T> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut T> {
        self.form.as_mut()
    }

    /// Opens with `form` loaded. Ignored unless closed.
    pub fn open(&mut self, form: T) -> ModalState {
        if self.state == ModalState::Closed {
            self.form = Some(form);
            self.state = self.state.next(ModalEvent::Open);
        }
        self.state
    }

    /// Starts closing. The form stays readable until the animation ends.
    pub fn close(&mut self) -> ModalState {
        self.dispatch(ModalEvent::Close)
    }

    /// Completion of the running open or close animation. Finishing a close
    /// drops the form.
    pub fn animation_finished(&mut self) -> ModalState {
        let state = self.dispatch(ModalEvent::AnimationFinished);
        if state == ModalState::Closed {
            self.form = None;
        }
        state
    }

    /// Applies a raw event. Prefer [`Self::open`] and
    /// [`Self::animation_finished`], which also manage the form.
    pub fn dispatch(&mut self, event: ModalEvent) -> ModalState {
        self.state = self.state.next(event);
        self.state
    }

    /// Submitting is only allowed while fully open.
    pub fn can_submit(&self) -> bool {
        self.state == ModalState::Open
    }
}
