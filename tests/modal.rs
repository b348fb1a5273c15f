#[cfg(test)]
mod tests {
    use turnos::libs::modal::{Modal, ModalEvent, ModalState};

    #[test]
    fn test_full_cycle() {
        let mut modal: Modal<String> = Modal::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.form().is_none());

        assert_eq!(modal.open("draft".to_string()), ModalState::Opening);
        assert!(!modal.can_submit());
        assert_eq!(modal.animation_finished(), ModalState::Open);
        assert!(modal.can_submit());
        assert_eq!(modal.form().map(String::as_str), Some("draft"));

        assert_eq!(modal.close(), ModalState::Closing);
        assert!(!modal.can_submit());
        // The form stays readable while the close animation runs.
        assert!(modal.form().is_some());
        assert_eq!(modal.animation_finished(), ModalState::Closed);
        assert!(modal.form().is_none());
    }

    #[test]
    fn test_events_that_do_not_apply_are_ignored() {
        assert_eq!(ModalState::Closed.next(ModalEvent::Close), ModalState::Closed);
        assert_eq!(ModalState::Closed.next(ModalEvent::AnimationFinished), ModalState::Closed);
        assert_eq!(ModalState::Opening.next(ModalEvent::Open), ModalState::Opening);
        assert_eq!(ModalState::Opening.next(ModalEvent::Close), ModalState::Opening);
        assert_eq!(ModalState::Open.next(ModalEvent::Open), ModalState::Open);
        assert_eq!(ModalState::Open.next(ModalEvent::AnimationFinished), ModalState::Open);
        assert_eq!(ModalState::Closing.next(ModalEvent::Open), ModalState::Closing);
        assert_eq!(ModalState::Closing.next(ModalEvent::Close), ModalState::Closing);
    }

    #[test]
    fn test_open_while_not_closed_keeps_form() {
        let mut modal = Modal::new();
        modal.open(1);
        modal.animation_finished();

        assert_eq!(modal.open(2), ModalState::Open);
        assert_eq!(modal.form(), Some(&1));

        if let Some(form) = modal.form_mut() {
            *form = 3;
        }
        assert_eq!(modal.form(), Some(&3));
    }

    #[test]
    fn test_reopen_after_close() {
        let mut modal = Modal::new();
        modal.open("first");
        modal.dispatch(ModalEvent::AnimationFinished);
        modal.close();
        modal.animation_finished();

        modal.open("second");
        assert_eq!(modal.state(), ModalState::Opening);
        assert_eq!(modal.form(), Some(&"second"));
    }
}
