#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use turnos::libs::error::Field;
    use turnos::libs::shift::{ShiftDraft, ShiftSnapshot, SplitShiftProposal, WindowDraft};
    use turnos::libs::time_of_day::TimeOfDay;
    use turnos::libs::validation::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn split(morning: (&str, &str), afternoon: (&str, &str), store_id: Option<i64>) -> SplitShiftProposal {
        let mut proposal = SplitShiftProposal::new(1, Some(1), date(2025, 3, 10));
        proposal.morning = WindowDraft::new(morning.0, morning.1);
        proposal.afternoon = WindowDraft::new(afternoon.0, afternoon.1);
        proposal.store_id = store_id;
        proposal
    }

    #[test]
    fn test_simple_bounds_are_inclusive() {
        let valid = validate_simple("05:00", "22:00", Some(1)).unwrap();
        assert_eq!(valid.window.start, TimeOfDay::hm(5, 0));
        assert_eq!(valid.window.end, TimeOfDay::hm(22, 0));
        assert_eq!(valid.store_id, 1);

        assert!(validate_simple("22:00", "24:00", Some(1)).is_ok());
        assert!(validate_simple("05:00", "10:00", Some(1)).is_ok());
    }

    #[test]
    fn test_simple_entry_out_of_range() {
        let errors = validate_simple("04:59", "12:00", Some(1)).unwrap_err();
        assert_eq!(errors.get(Field::Entry), Some(ENTRY_RANGE));
        assert!(!errors.has(Field::Exit));

        let errors = validate_simple("22:01", "23:00", Some(1)).unwrap_err();
        assert_eq!(errors.get(Field::Entry), Some(ENTRY_RANGE));
    }

    #[test]
    fn test_simple_exit_out_of_range() {
        let errors = validate_simple("08:00", "09:59", Some(1)).unwrap_err();
        assert_eq!(errors.get(Field::Exit), Some(EXIT_RANGE));
        assert!(!errors.has(Field::Entry));

        // Past midnight is not a valid exit.
        let errors = validate_simple("20:00", "24:30", Some(1)).unwrap_err();
        assert!(errors.has(Field::Exit));
    }

    #[test]
    fn test_simple_exit_before_entry() {
        assert!(validate_simple("10:00", "09:00", Some(1)).unwrap_err().has(Field::Exit));

        let errors = validate_simple("15:00", "12:00", Some(1)).unwrap_err();
        assert_eq!(errors.get(Field::Exit), Some(EXIT_BEFORE_ENTRY));
        assert!(!errors.has(Field::Entry));

        let errors = validate_simple("12:00", "12:00", Some(1)).unwrap_err();
        assert_eq!(errors.get(Field::Exit), Some(EXIT_BEFORE_ENTRY));
    }

    #[test]
    fn test_simple_reports_every_field_at_once() {
        let errors = validate_simple("", "", None).unwrap_err();
        assert_eq!(errors.get(Field::Entry), Some(ENTRY_REQUIRED));
        assert_eq!(errors.get(Field::Exit), Some(EXIT_REQUIRED));
        assert_eq!(errors.get(Field::Store), Some(STORE_REQUIRED));
        assert_eq!(errors.fields().count(), 3);
    }

    #[test]
    fn test_simple_missing_store_only() {
        let errors = validate_simple("08:00", "16:00", None).unwrap_err();
        assert_eq!(errors.get(Field::Store), Some(STORE_REQUIRED));
        assert!(!errors.has(Field::Entry));
        assert!(!errors.has(Field::Exit));
    }

    #[test]
    fn test_validate_draft_uses_form_values() {
        let mut draft = ShiftDraft::new(4, None, date(2025, 3, 10));
        assert!(validate_draft(&draft).is_err());

        draft.start = "08:00".to_string();
        draft.end = "17:00".to_string();
        draft.store_id = Some(2);
        let valid = validate_draft(&draft).unwrap();
        assert_eq!(valid.window.to_string(), "08:00-17:00");
    }

    #[test]
    fn test_split_overlap_rejected() {
        let errors = validate_split(&split(("08:00", "14:00"), ("13:00", "18:00"), Some(1))).unwrap_err();
        assert_eq!(errors.get(Field::MorningExit), Some(MORNING_OVERLAP));
        assert_eq!(errors.get(Field::AfternoonEntry), Some(AFTERNOON_OVERLAP));

        // Touching halves overlap too.
        let errors = validate_split(&split(("08:00", "13:00"), ("13:00", "18:00"), Some(1))).unwrap_err();
        assert!(errors.has(Field::MorningExit));
    }

    #[test]
    fn test_split_accepted() {
        let valid = validate_split(&split(("08:00", "12:00"), ("13:00", "18:00"), Some(3))).unwrap();
        assert_eq!(valid.morning.to_string(), "08:00-12:00");
        assert_eq!(valid.afternoon.to_string(), "13:00-18:00");
        assert_eq!(valid.store_id, 3);
    }

    #[test]
    fn test_split_bounds() {
        assert!(validate_split(&split(("05:00", "08:00"), ("18:00", "22:00"), Some(1))).is_ok());

        let errors = validate_split(&split(("04:30", "07:59"), ("12:59", "22:01"), Some(1))).unwrap_err();
        assert_eq!(errors.get(Field::MorningEntry), Some(MORNING_ENTRY_RANGE));
        assert_eq!(errors.get(Field::MorningExit), Some(MORNING_EXIT_RANGE));
        assert_eq!(errors.get(Field::AfternoonEntry), Some(AFTERNOON_ENTRY_RANGE));
        assert_eq!(errors.get(Field::AfternoonExit), Some(AFTERNOON_EXIT_RANGE));
    }

    #[test]
    fn test_split_missing_times_and_store() {
        let errors = validate_split(&split(("", ""), ("13:00", "18:00"), None)).unwrap_err();
        assert_eq!(errors.get(Field::MorningEntry), Some(TIME_REQUIRED));
        assert_eq!(errors.get(Field::MorningExit), Some(TIME_REQUIRED));
        assert_eq!(errors.get(Field::Store), Some(STORE_REQUIRED));
        assert!(!errors.has(Field::AfternoonEntry));
    }

    #[test]
    fn test_has_unsaved_changes() {
        let original = ShiftSnapshot {
            start: "08:00".to_string(),
            end: "16:00".to_string(),
            date: date(2025, 1, 1),
            store_id: Some(1),
        };
        assert!(!has_unsaved_changes(&original.clone(), Some(&original)));

        let changes = [
            ShiftSnapshot { start: "09:00".to_string(), ..original.clone() },
            ShiftSnapshot { end: "17:00".to_string(), ..original.clone() },
            ShiftSnapshot { date: date(2025, 1, 2), ..original.clone() },
            ShiftSnapshot { store_id: Some(2), ..original.clone() },
        ];
        for current in &changes {
            assert!(has_unsaved_changes(current, Some(&original)));
        }

        assert!(has_unsaved_changes(&original, None));
    }

    #[test]
    fn test_split_has_input() {
        let blank = SplitShiftProposal::new(1, None, date(2025, 3, 10));
        assert!(!split_has_input(&blank, None));

        let mut typed = blank.clone();
        typed.afternoon.start = "1".to_string();
        assert!(split_has_input(&typed, None));

        let mut store_changed = blank.clone();
        store_changed.store_id = Some(2);
        assert!(split_has_input(&store_changed, None));
        assert!(!split_has_input(&store_changed, Some(2)));
    }

    #[test]
    fn test_submission_state_cycle() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.begin());

        let verdict = validate_simple("08:00", "07:00", Some(1));
        state.settle(&verdict);
        let rejection = state.rejection().unwrap();
        assert!(rejection.has(Field::Exit));

        state.reset();
        assert_eq!(state, SubmissionState::Idle);
        assert!(state.begin());
        state.settle(&validate_simple("08:00", "16:00", Some(1)));
        assert_eq!(state, SubmissionState::Accepted);
    }
}
