#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;
    use turnos::api::{BackendResult, ShiftBackend};
    use turnos::libs::error::{Field, SubmitError, TransportError};
    use turnos::libs::report::{MonthlySummary, OvertimeRow, ReportQuery};
    use turnos::libs::shift::{Employee, Holiday, Shift, ShiftDraft, ShiftPayload, SplitShiftProposal, Store, WindowDraft};
    use turnos::libs::submission::{Outcome, ShiftEditor};
    use turnos::libs::time_of_day::TimeOfDay;
    use turnos::libs::validation::SubmissionState;

    /// In-memory backend with switchable failures.
    #[derive(Default)]
    struct MockBackend {
        next_id: AtomicI64,
        shifts: Mutex<Vec<Shift>>,
        deleted: Mutex<Vec<i64>>,
        /// Creates starting at or after this time are rejected.
        fail_create_from: Option<TimeOfDay>,
        fail_create_all: bool,
        fail_delete: bool,
        /// When set, creates wait for a notification before answering.
        gate: Option<Arc<Notify>>,
    }

    impl MockBackend {
        fn stored(&self) -> Vec<Shift> {
            self.shifts.lock().clone()
        }

        fn record(&self, id: i64, payload: &ShiftPayload) -> Shift {
            Shift {
                id: Some(id),
                employee_id: payload.employee_id,
                employee_name: String::new(),
                company_id: payload.company_id,
                company_name: None,
                store_id: Some(payload.store_id),
                store_name: None,
                date: payload.date,
                start: payload.window.start,
                end: payload.window.end,
                hours_worked: Some(payload.window.span_minutes() as f64 / 60.0),
                week_total: None,
                is_holiday: false,
            }
        }
    }

    impl ShiftBackend for MockBackend {
        async fn list_shifts(&self, _week_start: NaiveDate) -> BackendResult<Vec<Shift>> {
            Ok(self.stored())
        }

        async fn list_shifts_for_employee(&self, employee_id: i64) -> BackendResult<Vec<Shift>> {
            Ok(self.stored().into_iter().filter(|s| s.employee_id == employee_id).collect())
        }

        async fn list_month_shifts(&self, _year: i32, _month: u32) -> BackendResult<Vec<Shift>> {
            Ok(self.stored())
        }

        async fn create_shift(&self, payload: &ShiftPayload) -> BackendResult<Shift> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            let rejected = self.fail_create_all || self.fail_create_from.is_some_and(|from| payload.window.start >= from);
            if rejected {
                return Err(TransportError::Rejected("store closed".to_string()));
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let shift = self.record(id, payload);
            self.shifts.lock().push(shift.clone());
            Ok(shift)
        }

        async fn update_shift(&self, id: i64, payload: &ShiftPayload) -> BackendResult<Shift> {
            let mut shifts = self.shifts.lock();
            let position = shifts
                .iter()
                .position(|s| s.id == Some(id))
                .ok_or(TransportError::NotFound { entity: "shift", id })?;
            shifts[position] = self.record(id, payload);
            Ok(shifts[position].clone())
        }

        async fn delete_shift(&self, id: i64) -> BackendResult<()> {
            if self.fail_delete {
                return Err(TransportError::Rejected("delete refused".to_string()));
            }
            self.shifts.lock().retain(|s| s.id != Some(id));
            self.deleted.lock().push(id);
            Ok(())
        }

        async fn list_holidays(&self) -> BackendResult<Vec<Holiday>> {
            Ok(vec![])
        }

        async fn list_stores(&self) -> BackendResult<Vec<Store>> {
            Ok(vec![])
        }

        async fn list_employees(&self) -> BackendResult<Vec<Employee>> {
            Ok(vec![])
        }

        async fn hours_worked(&self, _query: &ReportQuery) -> BackendResult<Vec<Shift>> {
            Ok(self.stored())
        }

        async fn holiday_shifts(&self, _query: &ReportQuery) -> BackendResult<Vec<Shift>> {
            Ok(vec![])
        }

        async fn overtime(&self, _query: &ReportQuery) -> BackendResult<Vec<OvertimeRow>> {
            Ok(vec![])
        }

        async fn monthly_summary(&self, _year: i32, _month: u32, _employee_ids: &[i64]) -> BackendResult<Vec<MonthlySummary>> {
            Ok(vec![])
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn draft(start: &str, end: &str) -> ShiftDraft {
        let mut draft = ShiftDraft::new(7, Some(1), date());
        draft.start = start.to_string();
        draft.end = end.to_string();
        draft.store_id = Some(2);
        draft
    }

    fn split() -> SplitShiftProposal {
        let mut proposal = SplitShiftProposal::new(7, Some(1), date());
        proposal.morning = WindowDraft::new("08:00", "12:00");
        proposal.afternoon = WindowDraft::new("14:00", "18:00");
        proposal.store_id = Some(2);
        proposal
    }

    #[tokio::test]
    async fn test_simple_create_and_update() {
        let backend = MockBackend::default();
        let editor = ShiftEditor::new(&backend);

        let created = match editor.submit_simple(&draft("08:00", "16:00")).await.unwrap() {
            Outcome::Created(shift) => shift,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(created.id, Some(1));
        assert_eq!(editor.state(), SubmissionState::Accepted);

        let mut edit = created.to_draft();
        edit.end = "17:00".to_string();
        match editor.submit_simple(&edit).await.unwrap() {
            Outcome::Updated(shift) => assert_eq!(shift.end, TimeOfDay::hm(17, 0)),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(backend.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let backend = MockBackend::default();
        let editor = ShiftEditor::new(&backend);

        let error = editor.submit_simple(&draft("08:00", "07:00")).await.unwrap_err();
        match error {
            SubmitError::Invalid(errors) => assert!(errors.has(Field::Exit)),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(backend.stored().is_empty());
        assert!(editor.state().rejection().is_some());

        // The latch is released on the validation failure path too.
        assert!(!editor.latch().is_busy());
        assert!(editor.submit_simple(&draft("08:00", "16:00")).await.is_ok());
    }

    #[tokio::test]
    async fn test_transport_error_surfaces() {
        let backend = MockBackend {
            fail_create_all: true,
            ..Default::default()
        };
        let editor = ShiftEditor::new(&backend);

        let error = editor.submit_simple(&draft("08:00", "16:00")).await.unwrap_err();
        assert!(matches!(error, SubmitError::Transport(TransportError::Rejected(_))));
        assert!(!editor.latch().is_busy());
    }

    #[tokio::test]
    async fn test_split_creates_two_records() {
        let backend = MockBackend::default();
        let editor = ShiftEditor::new(&backend);

        match editor.submit_split(&split()).await.unwrap() {
            Outcome::SplitCreated(morning, afternoon) => {
                assert_eq!(morning.start, TimeOfDay::hm(8, 0));
                assert_eq!(afternoon.start, TimeOfDay::hm(14, 0));
                assert_eq!(morning.date, afternoon.date);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(backend.stored().len(), 2);
    }

    #[tokio::test]
    async fn test_split_half_failure_is_compensated() {
        let backend = MockBackend {
            fail_create_from: Some(TimeOfDay::hm(13, 0)),
            ..Default::default()
        };
        let editor = ShiftEditor::new(&backend);

        let error = editor.submit_split(&split()).await.unwrap_err();
        match error {
            SubmitError::PartialFailure { kept_id, compensated, source } => {
                assert_eq!(kept_id, None);
                assert!(compensated);
                assert!(matches!(source, TransportError::Rejected(_)));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(backend.stored().is_empty());
        assert_eq!(backend.deleted.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_split_reports_orphan_when_compensation_fails() {
        let backend = MockBackend {
            fail_create_from: Some(TimeOfDay::hm(13, 0)),
            fail_delete: true,
            ..Default::default()
        };
        let editor = ShiftEditor::new(&backend);

        let error = editor.submit_split(&split()).await.unwrap_err();
        match error {
            SubmitError::PartialFailure { kept_id, compensated, .. } => {
                assert_eq!(kept_id, Some(1));
                assert!(!compensated);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(backend.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_split_both_halves_failing() {
        let backend = MockBackend {
            fail_create_all: true,
            ..Default::default()
        };
        let editor = ShiftEditor::new(&backend);

        let error = editor.submit_split(&split()).await.unwrap_err();
        assert!(matches!(error, SubmitError::Transport(_)));
        assert!(backend.deleted.lock().is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_busy() {
        let gate = Arc::new(Notify::new());
        let backend = MockBackend {
            gate: Some(gate.clone()),
            ..Default::default()
        };
        let editor = ShiftEditor::new(&backend);
        let first_draft = draft("08:00", "16:00");

        let first = editor.submit_simple(&first_draft);
        tokio::pin!(first);
        tokio::select! {
            biased;
            _ = &mut first => panic!("submission finished before the backend answered"),
            _ = tokio::task::yield_now() => {}
        }
        assert!(editor.latch().is_busy());

        let second = editor.submit_simple(&draft("09:00", "17:00")).await;
        assert!(matches!(second, Err(SubmitError::Busy)));

        gate.notify_one();
        assert!(matches!(first.await, Ok(Outcome::Created(_))));
        assert!(!editor.latch().is_busy());
        assert_eq!(backend.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let backend = MockBackend::default();
        let editor = ShiftEditor::new(&backend);
        editor.submit_simple(&draft("08:00", "16:00")).await.unwrap();

        editor.delete(1).await.unwrap();
        assert!(backend.stored().is_empty());
        assert!(!editor.latch().is_busy());
    }
}
