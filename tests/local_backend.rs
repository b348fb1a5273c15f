#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::NaiveDate;
    use turnos::api::ShiftBackend;
    use turnos::db::migrations::HOLIDAYS_2025;
    use turnos::db::shifts::LocalBackend;
    use turnos::libs::error::TransportError;
    use turnos::libs::report::ReportQuery;
    use turnos::libs::shift::{Employee, Holiday, ShiftPayload, Store};
    use turnos::libs::time_of_day::{ShiftWindow, TimeOfDay};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(name: &str, surname: &str, company_id: Option<i64>) -> Employee {
        Employee {
            id: 0,
            name: name.to_string(),
            surname: surname.to_string(),
            dni: String::new(),
            company_id,
            company_name: company_id.map(|_| "Sport Center SAC".to_string()),
        }
    }

    fn payload(employee_id: i64, store_id: i64, day: NaiveDate, start: (u8, u8), end: (u8, u8)) -> ShiftPayload {
        ShiftPayload {
            employee_id,
            company_id: None,
            store_id,
            date: day,
            window: ShiftWindow::new(TimeOfDay::hm(start.0, start.1), TimeOfDay::hm(end.0, end.1)),
        }
    }

    /// Backend with two employees and one store.
    fn seeded() -> Result<(LocalBackend, i64, i64, i64)> {
        let backend = LocalBackend::in_memory()?;
        let store = backend.add_store(&Store::new("Tienda 1", "Av. Larco 123"))?;
        let ana = backend.add_employee(&employee("Ana", "Pérez", Some(3)))?;
        let luis = backend.add_employee(&employee("Luis", "", None))?;
        Ok((backend, store.id.unwrap(), ana.id, luis.id))
    }

    #[tokio::test]
    async fn test_create_and_list_week() -> Result<()> {
        let (backend, store, ana, luis) = seeded()?;

        let created = backend.create_shift(&payload(ana, store, date(2025, 3, 10), (8, 0), (17, 0))).await?;
        assert_eq!(created.employee_name, "Ana Pérez");
        assert_eq!(created.store_name.as_deref(), Some("Tienda 1"));
        // Company resolved from the employee.
        assert_eq!(created.company_id, Some(3));
        assert_eq!(created.hours_worked, Some(8.25));

        backend.create_shift(&payload(ana, store, date(2025, 3, 12), (8, 0), (12, 0))).await?;
        backend.create_shift(&payload(luis, store, date(2025, 3, 16), (14, 0), (22, 0))).await?;
        // Next week, not listed.
        backend.create_shift(&payload(luis, store, date(2025, 3, 17), (14, 0), (22, 0))).await?;

        let week = backend.list_shifts(date(2025, 3, 10)).await?;
        assert_eq!(week.len(), 3);
        let ana_shifts: Vec<_> = week.iter().filter(|shift| shift.employee_id == ana).collect();
        assert_eq!(ana_shifts.len(), 2);
        assert!(ana_shifts.iter().all(|shift| shift.week_total == Some(12.25)));

        let luis_week = week.iter().find(|shift| shift.employee_id == luis).unwrap();
        assert_eq!(luis_week.week_total, Some(8.0));
        assert_eq!(luis_week.employee_name, "Luis");

        assert_eq!(backend.list_month_shifts(2025, 3).await?.len(), 4);
        assert_eq!(backend.list_shifts_for_employee(luis).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_lunch_deduction() -> Result<()> {
        let (backend, store, ana, _) = seeded()?;

        let full = backend.create_shift(&payload(ana, store, date(2025, 3, 10), (8, 0), (17, 0))).await?;
        assert_eq!(full.hours_worked, Some(8.25));

        let morning = backend.create_shift(&payload(ana, store, date(2025, 3, 11), (8, 0), (12, 0))).await?;
        assert_eq!(morning.hours_worked, Some(4.0));

        let afternoon = backend.create_shift(&payload(ana, store, date(2025, 3, 12), (13, 0), (22, 0))).await?;
        assert_eq!(afternoon.hours_worked, Some(9.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_rejections() -> Result<()> {
        let (backend, store, ana, _) = seeded()?;

        let inverted = backend.create_shift(&payload(ana, store, date(2025, 3, 10), (17, 0), (8, 0))).await;
        assert!(matches!(inverted, Err(TransportError::Rejected(_))));

        let unknown_employee = backend.create_shift(&payload(999, store, date(2025, 3, 10), (8, 0), (16, 0))).await;
        assert!(matches!(
            unknown_employee,
            Err(TransportError::NotFound { entity: "employee", id: 999 })
        ));

        let unknown_store = backend.create_shift(&payload(ana, 42, date(2025, 3, 10), (8, 0), (16, 0))).await;
        assert!(matches!(unknown_store, Err(TransportError::NotFound { entity: "store", id: 42 })));

        assert!(backend.list_shifts(date(2025, 3, 10)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete() -> Result<()> {
        let (backend, store, ana, _) = seeded()?;
        let created = backend.create_shift(&payload(ana, store, date(2025, 3, 10), (8, 0), (12, 0))).await?;
        let id = created.id.unwrap();

        let updated = backend.update_shift(id, &payload(ana, store, date(2025, 3, 11), (8, 0), (17, 0))).await?;
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.date, date(2025, 3, 11));
        assert_eq!(updated.hours_worked, Some(8.25));

        backend.delete_shift(id).await?;
        assert!(matches!(
            backend.delete_shift(id).await,
            Err(TransportError::NotFound { entity: "shift", .. })
        ));
        assert!(matches!(
            backend.update_shift(id, &payload(ana, store, date(2025, 3, 11), (8, 0), (17, 0))).await,
            Err(TransportError::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_holidays_are_seeded_and_flag_shifts() -> Result<()> {
        let (backend, store, ana, _) = seeded()?;

        let holidays = backend.list_holidays().await?;
        assert_eq!(holidays.len(), HOLIDAYS_2025.len());
        assert!(holidays.windows(2).all(|pair| pair[0].date < pair[1].date));

        let labour_day = backend.create_shift(&payload(ana, store, date(2025, 5, 1), (8, 0), (16, 0))).await?;
        assert!(labour_day.is_holiday);
        let regular = backend.create_shift(&payload(ana, store, date(2025, 5, 2), (8, 0), (16, 0))).await?;
        assert!(!regular.is_holiday);

        // The flag follows the holiday table on every read.
        backend.add_holiday(&Holiday::new(date(2025, 5, 2), "Feriado puente"))?;
        let query = ReportQuery::new(date(2025, 5, 1), date(2025, 5, 31), vec![])?;
        assert_eq!(backend.holiday_shifts(&query).await?.len(), 2);

        assert!(backend.remove_holiday(date(2025, 5, 2))?);
        assert!(!backend.remove_holiday(date(2025, 5, 2))?);
        assert_eq!(backend.holiday_shifts(&query).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_hours_report_filters_employees() -> Result<()> {
        let (backend, store, ana, luis) = seeded()?;
        backend.create_shift(&payload(ana, store, date(2025, 3, 10), (8, 0), (17, 0))).await?;
        backend.create_shift(&payload(ana, store, date(2025, 3, 18), (8, 0), (17, 0))).await?;
        backend.create_shift(&payload(luis, store, date(2025, 3, 10), (8, 0), (12, 0))).await?;

        let all = ReportQuery::new(date(2025, 3, 1), date(2025, 3, 31), vec![])?;
        let rows = backend.hours_worked(&all).await?;
        assert_eq!(rows.len(), 3);
        let ana_total = rows.iter().find(|shift| shift.employee_id == ana).unwrap().week_total;
        assert_eq!(ana_total, Some(16.5));

        let only_luis = ReportQuery::new(date(2025, 3, 1), date(2025, 3, 31), vec![luis])?;
        let rows = backend.hours_worked(&only_luis).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_id, luis);
        Ok(())
    }

    #[tokio::test]
    async fn test_overtime_above_weekly_limit() -> Result<()> {
        let (backend, store, ana, luis) = seeded()?;
        let backend = backend.with_weekly_limit(10.0);
        assert_eq!(backend.weekly_hours_limit(), 10.0);

        backend.create_shift(&payload(ana, store, date(2025, 3, 10), (8, 0), (17, 0))).await?;
        backend.create_shift(&payload(ana, store, date(2025, 3, 11), (8, 0), (17, 0))).await?;
        backend.create_shift(&payload(luis, store, date(2025, 3, 10), (8, 0), (17, 0))).await?;

        // The range starts mid-week; the whole week is summed.
        let query = ReportQuery::new(date(2025, 3, 12), date(2025, 3, 16), vec![])?;
        let rows = backend.overtime(&query).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].employee_id, ana);
        assert_eq!(rows[0].week_start, date(2025, 3, 10));
        assert_eq!(rows[0].hours_worked, 16.5);
        assert_eq!(rows[0].overtime, 6.5);
        Ok(())
    }

    #[tokio::test]
    async fn test_monthly_summary() -> Result<()> {
        let (backend, store, ana, luis) = seeded()?;
        backend.create_shift(&payload(ana, store, date(2025, 5, 1), (8, 0), (12, 0))).await?;
        backend.create_shift(&payload(ana, store, date(2025, 5, 1), (14, 0), (18, 0))).await?;
        backend.create_shift(&payload(ana, store, date(2025, 5, 5), (8, 0), (17, 0))).await?;
        backend.create_shift(&payload(ana, store, date(2025, 6, 2), (8, 0), (17, 0))).await?;

        // No filter means every employee, also those without shifts.
        let summaries = backend.monthly_summary(2025, 5, &[]).await?;
        assert_eq!(summaries.len(), 2);

        let summary = summaries.iter().find(|summary| summary.employee_id == ana).unwrap();
        assert_eq!(summary.employee_name, "Ana Pérez");
        assert_eq!(summary.total_hours, 16.25);
        // Both halves of the split shift fall on one holiday.
        assert_eq!(summary.holiday_days, 1);
        assert_eq!(summary.holiday_hours, 8.0);
        assert_eq!(summary.shifts.len(), 3);

        let idle = summaries.iter().find(|summary| summary.employee_id == luis).unwrap();
        assert_eq!(idle.total_hours, 0.0);
        assert!(idle.shifts.is_empty());

        let filtered = backend.monthly_summary(2025, 5, &[luis]).await?;
        assert_eq!(filtered.len(), 1);

        assert!(backend.monthly_summary(2025, 13, &[]).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_reference_data() -> Result<()> {
        let (backend, _, _, _) = seeded()?;
        backend.add_store(&Store::new("Tienda 10", ""))?;
        backend.add_store(&Store::new("Centro", ""))?;
        backend.add_store(&Store::new("Tienda 2", ""))?;

        let names: Vec<String> = backend.list_stores().await?.into_iter().map(|store| store.name).collect();
        assert_eq!(names, vec!["Tienda 1", "Tienda 2", "Tienda 10", "Centro"]);

        let employees = backend.list_employees().await?;
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].full_name(), "Ana Pérez");

        assert!(matches!(
            backend.delete_store(999),
            Err(TransportError::NotFound { entity: "store", id: 999 })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_stored_time_is_corrupt() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("turnos.db");
        let backend = LocalBackend::open_at(&path)?;
        let store = backend.add_store(&Store::new("Tienda 1", ""))?;
        let ana = backend.add_employee(&employee("Ana", "Pérez", None))?;
        backend.create_shift(&payload(ana.id, store.id.unwrap(), date(2025, 3, 10), (8, 0), (12, 0))).await?;

        // Written behind the backend's back.
        let raw = rusqlite::Connection::open(&path)?;
        raw.execute(
            "INSERT INTO shifts (employee_id, store_id, date, start, end, hours_worked) VALUES (?1, ?2, '2025-03-11', '9h', '13:00', 4.0)",
            rusqlite::params![ana.id, store.id],
        )?;

        let listed = backend.list_shifts(date(2025, 3, 10)).await;
        assert!(matches!(listed, Err(TransportError::Corrupt(_))));

        // Other weeks stay readable.
        assert!(backend.list_shifts(date(2025, 3, 17)).await?.is_empty());
        Ok(())
    }
}
