#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local, NaiveDate};
    use turnos::commands::input::{parse_date, parse_employee_ids, parse_month, parse_window};

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-10").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(parse_date("Today").unwrap(), Local::now().date_naive());
        assert!(parse_date("10/03/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-09").unwrap(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(parse_month("current").unwrap().day(), 1);
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("septiembre").is_err());
    }

    #[test]
    fn test_parse_employee_ids() {
        assert!(parse_employee_ids(None).unwrap().is_empty());
        assert!(parse_employee_ids(Some("  ")).unwrap().is_empty());
        assert_eq!(parse_employee_ids(Some("1, 2,3")).unwrap(), vec![1, 2, 3]);
        assert!(parse_employee_ids(Some("1,a")).is_err());
    }

    #[test]
    fn test_parse_window() {
        let window = parse_window("08:00-12:30").unwrap();
        assert_eq!(window.start, "08:00");
        assert_eq!(window.end, "12:30");

        let window = parse_window(" 14:00 - 18:00 ").unwrap();
        assert_eq!((window.start.as_str(), window.end.as_str()), ("14:00", "18:00"));

        assert!(parse_window("08:00").is_err());
    }
}
