#[cfg(test)]
mod tests {
    use crate::calendar::{
        day_selectable, days_in_month, next_month, prev_month, MonthGrid, GRID_COLS, GRID_ROWS,
    };
    use chrono::NaiveDate;

    #[test]
    fn test_grid_places_days_after_leading_blanks() {
        // March 2025 starts on a Saturday, so six leading cells are blank.
        let grid = MonthGrid::new(2025, 3).unwrap();
        assert_eq!(grid.cells.len(), GRID_ROWS * GRID_COLS);
        for cell in &grid.cells[..6] {
            assert_eq!(*cell, None);
        }
        assert_eq!(grid.cells[6], NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(grid.cells[36], NaiveDate::from_ymd_opt(2025, 3, 31));
        for cell in &grid.cells[37..] {
            assert_eq!(*cell, None);
        }
    }

    #[test]
    fn test_grid_with_month_starting_on_sunday_has_no_leading_blanks() {
        // June 2025 starts on a Sunday.
        let grid = MonthGrid::new(2025, 6).unwrap();
        assert_eq!(grid.cells[0], NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(grid.cells[29], NaiveDate::from_ymd_opt(2025, 6, 30));
        assert_eq!(grid.cells[30], None);
    }

    #[test]
    fn test_grid_is_always_six_weeks() {
        for month in 1..=12 {
            let grid = MonthGrid::new(2025, month).unwrap();
            assert_eq!(
                grid.cells.len(),
                42,
                "month {} should render 42 cells",
                month
            );
        }
    }

    #[test]
    fn test_month_label() {
        assert_eq!(MonthGrid::new(2025, 3).unwrap().label(), "Tháng 3 / 2025");
        assert_eq!(MonthGrid::new(2025, 12).unwrap().label(), "Tháng 12 / 2025");
    }

    #[test]
    fn test_navigation_wraps_the_year() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(prev_month(2025, 7), (2025, 6));
        assert_eq!(next_month(2025, 7), (2025, 8));

        let december = MonthGrid::new(2025, 12).unwrap();
        let january = december.next().unwrap();
        assert_eq!((january.year, january.month), (2026, 1));
        let back = january.prev().unwrap();
        assert_eq!((back.year, back.month), (2025, 12));
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn test_past_days_are_not_selectable() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(!day_selectable(today.pred_opt().unwrap(), today));
        assert!(day_selectable(today, today));
        assert!(day_selectable(today.succ_opt().unwrap(), today));
    }

    #[test]
    fn test_for_date_uses_the_containing_month() {
        let grid = MonthGrid::for_date(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
        assert_eq!((grid.year, grid.month), (2025, 3));
    }
}
