// --- File: crates/dentify_booking/src/calendar.rs ---

//! Month grid for the date-selection step.

use crate::display;
use chrono::{Datelike, NaiveDate};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;

/// One visible month, cells in row-major order with weeks starting on
/// Sunday. Cells outside the month are `None`; the grid always holds
/// exactly 6 × 7 entries so the layout never jumps between months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub cells: Vec<Option<NaiveDate>>,
}

impl MonthGrid {
    /// Builds the grid for one month, or `None` for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<MonthGrid> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(year, month)?;
        let mut cells = vec![None; GRID_ROWS * GRID_COLS];
        for day in 1..=days {
            cells[leading + (day - 1) as usize] = NaiveDate::from_ymd_opt(year, month, day);
        }
        Some(MonthGrid { year, month, cells })
    }

    /// Grid for the month containing `date`.
    pub fn for_date(date: NaiveDate) -> MonthGrid {
        MonthGrid::new(date.year(), date.month()).unwrap_or_else(|| MonthGrid {
            year: date.year(),
            month: date.month(),
            cells: vec![None; GRID_ROWS * GRID_COLS],
        })
    }

    /// Header text, for example `Tháng 3 / 2025`.
    pub fn label(&self) -> String {
        display::month_label(self.year, self.month)
    }

    /// The previous month's grid, wrapping the year in January.
    pub fn prev(&self) -> Option<MonthGrid> {
        let (year, month) = prev_month(self.year, self.month);
        MonthGrid::new(year, month)
    }

    /// The following month's grid, wrapping the year in December.
    pub fn next(&self) -> Option<MonthGrid> {
        let (year, month) = next_month(self.year, self.month);
        MonthGrid::new(year, month)
    }
}

/// Days strictly before today cannot be picked.
pub fn day_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Number of days in a month (28 to 31).
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(next_first.signed_duration_since(first).num_days() as u32)
}
