//! Month-grid math.
//!
//! Pure helpers that turn a (year, month) pair into the 7-column grid a
//! calendar renders: leading blanks for the days before the 1st, then one
//! cell per day. Months are 1-12, chrono convention.

use chrono::{Datelike, NaiveDate};

use crate::event::DATE_FORMAT;

/// First day of the month. Month is always 1-12 here (callers advance it
/// through `CalendarView`'s wrapping transitions), so this cannot fail.
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12")
}

/// Number of days in the month (28-31), computed as the day before the
/// first of the next month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    (next - first_of_month(year, month)).num_days() as u32
}

/// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month).weekday().num_days_from_sunday()
}

/// A month laid out for rendering: `leading` blank cells, then days
/// `1..=days`, wrapped into rows of 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    leading: u32,
    days: u32,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Self {
        MonthGrid {
            year,
            month,
            leading: first_weekday_of_month(year, month),
            days: days_in_month(year, month),
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn leading(&self) -> u32 {
        self.leading
    }

    /// All cells in order: `leading` placeholders, then `Some(1)..=Some(days)`.
    pub fn cells(&self) -> Vec<Option<u32>> {
        let mut cells: Vec<Option<u32>> = vec![None; self.leading as usize];
        cells.extend((1..=self.days).map(Some));
        cells
    }

    /// Cells chunked into rows of 7, the last row padded with placeholders
    /// so every row renders at full width.
    pub fn weeks(&self) -> Vec<Vec<Option<u32>>> {
        let mut cells = self.cells();
        let rem = cells.len() % 7;
        if rem != 0 {
            cells.resize(cells.len() + (7 - rem), None);
        }
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }

    /// The index key for a day cell, formatted with the same `DATE_FORMAT`
    /// event `date` strings use, so both sides of the exact string match
    /// share one definition.
    pub fn cell_date(&self, day: u32) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .expect("day within the month")
            .format(DATE_FORMAT)
            .to_string()
    }

    /// Header line for rendering, e.g. "June 2024".
    pub fn title(&self) -> String {
        first_of_month(self.year, self.month)
            .format("%B %Y")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 6), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_first_weekday_of_month() {
        // June 1st 2024 was a Saturday.
        assert_eq!(first_weekday_of_month(2024, 6), 6);
        // September 1st 2024 was a Sunday.
        assert_eq!(first_weekday_of_month(2024, 9), 0);
    }

    #[test]
    fn test_cell_count_is_leading_plus_days() {
        for (year, month) in [(2024, 2), (2024, 6), (2023, 12), (2025, 1)] {
            let grid = MonthGrid::new(year, month);
            assert_eq!(
                grid.cells().len() as u32,
                first_weekday_of_month(year, month) + days_in_month(year, month)
            );
        }
    }

    #[test]
    fn test_day_one_lands_in_first_weekday_column() {
        let grid = MonthGrid::new(2024, 6);
        let weeks = grid.weeks();
        let col = first_weekday_of_month(2024, 6) as usize;
        assert_eq!(weeks[0][col], Some(1));
        for cell in &weeks[0][..col] {
            assert_eq!(*cell, None);
        }
    }

    #[test]
    fn test_weeks_are_always_seven_wide() {
        for (year, month) in [(2024, 2), (2024, 6), (2026, 2)] {
            for week in MonthGrid::new(year, month).weeks() {
                assert_eq!(week.len(), 7);
            }
        }
    }

    #[test]
    fn test_cell_date_is_zero_padded() {
        let grid = MonthGrid::new(2024, 6);
        assert_eq!(grid.cell_date(5), "2024-06-05");
        assert_eq!(grid.cell_date(15), "2024-06-15");
    }

    #[test]
    fn test_cell_date_round_trips_through_the_event_date_format() {
        let grid = MonthGrid::new(987, 3);
        let key = grid.cell_date(7);
        assert_eq!(key, "0987-03-07");
        assert!(NaiveDate::parse_from_str(&key, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_title() {
        assert_eq!(MonthGrid::new(2024, 6).title(), "June 2024");
    }
}
