//! The pure month-grid computation.
//!
//! [`build_month_grid`] maps a [`MonthAnchor`] to a fixed 6-row, 7-column,
//! Sunday-first view of that month: leading cells borrowed from the previous
//! month, one cell per real day of the target month, and synthetic trailing
//! cells padding the grid out to [`GRID_CELLS`].

use chrono::{Datelike, Days};

use crate::anchor::MonthAnchor;

/// Columns per grid row, one per weekday.
pub const GRID_COLUMNS: usize = 7;
/// Rows per grid.
pub const GRID_ROWS: usize = 6;
/// Total cells in every grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Short weekday labels in grid column order (Sunday first).
pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month view.
///
/// Padding cells carry a nonzero [`month_offset`](DayCell::month_offset),
/// the navigation hint applied when they are clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    day_number: u32,
    in_target_month: bool,
    month_offset: i32,
    identity_key: String,
}

impl DayCell {
    fn new(index: usize, day_number: u32, month_offset: i32) -> Self {
        Self {
            day_number,
            in_target_month: month_offset == 0,
            month_offset,
            identity_key: format!("{index:02}:{month_offset:+}:{day_number:02}"),
        }
    }

    /// The day-of-month number to display (1-31).
    pub fn day_number(&self) -> u32 {
        self.day_number
    }

    /// True only for cells belonging to the anchor month.
    pub fn in_target_month(&self) -> bool {
        self.in_target_month
    }

    /// `-1`, `0`, or `+1`: how far clicking this cell moves the view.
    pub fn month_offset(&self) -> i32 {
        self.month_offset
    }

    /// Stable list-identity token, derived from the cell's grid position,
    /// month offset, and day number.
    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }
}

/// A complete month view: exactly [`GRID_CELLS`] cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// All cells in display order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The cell at `index`, if within the grid.
    pub fn get(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    /// Iterates the cells in display order.
    pub fn iter(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter()
    }
}

/// Builds the month view for `anchor`. Pure; every valid anchor yields a
/// valid grid.
pub fn build_month_grid(anchor: MonthAnchor) -> MonthGrid {
    let first = anchor.first_day();
    let weekday0 = first.weekday().num_days_from_sunday();
    // A month that opens on Sunday still gets a full leading week.
    let leading = if weekday0 == 0 { 7 } else { u64::from(weekday0) };

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for (index, back) in (1..=leading).rev().enumerate() {
        let day = first
            .checked_sub_days(Days::new(back))
            .map(|date| date.day())
            // only reachable at chrono's minimum representable date
            .unwrap_or(1);
        cells.push(DayCell::new(index, day, -1));
    }

    for date in first
        .iter_days()
        .take_while(|date| date.month() == first.month())
    {
        cells.push(DayCell::new(cells.len(), date.day(), 0));
    }

    let mut day_number = 1;
    while cells.len() < GRID_CELLS {
        cells.push(DayCell::new(cells.len(), day_number, 1));
        day_number += 1;
    }

    MonthGrid { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(year: i32, month: u32) -> MonthGrid {
        build_month_grid(MonthAnchor::new(year, month).expect("valid month"))
    }

    fn day_numbers(cells: &[DayCell]) -> Vec<u32> {
        cells.iter().map(|cell| cell.day_number()).collect()
    }

    #[test]
    fn every_grid_holds_exactly_42_cells() {
        for year in 2019..=2026 {
            for month in 1..=12 {
                assert_eq!(build(year, month).cells().len(), GRID_CELLS, "{year}-{month}");
            }
        }
    }

    #[test]
    fn target_run_is_contiguous_and_month_sized() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                let anchor = MonthAnchor::new(year, month).unwrap();
                let grid = build_month_grid(anchor);
                let cells = grid.cells();
                let start = cells.iter().position(|c| c.in_target_month()).unwrap();
                let end = cells.iter().rposition(|c| c.in_target_month()).unwrap();
                assert_eq!((end - start + 1) as u32, anchor.days_in_month());
                assert!(
                    cells[start..=end]
                        .iter()
                        .all(|c| c.in_target_month() && c.month_offset() == 0)
                );
                assert!(cells[..start].iter().all(|c| c.month_offset() == -1));
                assert!(cells[end + 1..].iter().all(|c| c.month_offset() == 1));
            }
        }
    }

    #[test]
    fn march_2024_layout() {
        // March 1 2024 is a Friday: five leading cells ending on leap-day
        // February 29.
        let grid = build(2024, 3);
        let cells = grid.cells();
        assert_eq!(day_numbers(&cells[..5]), vec![25, 26, 27, 28, 29]);
        assert!(cells[..5].iter().all(|c| c.month_offset() == -1));
        assert_eq!(day_numbers(&cells[5..36]), (1..=31).collect::<Vec<_>>());
        assert_eq!(day_numbers(&cells[36..]), vec![1, 2, 3, 4, 5, 6]);
        assert!(
            cells[36..]
                .iter()
                .all(|c| !c.in_target_month() && c.month_offset() == 1)
        );
    }

    #[test]
    fn sunday_start_month_gets_a_full_leading_week() {
        // September 1 2024 is a Sunday: a whole week of August is prepended.
        let grid = build(2024, 9);
        let cells = grid.cells();
        assert_eq!(day_numbers(&cells[..7]), vec![25, 26, 27, 28, 29, 30, 31]);
        assert!(cells[..7].iter().all(|c| c.month_offset() == -1));
        assert_eq!(day_numbers(&cells[7..37]), (1..=30).collect::<Vec<_>>());
        assert_eq!(day_numbers(&cells[37..]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn leading_cells_cross_year_boundaries() {
        // January 1 2024 is a Monday: one leading cell, December 31.
        let grid = build(2024, 1);
        let cells = grid.cells();
        assert_eq!(cells[0].day_number(), 31);
        assert_eq!(cells[0].month_offset(), -1);
        assert_eq!(cells[1].day_number(), 1);
        assert!(cells[1].in_target_month());
    }

    #[test]
    fn leading_cells_respect_non_leap_february() {
        // March 1 2023 is a Wednesday: three leading cells ending on
        // February 28.
        let grid = build(2023, 3);
        assert_eq!(day_numbers(&grid.cells()[..3]), vec![26, 27, 28]);
    }

    #[test]
    fn trailing_cells_count_from_one() {
        // January 2024: one leading cell plus 31 target days leaves ten
        // trailing cells, numbered synthetically from 1.
        let grid = build(2024, 1);
        assert_eq!(
            day_numbers(&grid.cells()[32..]),
            (1..=10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn identity_keys_are_unique_and_stable() {
        let grid = build(2024, 3);
        let keys: std::collections::HashSet<_> =
            grid.iter().map(|c| c.identity_key().to_owned()).collect();
        assert_eq!(keys.len(), GRID_CELLS);

        let rebuilt = build(2024, 3);
        for (a, b) in grid.iter().zip(rebuilt.iter()) {
            assert_eq!(a.identity_key(), b.identity_key());
        }
    }

    #[test]
    fn weekday_labels_start_on_sunday() {
        assert_eq!(WEEKDAY_LABELS[0], "Sun");
        assert_eq!(WEEKDAY_LABELS[GRID_COLUMNS - 1], "Sat");
    }
}
