//! Headless month-grid date picker.
//!
//! `datepick` is the core of a clickable-input date picker: the pure
//! computation that turns a month into a 6-row, 7-column, Sunday-first grid
//! of day cells, a per-widget cache of those grids, month navigation with
//! year rollover, and the open/select/close state machine. Rendering, icons,
//! and focus plumbing belong to the host toolkit, which drives this crate
//! through [`DatePicker`] and reads grids back as [`MonthGrid`] cells.
//!
//! Leading cells show the tail of the previous month; a month that opens on
//! Sunday gets a whole leading week rather than none. Trailing cells count
//! `1, 2, 3, …` until the grid holds [`GRID_CELLS`] cells. Clicking either
//! kind of padding cell navigates to the adjacent month, while clicking a
//! target-month cell commits a `"15 March 2024"`-style selection.
//!
//! # Example
//!
//! ```
//! use datepick::{ClickOutcome, DatePicker, DatePickerArgs, MonthAnchor};
//!
//! let march = MonthAnchor::new(2024, 3).expect("valid month");
//! let mut picker = DatePicker::new(DatePickerArgs::default().initial_month(march));
//!
//! picker.focus_gained();
//! let grid = picker.grid();
//! assert_eq!(grid.cells().len(), datepick::GRID_CELLS);
//!
//! let day = grid
//!     .iter()
//!     .find(|cell| cell.in_target_month() && cell.day_number() == 15)
//!     .expect("March has a 15th");
//! assert_eq!(picker.click_cell(day), ClickOutcome::Selected);
//! assert_eq!(picker.display_text(), "15 March 2024");
//! ```

pub mod anchor;
pub mod cache;
pub mod grid;
pub mod picker;

pub use anchor::{InvalidMonthLabel, MonthAnchor};
pub use cache::MonthCache;
pub use grid::{
    DayCell, GRID_CELLS, GRID_COLUMNS, GRID_ROWS, MonthGrid, WEEKDAY_LABELS, build_month_grid,
};
pub use picker::{ClickOutcome, DatePicker, DatePickerArgs, DatePickerDefaults, PickerPhase};
