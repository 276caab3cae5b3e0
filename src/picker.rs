//! The date-picker widget state machine.
//!
//! ## Usage
//!
//! Headless: the host renders the input field and the calendar overlay, and
//! forwards focus changes and cell clicks here. This type owns the month in
//! view, the committed selection, and the per-widget grid cache.

use std::sync::Arc;

use derive_setters::Setters;
use tracing::debug;

use crate::{
    anchor::MonthAnchor,
    cache::MonthCache,
    grid::{DayCell, MonthGrid},
};

/// Visibility phase of the calendar overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    /// Overlay hidden; only the input field shows.
    #[default]
    Closed,
    /// Overlay visible and accepting grid interaction.
    Open,
}

/// What a cell click amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A padding cell moved the view to an adjacent month.
    Navigated,
    /// A target-month cell committed a selection and closed the overlay.
    /// Hosts should blur the input field on this outcome.
    Selected,
    /// The overlay was closed; nothing happened.
    Ignored,
}

/// Defaults for date picker behavior.
pub struct DatePickerDefaults;

impl DatePickerDefaults {
    /// Input-field text shown before any selection.
    pub const PLACEHOLDER: &'static str = "Choose date";
}

/// Configuration for [`DatePicker`].
#[derive(Debug, Clone, Setters)]
pub struct DatePickerArgs {
    /// Month shown when the picker first opens. Defaults to the current
    /// local month.
    #[setters(strip_option)]
    pub initial_month: Option<MonthAnchor>,
    /// Input-field text shown while nothing is selected.
    #[setters(into)]
    pub placeholder: String,
}

impl Default for DatePickerArgs {
    fn default() -> Self {
        Self {
            initial_month: None,
            placeholder: DatePickerDefaults::PLACEHOLDER.to_string(),
        }
    }
}

/// Holds the selection and navigation state for one date-picker widget.
pub struct DatePicker {
    phase: PickerPhase,
    month: MonthAnchor,
    selection: Option<String>,
    placeholder: String,
    cache: MonthCache,
}

impl DatePicker {
    /// Creates a picker from `args`.
    pub fn new(args: DatePickerArgs) -> Self {
        Self {
            phase: PickerPhase::Closed,
            month: args.initial_month.unwrap_or_else(MonthAnchor::current),
            selection: None,
            placeholder: args.placeholder,
            cache: MonthCache::new(),
        }
    }

    /// Grid for the month in view, cached across revisits.
    pub fn grid(&mut self) -> Arc<MonthGrid> {
        self.cache.resolve(self.month)
    }

    /// Header label for the month in view, e.g. `"March 2024"`.
    pub fn month_label(&self) -> String {
        self.month.label()
    }

    /// The month currently in view.
    pub fn current_month(&self) -> MonthAnchor {
        self.month
    }

    /// The committed selection string, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Text for the input field: the committed selection, or the
    /// placeholder while nothing is selected.
    pub fn display_text(&self) -> &str {
        self.selection.as_deref().unwrap_or(&self.placeholder)
    }

    /// Current overlay phase.
    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// True while the overlay is visible.
    pub fn is_open(&self) -> bool {
        self.phase == PickerPhase::Open
    }

    /// The input field gained focus; reveal the overlay.
    pub fn focus_gained(&mut self) {
        self.phase = PickerPhase::Open;
    }

    /// The input field lost focus; hide the overlay. The committed
    /// selection is untouched.
    pub fn focus_lost(&mut self) {
        self.phase = PickerPhase::Closed;
    }

    /// Chevron navigation: moves the view `step` months. Keeps any
    /// committed selection.
    pub fn step_month(&mut self, step: i32) {
        self.month = self.month.advance(step);
        debug!(month = %self.month.label(), "month view changed");
    }

    /// Moves the view forward one month.
    pub fn next_month(&mut self) {
        self.step_month(1);
    }

    /// Moves the view back one month.
    pub fn previous_month(&mut self) {
        self.step_month(-1);
    }

    /// Routes a click on `cell` while the overlay is open.
    ///
    /// Padding cells navigate to the adjacent month and clear the pending
    /// selection; target-month cells commit
    /// `"{day_number} {month label}"` and close the overlay.
    pub fn click_cell(&mut self, cell: &DayCell) -> ClickOutcome {
        if self.phase == PickerPhase::Closed {
            return ClickOutcome::Ignored;
        }
        if cell.month_offset() != 0 {
            // The selection display is month-relative; navigating away
            // invalidates it.
            self.step_month(cell.month_offset());
            self.selection = None;
            return ClickOutcome::Navigated;
        }
        let committed = format!("{} {}", cell.day_number(), self.month.label());
        debug!(selection = %committed, "date committed");
        self.selection = Some(committed);
        self.phase = PickerPhase::Closed;
        ClickOutcome::Selected
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(DatePickerArgs::default())
    }
}
