//! Month identity and navigation.
//!
//! A [`MonthAnchor`] names a single calendar month. It can be built from any
//! date inside that month; the day-of-month component is discarded by
//! construction. All calendar math (leap years, month lengths, year rollover)
//! is delegated to [`chrono`].

use chrono::{Datelike, Local, Months, NaiveDate};
use thiserror::Error;

/// Error returned when a month label cannot be parsed back into a
/// [`MonthAnchor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a \"Month Year\" label: {label:?}")]
pub struct InvalidMonthLabel {
    /// The rejected input.
    pub label: String,
}

/// A calendar month, normalized to its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthAnchor {
    first: NaiveDate,
}

impl MonthAnchor {
    /// Creates an anchor if `month` is in `1..=12` and the year is within
    /// chrono's representable range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Anchors the month containing `date`, discarding the day component.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// The month containing the current local date.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The first day of the month as a plain date.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of real days in this month, leap-year aware.
    pub fn days_in_month(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .map(|next| next.signed_duration_since(self.first).num_days() as u32)
            // chrono's last representable month is a December
            .unwrap_or(31)
    }

    /// Moves `step` months forward or backward, rolling the year over as
    /// needed. Saturates at the ends of chrono's representable range.
    pub fn advance(&self, step: i32) -> Self {
        let stepped = if step >= 0 {
            self.first.checked_add_months(Months::new(step as u32))
        } else {
            self.first.checked_sub_months(Months::new(step.unsigned_abs()))
        };
        stepped.map(|first| Self { first }).unwrap_or(*self)
    }

    /// The display label for this month, e.g. `"March 2024"`.
    ///
    /// Doubles as the cache key in [`crate::MonthCache`] and as the tail of
    /// a committed selection string.
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Strict inverse of [`MonthAnchor::label`].
    ///
    /// Hosts that hold bare label strings must re-enter the typed world
    /// here; anything that does not round-trip through [`MonthAnchor::label`]
    /// is rejected, so a malformed identifier can never reach the cache or
    /// the grid builder.
    pub fn from_label(label: &str) -> Result<Self, InvalidMonthLabel> {
        let trimmed = label.trim();
        let parsed = NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %B %Y")
            .map(|first| Self { first })
            .map_err(|_| InvalidMonthLabel {
                label: label.to_owned(),
            })?;
        if !parsed.label().eq_ignore_ascii_case(trimmed) {
            return Err(InvalidMonthLabel {
                label: label.to_owned(),
            });
        }
        Ok(parsed)
    }
}
