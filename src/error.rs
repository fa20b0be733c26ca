use chrono::NaiveDate;

use crate::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible date operations.
///
/// Every variant is recoverable: nothing in this crate terminates the
/// process on bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// B.S. date outside the tabulated range.
    #[error("B.S. date {year}-{month:02}-{day:02} is outside the supported range")]
    OutOfRange { year: i32, month: u8, day: u8 },

    /// Gregorian date outside the range covered by the reference table.
    #[error("Gregorian date {0} is outside the supported range")]
    GregorianOutOfRange(NaiveDate),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day below 1 or past the tabulated length of its month.
    #[error("Invalid day {day} for month {year}-{month:02} (max {max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Year with no row in the reference table.
    #[error("Unsupported year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    UnsupportedYear(i32),

    /// Weekday number outside `0..=6`.
    #[error("Invalid weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    /// Text that does not look like a date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Nothing to parse.
    #[error("Empty date string")]
    EmptyInput,
}

impl DateError {
    /// Reports whether this is one of the range errors, for either calendar.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::GregorianOutOfRange(_))
    }
}
