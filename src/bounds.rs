//! Range checks for both calendars.
//!
//! The supported range runs from the epoch anchor (A.D. 1943-04-14, B.S.
//! 2000-01-01) to the last tabulated day. Both ends are inclusive, and the
//! upper end in either calendar follows the table's length.

use chrono::{Days, NaiveDate};

use crate::consts::{EPOCH_AD_DAY, EPOCH_AD_MONTH, EPOCH_AD_YEAR, MAX_MONTH, MIN_DAY, MIN_MONTH};
use crate::table::{self, MAX_YEAR, MIN_YEAR, TABULATED_DAYS};

/// Gregorian side of the epoch anchor, paired with B.S. `MIN_YEAR`-01-01.
pub const EPOCH_GREGORIAN: NaiveDate = constant_date(EPOCH_AD_YEAR, EPOCH_AD_MONTH, EPOCH_AD_DAY);

const fn constant_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date constant"),
    }
}

/// Earliest supported B.S. date as a `(year, month, day)` tuple.
pub const fn first_bs() -> (i32, u8, u8) {
    (MIN_YEAR, MIN_MONTH, MIN_DAY)
}

/// Latest supported B.S. date as a `(year, month, day)` tuple.
pub fn last_bs() -> (i32, u8, u8) {
    // The last tabulated year always has a row.
    let last_day = table::days_in_month(MAX_YEAR, MAX_MONTH).unwrap_or(MIN_DAY);
    (MAX_YEAR, MAX_MONTH, last_day)
}

/// Gregorian date of the last tabulated B.S. day, i.e. [`last_bs`].
pub fn last_gregorian() -> NaiveDate {
    let span = Days::new(u64::from(TABULATED_DAYS.saturating_sub(1)));
    // The table spans well under chrono's date range.
    EPOCH_GREGORIAN.checked_add_days(span).unwrap_or(EPOCH_GREGORIAN)
}

/// Reports whether `date` can be converted to B.S.
pub fn is_in_range_gregorian(date: NaiveDate) -> bool {
    (EPOCH_GREGORIAN..=last_gregorian()).contains(&date)
}

/// Reports whether the raw triple is a real B.S. date inside the table.
///
/// The month must be 1-12, the day must exist in that month, and the
/// triple must fall between [`first_bs`] and [`last_bs`] in tuple order.
pub fn is_in_range_bs(year: i32, month: u8, day: u8) -> bool {
    let Ok(max_day) = table::days_in_month(year, month) else {
        return false;
    };
    if !(MIN_DAY..=max_day).contains(&day) {
        return false;
    }

    (first_bs()..=last_bs()).contains(&(year, month, day))
}
