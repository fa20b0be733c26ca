//! Shared fixtures for unit tests.

use chrono::NaiveDate;

use crate::BsDate;

/// Gregorian date from parts; panics on an impossible date.
pub fn ad(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid Gregorian test date")
}

/// B.S. date from parts; panics outside the supported range.
pub fn bs(year: i32, month: u8, day: u8) -> BsDate {
    BsDate::new(year, month, day).expect("valid B.S. test date")
}
