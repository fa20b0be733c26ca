//! Day-counting conversions between the Gregorian and B.S. calendars.
//!
//! Both directions reduce a date to the number of days elapsed since the
//! epoch anchor. Since A.D. 1943-04-14 and B.S. 2000-01-01 are the same
//! day, "n days after the anchor" names the same day in both calendars.
//! Going to B.S. the offset is spent month by month along the reference
//! table; going back the month lengths are summed up to the target date.
//!
//! For example, 100 days after the anchor: the first three months of 2000
//! hold 30 + 32 + 31 = 93 days and the fourth holds 32 more, so the day
//! lands in month 4 on day 100 - 93 + 1 = 8.
//!
//! These functions do not range check their input; they return `None` when
//! the table cannot represent the result.

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::Month;
use crate::bounds::EPOCH_GREGORIAN;
use crate::consts::MONTHS_IN_YEAR;
use crate::table::{self, MAX_YEAR, MIN_YEAR};

/// Resolves a Gregorian date to its B.S. `(year, month, day)`.
///
/// Returns `None` for dates before the anchor or past the last tabulated
/// month. The result is never clipped to the table's edges.
pub(crate) fn to_bs(date: NaiveDate) -> Option<(i32, Month, u8)> {
    let elapsed = date.signed_duration_since(EPOCH_GREGORIAN).num_days();
    let mut remaining = u32::try_from(elapsed).ok()?;

    for year in MIN_YEAR..=MAX_YEAR {
        let months = table::months_of(year)?;
        for (month, days) in Month::ALL.into_iter().zip(months) {
            let days = u32::from(days);
            if remaining >= days {
                remaining -= days;
                continue;
            }

            let day = u8::try_from(remaining + 1).ok()?;
            trace!(%date, year, month = month.number(), day, "resolved B.S. date");
            return Some((year, month, day));
        }
    }

    trace!(%date, "date runs past the reference table");
    None
}

/// Resolves a B.S. `(year, month, day)` to its Gregorian date.
///
/// Returns `None` when the year is not tabulated or the day is zero. The
/// day is not checked against the month length.
pub(crate) fn to_gregorian(year: i32, month: Month, day: u8) -> Option<NaiveDate> {
    let months = table::months_of(year)?;

    let mut elapsed: u64 = 0;
    for y in MIN_YEAR..year {
        elapsed += u64::from(table::days_in_year(y).ok()?);
    }
    elapsed += u64::from(days_before_month(&months, month));
    elapsed += u64::from(day.checked_sub(1)?);

    EPOCH_GREGORIAN.checked_add_days(Days::new(elapsed))
}

/// Sum of the month lengths preceding `month` within one year's row.
pub(crate) fn days_before_month(months: &[u8; MONTHS_IN_YEAR], month: Month) -> u16 {
    months[..month.index()].iter().map(|&days| u16::from(days)).sum()
}
