//! Conversion between Gregorian (A.D.) and Bikram Sambat (B.S.) dates.
//!
//! A [`BsDate`] is always paired with the Gregorian date it corresponds
//! to, so converting back is free once a value exists. Conversions are
//! bounded by a reference table of month lengths covering B.S. years
//! [`MIN_YEAR`] through [`MAX_YEAR`].
//!
//! ```
//! use chrono::NaiveDate;
//! use nepcal::{BsDate, Month};
//!
//! let ad = NaiveDate::from_ymd_opt(2018, 4, 17).unwrap();
//! let bs = BsDate::from_gregorian(ad).unwrap();
//! assert_eq!(bs.ymd(), (2075, Month::Baisakh, 4));
//!
//! let back = BsDate::new(2075, 1, 4).unwrap();
//! assert_eq!(back.gregorian(), ad);
//! ```

pub mod bounds;
mod calendar;
mod clock;
mod consts;
mod conv;
mod error;
mod prelude;
mod table;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{Calendar, CalendarOptions, NumeralSystem};
pub use clock::{Clock, FixedClock, SystemClock, days_elapsed_today};
pub use consts::*;
pub use error::DateError;
pub use table::{MAX_YEAR, MIN_YEAR, days_in_month, days_in_year, is_in_range_year};
pub use types::{Month, Numeral, Weekday};

use crate::prelude::*;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, warn};

/// A Bikram Sambat date paired with its Gregorian equivalent.
///
/// Values are immutable. Checked constructors only produce dates inside
/// the supported range; the `_unchecked` constructors trust the caller.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.number()", day)]
pub struct BsDate {
    year:      i32,
    month:     Month,
    day:       u8,
    gregorian: NaiveDate,
}

impl BsDate {
    /// Creates a B.S. date from raw parts, validating them against the
    /// reference table.
    ///
    /// Dates are never normalized: day 32 of a 31 day month is an error,
    /// not the first of the next month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is outside 1-12,
    /// `DateError::OutOfRange` if the year is not tabulated and
    /// `DateError::InvalidDay` if the day does not exist in the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let out_of_range = || DateError::OutOfRange {
            year,
            month: month.number(),
            day,
        };

        if !is_in_range_year(year) {
            return Err(out_of_range());
        }

        let max = month.num_days(year)?;
        if !(MIN_DAY..=max).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month: month.number(),
                day,
                max,
            });
        }

        if !bounds::is_in_range_bs(year, month.number(), day) {
            return Err(out_of_range());
        }

        let gregorian = conv::to_gregorian(year, month, day).ok_or_else(out_of_range)?;
        debug!(year, month = month.number(), day, %gregorian, "converted B.S. date to A.D.");

        Ok(Self {
            year,
            month,
            day,
            gregorian,
        })
    }

    /// Creates a B.S. date from raw parts without validating them.
    ///
    /// For any triple where [`bounds::is_in_range_bs`] holds this agrees
    /// with [`BsDate::new`]. Outside that range the result is meaningless
    /// (it pairs the given parts with the epoch's Gregorian date) but
    /// never panics.
    pub fn new_unchecked(year: i32, month: Month, day: u8) -> Self {
        let gregorian = conv::to_gregorian(year, month, day).unwrap_or_else(|| {
            warn!(year, month = month.number(), day, "unchecked B.S. date outside the reference table");
            bounds::EPOCH_GREGORIAN
        });

        Self {
            year,
            month,
            day,
            gregorian,
        }
    }

    /// Converts a Gregorian date to B.S.
    ///
    /// # Errors
    /// Returns `DateError::GregorianOutOfRange` if the date is outside
    /// the range checked by [`bounds::is_in_range_gregorian`].
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateError> {
        if !bounds::is_in_range_gregorian(date) {
            return Err(DateError::GregorianOutOfRange(date));
        }

        let (year, month, day) = conv::to_bs(date).ok_or(DateError::GregorianOutOfRange(date))?;
        debug!(%date, year, month = month.number(), day, "converted A.D. date to B.S.");

        Ok(Self {
            year,
            month,
            day,
            gregorian: date,
        })
    }

    /// Converts a Gregorian date to B.S. without the range check.
    ///
    /// Meant for dates already known to be in range, such as today's. A
    /// date outside the table yields the first supported B.S. date paired
    /// with `date`; the value is meaningless but never panics.
    pub fn from_gregorian_unchecked(date: NaiveDate) -> Self {
        let (year, month, day) = conv::to_bs(date).unwrap_or_else(|| {
            warn!(%date, "unchecked Gregorian date outside the reference table");
            (MIN_YEAR, Month::Baisakh, MIN_DAY)
        });

        Self {
            year,
            month,
            day,
            gregorian: date,
        }
    }

    /// Converts the calendar date of `datetime`, read in its own time zone.
    ///
    /// # Errors
    /// Returns `DateError::GregorianOutOfRange` if the date is out of range.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self, DateError> {
        Self::from_gregorian(datetime.date_naive())
    }

    /// Converts the calendar date of `datetime`, dropping the time of day.
    ///
    /// # Errors
    /// Returns `DateError::GregorianOutOfRange` if the date is out of range.
    pub fn from_naive_datetime(datetime: NaiveDateTime) -> Result<Self, DateError> {
        Self::from_gregorian(datetime.date())
    }

    /// Today's B.S. date according to `clock`.
    ///
    /// # Errors
    /// Returns `DateError::GregorianOutOfRange` if today is out of range.
    pub fn today(clock: &impl Clock) -> Result<Self, DateError> {
        Self::from_gregorian(clock.today())
    }

    /// Today's B.S. date according to `clock`, without the range check.
    pub fn today_unchecked(clock: &impl Clock) -> Self {
        Self::from_gregorian_unchecked(clock.today())
    }

    /// Returns the B.S. year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the B.S. month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the (year, month, day) triple
    pub const fn ymd(&self) -> (i32, Month, u8) {
        (self.year, self.month, self.day)
    }

    /// Returns the Gregorian date this value corresponds to. The
    /// conversion happened at construction, so this is free.
    pub const fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    /// Same as [`BsDate::gregorian`].
    pub const fn to_gregorian(self) -> NaiveDate {
        self.gregorian
    }

    /// Weekday of this date
    pub fn weekday(&self) -> Weekday {
        self.gregorian.weekday().into()
    }

    /// Number of days in this date's month.
    ///
    /// Only meaningful for dates inside the table; an unchecked date
    /// outside it reports 0.
    pub fn days_in_month(&self) -> u8 {
        table::months_of(self.year).map_or(0, |months| months[self.month.index()])
    }

    /// Number of days in this date's year: 365 or 366.
    ///
    /// An unchecked date outside the table reports 0.
    pub fn days_in_year(&self) -> u16 {
        days_in_year(self.year).unwrap_or(0)
    }

    /// Days spanned so far in this date's year, the date itself included.
    ///
    /// The first day of the year is 1, the last is [`BsDate::days_in_year`].
    /// For an unchecked date outside the table only the day itself is
    /// counted.
    pub fn days_elapsed_in_year(&self) -> u16 {
        let before = table::months_of(self.year).map_or(0, |months| conv::days_before_month(&months, self.month));
        before + u16::from(self.day)
    }

    /// Weekday on which this date's month starts.
    ///
    /// Weekdays repeat every seven days, so stepping back by
    /// `(day % 7) - 1` days lands on a date sharing day 1's weekday.
    pub fn month_start_weekday(&self) -> Weekday {
        let offset = i64::from(self.day % DAYS_IN_WEEK) - 1;
        self.gregorian
            .checked_sub_signed(TimeDelta::days(offset))
            .map_or_else(|| self.weekday(), |date| date.weekday().into())
    }

    /// The first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        let back = Days::new(u64::from(self.day.saturating_sub(MIN_DAY)));
        let gregorian = self.gregorian.checked_sub_days(back).unwrap_or(self.gregorian);

        Self {
            year: self.year,
            month: self.month,
            day: MIN_DAY,
            gregorian,
        }
    }

    /// Reports whether this date comes after `other`.
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Renders the month of this date as a text calendar.
    pub fn calendar(&self, options: CalendarOptions) -> Calendar {
        Calendar::new(*self, options)
    }

    /// Display adapter for the Devanagari form, e.g. `जेठ ३, २०७५ बिहिबार`.
    pub const fn localized(&self) -> Localized<'_> {
        Localized(self)
    }

    fn key(&self) -> (i32, Month, u8) {
        self.ymd()
    }
}

/// Devanagari rendering of a [`BsDate`]: month, day, year and weekday.
#[derive(Debug, Clone, Copy)]
pub struct Localized<'a>(&'a BsDate);

impl fmt::Display for Localized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0;
        write!(
            f,
            "{} {}, {} {}",
            date.month,
            Numeral(u32::from(date.day)),
            Numeral(date.year.unsigned_abs()),
            date.weekday()
        )
    }
}

impl FromStr for BsDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, order) = if has_hyphen {
            (DATE_SEPARATOR, FieldOrder::YearFirst)
        } else if has_slash {
            (MONTH_FIRST_SEPARATOR, FieldOrder::MonthFirst)
        } else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [a, b, c] = parts[..] else {
            return Err(DateError::InvalidFormat(format!(
                "Expected 3 components separated by {separator}, found {}",
                parts.len()
            )));
        };

        let (year, month, day) = match order {
            FieldOrder::YearFirst => (Self::parse_year(a)?, Self::parse_u8(b)?, Self::parse_u8(c)?),
            FieldOrder::MonthFirst => (Self::parse_year(c)?, Self::parse_u8(a)?, Self::parse_u8(b)?),
        };

        Self::new(year, month, day)
    }
}

/// Component order of a textual date.
enum FieldOrder {
    /// YYYY-MM-DD
    YearFirst,
    /// MM/DD/YYYY
    MonthFirst,
}

impl BsDate {
    fn parse_year(s: &str) -> Result<i32, DateError> {
        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl PartialEq for BsDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for BsDate {}

impl Hash for BsDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for BsDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BsDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl TryFrom<(i32, u8, u8)> for BsDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for BsDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(value)
    }
}

impl From<BsDate> for NaiveDate {
    fn from(date: BsDate) -> Self {
        date.gregorian
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
