//! Sources for "today".
//!
//! Nothing in this crate reads the system time on its own. Callers that
//! need the current date pass a [`Clock`], which lets tests pin the date.

use chrono::{Local, NaiveDate};

use crate::{BsDate, DateError};

/// Supplies the current Gregorian date.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Number of days spanned so far in the current B.S. year, today included.
///
/// # Errors
/// Returns `DateError::GregorianOutOfRange` if today is outside the table.
pub fn days_elapsed_today(clock: &impl Clock) -> Result<u16, DateError> {
    BsDate::today(clock).map(|today| today.days_elapsed_in_year())
}
