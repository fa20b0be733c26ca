use crate::DateError;
use crate::consts::{DEVANAGARI_DIGITS, MAX_MONTH, MIN_MONTH};
use crate::prelude::*;
use crate::table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Bikram Sambat month, `Baisakh` (1) through `Chaitra` (12).
///
/// Displays as its Devanagari name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    Baisakh = 1,
    Jestha,
    Ashar,
    Shrawan,
    Bhadra,
    Ashoj,
    Kartik,
    Mangshir,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Baisakh,
        Self::Jestha,
        Self::Ashar,
        Self::Shrawan,
        Self::Bhadra,
        Self::Ashoj,
        Self::Kartik,
        Self::Mangshir,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chaitra,
    ];

    /// Creates a Month from its number
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside 1-12.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value < MIN_MONTH || value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the month number, 1-12
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position of the month within the year
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }

    /// Devanagari name of the month
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baisakh => "बैशाख",
            Self::Jestha => "जेठ",
            Self::Ashar => "असार",
            Self::Shrawan => "साउन",
            Self::Bhadra => "भदौ",
            Self::Ashoj => "असोज",
            Self::Kartik => "कार्तिक",
            Self::Mangshir => "मंसिर",
            Self::Poush => "पौष",
            Self::Magh => "माघ",
            Self::Falgun => "फागुन",
            Self::Chaitra => "चैत",
        }
    }

    /// Romanized name of the month
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Baisakh => "Baisakh",
            Self::Jestha => "Jestha",
            Self::Ashar => "Ashar",
            Self::Shrawan => "Shrawan",
            Self::Bhadra => "Bhadra",
            Self::Ashoj => "Ashoj",
            Self::Kartik => "Kartik",
            Self::Mangshir => "Mangshir",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }

    /// Number of days in this month of the B.S. `year`. Month lengths
    /// change from year to year, so the year is required.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedYear` if the year is not tabulated.
    pub fn num_days(self, year: i32) -> Result<u8, DateError> {
        table::days_in_month(year, self.number())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// Day of the week, `Sunday` (0) through `Saturday` (6).
///
/// Displays as its Devanagari name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays starting from Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Days since Sunday, 0-6
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Devanagari name of the weekday
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "आइतबार",
            Self::Monday => "सोमबार",
            Self::Tuesday => "मंगलबार",
            Self::Wednesday => "बुधबार",
            Self::Thursday => "बिहिबार",
            Self::Friday => "शुक्रबार",
            Self::Saturday => "शनिबार",
        }
    }

    /// Two letter label used in calendar headers
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Su",
            Self::Monday => "Mo",
            Self::Tuesday => "Tu",
            Self::Wednesday => "We",
            Self::Thursday => "Th",
            Self::Friday => "Fr",
            Self::Saturday => "Sa",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        // num_days_from_sunday is always 0-6
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(DateError::InvalidWeekday(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

/// A number rendered with Devanagari digits.
///
/// ```
/// use nepcal::Numeral;
///
/// assert_eq!(Numeral(759).to_string(), "७५९");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Numeral(pub u32);

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self
            .0
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| DEVANAGARI_DIGITS[d as usize])
            .collect();
        f.pad(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            let month = Month::new(m).unwrap();
            assert_eq!(month.number(), m, "Month {m} should round trip");
        }
        assert_eq!(Month::new(1).unwrap(), Month::Baisakh);
        assert_eq!(Month::new(12).unwrap(), Month::Chaitra);
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::Baisakh.name(), "बैशाख");
        assert_eq!(Month::Baisakh.to_string(), "बैशाख");
        assert_eq!(Month::Chaitra.to_string(), "चैत");
        assert_eq!(Month::Mangshir.english_name(), "Mangshir");

        for month in Month::ALL {
            assert_eq!(month.to_string(), month.name());
        }
    }

    #[test]
    fn test_month_num_days() {
        assert_eq!(Month::Jestha.num_days(2009), Ok(31));
        assert_eq!(Month::Jestha.num_days(2035), Ok(32));
        assert_eq!(Month::Baisakh.num_days(2076), Ok(31));
        assert_eq!(
            Month::Jestha.num_days(2096),
            Err(DateError::UnsupportedYear(2096))
        );
    }

    #[test]
    fn test_month_ordering() {
        assert!(Month::Baisakh < Month::Jestha);
        assert!(Month::Chaitra > Month::Falgun);
    }

    #[test]
    fn test_weekday_serde_rejects_unknown_number() {
        let parsed: Weekday = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Weekday::Wednesday);

        let err = serde_json::from_str::<Weekday>("7").unwrap_err();
        assert!(err.to_string().contains("Invalid weekday: 7"));
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&Month::Shrawan).unwrap();
        assert_eq!(json, "4");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Month::Shrawan);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::Sunday.name(), "आइतबार");
        assert_eq!(Weekday::Sunday.to_string(), "आइतबार");
        assert_eq!(Weekday::Tuesday.short_name(), "Tu");

        for weekday in Weekday::ALL {
            assert_eq!(weekday.to_string(), weekday.name());
        }
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Tue).number(), 2);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_try_from_u8() {
        assert_eq!(Weekday::try_from(0_u8).unwrap(), Weekday::Sunday);
        assert_eq!(Weekday::try_from(6_u8).unwrap(), Weekday::Saturday);
        assert_eq!(Weekday::try_from(7_u8), Err(DateError::InvalidWeekday(7)));
    }

    #[test]
    fn test_numeral_cases() {
        struct TestCase {
            num:         u32,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                num:         0,
                expected:    "०",
                description: "zero",
            },
            TestCase {
                num:         1,
                expected:    "१",
                description: "single digit",
            },
            TestCase {
                num:         759,
                expected:    "७५९",
                description: "multiple digits",
            },
            TestCase {
                num:         2081,
                expected:    "२०८१",
                description: "year",
            },
        ];

        for case in &cases {
            assert_eq!(
                Numeral(case.num).to_string(),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_numeral_padding() {
        assert_eq!(format!("{:>2}", Numeral(5)), " ५");
        assert_eq!(format!("{:>2}", Numeral(15)), "१५");
    }
}
