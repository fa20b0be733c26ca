//! Month-grid rendering for a B.S. date.
//!
//! A [`Calendar`] yields its lines lazily: a header naming the month,
//! a row of weekday labels, then one row per week. Cells are two columns
//! wide, right aligned and separated by a single space, with the first
//! week padded so day 1 sits under its weekday.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

use crate::consts::{DAYS_IN_WEEK, MIN_DAY};
use crate::{BsDate, Numeral, Weekday};

const BLANK_CELL: &str = "  ";
const CELL_SEPARATOR: &str = " ";

/// Digits and month names used when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralSystem {
    /// Devanagari digits and month names
    #[default]
    Devanagari,
    /// ASCII digits and romanized month names
    Latin,
}

/// Rendering options for [`Calendar`].
///
/// Missing fields take their defaults when deserialized, so the options
/// can live inside a larger configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub numerals:           NumeralSystem,
    pub show_day_in_header: bool,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            numerals:           NumeralSystem::Devanagari,
            show_day_in_header: true,
        }
    }
}

impl CalendarOptions {
    #[must_use]
    pub const fn with_numerals(mut self, numerals: NumeralSystem) -> Self {
        self.numerals = numerals;
        self
    }

    #[must_use]
    pub const fn with_day_in_header(mut self, show: bool) -> Self {
        self.show_day_in_header = show;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Header,
    WeekdayLabels,
    Rows,
    Done,
}

/// Text calendar of the month containing a date.
#[derive(Debug, Clone)]
pub struct Calendar {
    date:     BsDate,
    options:  CalendarOptions,
    stage:    Stage,
    next_day: u8,
}

impl Calendar {
    pub const fn new(date: BsDate, options: CalendarOptions) -> Self {
        Self {
            date,
            options,
            stage: Stage::Header,
            next_day: MIN_DAY,
        }
    }

    fn header(&self) -> String {
        let date = &self.date;
        match (self.options.numerals, self.options.show_day_in_header) {
            (NumeralSystem::Devanagari, true) => format!(
                "{} {}, {}",
                date.month(),
                Numeral(u32::from(date.day())),
                Numeral(date.year().unsigned_abs())
            ),
            (NumeralSystem::Devanagari, false) => {
                format!("{} {}", date.month(), Numeral(date.year().unsigned_abs()))
            }
            (NumeralSystem::Latin, true) => format!(
                "{} {}, {}",
                date.month().english_name(),
                date.day(),
                date.year()
            ),
            (NumeralSystem::Latin, false) => format!("{} {}", date.month().english_name(), date.year()),
        }
    }

    fn weekday_labels() -> String {
        Weekday::ALL
            .iter()
            .map(|weekday| weekday.short_name())
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR)
    }

    fn cell(&self, day: u8) -> String {
        match self.options.numerals {
            NumeralSystem::Devanagari => format!("{:>2}", Numeral(u32::from(day))),
            NumeralSystem::Latin => format!("{day:>2}"),
        }
    }

    fn next_row(&mut self) -> Option<String> {
        let last_day = self.date.days_in_month();
        if self.next_day > last_day {
            return None;
        }

        let week = usize::from(DAYS_IN_WEEK);
        let mut cells = Vec::with_capacity(week);
        if self.next_day == MIN_DAY {
            let offset = usize::from(self.date.month_start_weekday().number());
            cells.extend(std::iter::repeat_n(BLANK_CELL.to_owned(), offset));
        }

        while cells.len() < week && self.next_day <= last_day {
            cells.push(self.cell(self.next_day));
            self.next_day += 1;
        }

        Some(cells.join(CELL_SEPARATOR).trim_end().to_owned())
    }
}

impl Iterator for Calendar {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Header => {
                self.stage = Stage::WeekdayLabels;
                Some(self.header())
            }
            Stage::WeekdayLabels => {
                self.stage = Stage::Rows;
                Some(Self::weekday_labels())
            }
            Stage::Rows => {
                let row = self.next_row();
                if row.is_none() {
                    self.stage = Stage::Done;
                }
                row
            }
            Stage::Done => None,
        }
    }
}

impl FusedIterator for Calendar {}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.clone().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ad, bs};

    fn latin() -> CalendarOptions {
        CalendarOptions::default().with_numerals(NumeralSystem::Latin)
    }

    #[test]
    fn test_latin_month_starting_tuesday() {
        let date = BsDate::from_gregorian(ad(2018, 5, 17)).unwrap();
        let lines: Vec<String> = date.calendar(latin()).collect();

        assert_eq!(
            lines,
            [
                "Jestha 3, 2075",
                "Su Mo Tu We Th Fr Sa",
                "       1  2  3  4  5",
                " 6  7  8  9 10 11 12",
                "13 14 15 16 17 18 19",
                "20 21 22 23 24 25 26",
                "27 28 29 30 31",
            ]
        );
    }

    #[test]
    fn test_devanagari_header() {
        let mut calendar = bs(2075, 2, 3).calendar(CalendarOptions::default());
        assert_eq!(calendar.next().as_deref(), Some("जेठ ३, २०७५"));
        assert_eq!(calendar.next().as_deref(), Some("Su Mo Tu We Th Fr Sa"));
        assert_eq!(calendar.next().as_deref(), Some("       १  २  ३  ४  ५"));
    }

    #[test]
    fn test_header_without_day() {
        let options = CalendarOptions::default().with_day_in_header(false);
        let mut calendar = bs(2075, 2, 3).calendar(options);
        assert_eq!(calendar.next().as_deref(), Some("जेठ २०७५"));

        let mut calendar = bs(2075, 2, 3).calendar(latin().with_day_in_header(false));
        assert_eq!(calendar.next().as_deref(), Some("Jestha 2075"));
    }

    #[test]
    fn test_month_starting_saturday() {
        // 2076 Chaitra starts on a Saturday and has 30 days.
        let date = BsDate::from_gregorian(ad(2020, 3, 21)).unwrap();
        assert_eq!(date.ymd(), (2076, crate::Month::Chaitra, 8));

        let lines: Vec<String> = date.calendar(latin()).collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Chaitra 8, 2076");
        assert_eq!(lines[2], format!("{} 1", " ".repeat(18)));
        assert_eq!(lines[3], " 2  3  4  5  6  7  8");
        assert_eq!(lines[7], "30");
    }

    #[test]
    fn test_month_starting_sunday_has_no_padding() {
        let first = (1..=12)
            .map(|month| bs(2077, month, 1))
            .find(|date| date.weekday() == Weekday::Sunday)
            .unwrap();

        let lines: Vec<String> = first.calendar(latin()).collect();
        assert_eq!(lines[2], " 1  2  3  4  5  6  7");
    }

    #[test]
    fn test_every_day_listed_once() {
        let date = bs(2077, 2, 15);
        let days: Vec<u8> = date
            .calendar(latin())
            .skip(2)
            .flat_map(|row| {
                row.split_whitespace()
                    .map(|cell| cell.parse::<u8>().unwrap())
                    .collect::<Vec<_>>()
            })
            .collect();

        let expected: Vec<u8> = (1..=date.days_in_month()).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut calendar = bs(2075, 2, 3).calendar(latin());
        assert_eq!(calendar.by_ref().count(), 7);
        assert_eq!(calendar.next(), None);
        assert_eq!(calendar.next(), None);
    }

    #[test]
    fn test_display_joins_lines() {
        let calendar = bs(2075, 2, 3).calendar(latin());
        let text = calendar.to_string();
        assert!(text.starts_with("Jestha 3, 2075\nSu Mo Tu We Th Fr Sa\n"));
        assert!(text.ends_with("27 28 29 30 31"));
        assert_eq!(text.lines().count(), 7);

        // Display does not consume the iterator.
        assert_eq!(calendar.count(), 7);
    }

    #[test]
    fn test_options_serde_defaults() {
        let options: CalendarOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CalendarOptions::default());

        let options: CalendarOptions = serde_json::from_str(r#"{"numerals":"latin"}"#).unwrap();
        assert_eq!(options.numerals, NumeralSystem::Latin);
        assert!(options.show_day_in_header);

        let json = serde_json::to_string(&CalendarOptions::default()).unwrap();
        assert_eq!(json, r#"{"numerals":"devanagari","show_day_in_header":true}"#);
    }
}
