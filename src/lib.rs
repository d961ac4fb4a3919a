mod consts;
mod convert;
mod epoch;
mod prelude;
mod render;
mod types;

pub use consts::*;
pub use convert::{Handler, ROUTES, convert_by_count, convert_by_date};
pub use epoch::{CountError, HundredYearDay};
pub use render::{BAD_REQUEST_FLAG, ConversionResult, SUCCESS_FLAG, Weekday, render};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A validated Gregorian calendar date.
///
/// The canonical textual form is `M/D/YYYY` (no leading zeros on month or
/// day, 4-digit year), which is also what [`Display`](std::fmt::Display)
/// produces. A value of this type is always a real date; February 30 or
/// month 13 cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{}/{:04}", "month.get()", "day.get()", "year.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "invalid date: empty")]
    EmptyInput,
    #[display(fmt = "invalid date separator '{}': use '{}'", "_0", DATE_SEPARATOR)]
    WrongSeparator(char),
    #[display(fmt = "invalid date: {_0}")]
    InvalidDate(String),
    #[display(fmt = "invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "invalid day {day} for month {month}/{year}")]
    InvalidDay { month: u8, day: u8, year: u16 },
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns the specific `ParseError` variant for the first component
    /// that fails validation.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Builds a date from components produced by the epoch converter's
    /// civil-day arithmetic, which only ever yields real dates.
    pub(crate) fn from_civil(year: u16, month: u8, day: u8) -> Self {
        match Self::from_ymd(year, month, day) {
            Ok(date) => date,
            Err(_) => unreachable!("civil day arithmetic produced an invalid date"),
        }
    }

    /// Returns the year (1..=9999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the typed Year component
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// 1-based day-of-year ordinal (January 1 is 1)
    pub const fn day_of_year(&self) -> u16 {
        types::day_of_year(self.year(), self.month(), self.day())
    }
}

/// True if the component is all ASCII digits and at most `max_len` long.
/// Rules out signs, inner whitespace, and over-long components that
/// `str::parse` alone would let through.
fn valid_component(part: &str, max_len: usize) -> bool {
    !part.is_empty() && part.len() <= max_len && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Dashes and dots get a dedicated message pointing at the expected
        // separator; everything else malformed reports the generic one.
        for sep in REJECTED_SEPARATORS {
            if trimmed.contains(sep) {
                return Err(ParseError::WrongSeparator(sep));
            }
        }

        let invalid = || ParseError::InvalidDate(trimmed.to_owned());

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        // M and D are 1-2 digits, the year exactly 4
        if !valid_component(parts[0], 2)
            || !valid_component(parts[1], 2)
            || parts[2].len() != 4
            || !valid_component(parts[2], 4)
        {
            return Err(invalid());
        }

        let month: u8 = parts[0].parse().map_err(|_| invalid())?;
        let day: u8 = parts[1].parse().map_err(|_| invalid())?;
        let year: u16 = parts[2].parse().map_err(|_| invalid())?;

        // Component range failures fold into the generic message; the
        // caller sees the input echoed back, not the component detail.
        Self::from_ymd(year, month, day).map_err(|_| invalid())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
