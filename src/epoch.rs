//! Conversions between calendar dates and the hundred-year-day count.
//!
//! The count is a whole-day offset from the reference date 1899-12-31
//! (day 0), so day 1 is 1/1/1900 and day 99999 is 10/14/2173. The reverse
//! direction (count to date) is range-checked at the [`HundredYearDay`]
//! boundary; the forward direction is deliberately not, see
//! [`CalendarDate::days_since_reference`].

use crate::CalendarDate;
use crate::consts::{
    MAX_HUNDRED_YEAR_DAY, MIN_HUNDRED_YEAR_DAY, REFERENCE_DAY, REFERENCE_MONTH, REFERENCE_YEAR,
};
use crate::prelude::*;
use std::str::FromStr;

/// Days in one 400-year Gregorian cycle
const DAYS_PER_ERA: i32 = 146_097;
/// Shift aligning the era arithmetic so that day zero is 1970-01-01
const UNIX_EPOCH_SHIFT: i32 = 719_468;

/// Internal day number of the reference date 1899-12-31
const REFERENCE_CIVIL: i32 = days_from_civil(
    REFERENCE_YEAR as i32,
    REFERENCE_MONTH as i32,
    REFERENCE_DAY as i32,
);

/// Day number of a Gregorian date, counted from 1970-01-01.
/// Era-based integer arithmetic over the 400-year cycle.
pub(crate) const fn days_from_civil(year: i32, month: i32, day: i32) -> i32 {
    let shifted_year = if month <= 2 { year - 1 } else { year };
    let era = shifted_year.div_euclid(400);
    let year_of_era = shifted_year - era * 400;
    // March-based month index makes the leap day the last day of the year
    let month_shifted = if month > 2 { month - 3 } else { month + 9 };
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + (153 * month_shifted + 2) / 5
            + day
            - 1;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]: (year, month, day) for a day number.
pub(crate) const fn civil_from_days(days: i32) -> (i32, i32, i32) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_shifted = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_shifted + 2) / 5 + 1;
    let month = if month_shifted < 10 {
        month_shifted + 3
    } else {
        month_shifted - 9
    };
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// A validated hundred-year-day count in `0..=99999`.
///
/// Out-of-range counts are rejected at construction, never clamped.
/// Once constructed, conversion to a date is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{_0}")]
pub struct HundredYearDay(i32);

/// Error type for hundred-year-day input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// Input string absent or blank.
    #[error("invalid 100 year date: empty")]
    EmptyInput,
    /// Does not parse as a plain non-negative integer (decimals included).
    #[error("invalid 100 year date: must be a positive number")]
    NotANumber,
    /// Parsed fine but lies outside the supported window.
    #[error("100 year date out of range: must be between 0 and 99999")]
    OutOfRange(i64),
}

impl HundredYearDay {
    /// Creates a count, validating the `0..=99999` range.
    ///
    /// # Errors
    /// Returns `CountError::OutOfRange` if the value lies outside the window.
    pub fn new(count: i32) -> Result<Self, CountError> {
        if !(MIN_HUNDRED_YEAR_DAY..=MAX_HUNDRED_YEAR_DAY).contains(&count) {
            return Err(CountError::OutOfRange(i64::from(count)));
        }
        Ok(Self(count))
    }

    /// Returns the raw count
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// The calendar date this count falls on. Total: every in-range count
    /// maps to a real date between 12/31/1899 and 10/14/2173.
    pub fn to_date(self) -> CalendarDate {
        let (year, month, day) = civil_from_days(REFERENCE_CIVIL + self.0);
        // Components are bounded by the count range, casts cannot truncate
        CalendarDate::from_civil(year as u16, month as u8, day as u8)
    }
}

impl TryFrom<i32> for HundredYearDay {
    type Error = CountError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HundredYearDay> for i32 {
    fn from(count: HundredYearDay) -> Self {
        count.0
    }
}

impl FromStr for HundredYearDay {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CountError::EmptyInput);
        }

        // i64 keeps grossly oversized inputs in the NotANumber bucket only
        // when they fail integer parsing outright; negatives parse and are
        // classified as out of range, matching the legacy service.
        let value: i64 = trimmed.parse().map_err(|_| CountError::NotANumber)?;
        let window = i64::from(MIN_HUNDRED_YEAR_DAY)..=i64::from(MAX_HUNDRED_YEAR_DAY);
        if !window.contains(&value) {
            return Err(CountError::OutOfRange(value));
        }

        Ok(Self(value as i32))
    }
}

impl CalendarDate {
    /// Whole days between the reference date (1899-12-31) and this date.
    ///
    /// Deliberately unchecked: dates outside the supported window yield
    /// negative or greater-than-99999 counts. Range checking happens where
    /// a count enters the system as input, not where one is derived from
    /// an already-validated date.
    pub const fn days_since_reference(&self) -> i32 {
        days_from_civil(self.year() as i32, self.month() as i32, self.day() as i32)
            - REFERENCE_CIVIL
    }
}
