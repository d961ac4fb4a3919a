//! Rendering a calendar date into the nine legacy output representations.

use crate::CalendarDate;
use crate::consts::{ACSC_USA_STANDARD_WIDTH, USA_STANDARD_WIDTH};
use serde::{Deserialize, Serialize};

/// `ErrorFlag` value on success
pub const SUCCESS_FLAG: &str = "0";
/// `ErrorFlag` value on any input failure; derived from the HTTP status
/// the consuming boundary maps these failures to
pub const BAD_REQUEST_FLAG: &str = "HTTP: 400";

/// Day of the week. The discriminant order matches the hundred-year-day
/// epoch: day 0 (1899-12-31) was a Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Green-screen weekday abbreviations; the trailing period is part of
    /// the format, not punctuation.
    const ABBREVIATIONS: [&'static str; 7] =
        ["SUN.", "MON.", "TUE.", "WED.", "THU.", "FRI.", "SAT."];

    /// Weekday of the day `days` whole days after the reference date.
    /// `rem_euclid` keeps pre-1899 dates (negative counts) correct.
    pub(crate) fn from_days_since_reference(days: i32) -> Self {
        Self::ALL[days.rem_euclid(7) as usize]
    }

    /// Three-letter uppercase abbreviation with trailing period
    pub const fn abbreviation(self) -> &'static str {
        Self::ABBREVIATIONS[self as usize]
    }
}

impl CalendarDate {
    /// The weekday this date falls on
    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_since_reference(self.days_since_reference())
    }
}

/// The aggregate of every rendered representation plus the error pair.
///
/// All-or-nothing: either all nine data fields are populated and the error
/// pair signals success, or every data field is empty and the error pair
/// describes the failure. Serializes under the legacy PascalCase JSON
/// field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConversionResult {
    /// `DD.MM.YY`
    pub acsc_european: String,
    /// Decimal hundred-year-day count, unchecked (may be negative or
    /// exceed 99999 for dates outside the window)
    pub acsc_hundred_year: String,
    /// `YY-MM-DD`
    pub acsc_international: String,
    /// `YY-DDD`, day-of-year zero-padded to three digits
    pub acsc_julian: String,
    /// `M/D/YY`, space-padded on the left to 8 characters
    pub acsc_usa_standard: String,
    /// Weekday abbreviation, `SUN.` through `SAT.`
    pub day_of_week: String,
    /// [`SUCCESS_FLAG`] or [`BAD_REQUEST_FLAG`]; always set together with
    /// `error_text`
    pub error_flag: String,
    /// Human-readable failure message, empty on success
    pub error_text: String,
    /// `DD.MM.YYYY`
    pub european_standard: String,
    /// `YYYY-MM-DD`
    pub international_standard: String,
    /// `M/D/YYYY`, space-padded on the left to 10 characters
    pub usa_standard: String,
}

impl ConversionResult {
    /// Failure record: the data fields stay empty, flag and text are set
    /// as a pair.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error_flag: BAD_REQUEST_FLAG.to_owned(),
            error_text: message.into(),
            ..Self::default()
        }
    }

    /// True when the error flag carries the success sentinel
    pub fn is_success(&self) -> bool {
        self.error_flag == SUCCESS_FLAG
    }
}

/// Renders every output representation for one valid date in a single
/// pass. Pure and deterministic: equal dates yield equal records.
pub fn render(date: &CalendarDate) -> ConversionResult {
    let (year, month, day) = (date.year(), date.month(), date.day());
    let short_year = date.year_typed().two_digit();

    let usa = format!("{month}/{day}/{year:04}");
    let acsc_usa = format!("{month}/{day}/{short_year:02}");

    ConversionResult {
        european_standard: format!("{day:02}.{month:02}.{year:04}"),
        acsc_european: format!("{day:02}.{month:02}.{short_year:02}"),
        international_standard: format!("{year:04}-{month:02}-{day:02}"),
        acsc_international: format!("{short_year:02}-{month:02}-{day:02}"),
        usa_standard: format!("{usa:>width$}", width = USA_STANDARD_WIDTH),
        acsc_usa_standard: format!("{acsc_usa:>width$}", width = ACSC_USA_STANDARD_WIDTH),
        acsc_hundred_year: date.days_since_reference().to_string(),
        acsc_julian: format!("{:02}-{:03}", short_year, date.day_of_year()),
        day_of_week: date.weekday().abbreviation().to_owned(),
        error_flag: SUCCESS_FLAG.to_owned(),
        error_text: String::new(),
    }
}
