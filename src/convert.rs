//! Aggregator entry points consumed by the HTTP boundary.
//!
//! Both operations are stateless single-pass pipelines:
//! validate, optionally convert, render, emit. Failures come back as a
//! [`ConversionResult`] failure record rather than an `Err`, so the
//! boundary only has to inspect the flag to pick a status code.

use crate::render::{ConversionResult, render};
use crate::{CalendarDate, HundredYearDay};

/// Signature shared by both conversion entry points
pub type Handler = fn(&str) -> ConversionResult;

/// Route registrations handed to the server construct at startup.
/// Built once, never mutated at runtime.
pub const ROUTES: [(&str, Handler); 2] = [
    ("/api/CalcCalendarDate", convert_by_date),
    ("/api/CalcHundredYearDate", convert_by_count),
];

/// Converts a textual `M/D/YYYY` date into the full result record.
///
/// Never panics and never returns partial data: on parse failure every
/// data field is empty and the error pair carries the taxonomy message
/// (empty, wrong separator, or generic invalid-date).
pub fn convert_by_date(input: &str) -> ConversionResult {
    match input.parse::<CalendarDate>() {
        Ok(date) => render(&date),
        Err(err) => ConversionResult::failure(err.to_string()),
    }
}

/// Converts a textual hundred-year-day count into the full result record.
///
/// Takes text rather than an integer so that "not a number" and "out of
/// range" stay distinguishable failures.
pub fn convert_by_count(input: &str) -> ConversionResult {
    match input.parse::<HundredYearDay>() {
        Ok(count) => render(&count.to_date()),
        Err(err) => ConversionResult::failure(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BAD_REQUEST_FLAG, SUCCESS_FLAG};

    #[test]
    fn test_convert_by_date_success() {
        let result = convert_by_date("1/1/2023");
        assert!(result.is_success());
        assert_eq!(result.error_flag, SUCCESS_FLAG);
        assert_eq!(result.error_text, "");
        assert_eq!(result.european_standard, "01.01.2023");
        assert_eq!(result.international_standard, "2023-01-01");
        assert_eq!(result.day_of_week, "SUN.");
        assert_eq!(result.acsc_hundred_year, "44926");
    }

    #[test]
    fn test_convert_by_date_empty() {
        let result = convert_by_date("");
        assert_eq!(result.error_flag, BAD_REQUEST_FLAG);
        assert_eq!(result.error_text, "invalid date: empty");
        assert_eq!(result.usa_standard, "");
    }

    #[test]
    fn test_convert_by_date_wrong_separator_is_not_generic() {
        let result = convert_by_date("1-1-2023");
        assert_eq!(result.error_flag, BAD_REQUEST_FLAG);
        assert_eq!(result.error_text, "invalid date separator '-': use '/'");
    }

    #[test]
    fn test_convert_by_date_malformed() {
        let result = convert_by_date("2/30/2023");
        assert_eq!(result.error_flag, BAD_REQUEST_FLAG);
        assert_eq!(result.error_text, "invalid date: 2/30/2023");
    }

    #[test]
    fn test_convert_by_count_day_zero() {
        let result = convert_by_count("0");
        assert!(result.is_success());
        assert_eq!(result.usa_standard, "12/31/1899");
        assert_eq!(result.day_of_week, "SUN.");
        assert_eq!(result.acsc_hundred_year, "0");
        assert_eq!(result.acsc_julian, "99-365");
    }

    #[test]
    fn test_convert_by_count_day_one() {
        let result = convert_by_count("1");
        assert!(result.is_success());
        assert_eq!(result.usa_standard, "  1/1/1900");
        assert_eq!(result.day_of_week, "MON.");
        assert_eq!(result.acsc_hundred_year, "1");
        assert_eq!(result.acsc_julian, "00-001");
    }

    #[test]
    fn test_convert_by_count_window_end() {
        let result = convert_by_count("99999");
        assert!(result.is_success());
        assert_eq!(result.usa_standard, "10/14/2173");
        assert_eq!(result.acsc_hundred_year, "99999");
    }

    #[test]
    fn test_convert_by_count_not_a_number() {
        let result = convert_by_count("3.14");
        assert_eq!(result.error_flag, BAD_REQUEST_FLAG);
        assert_eq!(
            result.error_text,
            "invalid 100 year date: must be a positive number"
        );
    }

    #[test]
    fn test_convert_by_count_out_of_range() {
        for input in ["-1", "100000"] {
            let result = convert_by_count(input);
            assert_eq!(result.error_flag, BAD_REQUEST_FLAG);
            assert_eq!(
                result.error_text,
                "100 year date out of range: must be between 0 and 99999",
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_convert_by_count_empty() {
        let result = convert_by_count("  ");
        assert_eq!(result.error_flag, BAD_REQUEST_FLAG);
        assert_eq!(result.error_text, "invalid 100 year date: empty");
    }

    #[test]
    fn test_failure_never_partial() {
        for result in [
            convert_by_date("13/1/2023"),
            convert_by_count("100000"),
            convert_by_date(""),
        ] {
            assert!(!result.is_success());
            assert!(!result.error_text.is_empty());
            assert!(result.european_standard.is_empty());
            assert!(result.acsc_hundred_year.is_empty());
            assert!(result.day_of_week.is_empty());
        }
    }

    #[test]
    fn test_both_paths_agree() {
        // A count converted to a date renders identically to the same
        // date submitted as text
        let by_count = convert_by_count("44926");
        let by_date = convert_by_date("1/1/2023");
        assert_eq!(by_count, by_date);
    }

    #[test]
    fn test_route_table() {
        assert_eq!(ROUTES.len(), 2);
        let (date_path, date_handler) = ROUTES[0];
        assert_eq!(date_path, "/api/CalcCalendarDate");
        assert!(date_handler("1/1/2023").is_success());

        let (count_path, count_handler) = ROUTES[1];
        assert_eq!(count_path, "/api/CalcHundredYearDate");
        assert!(count_handler("44926").is_success());
    }
}
