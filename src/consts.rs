/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days preceding each month in a non-leap year (index 0 unused).
/// `day_of_year` adds one for dates past February in leap years.
pub const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// The only separator accepted in a `M/D/YYYY` input string
pub const DATE_SEPARATOR: char = '/';
/// Separators users habitually type instead of `/`; these get a dedicated
/// error message rather than the generic one
pub const REJECTED_SEPARATORS: [char; 2] = ['-', '.'];

/// Reference year of the hundred-year-day scheme: day 0 is 1899-12-31,
/// so day 1 is 1900-01-01
pub const REFERENCE_YEAR: u16 = 1899;
/// Reference month (December)
pub const REFERENCE_MONTH: u8 = 12;
/// Reference day of month
pub const REFERENCE_DAY: u8 = 31;

/// Smallest valid hundred-year-day count (the reference date itself)
pub const MIN_HUNDRED_YEAR_DAY: i32 = 0;
/// Largest valid hundred-year-day count (falls on 10/14/2173)
pub const MAX_HUNDRED_YEAR_DAY: i32 = 99_999;

/// Fixed width of the space-padded `UsaStandard` field
pub const USA_STANDARD_WIDTH: usize = 10;
/// Fixed width of the space-padded `AcscUsaStandard` field
pub const ACSC_USA_STANDARD_WIDTH: usize = 8;
