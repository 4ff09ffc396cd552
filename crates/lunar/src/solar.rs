//! Proleptic Gregorian date with pure day arithmetic.
//!
//! Day differences are computed through a day-number mapping (days since
//! 1970-01-01) rather than wall-clock subtraction, so conversions are
//! immune to timezone and DST artifacts.

use crate::error::LunarError;

/// Number of days in each Gregorian month of a common year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given Gregorian month.
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, LunarError> {
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// A civil, timezone-naive date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Creates a new `SolarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`LunarError::InvalidDay`] if `day` is not valid for the given month
    /// (February length follows the Gregorian leap-year rule).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, LunarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(LunarError::InvalidDay { day, max_day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn day_number(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Builds the date `days` days after 1970-01-01.
    pub fn from_day_number(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// Returns the date `days` days after this one (`days` may be negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }

    /// Returns the signed day count from `other` to `self`.
    pub fn days_since(self, other: SolarDate) -> i64 {
        self.day_number() - other.day_number()
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// Civil-from-days and days-from-civil follow the classic era-based
// formulation (Howard Hinnant, "chrono-Compatible Low-Level Date
// Algorithms"), valid over the full i32 year range.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719468;
    let era = z.div_euclid(146097);
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = (y + i64::from(month <= 2)) as i32;
    (year, month, day)
}
