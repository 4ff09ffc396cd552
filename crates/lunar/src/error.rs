//! Error types for the nongli-lunar crate.

use crate::table::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the nongli-lunar crate.
///
/// Covers the three validation failures of the conversion engine: a year
/// outside the tabulated window, an invalid month (including a leap month
/// requested for a year that has none), and a day outside the length of the
/// resolved month.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    /// Returned when a year falls outside the supported table window.
    #[error("year {year} outside supported range {MIN_YEAR}..={MAX_YEAR}")]
    YearOutOfRange {
        /// The unsupported year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside 1..=12, or a leap month is
    /// requested for a year/month combination that has no leap month.
    #[error("invalid month: {month}")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of its month.
    #[error("invalid day: {day} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the month in question.
        max_day: u8,
    },
}
