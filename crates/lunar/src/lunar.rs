//! Lunar date value types and the rendered conversion result.

use crate::cycle;
use crate::error::LunarError;
use crate::fmt;

/// A date in the traditional Chinese lunisolar calendar.
///
/// `month` never counts the leap-month duplication: the leap month reuses
/// the numeral of the month it follows and is distinguished by
/// `is_leap_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Lunar year, numbered by the Gregorian year of its New Year's Day.
    pub year: i32,
    /// Month number 1..=12.
    pub month: u8,
    /// Day within the month, 1..=30.
    pub day: u8,
    /// True if this is the leap occurrence of `month`.
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Creates a new `LunarDate` with structural validation.
    ///
    /// Only the static bounds are checked here; whether `day` fits the
    /// actual month length, and whether `month` may be leap in `year`, is
    /// decided by the conversion against the year table.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`LunarError::InvalidDay`] if `day` is not in 1..=30.
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self, LunarError> {
        if !(1..=12).contains(&month) {
            return Err(LunarError::InvalidMonth { month });
        }
        if !(1..=30).contains(&day) {
            return Err(LunarError::InvalidDay { day, max_day: 30 });
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }
}

/// Fully rendered result of a solar-to-lunar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarInfo {
    /// Lunar year number.
    pub year: i32,
    /// Month number 1..=12 (leap occurrence not counted separately).
    pub month: u8,
    /// Day within the month, 1..=30.
    pub day: u8,
    /// True if the date falls in the year's leap month.
    pub is_leap_month: bool,
    /// Index of the year's leap month, or 0 if it has none.
    pub leap_month: u8,
    /// Year rendered as four numeral glyphs, e.g. 二〇一一.
    pub year_numerals: String,
    /// Month name, e.g. 腊月 or 闰五月.
    pub month_name: String,
    /// Day name, e.g. 初七.
    pub day_name: String,
    /// Sexagenary stem-branch name of the year, e.g. 辛卯.
    pub year_name: String,
    /// Zodiac animal of the year, e.g. 兔.
    pub zodiac: String,
}

impl LunarInfo {
    /// Assembles the rendered record for a resolved lunar date.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError`] if any component falls outside its renderable
    /// range; dates produced by the converter never do.
    pub(crate) fn assemble(date: LunarDate, leap_month: u8) -> Result<Self, LunarError> {
        Ok(Self {
            year: date.year,
            month: date.month,
            day: date.day,
            is_leap_month: date.is_leap_month,
            leap_month,
            year_numerals: fmt::year_numerals(date.year)?,
            month_name: fmt::month_name(date.month, date.is_leap_month)?,
            day_name: fmt::day_name(date.day)?,
            year_name: cycle::year_name(date.year),
            zodiac: cycle::zodiac(date.year).to_owned(),
        })
    }

    /// Returns the underlying [`LunarDate`].
    pub fn date(&self) -> LunarDate {
        LunarDate {
            year: self.year,
            month: self.month,
            day: self.day,
            is_leap_month: self.is_leap_month,
        }
    }

    /// Returns the composite display label, e.g.
    /// `二〇一一(辛卯年) 腊月初七`.
    pub fn label(&self) -> String {
        format!(
            "{}({}年) {}{}",
            self.year_numerals, self.year_name, self.month_name, self.day_name
        )
    }
}
