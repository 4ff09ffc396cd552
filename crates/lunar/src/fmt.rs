//! Traditional Chinese numeral rendering of lunar dates.

use crate::error::LunarError;

/// Chinese glyphs for the decimal digits 0..=9.
const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Units glyphs used inside day names (index 0 unused, index 10 is 十).
const DAY_UNITS: [&str; 11] = [
    "", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十",
];

/// Month names for months 1..=12 (index 0 unused). The eleventh and
/// twelfth months carry their customary names 冬月 and 腊月.
const MONTH_NAMES: [&str; 13] = [
    "", "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月",
    "腊月",
];

/// Renders a year as four numeral glyphs, e.g. `2011` becomes `二〇一一`.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if `year` is outside 1000..=9999,
/// since the rendering is defined as exactly four digits.
pub fn year_numerals(year: i32) -> Result<String, LunarError> {
    if !(1000..=9999).contains(&year) {
        return Err(LunarError::YearOutOfRange { year });
    }
    let digits = [
        (year / 1000) % 10,
        (year / 100) % 10,
        (year / 10) % 10,
        year % 10,
    ];
    Ok(digits.iter().map(|&d| DIGITS[d as usize]).collect())
}

/// Parses a four-glyph numeral year back to its integer value.
///
/// Inverse of [`year_numerals`]; returns `None` if the input is not exactly
/// four recognized digit glyphs or the leading glyph is 〇.
pub fn year_from_numerals(s: &str) -> Option<i32> {
    let glyphs: Vec<&str> = s.split("").filter(|g| !g.is_empty()).collect();
    if glyphs.len() != 4 {
        return None;
    }
    let mut year = 0i32;
    for glyph in glyphs {
        let digit = DIGITS.iter().position(|&d| d == glyph)?;
        year = year * 10 + digit as i32;
    }
    if year < 1000 { None } else { Some(year) }
}

/// Renders a lunar month index as its month name, with a 闰 prefix for the
/// leap occurrence, e.g. `(5, true)` becomes `闰五月`.
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: u8, is_leap: bool) -> Result<String, LunarError> {
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth { month });
    }
    let name = MONTH_NAMES[month as usize];
    if is_leap {
        Ok(format!("闰{name}"))
    } else {
        Ok(name.to_owned())
    }
}

/// Renders a lunar day index as its day name.
///
/// Days 1..=10 are prefixed 初, 11..=19 are 十X, 20 is 二十, 21..=29 are
/// 廿X, and 30 is 三十.
///
/// # Errors
///
/// Returns [`LunarError::InvalidDay`] if `day` is not in 1..=30.
pub fn day_name(day: u8) -> Result<String, LunarError> {
    let name = match day {
        1..=10 => format!("初{}", DAY_UNITS[day as usize]),
        11..=19 => format!("十{}", DAY_UNITS[(day - 10) as usize]),
        20 => "二十".to_owned(),
        21..=29 => format!("廿{}", DAY_UNITS[(day - 20) as usize]),
        30 => "三十".to_owned(),
        _ => return Err(LunarError::InvalidDay { day, max_day: 30 }),
    };
    Ok(name)
}
