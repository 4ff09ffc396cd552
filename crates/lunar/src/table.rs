//! Static per-year dataset for the supported lunar years.

use crate::error::LunarError;

/// First lunar year covered by the table.
pub const MIN_YEAR: i32 = 1891;

/// Last lunar year covered by the table.
pub const MAX_YEAR: i32 = 2100;

/// One record of the year table.
///
/// Describes a single lunar year: where its leap month sits (if any), the
/// Gregorian date its New Year's Day falls on, and a packed encoding of its
/// month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearEntry {
    /// Index (1..=12) of the leap month, or 0 if the year has none.
    pub leap_month: u8,
    /// Gregorian month (1 or 2) of this lunar year's New Year's Day.
    pub new_year_month: u8,
    /// Gregorian day of this lunar year's New Year's Day.
    pub new_year_day: u8,
    /// Month lengths, one bit per lunar month starting at bit 15: a set bit
    /// means 30 days, a clear bit 29. Bits below the year's month count are
    /// padding.
    pub months: u32,
}

/// Looks up the table entry for a lunar year.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if `year` is outside
/// `MIN_YEAR..=MAX_YEAR`.
pub fn get(year: i32) -> Result<YearEntry, LunarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(LunarError::YearOutOfRange { year });
    }
    let (leap_month, new_year_month, new_year_day, months) =
        YEAR_TABLE[(year - MIN_YEAR) as usize];
    Ok(YearEntry {
        leap_month,
        new_year_month,
        new_year_day,
        months,
    })
}

/// Per-year records for 1891..=2100, indexed by `year - MIN_YEAR`.
///
/// Each tuple is `(leap_month, new_year_month, new_year_day, months)`.
/// Transcribed from the historical dataset; the encoding is described on
/// [`YearEntry`].
#[rustfmt::skip]
const YEAR_TABLE: [(u8, u8, u8, u32); 210] = [
    // 1891-1895
    (0, 2, 9, 21936), (6, 1, 30, 9656), (0, 2, 17, 9584), (0, 2, 6, 21168), (5, 1, 26, 43344),
    // 1896-1900
    (0, 2, 13, 59728), (0, 2, 2, 27296), (3, 1, 22, 44368), (0, 2, 10, 43856), (8, 1, 30, 19304),
    // 1901-1905
    (0, 2, 19, 19168), (0, 2, 8, 42352), (5, 1, 29, 21096), (0, 2, 16, 53856), (0, 2, 4, 55632),
    // 1906-1910
    (4, 1, 25, 27304), (0, 2, 13, 22176), (0, 2, 2, 39632), (2, 1, 22, 19176), (0, 2, 10, 19168),
    // 1911-1915
    (6, 1, 30, 42200), (0, 2, 18, 42192), (0, 2, 6, 53840), (5, 1, 26, 54568), (0, 2, 14, 46400),
    // 1916-1920
    (0, 2, 3, 54944), (2, 1, 23, 38608), (0, 2, 11, 38320), (7, 2, 1, 18872), (0, 2, 20, 18800),
    // 1921-1925
    (0, 2, 8, 42160), (5, 1, 28, 45656), (0, 2, 16, 27216), (0, 2, 5, 27968), (4, 1, 24, 44456),
    // 1926-1930
    (0, 2, 13, 11104), (0, 2, 2, 38256), (2, 1, 23, 18808), (0, 2, 10, 18800), (6, 1, 30, 25776),
    // 1931-1935
    (0, 2, 17, 54432), (0, 2, 6, 59984), (5, 1, 26, 27976), (0, 2, 14, 23248), (0, 2, 4, 11104),
    // 1936-1940
    (3, 1, 24, 37744), (0, 2, 11, 37600), (7, 1, 31, 51560), (0, 2, 19, 51536), (0, 2, 8, 54432),
    // 1941-1945
    (6, 1, 27, 55888), (0, 2, 15, 46416), (0, 2, 5, 22176), (4, 1, 25, 43736), (0, 2, 13, 9680),
    // 1946-1950
    (0, 2, 2, 37584), (2, 1, 22, 51544), (0, 2, 10, 43344), (7, 1, 29, 46248), (0, 2, 17, 27808),
    // 1951-1955
    (0, 2, 6, 46416), (5, 1, 27, 21928), (0, 2, 14, 19872), (0, 2, 3, 42416), (3, 1, 24, 21176),
    // 1956-1960
    (0, 2, 12, 21168), (8, 1, 31, 43344), (0, 2, 18, 59728), (0, 2, 8, 27296), (6, 1, 28, 44368),
    // 1961-1965
    (0, 2, 15, 43856), (0, 2, 5, 19296), (4, 1, 25, 42352), (0, 2, 13, 42352), (0, 2, 2, 21088),
    // 1966-1970
    (3, 1, 21, 59696), (0, 2, 9, 55632), (7, 1, 30, 23208), (0, 2, 17, 22176), (0, 2, 6, 38608),
    // 1971-1975
    (5, 1, 27, 19176), (0, 2, 15, 19152), (0, 2, 3, 42192), (4, 1, 23, 53864), (0, 2, 11, 53840),
    // 1976-1980
    (8, 1, 31, 54568), (0, 2, 18, 46400), (0, 2, 7, 46752), (6, 1, 28, 38608), (0, 2, 16, 38320),
    // 1981-1985
    (0, 2, 5, 18864), (4, 1, 25, 42168), (0, 2, 13, 42160), (10, 2, 2, 45656), (0, 2, 20, 27216),
    // 1986-1990
    (0, 2, 9, 27968), (6, 1, 29, 44448), (0, 2, 17, 43872), (0, 2, 6, 38256), (5, 1, 27, 18808),
    // 1991-1995
    (0, 2, 15, 18800), (0, 2, 4, 25776), (3, 1, 23, 27216), (0, 2, 10, 59984), (8, 1, 31, 27432),
    // 1996-2000
    (0, 2, 19, 23232), (0, 2, 7, 43872), (5, 1, 28, 37736), (0, 2, 16, 37600), (0, 2, 5, 51552),
    // 2001-2005
    (4, 1, 24, 54440), (0, 2, 12, 54432), (0, 2, 1, 55888), (2, 1, 22, 23208), (0, 2, 9, 22176),
    // 2006-2010
    (7, 1, 29, 43736), (0, 2, 18, 9680), (0, 2, 7, 37584), (5, 1, 26, 51544), (0, 2, 14, 43344),
    // 2011-2015
    (0, 2, 3, 46240), (4, 1, 23, 46416), (0, 2, 10, 44368), (9, 1, 31, 21928), (0, 2, 19, 19360),
    // 2016-2020
    (0, 2, 8, 42416), (6, 1, 28, 21176), (0, 2, 16, 21168), (0, 2, 5, 43312), (4, 1, 25, 29864),
    // 2021-2025
    (0, 2, 12, 27296), (0, 2, 1, 44368), (2, 1, 22, 19880), (0, 2, 10, 19296), (6, 1, 29, 42352),
    // 2026-2030
    (0, 2, 17, 42208), (0, 2, 6, 53856), (5, 1, 26, 59696), (0, 2, 13, 54576), (0, 2, 3, 23200),
    // 2031-2035
    (3, 1, 23, 27472), (0, 2, 11, 38608), (11, 1, 31, 19176), (0, 2, 19, 19152), (0, 2, 8, 42192),
    // 2036-2040
    (6, 1, 28, 53848), (0, 2, 15, 53840), (0, 2, 4, 54560), (5, 1, 24, 55968), (0, 2, 12, 46496),
    // 2041-2045
    (0, 2, 1, 22224), (2, 1, 22, 19160), (0, 2, 10, 18864), (7, 1, 30, 42168), (0, 2, 17, 42160),
    // 2046-2050
    (0, 2, 6, 43600), (5, 1, 26, 46376), (0, 2, 14, 27936), (0, 2, 2, 44448), (3, 1, 23, 21936),
    // 2051-2055
    (0, 2, 11, 37744), (8, 2, 1, 18808), (0, 2, 19, 18800), (0, 2, 8, 25776), (6, 1, 28, 27216),
    // 2056-2060
    (0, 2, 15, 59984), (0, 2, 4, 27424), (4, 1, 24, 43872), (0, 2, 12, 43744), (0, 2, 2, 37600),
    // 2061-2065
    (3, 1, 21, 51568), (0, 2, 9, 51552), (7, 1, 29, 54440), (0, 2, 17, 54432), (0, 2, 5, 55888),
    // 2066-2070
    (5, 1, 26, 23208), (0, 2, 14, 22176), (0, 2, 3, 42704), (4, 1, 23, 21224), (0, 2, 11, 21200),
    // 2071-2075
    (8, 1, 31, 43352), (0, 2, 19, 43344), (0, 2, 7, 46240), (6, 1, 27, 46416), (0, 2, 15, 44368),
    // 2076-2080
    (0, 2, 5, 21920), (4, 1, 24, 42448), (0, 2, 12, 42416), (0, 2, 2, 21168), (3, 1, 22, 43320),
    // 2081-2085
    (0, 2, 9, 26928), (7, 1, 29, 29336), (0, 2, 17, 27296), (0, 2, 6, 44368), (5, 1, 26, 19880),
    // 2086-2090
    (0, 2, 14, 19296), (0, 2, 3, 42352), (4, 1, 24, 21104), (0, 2, 10, 53856), (8, 1, 30, 59696),
    // 2091-2095
    (0, 2, 18, 54560), (0, 2, 7, 55968), (6, 1, 27, 27472), (0, 2, 15, 22224), (0, 2, 5, 19168),
    // 2096-2100
    (4, 1, 25, 42216), (0, 2, 12, 42192), (0, 2, 1, 53584), (2, 1, 21, 55592), (0, 2, 9, 54560),];
