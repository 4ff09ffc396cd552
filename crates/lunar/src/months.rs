//! Month decoder: packed bitfield to explicit month lengths and offsets.

use crate::table::YearEntry;

/// Returns the number of lunar months in the year (12, or 13 with a leap
/// month).
pub fn month_count(entry: &YearEntry) -> usize {
    if entry.leap_month == 0 {
        12
    } else {
        13
    }
}

/// Decodes the ordered month lengths (29 or 30 days each) of a lunar year.
///
/// The leap month, when present, sits at its sequential position
/// `leap_month + 1`. One bit of [`YearEntry::months`] is consumed per month
/// starting at bit 15; lower padding bits are discarded.
pub fn month_lengths(entry: &YearEntry) -> Vec<u8> {
    (0..month_count(entry))
        .map(|i| 29 + ((entry.months >> (15 - i)) & 1) as u8)
        .collect()
}

/// Returns the 0-based day offset from New Year's Day at which each month
/// begins.
///
/// The result has one element per month; element 0 is always 0.
pub fn month_start_offsets(lengths: &[u8]) -> Vec<u32> {
    let mut offsets = Vec::with_capacity(lengths.len());
    let mut total = 0u32;
    for &len in lengths {
        offsets.push(total);
        total += u32::from(len);
    }
    offsets
}

/// Returns the total number of days in the lunar year.
pub fn days_in_year(entry: &YearEntry) -> u32 {
    month_lengths(entry).iter().map(|&len| u32::from(len)).sum()
}
