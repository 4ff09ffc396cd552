//! Solar-to-lunar and lunar-to-solar conversion.

use crate::error::LunarError;
use crate::lunar::{LunarDate, LunarInfo};
use crate::months;
use crate::solar::SolarDate;
use crate::table::{self, YearEntry, MIN_YEAR};

/// Converts a Gregorian date to its lunar calendar equivalent.
///
/// The offset of `date` from its solar year's lunar New Year's Day selects
/// the lunar month and day; a negative offset means the date still belongs
/// to the previous lunar year and is recomputed against that year's table
/// entry.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if the date's year is outside the
/// tabulated window, or if the date precedes the first tabulated New Year's
/// Day (1891-02-09), since no earlier lunar year exists to attribute it to.
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarInfo, LunarError> {
    let entry = table::get(date.year())?;
    let new_year = SolarDate::new(date.year(), entry.new_year_month, entry.new_year_day)?;
    let diff = date.days_since(new_year);

    let (lunar_year, entry, offset) = if diff >= 0 {
        (date.year(), entry, diff)
    } else {
        // Before this lunar year's New Year: the date belongs to the
        // previous lunar year. There is none before MIN_YEAR.
        if date.year() == MIN_YEAR {
            return Err(LunarError::YearOutOfRange { year: date.year() });
        }
        let prev = table::get(date.year() - 1)?;
        let total = i64::from(months::days_in_year(&prev));
        (date.year() - 1, prev, total + diff)
    };

    let lengths = months::month_lengths(&entry);
    let starts = months::month_start_offsets(&lengths);
    let (seq, day) = locate_month(&starts, offset);
    let (month, is_leap_month) = named_from_sequential(seq, entry.leap_month);

    LunarInfo::assemble(
        LunarDate {
            year: lunar_year,
            month,
            day,
            is_leap_month,
        },
        entry.leap_month,
    )
}

/// Converts a lunar date to its Gregorian equivalent.
///
/// The leap occurrence of a month is requested through
/// [`LunarDate::is_leap_month`]; the result may fall in the Gregorian year
/// after `date.year` when the lunar date sits late in its year.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if `date.year` is outside the
/// tabulated window, [`LunarError::InvalidMonth`] if the month is outside
/// 1..=12 or marked leap in a year whose leap month differs, or
/// [`LunarError::InvalidDay`] if the day exceeds the resolved month's
/// length.
pub fn lunar_to_solar(date: LunarDate) -> Result<SolarDate, LunarError> {
    let entry = table::get(date.year)?;
    let seq = sequential_from_named(&entry, date.month, date.is_leap_month)?;
    let lengths = months::month_lengths(&entry);
    let max_day = lengths[seq - 1];
    if !(1..=max_day).contains(&date.day) {
        return Err(LunarError::InvalidDay {
            day: date.day,
            max_day,
        });
    }

    let starts = months::month_start_offsets(&lengths);
    let offset = i64::from(starts[seq - 1]) + i64::from(date.day) - 1;
    let new_year = SolarDate::new(date.year, entry.new_year_month, entry.new_year_day)?;
    Ok(new_year.add_days(offset))
}

/// Finds the month containing a 0-based day offset from New Year's Day.
///
/// Returns the 1-based sequential month index (leap month counted as its
/// own slot) and the 1-based day within it. An offset equal to a month
/// boundary resolves to day 1 of the later month.
fn locate_month(starts: &[u32], offset: i64) -> (usize, u8) {
    let mut seq = 1;
    for (i, &start) in starts.iter().enumerate() {
        if i64::from(start) <= offset {
            seq = i + 1;
        } else {
            break;
        }
    }
    let day = (offset - i64::from(starts[seq - 1]) + 1) as u8;
    (seq, day)
}

/// Maps a 1-based sequential month index to the named `(month, is_leap)`
/// pair, collapsing the leap slot onto the month it duplicates.
fn named_from_sequential(seq: usize, leap_month: u8) -> (u8, bool) {
    let seq = seq as u8;
    if leap_month == 0 || seq <= leap_month {
        (seq, false)
    } else if seq == leap_month + 1 {
        (leap_month, true)
    } else {
        (seq - 1, false)
    }
}

/// Maps a named `(month, is_leap)` pair to its 1-based sequential index in
/// the year's month sequence.
fn sequential_from_named(
    entry: &YearEntry,
    month: u8,
    is_leap_month: bool,
) -> Result<usize, LunarError> {
    if !(1..=12).contains(&month) {
        return Err(LunarError::InvalidMonth { month });
    }
    if is_leap_month && month != entry.leap_month {
        return Err(LunarError::InvalidMonth { month });
    }
    let seq = if entry.leap_month != 0 && (is_leap_month || month > entry.leap_month) {
        month + 1
    } else {
        month
    };
    Ok(seq as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_month_boundaries() {
        let starts = [0, 30, 59];
        assert_eq!(locate_month(&starts, 0), (1, 1));
        assert_eq!(locate_month(&starts, 29), (1, 30));
        assert_eq!(locate_month(&starts, 30), (2, 1)); // tie goes to the new month
        assert_eq!(locate_month(&starts, 58), (2, 29));
        assert_eq!(locate_month(&starts, 59), (3, 1));
    }

    #[test]
    fn named_from_sequential_no_leap() {
        for seq in 1..=12 {
            assert_eq!(named_from_sequential(seq, 0), (seq as u8, false));
        }
    }

    #[test]
    fn named_from_sequential_leap_four() {
        assert_eq!(named_from_sequential(4, 4), (4, false));
        assert_eq!(named_from_sequential(5, 4), (4, true));
        assert_eq!(named_from_sequential(6, 4), (5, false));
        assert_eq!(named_from_sequential(13, 4), (12, false));
    }

    #[test]
    fn sequential_from_named_no_leap() {
        let entry = table::get(2011).unwrap();
        for month in 1..=12 {
            assert_eq!(
                sequential_from_named(&entry, month, false).unwrap(),
                month as usize
            );
        }
    }

    #[test]
    fn sequential_from_named_leap_four() {
        let entry = table::get(2012).unwrap();
        assert_eq!(sequential_from_named(&entry, 4, false).unwrap(), 4);
        assert_eq!(sequential_from_named(&entry, 4, true).unwrap(), 5);
        assert_eq!(sequential_from_named(&entry, 5, false).unwrap(), 6);
        assert_eq!(sequential_from_named(&entry, 12, false).unwrap(), 13);
    }

    #[test]
    fn sequential_from_named_rejects_wrong_leap() {
        let entry = table::get(2011).unwrap();
        assert_eq!(
            sequential_from_named(&entry, 5, true).unwrap_err(),
            LunarError::InvalidMonth { month: 5 }
        );
        let entry = table::get(2012).unwrap();
        assert_eq!(
            sequential_from_named(&entry, 5, true).unwrap_err(),
            LunarError::InvalidMonth { month: 5 }
        );
    }

    #[test]
    fn named_sequential_inverse() {
        for year in [2011, 2012, 2014, 2017] {
            let entry = table::get(year).unwrap();
            for seq in 1..=months::month_count(&entry) {
                let (month, is_leap) = named_from_sequential(seq, entry.leap_month);
                assert_eq!(
                    sequential_from_named(&entry, month, is_leap).unwrap(),
                    seq,
                    "year {year} seq {seq}"
                );
            }
        }
    }
}
