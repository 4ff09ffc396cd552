use nongli_lunar::{lunar_to_solar, solar_to_lunar, LunarDate, SolarDate, MAX_YEAR, MIN_YEAR};

#[test]
fn reference_2011_12_31() {
    let info = solar_to_lunar(SolarDate::new(2011, 12, 31).unwrap()).unwrap();
    assert_eq!(info.year, 2011);
    assert_eq!(info.month, 12);
    assert_eq!(info.day, 7);
    assert!(!info.is_leap_month);
    assert_eq!(info.leap_month, 0);
    assert_eq!(info.year_numerals, "二〇一一");
    assert_eq!(info.month_name, "腊月");
    assert_eq!(info.day_name, "初七");
    assert_eq!(info.year_name, "辛卯");
    assert_eq!(info.zodiac, "兔");
    assert_eq!(info.label(), "二〇一一(辛卯年) 腊月初七");
}

#[test]
fn epoch_boundary_date() {
    // 1891-02-09 is the first tabulated New Year's Day.
    let info = solar_to_lunar(SolarDate::new(1891, 2, 9).unwrap()).unwrap();
    assert_eq!(info.year, MIN_YEAR);
    assert_eq!(info.month, 1);
    assert_eq!(info.day, 1);
    assert!(!info.is_leap_month);
    assert_eq!(info.year_name, "辛卯");
    assert_eq!(info.zodiac, "兔");
}

#[test]
fn new_year_anchor_every_year() {
    for year in MIN_YEAR..=MAX_YEAR {
        let entry = nongli_lunar::table::get(year).unwrap();
        let new_year = SolarDate::new(year, entry.new_year_month, entry.new_year_day).unwrap();
        let info = solar_to_lunar(new_year).unwrap();
        assert_eq!(
            (info.year, info.month, info.day, info.is_leap_month),
            (year, 1, 1, false),
            "New Year anchor failed for {year}"
        );
    }
}

#[test]
fn spring_festival_2020() {
    let info = solar_to_lunar(SolarDate::new(2020, 1, 25).unwrap()).unwrap();
    assert_eq!((info.year, info.month, info.day), (2020, 1, 1));
    assert_eq!(info.year_name, "庚子");
    assert_eq!(info.zodiac, "鼠");
}

#[test]
fn mid_autumn_2011() {
    // Eighth month, day 15 of lunar 2011 fell on 2011-09-12.
    let info = solar_to_lunar(SolarDate::new(2011, 9, 12).unwrap()).unwrap();
    assert_eq!((info.month, info.day), (8, 15));
    let back = lunar_to_solar(LunarDate::new(2011, 8, 15, false).unwrap()).unwrap();
    assert_eq!(back, SolarDate::new(2011, 9, 12).unwrap());
}

#[test]
fn leap_fourth_month_2012() {
    // Lunar 2012 has a leap fourth month beginning on 2012-05-21.
    let info = solar_to_lunar(SolarDate::new(2012, 5, 21).unwrap()).unwrap();
    assert_eq!((info.year, info.month, info.day), (2012, 4, 1));
    assert!(info.is_leap_month);
    assert_eq!(info.leap_month, 4);
    assert_eq!(info.month_name, "闰四月");

    // The regular fourth month ends the day before.
    let info = solar_to_lunar(SolarDate::new(2012, 5, 20).unwrap()).unwrap();
    assert_eq!(info.month, 4);
    assert!(!info.is_leap_month);
}

#[test]
fn date_before_new_year_belongs_to_previous_lunar_year() {
    // 2012-01-10 precedes the 2012 lunar New Year (Jan 23), so it falls in
    // the twelfth month of lunar 2011.
    let info = solar_to_lunar(SolarDate::new(2012, 1, 10).unwrap()).unwrap();
    assert_eq!(info.year, 2011);
    assert_eq!(info.month, 12);
    assert_eq!(info.day, 17);
    assert_eq!(info.year_name, "辛卯");
}

#[test]
fn new_year_eve_is_last_day_of_previous_year() {
    // 2012-01-22, the day before the lunar New Year.
    let info = solar_to_lunar(SolarDate::new(2012, 1, 22).unwrap()).unwrap();
    assert_eq!(info.year, 2011);
    assert_eq!(info.month, 12);
    assert_eq!(info.day, 29);
}

#[test]
fn lunar_to_solar_crosses_gregorian_year() {
    // Twelfth month of lunar 2011 runs into January 2012.
    let date = LunarDate::new(2011, 12, 17, false).unwrap();
    assert_eq!(
        lunar_to_solar(date).unwrap(),
        SolarDate::new(2012, 1, 10).unwrap()
    );
}

#[test]
fn lunar_to_solar_leap_month_addressing() {
    // Regular and leap fourth month of 2012 are distinct dates.
    let regular = lunar_to_solar(LunarDate::new(2012, 4, 1, false).unwrap()).unwrap();
    let leap = lunar_to_solar(LunarDate::new(2012, 4, 1, true).unwrap()).unwrap();
    assert_eq!(regular, SolarDate::new(2012, 4, 21).unwrap());
    assert_eq!(leap, SolarDate::new(2012, 5, 21).unwrap());
    assert!(regular < leap);
}

#[test]
fn leap_month_exclusivity() {
    // At most one lunar month per year is leap, and is_leap_month is only
    // set when the month matches the year's tabulated leap month.
    for year in MIN_YEAR..=MAX_YEAR {
        let entry = nongli_lunar::table::get(year).unwrap();
        let new_year = SolarDate::new(year, entry.new_year_month, entry.new_year_day).unwrap();
        let total = nongli_lunar::months::days_in_year(&entry);
        let mut leap_months_seen = std::collections::HashSet::new();
        for offset in 0..total {
            let date = new_year.add_days(i64::from(offset));
            if date.year() > MAX_YEAR {
                break;
            }
            let info = solar_to_lunar(date).unwrap();
            if info.year != year {
                // Tail days beyond the tabulated year land in the next one
                // where the dataset chains inconsistently (1899, 1900).
                continue;
            }
            if info.is_leap_month {
                assert_eq!(info.month, entry.leap_month, "year {year}");
                leap_months_seen.insert(info.month);
            }
        }
        assert!(leap_months_seen.len() <= 1, "year {year}");
    }
}
