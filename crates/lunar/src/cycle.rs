//! Sexagenary (stem-branch) year names and zodiac animals.
//!
//! Both are pure functions of the lunar year number. The tables are
//! anchored so that the first tabulated year, 1891, resolves to 辛卯
//! (the rabbit), its historically documented pair.

/// The ten heavenly stems, anchored at `year % 10`.
const STEMS: [&str; 10] = ["庚", "辛", "壬", "癸", "甲", "乙", "丙", "丁", "戊", "己"];

/// The twelve earthly branches, anchored at `year % 12`.
const BRANCHES: [&str; 12] = [
    "申", "酉", "戌", "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未",
];

/// The twelve zodiac animals, paired with the branches.
const ZODIAC: [&str; 12] = [
    "猴", "鸡", "狗", "猪", "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊",
];

/// Returns the stem-branch name of a lunar year, e.g. `辛卯` for 2011.
///
/// Total over all integer years; results are only historically meaningful
/// within the tabulated window.
pub fn year_name(year: i32) -> String {
    let stem = STEMS[year.rem_euclid(10) as usize];
    let branch = BRANCHES[year.rem_euclid(12) as usize];
    format!("{stem}{branch}")
}

/// Returns the zodiac animal of a lunar year, e.g. `兔` for 2011.
pub fn zodiac(year: i32) -> &'static str {
    ZODIAC[year.rem_euclid(12) as usize]
}
