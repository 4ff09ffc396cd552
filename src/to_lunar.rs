//! The `to-lunar` subcommand: Gregorian date in, rendered lunar date out.

use anyhow::{Context, Result};
use tracing::info;

use nongli_lunar::{solar_to_lunar, SolarDate};

use crate::cli::{parse_date, ToLunarArgs};

pub fn run(args: ToLunarArgs) -> Result<()> {
    let (year, month, day) = parse_date(&args.date)?;
    let date = SolarDate::new(year, month, day)
        .with_context(|| format!("invalid Gregorian date {}", args.date))?;

    let info = solar_to_lunar(date).with_context(|| format!("cannot convert {date}"))?;
    info!(
        year = info.year,
        month = info.month,
        day = info.day,
        leap = info.is_leap_month,
        "converted {date}"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info.label());
    }
    Ok(())
}
