//! The `to-solar` subcommand: lunar date in, Gregorian date out.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use nongli_lunar::{lunar_to_solar, LunarDate};

use crate::cli::{parse_date, ToSolarArgs};

pub fn run(args: ToSolarArgs) -> Result<()> {
    let (year, month, day) = parse_date(&args.date)?;
    let date = LunarDate::new(year, month, day, args.leap)
        .with_context(|| format!("invalid lunar date {}", args.date))?;

    let solar = lunar_to_solar(date)
        .with_context(|| format!("cannot convert lunar date {}", args.date))?;
    info!(%solar, leap = args.leap, "converted lunar {}", args.date);

    if args.json {
        let out = json!({
            "year": solar.year(),
            "month": solar.month(),
            "day": solar.day(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{solar}");
    }
    Ok(())
}
