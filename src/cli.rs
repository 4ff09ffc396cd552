use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

/// Nongli solar/lunar calendar converter.
#[derive(Parser)]
#[command(
    name = "nongli",
    version,
    about = "Chinese lunisolar calendar converter"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to its lunar calendar equivalent.
    ToLunar(ToLunarArgs),
    /// Convert a lunar date to its Gregorian equivalent.
    ToSolar(ToSolarArgs),
}

/// Arguments for the `to-lunar` subcommand.
#[derive(clap::Args)]
pub struct ToLunarArgs {
    /// Gregorian date as Y-M-D, e.g. 2011-12-31.
    pub date: String,

    /// Emit the full result record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `to-solar` subcommand.
#[derive(clap::Args)]
pub struct ToSolarArgs {
    /// Lunar date as Y-M-D, e.g. 2011-12-7.
    pub date: String,

    /// Address the leap occurrence of the month.
    #[arg(long)]
    pub leap: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses a `Y-M-D` date argument into its three components.
pub fn parse_date(s: &str) -> Result<(i32, u8, u8)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        bail!("expected a Y-M-D date, got {s:?}");
    }
    let year = parts[0]
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month = parts[1]
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day = parts[2]
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    Ok((year, month, day))
}
