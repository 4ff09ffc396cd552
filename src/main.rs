mod cli;
mod logging;
mod to_lunar;
mod to_solar;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToLunar(args) => to_lunar::run(args),
        Command::ToSolar(args) => to_solar::run(args),
    }
}
