//! HVAC Calculator - equipment sizing and energy cost estimates
//!
//! A CLI tool that sizes HVAC, water heating and electrical equipment from
//! lookup-table factors and projects operating cost and upgrade savings.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
