//! CLI definition using clap

use clap::{Parser, Subcommand};
use hvacalc_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hvacalc")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "HVAC equipment sizing and energy cost estimation")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List calculator types and their inputs
    List,

    /// Show lookup tables and size catalogs
    Tables {
        /// Table or catalog name; lists all names when omitted
        name: Option<String>,
    },

    /// Run one calculation
    Calc {
        /// Calculator key (e.g. room-btu, seer-savings)
        calculator: String,

        /// Numeric input as field=value (e.g. --num area=300)
        #[arg(long = "num", value_name = "FIELD=VALUE", value_parser = parse_number_pair)]
        numbers: Vec<(String, f64)>,

        /// Option selection as field=key (e.g. --opt climate_zone=mixed-humid)
        #[arg(long = "opt", value_name = "FIELD=KEY", value_parser = parse_option_pair)]
        options: Vec<(String, String)>,

        /// JSON input file; --num/--opt values override it
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Run a JSON list of calculation requests
    Run {
        /// Path to requests file
        requests: PathBuf,

        /// Output file for results (.csv or .json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set a value as key=value (output_format, electric_rate, gas_rate,
        /// safety_margin_pct, log_level)
        #[arg(long, value_name = "KEY=VALUE", value_parser = parse_option_pair)]
        set: Vec<(String, String)>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((key, value.trim()))
}

fn parse_number_pair(s: &str) -> Result<(String, f64), String> {
    let (key, value) = split_pair(s)?;
    let number = value
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value))?;
    Ok((key.to_string(), number))
}

fn parse_option_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = split_pair(s)?;
    Ok((key.to_string(), value.to_string()))
}
