//! Command handlers

use crate::cli::{Cli, Commands};
use crate::logging;
use crate::output::{
    output_batch, output_calculators, output_result, output_table, output_table_names,
};
use hvacalc_app::app::load_requests;
use hvacalc_app::export::export_to_csv;
use hvacalc_app::{CalculationService, CalculatorType, Config};
use hvacalc_types::{CalculationInput, Error, OutputFormat, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    logging::init(&config.log_level, cli.verbose);

    let output_format = cli.format.unwrap_or(config.output_format);

    // Tables are loaded before any calculation is served
    let service = || CalculationService::new(config.clone());

    match cli.command {
        Commands::List => output_calculators(output_format),

        Commands::Tables { name } => cmd_tables(&service()?, name.as_deref(), output_format),

        Commands::Calc {
            calculator,
            numbers,
            options,
            input,
        } => cmd_calc(
            &service()?,
            &calculator,
            input.as_deref(),
            numbers,
            options,
            output_format,
        ),

        Commands::Run { requests, output } => {
            cmd_run(&service()?, &requests, output, output_format)
        }

        Commands::Config { show, set, reset } => cmd_config(show, set, reset),
    }
}

fn cmd_tables(service: &CalculationService, name: Option<&str>, format: OutputFormat) -> Result<()> {
    let registry = service.registry();
    match name {
        None => output_table_names(format, registry),
        Some(name) => {
            if let Ok(catalog) = registry.catalog(name) {
                return output_table(format, None, Some(catalog));
            }
            let table = registry.table(name)?;
            output_table(format, Some(table), None)
        }
    }
}

fn cmd_calc(
    service: &CalculationService,
    calculator: &str,
    input_path: Option<&Path>,
    numbers: Vec<(String, f64)>,
    options: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<()> {
    let calculator: CalculatorType = calculator.parse()?;

    let mut input = match input_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<CalculationInput>(&content)?
        }
        None => CalculationInput::new(),
    };
    for (field, value) in numbers {
        input.numbers.insert(field, value);
    }
    for (field, key) in options {
        input.options.insert(field, key);
    }

    let result = service.calculate(calculator, &input)?;
    output_result(format, calculator, &result)
}

fn cmd_run(
    service: &CalculationService,
    requests_path: &Path,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let requests = load_requests(requests_path)?;
    let results = service.run_batch(&requests);

    if let Some(output_path) = output {
        let is_csv = output_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv {
            export_to_csv(&results, &output_path)?;
        } else {
            let content = serde_json::to_string_pretty(&results)?;
            std::fs::write(&output_path, content)?;
        }
        debug!(path = %output_path.display(), "batch results written");
        eprintln!("Results saved to: {}", output_path.display());
    }

    output_batch(format, &results)
}

fn cmd_config(show: bool, set: Vec<(String, String)>, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = !set.is_empty();

    for (key, value) in &set {
        config.set(key, value)?;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
