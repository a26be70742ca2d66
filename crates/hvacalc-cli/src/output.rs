//! Output formatting module

use hvacalc_app::app::BatchResults;
use hvacalc_app::CalculatorType;
use hvacalc_domain::model::{LookupTable, SizeCatalog};
use hvacalc_domain::LookupTableRegistry;
use hvacalc_types::{
    CalculationResult, CombineMode, EnergyUse, ImpactKind, OutputFormat, Payback, Result,
};
use serde_json::json;

pub fn output_result(
    output_format: OutputFormat,
    calculator: CalculatorType,
    result: &CalculationResult,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{}", calculator.title());
    println!("{}", "=".repeat(calculator.title().len()));
    println!(
        "Base:            {:.1} {} ({})",
        result.base.value, result.base.unit, result.base.explanation
    );

    if !result.applied_factors.is_empty() {
        println!("\n--- Factors ---");
        for factor in &result.applied_factors {
            match factor.combine_mode {
                CombineMode::Multiply => println!(
                    "  {:<18} {:<20} x{:.3}",
                    factor.table_name, factor.display_name, factor.weight
                ),
                CombineMode::Add => println!(
                    "  {:<18} {:<20} +{:.1}",
                    factor.table_name,
                    factor.display_name,
                    factor.additive_contribution()
                ),
            }
        }
        println!("---------------");
        println!("Multiplier:      x{:.4}", result.multiplier);
        println!("Additive:        +{:.1}", result.additive);
    }

    println!(
        "Requirement:     {:.1} {}",
        result.raw_quantity, result.quantity_unit
    );

    if let Some(size) = &result.size {
        println!(
            "Selected size:   {} {} ({})",
            size.selected_size,
            size.unit,
            size.fit.label()
        );
        if size.safety_margin_pct > 0.0 {
            println!(
                "Safety margin:   {}% (target {:.1})",
                size.safety_margin_pct, size.target
            );
        }
        if size.in_range {
            println!("Oversize:        {:.1}%", size.oversize_pct * 100.0);
        } else {
            println!(
                "Warning:         requirement exceeds the largest '{}' size",
                size.catalog
            );
        }
    }

    let metrics = &result.derived_metrics;
    if !metrics.energy.is_empty() {
        println!("\n--- Energy ---");
        for energy in &metrics.energy {
            print_energy(energy);
        }
        if let Some(cost) = metrics.annual_operating_cost {
            println!("Annual cost:     ${:.2}", cost);
        }
    }

    if let Some(comparison) = &metrics.comparison {
        println!("\n--- Baseline ---");
        for energy in &comparison.baseline_energy {
            print_energy(energy);
        }
        println!("Baseline cost:   ${:.2}", comparison.baseline_annual_cost);
        println!("Annual savings:  ${:.2}", comparison.annual_savings);
        match comparison.payback {
            Payback::Years { years } => println!("Payback:         {:.1} years", years),
            Payback::NoPayback => println!("Payback:         never (no savings)"),
            Payback::NotRequested => {}
        }
        for horizon in &comparison.cumulative_savings {
            println!(
                "  {:>2}-year savings: ${:.2}",
                horizon.years, horizon.savings
            );
        }
    }

    if let Some(impact) = &metrics.environmental {
        let label = match impact.kind {
            ImpactKind::Emission => "CO2 emitted",
            ImpactKind::Reduction => "CO2 avoided",
            ImpactKind::Increase => "CO2 added",
        };
        println!("\n{}:     {:.0} kg/year", label, impact.co2_kg);
        println!(
            "Equivalent to:   {:.1} trees, {:.2} cars",
            impact.equivalent_trees, impact.equivalent_cars
        );
    }

    Ok(())
}

fn print_energy(energy: &EnergyUse) {
    println!(
        "  {:<10} {:.1} {}/year  ${:.2}",
        energy.label,
        energy.annual_amount,
        energy.carrier.unit_label(),
        energy.annual_cost
    );
}

pub fn output_calculators(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let list: Vec<_> = CalculatorType::ALL
            .iter()
            .map(|calculator| {
                let config = calculator.config();
                json!({
                    "key": config.key,
                    "title": config.title,
                    "quantityUnit": config.quantity_unit,
                    "numbers": config.numeric_fields.iter().map(|f| f.name).collect::<Vec<_>>(),
                    "options": config.bindings.iter().map(|b| b.field).collect::<Vec<_>>(),
                    "catalog": config.catalog.map(|c| c.name),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!("\nCalculators");
    println!("===========");
    for calculator in CalculatorType::ALL {
        let config = calculator.config();
        println!("{:<20} {}", config.key, config.title);
        let fields: Vec<String> = config
            .numeric_fields
            .iter()
            .map(|f| format!("{} ({})", f.name, f.unit))
            .collect();
        println!("{:<20} --num {}", "", fields.join(", "));
    }

    Ok(())
}

pub fn output_table_names(output_format: OutputFormat, registry: &LookupTableRegistry) -> Result<()> {
    let tables: Vec<&str> = registry.tables().map(|t| t.name.as_str()).collect();
    let catalogs: Vec<&str> = registry.catalogs().map(|c| c.name.as_str()).collect();

    if output_format == OutputFormat::Json {
        let content = json!({
            "version": registry.version(),
            "tables": tables,
            "catalogs": catalogs,
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    println!("\nLookup tables (version {})", registry.version());
    println!("=============");
    for name in tables {
        println!("  {}", name);
    }
    println!("\nSize catalogs");
    println!("=============");
    for name in catalogs {
        println!("  {}", name);
    }

    Ok(())
}

pub fn output_table(
    output_format: OutputFormat,
    table: Option<&LookupTable>,
    catalog: Option<&SizeCatalog>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = match (table, catalog) {
            (Some(table), _) => serde_json::to_string_pretty(table)?,
            (None, Some(catalog)) => serde_json::to_string_pretty(catalog)?,
            (None, None) => return Ok(()),
        };
        println!("{}", content);
        return Ok(());
    }

    if let Some(table) = table {
        println!("\n{}", table.name);
        println!("{}", "=".repeat(table.name.len()));
        if !table.description.is_empty() {
            println!("{}\n", table.description);
        }
        for option in &table.options {
            if option.metadata.is_empty() {
                println!("  {:<24} {:<28} {}", option.key, option.display_name, option.weight);
            } else {
                println!(
                    "  {:<24} {:<28} {} ({})",
                    option.key, option.display_name, option.weight, option.metadata
                );
            }
        }
    }

    if let Some(catalog) = catalog {
        println!("\n{} ({})", catalog.name, catalog.unit);
        println!("{}", "=".repeat(catalog.name.len()));
        for &size in &catalog.sizes {
            println!("  {:<8} -> {}", size, catalog.output_of(size));
        }
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, results: &BatchResults) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(results)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Results");
    println!("=============");
    for entry in &results.entries {
        let label = entry.label.as_deref().unwrap_or("-");
        match (&entry.result, &entry.error) {
            (Some(result), _) => {
                let size = result
                    .size
                    .as_ref()
                    .map(|s| format!("{} {} ({})", s.selected_size, s.unit, s.fit.label()))
                    .unwrap_or_else(|| format!("{:.1} {}", result.raw_quantity, result.quantity_unit));
                println!("{:>3}  {:<16} {:<18} {}", entry.index, label, entry.calculator, size);
            }
            (None, Some(error)) => {
                println!(
                    "{:>3}  {:<16} {:<18} ERROR: {}",
                    entry.index, label, entry.calculator, error
                );
            }
            (None, None) => {}
        }
    }

    println!("\nTotal:     {}", results.total_processed);
    println!("Succeeded: {}", results.successful);
    println!("Failed:    {}", results.failed);
    println!(
        "Elapsed:   {} ms",
        (results.completed_at - results.started_at).num_milliseconds()
    );

    Ok(())
}
