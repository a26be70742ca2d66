//! CSV export of batch results

use crate::app::{BatchEntry, BatchResults};
use hvacalc_types::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One flattened CSV row
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    index: usize,
    label: &'a str,
    calculator: &'a str,
    status: &'a str,
    raw_quantity: Option<f64>,
    quantity_unit: Option<&'a str>,
    selected_size: Option<f64>,
    size_unit: Option<&'a str>,
    oversize_pct: Option<f64>,
    fit: Option<&'a str>,
    annual_cost: Option<f64>,
    annual_savings: Option<f64>,
    payback_years: Option<f64>,
    co2_kg: Option<f64>,
    error: Option<String>,
}

impl<'a> CsvRow<'a> {
    fn from_entry(entry: &'a BatchEntry) -> Self {
        let result = entry.result.as_ref();
        let size = result.and_then(|r| r.size.as_ref());
        let metrics = result.map(|r| &r.derived_metrics);

        Self {
            index: entry.index,
            label: entry.label.as_deref().unwrap_or(""),
            calculator: &entry.calculator,
            status: if entry.is_success() { "ok" } else { "error" },
            raw_quantity: result.map(|r| r.raw_quantity),
            quantity_unit: result.map(|r| r.quantity_unit.as_str()),
            selected_size: size.map(|s| s.selected_size),
            size_unit: size.map(|s| s.unit.as_str()),
            oversize_pct: size.map(|s| s.oversize_pct * 100.0),
            fit: size.map(|s| s.fit.label()),
            annual_cost: metrics.and_then(|m| m.annual_operating_cost),
            annual_savings: metrics.and_then(|m| m.annual_savings()),
            payback_years: metrics.and_then(|m| m.payback()).and_then(|p| p.years()),
            co2_kg: metrics.and_then(|m| m.environmental.as_ref()).map(|e| e.co2_kg),
            error: entry.error.as_ref().map(|e| e.to_string()),
        }
    }
}

/// Write batch results as CSV to any writer
pub fn write_csv<W: Write>(results: &BatchResults, writer: W) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for entry in &results.entries {
        csv_writer.serialize(CsvRow::from_entry(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export batch results to a CSV file
pub fn export_to_csv(results: &BatchResults, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(results, file)
}
