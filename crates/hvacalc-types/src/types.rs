//! Request and result types shared by the engine and its callers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a resolved weight is combined with the base quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
    /// Compounds into the multiplier `M`
    Multiply,
    /// Summed into the additive term `A`, scaled by a unit multiplier
    Add,
}

impl CombineMode {
    pub fn label(&self) -> &'static str {
        match self {
            CombineMode::Multiply => "multiply",
            CombineMode::Add => "add",
        }
    }
}

/// Calculator input: primary numeric fields plus one selected option key
/// per bound lookup table.
///
/// Field names and option keys are the contract with whatever collects
/// the input (form fields, dropdowns, JSON requests).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    #[serde(default)]
    pub numbers: BTreeMap<String, f64>,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl CalculationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, field: &str, value: f64) -> Self {
        self.numbers.insert(field.to_string(), value);
        self
    }

    pub fn with_option(mut self, field: &str, key: &str) -> Self {
        self.options.insert(field.to_string(), key.to_string());
        self
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.numbers.get(field).copied()
    }

    pub fn option(&self, field: &str) -> Option<&str> {
        self.options.get(field).map(String::as_str)
    }

    /// Insert a value only when the caller left the field empty
    pub fn set_number_if_absent(&mut self, field: &str, value: f64) {
        self.numbers.entry(field.to_string()).or_insert(value);
    }
}

/// A lookup-table weight resolved for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationFactor {
    pub table_name: String,
    pub option_key: String,
    pub display_name: String,
    pub weight: f64,
    pub combine_mode: CombineMode,
    /// 1.0 for multiply factors; the per-unit count for add factors
    pub unit_multiplier: f64,
    pub explanation: String,
}

impl CalculationFactor {
    /// Amount this factor adds to the additive term (zero for multiply factors)
    pub fn additive_contribution(&self) -> f64 {
        match self.combine_mode {
            CombineMode::Multiply => 0.0,
            CombineMode::Add => self.weight * self.unit_multiplier,
        }
    }
}

/// Unadjusted physical baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseQuantity {
    pub value: f64,
    pub unit: String,
    pub explanation: String,
}

/// Fit of the selected catalog size against the requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FitBand {
    /// Less than 10% over the requirement
    Excellent,
    /// 10-20% over
    Good,
    /// 20% or more over
    Oversized,
    /// Requirement exceeds the largest catalog size
    OutOfRange,
}

impl FitBand {
    pub fn label(&self) -> &'static str {
        match self {
            FitBand::Excellent => "excellent",
            FitBand::Good => "good",
            FitBand::Oversized => "oversized",
            FitBand::OutOfRange => "out of range - consult a professional",
        }
    }
}

/// Result of mapping a continuous requirement onto a discrete catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSelection {
    pub catalog: String,
    pub unit: String,
    /// Catalog entry in catalog units (tons, gallons, amps...)
    pub selected_size: f64,
    /// Catalog entry expressed in the requirement's unit
    pub selected_output: f64,
    /// Requirement after the safety margin
    pub target: f64,
    pub safety_margin_pct: f64,
    pub oversize_pct: f64,
    pub in_range: bool,
    pub fit: FitBand,
}

/// Energy carrier billed for an energy load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyCarrier {
    /// Billed per kWh
    Electricity,
    /// Billed per therm
    NaturalGas,
}

impl EnergyCarrier {
    pub fn unit_label(&self) -> &'static str {
        match self {
            EnergyCarrier::Electricity => "kWh",
            EnergyCarrier::NaturalGas => "therms",
        }
    }

    /// Input field carrying the utility rate for this carrier
    pub fn rate_field(&self) -> &'static str {
        match self {
            EnergyCarrier::Electricity => "electric_rate",
            EnergyCarrier::NaturalGas => "gas_rate",
        }
    }
}

/// Annual consumption and cost of one energy load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyUse {
    pub label: String,
    pub carrier: EnergyCarrier,
    pub efficiency: f64,
    pub annual_amount: f64,
    pub annual_cost: f64,
}

/// Payback status of an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Payback {
    Years { years: f64 },
    /// Annual savings are zero or negative
    NoPayback,
    /// No price delta supplied
    NotRequested,
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years { years } => Some(*years),
            _ => None,
        }
    }
}

/// Linear cumulative savings over a fixed horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonSavings {
    pub years: u32,
    pub savings: f64,
}

/// Baseline-versus-new comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub baseline_energy: Vec<EnergyUse>,
    pub baseline_annual_cost: f64,
    pub annual_savings: f64,
    pub payback: Payback,
    pub cumulative_savings: Vec<HorizonSavings>,
}

impl Comparison {
    pub fn savings_over(&self, years: u32) -> Option<f64> {
        self.cumulative_savings
            .iter()
            .find(|h| h.years == years)
            .map(|h| h.savings)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactKind {
    /// Annual emissions of the selected equipment
    Emission,
    /// Annual emissions avoided versus the baseline
    Reduction,
    /// Annual emissions added versus the baseline (fuel switch)
    Increase,
}

/// Simplified CO2 figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    pub kind: ImpactKind,
    pub co2_kg: f64,
    pub equivalent_trees: f64,
    pub equivalent_cars: f64,
}

/// Secondary outputs derived from the sized result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    #[serde(default)]
    pub energy: Vec<EnergyUse>,
    #[serde(default)]
    pub annual_operating_cost: Option<f64>,
    #[serde(default)]
    pub comparison: Option<Comparison>,
    #[serde(default)]
    pub environmental: Option<EnvironmentalImpact>,
}

impl DerivedMetrics {
    pub fn annual_savings(&self) -> Option<f64> {
        self.comparison.as_ref().map(|c| c.annual_savings)
    }

    pub fn payback(&self) -> Option<Payback> {
        self.comparison.as_ref().map(|c| c.payback)
    }
}

/// Complete result of one calculation. Never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub calculator: String,
    pub base: BaseQuantity,
    pub applied_factors: Vec<CalculationFactor>,
    /// Product of all multiply-mode weights
    pub multiplier: f64,
    /// Sum of all add-mode terms
    pub additive: f64,
    /// Adjusted requirement before catalog rounding
    pub raw_quantity: f64,
    pub quantity_unit: String,
    #[serde(default)]
    pub size: Option<SizeSelection>,
    pub derived_metrics: DerivedMetrics,
}

impl CalculationResult {
    pub fn selected_size(&self) -> Option<f64> {
        self.size.as_ref().map(|s| s.selected_size)
    }

    pub fn in_range(&self) -> bool {
        self.size.as_ref().map(|s| s.in_range).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_builder() {
        let input = CalculationInput::new()
            .with_number("area", 300.0)
            .with_option("climate_zone", "mixed-humid");
        assert_eq!(input.number("area"), Some(300.0));
        assert_eq!(input.option("climate_zone"), Some("mixed-humid"));
        assert_eq!(input.number("missing"), None);
    }

    #[test]
    fn test_set_number_if_absent_keeps_explicit_value() {
        let mut input = CalculationInput::new().with_number("electric_rate", 0.22);
        input.set_number_if_absent("electric_rate", 0.16);
        input.set_number_if_absent("gas_rate", 1.5);
        assert_eq!(input.number("electric_rate"), Some(0.22));
        assert_eq!(input.number("gas_rate"), Some(1.5));
    }

    #[test]
    fn test_input_deserializes_with_missing_sections() {
        let input: CalculationInput = serde_json::from_str(r#"{"numbers":{"tons":3}}"#).unwrap();
        assert_eq!(input.number("tons"), Some(3.0));
        assert!(input.options.is_empty());
    }

    #[test]
    fn test_additive_contribution() {
        let factor = CalculationFactor {
            table_name: "occupant-activity".to_string(),
            option_key: "typical".to_string(),
            display_name: "Typical".to_string(),
            weight: 600.0,
            combine_mode: CombineMode::Add,
            unit_multiplier: 2.0,
            explanation: String::new(),
        };
        assert!((factor.additive_contribution() - 1200.0).abs() < f64::EPSILON);

        let multiply = CalculationFactor {
            combine_mode: CombineMode::Multiply,
            ..factor
        };
        assert_eq!(multiply.additive_contribution(), 0.0);
    }

    #[test]
    fn test_payback_serializes_as_status() {
        let json = serde_json::to_value(Payback::NoPayback).unwrap();
        assert_eq!(json["status"], "noPayback");

        let json = serde_json::to_value(Payback::Years { years: 4.5 }).unwrap();
        assert_eq!(json["status"], "years");
        assert_eq!(json["years"], 4.5);
    }
}
