//! Calculator configuration bundle
//!
//! A calculator is pure data: which numeric fields it accepts, how its base
//! quantity is formed, which lookup tables adjust it, which catalog it is
//! rounded onto and which energy loads its derived metrics are built from.
//! The engine in `service::engine` interprets a bundle; no calculator has
//! bespoke code.

use hvacalc_types::{CombineMode, EnergyCarrier};

/// Declared numeric input with a plausible inclusive range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: Option<f64>,
}

impl NumericField {
    pub const fn required(name: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            unit,
            min,
            max,
            default: None,
        }
    }

    pub const fn optional(
        name: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            name,
            unit,
            min,
            max,
            default: Some(default),
        }
    }
}

/// Unadjusted baseline: one multiplication of one or two numeric inputs by a
/// per-unit constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseFormula {
    /// `quantity * weight(option)`, e.g. area x BTU/sqft of the climate zone
    PerUnitOption {
        quantity: &'static str,
        option_field: &'static str,
        table: &'static str,
    },
    /// `quantity * per_unit`, e.g. tons x 12000
    PerUnitConstant {
        quantity: &'static str,
        per_unit: f64,
    },
    /// `left * right * per_unit`, e.g. watts x hours
    Product {
        left: &'static str,
        right: &'static str,
        per_unit: f64,
    },
}

/// Unit multiplier applied to an add-mode weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitScale {
    /// Weight added once
    Single,
    /// Weight added once per unit of `field` above `threshold`
    PerUnitOver {
        field: &'static str,
        threshold: f64,
    },
}

/// Maps one input option field onto a lookup table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBinding {
    pub field: &'static str,
    pub table: &'static str,
    pub mode: CombineMode,
    pub scale: UnitScale,
    /// Key used only when the caller made no selection at all
    pub default_key: Option<&'static str>,
}

impl TableBinding {
    pub const fn multiply(field: &'static str, table: &'static str) -> Self {
        Self {
            field,
            table,
            mode: CombineMode::Multiply,
            scale: UnitScale::Single,
            default_key: None,
        }
    }

    pub const fn add(field: &'static str, table: &'static str) -> Self {
        Self {
            field,
            table,
            mode: CombineMode::Add,
            scale: UnitScale::Single,
            default_key: None,
        }
    }

    pub const fn per_unit_over(self, field: &'static str, threshold: f64) -> Self {
        Self {
            scale: UnitScale::PerUnitOver { field, threshold },
            ..self
        }
    }

    pub const fn with_default(self, key: &'static str) -> Self {
        Self {
            default_key: Some(key),
            ..self
        }
    }
}

/// Catalog the adjusted quantity is rounded onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogRef {
    pub name: &'static str,
    /// Numeric field holding a safety margin in percent
    pub safety_margin_field: Option<&'static str>,
}

/// Capacity an energy load runs at
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityBasis {
    /// Output of the selected catalog size
    SelectedOutput,
    /// The adjusted requirement itself
    AdjustedQuantity,
    /// Product of two numeric inputs (volts x amps)
    FieldProduct {
        left: &'static str,
        right: &'static str,
    },
}

/// Physical unit of the capacity an energy load runs at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityUnit {
    /// BTU per hour (or per day when hours count days)
    Btu,
    Watts,
}

/// Scale an efficiency rating is expressed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyScale {
    /// SEER, EER, HSPF
    BtuPerWattHour,
    /// UEF, COP, 0.80 AFUE
    Fraction,
    /// AFUE as entered, e.g. 95
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EfficiencySource {
    Field(&'static str),
    Option {
        field: &'static str,
        table: &'static str,
    },
    Fixed(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarrierSource {
    Fixed(EnergyCarrier),
    /// Carrier declared on the selected option
    Option {
        field: &'static str,
        table: &'static str,
    },
}

/// Equipment being replaced, for comparison calculators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub efficiency: EfficiencySource,
    pub carrier: CarrierSource,
}

/// One annual energy consumer of the sized equipment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLoad {
    pub label: &'static str,
    pub basis: CapacityBasis,
    pub unit: CapacityUnit,
    pub efficiency: EfficiencySource,
    pub scale: EfficiencyScale,
    pub carrier: CarrierSource,
    /// Numeric field counting run hours (or days) per year
    pub hours_field: &'static str,
    pub baseline: Option<Baseline>,
}

/// Everything the engine needs to run one calculator type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    pub key: &'static str,
    pub title: &'static str,
    /// Unit of the base and adjusted quantity
    pub quantity_unit: &'static str,
    pub numeric_fields: &'static [NumericField],
    pub base: BaseFormula,
    pub bindings: &'static [TableBinding],
    pub catalog: Option<CatalogRef>,
    pub energy: &'static [EnergyLoad],
    /// Numeric field holding the upgrade price delta
    pub payback_field: Option<&'static str>,
    pub horizons: &'static [u32],
}

impl CalculatorConfig {
    pub fn numeric_field(&self, name: &str) -> Option<&NumericField> {
        self.numeric_fields.iter().find(|f| f.name == name)
    }

    /// True when any energy load compares against a baseline
    pub fn is_comparison(&self) -> bool {
        self.energy.iter().any(|load| load.baseline.is_some())
    }
}
