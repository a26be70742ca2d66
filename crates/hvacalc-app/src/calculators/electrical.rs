//! Battery backup and circuit breaker sizing

use super::fields::ELECTRIC_RATE;
use hvacalc_domain::model::{
    BaseFormula, CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource, CatalogRef,
    EfficiencyScale, EfficiencySource, EnergyLoad, NumericField, TableBinding,
};
use hvacalc_types::EnergyCarrier;

/// Watt-hours needed to carry a load, oversized for depth of discharge
pub const BATTERY_BACKUP: CalculatorConfig = CalculatorConfig {
    key: "battery-backup",
    title: "Battery Backup Capacity",
    quantity_unit: "Wh",
    numeric_fields: &[
        NumericField::required("load_watts", "W", 10.0, 20000.0),
        NumericField::required("backup_hours", "h", 0.5, 72.0),
    ],
    base: BaseFormula::Product {
        left: "load_watts",
        right: "backup_hours",
        per_unit: 1.0,
    },
    bindings: &[
        TableBinding::multiply("chemistry", "battery-chemistry")
            .with_default("lithium-iron-phosphate"),
        TableBinding::multiply("temperature", "battery-temperature").with_default("mild"),
    ],
    catalog: Some(CatalogRef {
        name: "battery-kwh",
        safety_margin_field: None,
    }),
    energy: &[],
    payback_field: None,
    horizons: &[],
};

pub const CIRCUIT_BREAKER: CalculatorConfig = CalculatorConfig {
    key: "circuit-breaker",
    title: "Circuit Breaker Size",
    quantity_unit: "A",
    numeric_fields: &[
        NumericField::required("load_amps", "A", 0.5, 100.0),
        NumericField::optional("volts", "V", 100.0, 480.0, 240.0),
        NumericField::optional("usage_hours", "h/yr", 0.0, 8760.0, 1000.0),
        ELECTRIC_RATE,
    ],
    base: BaseFormula::PerUnitConstant {
        quantity: "load_amps",
        per_unit: 1.0,
    },
    bindings: &[TableBinding::multiply("duty", "load-duty").with_default("continuous")],
    catalog: Some(CatalogRef {
        name: "breaker-amps",
        safety_margin_field: None,
    }),
    energy: &[EnergyLoad {
        label: "circuit load",
        basis: CapacityBasis::FieldProduct {
            left: "volts",
            right: "load_amps",
        },
        unit: CapacityUnit::Watts,
        efficiency: EfficiencySource::Fixed(1.0),
        scale: EfficiencyScale::Fraction,
        carrier: CarrierSource::Fixed(EnergyCarrier::Electricity),
        hours_field: "usage_hours",
        baseline: None,
    }],
    payback_field: None,
    horizons: &[],
};
