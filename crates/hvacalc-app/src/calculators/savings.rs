//! Efficiency upgrade comparisons (SEER, AFUE, HSPF)
//!
//! The base is the rated capacity of the existing system; energy is computed
//! at that capacity for both the current and the new rating.

use super::fields::{COOLING_HOURS, ELECTRIC_RATE, GAS_RATE, HEATING_HOURS, UPGRADE_COST};
use hvacalc_domain::constants::BTU_PER_TON;
use hvacalc_domain::model::{
    Baseline, BaseFormula, CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource,
    CatalogRef, EfficiencyScale, EfficiencySource, EnergyLoad, NumericField,
};
use hvacalc_types::EnergyCarrier;

const SAVINGS_HORIZONS: &[u32] = &[5, 10, 15, 20];

const TONS_TO_BTU: BaseFormula = BaseFormula::PerUnitConstant {
    quantity: "tons",
    per_unit: BTU_PER_TON,
};

const TONNAGE: CatalogRef = CatalogRef {
    name: "ac-tonnage",
    safety_margin_field: None,
};

const fn upgrade(
    label: &'static str,
    current: &'static str,
    new: &'static str,
    scale: EfficiencyScale,
    carrier: EnergyCarrier,
    hours_field: &'static str,
) -> EnergyLoad {
    EnergyLoad {
        label,
        basis: CapacityBasis::AdjustedQuantity,
        unit: CapacityUnit::Btu,
        efficiency: EfficiencySource::Field(new),
        scale,
        carrier: CarrierSource::Fixed(carrier),
        hours_field,
        baseline: Some(Baseline {
            efficiency: EfficiencySource::Field(current),
            carrier: CarrierSource::Fixed(carrier),
        }),
    }
}

pub const SEER_SAVINGS: CalculatorConfig = CalculatorConfig {
    key: "seer-savings",
    title: "SEER Upgrade Savings",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("tons", "ton", 0.5, 25.0),
        NumericField::required("current_seer", "SEER", 6.0, 40.0),
        NumericField::required("new_seer", "SEER", 6.0, 40.0),
        COOLING_HOURS,
        ELECTRIC_RATE,
        UPGRADE_COST,
    ],
    base: TONS_TO_BTU,
    bindings: &[],
    catalog: Some(TONNAGE),
    energy: &[upgrade(
        "cooling",
        "current_seer",
        "new_seer",
        EfficiencyScale::BtuPerWattHour,
        EnergyCarrier::Electricity,
        "cooling_hours",
    )],
    payback_field: Some("upgrade_cost"),
    horizons: SAVINGS_HORIZONS,
};

/// AFUE entered in percent (80, 95)
pub const AFUE_SAVINGS: CalculatorConfig = CalculatorConfig {
    key: "afue-savings",
    title: "AFUE Upgrade Savings",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("furnace_btu", "BTU/h", 20000.0, 300000.0),
        NumericField::required("current_afue", "%", 50.0, 99.0),
        NumericField::required("new_afue", "%", 50.0, 99.0),
        HEATING_HOURS,
        GAS_RATE,
        UPGRADE_COST,
    ],
    base: BaseFormula::PerUnitConstant {
        quantity: "furnace_btu",
        per_unit: 1.0,
    },
    bindings: &[],
    catalog: Some(CatalogRef {
        name: "furnace-output-btu",
        safety_margin_field: None,
    }),
    energy: &[upgrade(
        "heating",
        "current_afue",
        "new_afue",
        EfficiencyScale::Percent,
        EnergyCarrier::NaturalGas,
        "heating_hours",
    )],
    payback_field: Some("upgrade_cost"),
    horizons: SAVINGS_HORIZONS,
};

pub const HSPF_SAVINGS: CalculatorConfig = CalculatorConfig {
    key: "hspf-savings",
    title: "HSPF Upgrade Savings",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("tons", "ton", 0.5, 25.0),
        NumericField::required("current_hspf", "HSPF", 4.0, 20.0),
        NumericField::required("new_hspf", "HSPF", 4.0, 20.0),
        HEATING_HOURS,
        ELECTRIC_RATE,
        UPGRADE_COST,
    ],
    base: TONS_TO_BTU,
    bindings: &[],
    catalog: Some(TONNAGE),
    energy: &[upgrade(
        "heating",
        "current_hspf",
        "new_hspf",
        EfficiencyScale::BtuPerWattHour,
        EnergyCarrier::Electricity,
        "heating_hours",
    )],
    payback_field: Some("upgrade_cost"),
    horizons: SAVINGS_HORIZONS,
};
