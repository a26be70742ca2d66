//! Cooling and heat pump sizing calculators

use super::fields::{
    CEILING_HEIGHT, COOLING_HOURS, ELECTRIC_RATE, HEATING_HOURS, INSULATION, OCCUPANTS,
    OCCUPANT_LOAD, ROOM_TYPE, SAFETY_MARGIN, SUN_EXPOSURE,
};
use hvacalc_domain::model::{
    BaseFormula, CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource, CatalogRef,
    EfficiencyScale, EfficiencySource, EnergyLoad, NumericField, TableBinding,
};
use hvacalc_types::EnergyCarrier;

/// area x cooling BTU/sqft of the selected zone
const COOLING_BASE: BaseFormula = BaseFormula::PerUnitOption {
    quantity: "area",
    option_field: "climate_zone",
    table: "cooling-climate",
};

const ENVELOPE: [TableBinding; 3] = [INSULATION, SUN_EXPOSURE, CEILING_HEIGHT];

const fn cooling_load(efficiency_field: &'static str) -> EnergyLoad {
    EnergyLoad {
        label: "cooling",
        basis: CapacityBasis::SelectedOutput,
        unit: CapacityUnit::Btu,
        efficiency: EfficiencySource::Field(efficiency_field),
        scale: EfficiencyScale::BtuPerWattHour,
        carrier: CarrierSource::Fixed(EnergyCarrier::Electricity),
        hours_field: "cooling_hours",
        baseline: None,
    }
}

// ==========================================
// Room air conditioner
// ==========================================

pub const ROOM_BTU: CalculatorConfig = CalculatorConfig {
    key: "room-btu",
    title: "Room Air Conditioner BTU",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("area", "sq ft", 50.0, 2500.0),
        OCCUPANTS,
        NumericField::optional("eer", "EER", 5.0, 20.0, 11.0),
        NumericField::optional("cooling_hours", "h/yr", 0.0, 8760.0, 1000.0),
        ELECTRIC_RATE,
    ],
    base: COOLING_BASE,
    bindings: &[ENVELOPE[0], ENVELOPE[1], ENVELOPE[2], ROOM_TYPE, OCCUPANT_LOAD],
    catalog: Some(CatalogRef {
        name: "room-ac-btu",
        safety_margin_field: None,
    }),
    energy: &[cooling_load("eer")],
    payback_field: None,
    horizons: &[],
};

// ==========================================
// Central air conditioner
// ==========================================

pub const AC_TONNAGE: CalculatorConfig = CalculatorConfig {
    key: "ac-tonnage",
    title: "Central AC Tonnage",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("area", "sq ft", 200.0, 10000.0),
        OCCUPANTS,
        NumericField::optional("seer", "SEER", 8.0, 40.0, 16.0),
        COOLING_HOURS,
        ELECTRIC_RATE,
        SAFETY_MARGIN,
    ],
    base: COOLING_BASE,
    bindings: &[ENVELOPE[0], ENVELOPE[1], ENVELOPE[2], OCCUPANT_LOAD],
    catalog: Some(CatalogRef {
        name: "ac-tonnage",
        safety_margin_field: Some("safety_margin_pct"),
    }),
    energy: &[cooling_load("seer")],
    payback_field: None,
    horizons: &[],
};

// ==========================================
// Heat pump
// ==========================================

pub const HEAT_PUMP_SIZE: CalculatorConfig = CalculatorConfig {
    key: "heat-pump-size",
    title: "Heat Pump Size",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("area", "sq ft", 200.0, 10000.0),
        OCCUPANTS,
        NumericField::optional("seer", "SEER", 8.0, 40.0, 16.0),
        NumericField::optional("hspf", "HSPF", 5.0, 20.0, 9.0),
        COOLING_HOURS,
        HEATING_HOURS,
        ELECTRIC_RATE,
        SAFETY_MARGIN,
    ],
    base: COOLING_BASE,
    bindings: &[ENVELOPE[0], ENVELOPE[1], ENVELOPE[2], OCCUPANT_LOAD],
    catalog: Some(CatalogRef {
        name: "ac-tonnage",
        safety_margin_field: Some("safety_margin_pct"),
    }),
    energy: &[
        cooling_load("seer"),
        EnergyLoad {
            label: "heating",
            basis: CapacityBasis::SelectedOutput,
            unit: CapacityUnit::Btu,
            efficiency: EfficiencySource::Field("hspf"),
            scale: EfficiencyScale::BtuPerWattHour,
            carrier: CarrierSource::Fixed(EnergyCarrier::Electricity),
            hours_field: "heating_hours",
            baseline: None,
        },
    ],
    payback_field: None,
    horizons: &[],
};

// ==========================================
// Ductless mini-split
// ==========================================

pub const MINI_SPLIT: CalculatorConfig = CalculatorConfig {
    key: "mini-split",
    title: "Mini-Split BTU",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("area", "sq ft", 100.0, 3000.0),
        OCCUPANTS,
        NumericField::optional("seer", "SEER", 12.0, 40.0, 20.0),
        COOLING_HOURS,
        ELECTRIC_RATE,
    ],
    base: COOLING_BASE,
    bindings: &[ENVELOPE[0], ENVELOPE[1], ENVELOPE[2], ROOM_TYPE, OCCUPANT_LOAD],
    catalog: Some(CatalogRef {
        name: "mini-split-btu",
        safety_margin_field: None,
    }),
    energy: &[cooling_load("seer")],
    payback_field: None,
    horizons: &[],
};
