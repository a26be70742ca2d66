//! Water heater tank sizing and fuel cost comparison

use super::fields::{ELECTRIC_RATE, GAS_RATE, UPGRADE_COST};
use hvacalc_domain::constants::BTU_PER_GALLON_DEGREE_F;
use hvacalc_domain::model::{
    Baseline, BaseFormula, CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource,
    CatalogRef, EfficiencyScale, EfficiencySource, EnergyLoad, NumericField, TableBinding,
};

/// Peak-hour demand in gallons
pub const WATER_HEATER_SIZE: CalculatorConfig = CalculatorConfig {
    key: "water-heater-size",
    title: "Water Heater Tank Size",
    quantity_unit: "gal",
    numeric_fields: &[
        NumericField::required("occupants", "people", 1.0, 12.0),
        NumericField::optional("bathrooms", "baths", 1.0, 8.0, 2.0),
    ],
    base: BaseFormula::PerUnitConstant {
        quantity: "occupants",
        per_unit: 12.0,
    },
    bindings: &[
        TableBinding::multiply("usage", "water-usage").with_default("average"),
        TableBinding::add("bathroom_demand", "bathroom-demand")
            .per_unit_over("bathrooms", 2.0)
            .with_default("standard"),
    ],
    catalog: Some(CatalogRef {
        name: "tank-gallons",
        safety_margin_field: None,
    }),
    energy: &[],
    payback_field: None,
    horizons: &[],
};

const FUEL_TABLE: &str = "water-heater-fuel";

/// Daily heating energy in BTU; `days` counts heating days per year
pub const WATER_HEATER_COST: CalculatorConfig = CalculatorConfig {
    key: "water-heater-cost",
    title: "Water Heater Operating Cost",
    quantity_unit: "BTU/day",
    numeric_fields: &[
        NumericField::required("gallons_per_day", "gal/day", 5.0, 500.0),
        NumericField::optional("temperature_rise", "F", 20.0, 120.0, 70.0),
        NumericField::optional("days", "days/yr", 1.0, 366.0, 365.0),
        ELECTRIC_RATE,
        GAS_RATE,
        UPGRADE_COST,
    ],
    base: BaseFormula::Product {
        left: "gallons_per_day",
        right: "temperature_rise",
        per_unit: BTU_PER_GALLON_DEGREE_F,
    },
    bindings: &[],
    catalog: None,
    energy: &[EnergyLoad {
        label: "water heating",
        basis: CapacityBasis::AdjustedQuantity,
        unit: CapacityUnit::Btu,
        efficiency: EfficiencySource::Option {
            field: "fuel",
            table: FUEL_TABLE,
        },
        scale: EfficiencyScale::Fraction,
        carrier: CarrierSource::Option {
            field: "fuel",
            table: FUEL_TABLE,
        },
        hours_field: "days",
        baseline: Some(Baseline {
            efficiency: EfficiencySource::Option {
                field: "current_fuel",
                table: FUEL_TABLE,
            },
            carrier: CarrierSource::Option {
                field: "current_fuel",
                table: FUEL_TABLE,
            },
        }),
    }],
    payback_field: Some("upgrade_cost"),
    horizons: &[5, 10, 15],
};
