//! Furnace sizing

use super::fields::{CEILING_HEIGHT, GAS_RATE, HEATING_HOURS, INSULATION, SAFETY_MARGIN};
use hvacalc_domain::model::{
    BaseFormula, CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource, CatalogRef,
    EfficiencyScale, EfficiencySource, EnergyLoad, NumericField, TableBinding,
};

/// Output capacity is rounded up to a catalog size; gas use is that output
/// divided by the AFUE of the selected tier.
pub const FURNACE_SIZE: CalculatorConfig = CalculatorConfig {
    key: "furnace-size",
    title: "Furnace Size",
    quantity_unit: "BTU/h",
    numeric_fields: &[
        NumericField::required("area", "sq ft", 200.0, 10000.0),
        HEATING_HOURS,
        GAS_RATE,
        SAFETY_MARGIN,
    ],
    base: BaseFormula::PerUnitOption {
        quantity: "area",
        option_field: "climate_zone",
        table: "heating-climate",
    },
    bindings: &[
        INSULATION,
        TableBinding::multiply("windows", "window-quality").with_default("double-pane"),
        CEILING_HEIGHT,
    ],
    catalog: Some(CatalogRef {
        name: "furnace-output-btu",
        safety_margin_field: Some("safety_margin_pct"),
    }),
    energy: &[EnergyLoad {
        label: "heating",
        basis: CapacityBasis::SelectedOutput,
        unit: CapacityUnit::Btu,
        efficiency: EfficiencySource::Option {
            field: "furnace_tier",
            table: "furnace-efficiency",
        },
        scale: EfficiencyScale::Fraction,
        carrier: CarrierSource::Option {
            field: "furnace_tier",
            table: "furnace-efficiency",
        },
        hours_field: "heating_hours",
        baseline: None,
    }],
    payback_field: None,
    horizons: &[],
};
