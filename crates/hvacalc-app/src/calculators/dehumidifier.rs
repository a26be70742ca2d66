//! Dehumidifier capacity in pints per day

use hvacalc_domain::model::{
    BaseFormula, CalculatorConfig, CatalogRef, NumericField, TableBinding,
};

pub const DEHUMIDIFIER: CalculatorConfig = CalculatorConfig {
    key: "dehumidifier",
    title: "Dehumidifier Capacity",
    quantity_unit: "pints/day",
    numeric_fields: &[NumericField::required("area", "sq ft", 100.0, 5000.0)],
    base: BaseFormula::PerUnitOption {
        quantity: "area",
        option_field: "dampness",
        table: "dampness",
    },
    bindings: &[TableBinding::add("laundry", "laundry").with_default("none")],
    catalog: Some(CatalogRef {
        name: "dehumidifier-pints",
        safety_margin_field: None,
    }),
    energy: &[],
    payback_field: None,
    horizons: &[],
};
