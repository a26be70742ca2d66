//! Domain model types

pub mod calculator;
pub mod catalog;
pub mod lookup_table;
pub mod option;

pub use calculator::{
    Baseline, BaseFormula, CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource,
    CatalogRef, EfficiencyScale, EfficiencySource, EnergyLoad, NumericField, TableBinding,
    UnitScale,
};
pub use catalog::SizeCatalog;
pub use lookup_table::LookupTable;
pub use option::LookupOption;
