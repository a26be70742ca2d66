//! Pure domain services

pub mod adjustment;
pub mod base_quantity;
pub mod derived_metrics;
pub mod engine;
pub mod factor_resolver;
pub mod size_selector;
pub mod validation;

pub use adjustment::{apply_factors, Adjustment};
pub use derived_metrics::{
    annual_energy, cumulative_savings, environmental_impact, payback_period,
};
pub use engine::run_calculation;
pub use factor_resolver::resolve;
pub use size_selector::select_size;
pub use validation::{validate_numbers, ResolvedNumbers};
