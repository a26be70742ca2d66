//! Application service layer - calculator dispatch, config, batch runs, export

pub mod app;
pub mod calculators;
pub mod config;
pub mod constants;
pub mod export;

pub use app::{calculate, calculate_key, CalculationService};
pub use calculators::CalculatorType;
pub use config::Config;
