//! Application use cases

pub mod batch_service;
pub mod calculation_service;

pub use batch_service::{load_requests, BatchEntry, BatchResults, CalculationRequest};
pub use calculation_service::{calculate, calculate_key, CalculationService};
