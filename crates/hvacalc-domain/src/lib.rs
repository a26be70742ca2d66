//! HVAC estimation engine
//!
//! Data-driven: lookup tables and size catalogs live in a
//! [`registry::LookupTableRegistry`], calculators are
//! [`model::CalculatorConfig`] bundles, and [`service::run_calculation`]
//! interprets one against the other. No I/O happens here.

pub mod constants;
pub mod model;
pub mod registry;
pub mod service;

#[cfg(test)]
mod fixtures;

pub use registry::LookupTableRegistry;
pub use service::run_calculation;
