//! Static table data for the built-in calculators

pub mod tables;

pub use tables::{builtin_registry, TABLES_TOML};
