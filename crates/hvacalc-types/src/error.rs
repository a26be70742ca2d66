//! Error types for hvacalc

use serde::Serialize;
use thiserror::Error;

/// Why a numeric input field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NumericIssue {
    /// Field absent and the calculator declares no default
    Missing,
    /// NaN or infinite
    NotFinite,
    /// Outside the declared plausible range (inclusive)
    OutOfRange { min: f64, max: f64 },
}

impl std::fmt::Display for NumericIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericIssue::Missing => write!(f, "value is missing"),
            NumericIssue::NotFinite => write!(f, "value is not a finite number"),
            NumericIssue::OutOfRange { min, max } => {
                write!(f, "value must be between {} and {}", min, max)
            }
        }
    }
}

/// Errors returned by a calculation request.
///
/// Every variant is a typed value handed back to the caller; nothing is
/// logged, retried or defaulted on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error", rename_all = "camelCase")]
pub enum CalculationError {
    #[error("Unknown lookup table: {table}")]
    UnknownTable { table: String },

    #[error("Unknown option '{key}' in table '{table}'")]
    UnknownOption { table: String, key: String },

    #[error("Unknown size catalog: {catalog}")]
    UnknownCatalog { catalog: String },

    #[error("Unknown calculator type: {calculator}")]
    UnknownCalculator { calculator: String },

    #[error("No option selected for '{field}'")]
    MissingOption { field: String },

    #[error("Invalid numeric input '{field}': {issue}")]
    InvalidNumericInput { field: String, issue: NumericIssue },

    #[error(
        "Degenerate comparison: proposed {proposed} does not improve on baseline {baseline}"
    )]
    DegenerateComparison { baseline: f64, proposed: f64 },

    #[error("No payback: annual savings of {annual_savings:.2} is not positive")]
    UndefinedPayback { annual_savings: f64 },

    #[error("Non-physical {quantity}: {value}")]
    NonPhysicalResult { quantity: String, value: f64 },

    #[error("Invalid calculator configuration: {detail}")]
    InvalidConfiguration { detail: String },
}

impl CalculationError {
    pub fn invalid_numeric(field: &str, issue: NumericIssue) -> Self {
        CalculationError::InvalidNumericInput {
            field: field.to_string(),
            issue,
        }
    }

    pub fn non_physical(quantity: &str, value: f64) -> Self {
        CalculationError::NonPhysicalResult {
            quantity: quantity.to_string(),
            value,
        }
    }

    pub fn configuration(detail: impl Into<String>) -> Self {
        CalculationError::InvalidConfiguration {
            detail: detail.into(),
        }
    }
}

/// Static table data failed to load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Failed to parse table data: {0}")]
    Parse(String),

    #[error("Duplicate table: {0}")]
    DuplicateTable(String),

    #[error("Duplicate option '{key}' in table '{table}'")]
    DuplicateOption { table: String, key: String },

    #[error("Table '{0}' has no options")]
    EmptyTable(String),

    #[error("Option '{key}' in table '{table}' has a non-finite weight")]
    NonFiniteWeight { table: String, key: String },

    #[error("Duplicate catalog: {0}")]
    DuplicateCatalog(String),

    #[error("Catalog '{0}' has no sizes")]
    EmptyCatalog(String),

    #[error("Catalog '{0}' sizes must be positive and strictly ascending")]
    UnsortedCatalog(String),

    #[error("Catalog '{catalog}' output per size unit must be positive, got {unit_output}")]
    InvalidUnitOutput { catalog: String, unit_output: f64 },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Table data error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_message() {
        let err = CalculationError::UnknownOption {
            table: "heating-climate".to_string(),
            key: "zone-99".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown option 'zone-99' in table 'heating-climate'"
        );
    }

    #[test]
    fn test_error_serializes_with_tag() {
        let err = CalculationError::invalid_numeric(
            "area",
            NumericIssue::OutOfRange {
                min: 50.0,
                max: 10000.0,
            },
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "invalidNumericInput");
        assert_eq!(json["field"], "area");
        assert_eq!(json["issue"]["kind"], "outOfRange");
    }

    #[test]
    fn test_calculation_error_converts_to_app_error() {
        let err: Error = CalculationError::UnknownCalculator {
            calculator: "pool-heater".to_string(),
        }
        .into();
        assert!(err.to_string().contains("pool-heater"));
    }
}
