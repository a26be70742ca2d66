//! Numeric input validation
//!
//! Every numeric field a calculator declares is resolved exactly once here:
//! taken from the input or its declared default, then checked against the
//! declared plausible range. Nothing is clamped.

use crate::model::NumericField;
use hvacalc_types::{CalculationError, CalculationInput, NumericIssue};
use std::collections::BTreeMap;

/// Validated numeric inputs of one calculation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedNumbers {
    values: BTreeMap<&'static str, f64>,
}

impl ResolvedNumbers {
    /// Value of a declared field
    pub fn get(&self, name: &str) -> Result<f64, CalculationError> {
        self.values.get(name).copied().ok_or_else(|| {
            CalculationError::configuration(format!("numeric field '{}' is not declared", name))
        })
    }

    pub fn insert(&mut self, name: &'static str, value: f64) {
        self.values.insert(name, value);
    }
}

/// Resolve and range-check all declared numeric fields
pub fn validate_numbers(
    fields: &'static [NumericField],
    input: &CalculationInput,
) -> Result<ResolvedNumbers, CalculationError> {
    let mut resolved = ResolvedNumbers::default();
    for field in fields {
        let value = validate_field(field, input.number(field.name))?;
        resolved.insert(field.name, value);
    }
    Ok(resolved)
}

/// Check one value against its declaration
pub fn validate_field(field: &NumericField, value: Option<f64>) -> Result<f64, CalculationError> {
    let value = value
        .or(field.default)
        .ok_or_else(|| CalculationError::invalid_numeric(field.name, NumericIssue::Missing))?;

    if !value.is_finite() {
        return Err(CalculationError::invalid_numeric(
            field.name,
            NumericIssue::NotFinite,
        ));
    }
    if value < field.min || value > field.max {
        return Err(CalculationError::invalid_numeric(
            field.name,
            NumericIssue::OutOfRange {
                min: field.min,
                max: field.max,
            },
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[NumericField] = &[
        NumericField::required("area", "sq ft", 50.0, 10000.0),
        NumericField::optional("occupants", "people", 1.0, 20.0, 2.0),
    ];

    #[test]
    fn test_valid_input_with_default() {
        let input = CalculationInput::new().with_number("area", 300.0);
        let numbers = validate_numbers(FIELDS, &input).unwrap();
        assert_eq!(numbers.get("area").unwrap(), 300.0);
        assert_eq!(numbers.get("occupants").unwrap(), 2.0);
    }

    #[test]
    fn test_missing_required_field() {
        let err = validate_numbers(FIELDS, &CalculationInput::new()).unwrap_err();
        assert_eq!(
            err,
            CalculationError::invalid_numeric("area", NumericIssue::Missing)
        );
    }

    #[test]
    fn test_zero_area_rejected() {
        let input = CalculationInput::new().with_number("area", 0.0);
        let err = validate_numbers(FIELDS, &input).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidNumericInput {
                issue: NumericIssue::OutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_negative_value_rejected() {
        let input = CalculationInput::new()
            .with_number("area", 300.0)
            .with_number("occupants", -1.0);
        assert!(validate_numbers(FIELDS, &input).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let input = CalculationInput::new().with_number("area", f64::NAN);
        let err = validate_numbers(FIELDS, &input).unwrap_err();
        assert_eq!(
            err,
            CalculationError::invalid_numeric("area", NumericIssue::NotFinite)
        );
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let field = NumericField::required("area", "sq ft", 50.0, 10000.0);
        assert!(validate_field(&field, Some(50.0)).is_ok());
        assert!(validate_field(&field, Some(10000.0)).is_ok());
        assert!(validate_field(&field, Some(10000.1)).is_err());
    }

    #[test]
    fn test_undeclared_field_is_configuration_error() {
        let numbers = ResolvedNumbers::default();
        assert!(matches!(
            numbers.get("tons"),
            Err(CalculationError::InvalidConfiguration { .. })
        ));
    }
}
