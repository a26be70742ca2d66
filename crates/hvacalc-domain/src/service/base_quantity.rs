//! Base Quantity Calculator
//!
//! One multiplication of one or two primary numeric inputs by a per-unit
//! constant. Adjustment factors are applied later by the pipeline.

use super::factor_resolver::selected_option;
use super::validation::ResolvedNumbers;
use crate::model::BaseFormula;
use crate::registry::LookupTableRegistry;
use hvacalc_types::{BaseQuantity, CalculationError, CalculationInput};

/// Compute the unadjusted physical baseline
pub fn compute_base(
    formula: &BaseFormula,
    unit: &str,
    input: &CalculationInput,
    registry: &LookupTableRegistry,
    numbers: &ResolvedNumbers,
) -> Result<BaseQuantity, CalculationError> {
    let (value, explanation) = match *formula {
        BaseFormula::PerUnitOption {
            quantity,
            option_field,
            table,
        } => {
            let amount = numbers.get(quantity)?;
            let option = selected_option(input, option_field, table, None, registry)?;
            (
                per_unit(amount, option.weight),
                format!(
                    "{} {} x {} {}/unit ({})",
                    amount, quantity, option.weight, unit, option.display_name
                ),
            )
        }
        BaseFormula::PerUnitConstant { quantity, per_unit: k } => {
            let amount = numbers.get(quantity)?;
            (
                per_unit(amount, k),
                format!("{} {} x {} {}/unit", amount, quantity, k, unit),
            )
        }
        BaseFormula::Product { left, right, per_unit: k } => {
            let a = numbers.get(left)?;
            let b = numbers.get(right)?;
            (
                product(a, b, k),
                format!("{} {} x {} {} x {}", a, left, b, right, k),
            )
        }
    };

    Ok(BaseQuantity {
        value,
        unit: unit.to_string(),
        explanation,
    })
}

/// `amount * per_unit`
pub fn per_unit(amount: f64, per_unit: f64) -> f64 {
    amount * per_unit
}

/// `left * right * per_unit`
pub fn product(left: f64, right: f64, per_unit: f64) -> f64 {
    left * right * per_unit
}
