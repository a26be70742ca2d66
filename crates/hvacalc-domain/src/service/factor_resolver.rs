//! Factor Resolution
//!
//! Turns the option keys selected in an input into an ordered list of
//! weights. Unknown keys and tables propagate unchanged from the registry;
//! a binding's default key only stands in when no selection was made.

use super::validation::ResolvedNumbers;
use crate::model::{LookupOption, TableBinding, UnitScale};
use crate::registry::LookupTableRegistry;
use hvacalc_types::{CalculationError, CalculationFactor, CalculationInput, CombineMode};

/// Resolve every binding of a calculator, in declaration order
pub fn resolve(
    input: &CalculationInput,
    bindings: &[TableBinding],
    registry: &LookupTableRegistry,
    numbers: &ResolvedNumbers,
) -> Result<Vec<CalculationFactor>, CalculationError> {
    bindings
        .iter()
        .map(|binding| resolve_binding(input, binding, registry, numbers))
        .collect()
}

fn resolve_binding(
    input: &CalculationInput,
    binding: &TableBinding,
    registry: &LookupTableRegistry,
    numbers: &ResolvedNumbers,
) -> Result<CalculationFactor, CalculationError> {
    let option = selected_option(input, binding.field, binding.table, binding.default_key, registry)?;

    let unit_multiplier = match binding.mode {
        CombineMode::Multiply => 1.0,
        CombineMode::Add => unit_multiplier(&binding.scale, numbers)?,
    };

    Ok(CalculationFactor {
        table_name: binding.table.to_string(),
        option_key: option.key.clone(),
        display_name: option.display_name.clone(),
        weight: option.weight,
        combine_mode: binding.mode,
        unit_multiplier,
        explanation: explain(binding, option, unit_multiplier),
    })
}

/// Option selected for `field`, falling back to `default_key` only when the
/// input has no selection
pub fn selected_option<'r>(
    input: &CalculationInput,
    field: &str,
    table: &str,
    default_key: Option<&str>,
    registry: &'r LookupTableRegistry,
) -> Result<&'r LookupOption, CalculationError> {
    let key = input
        .option(field)
        .or(default_key)
        .ok_or_else(|| CalculationError::MissingOption {
            field: field.to_string(),
        })?;
    registry.get(table, key)
}

/// `max(0, value - threshold)` for per-unit-over-threshold terms
fn unit_multiplier(scale: &UnitScale, numbers: &ResolvedNumbers) -> Result<f64, CalculationError> {
    match scale {
        UnitScale::Single => Ok(1.0),
        UnitScale::PerUnitOver { field, threshold } => {
            Ok((numbers.get(field)? - threshold).max(0.0))
        }
    }
}

fn explain(binding: &TableBinding, option: &LookupOption, units: f64) -> String {
    match (binding.mode, binding.scale) {
        (CombineMode::Multiply, _) => {
            format!("{}: {} (x{})", binding.table, option.display_name, option.weight)
        }
        (CombineMode::Add, UnitScale::Single) => {
            format!("{}: {} (+{})", binding.table, option.display_name, option.weight)
        }
        (CombineMode::Add, UnitScale::PerUnitOver { field, threshold }) => format!(
            "{}: {} (+{} per {} over {}, x{})",
            binding.table, option.display_name, option.weight, field, threshold, units
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    const BINDINGS: &[TableBinding] = &[
        TableBinding::multiply("insulation", "insulation").with_default("average"),
        TableBinding::multiply("sun_exposure", "sun-exposure"),
        TableBinding::add("activity", "occupant-activity")
            .per_unit_over("occupants", 2.0)
            .with_default("typical"),
    ];

    fn numbers(occupants: f64) -> ResolvedNumbers {
        let mut numbers = ResolvedNumbers::default();
        numbers.insert("occupants", occupants);
        numbers
    }

    #[test]
    fn test_resolve_in_declaration_order() {
        let registry = fixtures::registry();
        let input = CalculationInput::new()
            .with_option("insulation", "poor")
            .with_option("sun_exposure", "sunny");
        let factors = resolve(&input, BINDINGS, &registry, &numbers(4.0)).unwrap();

        assert_eq!(factors.len(), 3);
        assert_eq!(factors[0].table_name, "insulation");
        assert!((factors[0].weight - 1.2).abs() < f64::EPSILON);
        assert_eq!(factors[0].combine_mode, CombineMode::Multiply);
        assert_eq!(factors[1].option_key, "sunny");
        assert_eq!(factors[2].combine_mode, CombineMode::Add);
    }

    #[test]
    fn test_per_unit_over_threshold() {
        let registry = fixtures::registry();
        let input = CalculationInput::new().with_option("sun_exposure", "average");

        let factors = resolve(&input, BINDINGS, &registry, &numbers(4.0)).unwrap();
        assert!((factors[2].unit_multiplier - 2.0).abs() < f64::EPSILON);
        assert!((factors[2].additive_contribution() - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_per_unit_below_threshold_is_zero() {
        let registry = fixtures::registry();
        let input = CalculationInput::new().with_option("sun_exposure", "average");

        let factors = resolve(&input, BINDINGS, &registry, &numbers(1.0)).unwrap();
        assert_eq!(factors[2].unit_multiplier, 0.0);
    }

    #[test]
    fn test_default_key_when_no_selection() {
        let registry = fixtures::registry();
        let input = CalculationInput::new().with_option("sun_exposure", "shaded");
        let factors = resolve(&input, BINDINGS, &registry, &numbers(2.0)).unwrap();
        assert_eq!(factors[0].option_key, "average");
    }

    #[test]
    fn test_missing_selection_without_default() {
        let registry = fixtures::registry();
        let err = resolve(&CalculationInput::new(), BINDINGS, &registry, &numbers(2.0))
            .unwrap_err();
        assert_eq!(
            err,
            CalculationError::MissingOption {
                field: "sun_exposure".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_key_never_defaults() {
        let registry = fixtures::registry();
        let input = CalculationInput::new()
            .with_option("insulation", "superb")
            .with_option("sun_exposure", "average");
        let err = resolve(&input, BINDINGS, &registry, &numbers(2.0)).unwrap_err();
        assert_eq!(
            err,
            CalculationError::UnknownOption {
                table: "insulation".to_string(),
                key: "superb".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_table_propagates() {
        let registry = fixtures::registry();
        let bindings = [TableBinding::multiply("windows", "window-quality")];
        let input = CalculationInput::new().with_option("windows", "double-pane");
        let err = resolve(&input, &bindings, &registry, &numbers(2.0)).unwrap_err();
        assert!(matches!(err, CalculationError::UnknownTable { .. }));
    }

    #[test]
    fn test_explanation_text() {
        let registry = fixtures::registry();
        let input = CalculationInput::new()
            .with_option("insulation", "poor")
            .with_option("sun_exposure", "average");
        let factors = resolve(&input, BINDINGS, &registry, &numbers(3.0)).unwrap();
        assert_eq!(factors[0].explanation, "insulation: poor (x1.2)");
        assert!(factors[2].explanation.contains("per occupants over 2"));
    }
}
