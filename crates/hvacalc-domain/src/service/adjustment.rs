//! Adjustment Pipeline
//!
//! Two passes, never interleaved:
//!
//! ```text
//! M        = Π weight_i                    (multiply factors)
//! A        = Σ weight_j × unitMultiplier_j (add factors)
//! adjusted = base × M + A
//! ```
//!
//! Additive per-unit terms are not scaled by climate or insulation
//! multipliers.

use hvacalc_types::{CalculationFactor, CombineMode};

/// Intermediate values of one adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub multiplier: f64,
    pub multiplied: f64,
    pub additive: f64,
    pub adjusted: f64,
}

/// Apply resolved factors to a base quantity
pub fn apply_factors(base: f64, factors: &[CalculationFactor]) -> Adjustment {
    let multiplier = combined_multiplier(factors);
    let multiplied = base * multiplier;
    let additive = combined_additive(factors);
    Adjustment {
        multiplier,
        multiplied,
        additive,
        adjusted: multiplied + additive,
    }
}

/// Product of all multiply-mode weights (1.0 when there are none)
pub fn combined_multiplier(factors: &[CalculationFactor]) -> f64 {
    factors
        .iter()
        .filter(|f| f.combine_mode == CombineMode::Multiply)
        .map(|f| f.weight)
        .product()
}

/// Sum of all add-mode terms (0.0 when there are none)
pub fn combined_additive(factors: &[CalculationFactor]) -> f64 {
    factors.iter().map(CalculationFactor::additive_contribution).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(table: &str, weight: f64, mode: CombineMode, units: f64) -> CalculationFactor {
        CalculationFactor {
            table_name: table.to_string(),
            option_key: "k".to_string(),
            display_name: "K".to_string(),
            weight,
            combine_mode: mode,
            unit_multiplier: units,
            explanation: String::new(),
        }
    }

    fn multiply(weight: f64) -> CalculationFactor {
        factor("m", weight, CombineMode::Multiply, 1.0)
    }

    fn add(weight: f64, units: f64) -> CalculationFactor {
        factor("a", weight, CombineMode::Add, units)
    }

    // ==========================================
    // Two-pass ordering
    // ==========================================

    #[test]
    fn test_multiply_then_add() {
        // 1000 x 1.5 + 600 = 2100
        let adjustment = apply_factors(1000.0, &[multiply(1.5), add(600.0, 1.0)]);
        assert!((adjustment.adjusted - 2100.0).abs() < f64::EPSILON);
        assert!((adjustment.multiplied - 1500.0).abs() < f64::EPSILON);
        assert!((adjustment.additive - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_before_multiply_is_wrong() {
        // (1000 + 600) x 1.5 = 2400 must not be what the pipeline produces
        let interleaved: f64 = (1000.0 + 600.0) * 1.5;
        assert!((interleaved - 2400.0).abs() < f64::EPSILON);

        let adjustment = apply_factors(1000.0, &[add(600.0, 1.0), multiply(1.5)]);
        assert!((adjustment.adjusted - interleaved).abs() > 1.0);
        assert!((adjustment.adjusted - 2100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_additive_not_scaled_by_multipliers() {
        let adjustment = apply_factors(
            6000.0,
            &[multiply(1.2), multiply(1.1), add(600.0, 2.0)],
        );
        // 6000 x 1.32 + 1200
        assert!((adjustment.adjusted - 9120.0).abs() < 1e-9);
    }

    // ==========================================
    // Accumulation
    // ==========================================

    #[test]
    fn test_multiplier_order_independent() {
        let a = combined_multiplier(&[multiply(1.2), multiply(0.85), multiply(1.1)]);
        let b = combined_multiplier(&[multiply(1.1), multiply(1.2), multiply(0.85)]);
        let c = combined_multiplier(&[multiply(0.85), multiply(1.1), multiply(1.2)]);
        assert!((a - b).abs() < 1e-12);
        assert!((a - c).abs() < 1e-12);
    }

    #[test]
    fn test_no_factors_is_neutral() {
        let adjustment = apply_factors(6000.0, &[]);
        assert_eq!(adjustment.multiplier, 1.0);
        assert_eq!(adjustment.additive, 0.0);
        assert_eq!(adjustment.adjusted, 6000.0);
    }

    #[test]
    fn test_zero_units_add_nothing() {
        let adjustment = apply_factors(6000.0, &[add(600.0, 0.0)]);
        assert_eq!(adjustment.adjusted, 6000.0);
    }

    #[test]
    fn test_multiply_factors_ignored_in_additive() {
        assert_eq!(combined_additive(&[multiply(1.5)]), 0.0);
        assert_eq!(combined_multiplier(&[add(600.0, 3.0)]), 1.0);
    }
}
