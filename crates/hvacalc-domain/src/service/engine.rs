//! Calculation engine
//!
//! Interprets a [`CalculatorConfig`] against the registry:
//! validate -> resolve factors -> base -> adjust -> select size -> metrics.
//! Any failure aborts the whole calculation; results are never partial.

use super::adjustment::apply_factors;
use super::base_quantity::compute_base;
use super::derived_metrics::{compute_metrics, MetricsContext};
use super::factor_resolver::resolve;
use super::size_selector::select_size;
use super::validation::validate_numbers;
use crate::model::CalculatorConfig;
use crate::registry::LookupTableRegistry;
use hvacalc_types::{CalculationError, CalculationInput, CalculationResult};

/// Run one calculator over one input
pub fn run_calculation(
    registry: &LookupTableRegistry,
    config: &CalculatorConfig,
    input: &CalculationInput,
) -> Result<CalculationResult, CalculationError> {
    let numbers = validate_numbers(config.numeric_fields, input)?;
    let factors = resolve(input, config.bindings, registry, &numbers)?;
    let base = compute_base(&config.base, config.quantity_unit, input, registry, &numbers)?;
    let adjustment = apply_factors(base.value, &factors);

    if !(adjustment.adjusted > 0.0) || !adjustment.adjusted.is_finite() {
        return Err(CalculationError::non_physical(
            "adjusted quantity",
            adjustment.adjusted,
        ));
    }

    let size = match &config.catalog {
        Some(catalog_ref) => {
            let catalog = registry.catalog(catalog_ref.name)?;
            let margin = match catalog_ref.safety_margin_field {
                Some(field) => numbers.get(field)?,
                None => 0.0,
            };
            Some(select_size(adjustment.adjusted, catalog, margin))
        }
        None => None,
    };

    let derived_metrics = compute_metrics(&MetricsContext {
        config,
        registry,
        input,
        numbers: &numbers,
        adjusted: adjustment.adjusted,
        size: size.as_ref(),
    })?;

    Ok(CalculationResult {
        calculator: config.key.to_string(),
        base,
        applied_factors: factors,
        multiplier: adjustment.multiplier,
        additive: adjustment.additive,
        raw_quantity: adjustment.adjusted,
        quantity_unit: config.quantity_unit.to_string(),
        size,
        derived_metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::model::{
        BaseFormula, CapacityBasis, CapacityUnit, CarrierSource, CatalogRef, EfficiencyScale,
        EfficiencySource, EnergyLoad, NumericField, TableBinding,
    };
    use hvacalc_types::{EnergyCarrier, FitBand, ImpactKind};

    const ROOM_FIELDS: &[NumericField] = &[
        NumericField::required("area", "sq ft", 50.0, 5000.0),
        NumericField::optional("occupants", "people", 1.0, 20.0, 2.0),
        NumericField::optional("eer", "EER", 5.0, 20.0, 10.0),
        NumericField::optional("cooling_hours", "h/yr", 0.0, 8760.0, 1000.0),
        NumericField::optional("electric_rate", "$/kWh", 0.0, 2.0, 0.16),
        NumericField::optional("safety_margin_pct", "%", 0.0, 50.0, 0.0),
    ];

    const ROOM_BINDINGS: &[TableBinding] = &[
        TableBinding::multiply("insulation", "insulation").with_default("average"),
        TableBinding::multiply("sun_exposure", "sun-exposure").with_default("average"),
        TableBinding::add("room_type", "room-type").with_default("bedroom"),
        TableBinding::add("activity", "occupant-activity")
            .per_unit_over("occupants", 2.0)
            .with_default("typical"),
    ];

    const ROOM_ENERGY: &[EnergyLoad] = &[EnergyLoad {
        label: "cooling",
        basis: CapacityBasis::SelectedOutput,
        unit: CapacityUnit::Btu,
        efficiency: EfficiencySource::Field("eer"),
        scale: EfficiencyScale::BtuPerWattHour,
        carrier: CarrierSource::Fixed(EnergyCarrier::Electricity),
        hours_field: "cooling_hours",
        baseline: None,
    }];

    const ROOM: CalculatorConfig = CalculatorConfig {
        key: "room-btu",
        title: "Room air conditioner",
        quantity_unit: "BTU/h",
        numeric_fields: ROOM_FIELDS,
        base: BaseFormula::PerUnitOption {
            quantity: "area",
            option_field: "climate_zone",
            table: "cooling-climate",
        },
        bindings: ROOM_BINDINGS,
        catalog: Some(CatalogRef {
            name: "room-ac-btu",
            safety_margin_field: Some("safety_margin_pct"),
        }),
        energy: ROOM_ENERGY,
        payback_field: None,
        horizons: &[],
    };

    fn room(area: f64) -> CalculationInput {
        CalculationInput::new()
            .with_number("area", area)
            .with_option("climate_zone", "mixed-humid")
    }

    #[test]
    fn test_neutral_room_selects_exact_size() {
        let registry = fixtures::registry();
        let result = run_calculation(&registry, &ROOM, &room(300.0)).unwrap();

        assert!((result.base.value - 6000.0).abs() < f64::EPSILON);
        assert_eq!(result.multiplier, 1.0);
        assert_eq!(result.additive, 0.0);
        assert!((result.raw_quantity - 6000.0).abs() < f64::EPSILON);

        let size = result.size.as_ref().unwrap();
        assert_eq!(size.selected_size, 6000.0);
        assert_eq!(size.oversize_pct, 0.0);
        assert_eq!(size.fit, FitBand::Excellent);
        assert_eq!(result.applied_factors.len(), 4);
    }

    #[test]
    fn test_operating_cost_uses_selected_output() {
        let registry = fixtures::registry();
        let result = run_calculation(&registry, &ROOM, &room(300.0)).unwrap();
        // 6000 x 1000 / 10 / 1000 = 600 kWh, x 0.16
        let energy = &result.derived_metrics.energy[0];
        assert!((energy.annual_amount - 600.0).abs() < 1e-9);
        assert!((result.derived_metrics.annual_operating_cost.unwrap() - 96.0).abs() < 1e-9);
        assert_eq!(
            result.derived_metrics.environmental.unwrap().kind,
            ImpactKind::Emission
        );
        assert!(result.derived_metrics.comparison.is_none());
    }

    #[test]
    fn test_kitchen_and_occupants_are_additive() {
        let registry = fixtures::registry();
        let input = room(300.0)
            .with_option("sun_exposure", "sunny")
            .with_option("room_type", "kitchen")
            .with_number("occupants", 4.0);
        let result = run_calculation(&registry, &ROOM, &input).unwrap();
        // 6000 x 1.5 + 4000 + 2 x 600
        assert!((result.raw_quantity - 14200.0).abs() < 1e-9);
        assert!(!result.in_range());
    }

    #[test]
    fn test_deterministic() {
        let registry = fixtures::registry();
        let input = room(450.0).with_option("insulation", "poor");
        let a = run_calculation(&registry, &ROOM, &input).unwrap();
        let b = run_calculation(&registry, &ROOM, &input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_zone_aborts() {
        let registry = fixtures::registry();
        let input = CalculationInput::new()
            .with_number("area", 300.0)
            .with_option("climate_zone", "zone-99");
        let err = run_calculation(&registry, &ROOM, &input).unwrap_err();
        assert_eq!(
            err,
            CalculationError::UnknownOption {
                table: "cooling-climate".to_string(),
                key: "zone-99".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_area_rejected() {
        let registry = fixtures::registry();
        let err = run_calculation(&registry, &ROOM, &room(-10.0)).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidNumericInput { .. }));
    }

    #[test]
    fn test_more_area_never_smaller_unit() {
        let registry = fixtures::registry();
        let mut previous = 0.0;
        for step in 0..20 {
            let area = 100.0 + step as f64 * 20.0;
            let result = run_calculation(&registry, &ROOM, &room(area)).unwrap();
            assert!(result.raw_quantity > previous);
            previous = result.raw_quantity;
        }
    }

    #[test]
    fn test_missing_catalog_is_reported() {
        let registry = fixtures::registry();
        let config = CalculatorConfig {
            catalog: Some(CatalogRef {
                name: "mini-split-btu",
                safety_margin_field: None,
            }),
            ..ROOM
        };
        let err = run_calculation(&registry, &config, &room(300.0)).unwrap_err();
        assert_eq!(
            err,
            CalculationError::UnknownCatalog {
                catalog: "mini-split-btu".to_string()
            }
        );
    }
}
