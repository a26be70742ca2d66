//! Derived Metrics Calculator
//!
//! Operating cost, baseline comparison, payback, linear multi-year savings
//! and simplified CO2 figures. Projections are linear: no rate inflation
//! and no discounting.

use super::factor_resolver::selected_option;
use super::validation::ResolvedNumbers;
use crate::constants::{
    BTU_PER_KWH, BTU_PER_THERM, CO2_KG_PER_CAR_YEAR, CO2_KG_PER_KWH, CO2_KG_PER_THERM,
    CO2_KG_PER_TREE_YEAR, DEFAULT_HORIZONS, WH_PER_KWH,
};
use crate::model::{
    CalculatorConfig, CapacityBasis, CapacityUnit, CarrierSource, EfficiencyScale,
    EfficiencySource, EnergyLoad,
};
use crate::registry::LookupTableRegistry;
use hvacalc_types::{
    CalculationError, CalculationInput, Comparison, DerivedMetrics, EnergyCarrier, EnergyUse,
    EnvironmentalImpact, HorizonSavings, ImpactKind, Payback, SizeSelection,
};

/// Inputs shared by every energy load of one calculation
pub struct MetricsContext<'a> {
    pub config: &'a CalculatorConfig,
    pub registry: &'a LookupTableRegistry,
    pub input: &'a CalculationInput,
    pub numbers: &'a ResolvedNumbers,
    pub adjusted: f64,
    pub size: Option<&'a SizeSelection>,
}

/// Compute all derived metrics declared by a calculator
pub fn compute_metrics(ctx: &MetricsContext<'_>) -> Result<DerivedMetrics, CalculationError> {
    if ctx.config.energy.is_empty() {
        return Ok(DerivedMetrics::default());
    }

    let mut energy = Vec::with_capacity(ctx.config.energy.len());
    let mut baseline_energy = Vec::new();

    for load in ctx.config.energy {
        let capacity = capacity_of(load, ctx)?;
        let hours = ctx.numbers.get(load.hours_field)?;
        let efficiency = resolve_efficiency(&load.efficiency, ctx)?;
        let carrier = resolve_carrier(&load.carrier, ctx)?;
        let current = energy_use(load.label, capacity, load, hours, efficiency, carrier, ctx)?;

        if let Some(baseline) = &load.baseline {
            let baseline_efficiency = resolve_efficiency(&baseline.efficiency, ctx)?;
            let baseline_carrier = resolve_carrier(&baseline.carrier, ctx)?;
            let previous = energy_use(
                load.label,
                capacity,
                load,
                hours,
                baseline_efficiency,
                baseline_carrier,
                ctx,
            )?;
            // ratings of different fuels are not comparable; judge a fuel switch on cost
            if baseline_carrier == carrier {
                check_comparison(baseline_efficiency, efficiency)?;
            } else {
                check_fuel_switch(previous.annual_cost, current.annual_cost)?;
            }
            baseline_energy.push(previous);
        } else if ctx.config.is_comparison() {
            // loads without a baseline cost the same on both sides
            baseline_energy.push(current.clone());
        }

        energy.push(current);
    }

    let annual_cost: f64 = energy.iter().map(|e| e.annual_cost).sum();

    let (comparison, environmental) = if ctx.config.is_comparison() {
        let baseline_annual_cost: f64 = baseline_energy.iter().map(|e| e.annual_cost).sum();
        let annual_savings = baseline_annual_cost - annual_cost;
        if annual_savings < 0.0 {
            return Err(CalculationError::DegenerateComparison {
                baseline: baseline_annual_cost,
                proposed: annual_cost,
            });
        }
        // payback only when the caller priced the upgrade
        let priced = ctx
            .config
            .payback_field
            .filter(|field| ctx.input.number(field).is_some());
        let payback = match priced {
            Some(field) => match payback_period(ctx.numbers.get(field)?, annual_savings) {
                Ok(years) => Payback::Years { years },
                Err(CalculationError::UndefinedPayback { .. }) => Payback::NoPayback,
                Err(e) => return Err(e),
            },
            None => Payback::NotRequested,
        };
        let horizons = if ctx.config.horizons.is_empty() {
            DEFAULT_HORIZONS
        } else {
            ctx.config.horizons
        };
        let delta = total_co2(&baseline_energy) - total_co2(&energy);
        let impact = if delta >= 0.0 {
            environmental_impact(ImpactKind::Reduction, delta)
        } else {
            environmental_impact(ImpactKind::Increase, -delta)
        };
        (
            Some(Comparison {
                baseline_energy,
                baseline_annual_cost,
                annual_savings,
                payback,
                cumulative_savings: cumulative_savings(annual_savings, horizons),
            }),
            impact,
        )
    } else {
        (
            None,
            environmental_impact(ImpactKind::Emission, total_co2(&energy)),
        )
    };

    Ok(DerivedMetrics {
        energy,
        annual_operating_cost: Some(annual_cost),
        comparison,
        environmental: Some(environmental),
    })
}

fn energy_use(
    label: &str,
    capacity: f64,
    load: &EnergyLoad,
    hours: f64,
    efficiency: f64,
    carrier: EnergyCarrier,
    ctx: &MetricsContext<'_>,
) -> Result<EnergyUse, CalculationError> {
    let annual_amount = annual_energy(capacity, load.unit, hours, efficiency, load.scale, carrier)?;
    let annual_cost = operating_cost(annual_amount, ctx.numbers.get(carrier.rate_field())?);
    if !(annual_cost >= 0.0) || !annual_cost.is_finite() {
        return Err(CalculationError::non_physical("annual operating cost", annual_cost));
    }
    Ok(EnergyUse {
        label: label.to_string(),
        carrier,
        efficiency,
        annual_amount,
        annual_cost,
    })
}

fn capacity_of(load: &EnergyLoad, ctx: &MetricsContext<'_>) -> Result<f64, CalculationError> {
    match load.basis {
        CapacityBasis::SelectedOutput => ctx.size.map(|s| s.selected_output).ok_or_else(|| {
            CalculationError::configuration(format!(
                "energy load '{}' runs at the selected size but '{}' has no catalog",
                load.label, ctx.config.key
            ))
        }),
        CapacityBasis::AdjustedQuantity => Ok(ctx.adjusted),
        CapacityBasis::FieldProduct { left, right } => {
            Ok(ctx.numbers.get(left)? * ctx.numbers.get(right)?)
        }
    }
}

fn resolve_efficiency(
    source: &EfficiencySource,
    ctx: &MetricsContext<'_>,
) -> Result<f64, CalculationError> {
    let value = match *source {
        EfficiencySource::Field(name) => ctx.numbers.get(name)?,
        EfficiencySource::Option { field, table } => {
            selected_option(ctx.input, field, table, None, ctx.registry)?.weight
        }
        EfficiencySource::Fixed(value) => value,
    };
    if !(value > 0.0) || !value.is_finite() {
        return Err(CalculationError::non_physical("efficiency rating", value));
    }
    Ok(value)
}

fn resolve_carrier(
    source: &CarrierSource,
    ctx: &MetricsContext<'_>,
) -> Result<EnergyCarrier, CalculationError> {
    match *source {
        CarrierSource::Fixed(carrier) => Ok(carrier),
        CarrierSource::Option { field, table } => {
            let option = selected_option(ctx.input, field, table, None, ctx.registry)?;
            option.carrier.ok_or_else(|| {
                CalculationError::configuration(format!(
                    "option '{}' in table '{}' declares no energy carrier",
                    option.key, table
                ))
            })
        }
    }
}

// ==========================================
// Building blocks
// ==========================================

/// Efficiency as a plain ratio (AFUE 95 -> 0.95); other scales unchanged
pub fn efficiency_ratio(value: f64, scale: EfficiencyScale) -> f64 {
    match scale {
        EfficiencyScale::Percent => value / 100.0,
        EfficiencyScale::BtuPerWattHour | EfficiencyScale::Fraction => value,
    }
}

/// Annual energy in the carrier's billing unit (kWh or therms)
pub fn annual_energy(
    capacity: f64,
    unit: CapacityUnit,
    hours: f64,
    efficiency: f64,
    scale: EfficiencyScale,
    carrier: EnergyCarrier,
) -> Result<f64, CalculationError> {
    let amount = match (unit, scale, carrier) {
        // SEER/EER/HSPF are BTU per watt-hour
        (CapacityUnit::Btu, EfficiencyScale::BtuPerWattHour, EnergyCarrier::Electricity) => {
            capacity * hours / efficiency / WH_PER_KWH
        }
        (CapacityUnit::Btu, EfficiencyScale::Fraction | EfficiencyScale::Percent, carrier) => {
            let btu = capacity * hours / efficiency_ratio(efficiency, scale);
            match carrier {
                EnergyCarrier::Electricity => btu / BTU_PER_KWH,
                EnergyCarrier::NaturalGas => btu / BTU_PER_THERM,
            }
        }
        (CapacityUnit::Watts, EfficiencyScale::Fraction | EfficiencyScale::Percent, EnergyCarrier::Electricity) => {
            capacity * hours / efficiency_ratio(efficiency, scale) / WH_PER_KWH
        }
        (unit, scale, carrier) => {
            return Err(CalculationError::configuration(format!(
                "cannot convert {:?} capacity rated in {:?} to {:?}",
                unit, scale, carrier
            )))
        }
    };
    if !(amount >= 0.0) || !amount.is_finite() {
        return Err(CalculationError::non_physical("annual energy", amount));
    }
    Ok(amount)
}

/// Amount in billing units times the unit rate
pub fn operating_cost(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// `price_delta / annual_savings`; undefined when savings are not positive
pub fn payback_period(price_delta: f64, annual_savings: f64) -> Result<f64, CalculationError> {
    if !(annual_savings > 0.0) || !annual_savings.is_finite() {
        return Err(CalculationError::UndefinedPayback { annual_savings });
    }
    if !(price_delta >= 0.0) {
        return Err(CalculationError::non_physical("price delta", price_delta));
    }
    Ok(price_delta / annual_savings)
}

/// `annual_savings * years` for each horizon
pub fn cumulative_savings(annual_savings: f64, horizons: &[u32]) -> Vec<HorizonSavings> {
    horizons
        .iter()
        .map(|&years| HorizonSavings {
            years,
            savings: annual_savings * f64::from(years),
        })
        .collect()
}

/// The new efficiency must strictly exceed the baseline
pub fn check_comparison(baseline: f64, proposed: f64) -> Result<(), CalculationError> {
    if proposed <= baseline {
        return Err(CalculationError::DegenerateComparison { baseline, proposed });
    }
    Ok(())
}

/// A fuel switch must lower the annual operating cost
pub fn check_fuel_switch(baseline_cost: f64, proposed_cost: f64) -> Result<(), CalculationError> {
    if proposed_cost >= baseline_cost {
        return Err(CalculationError::DegenerateComparison {
            baseline: baseline_cost,
            proposed: proposed_cost,
        });
    }
    Ok(())
}

/// CO2 mass for an annual amount of one carrier
pub fn co2_kg(carrier: EnergyCarrier, amount: f64) -> f64 {
    match carrier {
        EnergyCarrier::Electricity => amount * CO2_KG_PER_KWH,
        EnergyCarrier::NaturalGas => amount * CO2_KG_PER_THERM,
    }
}

fn total_co2(uses: &[EnergyUse]) -> f64 {
    uses.iter().map(|u| co2_kg(u.carrier, u.annual_amount)).sum()
}

/// CO2 plus tree and car equivalents
pub fn environmental_impact(kind: ImpactKind, co2_kg: f64) -> EnvironmentalImpact {
    EnvironmentalImpact {
        kind,
        co2_kg,
        equivalent_trees: co2_kg / CO2_KG_PER_TREE_YEAR,
        equivalent_cars: co2_kg / CO2_KG_PER_CAR_YEAR,
    }
}
