//! Cross-cutting physical and economic constants
//!
//! Every calculator reads unit conversions, emission factors and fit-band
//! thresholds from here. Bump `CONSTANTS_VERSION` whenever a value changes.

/// Version tag of this constant set
pub const CONSTANTS_VERSION: &str = "2024.1";

// ==========================================
// Unit conversions
// ==========================================

/// Cooling capacity of one ton
pub const BTU_PER_TON: f64 = 12_000.0;

/// 1 therm = 100,000 BTU
pub const BTU_PER_THERM: f64 = 100_000.0;

pub const WH_PER_KWH: f64 = 1_000.0;

/// 1 kWh = 3.6 MJ
pub const JOULES_PER_KWH: f64 = 3_600_000.0;

/// International Table BTU
pub const JOULES_PER_BTU: f64 = 1_055.056;

pub const BTU_PER_KWH: f64 = JOULES_PER_KWH / JOULES_PER_BTU;

/// Energy to raise one gallon of water by 1 °F
pub const BTU_PER_GALLON_DEGREE_F: f64 = 8.34;

// ==========================================
// Environmental factors (US regional averages)
// ==========================================

/// Grid electricity emissions
pub const CO2_KG_PER_KWH: f64 = 0.386;

/// Natural gas combustion emissions
pub const CO2_KG_PER_THERM: f64 = 5.3;

/// Annual CO2 uptake of one mature tree
pub const CO2_KG_PER_TREE_YEAR: f64 = 21.77;

/// Annual emissions of one typical passenger car
pub const CO2_KG_PER_CAR_YEAR: f64 = 4_600.0;

// ==========================================
// Default utility rates
// ==========================================

/// $/kWh
pub const DEFAULT_ELECTRIC_RATE: f64 = 0.16;

/// $/therm
pub const DEFAULT_GAS_RATE: f64 = 1.50;

// ==========================================
// Size selection
// ==========================================

/// Oversize below this fraction is an excellent fit
pub const FIT_EXCELLENT_MAX: f64 = 0.10;

/// Oversize below this fraction is a good fit
pub const FIT_GOOD_MAX: f64 = 0.20;

/// Largest safety margin accepted, in percent
pub const MAX_SAFETY_MARGIN_PCT: f64 = 50.0;

/// Horizons used when a calculator does not declare its own
pub const DEFAULT_HORIZONS: &[u32] = &[5, 10, 20];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_btu_per_kwh() {
        assert!((BTU_PER_KWH - 3412.14).abs() < 0.01);
    }

    #[test]
    fn test_fit_thresholds_ordered() {
        assert!(FIT_EXCELLENT_MAX < FIT_GOOD_MAX);
    }
}
