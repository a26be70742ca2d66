//! Lookup option type definitions

use hvacalc_types::EnergyCarrier;
use serde::{Deserialize, Serialize};

/// One selectable entry of a lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupOption {
    /// Stable key used by input forms
    pub key: String,
    /// Display name
    pub display_name: String,
    /// Multiplicative factor, additive per-unit constant or absolute rate,
    /// depending on the table
    pub weight: f64,
    /// Free-form description of the weight
    #[serde(default)]
    pub metadata: String,
    /// Energy carrier when the option selects a fuel
    #[serde(default)]
    pub carrier: Option<EnergyCarrier>,
}
