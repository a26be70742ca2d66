//! Standard size catalog type definitions

use serde::{Deserialize, Serialize};

/// Ascending sequence of manufactured sizes for one equipment class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeCatalog {
    pub name: String,
    /// Catalog unit label (ton, gal, A...)
    pub unit: String,
    /// Requirement units delivered by one catalog unit (12000 BTU/h per ton)
    #[serde(default = "default_unit_output")]
    pub unit_output: f64,
    pub sizes: Vec<f64>,
}

fn default_unit_output() -> f64 {
    1.0
}

impl SizeCatalog {
    pub fn new(name: &str, unit: &str, unit_output: f64, sizes: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            unit_output,
            sizes,
        }
    }

    /// Largest catalog entry
    pub fn max_size(&self) -> Option<f64> {
        self.sizes.last().copied()
    }

    /// Output of a catalog entry in requirement units
    pub fn output_of(&self, size: f64) -> f64 {
        size * self.unit_output
    }

    /// Positive and strictly ascending
    pub fn is_ascending(&self) -> bool {
        self.sizes.iter().all(|s| s.is_finite() && *s > 0.0)
            && self.sizes.windows(2).all(|w| w[0] < w[1])
    }
}
