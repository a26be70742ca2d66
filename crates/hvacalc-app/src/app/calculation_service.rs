//! Calculation Service - entry point for single calculations
//!
//! 1. Resolve the built-in registry (initialized once per process)
//! 2. Fill rate/margin defaults from configuration
//! 3. Run the domain engine
//! 4. Log the outcome
//!
//! The domain engine never logs; everything observable happens here.

use crate::calculators::CalculatorType;
use crate::config::Config;
use crate::constants::builtin_registry;
use hvacalc_domain::{run_calculation, LookupTableRegistry};
use hvacalc_types::{CalculationError, CalculationInput, CalculationResult, Result};
use tracing::{debug, info, warn};

/// Run one calculation against the built-in tables with constant defaults
pub fn calculate(
    calculator: CalculatorType,
    input: &CalculationInput,
) -> std::result::Result<CalculationResult, CalculationError> {
    let registry =
        builtin_registry().map_err(|e| CalculationError::configuration(e.to_string()))?;
    run_calculation(registry, calculator.config(), input)
}

/// [`calculate`] for a calculator named by its key, e.g. `"room-btu"`
pub fn calculate_key(
    key: &str,
    input: &CalculationInput,
) -> std::result::Result<CalculationResult, CalculationError> {
    calculate(key.parse()?, input)
}

/// Calculations with user configuration applied
#[derive(Debug, Clone)]
pub struct CalculationService {
    config: Config,
    registry: &'static LookupTableRegistry,
}

impl CalculationService {
    /// Create a service over the built-in registry
    pub fn new(config: Config) -> Result<Self> {
        let registry = builtin_registry()?;
        debug!(
            version = registry.version(),
            tables = registry.tables().count(),
            catalogs = registry.catalogs().count(),
            "lookup tables loaded"
        );
        Ok(Self::with_registry(config, registry))
    }

    pub fn with_registry(config: Config, registry: &'static LookupTableRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &'static LookupTableRegistry {
        self.registry
    }

    /// Run one calculation. Configuration only fills fields the input left
    /// empty.
    pub fn calculate(
        &self,
        calculator: CalculatorType,
        input: &CalculationInput,
    ) -> std::result::Result<CalculationResult, CalculationError> {
        let mut input = input.clone();
        self.config.apply_defaults(&mut input);

        debug!(
            calculator = %calculator,
            numbers = input.numbers.len(),
            options = input.options.len(),
            "running calculation"
        );

        match run_calculation(self.registry, calculator.config(), &input) {
            Ok(result) => {
                if let Some(size) = &result.size {
                    if !size.in_range {
                        warn!(
                            calculator = %calculator,
                            requirement = result.raw_quantity,
                            largest = size.selected_size,
                            "requirement exceeds the largest standard size"
                        );
                    }
                }
                info!(
                    calculator = %calculator,
                    raw_quantity = result.raw_quantity,
                    selected_size = ?result.selected_size(),
                    "calculation complete"
                );
                Ok(result)
            }
            Err(e) => {
                debug!(calculator = %calculator, error = %e, "calculation rejected");
                Err(e)
            }
        }
    }

    /// Parse a calculator key and run it
    pub fn calculate_key(
        &self,
        key: &str,
        input: &CalculationInput,
    ) -> std::result::Result<CalculationResult, CalculationError> {
        self.calculate(key.parse()?, input)
    }
}
