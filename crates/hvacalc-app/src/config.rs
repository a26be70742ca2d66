//! Configuration management for hvacalc
//!
//! Config stored at: ~/.config/hvacalc/config.json

use hvacalc_domain::constants::{DEFAULT_ELECTRIC_RATE, DEFAULT_GAS_RATE, MAX_SAFETY_MARGIN_PCT};
use hvacalc_types::{CalculationInput, ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Keys accepted by [`Config::set`]
pub const CONFIG_KEYS: &[&str] = &[
    "output_format",
    "electric_rate",
    "gas_rate",
    "safety_margin_pct",
    "log_level",
];

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Electricity price used when an input omits `electric_rate` ($/kWh)
    #[serde(default = "default_electric_rate")]
    pub electric_rate: f64,

    /// Gas price used when an input omits `gas_rate` ($/therm)
    #[serde(default = "default_gas_rate")]
    pub gas_rate: f64,

    /// Safety margin used when an input omits `safety_margin_pct`
    #[serde(default)]
    pub safety_margin_pct: f64,

    /// Log filter used when HVACALC_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_electric_rate() -> f64 {
    DEFAULT_ELECTRIC_RATE
}

fn default_gas_rate() -> f64 {
    DEFAULT_GAS_RATE
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            electric_rate: default_electric_rate(),
            gas_rate: default_gas_rate(),
            safety_margin_pct: 0.0,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("hvacalc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Set one value by key, parsing it from a string
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "output_format" => {
                next.output_format = match value {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    _ => return Err(invalid(key, "expected 'table' or 'json'")),
                };
            }
            "electric_rate" => next.electric_rate = parse_number(key, value)?,
            "gas_rate" => next.gas_rate = parse_number(key, value)?,
            "safety_margin_pct" => next.safety_margin_pct = parse_number(key, value)?,
            "log_level" => next.log_level = value.to_lowercase(),
            _ => {
                return Err(invalid(
                    key,
                    &format!("unknown key, expected one of: {}", CONFIG_KEYS.join(", ")),
                ))
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.electric_rate >= 0.0) || !self.electric_rate.is_finite() {
            return Err(invalid("electric_rate", "must be a non-negative number"));
        }
        if !(self.gas_rate >= 0.0) || !self.gas_rate.is_finite() {
            return Err(invalid("gas_rate", "must be a non-negative number"));
        }
        if !(0.0..=MAX_SAFETY_MARGIN_PCT).contains(&self.safety_margin_pct) {
            return Err(invalid(
                "safety_margin_pct",
                &format!("must be between 0 and {}", MAX_SAFETY_MARGIN_PCT),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(invalid(
                "log_level",
                &format!("expected one of: {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Fill rate and margin fields the caller left empty. Explicit input
    /// always wins.
    pub fn apply_defaults(&self, input: &mut CalculationInput) {
        input.set_number_if_absent("electric_rate", self.electric_rate);
        input.set_number_if_absent("gas_rate", self.gas_rate);
        input.set_number_if_absent("safety_margin_pct", self.safety_margin_pct);
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| invalid(key, &format!("'{}' is not a number", value)))
}

fn invalid(field: &str, reason: &str) -> hvacalc_types::Error {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "HVAC Calculator Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Electric rate:  ${:.3}/kWh", self.electric_rate)?;
        writeln!(f, "Gas rate:       ${:.2}/therm", self.gas_rate)?;
        writeln!(f, "Safety margin:  {}%", self.safety_margin_pct)?;
        writeln!(f, "Log level:      {}", self.log_level)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvacalc_types::Error;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!((config.electric_rate - 0.16).abs() < f64::EPSILON);
        assert!((config.gas_rate - 1.50).abs() < f64::EPSILON);
        assert_eq!(config.safety_margin_pct, 0.0);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_partial_json_uses_field_defaults() {
        let config: Config = serde_json::from_str(r#"{"electric_rate": 0.22}"#).unwrap();
        assert!((config.electric_rate - 0.22).abs() < f64::EPSILON);
        assert!((config.gas_rate - DEFAULT_GAS_RATE).abs() < f64::EPSILON);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set("output_format", "json").unwrap();
        config.set("gas_rate", "2.10").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("electric_rate", "cheap").is_err());
        assert!(config.set("log_level", "loud").is_err());
        assert!(config.set("backend", "gemini").is_err());
    }

    #[test]
    fn test_set_rejects_out_of_range_margin() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("safety_margin_pct", "75"),
            Err(Error::Config(ConfigError::InvalidValue { .. }))
        ));
        // rejected values leave the config untouched
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_defaults_never_overrides_input() {
        let config = Config {
            electric_rate: 0.30,
            ..Config::default()
        };
        let mut explicit = CalculationInput::new().with_number("electric_rate", 0.12);
        config.apply_defaults(&mut explicit);
        assert_eq!(explicit.number("electric_rate"), Some(0.12));

        let mut empty = CalculationInput::new();
        config.apply_defaults(&mut empty);
        assert_eq!(empty.number("electric_rate"), Some(0.30));
        assert_eq!(empty.number("gas_rate"), Some(DEFAULT_GAS_RATE));
    }
}
