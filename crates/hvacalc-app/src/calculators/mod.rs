//! Built-in calculator types
//!
//! Typed dispatch table from [`CalculatorType`] to its static
//! [`CalculatorConfig`]. Adding a calculator means adding a variant, a
//! configuration bundle and, if needed, tables in `data/tables.toml`.

mod cooling;
mod dehumidifier;
mod electrical;
mod fields;
mod heating;
mod savings;
mod water_heater;

use hvacalc_domain::model::CalculatorConfig;
use hvacalc_types::CalculationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calculator selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorType {
    RoomBtu,
    AcTonnage,
    FurnaceSize,
    HeatPumpSize,
    MiniSplit,
    SeerSavings,
    AfueSavings,
    HspfSavings,
    WaterHeaterSize,
    WaterHeaterCost,
    BatteryBackup,
    CircuitBreaker,
    Dehumidifier,
}

impl CalculatorType {
    pub const ALL: [CalculatorType; 13] = [
        CalculatorType::RoomBtu,
        CalculatorType::AcTonnage,
        CalculatorType::FurnaceSize,
        CalculatorType::HeatPumpSize,
        CalculatorType::MiniSplit,
        CalculatorType::SeerSavings,
        CalculatorType::AfueSavings,
        CalculatorType::HspfSavings,
        CalculatorType::WaterHeaterSize,
        CalculatorType::WaterHeaterCost,
        CalculatorType::BatteryBackup,
        CalculatorType::CircuitBreaker,
        CalculatorType::Dehumidifier,
    ];

    /// Configuration bundle interpreted by the engine
    pub fn config(&self) -> &'static CalculatorConfig {
        match self {
            CalculatorType::RoomBtu => &cooling::ROOM_BTU,
            CalculatorType::AcTonnage => &cooling::AC_TONNAGE,
            CalculatorType::FurnaceSize => &heating::FURNACE_SIZE,
            CalculatorType::HeatPumpSize => &cooling::HEAT_PUMP_SIZE,
            CalculatorType::MiniSplit => &cooling::MINI_SPLIT,
            CalculatorType::SeerSavings => &savings::SEER_SAVINGS,
            CalculatorType::AfueSavings => &savings::AFUE_SAVINGS,
            CalculatorType::HspfSavings => &savings::HSPF_SAVINGS,
            CalculatorType::WaterHeaterSize => &water_heater::WATER_HEATER_SIZE,
            CalculatorType::WaterHeaterCost => &water_heater::WATER_HEATER_COST,
            CalculatorType::BatteryBackup => &electrical::BATTERY_BACKUP,
            CalculatorType::CircuitBreaker => &electrical::CIRCUIT_BREAKER,
            CalculatorType::Dehumidifier => &dehumidifier::DEHUMIDIFIER,
        }
    }

    /// Stable string key (`room-btu`, `seer-savings`, ...)
    pub fn key(&self) -> &'static str {
        self.config().key
    }

    pub fn title(&self) -> &'static str {
        self.config().title
    }
}

impl FromStr for CalculatorType {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| CalculationError::UnknownCalculator {
                calculator: s.to_string(),
            })
    }
}

impl std::fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
