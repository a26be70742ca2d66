//! Numeric fields and bindings shared by several calculators

use hvacalc_domain::constants::{DEFAULT_ELECTRIC_RATE, DEFAULT_GAS_RATE, MAX_SAFETY_MARGIN_PCT};
use hvacalc_domain::model::{NumericField, TableBinding};

pub const ELECTRIC_RATE: NumericField =
    NumericField::optional("electric_rate", "$/kWh", 0.0, 2.0, DEFAULT_ELECTRIC_RATE);

pub const GAS_RATE: NumericField =
    NumericField::optional("gas_rate", "$/therm", 0.0, 20.0, DEFAULT_GAS_RATE);

pub const SAFETY_MARGIN: NumericField = NumericField::optional(
    "safety_margin_pct",
    "%",
    0.0,
    MAX_SAFETY_MARGIN_PCT,
    0.0,
);

pub const OCCUPANTS: NumericField = NumericField::optional("occupants", "people", 1.0, 50.0, 2.0);

pub const COOLING_HOURS: NumericField =
    NumericField::optional("cooling_hours", "h/yr", 0.0, 8760.0, 1500.0);

pub const HEATING_HOURS: NumericField =
    NumericField::optional("heating_hours", "h/yr", 0.0, 8760.0, 1000.0);

/// Price delta of an upgrade; payback is reported only when supplied
pub const UPGRADE_COST: NumericField =
    NumericField::optional("upgrade_cost", "$", 0.0, 1_000_000.0, 0.0);

pub const INSULATION: TableBinding =
    TableBinding::multiply("insulation", "insulation").with_default("average");

pub const SUN_EXPOSURE: TableBinding =
    TableBinding::multiply("sun_exposure", "sun-exposure").with_default("average");

pub const CEILING_HEIGHT: TableBinding =
    TableBinding::multiply("ceiling_height", "ceiling-height").with_default("8ft");

pub const ROOM_TYPE: TableBinding =
    TableBinding::add("room_type", "room-type").with_default("bedroom");

/// +weight per occupant beyond two
pub const OCCUPANT_LOAD: TableBinding = TableBinding::add("activity", "occupant-activity")
    .per_unit_over("occupants", 2.0)
    .with_default("typical");
