//! Built-in lookup tables and size catalogs
//!
//! The TOML document is embedded at compile time and parsed once into a
//! process-wide registry. A parse or validation failure is kept and returned
//! to every caller instead of panicking.

use hvacalc_domain::LookupTableRegistry;
use hvacalc_types::RegistryError;
use std::sync::LazyLock;

/// Raw table data
pub const TABLES_TOML: &str = include_str!("../../data/tables.toml");

static REGISTRY: LazyLock<Result<LookupTableRegistry, RegistryError>> =
    LazyLock::new(|| LookupTableRegistry::from_toml_str(TABLES_TOML));

/// The built-in registry, initialized on first use
pub fn builtin_registry() -> Result<&'static LookupTableRegistry, RegistryError> {
    REGISTRY.as_ref().map_err(Clone::clone)
}
