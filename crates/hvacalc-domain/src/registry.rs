//! Lookup Table Registry
//!
//! Owns every named lookup table and size catalog. A registry is built once
//! from static data, validated, and only read afterwards; there are no
//! mutation operations.

use crate::model::{LookupOption, LookupTable, SizeCatalog};
use hvacalc_types::{CalculationError, RegistryError};
use serde::Deserialize;
use std::collections::BTreeMap;

/// On-disk shape of the table data
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    #[serde(default)]
    version: String,
    #[serde(default)]
    tables: Vec<LookupTable>,
    #[serde(default)]
    catalogs: Vec<SizeCatalog>,
}

/// Read-only store of lookup tables and size catalogs
#[derive(Debug, Clone, Default)]
pub struct LookupTableRegistry {
    version: String,
    tables: BTreeMap<String, LookupTable>,
    catalogs: BTreeMap<String, SizeCatalog>,
}

impl LookupTableRegistry {
    /// Parse and validate a TOML table document
    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        let doc: RegistryDocument =
            toml::from_str(content).map_err(|e| RegistryError::Parse(e.to_string()))?;
        Self::from_parts(&doc.version, doc.tables, doc.catalogs)
    }

    /// Build a registry from already-constructed tables and catalogs
    pub fn from_parts(
        version: &str,
        tables: Vec<LookupTable>,
        catalogs: Vec<SizeCatalog>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self {
            version: version.to_string(),
            ..Default::default()
        };

        for table in tables {
            validate_table(&table)?;
            if registry.tables.contains_key(&table.name) {
                return Err(RegistryError::DuplicateTable(table.name));
            }
            registry.tables.insert(table.name.clone(), table);
        }

        for catalog in catalogs {
            if catalog.sizes.is_empty() {
                return Err(RegistryError::EmptyCatalog(catalog.name));
            }
            if !catalog.is_ascending() {
                return Err(RegistryError::UnsortedCatalog(catalog.name));
            }
            if !(catalog.unit_output > 0.0) || !catalog.unit_output.is_finite() {
                return Err(RegistryError::InvalidUnitOutput {
                    unit_output: catalog.unit_output,
                    catalog: catalog.name,
                });
            }
            if registry.catalogs.contains_key(&catalog.name) {
                return Err(RegistryError::DuplicateCatalog(catalog.name));
            }
            registry.catalogs.insert(catalog.name.clone(), catalog);
        }

        Ok(registry)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up one option; fails closed on unknown table or key
    pub fn get(&self, table: &str, key: &str) -> Result<&LookupOption, CalculationError> {
        self.table(table)?
            .get(key)
            .ok_or_else(|| CalculationError::UnknownOption {
                table: table.to_string(),
                key: key.to_string(),
            })
    }

    /// All options of a table in declaration order
    pub fn list(&self, table: &str) -> Result<&[LookupOption], CalculationError> {
        Ok(&self.table(table)?.options)
    }

    pub fn table(&self, name: &str) -> Result<&LookupTable, CalculationError> {
        self.tables
            .get(name)
            .ok_or_else(|| CalculationError::UnknownTable {
                table: name.to_string(),
            })
    }

    pub fn catalog(&self, name: &str) -> Result<&SizeCatalog, CalculationError> {
        self.catalogs
            .get(name)
            .ok_or_else(|| CalculationError::UnknownCatalog {
                catalog: name.to_string(),
            })
    }

    pub fn tables(&self) -> impl Iterator<Item = &LookupTable> {
        self.tables.values()
    }

    pub fn catalogs(&self) -> impl Iterator<Item = &SizeCatalog> {
        self.catalogs.values()
    }
}

fn validate_table(table: &LookupTable) -> Result<(), RegistryError> {
    if table.options.is_empty() {
        return Err(RegistryError::EmptyTable(table.name.clone()));
    }
    for (i, option) in table.options.iter().enumerate() {
        if !option.weight.is_finite() {
            return Err(RegistryError::NonFiniteWeight {
                table: table.name.clone(),
                key: option.key.clone(),
            });
        }
        if table.options[..i].iter().any(|o| o.key == option.key) {
            return Err(RegistryError::DuplicateOption {
                table: table.name.clone(),
                key: option.key.clone(),
            });
        }
    }
    Ok(())
}
