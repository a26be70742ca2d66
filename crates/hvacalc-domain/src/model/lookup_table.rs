//! Lookup table type definitions

use super::LookupOption;
use serde::{Deserialize, Serialize};

/// Named, ordered mapping from option key to option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTable {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<LookupOption>,
}

impl LookupTable {
    /// Find an option by key
    pub fn get(&self, key: &str) -> Option<&LookupOption> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Option keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }
}
