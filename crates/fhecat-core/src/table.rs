//! Literal type table.
//!
//! 1:1 mapping of the versioned JSON table the registry is built from. Nothing
//! here is validated beyond JSON shape and format version; see the registry
//! crate for the invariants.

use serde::{Deserialize, Serialize};

/// Format version this crate reads and writes.
pub const TABLE_VERSION: u32 = 1;

/// The builtin table, embedded at compile time.
pub const BUILTIN_TABLE_JSON: &str = include_str!("../data/fhe_types.json");

/// Errors loading a literal table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("malformed type table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported type table version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// A whole literal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTable {
    pub version: u32,
    pub types: Vec<RawTypeEntry>,
}

/// One base type as written in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTypeEntry {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(rename = "value")]
    pub id: u32,
    #[serde(default)]
    pub supported_operators: Vec<String>,
    pub bit_length: u32,
    #[serde(rename = "clearMatchingType")]
    pub clear_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<RawAlias>,
}

/// One alias as written in the table. Carries no bit length of its own.
///
/// `clearMatchingType` is required on both levels: `""` is the explicit
/// no-mapping marker, an omitted field is a malformed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlias {
    #[serde(rename = "type")]
    pub name: String,
    #[serde(default)]
    pub supported_operators: Vec<String>,
    #[serde(rename = "clearMatchingType")]
    pub clear_type: String,
}

impl CatalogTable {
    /// Parse a table and check its format version.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(json)?;
        if table.version != TABLE_VERSION {
            return Err(TableError::UnsupportedVersion {
                found: table.version,
                expected: TABLE_VERSION,
            });
        }
        Ok(table)
    }

    /// Parse the embedded builtin table.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_json(BUILTIN_TABLE_JSON)
    }

    pub fn to_json_pretty(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of named entries (base types plus aliases).
    pub fn entry_count(&self) -> usize {
        self.types.iter().map(|t| 1 + t.aliases.len()).sum()
    }
}
