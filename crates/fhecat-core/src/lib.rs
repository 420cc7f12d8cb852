#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary for the encrypted type catalog.
//!
//! Two layers:
//! - **Vocabulary**: the closed operator set ([`Operator`]), type families,
//!   clear types and wire-level ids
//! - **Literal table**: 1:1 mapping of the versioned JSON table
//!   ([`CatalogTable`]), including the embedded builtin table
//!
//! Validation against the catalog invariants lives in `fhecat-registry`.

mod clear_type;
mod colors;
mod family;
mod handle;
mod invariants;
mod operator;
mod table;
mod type_id;

#[cfg(test)]
mod operator_tests;
#[cfg(test)]
mod table_tests;

pub use clear_type::ClearType;
pub use colors::Colors;
pub use family::TypeFamily;
pub use handle::{HANDLE_LEN, HANDLE_VERSION, Handle, HandleError};
pub use operator::{
    OperandRole, Operator, OperatorCatalog, OperatorClass, RoleType, UnknownOperator,
};
pub use table::{
    BUILTIN_TABLE_JSON, CatalogTable, RawAlias, RawTypeEntry, TABLE_VERSION, TableError,
};
pub use type_id::TypeId;
