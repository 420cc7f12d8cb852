#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type capability registry for encrypted types.
//!
//! - `validate` - single-pass invariant checks over a literal table
//! - `registry` - the immutable, queryable result
//! - `resolve` - alias resolution for emitters and harnesses
//! - `diagnostics` - errors and data irregularities found while building
//!
//! ```
//! let registry = fhecat_registry::builtin_registry();
//! let bytes1 = registry.resolve("Bytes1").unwrap();
//! assert_eq!(bytes1.bit_length, 8);
//! assert_eq!(bytes1.canonical_base_name, "Uint8");
//! ```

mod builtin;
mod descriptor;
pub mod diagnostics;
mod invariants;
mod registry;
mod resolve;
mod validate;

#[cfg(test)]
mod resolve_tests;
#[cfg(test)]
mod test_utils;

use fhecat_core::TableError;

pub use builtin::builtin_registry;
pub use descriptor::{AliasDescriptor, TypeDescriptor, WIDE_BIT_LENGTH};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Location, Severity};
pub use registry::{Entry, Registry};
pub use resolve::{LookupError, ResolvedType, resolve};

/// Errors that prevent a registry from being built.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("type table failed validation (errors: {})", .0.error_count())]
    Invalid(Diagnostics),
}

impl BuildError {
    /// Diagnostics collected before validation stopped, if it ran at all.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::Table(_) => None,
            Self::Invalid(diagnostics) => Some(diagnostics),
        }
    }
}
