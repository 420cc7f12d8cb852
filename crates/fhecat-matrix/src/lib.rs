#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Operator test matrix for encrypted types.
//!
//! One case per `(entry, operator)` pair, with operand roles bound to
//! concrete type names. Generation runs over any [`MatrixSource`]: the
//! validated registry, or a raw table that has not passed validation.
//!
//! ```
//! let matrix = fhecat_matrix::generate(fhecat_registry::builtin_registry());
//! assert!(matrix.is_complete());
//! assert_eq!(matrix.cases[0].id, "Bool::and");
//! ```

mod case;
mod generate;
mod source;

#[cfg(test)]
mod source_tests;

pub use case::{CaseError, CaseOperand, TestCase};
pub use generate::{Matrix, generate, generate_parallel};
pub use source::{MatrixSource, SourceEntry};
