//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Operator, OperatorCatalog};

impl OperatorCatalog {
    pub(crate) fn ensure_operator(token: &str) -> Operator {
        Operator::from_token(token).unwrap_or_else(|| {
            panic!(
                "OperatorCatalog: `{token}` is not an operator \
                 (callers must check `is_valid` before asking for its shape)"
            )
        })
    }
}
