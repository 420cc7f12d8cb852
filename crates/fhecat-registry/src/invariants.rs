//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{BuildError, Diagnostics, Registry};

impl Registry {
    pub(crate) fn ensure_builtin(result: Result<Registry, BuildError>) -> Registry {
        result.unwrap_or_else(|err| {
            let details = err
                .diagnostics()
                .map(Diagnostics::render)
                .unwrap_or_default();
            panic!("builtin type table must validate: {err}\n{details}")
        })
    }
}
