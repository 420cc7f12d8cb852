//! Literal table builders for tests.

use fhecat_core::{CatalogTable, RawAlias, RawTypeEntry, TABLE_VERSION};

use crate::{Diagnostics, Registry};

pub(crate) fn ty(name: &str, id: u32, bit_length: u32, ops: &[&str], clear: &str) -> RawTypeEntry {
    RawTypeEntry {
        name: name.to_owned(),
        id,
        supported_operators: ops.iter().map(|s| s.to_string()).collect(),
        bit_length,
        clear_type: clear.to_owned(),
        aliases: Vec::new(),
    }
}

pub(crate) fn alias(name: &str, ops: &[&str], clear: &str) -> RawAlias {
    RawAlias {
        name: name.to_owned(),
        supported_operators: ops.iter().map(|s| s.to_string()).collect(),
        clear_type: clear.to_owned(),
    }
}

pub(crate) fn with_aliases(mut entry: RawTypeEntry, aliases: Vec<RawAlias>) -> RawTypeEntry {
    entry.aliases = aliases;
    entry
}

pub(crate) fn table(types: Vec<RawTypeEntry>) -> CatalogTable {
    CatalogTable {
        version: TABLE_VERSION,
        types,
    }
}

pub(crate) fn build(types: Vec<RawTypeEntry>) -> Registry {
    match Registry::build(&table(types)) {
        Ok(registry) => registry,
        Err(err) => {
            let details = err
                .diagnostics()
                .map(Diagnostics::render)
                .unwrap_or_default();
            panic!("expected valid table: {err}\n{details}")
        }
    }
}

pub(crate) fn expect_invalid(types: Vec<RawTypeEntry>) -> Diagnostics {
    match Registry::build(&table(types)) {
        Ok(_) => panic!("expected table to fail validation"),
        Err(err) => err
            .diagnostics()
            .cloned()
            .expect("validation diagnostics"),
    }
}

/// The 25-operator set of the builtin `Uint8`..`Uint128` types.
pub(crate) const FULL_OPS: &[&str] = &[
    "add", "sub", "mul", "div", "rem", "and", "or", "xor", "shl", "shr", "rotl", "rotr", "eq",
    "ne", "ge", "gt", "le", "lt", "min", "max", "neg", "not", "select", "rand", "randBounded",
];
