//! Alias resolution.
//!
//! Bit length always comes from the owning base type. Operators and clear
//! type come only from the entry's own declaration: an alias never inherits
//! or merges its base's operator set.

use fhecat_core::{ClearType, Operator, TypeFamily, TypeId};
use indexmap::IndexSet;
use serde::Serialize;

use crate::descriptor::{WIDE_BIT_LENGTH, clear_byte_len};
use crate::registry::{Entry, Registry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("unknown type `{name}`")]
    UnknownName {
        name: String,
        suggestion: Option<String>,
    },

    #[error("no type with id {0}")]
    UnknownId(TypeId),
}

/// A base type or alias with everything a consumer needs to bind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedType<'r> {
    pub name: &'r str,
    pub id: TypeId,
    pub family: TypeFamily,
    pub bit_length: u32,
    pub supported_operators: &'r IndexSet<Operator>,
    pub clear_type: &'r ClearType,
    pub canonical_base_name: &'r str,
    pub is_alias: bool,
}

impl<'r> ResolvedType<'r> {
    pub fn from_entry(entry: Entry<'r>) -> Self {
        let base = entry.base();
        let (operators, clear_type) = match entry {
            Entry::Base(base) => (base.operators(), base.clear_type()),
            Entry::Alias { alias, .. } => (alias.operators(), alias.clear_type()),
        };
        Self {
            name: entry.name(),
            id: base.id(),
            family: base.family(),
            bit_length: base.bit_length(),
            supported_operators: operators,
            clear_type,
            canonical_base_name: base.name(),
            is_alias: entry.is_alias(),
        }
    }

    pub fn supports(&self, op: Operator) -> bool {
        self.supported_operators.contains(&op)
    }

    /// Has at least one operator, so a binding module is emitted for it.
    pub fn is_implemented(&self) -> bool {
        !self.supported_operators.is_empty()
    }

    /// Clear value decodes to a byte string rather than a machine integer.
    pub fn is_wide(&self) -> bool {
        self.bit_length > WIDE_BIT_LENGTH
    }

    pub fn clear_byte_len(&self) -> Option<u32> {
        clear_byte_len(self.bit_length)
    }
}

/// Resolve a base or alias name. Matching is exact; there is no fallback.
pub fn resolve<'r>(registry: &'r Registry, name: &str) -> Result<ResolvedType<'r>, LookupError> {
    match registry.by_name(name) {
        Some(entry) => Ok(ResolvedType::from_entry(entry)),
        None => Err(LookupError::UnknownName {
            name: name.to_owned(),
            suggestion: suggest(registry, name),
        }),
    }
}

/// Suggest a name differing only in case, or in a leading `e` as in the
/// encrypted handle spellings (`euint8`, `ebool`).
pub(crate) fn suggest(registry: &Registry, name: &str) -> Option<String> {
    let stripped = match name.as_bytes().first() {
        Some(b'e' | b'E') => Some(&name[1..]),
        _ => None,
    };
    registry
        .names()
        .find(|candidate| {
            candidate.eq_ignore_ascii_case(name)
                || stripped.is_some_and(|s| candidate.eq_ignore_ascii_case(s))
        })
        .map(str::to_owned)
}
