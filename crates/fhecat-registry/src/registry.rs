//! The immutable type registry.

use fhecat_core::{CatalogTable, Handle, TypeFamily, TypeId};
use indexmap::IndexMap;

use crate::BuildError;
use crate::descriptor::{AliasDescriptor, TypeDescriptor};
use crate::diagnostics::Diagnostics;
use crate::resolve::{self, LookupError, ResolvedType};
use crate::validate::Validator;

/// Index of a named entry: a base type, or one of its aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryRef {
    pub(crate) base: usize,
    pub(crate) alias: Option<usize>,
}

/// A named entry borrowed from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'r> {
    Base(&'r TypeDescriptor),
    Alias {
        base: &'r TypeDescriptor,
        alias: &'r AliasDescriptor,
    },
}

impl<'r> Entry<'r> {
    pub fn name(self) -> &'r str {
        match self {
            Self::Base(base) => base.name(),
            Self::Alias { alias, .. } => alias.name(),
        }
    }

    /// Descriptor owning the ciphertext representation.
    pub fn base(self) -> &'r TypeDescriptor {
        match self {
            Self::Base(base) | Self::Alias { base, .. } => base,
        }
    }

    pub fn is_alias(self) -> bool {
        matches!(self, Self::Alias { .. })
    }
}

/// Validated catalog of encrypted types.
///
/// Built once from a literal table and never mutated. Iteration follows
/// declaration order everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    pub(crate) types: Vec<TypeDescriptor>,
    pub(crate) by_id: IndexMap<TypeId, usize>,
    pub(crate) by_name: IndexMap<String, EntryRef>,
    pub(crate) warnings: Diagnostics,
}

impl Registry {
    /// Validate `table` and build a registry from it.
    pub fn build(table: &CatalogTable) -> Result<Self, BuildError> {
        Validator::new(table).run()
    }

    /// Parse, validate and build from the embedded builtin table.
    pub fn builtin() -> Result<Self, BuildError> {
        Self::build(&CatalogTable::builtin()?)
    }

    /// Base types in declaration order.
    pub fn all(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Every named entry: each base type followed by its aliases.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.types.iter().flat_map(|base| {
            let aliases = base
                .aliases
                .iter()
                .map(move |alias| Entry::Alias { base, alias });
            std::iter::once(Entry::Base(base)).chain(aliases)
        })
    }

    /// Number of base types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Number of named entries (base types plus aliases).
    pub fn entry_count(&self) -> usize {
        self.by_name.len()
    }

    pub fn by_id(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.by_id.get(&id).map(|&i| &self.types[i])
    }

    /// Exact, case-sensitive lookup of a base or alias name.
    pub fn by_name(&self, name: &str) -> Option<Entry<'_>> {
        self.by_name.get(name).map(|&entry| self.entry(entry))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Type the boolean roles of `select` and comparison results bind to.
    pub fn bool_type(&self) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.family == TypeFamily::Bool)
    }

    /// Data irregularities found while building.
    pub fn warnings(&self) -> &Diagnostics {
        &self.warnings
    }

    pub fn resolve(&self, name: &str) -> Result<ResolvedType<'_>, LookupError> {
        resolve::resolve(self, name)
    }

    /// Every entry resolved, in declaration order.
    pub fn resolved(&self) -> impl Iterator<Item = ResolvedType<'_>> {
        self.entries().map(ResolvedType::from_entry)
    }

    /// Descriptor whose id is stored in the handle's type byte.
    pub fn type_of_handle(&self, handle: &Handle) -> Result<&TypeDescriptor, LookupError> {
        let id = handle.type_id();
        self.by_id(id).ok_or(LookupError::UnknownId(id))
    }

    pub(crate) fn entry(&self, entry: EntryRef) -> Entry<'_> {
        let base = &self.types[entry.base];
        match entry.alias {
            None => Entry::Base(base),
            Some(i) => Entry::Alias {
                base,
                alias: &base.aliases[i],
            },
        }
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}
