//! Inputs the matrix can be generated from.

use fhecat_core::{CatalogTable, TypeFamily};
use fhecat_registry::Registry;
use indexmap::IndexSet;

/// A named entry with the operator tokens it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry<'s> {
    pub name: &'s str,
    pub operators: Vec<&'s str>,
}

/// Something that lists entries in declaration order.
///
/// Tokens are handed out as written, each at most once per entry; the
/// generator checks them against the operator vocabulary.
pub trait MatrixSource: Sync {
    /// Every base type followed by its aliases, in declaration order.
    fn matrix_entries(&self) -> Vec<SourceEntry<'_>>;

    /// Name bound to `Bool`-typed roles and comparison results.
    fn bool_type_name(&self) -> Option<&str>;
}

impl MatrixSource for Registry {
    fn matrix_entries(&self) -> Vec<SourceEntry<'_>> {
        self.resolved()
            .map(|resolved| SourceEntry {
                name: resolved.name,
                operators: resolved
                    .supported_operators
                    .iter()
                    .map(|op| op.as_str())
                    .collect(),
            })
            .collect()
    }

    fn bool_type_name(&self) -> Option<&str> {
        self.bool_type().map(|t| t.name())
    }
}

impl MatrixSource for CatalogTable {
    fn matrix_entries(&self) -> Vec<SourceEntry<'_>> {
        let mut entries = Vec::with_capacity(self.entry_count());
        for raw in &self.types {
            entries.push(SourceEntry {
                name: &raw.name,
                operators: first_occurrences(&raw.supported_operators),
            });
            for alias in &raw.aliases {
                entries.push(SourceEntry {
                    name: &alias.name,
                    operators: first_occurrences(&alias.supported_operators),
                });
            }
        }
        entries
    }

    fn bool_type_name(&self) -> Option<&str> {
        self.types
            .iter()
            .find(|raw| TypeFamily::from_type_name(&raw.name) == Some(TypeFamily::Bool))
            .map(|raw| raw.name.as_str())
    }
}

/// Drop repeated tokens, keeping the first, as registry validation does.
fn first_occurrences(tokens: &[String]) -> Vec<&str> {
    let unique: IndexSet<&str> = tokens.iter().map(String::as_str).collect();
    unique.into_iter().collect()
}
