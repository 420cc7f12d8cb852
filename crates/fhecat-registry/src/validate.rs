//! Registry construction and invariant checks.
//!
//! Single pass over the table in declaration order. Structural violations
//! (identity, naming, width) halt the pass: the id and name maps built so far
//! would make later checks ambiguous. Unknown operators do not depend on
//! those maps and keep accumulating until the pass ends or halts.

use std::collections::HashMap;

use fhecat_core::{CatalogTable, ClearType, Operator, RawAlias, RawTypeEntry, TypeFamily, TypeId};
use indexmap::{IndexMap, IndexSet};

use crate::BuildError;
use crate::descriptor::{AliasDescriptor, TypeDescriptor};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Location};
use crate::registry::{EntryRef, Registry};

/// Largest `N` for which a `BytesN` view has a fixed-size clear type.
const MAX_FIXED_BYTES: u32 = 32;

/// Validation stopped at a structural error.
struct Halt;

type Step<T = ()> = Result<T, Halt>;

pub(crate) struct Validator<'t> {
    table: &'t CatalogTable,
    diagnostics: Diagnostics,
    types: Vec<TypeDescriptor>,
    by_id: IndexMap<TypeId, usize>,
    by_name: IndexMap<String, EntryRef>,
    widths: HashMap<(TypeFamily, u32), usize>,
}

impl<'t> Validator<'t> {
    pub(crate) fn new(table: &'t CatalogTable) -> Self {
        Self {
            table,
            diagnostics: Diagnostics::new(),
            types: Vec::with_capacity(table.types.len()),
            by_id: IndexMap::with_capacity(table.types.len()),
            by_name: IndexMap::with_capacity(table.entry_count()),
            widths: HashMap::new(),
        }
    }

    pub(crate) fn run(mut self) -> Result<Registry, BuildError> {
        let table = self.table;
        for (index, raw) in table.types.iter().enumerate() {
            if self.check_type(index, raw).is_err() {
                tracing::debug!(index, name = %raw.name, "type table validation halted");
                break;
            }
        }

        if self.diagnostics.has_errors() {
            return Err(BuildError::Invalid(self.diagnostics));
        }

        tracing::debug!(
            types = self.types.len(),
            entries = self.by_name.len(),
            warnings = self.diagnostics.warning_count(),
            "built type registry"
        );

        Ok(Registry {
            types: self.types,
            by_id: self.by_id,
            by_name: self.by_name,
            warnings: self.diagnostics,
        })
    }

    fn check_type(&mut self, index: usize, raw: &RawTypeEntry) -> Step {
        let loc = Location::base(index, &raw.name);

        if raw.name.is_empty() {
            self.diagnostics
                .report(DiagnosticKind::EmptyName, loc)
                .emit();
            return Err(Halt);
        }

        let Some(family) = TypeFamily::from_type_name(&raw.name) else {
            self.diagnostics
                .report(DiagnosticKind::UnknownFamily, loc)
                .message(&raw.name)
                .emit();
            return Err(Halt);
        };

        let Some(id) = TypeId::from_table_value(raw.id) else {
            self.diagnostics
                .report(DiagnosticKind::IdOutOfRange, loc)
                .message(format!("{} on `{}`", raw.id, raw.name))
                .emit();
            return Err(Halt);
        };

        if let Some(&prev) = self.by_id.get(&id) {
            let first = &self.types[prev];
            self.diagnostics
                .report(DiagnosticKind::DuplicateId, loc)
                .message(format!("`{}` reuses id {id} of `{}`", raw.name, first.name))
                .related_to("first assigned", Location::base(prev, &first.name))
                .hint("ids are wire tags: assign the next unused one instead of reusing")
                .emit();
            return Err(Halt);
        }

        self.claim_name(
            &raw.name,
            &loc,
            EntryRef {
                base: index,
                alias: None,
            },
        )?;
        self.check_width(family, raw, &loc)?;

        let operators = self.collect_operators(&raw.supported_operators, &loc);
        let clear_type = ClearType::parse(&raw.clear_type);
        self.check_clear_type(&loc, family, raw.bit_length, &clear_type);

        let mut aliases = Vec::with_capacity(raw.aliases.len());
        for (alias_index, alias) in raw.aliases.iter().enumerate() {
            let alias = self.check_alias(index, alias_index, alias, family, raw.bit_length, &loc)?;
            aliases.push(alias);
        }

        self.by_id.insert(id, index);
        if family.is_numeric() {
            self.widths.insert((family, raw.bit_length), index);
        }
        self.types.push(TypeDescriptor {
            id,
            name: raw.name.clone(),
            family,
            bit_length: raw.bit_length,
            operators,
            clear_type,
            aliases,
        });
        Ok(())
    }

    fn check_alias(
        &mut self,
        index: usize,
        alias_index: usize,
        raw: &RawAlias,
        family: TypeFamily,
        bit_length: u32,
        base_loc: &Location,
    ) -> Step<AliasDescriptor> {
        let loc = base_loc.alias(alias_index, &raw.name);

        if raw.name.is_empty() {
            self.diagnostics
                .report(DiagnosticKind::EmptyName, loc)
                .emit();
            return Err(Halt);
        }

        self.claim_name(
            &raw.name,
            &loc,
            EntryRef {
                base: index,
                alias: Some(alias_index),
            },
        )?;

        let operators = self.collect_operators(&raw.supported_operators, &loc);
        let clear_type = ClearType::parse(&raw.clear_type);
        self.check_clear_type(&loc, family, bit_length, &clear_type);

        Ok(AliasDescriptor {
            name: raw.name.clone(),
            operators,
            clear_type,
        })
    }

    fn claim_name(&mut self, name: &str, loc: &Location, entry: EntryRef) -> Step {
        if let Some(&prev) = self.by_name.get(name) {
            let first = self.location_of(prev);
            self.diagnostics
                .report(DiagnosticKind::DuplicateName, loc.clone())
                .message(name)
                .related_to("first declared", first)
                .emit();
            return Err(Halt);
        }
        self.by_name.insert(name.to_owned(), entry);
        Ok(())
    }

    fn check_width(&mut self, family: TypeFamily, raw: &RawTypeEntry, loc: &Location) -> Step {
        if family.is_variable_width() {
            if raw.bit_length != 0 {
                self.diagnostics
                    .report(DiagnosticKind::VariableWidthRequired, loc.clone())
                    .message(format!("`{}` declares {} bits", raw.name, raw.bit_length))
                    .emit();
                return Err(Halt);
            }
            return Ok(());
        }

        if raw.bit_length == 0 {
            self.diagnostics
                .report(DiagnosticKind::ReservedWidth, loc.clone())
                .message(format!("`{}` is a {family} type", raw.name))
                .emit();
            return Err(Halt);
        }

        if !family.is_numeric() {
            return Ok(());
        }
        if let Some(&prev) = self.widths.get(&(family, raw.bit_length)) {
            let first = &self.types[prev];
            self.diagnostics
                .report(DiagnosticKind::DuplicateWidth, loc.clone())
                .message(format!(
                    "`{}` and `{}` are both {family} with {} bits",
                    first.name, raw.name, raw.bit_length
                ))
                .related_to("first claimed", Location::base(prev, &first.name))
                .emit();
            return Err(Halt);
        }
        Ok(())
    }

    fn collect_operators(&mut self, tokens: &[String], loc: &Location) -> IndexSet<Operator> {
        let mut operators = IndexSet::with_capacity(tokens.len());
        for token in tokens {
            match Operator::from_token(token) {
                Some(op) => {
                    if !operators.insert(op) {
                        self.diagnostics
                            .report(DiagnosticKind::DuplicateOperator, loc.clone())
                            .message(token)
                            .emit();
                    }
                }
                None => {
                    let mut diag = self
                        .diagnostics
                        .report(DiagnosticKind::UnknownOperator, loc.clone())
                        .message(token);
                    if let Some(op) = Operator::ALL
                        .into_iter()
                        .find(|op| op.as_str().eq_ignore_ascii_case(token))
                    {
                        diag = diag.hint(format!("did you mean `{op}`?"));
                    }
                    diag.emit();
                }
            }
        }
        operators
    }

    /// Flag clear types that break the pattern of their siblings.
    ///
    /// Reported as warnings: the table is reproduced as written and the
    /// owner decides which side is wrong. An empty clear type is only
    /// expected on text and on byte views wider than 32 bytes.
    fn check_clear_type(
        &mut self,
        loc: &Location,
        family: TypeFamily,
        bit_length: u32,
        clear_type: &ClearType,
    ) {
        let name = loc.entry_name();
        let expected = fixed_bytes_clear_type(name, bit_length);

        if clear_type.is_numeric() {
            tracing::warn!(entry = %loc, clear_type = %clear_type, "numeric clear type");
            let mut diag = self
                .diagnostics
                .report(DiagnosticKind::NumericClearType, loc.clone())
                .message(format!("`{name}` maps to `{clear_type}`"));
            if let Some(expected) = expected {
                diag = diag.hint(format!("sibling byte views use `{expected}`"));
            }
            diag.emit();
        } else if !clear_type.is_mapped() && !may_be_unmapped(family, name) {
            tracing::warn!(entry = %loc, "empty clear type");
            let mut diag = self
                .diagnostics
                .report(DiagnosticKind::UnmappedClearType, loc.clone())
                .message(name);
            if let Some(expected) = expected {
                diag = diag.hint(format!("sibling byte views use `{expected}`"));
            }
            diag.emit();
        }
    }

    fn location_of(&self, entry: EntryRef) -> Location {
        let raw = &self.table.types[entry.base];
        let base = Location::base(entry.base, &raw.name);
        match entry.alias {
            None => base,
            Some(i) => base.alias(i, &raw.aliases[i].name),
        }
    }
}

/// Text and `BytesN` views with `N > 32` have no fixed-size clear type.
fn may_be_unmapped(family: TypeFamily, name: &str) -> bool {
    if family == TypeFamily::Text {
        return true;
    }
    byte_view_len(name).is_some_and(|n| n > MAX_FIXED_BYTES)
}

fn byte_view_len(name: &str) -> Option<u32> {
    name.strip_prefix("Bytes")?.parse().ok()
}

/// `bytesN` for a `BytesN` view over exactly `N * 8` bits with `N <= 32`.
fn fixed_bytes_clear_type(name: &str, bit_length: u32) -> Option<String> {
    let n = byte_view_len(name)?;
    if n == 0 || n > MAX_FIXED_BYTES || n * 8 != bit_length {
        return None;
    }
    Some(format!("bytes{n}"))
}
