use std::sync::OnceLock;

use crate::Registry;

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// Registry built from the embedded table, constructed on first use.
///
/// # Panics
/// Panics if the embedded table does not validate.
pub fn builtin_registry() -> &'static Registry {
    BUILTIN.get_or_init(|| Registry::ensure_builtin(Registry::builtin()))
}
