use fhecat_core::CatalogTable;
use fhecat_registry::{Registry, builtin_registry};

use super::check::passes;

fn registry(json: &str) -> Registry {
    Registry::build(&CatalogTable::from_json(json).unwrap()).unwrap()
}

#[test]
fn builtin_warnings_pass_unless_strict() {
    let warnings = builtin_registry().warnings();
    assert_eq!(warnings.warning_count(), 7);

    assert!(passes(warnings, false));
    assert!(!passes(warnings, true));
}

#[test]
fn clean_table_passes_strict() {
    let registry = registry(
        r#"{"version": 1, "types": [{"type": "Bool", "value": 0, "bitLength": 2, "clearMatchingType": "bool"}]}"#,
    );

    assert!(registry.warnings().is_empty());
    assert!(passes(registry.warnings(), true));
}

#[test]
fn repeated_operator_fails_strict() {
    let registry = registry(
        r#"{"version": 1, "types": [{"type": "Uint8", "value": 2, "bitLength": 8, "clearMatchingType": "uint8", "supportedOperators": ["add", "add"]}]}"#,
    );

    assert!(passes(registry.warnings(), false));
    assert!(!passes(registry.warnings(), true));
}
