use fhecat_core::CatalogTable;
use fhecat_registry::builtin_registry;
use indoc::indoc;

use crate::{MatrixSource, SourceEntry};

#[test]
fn registry_and_builtin_table_list_same_entries() {
    let raw = CatalogTable::builtin().unwrap();
    let registry = builtin_registry();

    assert_eq!(raw.matrix_entries(), registry.matrix_entries());
    assert_eq!(registry.matrix_entries().len(), 120);
    assert_eq!(raw.bool_type_name(), Some("Bool"));
    assert_eq!(registry.bool_type_name(), Some("Bool"));
}

#[test]
fn raw_entries_keep_first_of_each_token() {
    let raw = CatalogTable::from_json(indoc! {r#"
        {
          "version": 1,
          "types": [
            { "type": "Uint8", "value": 2, "bitLength": 8, "clearMatchingType": "uint8",
              "supportedOperators": ["add", "Add", "add"],
              "aliases": [
                { "type": "Bytes1", "supportedOperators": ["eq", "eq"],
                  "clearMatchingType": "bytes1" }
              ] }
          ]
        }
    "#})
    .unwrap();

    assert_eq!(
        raw.matrix_entries(),
        [
            SourceEntry {
                name: "Uint8",
                operators: vec!["add", "Add"],
            },
            SourceEntry {
                name: "Bytes1",
                operators: vec!["eq"],
            },
        ]
    );
    assert_eq!(raw.bool_type_name(), None);
}
