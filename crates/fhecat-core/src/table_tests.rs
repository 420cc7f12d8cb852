use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_table() {
    let json = indoc! {r#"
        {
          "version": 1,
          "types": [
            {
              "type": "Uint8",
              "value": 2,
              "supportedOperators": ["add", "eq"],
              "bitLength": 8,
              "clearMatchingType": "uint8",
              "aliases": [
                { "type": "Bytes1", "supportedOperators": [], "clearMatchingType": "bytes1" }
              ]
            }
          ]
        }
    "#};

    let table = CatalogTable::from_json(json).unwrap();
    assert_eq!(table.types.len(), 1);

    let entry = &table.types[0];
    assert_eq!(entry.name, "Uint8");
    assert_eq!(entry.id, 2);
    assert_eq!(entry.supported_operators, ["add", "eq"]);
    assert_eq!(entry.bit_length, 8);
    assert_eq!(entry.clear_type, "uint8");
    assert_eq!(entry.aliases[0].name, "Bytes1");
    assert_eq!(table.entry_count(), 2);
}

#[test]
fn optional_fields_default() {
    let json = r#"{ "version": 1, "types": [ { "type": "Uint4", "value": 1, "bitLength": 4, "clearMatchingType": "" } ] }"#;

    let table = CatalogTable::from_json(json).unwrap();
    let entry = &table.types[0];
    assert!(entry.supported_operators.is_empty());
    assert!(entry.clear_type.is_empty());
    assert!(entry.aliases.is_empty());
}

#[test]
fn missing_clear_type_is_malformed() {
    let json = r#"{ "version": 1, "types": [ { "type": "Uint8", "value": 2, "bitLength": 8, "supportedOperators": ["add"] } ] }"#;
    let err = CatalogTable::from_json(json).unwrap_err();
    assert!(matches!(err, TableError::Json(_)));
    assert!(err.to_string().contains("clearMatchingType"), "{err}");

    let json = indoc! {r#"
        {
          "version": 1,
          "types": [
            {
              "type": "Uint8",
              "value": 2,
              "bitLength": 8,
              "clearMatchingType": "uint8",
              "aliases": [ { "type": "Bytes1", "supportedOperators": ["eq"] } ]
            }
          ]
        }
    "#};
    let err = CatalogTable::from_json(json).unwrap_err();
    assert!(err.to_string().contains("clearMatchingType"), "{err}");
}

#[test]
fn rejects_unknown_version() {
    let json = r#"{ "version": 2, "types": [] }"#;

    let err = CatalogTable::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        TableError::UnsupportedVersion {
            found: 2,
            expected: 1
        }
    ));
    assert_eq!(
        err.to_string(),
        "unsupported type table version 2 (expected 1)"
    );
}

#[test]
fn rejects_malformed_json() {
    let err = CatalogTable::from_json(r#"{ "version": 1 }"#).unwrap_err();
    assert!(matches!(err, TableError::Json(_)));
}

#[test]
fn builtin_table_shape() {
    let table = CatalogTable::builtin().unwrap();

    assert_eq!(table.types.len(), 84);
    assert_eq!(table.entry_count(), 84 + 36);
    assert_eq!(table.types[0].name, "Bool");
    assert_eq!(table.types[0].bit_length, 2);
    assert_eq!(table.types.last().unwrap().name, "Int248");

    // Discriminants are positional in the builtin table.
    for (i, entry) in table.types.iter().enumerate() {
        assert_eq!(entry.id as usize, i, "{}", entry.name);
    }
}

#[test]
fn builtin_table_keeps_irregular_clear_types() {
    let table = CatalogTable::builtin().unwrap();
    let alias = |name: &str| {
        table
            .types
            .iter()
            .flat_map(|t| &t.aliases)
            .find(|a| a.name == name)
            .unwrap()
            .clear_type
            .clone()
    };

    assert_eq!(alias("Bytes24"), "24");
    assert_eq!(alias("Bytes4"), "");
    assert_eq!(alias("Bytes29"), "bytes29");
}

#[test]
fn json_roundtrip_preserves_table() {
    let table = CatalogTable::builtin().unwrap();
    let json = table.to_json_pretty().unwrap();
    assert_eq!(CatalogTable::from_json(&json).unwrap(), table);
}
