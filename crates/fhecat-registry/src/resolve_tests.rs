use fhecat_core::{ClearType, Operator, TypeFamily, TypeId};

use crate::test_utils::{alias, build, ty, with_aliases};
use crate::{LookupError, builtin_registry, resolve};

#[test]
fn alias_narrows_operators_and_keeps_base_width() {
    let registry = builtin_registry();
    let address = registry.resolve("Address").unwrap();

    assert_eq!(address.name, "Address");
    assert_eq!(address.canonical_base_name, "Uint160");
    assert_eq!(address.bit_length, 160);
    assert_eq!(address.id, TypeId::new(7));
    assert!(address.is_alias);
    assert_eq!(address.clear_type, &ClearType::parse("address"));

    let ops: Vec<_> = address.supported_operators.iter().copied().collect();
    assert_eq!(ops, [Operator::Eq, Operator::Ne, Operator::Select]);
}

#[test]
fn alias_does_not_inherit_base_operators() {
    let registry = build(vec![with_aliases(
        ty("Uint8", 2, 8, &["add", "sub", "eq"], "uint8"),
        vec![alias("Bytes1", &[], "bytes1")],
    )]);

    let bytes1 = registry.resolve("Bytes1").unwrap();
    assert!(bytes1.supported_operators.is_empty());
    assert!(!bytes1.is_implemented());
    assert_eq!(bytes1.bit_length, 8);

    let uint8 = registry.resolve("Uint8").unwrap();
    assert_eq!(uint8.supported_operators.len(), 3);
    assert!(uint8.is_implemented());
}

#[test]
fn wide_alias_can_support_more_than_base() {
    let registry = builtin_registry();

    let uint512 = registry.resolve("Uint512").unwrap();
    let bytes64 = registry.resolve("Bytes64").unwrap();
    assert!(uint512.supported_operators.is_empty());
    assert!(bytes64.supports(Operator::Rand));
    assert!(bytes64.is_wide());
    assert_eq!(bytes64.clear_type, &ClearType::Unmapped);
    assert_eq!(bytes64.clear_byte_len(), Some(64));
}

#[test]
fn base_resolves_to_itself() {
    let registry = builtin_registry();
    let uint256 = registry.resolve("Uint256").unwrap();

    assert!(!uint256.is_alias);
    assert_eq!(uint256.canonical_base_name, "Uint256");
    assert_eq!(uint256.family, TypeFamily::Unsigned);
    assert!(!uint256.is_wide());
    assert!(!uint256.supports(Operator::Add));
    assert!(uint256.supports(Operator::RandBounded));
}

#[test]
fn canonical_base_resolves_to_same_id() {
    let registry = builtin_registry();

    for resolved in registry.resolved() {
        let base = registry.resolve(resolved.canonical_base_name).unwrap();
        assert_eq!(base.id, resolved.id, "{}", resolved.name);
        assert_eq!(base.bit_length, resolved.bit_length, "{}", resolved.name);
        assert!(!base.is_alias);
    }
}

#[test]
fn unknown_name_suggests_close_spelling() {
    let registry = builtin_registry();

    let suggestion = |name: &str| match registry.resolve(name) {
        Err(LookupError::UnknownName { suggestion, .. }) => suggestion,
        other => panic!("expected unknown name, got {other:?}"),
    };

    assert_eq!(suggestion("uint8").as_deref(), Some("Uint8"));
    assert_eq!(suggestion("euint8").as_deref(), Some("Uint8"));
    assert_eq!(suggestion("ebool").as_deref(), Some("Bool"));
    assert_eq!(suggestion("EADDRESS").as_deref(), Some("Address"));
    assert_eq!(suggestion("Uint7"), None);
    assert_eq!(suggestion(""), None);
}

#[test]
fn unknown_name_error_message() {
    let registry = builtin_registry();
    let err = resolve(registry, "Float64").unwrap_err();

    assert_eq!(err.to_string(), "unknown type `Float64`");
}

#[test]
fn resolved_serializes_camel_case() {
    let registry = builtin_registry();
    let address = registry.resolve("Address").unwrap();

    let json = serde_json::to_string_pretty(&address).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "name": "Address",
      "id": 7,
      "family": "unsigned",
      "bitLength": 160,
      "supportedOperators": [
        "eq",
        "ne",
        "select"
      ],
      "clearType": "address",
      "canonicalBaseName": "Uint160",
      "isAlias": true
    }
    "#);
}
