use super::*;

#[test]
fn token_roundtrip_covers_vocabulary() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_token(op.as_str()), Some(op));
    }
    assert_eq!(Operator::ALL.len(), 25);
}

#[test]
fn tokens_are_case_sensitive() {
    assert_eq!(
        Operator::from_token("randBounded"),
        Some(Operator::RandBounded)
    );
    assert_eq!(Operator::from_token("randbounded"), None);
    assert_eq!(Operator::from_token("ADD"), None);
    assert_eq!(Operator::from_token(""), None);
}

#[test]
fn catalog_index_follows_all() {
    for (i, op) in Operator::ALL.into_iter().enumerate() {
        assert_eq!(op.catalog_index(), i);
    }
}

#[test]
fn arity_per_class() {
    assert_eq!(Operator::Neg.arity(), 1);
    assert_eq!(Operator::Not.arity(), 1);
    assert_eq!(Operator::Add.arity(), 2);
    assert_eq!(Operator::Shl.arity(), 2);
    assert_eq!(Operator::Lt.arity(), 2);
    assert_eq!(Operator::Select.arity(), 3);
    assert_eq!(Operator::Rand.arity(), 0);
    assert_eq!(Operator::RandBounded.arity(), 0);
}

#[test]
fn select_roles() {
    let roles = Operator::Select.operand_roles();
    let names: Vec<_> = roles.iter().map(|r| r.name).collect();
    assert_eq!(names, ["condition", "then", "else"]);
    assert_eq!(roles[0].ty, RoleType::Bool);
    assert_eq!(roles[1].ty, RoleType::Declaring);
    assert_eq!(roles[2].ty, RoleType::Declaring);
}

#[test]
fn comparisons_produce_bool() {
    for op in Operator::ALL {
        let expected = if op.class() == OperatorClass::BinaryComparison {
            RoleType::Bool
        } else {
            RoleType::Declaring
        };
        assert_eq!(op.result_role(), expected, "{op}");
    }
}

#[test]
fn commutative_only_for_binary() {
    for op in Operator::ALL.into_iter().filter(|op| op.is_commutative()) {
        assert_eq!(op.arity(), 2, "{op}");
    }
    for op in [
        Operator::Sub,
        Operator::Div,
        Operator::Rem,
        Operator::Shl,
        Operator::Shr,
        Operator::Rotl,
        Operator::Rotr,
        Operator::Ge,
        Operator::Gt,
        Operator::Le,
        Operator::Lt,
    ] {
        assert!(!op.is_commutative(), "{op}");
    }
}

#[test]
fn generators_are_nondeterministic() {
    let generators: Vec<_> = Operator::ALL
        .into_iter()
        .filter(|op| op.is_nondeterministic())
        .collect();
    assert_eq!(generators, [Operator::Rand, Operator::RandBounded]);
    assert!(Operator::RandBounded.takes_plaintext_bound());
    assert!(!Operator::Rand.takes_plaintext_bound());
}

#[test]
fn from_str_reports_token() {
    let err = "pow".parse::<Operator>().unwrap_err();
    assert_eq!(err.to_string(), "unknown operator `pow`");
    assert_eq!("xor".parse::<Operator>(), Ok(Operator::Xor));
}

#[test]
fn serde_uses_table_tokens() {
    let json = serde_json::to_string(&[Operator::RandBounded, Operator::Shl]).unwrap();
    assert_eq!(json, r#"["randBounded","shl"]"#);
}

#[test]
fn catalog_token_api() {
    assert!(OperatorCatalog::is_valid("rotr"));
    assert!(!OperatorCatalog::is_valid("pow"));
    assert_eq!(OperatorCatalog::arity("select"), 3);
    assert_eq!(OperatorCatalog::operand_roles("not").len(), 1);
    assert_eq!(
        OperatorCatalog::class("eq"),
        OperatorClass::BinaryComparison
    );
    assert_eq!(OperatorCatalog::iter().count(), 25);
}

#[test]
#[should_panic(expected = "`pow` is not an operator")]
fn catalog_panics_on_unknown_token() {
    OperatorCatalog::arity("pow");
}
