//! Homomorphic operator vocabulary.
//!
//! The vocabulary is closed: every operator a type may declare is listed in
//! [`Operator::ALL`], in canonical catalog order. Each operator has a fixed
//! operand-role shape that the test matrix substitutes concrete types into.

use serde::{Deserialize, Serialize};

/// One homomorphic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Rotl,
    Rotr,
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Min,
    Max,
    Neg,
    Not,
    /// `select(condition, then, else)`
    Select,
    /// Fresh uniformly random ciphertext.
    Rand,
    /// Fresh random ciphertext below a plaintext upper bound.
    RandBounded,
}

/// Semantic class of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorClass {
    Unary,
    BinaryArithmetic,
    BinaryComparison,
    TernarySelect,
    NondeterministicGenerator,
}

/// Type an operand role (or a result) is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleType {
    /// The type declaring the operator.
    Declaring,
    /// The boolean type, whatever the declaring type.
    Bool,
}

/// A named operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OperandRole {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: RoleType,
}

impl OperandRole {
    pub const OPERAND: Self = Self::declaring("operand");
    pub const LHS: Self = Self::declaring("lhs");
    pub const RHS: Self = Self::declaring("rhs");
    pub const CONDITION: Self = Self {
        name: "condition",
        ty: RoleType::Bool,
    };
    pub const THEN: Self = Self::declaring("then");
    pub const ELSE: Self = Self::declaring("else");

    const fn declaring(name: &'static str) -> Self {
        Self {
            name,
            ty: RoleType::Declaring,
        }
    }
}

const UNARY_ROLES: &[OperandRole] = &[OperandRole::OPERAND];
const BINARY_ROLES: &[OperandRole] = &[OperandRole::LHS, OperandRole::RHS];
const SELECT_ROLES: &[OperandRole] = &[
    OperandRole::CONDITION,
    OperandRole::THEN,
    OperandRole::ELSE,
];
const GENERATOR_ROLES: &[OperandRole] = &[];

/// Error returned when parsing an operator token outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator `{0}`")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// Every operator, in canonical catalog order.
    pub const ALL: [Operator; 25] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
        Self::Rotl,
        Self::Rotr,
        Self::Eq,
        Self::Ne,
        Self::Ge,
        Self::Gt,
        Self::Le,
        Self::Lt,
        Self::Min,
        Self::Max,
        Self::Neg,
        Self::Not,
        Self::Select,
        Self::Rand,
        Self::RandBounded,
    ];

    /// Parse a literal-table token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == token)
    }

    /// Token as written in the literal table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::Rotl => "rotl",
            Self::Rotr => "rotr",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Ge => "ge",
            Self::Gt => "gt",
            Self::Le => "le",
            Self::Lt => "lt",
            Self::Min => "min",
            Self::Max => "max",
            Self::Neg => "neg",
            Self::Not => "not",
            Self::Select => "select",
            Self::Rand => "rand",
            Self::RandBounded => "randBounded",
        }
    }

    /// Position in [`Operator::ALL`].
    pub fn catalog_index(self) -> usize {
        self as usize
    }

    pub fn class(self) -> OperatorClass {
        match self {
            Self::Neg | Self::Not => OperatorClass::Unary,
            Self::Eq | Self::Ne | Self::Ge | Self::Gt | Self::Le | Self::Lt => {
                OperatorClass::BinaryComparison
            }
            Self::Select => OperatorClass::TernarySelect,
            Self::Rand | Self::RandBounded => OperatorClass::NondeterministicGenerator,
            _ => OperatorClass::BinaryArithmetic,
        }
    }

    /// Ciphertext operand slots, in call order.
    pub fn operand_roles(self) -> &'static [OperandRole] {
        match self.class() {
            OperatorClass::Unary => UNARY_ROLES,
            OperatorClass::BinaryArithmetic | OperatorClass::BinaryComparison => BINARY_ROLES,
            OperatorClass::TernarySelect => SELECT_ROLES,
            OperatorClass::NondeterministicGenerator => GENERATOR_ROLES,
        }
    }

    /// Number of ciphertext operands (0 to 3).
    pub fn arity(self) -> u8 {
        self.operand_roles().len() as u8
    }

    /// Type of the produced ciphertext.
    pub fn result_role(self) -> RoleType {
        match self.class() {
            OperatorClass::BinaryComparison => RoleType::Bool,
            _ => RoleType::Declaring,
        }
    }

    /// Binary operator whose result is unchanged by swapping `lhs` and `rhs`.
    pub fn is_commutative(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Mul
                | Self::And
                | Self::Or
                | Self::Xor
                | Self::Eq
                | Self::Ne
                | Self::Min
                | Self::Max
        )
    }

    /// Result has no deterministic expected value.
    pub fn is_nondeterministic(self) -> bool {
        self.class() == OperatorClass::NondeterministicGenerator
    }

    /// Takes a plaintext upper bound in addition to its ciphertext operands.
    pub fn takes_plaintext_bound(self) -> bool {
        matches!(self, Self::RandBounded)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownOperator(s.to_owned()))
    }
}

/// Token-level view of the operator vocabulary.
///
/// Used at the boundary where operators are still raw strings. Tokens are
/// known at build time, so asking for the shape of an unknown token panics;
/// check with [`OperatorCatalog::is_valid`] first.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorCatalog;

impl OperatorCatalog {
    pub fn is_valid(token: &str) -> bool {
        Operator::from_token(token).is_some()
    }

    pub fn lookup(token: &str) -> Option<Operator> {
        Operator::from_token(token)
    }

    /// # Panics
    /// Panics if `token` is not in the vocabulary.
    pub fn arity(token: &str) -> u8 {
        Self::ensure_operator(token).arity()
    }

    /// # Panics
    /// Panics if `token` is not in the vocabulary.
    pub fn operand_roles(token: &str) -> &'static [OperandRole] {
        Self::ensure_operator(token).operand_roles()
    }

    /// # Panics
    /// Panics if `token` is not in the vocabulary.
    pub fn class(token: &str) -> OperatorClass {
        Self::ensure_operator(token).class()
    }

    pub fn iter() -> impl Iterator<Item = Operator> {
        Operator::ALL.into_iter()
    }
}
