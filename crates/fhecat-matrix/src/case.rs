//! Generated cases and per-case failures.

use fhecat_core::Operator;
use serde::Serialize;

/// One operand slot bound to a concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOperand {
    pub role: &'static str,
    pub type_name: String,
}

/// One `(type, operator)` test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// `<TypeName>::<operator>`, stable across runs.
    pub id: String,
    pub type_name: String,
    pub operator: Operator,
    pub operand_roles: Vec<CaseOperand>,
    pub result_type: String,
    /// Swapping `lhs` and `rhs` does not change the result.
    pub commutative: bool,
    pub is_nondeterministic: bool,
    /// Takes a plaintext upper bound besides its operands.
    pub plaintext_bound: bool,
}

/// A case that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    #[error("`{type_name}` declares unknown operator `{token}`")]
    UnknownOperator { type_name: String, token: String },

    #[error("`{type_name}::{operator}` needs a boolean type, but none is declared")]
    MissingBoolType {
        type_name: String,
        operator: Operator,
    },
}

impl CaseError {
    /// Id the case would have had.
    pub fn case_id(&self) -> String {
        match self {
            Self::UnknownOperator { type_name, token } => format!("{type_name}::{token}"),
            Self::MissingBoolType {
                type_name,
                operator,
            } => format!("{type_name}::{operator}"),
        }
    }
}
