use fhecat_core::{OperandRole, Operator, OperatorCatalog, OperatorClass, RoleType};
use serde::Serialize;

use super::output::print_json;

pub struct OpsArgs {
    pub compact: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OperatorInfo {
    operator: Operator,
    class: OperatorClass,
    arity: u8,
    operand_roles: &'static [OperandRole],
    result: RoleType,
    commutative: bool,
    is_nondeterministic: bool,
    plaintext_bound: bool,
}

impl From<Operator> for OperatorInfo {
    fn from(op: Operator) -> Self {
        Self {
            operator: op,
            class: op.class(),
            arity: op.arity(),
            operand_roles: op.operand_roles(),
            result: op.result_role(),
            commutative: op.is_commutative(),
            is_nondeterministic: op.is_nondeterministic(),
            plaintext_bound: op.takes_plaintext_bound(),
        }
    }
}

fn catalog() -> Vec<OperatorInfo> {
    OperatorCatalog::iter().map(OperatorInfo::from).collect()
}

pub fn run(args: OpsArgs) {
    print_json(&catalog(), args.compact);
}
