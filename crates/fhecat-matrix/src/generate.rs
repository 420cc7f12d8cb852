//! Matrix generation.
//!
//! Cases are ordered by entry declaration order, then by operator
//! declaration order within the entry. Failures are collected per case and
//! never stop generation.

use fhecat_core::{OperatorCatalog, RoleType};
use rayon::prelude::*;

use crate::case::{CaseError, CaseOperand, TestCase};
use crate::source::{MatrixSource, SourceEntry};

/// Generated cases plus the cases that could not be generated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    pub cases: Vec<TestCase>,
    pub errors: Vec<CaseError>,
}

impl Matrix {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Cases generated for one entry.
    pub fn cases_for<'m>(&'m self, type_name: &'m str) -> impl Iterator<Item = &'m TestCase> {
        self.cases.iter().filter(move |c| c.type_name == type_name)
    }

    fn append(&mut self, mut shard: Matrix) {
        self.cases.append(&mut shard.cases);
        self.errors.append(&mut shard.errors);
    }
}

pub fn generate(source: &impl MatrixSource) -> Matrix {
    let bool_name = source.bool_type_name();
    let mut matrix = Matrix::default();
    for entry in source.matrix_entries() {
        matrix.append(generate_entry(&entry, bool_name));
    }
    log_summary(&matrix);
    matrix
}

/// Same output as [`generate`], with one shard per entry spread across the
/// rayon pool.
pub fn generate_parallel(source: &impl MatrixSource) -> Matrix {
    let bool_name = source.bool_type_name();
    // Indexed collect keeps shards in entry order.
    let shards: Vec<Matrix> = source
        .matrix_entries()
        .par_iter()
        .map(|entry| generate_entry(entry, bool_name))
        .collect();

    let mut matrix = Matrix::default();
    for shard in shards {
        matrix.append(shard);
    }
    log_summary(&matrix);
    matrix
}

fn generate_entry(entry: &SourceEntry<'_>, bool_name: Option<&str>) -> Matrix {
    let mut shard = Matrix::default();
    for &token in &entry.operators {
        let Some(op) = OperatorCatalog::lookup(token) else {
            shard.errors.push(CaseError::UnknownOperator {
                type_name: entry.name.to_owned(),
                token: token.to_owned(),
            });
            continue;
        };

        let bind = |ty: RoleType| match ty {
            RoleType::Declaring => Some(entry.name),
            RoleType::Bool => bool_name,
        };
        let operands: Option<Vec<CaseOperand>> = op
            .operand_roles()
            .iter()
            .map(|role| {
                bind(role.ty).map(|name| CaseOperand {
                    role: role.name,
                    type_name: name.to_owned(),
                })
            })
            .collect();
        let (Some(operand_roles), Some(result_type)) = (operands, bind(op.result_role())) else {
            shard.errors.push(CaseError::MissingBoolType {
                type_name: entry.name.to_owned(),
                operator: op,
            });
            continue;
        };

        shard.cases.push(TestCase {
            id: format!("{}::{op}", entry.name),
            type_name: entry.name.to_owned(),
            operator: op,
            operand_roles,
            result_type: result_type.to_owned(),
            commutative: op.is_commutative(),
            is_nondeterministic: op.is_nondeterministic(),
            plaintext_bound: op.takes_plaintext_bound(),
        });
    }
    tracing::trace!(
        entry = entry.name,
        cases = shard.cases.len(),
        errors = shard.errors.len(),
        "generated shard"
    );
    shard
}

fn log_summary(matrix: &Matrix) {
    tracing::debug!(
        cases = matrix.cases.len(),
        errors = matrix.errors.len(),
        "generated test matrix"
    );
}
