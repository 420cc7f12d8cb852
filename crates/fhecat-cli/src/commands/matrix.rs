use std::path::PathBuf;

use fhecat_matrix::{Matrix, MatrixSource, TestCase, generate, generate_parallel};
use fhecat_registry::{Registry, builtin_registry};
use serde::Serialize;

use super::output::{fail, print_json, print_warnings, warn};
use super::table_loader::load_table;

pub struct MatrixArgs {
    pub table: Option<PathBuf>,
    pub parallel: bool,
    pub compact: bool,
    pub color: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatrixOutput<'m> {
    cases: &'m [TestCase],
    diagnostics: Vec<CaseDiagnostic>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseDiagnostic {
    case: String,
    message: String,
}

pub fn run(args: MatrixArgs) {
    let Some(path) = &args.table else {
        let registry = builtin_registry();
        print_warnings(registry, args.color);
        emit(&run_source(registry, args.parallel), &args);
        return;
    };

    let table = match load_table(path) {
        Ok(table) => table,
        Err(e) => fail(&e.to_string(), args.color),
    };
    match Registry::build(&table) {
        Ok(registry) => {
            print_warnings(&registry, args.color);
            emit(&run_source(&registry, args.parallel), &args);
        }
        Err(err) => {
            let Some(diagnostics) = err.diagnostics() else {
                fail(&err.to_string(), args.color)
            };
            // Best-effort matrix of the raw table, then fail.
            eprint!("{}", diagnostics.render_colored(args.color));
            eprintln!();
            emit(&run_source(&table, args.parallel), &args);
            fail(&format!("{}: {err}", path.display()), args.color);
        }
    }
}

fn run_source(source: &impl MatrixSource, parallel: bool) -> Matrix {
    if parallel {
        generate_parallel(source)
    } else {
        generate(source)
    }
}

fn emit(matrix: &Matrix, args: &MatrixArgs) {
    for err in &matrix.errors {
        warn(&err.to_string(), args.color);
    }

    let output = MatrixOutput {
        cases: &matrix.cases,
        diagnostics: matrix
            .errors
            .iter()
            .map(|e| CaseDiagnostic {
                case: e.case_id(),
                message: e.to_string(),
            })
            .collect(),
    };
    print_json(&output, args.compact);
}
