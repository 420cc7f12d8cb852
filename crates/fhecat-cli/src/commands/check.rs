use std::path::PathBuf;

use fhecat_registry::{Diagnostics, Registry};

use super::output::fail;
use super::table_loader::load_table;

pub struct CheckArgs {
    pub table: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

/// Whether a registry that built passes the check. `--strict` also fails on warnings.
pub fn passes(warnings: &Diagnostics, strict: bool) -> bool {
    if strict {
        !warnings.has_errors() && !warnings.has_warnings()
    } else {
        !warnings.has_errors()
    }
}

pub fn run(args: CheckArgs) {
    let built = match &args.table {
        Some(path) => match load_table(path) {
            Ok(table) => Registry::build(&table),
            Err(e) => fail(&e.to_string(), args.color),
        },
        None => Registry::builtin(),
    };

    let registry = match built {
        Ok(registry) => registry,
        Err(err) => {
            if let Some(diagnostics) = err.diagnostics() {
                eprint!("{}", diagnostics.render_colored(args.color));
                eprintln!();
            }
            fail(&err.to_string(), args.color)
        }
    };

    let warnings = registry.warnings();
    if !warnings.is_empty() {
        eprint!("{}", warnings.render_colored(args.color));
    }

    if !passes(warnings, args.strict) {
        eprintln!();
        fail(
            &format!(
                "warnings treated as errors (--strict, warnings: {})",
                warnings.warning_count()
            ),
            args.color,
        );
    }

    // Silent on success (like cargo check)
}
