use std::path::PathBuf;

use fhecat_registry::LookupError;

use super::output::{fail, print_json};
use super::table_loader::require_registry;

pub struct ResolveArgs {
    pub name: String,
    pub table: Option<PathBuf>,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: ResolveArgs) {
    let registry = require_registry(args.table.as_deref(), args.color);

    match registry.resolve(&args.name) {
        Ok(resolved) => print_json(&resolved, args.compact),
        Err(LookupError::UnknownName {
            name,
            suggestion: Some(suggestion),
        }) => fail(
            &format!("unknown type `{name}`\n\nDid you mean `{suggestion}`?"),
            args.color,
        ),
        Err(e) => fail(&e.to_string(), args.color),
    }
}
