use std::path::PathBuf;

use fhecat_registry::ResolvedType;

use super::output::{print_json, print_warnings};
use super::table_loader::require_registry;

pub struct TypesArgs {
    pub table: Option<PathBuf>,
    pub implemented_only: bool,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: TypesArgs) {
    let registry = require_registry(args.table.as_deref(), args.color);
    print_warnings(&registry, args.color);

    let types: Vec<ResolvedType<'_>> = registry
        .resolved()
        .filter(|t| !args.implemented_only || t.is_implemented())
        .collect();

    print_json(&types, args.compact);
}
