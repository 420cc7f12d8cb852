//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::handle::HandleArgs;
use crate::commands::matrix::MatrixArgs;
use crate::commands::ops::OpsArgs;
use crate::commands::resolve::ResolveArgs;
use crate::commands::types::TypesArgs;

pub struct CheckParams {
    pub table: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table: m.get_one::<PathBuf>("table").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            table: p.table,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TypesParams {
    pub table: Option<PathBuf>,
    pub implemented_only: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table: m.get_one::<PathBuf>("table").cloned(),
            implemented_only: m.get_flag("implemented_only"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            table: p.table,
            implemented_only: p.implemented_only,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ResolveParams {
    pub name: String,
    pub table: Option<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            table: m.get_one::<PathBuf>("table").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            name: p.name,
            table: p.table,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct OpsParams {
    pub compact: bool,
}

impl OpsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            compact: m.get_flag("compact"),
        }
    }
}

impl From<OpsParams> for OpsArgs {
    fn from(p: OpsParams) -> Self {
        Self { compact: p.compact }
    }
}

pub struct MatrixParams {
    pub table: Option<PathBuf>,
    pub parallel: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl MatrixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table: m.get_one::<PathBuf>("table").cloned(),
            parallel: m.get_flag("parallel"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<MatrixParams> for MatrixArgs {
    fn from(p: MatrixParams) -> Self {
        Self {
            table: p.table,
            parallel: p.parallel,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct HandleParams {
    pub handle: String,
    pub table: Option<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl HandleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            handle: m.get_one::<String>("handle").cloned().unwrap_or_default(),
            table: m.get_one::<PathBuf>("table").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<HandleParams> for HandleArgs {
    fn from(p: HandleParams) -> Self {
        Self {
            handle: p.handle,
            table: p.table,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
