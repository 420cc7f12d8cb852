//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! hidden with `.hide(true)` where a flag has no effect.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Alternate literal table (--table).
pub fn table_arg() -> Arg {
    Arg::new("table")
        .short('t')
        .long("table")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Type table JSON file (default: builtin table)")
}

/// Type or alias name (positional).
pub fn type_name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .required(true)
        .help("Type or alias name, e.g. Uint8 or Address")
}

/// Hex-encoded ciphertext handle (positional).
pub fn handle_hex_arg() -> Arg {
    Arg::new("handle")
        .value_name("HEX")
        .required(true)
        .help("Ciphertext handle as hex, with or without 0x prefix")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Compact JSON output (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Sharded matrix generation (--parallel).
pub fn parallel_arg() -> Arg {
    Arg::new("parallel")
        .long("parallel")
        .action(ArgAction::SetTrue)
        .help("Generate matrix shards on a thread pool")
}

/// Restrict to types with operators (--implemented-only).
pub fn implemented_only_arg() -> Arg {
    Arg::new("implemented_only")
        .long("implemented-only")
        .action(ArgAction::SetTrue)
        .help("Only list types that support at least one operator")
}
