//! Command builders for the CLI.
//!
//! Every command that reads the type table accepts the same output flags;
//! flags a command ignores are accepted but hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden output flags (for commands that print no JSON).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
}

/// Add hidden listing flags (for commands that do not filter types).
fn with_hidden_listing_args(cmd: Command) -> Command {
    cmd.arg(implemented_only_arg().hide(true))
        .arg(parallel_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fhecat")
        .about("Capability registry for homomorphically encrypted types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(types_command())
        .subcommand(resolve_command())
        .subcommand(ops_command())
        .subcommand(matrix_command())
        .subcommand(handle_command())
}

/// Validate a type table.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a type table")
        .after_help(
            r#"EXAMPLES:
  fhecat check                        # validate the builtin table
  fhecat check -t types.json          # validate another table
  fhecat check --strict               # fail on warnings too"#,
        )
        .arg(table_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_hidden_listing_args(with_hidden_output_args(cmd))
}

/// List resolved types for code generation.
pub fn types_command() -> Command {
    let cmd = Command::new("types")
        .about("List every type and alias, resolved")
        .after_help(
            r#"EXAMPLES:
  fhecat types                        # all 120 builtin entries
  fhecat types --implemented-only     # entries with operators
  fhecat types --compact | jq         # one-line JSON"#,
        )
        .arg(table_arg())
        .arg(implemented_only_arg())
        .arg(compact_arg())
        .arg(color_arg());

    cmd.arg(strict_arg().hide(true))
        .arg(parallel_arg().hide(true))
}

/// Resolve one type or alias name.
pub fn resolve_command() -> Command {
    let cmd = Command::new("resolve")
        .about("Resolve a type or alias name")
        .after_help(
            r#"EXAMPLES:
  fhecat resolve Address              # alias of Uint160
  fhecat resolve Uint8 --compact"#,
        )
        .arg(type_name_arg())
        .arg(table_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_listing_args(cmd.arg(strict_arg().hide(true)))
}

/// Show the operator vocabulary.
pub fn ops_command() -> Command {
    Command::new("ops")
        .about("Show every operator with its operand roles")
        .arg(compact_arg())
}

/// Generate the operator test matrix.
pub fn matrix_command() -> Command {
    let cmd = Command::new("matrix")
        .about("Generate the operator test matrix")
        .after_help(
            r#"EXAMPLES:
  fhecat matrix                       # builtin matrix
  fhecat matrix --parallel            # same output, sharded
  fhecat matrix -t broken.json        # best-effort matrix of an invalid table"#,
        )
        .arg(table_arg())
        .arg(parallel_arg())
        .arg(compact_arg())
        .arg(color_arg());

    cmd.arg(strict_arg().hide(true))
        .arg(implemented_only_arg().hide(true))
}

/// Decode a ciphertext handle.
pub fn handle_command() -> Command {
    let cmd = Command::new("handle")
        .about("Decode a ciphertext handle and look up its type")
        .after_help(
            r#"EXAMPLES:
  fhecat handle "$HANDLE"             # 64 hex digits; byte 30 is the type id"#,
        )
        .arg(handle_hex_arg())
        .arg(table_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_listing_args(cmd.arg(strict_arg().hide(true)))
}
