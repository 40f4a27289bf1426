//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("haystack-codegen")
        .about("Generate TypeScript declarations from Haystack defs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(kinds_command())
}

/// Generate declarations for a set of defs.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript declarations for defs")
        .after_help(
            r#"EXAMPLES:
  haystack-codegen generate -n defs.json -d site equip
  haystack-codegen generate -n defs.json -d ahu -f -
  haystack-codegen generate -n defs.json -d site --type-guards all"#,
        )
        .arg(defs_arg())
        .arg(namespace_arg())
        .arg(file_arg())
        .arg(type_guards_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// List value kinds and their runtime types.
pub fn kinds_command() -> Command {
    Command::new("kinds").about("List value kinds and the types they map to")
}
