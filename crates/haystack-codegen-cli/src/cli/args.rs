//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Default output path for generated declarations.
pub const DEFAULT_OUTPUT: &str = "./src/haystack/types.ts";

/// Seed def names (-d/--defs).
pub fn defs_arg() -> Arg {
    Arg::new("defs")
        .short('d')
        .long("defs")
        .value_name("DEF")
        .num_args(1..)
        .action(ArgAction::Append)
        .required(true)
        .help("Defs to generate declarations for")
}

/// JSON defs file (-n/--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .short('n')
        .long("namespace")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON defs file (Hayson grid or array of dicts)")
}

/// Output file (-f/--file).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_OUTPUT)
        .help("Output file, or '-' for stdout")
}

/// Type guard policy (--type-guards).
pub fn type_guards_arg() -> Arg {
    Arg::new("type_guards")
        .long("type-guards")
        .value_name("POLICY")
        .default_value("entity")
        .value_parser(["entity", "all"])
        .help("Which defs get a type guard")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
