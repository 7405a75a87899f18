//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Definition files or directories (positional, one or more).
pub fn defs_arg() -> Arg {
    Arg::new("defs")
        .value_name("DEFS")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Definition JSON files or directories of *.json files")
}

/// Output blob path (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .default_value("param_fields.bin")
        .help("Where to write the metadata blob")
}

/// Metadata blob to read (positional).
pub fn blob_arg() -> Arg {
    Arg::new("blob")
        .value_name("BLOB")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Metadata blob file")
}

/// Machine-readable summary (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the summary as JSON")
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

/// Log verbosity (-v/--verbose, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug); RUST_LOG overrides")
}
