//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("parambits")
        .about("Bit-layout metadata for parameter definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(build_command())
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Compile definitions into a metadata blob.
pub fn build_command() -> Command {
    Command::new("build")
        .about("Compile definitions into a metadata blob")
        .override_usage(
            "\
  parambits build <DEFS>...
  parambits build <DEFS>... -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  parambits build defs/                     # every defs/*.json, sorted by path
  parambits build a.json b.json -o out.bin  # explicit files and output
  parambits -v build defs/                  # log a per-run summary"#,
        )
        .arg(defs_arg())
        .arg(output_arg())
}

/// Analyze definitions without writing a blob.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Analyze definitions and summarize their tracked fields")
        .override_usage(
            "\
  parambits check <DEFS>...
  parambits check <DEFS>... --json",
        )
        .after_help(
            r#"EXAMPLES:
  parambits check defs/              # one line per definition
  parambits check defs/ --json       # machine-readable summary
  parambits -vv check EQUIP.json     # also log each definition's layout"#,
        )
        .arg(defs_arg())
        .arg(json_arg())
}

/// Show the contents of a metadata blob.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the contents of a metadata blob")
        .override_usage("  parambits dump <BLOB> [--color <WHEN>]")
        .after_help(
            r#"EXAMPLES:
  parambits dump param_fields.bin                 # entries and bit ranges
  parambits dump param_fields.bin --color never   # plain text"#,
        )
        .arg(blob_arg())
        .arg(color_arg())
}
