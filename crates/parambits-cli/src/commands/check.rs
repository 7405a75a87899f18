use std::fmt::Write as _;
use std::path::PathBuf;

use parambits_compiler::{DefinitionLayout, analyze};
use serde::Serialize;

use super::loader::load_definitions;
use super::{CliError, fail};

pub struct CheckArgs {
    pub defs: Vec<PathBuf>,
    pub json: bool,
}

/// Per-definition line of the check report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DefinitionSummary {
    pub name: String,
    pub tracked_fields: u32,
    pub fragments: usize,
    pub total_bits: u64,
}

impl From<&DefinitionLayout> for DefinitionSummary {
    fn from(layout: &DefinitionLayout) -> Self {
        Self {
            name: layout.name.clone(),
            tracked_fields: layout.field_count,
            fragments: layout.fragment_count,
            total_bits: layout.total_bits,
        }
    }
}

pub fn run(args: CheckArgs) {
    let summaries = match execute(&args) {
        Ok(summaries) => summaries,
        Err(err) => fail(err),
    };

    if args.json {
        match serde_json::to_string_pretty(&summaries) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render(&summaries));
    }
}

/// Load and analyze without emitting.
pub fn execute(args: &CheckArgs) -> Result<Vec<DefinitionSummary>, CliError> {
    let definitions = load_definitions(&args.defs)?;
    let layouts = analyze(&definitions)?;
    Ok(layouts.iter().map(DefinitionSummary::from).collect())
}

/// One aligned line per definition.
pub fn render(summaries: &[DefinitionSummary]) -> String {
    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for s in summaries {
        writeln!(
            out,
            "{:<width$}  {} tracked, {} fragments, {} bits",
            s.name, s.tracked_fields, s.fragments, s.total_bits
        )
        .unwrap();
    }

    out
}
