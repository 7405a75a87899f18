use std::fs;
use std::path::PathBuf;

use log::info;
use parambits_compiler::compile;

use super::loader::load_definitions;
use super::{CliError, fail};

pub struct BuildArgs {
    pub defs: Vec<PathBuf>,
    pub output: PathBuf,
}

pub fn run(args: BuildArgs) {
    if let Err(err) = execute(&args) {
        fail(err);
    }
}

/// Compile and write the blob. Returns the number of bytes written.
///
/// The output file is only touched after compilation succeeded.
pub fn execute(args: &BuildArgs) -> Result<usize, CliError> {
    let definitions = load_definitions(&args.defs)?;
    let blob = compile(&definitions)?;

    fs::write(&args.output, &blob).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;

    info!(
        "wrote {} bytes for {} definitions to '{}'",
        blob.len(),
        definitions.len(),
        args.output.display()
    );
    Ok(blob.len())
}
