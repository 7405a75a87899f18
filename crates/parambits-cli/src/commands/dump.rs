use std::fs;
use std::path::PathBuf;

use parambits_format::{Colors, Metadata, dump};

use super::{CliError, fail};

pub struct DumpArgs {
    pub blob: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(text) => print!("{}", text),
        Err(err) => fail(err),
    }
}

/// Load a blob and render it.
pub fn execute(args: &DumpArgs) -> Result<String, CliError> {
    let bytes = fs::read(&args.blob).map_err(|source| CliError::Read {
        path: args.blob.clone(),
        source,
    })?;
    let metadata = Metadata::load(&bytes).map_err(|source| CliError::Blob {
        path: args.blob.clone(),
        source,
    })?;

    Ok(dump(&metadata, Colors::new(args.color)))
}
