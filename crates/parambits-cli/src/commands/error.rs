use std::io;
use std::path::PathBuf;

use parambits_compiler::{AnalyzeError, Error as CompileError};
use parambits_core::DefinitionError;
use parambits_format::FormatError;

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },

    #[error("no .json files found in '{}'", .path.display())]
    NoDefinitions { path: PathBuf },

    #[error("{}: {}", .path.display(), .source)]
    Definition {
        path: PathBuf,
        source: DefinitionError,
    },

    #[error("{}: {}", .path.display(), .source)]
    Blob { path: PathBuf, source: FormatError },

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}
