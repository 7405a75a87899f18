//! Definition file loading.
//!
//! Paths may be files or directories; a directory contributes its `*.json`
//! files sorted by path. Definitions keep the order in which they were found.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use parambits_core::{ParamDefinition, parse_definitions};

use super::CliError;

/// Load every definition under `paths`, with field names made unique.
pub fn load_definitions(paths: &[PathBuf]) -> Result<Vec<ParamDefinition>, CliError> {
    let mut definitions = Vec::new();

    for path in paths {
        for file in definition_files(path)? {
            let content = fs::read_to_string(&file).map_err(|source| CliError::Read {
                path: file.clone(),
                source,
            })?;
            let mut parsed = parse_definitions(&content).map_err(|source| {
                CliError::Definition {
                    path: file.clone(),
                    source,
                }
            })?;

            for definition in &mut parsed {
                let renamed = definition.uniquify_field_names();
                if renamed > 0 {
                    warn!(
                        "{}: renamed {} duplicate field names",
                        definition.param_type, renamed
                    );
                }
            }

            debug!("loaded {} definitions from '{}'", parsed.len(), file.display());
            definitions.append(&mut parsed);
        }
    }

    Ok(definitions)
}

/// Files to read for one path argument.
fn definition_files(path: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let read_error = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(read_error)? {
        let file = entry.map_err(read_error)?.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }

    if files.is_empty() {
        return Err(CliError::NoDefinitions {
            path: path.to_path_buf(),
        });
    }

    // Sort for deterministic ordering
    files.sort();
    Ok(files)
}
