//! parambits compiler: bit-layout analysis and metadata blob linking.
//!
//! This crate provides the pipeline from parameter definitions to blob bytes:
//! - `analyze` - per-definition bit layout (uids, word fragments, masks)
//! - `emit` - two-pass linking of analyzed layouts into one blob

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod emit;

#[cfg(test)]
mod test_utils;

use parambits_core::ParamDefinition;

pub use analyze::{AnalyzeError, DefinitionLayout, analyze, analyze_definition};
pub use emit::{EmitError, LinkPlan, SectionOffsets, emit};

/// Errors that can occur while compiling definitions into a blob.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Analyze every definition and link the results into one blob.
///
/// Nothing is produced unless every definition analyzes and the whole blob
/// fits the 32-bit offset range.
pub fn compile(definitions: &[ParamDefinition]) -> Result<Vec<u8>> {
    let layouts = analyze(definitions)?;
    Ok(emit(&layouts)?)
}
