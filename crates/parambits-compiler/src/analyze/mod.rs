//! Bit-layout analysis of parameter definitions.
//!
//! Each definition is analyzed on its own: fields are walked in order with a
//! bit cursor, and every trackable field is split into fragments that never
//! cross a 64-bit word boundary.

mod error;
mod layout;


pub use error::AnalyzeError;
pub use layout::{DefinitionLayout, analyze, analyze_definition, is_trackable};
