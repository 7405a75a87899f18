#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for parameter definitions.
//!
//! A parameter definition ("paramdef") describes the fields of a fixed-size
//! binary record: an ordered list of typed fields, some of which are packed
//! into bitfields sharing a storage unit.
//!
//! Two layers:
//! - **Model**: [`ParamDefinition`], [`FieldDescriptor`], [`FieldType`]
//! - **Loading**: JSON definition files (see [`parse_definitions`])

mod definition;
mod field;
mod json;

#[cfg(test)]
mod definition_tests;

pub use definition::ParamDefinition;
pub use field::{FieldDescriptor, FieldError, FieldType, FieldWidth, NATURAL_WIDTH};
pub use json::{DefinitionError, parse_definitions};
