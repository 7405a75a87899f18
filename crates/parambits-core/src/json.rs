//! JSON deserialization for definition files.
//!
//! A file holds either one definition object or an array of them. Field
//! attributes mirror the paramdef XML attributes: `bit_size` defaults to the
//! natural-width sentinel and `array_length` to 1.

use serde::Deserialize;

use crate::definition::ParamDefinition;
use crate::field::{FieldDescriptor, FieldType, NATURAL_WIDTH};

/// Error while loading definitions.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{param_type}.{field}: unknown field type '{type_name}'")]
    UnknownFieldType {
        param_type: String,
        field: String,
        type_name: String,
    },
}

/// Parse one definition object or an array of definitions.
pub fn parse_definitions(json: &str) -> Result<Vec<ParamDefinition>, DefinitionError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let raw: Vec<RawDefinition> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    raw.into_iter().map(ParamDefinition::try_from).collect()
}

impl ParamDefinition {
    /// Parse a single definition object.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let raw: RawDefinition = serde_json::from_str(json)?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefinition {
    param_type: String,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default = "natural_width")]
    bit_size: i32,
    #[serde(default = "single_element")]
    array_length: i32,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

fn natural_width() -> i32 {
    NATURAL_WIDTH
}

fn single_element() -> i32 {
    1
}

impl TryFrom<RawDefinition> for ParamDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(raw.fields.len());
        for field in raw.fields {
            let Some(field_type) = FieldType::from_name(&field.type_name) else {
                return Err(DefinitionError::UnknownFieldType {
                    param_type: raw.param_type,
                    field: field.name,
                    type_name: field.type_name,
                });
            };
            fields.push(FieldDescriptor {
                name: field.name,
                field_type,
                bit_size: field.bit_size,
                array_length: field.array_length,
                display_name: field.display_name,
                description: field.description,
            });
        }
        Ok(ParamDefinition::new(raw.param_type, fields))
    }
}
