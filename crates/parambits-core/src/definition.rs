//! Parameter definitions: a named, ordered list of fields.

use std::collections::HashMap;

use crate::field::FieldDescriptor;

/// A parameter definition describing one fixed-size record type.
///
/// Field order is significant: fields are laid out back to back in
/// declaration order, bitfields included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDefinition {
    /// Type identifier (e.g. `EQUIP_PARAM_WEAPON_ST`), used as the blob name.
    pub param_type: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ParamDefinition {
    pub fn new(param_type: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            param_type: param_type.into(),
            fields,
        }
    }

    /// Look up a field by internal name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Make internal field names unique by numbering repeats.
    ///
    /// Names that occur once are left alone. When a name repeats, its first
    /// occurrence becomes `name_0` and later ones `name_1`, `name_2`, ...
    /// Returns the number of fields renamed.
    pub fn uniquify_field_names(&mut self) -> usize {
        let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
        let mut renamed = 0;

        for idx in 0..self.fields.len() {
            let name = self.fields[idx].name.clone();
            let same_name = seen.entry(name).or_default();

            if same_name.len() == 1 {
                self.fields[same_name[0]].name.push_str("_0");
                renamed += 1;
            }
            if !same_name.is_empty() {
                let suffix = same_name.len();
                self.fields[idx].name.push_str(&format!("_{suffix}"));
                renamed += 1;
            }

            same_name.push(idx);
        }

        renamed
    }
}
