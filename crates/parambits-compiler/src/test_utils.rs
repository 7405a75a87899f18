//! Test utilities: definition fixtures and layout rendering.

use std::fmt::Write as _;

use parambits_core::{FieldDescriptor, FieldType, ParamDefinition, parse_definitions};
use parambits_format::BitRange;

use crate::analyze::DefinitionLayout;

/// `EXAMPLE_PARAM_ST`: an 8-bit pad, 7- and 25-bit packed fields, a plain float.
pub fn example_definition() -> ParamDefinition {
    ParamDefinition::new(
        "EXAMPLE_PARAM_ST",
        vec![
            FieldDescriptor::bits("pad8", FieldType::Dummy8, 8),
            FieldDescriptor::bits("bitsA", FieldType::U32, 7),
            FieldDescriptor::bits("bitsB", FieldType::U32, 25),
            FieldDescriptor::new("normalFloat", FieldType::F32),
        ],
    )
}

/// Parse a JSON fixture that is known to be valid.
pub fn definitions(json: &str) -> Vec<ParamDefinition> {
    parse_definitions(json).expect("fixture must parse")
}

/// A hand-built layout; the terminator is appended when `fragments` is non-empty.
pub fn layout(name: &str, fragments: &[BitRange]) -> DefinitionLayout {
    let mut ranges = fragments.to_vec();
    if !ranges.is_empty() {
        ranges.push(BitRange::TERMINATOR);
    }
    DefinitionLayout {
        name: name.to_string(),
        ranges,
        fragment_count: fragments.len(),
        field_count: fragments.last().map_or(0, |r| r.uid),
        total_bits: 64,
    }
}

/// One line per range record, terminator included.
pub fn render_layout(layout: &DefinitionLayout) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{}: {} fields, {} fragments, {} bits",
        layout.name, layout.field_count, layout.fragment_count, layout.total_bits
    )
    .unwrap();
    for range in &layout.ranges {
        writeln!(
            out,
            "  #{} {:#06x} {:#018x}",
            range.uid, range.offset, range.mask
        )
        .unwrap();
    }
    out
}

pub mod strategies {
    use parambits_core::{FieldDescriptor, FieldType, ParamDefinition};
    use proptest::prelude::*;

    const PACKABLE: [FieldType; 3] = [FieldType::U8, FieldType::U16, FieldType::U32];
    const ARRAYS: [FieldType; 3] = [FieldType::Dummy8, FieldType::FixStr, FieldType::FixStrW];

    fn natural() -> impl Strategy<Value = FieldDescriptor> {
        prop::sample::select(FieldType::ALL.to_vec()).prop_map(|t| FieldDescriptor::new("n", t))
    }

    fn array() -> impl Strategy<Value = FieldDescriptor> {
        (prop::sample::select(ARRAYS.to_vec()), 0..40i32)
            .prop_map(|(t, len)| FieldDescriptor::array("a", t, len))
    }

    fn packed() -> impl Strategy<Value = FieldDescriptor> {
        prop::sample::select(PACKABLE.to_vec())
            .prop_flat_map(|t| (Just(t), 0..=8 * t.element_size() as i32))
            .prop_map(|(t, bits)| FieldDescriptor::bits("b", t, bits))
    }

    fn padding() -> impl Strategy<Value = FieldDescriptor> {
        (0..200i32).prop_map(|bits| FieldDescriptor::bits("pad", FieldType::Dummy8, bits))
    }

    /// Well-formed field, biased toward bitfields.
    pub fn field() -> impl Strategy<Value = FieldDescriptor> {
        prop_oneof![
            2 => natural(),
            1 => array(),
            4 => packed(),
            1 => padding(),
        ]
    }

    pub fn definition() -> impl Strategy<Value = ParamDefinition> {
        ("[A-Z][A-Z_]{0,11}_ST", prop::collection::vec(field(), 0..24))
            .prop_map(|(name, fields)| ParamDefinition::new(name, fields))
    }

    pub fn definitions() -> impl Strategy<Value = Vec<ParamDefinition>> {
        prop::collection::vec(definition(), 0..8)
    }
}
