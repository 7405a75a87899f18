//! Per-definition bit layout.

use log::{debug, trace};

use parambits_core::{FieldDescriptor, FieldWidth, ParamDefinition};
use parambits_format::{BitRange, WORD_BITS, WORD_BYTES, word_mask};

use super::AnalyzeError;

/// Analysis result for one definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionLayout {
    /// Definition type name, written to the name table.
    pub name: String,
    /// Fragments in field order followed by the terminator, or empty when
    /// nothing is tracked.
    pub ranges: Vec<BitRange>,
    /// Fragments, terminator excluded.
    pub fragment_count: usize,
    /// Tracked fields; equals the last uid assigned.
    pub field_count: u32,
    /// Bit size of the whole record.
    pub total_bits: u64,
}

impl DefinitionLayout {
    /// True when no field is tracked. Empty layouts get no blob entry.
    pub fn is_empty(&self) -> bool {
        self.field_count == 0
    }

    /// Fragments without the terminator.
    pub fn fragments(&self) -> &[BitRange] {
        &self.ranges[..self.fragment_count]
    }
}

/// Whether a field gets bit-range records.
///
/// Only explicitly packed, non-padding fields of at least 2 bits are tracked.
/// Zero- and one-bit fields are skipped.
pub fn is_trackable(field: &FieldDescriptor, width: FieldWidth) -> bool {
    matches!(width, FieldWidth::Packed(bits) if bits > 1) && !field.field_type.is_padding()
}

/// Lay out every definition in order. The first failure aborts.
pub fn analyze(definitions: &[ParamDefinition]) -> Result<Vec<DefinitionLayout>, AnalyzeError> {
    definitions.iter().map(analyze_definition).collect()
}

/// Lay out one definition.
pub fn analyze_definition(definition: &ParamDefinition) -> Result<DefinitionLayout, AnalyzeError> {
    let mut cursor: u64 = 0;
    let mut uid: u32 = 0;
    let mut ranges = Vec::new();

    for field in &definition.fields {
        let width = field.width().map_err(|source| AnalyzeError::Field {
            definition: definition.param_type.clone(),
            field: field.name.clone(),
            source,
        })?;

        let overflow = || AnalyzeError::OffsetOverflow {
            definition: definition.param_type.clone(),
            field: field.name.clone(),
        };
        let end = cursor.checked_add(width.bits()).ok_or_else(overflow)?;

        if is_trackable(field, width) {
            uid = uid.checked_add(1).ok_or_else(|| AnalyzeError::UidOverflow {
                definition: definition.param_type.clone(),
            })?;
            push_fragments(&mut ranges, cursor, end, uid).ok_or_else(overflow)?;
        }

        cursor = end;
    }

    let fragment_count = ranges.len();
    if uid > 0 {
        ranges.push(BitRange::TERMINATOR);
    }

    debug!(
        "analyzed {}: {} tracked fields in {} fragments, {} bits",
        definition.param_type, uid, fragment_count, cursor
    );

    Ok(DefinitionLayout {
        name: definition.param_type.clone(),
        ranges,
        fragment_count,
        field_count: uid,
        total_bits: cursor,
    })
}

/// Split the bits `start..end` into word-confined fragments.
///
/// Returns `None` when a word's byte offset does not fit in `u32`.
fn push_fragments(ranges: &mut Vec<BitRange>, start: u64, end: u64, uid: u32) -> Option<()> {
    let mut bit = start;

    while bit < end {
        let word = bit / WORD_BITS;
        let shift = (bit % WORD_BITS) as u32;
        let size = (WORD_BITS - shift as u64).min(end - bit) as u32;
        let offset = u32::try_from(word * WORD_BYTES).ok()?;

        let range = BitRange::new(offset, uid, word_mask(shift, size));
        trace!(
            "  #{uid} word {offset:#06x} shift {shift} size {size} mask {:#018x}",
            range.mask
        );
        ranges.push(range);

        bit += size as u64;
    }

    Some(())
}
