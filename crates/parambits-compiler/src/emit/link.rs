//! Offset linking for the metadata blob.

use parambits_format::{BitRange, ENTRY_SIZE, MetadataEntry, RANGE_SIZE};

use super::EmitError;
use crate::analyze::DefinitionLayout;

/// A definition that gets an entry, with its run placed relative to the
/// start of the bit-range table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannedRun<'a> {
    pub name: &'a str,
    /// Fragments, terminator excluded.
    pub fragments: &'a [BitRange],
    /// Byte offset of the run from the bit-range table base.
    pub relative_offset: u64,
}

impl PlannedRun<'_> {
    /// Records in the run, terminator included.
    pub fn record_count(&self) -> usize {
        self.fragments.len() + 1
    }
}

/// Result of the relative pass.
#[derive(Clone, Debug, Default)]
pub struct LinkPlan<'a> {
    runs: Vec<PlannedRun<'a>>,
    record_count: usize,
    name_bytes: usize,
}

/// Absolute region bases of a blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionOffsets {
    pub entries: u32,
    pub ranges: u32,
    pub names: u32,
    pub total_size: u32,
}

impl<'a> LinkPlan<'a> {
    /// Relative pass: place every non-empty layout's run.
    pub fn build(layouts: &'a [DefinitionLayout]) -> Result<Self, EmitError> {
        let mut plan = Self::default();

        for layout in layouts.iter().filter(|l| !l.is_empty()) {
            if layout.name.contains('\0') {
                return Err(EmitError::NameContainsNul {
                    name: layout.name.clone(),
                });
            }

            let run = PlannedRun {
                name: &layout.name,
                fragments: layout.fragments(),
                relative_offset: (plan.record_count * RANGE_SIZE) as u64,
            };
            plan.record_count += run.record_count();
            plan.name_bytes += layout.name.len() + 1;
            plan.runs.push(run);
        }

        Ok(plan)
    }

    pub fn runs(&self) -> &[PlannedRun<'a>] {
        &self.runs
    }

    /// Entry table records, sentinel included.
    pub fn entry_count(&self) -> usize {
        self.runs.len() + 1
    }

    /// Bit-range table records, terminators included.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Name table bytes, NULs included.
    pub fn name_bytes(&self) -> usize {
        self.name_bytes
    }

    /// Absolute pass: region bases.
    pub fn sections(&self) -> Result<SectionOffsets, EmitError> {
        let ranges = (self.entry_count() * ENTRY_SIZE) as u64;
        let names = ranges + (self.record_count * RANGE_SIZE) as u64;
        let total = names + self.name_bytes as u64;

        let total_size =
            u32::try_from(total).map_err(|_| EmitError::BlobTooLarge { size: total })?;

        // Both bases are below the total.
        Ok(SectionOffsets {
            entries: 0,
            ranges: ranges as u32,
            names: names as u32,
            total_size,
        })
    }

    /// Absolute entry records in table order, sentinel excluded.
    ///
    /// `sections` must come from [`Self::sections`] on the same plan.
    pub fn entries(&self, sections: &SectionOffsets) -> Vec<MetadataEntry> {
        let mut name_offset = sections.names;

        self.runs
            .iter()
            .map(|run| {
                let entry = MetadataEntry::new(
                    name_offset,
                    sections.ranges + run.relative_offset as u32,
                );
                name_offset += run.name.len() as u32 + 1;
                entry
            })
            .collect()
    }
}
