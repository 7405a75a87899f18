//! Blob assembly.

use log::info;

use parambits_format::{BitRange, ENTRY_SIZE, RANGE_SIZE};

use super::EmitError;
use super::link::LinkPlan;
use crate::analyze::DefinitionLayout;

/// Link analyzed layouts into one blob.
///
/// Layouts without tracked fields are skipped. Regions are written in
/// order: entry table (sentinel last), bit-range runs (each followed by a
/// terminator), NUL-terminated names.
pub fn emit(layouts: &[DefinitionLayout]) -> Result<Vec<u8>, EmitError> {
    let plan = LinkPlan::build(layouts)?;
    let sections = plan.sections()?;

    // Zero-filled: the sentinel and every terminator are already in place.
    let mut output = vec![0u8; sections.total_size as usize];

    let mut pos = sections.entries as usize;
    for entry in plan.entries(&sections) {
        output[pos..pos + ENTRY_SIZE].copy_from_slice(&entry.to_bytes());
        pos += ENTRY_SIZE;
    }
    pos += ENTRY_SIZE;
    debug_assert_eq!(pos, sections.ranges as usize);

    for run in plan.runs() {
        for range in run.fragments {
            output[pos..pos + RANGE_SIZE].copy_from_slice(&range.to_bytes());
            pos += RANGE_SIZE;
        }
        debug_assert!(BitRange::from_bytes(&output[pos..]).is_terminator());
        pos += RANGE_SIZE;
    }
    debug_assert_eq!(pos, sections.names as usize);

    for run in plan.runs() {
        let name = run.name.as_bytes();
        output[pos..pos + name.len()].copy_from_slice(name);
        pos += name.len() + 1;
    }
    debug_assert_eq!(pos, sections.total_size as usize);

    info!(
        "linked {} of {} definitions: {} bit ranges, {} bytes",
        plan.runs().len(),
        layouts.len(),
        plan.record_count(),
        sections.total_size
    );

    Ok(output)
}
