//! Hand-assembled blobs for reader tests.

use crate::record::{BitRange, ENTRY_SIZE, MetadataEntry, RANGE_SIZE};

/// Assemble a blob from `(name, fragments)` pairs, terminators added.
pub fn blob(defs: &[(&str, &[BitRange])]) -> Vec<u8> {
    let ranges_base = (defs.len() + 1) * ENTRY_SIZE;
    let record_count: usize = defs.iter().map(|(_, r)| r.len() + 1).sum();
    let names_base = ranges_base + record_count * RANGE_SIZE;

    let mut entries = Vec::new();
    let mut ranges = Vec::new();
    let mut names = Vec::new();

    for (name, run) in defs {
        let entry = MetadataEntry::new(
            (names_base + names.len()) as u32,
            (ranges_base + ranges.len()) as u32,
        );
        entries.extend_from_slice(&entry.to_bytes());

        for range in run.iter() {
            ranges.extend_from_slice(&range.to_bytes());
        }
        ranges.extend_from_slice(&BitRange::TERMINATOR.to_bytes());

        names.extend_from_slice(name.as_bytes());
        names.push(0);
    }
    entries.extend_from_slice(&MetadataEntry::SENTINEL.to_bytes());

    [entries, ranges, names].concat()
}
