//! Binary field-layout metadata format for parambits.
//!
//! This crate contains:
//! - Record definitions for the three blob regions (entries, bit ranges, names)
//! - A validating read view implementing the consumer contract
//! - Touched-field mask expansion over record diffs
//! - A human-readable dump for debugging
//!
//! Blob layout (all integers little-endian, no padding):
//!
//! ```text
//! Entry Table     MetadataEntry × (n + 1)   name_offset u32 | ranges_offset u32
//! BitRange Table  BitRange × m              offset u32 | uid u32 | mask u64
//! Name Table      UTF-8 name + NUL, × n
//! ```
//!
//! Every offset is absolute from the start of the blob. The entry table ends
//! with an all-zero sentinel; each bit-range run ends with a uid-0 terminator.

mod dump;
mod error;
mod mask;
mod metadata;
mod record;

#[cfg(test)]
mod mask_tests;
#[cfg(test)]
mod test_utils;

pub use dump::{Colors, dump};
pub use error::FormatError;
pub use metadata::{EntryView, FieldRanges, Metadata, RangeRun};
pub use record::{BitRange, ENTRY_SIZE, MetadataEntry, RANGE_SIZE, WORD_BITS, WORD_BYTES, word_mask};
