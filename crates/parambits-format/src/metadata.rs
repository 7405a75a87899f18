//! Validating read view over a metadata blob.
//!
//! Mirrors what a runtime consumer does: scan the entry table from offset 0
//! until the sentinel, resolve each name and bit-range run through absolute
//! offsets, and read each run until its uid-0 terminator. All of it is
//! checked once in [`Metadata::load`], so the accessors do not fail.

use super::error::FormatError;
use super::record::{BitRange, ENTRY_SIZE, MetadataEntry, RANGE_SIZE};

/// A loaded metadata blob.
#[derive(Clone, Debug)]
pub struct Metadata<'a> {
    bytes: &'a [u8],
    entries: Vec<EntryView<'a>>,
}

/// One definition in the entry table.
#[derive(Clone, Copy, Debug)]
pub struct EntryView<'a> {
    pub index: usize,
    pub entry: MetadataEntry,
    pub name: &'a str,
    pub ranges: RangeRun<'a>,
}

/// The bit ranges of one definition, terminator excluded.
#[derive(Clone, Copy, Debug)]
pub struct RangeRun<'a> {
    offset: u32,
    bytes: &'a [u8],
}

/// All fragments of one tracked field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRanges {
    pub uid: u32,
    pub ranges: Vec<BitRange>,
}

impl<'a> Metadata<'a> {
    /// Validate and index a blob.
    pub fn load(bytes: &'a [u8]) -> Result<Self, FormatError> {
        let mut entries = Vec::new();

        for index in 0.. {
            let start = index * ENTRY_SIZE;
            let Some(raw) = bytes.get(start..start + ENTRY_SIZE) else {
                return Err(FormatError::UnterminatedEntryTable { index });
            };

            let entry = MetadataEntry::from_bytes(raw);
            if entry.is_sentinel() {
                if entry.ranges_offset != 0 {
                    return Err(FormatError::DirtySentinel {
                        index,
                        ranges_offset: entry.ranges_offset,
                    });
                }
                break;
            }
            if entry.ranges_offset == 0 {
                return Err(FormatError::MissingRanges { index });
            }

            let name = read_name(bytes, index, entry.name_offset)?;
            let ranges = read_run(bytes, index, entry.ranges_offset)?;
            entries.push(EntryView {
                index,
                entry,
                name,
                ranges,
            });
        }

        Ok(Self { bytes, entries })
    }

    /// Raw blob bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of definitions (sentinel excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EntryView<'a>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &EntryView<'a>> {
        self.entries.iter()
    }

    /// Bit ranges of the first definition named `name`.
    pub fn find(&self, name: &str) -> Option<RangeRun<'a>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.ranges)
    }
}

impl<'a> RangeRun<'a> {
    /// Absolute offset of the first record.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.bytes.len() / RANGE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<BitRange> {
        let start = index * RANGE_SIZE;
        self.bytes
            .get(start..start + RANGE_SIZE)
            .map(BitRange::from_bytes)
    }

    pub fn iter(&self) -> impl Iterator<Item = BitRange> + 'a {
        self.bytes.chunks_exact(RANGE_SIZE).map(BitRange::from_bytes)
    }

    /// Group consecutive fragments sharing a uid.
    pub fn fields(&self) -> Vec<FieldRanges> {
        let mut fields: Vec<FieldRanges> = Vec::new();
        for range in self.iter() {
            match fields.last_mut() {
                Some(field) if field.uid == range.uid => field.ranges.push(range),
                _ => fields.push(FieldRanges {
                    uid: range.uid,
                    ranges: vec![range],
                }),
            }
        }
        fields
    }
}

impl FieldRanges {
    /// Total bits across all fragments.
    pub fn width(&self) -> u64 {
        self.ranges.iter().map(|r| r.width() as u64).sum()
    }

    /// First bit of the field within its record.
    pub fn start_bit(&self) -> u64 {
        self.ranges.first().map_or(0, BitRange::start_bit)
    }
}

fn read_name(bytes: &[u8], index: usize, offset: u32) -> Result<&str, FormatError> {
    let Some(tail) = bytes.get(offset as usize..) else {
        return Err(FormatError::NameOutOfBounds { index, offset });
    };
    if tail.is_empty() {
        return Err(FormatError::NameOutOfBounds { index, offset });
    }

    let Some(len) = tail.iter().position(|&b| b == 0) else {
        return Err(FormatError::UnterminatedName { index, offset });
    };

    std::str::from_utf8(&tail[..len]).map_err(|_| FormatError::InvalidName { index, offset })
}

fn read_run(bytes: &[u8], index: usize, offset: u32) -> Result<RangeRun<'_>, FormatError> {
    let start = offset as usize;
    let mut pos = start;

    loop {
        let Some(raw) = bytes.get(pos..pos + RANGE_SIZE) else {
            return Err(FormatError::UnterminatedRun { index, offset });
        };
        if BitRange::from_bytes(raw).is_terminator() {
            break;
        }
        pos += RANGE_SIZE;
    }

    Ok(RangeRun {
        offset,
        bytes: &bytes[start..pos],
    })
}
