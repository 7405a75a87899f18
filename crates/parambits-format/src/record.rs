//! Fixed-size records of the metadata blob.
//!
//! Records are encoded field by field; in-memory layout never leaks into the
//! byte format.

/// Encoded size of a [`MetadataEntry`].
pub const ENTRY_SIZE: usize = 8;

/// Encoded size of a [`BitRange`].
pub const RANGE_SIZE: usize = 16;

/// Bits per mask word.
pub const WORD_BITS: u64 = 64;

/// Bytes per mask word.
pub const WORD_BYTES: u64 = 8;

/// Entry table record (8 bytes).
///
/// - 0-3: absolute offset of the NUL-terminated definition name (0 = sentinel)
/// - 4-7: absolute offset of the definition's first [`BitRange`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetadataEntry {
    pub name_offset: u32,
    pub ranges_offset: u32,
}

impl MetadataEntry {
    /// Terminates the entry table.
    pub const SENTINEL: Self = Self {
        name_offset: 0,
        ranges_offset: 0,
    };

    pub fn new(name_offset: u32, ranges_offset: u32) -> Self {
        Self {
            name_offset,
            ranges_offset,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.name_offset == 0
    }

    /// Decode from 8 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= ENTRY_SIZE, "entry too short");

        Self {
            name_offset: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            ranges_offset: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Encode to 8 bytes.
    pub fn to_bytes(&self) -> [u8; ENTRY_SIZE] {
        let mut bytes = [0u8; ENTRY_SIZE];
        bytes[0..4].copy_from_slice(&self.name_offset.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.ranges_offset.to_le_bytes());
        bytes
    }
}

/// Bit-range record (16 bytes): one fragment of a tracked field.
///
/// - 0-3: byte offset of the 64-bit word holding the fragment
/// - 4-7: field uid within its definition (0 = terminator)
/// - 8-15: mask of the fragment's bits inside that word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitRange {
    pub offset: u32,
    pub uid: u32,
    pub mask: u64,
}

impl BitRange {
    /// Terminates a definition's run.
    pub const TERMINATOR: Self = Self {
        offset: 0,
        uid: 0,
        mask: 0,
    };

    pub fn new(offset: u32, uid: u32, mask: u64) -> Self {
        Self { offset, uid, mask }
    }

    pub fn is_terminator(&self) -> bool {
        self.uid == 0
    }

    /// Number of bits selected by the mask.
    pub fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Bit position of the fragment's first bit within the whole record.
    pub fn start_bit(&self) -> u64 {
        self.offset as u64 * 8 + self.mask.trailing_zeros() as u64
    }

    /// Decode from 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= RANGE_SIZE, "bit range too short");

        let mut mask = [0u8; 8];
        mask.copy_from_slice(&bytes[8..16]);

        Self {
            offset: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            uid: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            mask: u64::from_le_bytes(mask),
        }
    }

    /// Encode to 16 bytes.
    pub fn to_bytes(&self) -> [u8; RANGE_SIZE] {
        let mut bytes = [0u8; RANGE_SIZE];
        bytes[0..4].copy_from_slice(&self.offset.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.uid.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.mask.to_le_bytes());
        bytes
    }
}

/// Mask of `size` consecutive bits starting at bit `shift` of a 64-bit word.
///
/// `shift + size` must not exceed 64. A full-word run is special-cased so no
/// shift by 64 ever happens.
pub fn word_mask(shift: u32, size: u32) -> u64 {
    debug_assert!(shift as u64 + size as u64 <= WORD_BITS);

    let run = match size {
        0 => 0,
        64 => u64::MAX,
        n => (1u64 << n) - 1,
    };
    run << shift
}
