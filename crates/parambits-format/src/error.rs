/// Errors from loading or using a metadata blob.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("entry table is not terminated: entry {index} runs past the end of the blob")]
    UnterminatedEntryTable { index: usize },

    #[error("entry {index}: sentinel has non-zero bit-range offset {ranges_offset:#x}")]
    DirtySentinel { index: usize, ranges_offset: u32 },

    #[error("entry {index}: bit-range offset is zero")]
    MissingRanges { index: usize },

    #[error("entry {index}: name offset {offset:#x} is out of bounds")]
    NameOutOfBounds { index: usize, offset: u32 },

    #[error("entry {index}: name at {offset:#x} is not NUL-terminated")]
    UnterminatedName { index: usize, offset: u32 },

    #[error("entry {index}: name at {offset:#x} is not valid UTF-8")]
    InvalidName { index: usize, offset: u32 },

    #[error("entry {index}: bit-range run at {offset:#x} has no terminator")]
    UnterminatedRun { index: usize, offset: u32 },

    #[error("word at offset {offset:#x} starts past the end of a {len}-byte record")]
    WordOutOfBounds { offset: u32, len: usize },
}
