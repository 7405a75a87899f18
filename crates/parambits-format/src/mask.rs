//! Touched-field mask expansion.
//!
//! Given the XOR diff between two versions of a record, a consumer needs to
//! know which *fields* changed, not just which bits: reverting one field must
//! restore all of its bits, including fragments in other words whose bits
//! happen to be equal. The expansion keeps every changed bit (untracked
//! fields included) and adds every fragment of each tracked field with at
//! least one changed bit.

use super::error::FormatError;
use super::metadata::RangeRun;
use super::record::{BitRange, WORD_BYTES};

impl RangeRun<'_> {
    /// Expand a record diff to whole-field masks.
    ///
    /// The result has the same length as `diff`. A fragment word may run
    /// past the end of the record; the missing bytes read as zero and are
    /// never written. A word starting past the end is an error.
    pub fn touched_mask(&self, diff: &[u8]) -> Result<Vec<u8>, FormatError> {
        let mut mask = diff.to_vec();

        for field in self.fields() {
            let mut touched = false;
            for range in &field.ranges {
                touched |= (read_word(diff, range)? & range.mask) != 0;
            }
            if touched {
                for range in &field.ranges {
                    let word = read_word(&mask, range)? | range.mask;
                    write_word(&mut mask, range, word)?;
                }
            }
        }

        Ok(mask)
    }
}

/// Bytes of the word at `range.offset` that lie inside the record.
fn word_span(len: usize, range: &BitRange) -> Result<std::ops::Range<usize>, FormatError> {
    let start = range.offset as usize;
    if start >= len {
        return Err(FormatError::WordOutOfBounds {
            offset: range.offset,
            len,
        });
    }
    Ok(start..len.min(start + WORD_BYTES as usize))
}

fn read_word(bytes: &[u8], range: &BitRange) -> Result<u64, FormatError> {
    let span = word_span(bytes.len(), range)?;
    let mut word = [0u8; 8];
    word[..span.len()].copy_from_slice(&bytes[span]);
    Ok(u64::from_le_bytes(word))
}

fn write_word(bytes: &mut [u8], range: &BitRange, word: u64) -> Result<(), FormatError> {
    let span = word_span(bytes.len(), range)?;
    let len = span.len();
    bytes[span].copy_from_slice(&word.to_le_bytes()[..len]);
    Ok(())
}
