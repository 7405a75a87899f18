use super::test_utils::blob;
use super::*;

fn diff_with(len: usize, changes: &[(usize, u64)]) -> Vec<u8> {
    let mut diff = vec![0u8; len];
    for &(offset, word) in changes {
        diff[offset..offset + 8].copy_from_slice(&word.to_le_bytes());
    }
    diff
}

fn word_at(bytes: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}

#[test]
fn single_bit_marks_whole_field() {
    let bytes = blob(&[(
        "EXAMPLE_PARAM_ST",
        &[
            BitRange::new(0, 1, word_mask(8, 7)),
            BitRange::new(0, 2, word_mask(15, 25)),
        ],
    )]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("EXAMPLE_PARAM_ST").unwrap();

    let diff = diff_with(8, &[(0, 1 << 20)]);
    let mask = run.touched_mask(&diff).unwrap();

    assert_eq!(word_at(&mask, 0), 0x0000_00ff_ffff_8000);
}

#[test]
fn untracked_changes_are_kept() {
    let bytes = blob(&[("T_ST", &[BitRange::new(0, 1, word_mask(8, 7))])]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("T_ST").unwrap();

    // Bit 0 is a one-bit flag with no bit-range record.
    let diff = diff_with(8, &[(0, 0b1)]);
    let mask = run.touched_mask(&diff).unwrap();

    assert_eq!(word_at(&mask, 0), 0b1);
}

#[test]
fn untracked_and_tracked_changes_combine() {
    let bytes = blob(&[("T_ST", &[BitRange::new(0, 1, word_mask(8, 7))])]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("T_ST").unwrap();

    let diff = diff_with(8, &[(0, 0x8000_0000_0000_0201)]);
    let mask = run.touched_mask(&diff).unwrap();

    assert_eq!(word_at(&mask, 0), 0x8000_0000_0000_7f01);
}

#[test]
fn split_field_expands_across_words() {
    let bytes = blob(&[(
        "SPLIT_ST",
        &[
            BitRange::new(0, 1, word_mask(60, 4)),
            BitRange::new(8, 1, word_mask(0, 6)),
            BitRange::new(8, 2, word_mask(6, 2)),
        ],
    )]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("SPLIT_ST").unwrap();

    // Only the high fragment of field 1 changed.
    let diff = diff_with(16, &[(8, 0b1)]);
    let mask = run.touched_mask(&diff).unwrap();

    assert_eq!(word_at(&mask, 0), word_mask(60, 4));
    assert_eq!(word_at(&mask, 8), word_mask(0, 6));
}

#[test]
fn several_fields_touched() {
    let bytes = blob(&[(
        "MULTI_ST",
        &[
            BitRange::new(0, 1, 0b0011),
            BitRange::new(0, 2, 0b1100),
            BitRange::new(0, 3, 0b11_0000),
        ],
    )]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("MULTI_ST").unwrap();

    let diff = diff_with(8, &[(0, 0b10_0001)]);
    let mask = run.touched_mask(&diff).unwrap();

    assert_eq!(word_at(&mask, 0), 0b11_0011);
}

#[test]
fn empty_run_returns_diff() {
    let bytes = blob(&[("EMPTY_ST", &[])]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("EMPTY_ST").unwrap();
    assert!(run.is_empty());

    let mask = run.touched_mask(&[0xff, 0, 0x10, 0]).unwrap();
    assert_eq!(mask, [0xff, 0, 0x10, 0]);
}

#[test]
fn short_record() {
    let bytes = blob(&[("SHORT_ST", &[BitRange::new(0, 1, word_mask(8, 7))])]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("SHORT_ST").unwrap();

    let mask = run.touched_mask(&[0, 0b1, 0, 0]).unwrap();
    assert_eq!(mask, [0, 0x7f, 0, 0]);
}

#[test]
fn fragment_bits_past_record_end_are_dropped() {
    // A 12-byte record: the field at bits 90..100 sits in the last partial
    // word, and its mask reaches past byte 11.
    let bytes = blob(&[("TAIL_ST", &[BitRange::new(8, 1, word_mask(26, 10))])]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("TAIL_ST").unwrap();

    let mut diff = vec![0u8; 12];
    diff[11] = 0x80;
    let mask = run.touched_mask(&diff).unwrap();

    assert_eq!(mask.len(), 12);
    assert_eq!(&mask[..8], &[0; 8]);
    assert_eq!(&mask[8..], &[0, 0, 0, 0xfc]);
}

#[test]
fn word_past_record_end() {
    let bytes = blob(&[("SHORT_ST", &[BitRange::new(8, 1, 0b11)])]);
    let metadata = Metadata::load(&bytes).unwrap();
    let run = metadata.find("SHORT_ST").unwrap();

    let err = run.touched_mask(&[0; 8]).unwrap_err();
    assert_eq!(err, FormatError::WordOutOfBounds { offset: 8, len: 8 });
    assert_eq!(
        err.to_string(),
        "word at offset 0x8 starts past the end of a 8-byte record"
    );

    assert!(run.touched_mask(&[0; 9]).is_ok());
}
