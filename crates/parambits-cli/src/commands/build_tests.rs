use std::fs;

use indoc::indoc;
use parambits_format::Metadata;
use tempfile::tempdir;

use super::CliError;
use super::build::{BuildArgs, execute};
use super::dump::{self, DumpArgs};

const DEFS: &str = indoc! {r#"
    [
        {
            "param_type": "EXAMPLE_PARAM_ST",
            "fields": [
                { "name": "pad8", "type": "dummy8", "bit_size": 8 },
                { "name": "bitsA", "type": "u32", "bit_size": 7 },
                { "name": "bitsB", "type": "u32", "bit_size": 25 },
                { "name": "normalFloat", "type": "f32" }
            ]
        },
        {
            "param_type": "PLAIN_PARAM_ST",
            "fields": [{ "name": "id", "type": "s32" }]
        }
    ]
"#};

#[test]
fn build_writes_blob() {
    let dir = tempdir().unwrap();
    let defs = dir.path().join("defs.json");
    let output = dir.path().join("param_fields.bin");
    fs::write(&defs, DEFS).unwrap();

    let written = execute(&BuildArgs {
        defs: vec![defs],
        output: output.clone(),
    })
    .unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), written);

    let metadata = Metadata::load(&bytes).unwrap();
    assert_eq!(metadata.len(), 1);
    assert!(metadata.find("EXAMPLE_PARAM_ST").is_some());
    assert!(metadata.find("PLAIN_PARAM_ST").is_none());
}

#[test]
fn build_failure_writes_nothing() {
    let dir = tempdir().unwrap();
    let defs = dir.path().join("defs.json");
    let output = dir.path().join("param_fields.bin");
    fs::write(
        &defs,
        r#"{ "param_type": "BAD_ST", "fields": [{ "name": "x", "type": "u8", "bit_size": 12 }] }"#,
    )
    .unwrap();

    let err = execute(&BuildArgs {
        defs: vec![defs],
        output: output.clone(),
    })
    .unwrap_err();

    assert!(matches!(err, CliError::Compile(_)));
    assert_eq!(
        err.to_string(),
        "BAD_ST.x: bit size 12 does not fit in a u8 field"
    );
    assert!(!output.exists());
}

#[test]
fn build_failure_keeps_previous_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("param_fields.bin");
    fs::write(&output, b"previous").unwrap();

    let result = execute(&BuildArgs {
        defs: vec![dir.path().join("missing.json")],
        output: output.clone(),
    });

    assert!(result.is_err());
    assert_eq!(fs::read(&output).unwrap(), b"previous");
}

#[test]
fn dump_built_blob() {
    let dir = tempdir().unwrap();
    let defs = dir.path().join("defs.json");
    let output = dir.path().join("out.bin");
    fs::write(&defs, DEFS).unwrap();
    execute(&BuildArgs {
        defs: vec![defs],
        output: output.clone(),
    })
    .unwrap();

    let text = dump::execute(&DumpArgs {
        blob: output,
        color: false,
    })
    .unwrap();

    assert_eq!(
        text,
        indoc! {"
            [entries]
            0  EXAMPLE_PARAM_ST  name 0x0040  ranges 0x0010

            [EXAMPLE_PARAM_ST]
              #1  word 0x0000  mask 0x0000000000007f00
              #2  word 0x0000  mask 0x000000ffffff8000
        "}
    );
}

#[test]
fn dump_rejects_truncated_blob() {
    let dir = tempdir().unwrap();
    let blob = dir.path().join("short.bin");
    fs::write(&blob, [0x40, 0, 0, 0]).unwrap();

    let err = dump::execute(&DumpArgs { blob, color: false }).unwrap_err();
    assert!(matches!(err, CliError::Blob { .. }));
}
