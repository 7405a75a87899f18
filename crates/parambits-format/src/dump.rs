//! Human-readable metadata dump for debugging.
//!
//! ```text
//! [entries]
//! 0  EXAMPLE_PARAM_ST  name 0x0040  ranges 0x0010
//!
//! [EXAMPLE_PARAM_ST]
//!   #1  word 0x0000  mask 0x0000000000007f00
//!   #2  word 0x0000  mask 0x000000ffffff8000
//! ```

use std::fmt::Write as _;

use super::metadata::{EntryView, Metadata};

/// ANSI color palette for dump output.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}

/// Render every region of a loaded blob.
pub fn dump(metadata: &Metadata<'_>, colors: Colors) -> String {
    let mut out = String::new();

    dump_entries(&mut out, metadata, colors);
    for entry in metadata.entries() {
        out.push('\n');
        dump_run(&mut out, entry, colors);
    }

    out
}

fn dump_entries(out: &mut String, metadata: &Metadata<'_>, colors: Colors) {
    let Colors { name: hl, dim, reset } = colors;
    let index_width = width_for_count(metadata.len());
    let name_width = metadata.entries().map(|e| e.name.len()).max().unwrap_or(0);

    writeln!(out, "[entries]").unwrap();
    for entry in metadata.entries() {
        writeln!(
            out,
            "{:>index_width$}  {hl}{:<name_width$}{reset}  {dim}name {:#06x}  ranges {:#06x}{reset}",
            entry.index, entry.name, entry.entry.name_offset, entry.entry.ranges_offset,
        )
        .unwrap();
    }
}

fn dump_run(out: &mut String, entry: &EntryView<'_>, colors: Colors) {
    let Colors { name: hl, dim, reset } = colors;

    writeln!(out, "[{hl}{}{reset}]", entry.name).unwrap();
    for range in entry.ranges.iter() {
        writeln!(
            out,
            "  #{}  {dim}word{reset} {:#06x}  {dim}mask{reset} {:#018x}",
            range.uid, range.offset, range.mask,
        )
        .unwrap();
    }
}

/// Digits needed to print indices below `count`.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).to_string().len()
}
