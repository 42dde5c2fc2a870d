//! Sequential batch conversion: every `.xml` entry of an [`InputSource`]
//! becomes one markdown file per successfully extracted record type.
//!
//! Failures on individual entries (missing `<recordType>` root, malformed
//! XML, unreadable entry, unwritable output file) are reported and skipped;
//! processing continues with the next entry.

use crate::parser::{InputSource, RecordTypeParser};
use crate::render::{render, to_snake_case};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Outcome of one batch run.
#[derive(Debug)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    /// Markdown files written, in processing order.
    pub outputs: Vec<Utf8PathBuf>,
}

impl BatchSummary {
    /// True when at least one entry converted successfully.
    pub fn any_succeeded(&self) -> bool {
        self.processed > 0
    }
}

/// Convert every `.xml` entry of `source`, writing
/// `data-model-context-<snake_case name>.md` files into `out_dir`.
pub fn process_source<S: InputSource>(source: S, out_dir: &Utf8Path) -> Result<BatchSummary> {
    std::fs::create_dir_all(out_dir.as_std_path())
        .with_context(|| format!("Create output dir {}", out_dir))?;

    let mut parser = RecordTypeParser::new(source);
    let entries = parser.list_xml_entries()?;
    if entries.is_empty() {
        println!("No .xml files found");
    }

    let mut summary = BatchSummary {
        processed: 0,
        skipped: 0,
        outputs: Vec::new(),
    };
    for path in &entries {
        match convert_entry(&mut parser, path, out_dir) {
            Ok(out_path) => {
                println!("OK: {} -> {}", path, out_path);
                summary.processed += 1;
                summary.outputs.push(out_path);
            }
            Err(e) => {
                eprintln!("[recordtype-md] FAIL: {}: {:#}", path, e);
                summary.skipped += 1;
            }
        }
    }

    println!(
        "Processed: {} file(s), skipped {}",
        summary.processed, summary.skipped
    );
    Ok(summary)
}

/// Extract, render and write one entry. Any failure (no record type root,
/// malformed XML, unreadable entry, unwritable output) fails only this
/// entry; the batch loop reports it and moves on.
fn convert_entry<S: InputSource>(
    parser: &mut RecordTypeParser<S>,
    path: &Utf8Path,
    out_dir: &Utf8Path,
) -> Result<Utf8PathBuf> {
    let rt = parser.extract_entry(path)?;
    let out_path = out_dir.join(format!("data-model-context-{}.md", to_snake_case(&rt.name)));
    let md = render(std::slice::from_ref(&rt), None);
    std::fs::write(out_path.as_std_path(), md).with_context(|| format!("Write {}", out_path))?;
    Ok(out_path)
}
