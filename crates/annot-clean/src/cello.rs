//! CELLO localization report cleaner.
//!
//! CELLO pads its result rows with scoring columns; only the trailing
//! identifier/localization pair is worth keeping.

use std::path::Path;

use annot_ingest::read_lines;
use annot_model::Result;
use tracing::debug;

use crate::output::{CleanOutcome, render_lines, suffixed_path};

/// Suffix appended to the input stem for the cleaned report.
pub const CLEANED_SUFFIX: &str = "_cleaned.txt";

/// Reduce report lines to `id\tlocalization` pairs.
///
/// A line splits on ASCII whitespace; anything with fewer than two
/// fields is skipped, otherwise the last two fields survive.
pub fn clean_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [.., id, localization] => Some(format!("{id}\t{localization}")),
                _ => None,
            }
        })
        .collect()
}

/// Clean one CELLO report into `<stem>_cleaned.txt`.
pub fn clean_cello_file(input: &Path, out_dir: Option<&Path>) -> Result<CleanOutcome> {
    let lines = read_lines(input)?;
    let records = clean_lines(&lines);
    let output = suffixed_path(input, out_dir, CLEANED_SUFFIX);
    std::fs::write(&output, render_lines(&records))?;
    debug!(
        path = %input.display(),
        lines = lines.len(),
        records = records.len(),
        "cleaned CELLO report"
    );
    Ok(CleanOutcome {
        output,
        lines_read: lines.len(),
        records: records.len(),
    })
}
