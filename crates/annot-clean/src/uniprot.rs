//! UniProt flat-file to FASTA extraction.
//!
//! Flat-text entries open with an `ID` line, carry their residues after
//! the `SQ` line, and close with `//`. Only the accession (the entry
//! name's first `_`-delimited token) and the sequence survive.

use std::path::Path;

use annot_ingest::read_lines;
use annot_model::Result;
use tracing::debug;

use crate::output::{CleanOutcome, suffixed_path};

/// Suffix appended to the input stem for the FASTA output.
pub const FASTA_SUFFIX: &str = "_cleaned.fasta";

/// One extracted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub accession: String,
    pub sequence: String,
}

/// Scan flat-file lines into FASTA records.
///
/// `ID` opens an entry and flushes a complete pending one; `SQ` arms
/// sequence capture; armed lines contribute only their alphabetic
/// characters; `//` flushes when both accession and a non-empty sequence
/// are held and always clears state. A truncated trailing entry (no
/// terminator) is dropped.
pub fn scan_records(lines: &[String]) -> Vec<FastaRecord> {
    let mut records = Vec::new();
    let mut accession: Option<String> = None;
    let mut sequence = String::new();
    let mut in_sequence = false;
    for raw in lines {
        let line = raw.trim();
        if line.starts_with("ID") {
            flush(&mut records, accession.as_deref(), &sequence);
            accession = line
                .split_whitespace()
                .nth(1)
                .map(|token| token.split('_').next().unwrap_or(token).to_string());
            sequence.clear();
            in_sequence = false;
        } else if line.starts_with("//") {
            flush(&mut records, accession.as_deref(), &sequence);
            accession = None;
            sequence.clear();
            in_sequence = false;
        } else if line.starts_with("SQ") {
            in_sequence = true;
        } else if in_sequence {
            sequence.extend(line.chars().filter(|c| c.is_ascii_alphabetic()));
        }
    }
    records
}

fn flush(records: &mut Vec<FastaRecord>, accession: Option<&str>, sequence: &str) {
    if let Some(accession) = accession
        && !sequence.is_empty()
    {
        records.push(FastaRecord {
            accession: accession.to_string(),
            sequence: sequence.to_string(),
        });
    }
}

/// Render records as FASTA text.
pub fn render_fasta(records: &[FastaRecord]) -> String {
    let mut text = String::new();
    for record in records {
        text.push('>');
        text.push_str(&record.accession);
        text.push('\n');
        text.push_str(&record.sequence);
        text.push('\n');
    }
    text
}

/// Extract one flat file's records into `<stem>_cleaned.fasta`.
pub fn clean_uniprot_file(input: &Path, out_dir: Option<&Path>) -> Result<CleanOutcome> {
    let lines = read_lines(input)?;
    let records = scan_records(&lines);
    let output = suffixed_path(input, out_dir, FASTA_SUFFIX);
    std::fs::write(&output, render_fasta(&records))?;
    debug!(
        path = %input.display(),
        lines = lines.len(),
        records = records.len(),
        "extracted FASTA records"
    );
    Ok(CleanOutcome {
        output,
        lines_read: lines.len(),
        records: records.len(),
    })
}
