//! Per-protein quantification summary.
//!
//! Every column whose header starts with `SpC` or `TIC` is a sample
//! column; a protein whose rounded group means both reach their
//! thresholds counts as changed.

use std::path::{Path, PathBuf};

use annot_ingest::{
    ColumnSpec, Delimiter, prefixed_columns, read_table, require_column, write_table,
};
use annot_model::{AnnotError, Result};
use tracing::{debug, trace};

/// Suffix for the per-protein summary CSV.
pub const SUMMARY_SUFFIX: &str = "_quant_summary.csv";
/// Suffix for the changed-identifier list.
pub const CHANGED_SUFFIX: &str = "_changed_proteins.txt";

/// Identifier column spellings shared by the quantification tools.
pub const PROTEIN_COLUMN: ColumnSpec = ColumnSpec::new(
    "ProteinAC",
    &["ProteinAC", "Protein AC", "Protein.AC", "Accession"],
);

/// Means a protein must reach, in both signal families, to be changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantThresholds {
    pub min_spc: f64,
    pub min_tic: f64,
}

impl Default for QuantThresholds {
    fn default() -> Self {
        QuantThresholds {
            min_spc: 2.0,
            min_tic: 2.0,
        }
    }
}

/// Column layout of the quantification table.
#[derive(Debug, Clone)]
pub struct QuantColumns {
    pub protein: usize,
    pub spc: Vec<usize>,
    pub tic: Vec<usize>,
}

/// Resolve the identifier column and the SpC/TIC sample groups. Each
/// group needs at least one column or the table is not a
/// quantification export.
pub fn resolve_quant_columns(path: &Path, headers: &[String]) -> Result<QuantColumns> {
    let protein = require_column(path, headers, &PROTEIN_COLUMN)?;
    let spc = prefixed_columns(headers, "SpC");
    let tic = prefixed_columns(headers, "TIC");
    if spc.is_empty() {
        return Err(AnnotError::format(path, "no SpC sample columns"));
    }
    if tic.is_empty() {
        return Err(AnnotError::format(path, "no TIC sample columns"));
    }
    Ok(QuantColumns { protein, spc, tic })
}

/// One summarized protein.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinQuant {
    pub protein: String,
    pub mean_spc: f64,
    pub mean_tic: f64,
    pub changed: bool,
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean over the numeric cells of a sample group. Empty and non-numeric
/// cells are excluded rather than zeroed; a group with no numeric cells
/// means 0.0. The result is rounded before any threshold test.
fn group_mean(row: &[String], indices: &[usize]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &index in indices {
        let Some(cell) = row.get(index) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        if let Ok(value) = cell.parse::<f64>() {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}

/// Summarize data rows in input order; rows without an identifier are
/// skipped.
pub fn summarize_rows(
    columns: &QuantColumns,
    rows: &[Vec<String>],
    thresholds: &QuantThresholds,
) -> Vec<ProteinQuant> {
    let mut proteins = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let protein = row.get(columns.protein).map(String::as_str).unwrap_or("");
        if protein.is_empty() {
            trace!(row = index, "skipped row without identifier");
            continue;
        }
        let mean_spc = group_mean(row, &columns.spc);
        let mean_tic = group_mean(row, &columns.tic);
        proteins.push(ProteinQuant {
            protein: protein.to_string(),
            mean_spc,
            mean_tic,
            changed: mean_spc >= thresholds.min_spc && mean_tic >= thresholds.min_tic,
        });
    }
    proteins
}

fn suffixed_path(input: &Path, out_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let file_name = format!("{stem}{suffix}");
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Outcome of one summary run.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub summary: PathBuf,
    pub changed: PathBuf,
    pub rows_read: usize,
    pub proteins: usize,
    pub changed_count: usize,
}

/// Summarize one quantification table into `<stem>_quant_summary.csv`
/// plus `<stem>_changed_proteins.txt` (changed identifiers, input order).
pub fn summarize_file(
    input: &Path,
    delimiter: Delimiter,
    thresholds: &QuantThresholds,
    out_dir: Option<&Path>,
) -> Result<SummaryOutcome> {
    let table = read_table(input, delimiter)?;
    let columns = resolve_quant_columns(input, &table.headers)?;
    let proteins = summarize_rows(&columns, &table.rows, thresholds);

    let headers: Vec<String> = ["Protein", "MeanSpC", "MeanTIC", "Changed"]
        .iter()
        .map(|header| (*header).to_string())
        .collect();
    let rows: Vec<Vec<String>> = proteins
        .iter()
        .map(|protein| {
            vec![
                protein.protein.clone(),
                format!("{:.2}", protein.mean_spc),
                format!("{:.2}", protein.mean_tic),
                if protein.changed { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    let changed: Vec<&str> = proteins
        .iter()
        .filter(|protein| protein.changed)
        .map(|protein| protein.protein.as_str())
        .collect();
    let mut changed_text = changed.join("\n");
    if !changed_text.is_empty() {
        changed_text.push('\n');
    }

    let summary = suffixed_path(input, out_dir, SUMMARY_SUFFIX);
    let changed_path = suffixed_path(input, out_dir, CHANGED_SUFFIX);
    write_table(&summary, Delimiter::Comma, &headers, &rows)?;
    std::fs::write(&changed_path, changed_text)?;
    debug!(
        path = %input.display(),
        rows = table.rows.len(),
        proteins = proteins.len(),
        changed = changed.len(),
        "summarized quantification table"
    );
    Ok(SummaryOutcome {
        summary,
        changed: changed_path,
        rows_read: table.rows.len(),
        proteins: proteins.len(),
        changed_count: changed.len(),
    })
}
