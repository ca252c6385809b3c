//! COG workflow stages chained by the CLI.
//!
//! The pipeline runs two stages in order:
//! 1. **Extract**: read each annotation table and write its category
//!    listing file
//! 2. **Compare**: re-parse the fresh listings and write one report of
//!    the per-category unique protein sets
//!
//! Each stage is also reachable on its own through `cog extract` and
//! `cog compare`; the functions here are the shared implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use annot_cog::{
    ComparisonSource, ExtractOptions, compare_sources, default_listing_path, listing_from_rows,
    render_comparison, write_listing,
};
use annot_ingest::{Delimiter, read_raw_rows};
use annot_model::{AnnotError, Result};
use tracing::{debug, info, info_span};

/// Default comparison report name, placed beside the first input.
pub const DEFAULT_REPORT_NAME: &str = "COG_comparison_results.txt";

/// One extracted listing and its counts.
#[derive(Debug, Clone)]
pub struct ExtractOutcome {
    pub input: PathBuf,
    pub listing: PathBuf,
    /// Raw table rows, including any skipped leading rows.
    pub rows_read: usize,
    pub labels: usize,
    pub assignments: usize,
}

/// Per-source counts going into a comparison.
#[derive(Debug, Clone)]
pub struct CompareSourceOutcome {
    pub input: PathBuf,
    pub labels: usize,
    pub assignments: usize,
}

/// A written comparison report.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    pub report: PathBuf,
    /// Labels present in the union of all sources.
    pub labels: usize,
    pub sources: Vec<CompareSourceOutcome>,
}

/// Everything one full pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub extracts: Vec<ExtractOutcome>,
    pub compare: CompareOutcome,
}

/// Extract one annotation table into a listing file.
///
/// The listing goes to `out` when given, otherwise to the default
/// `<stem>_proteins_per_COG.txt` name, either under `out_dir` or beside
/// the input.
pub fn extract_to_listing(
    input: &Path,
    delimiter: Delimiter,
    options: &ExtractOptions,
    out: Option<&Path>,
    out_dir: Option<&Path>,
) -> Result<ExtractOutcome> {
    let extract_span = info_span!("extract", input = %input.display());
    let _extract_guard = extract_span.enter();
    let start = Instant::now();

    let rows = read_raw_rows(input, delimiter)?;
    let listing = listing_from_rows(&rows, options);
    let listing_path = match (out, out_dir) {
        (Some(path), _) => path.to_path_buf(),
        (None, dir) => {
            let default = default_listing_path(input);
            match (dir, default.file_name()) {
                (Some(dir), Some(name)) => dir.join(name),
                _ => default,
            }
        }
    };
    write_listing(&listing, &listing_path)?;
    info!(
        input = %input.display(),
        listing = %listing_path.display(),
        rows = rows.len(),
        labels = listing.label_count(),
        assignments = listing.assignment_count(),
        duration_ms = start.elapsed().as_millis(),
        "listing written"
    );
    Ok(ExtractOutcome {
        input: input.to_path_buf(),
        listing: listing_path,
        rows_read: rows.len(),
        labels: listing.label_count(),
        assignments: listing.assignment_count(),
    })
}

/// Compare listing files and write the report to `out`.
///
/// The input count is checked before anything is read, and the report
/// text is rendered in full before it is written, so a failing input
/// never leaves a partial report behind.
pub fn compare_to_report(inputs: &[PathBuf], out: &Path) -> Result<CompareOutcome> {
    if inputs.len() < 2 {
        return Err(AnnotError::empty_input_set(2, inputs.len()));
    }
    let compare_span = info_span!("compare", sources = inputs.len());
    let _compare_guard = compare_span.enter();
    let start = Instant::now();

    let mut sources = Vec::with_capacity(inputs.len());
    let mut outcomes = Vec::with_capacity(inputs.len());
    for input in inputs {
        let source = ComparisonSource::from_file(input)?;
        debug!(
            input = %input.display(),
            labels = source.listing.label_count(),
            "loaded comparison source"
        );
        outcomes.push(CompareSourceOutcome {
            input: input.clone(),
            labels: source.listing.label_count(),
            assignments: source.listing.assignment_count(),
        });
        sources.push(source);
    }
    let rows = compare_sources(&sources)?;
    std::fs::write(out, render_comparison(&rows))?;
    info!(
        report = %out.display(),
        sources = inputs.len(),
        labels = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "comparison report written"
    );
    Ok(CompareOutcome {
        report: out.to_path_buf(),
        labels: rows.len(),
        sources: outcomes,
    })
}

/// Default report path beside the first input.
pub fn default_report_path(first_input: &Path) -> PathBuf {
    first_input.with_file_name(DEFAULT_REPORT_NAME)
}

/// Extract every table, then compare the fresh listings.
///
/// The input count is checked up front: a single table writes no
/// listing at all rather than a listing without a report.
pub fn run_pipeline(
    inputs: &[PathBuf],
    delimiter: Delimiter,
    options: &ExtractOptions,
    listing_dir: Option<&Path>,
    report: &Path,
) -> Result<PipelineOutcome> {
    if inputs.len() < 2 {
        return Err(AnnotError::empty_input_set(2, inputs.len()));
    }
    let pipeline_span = info_span!("cog_pipeline", inputs = inputs.len());
    let _pipeline_guard = pipeline_span.enter();

    let mut extracts = Vec::with_capacity(inputs.len());
    for input in inputs {
        extracts.push(extract_to_listing(
            input,
            delimiter,
            options,
            None,
            listing_dir,
        )?);
    }
    let listings: Vec<PathBuf> = extracts
        .iter()
        .map(|outcome| outcome.listing.clone())
        .collect();
    let compare = compare_to_report(&listings, report)?;
    Ok(PipelineOutcome { extracts, compare })
}
