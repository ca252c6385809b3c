//! Building a category listing from a protein-annotation table.

use std::path::{Path, PathBuf};

use annot_ingest::{Delimiter, read_raw_rows};
use annot_model::{AnnotationRecord, CategoryListing, Result};
use tracing::{debug, trace};

/// Suffix appended to the input stem for the default listing path.
pub const LISTING_SUFFIX: &str = "_proteins_per_COG.txt";

/// Row layout of the annotation table.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Leading header/metadata rows to skip before data starts.
    pub skip_rows: usize,
    /// 0-based column holding the protein identifier.
    pub protein_column: usize,
    /// 0-based column holding the raw category codes.
    pub category_column: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            skip_rows: 3,
            protein_column: 0,
            category_column: 6,
        }
    }
}

/// Build a listing from raw table rows.
///
/// A row is skipped when it precedes the data offset, lacks the identifier
/// column, or its identifier is empty or starts with `#`. A missing or
/// empty category cell assigns the protein to the `-` sentinel.
pub fn listing_from_rows(rows: &[Vec<String>], options: &ExtractOptions) -> CategoryListing {
    let mut listing = CategoryListing::new();
    for (index, row) in rows.iter().enumerate().skip(options.skip_rows) {
        let protein = row
            .get(options.protein_column)
            .map(String::as_str)
            .unwrap_or("")
            .trim();
        if protein.is_empty() || protein.starts_with('#') {
            trace!(row = index, "skipped row without usable identifier");
            continue;
        }
        let raw = row
            .get(options.category_column)
            .map(String::as_str)
            .unwrap_or("");
        listing.assign_record(&AnnotationRecord::new(protein, raw));
    }
    listing
}

/// Read an annotation table and build its category listing.
pub fn extract_listing(
    path: &Path,
    delimiter: Delimiter,
    options: &ExtractOptions,
) -> Result<CategoryListing> {
    let rows = read_raw_rows(path, delimiter)?;
    let listing = listing_from_rows(&rows, options);
    debug!(
        path = %path.display(),
        rows = rows.len(),
        labels = listing.label_count(),
        assignments = listing.assignment_count(),
        "built category listing"
    );
    Ok(listing)
}

/// Default listing path: `<input-stem>_proteins_per_COG.txt` beside the input.
pub fn default_listing_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("listing");
    input.with_file_name(format!("{stem}{LISTING_SUFFIX}"))
}
