//! Header-based column resolution.
//!
//! Exported tables name the same column differently across tool versions
//! ("PValue" vs "P-Value"). Each canonical field carries the enumerated
//! spellings it accepts; anything else is a format error, not a guess.

use std::path::Path;

use annot_model::{AnnotError, Result};

/// A canonical column name plus the header spellings accepted for it.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub canonical: &'static str,
    pub accepted: &'static [&'static str],
}

impl ColumnSpec {
    pub const fn new(canonical: &'static str, accepted: &'static [&'static str]) -> Self {
        ColumnSpec { canonical, accepted }
    }
}

/// Index of the first header equal to one of the accepted spellings.
/// Headers are expected to be normalized already (see `table::normalize_header`).
pub fn resolve_column(headers: &[String], spec: &ColumnSpec) -> Option<usize> {
    headers
        .iter()
        .position(|header| spec.accepted.contains(&header.as_str()))
}

/// Like [`resolve_column`], but a missing column aborts with a format error.
pub fn require_column(path: &Path, headers: &[String], spec: &ColumnSpec) -> Result<usize> {
    resolve_column(headers, spec).ok_or_else(|| {
        AnnotError::format(
            path,
            format!("missing required column: {}", spec.canonical),
        )
    })
}

/// Indices of all headers starting with `prefix`, in table order.
pub fn prefixed_columns(headers: &[String], prefix: &str) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.starts_with(prefix))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PVALUE: ColumnSpec = ColumnSpec::new("PValue", &["PValue", "P-Value", "p-value"]);

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_accepted_spellings() {
        let table = headers(&["Term", "P-Value", "FDR"]);
        assert_eq!(resolve_column(&table, &PVALUE), Some(1));
    }

    #[test]
    fn spelling_match_is_exact() {
        let table = headers(&["Term", "PVALUE", "FDR"]);
        assert_eq!(resolve_column(&table, &PVALUE), None);
    }

    #[test]
    fn missing_column_is_format_error() {
        let table = headers(&["Term", "Count"]);
        let err = require_column(Path::new("chart.tsv"), &table, &PVALUE).unwrap_err();
        assert!(matches!(err, AnnotError::Format { .. }));
        assert!(format!("{err}").contains("PValue"));
    }

    #[test]
    fn prefix_scan_keeps_table_order() {
        let table = headers(&["Protein AC", "SpC_1", "TIC_1", "SpC_2"]);
        assert_eq!(prefixed_columns(&table, "SpC"), vec![1, 3]);
        assert_eq!(prefixed_columns(&table, "TIC"), vec![2]);
    }
}
